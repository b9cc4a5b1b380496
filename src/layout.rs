//! Layout module for tracking UI component regions
//!
//! The slider's pointer math needs the rect the track was last rendered into.
//! `LayoutRegions` records component rects at render time, and `region_at()`
//! answers which component is under a given screen position.

use ratatui::layout::{Position, Rect};

/// UI components that participate in mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SliderTrack,
}

/// Rects of rendered components, refreshed every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct LayoutRegions {
    pub slider_track: Option<Rect>,
}

/// Determine which component is at the given screen position.
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let position = Position::new(column, row);

    if regions
        .slider_track
        .is_some_and(|rect| rect.contains(position))
    {
        return Some(Region::SliderTrack);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_at_with_no_recorded_rects() {
        let regions = LayoutRegions::default();
        assert_eq!(region_at(&regions, 5, 5), None);
    }

    #[test]
    fn test_region_at_inside_track() {
        let regions = LayoutRegions {
            slider_track: Some(Rect::new(2, 3, 20, 1)),
        };

        assert_eq!(region_at(&regions, 2, 3), Some(Region::SliderTrack));
        assert_eq!(region_at(&regions, 21, 3), Some(Region::SliderTrack));
    }

    #[test]
    fn test_region_at_outside_track() {
        let regions = LayoutRegions {
            slider_track: Some(Rect::new(2, 3, 20, 1)),
        };

        // One past the right edge, and the row above
        assert_eq!(region_at(&regions, 22, 3), None);
        assert_eq!(region_at(&regions, 10, 2), None);
    }
}

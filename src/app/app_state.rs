use std::cell::Cell;
use std::rc::Rc;

use crate::config::Config;
use crate::layout::LayoutRegions;
use crate::slider::Slider;

pub struct App {
    pub slider: Slider,
    pub layout_regions: LayoutRegions,
    value: Rc<Cell<i64>>,
    should_quit: bool,
    dirty: bool,
}

impl App {
    pub fn new(min: f64, max: f64, initial_value: f64, config: &Config) -> Self {
        let value = Rc::new(Cell::new(0));
        let reported = Rc::clone(&value);

        let mut slider = Slider::new(min, max, initial_value)
            .with_step(config.slider.step)
            .on_change(move |new_value| {
                log::debug!("slider reported value {new_value}");
                reported.set(new_value);
            });
        slider.set_focused(true);

        Self {
            slider,
            layout_regions: LayoutRegions::default(),
            value,
            should_quit: false,
            dirty: true,
        }
    }

    /// Latest value reported by the slider's change callback.
    pub fn value(&self) -> i64 {
        self.value.get()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_render(&self) -> bool {
        self.dirty || self.slider.needs_render()
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
        self.slider.clear_dirty();
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlidrError {
    #[error("Invalid range: max ({max}) must be greater than min ({min})")]
    InvalidRange { min: f64, max: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

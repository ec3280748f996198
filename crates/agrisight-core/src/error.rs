//! Error Types for AgriSight

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AgriError>;

#[derive(Error, Debug)]
pub enum AgriError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("No image provided")]
    MissingImage,

    #[error("Image too large: {size} bytes (max {max})")]
    ImageTooLarge { size: usize, max: usize },

    #[error("File must be an image, got {0}")]
    UnsupportedImageType(String),

    #[error("Advisory source error: {0}")]
    Source(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AgriError {
    /// Convert to a message safe to show an end user.
    pub fn user_message(&self) -> String {
        match self {
            AgriError::MissingFields(_)
            | AgriError::MissingImage
            | AgriError::ImageTooLarge { .. }
            | AgriError::UnsupportedImageType(_) => self.to_string(),
            AgriError::Source(_) | AgriError::Serialization(_) => {
                "Internal server error".into()
            }
        }
    }
}

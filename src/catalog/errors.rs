use thiserror::Error;

#[derive(Error, Debug)]
pub enum HamperError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog has no hampers")]
    EmptyCatalog,

    #[error("hamper '{0}' has an empty gallery")]
    EmptyGallery(String),

    #[error("hamper '{name}' has rating {rating}, expected 0.0..=5.0")]
    RatingOutOfRange { name: String, rating: f32 },

    #[error("duplicate hamper id: {0}")]
    DuplicateId(u32),
}

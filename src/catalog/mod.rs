pub mod errors;
pub mod models;
pub mod store;

pub use errors::HamperError;
pub use models::Hamper;
pub use store::Catalog;

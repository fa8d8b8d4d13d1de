pub mod error;
pub mod health;
pub mod images;
pub mod squads;

pub use error::{error_response, AppError};

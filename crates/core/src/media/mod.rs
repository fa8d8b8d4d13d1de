mod operations;
mod types;

pub use operations::{delete_confirmation, sort_media_names};
pub use types::{ImageExtension, MediaFile};

//! Domain entity definitions.

mod category;
mod options;

pub use category::ImageCategory;
pub use options::{DEFAULT_QUALITY, ResolveOptions};

//! Content module - handles posts and markdown processing

mod builder;
pub mod loader;
pub mod markdown;
mod post;
pub mod transform;

pub use builder::{date_from_stem, split_title, BuildError, PostBuilder};
pub use loader::ContentLoader;
pub use post::Post;

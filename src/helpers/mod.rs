//! Helper functions for templates and generated links

mod url;

pub use url::*;

//! Post model

use serde::Serialize;
use std::path::{Path, PathBuf};

/// A blog post built from one markdown source file
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Post title, taken from a leading `# ` line (empty if there is none)
    pub title: String,

    /// Date prefix of the file name, verbatim (empty for short names)
    pub date: String,

    /// Markdown body, with the title line already removed
    pub raw: String,

    /// Rendered HTML body
    pub content: String,

    /// Whether the body uses `$` math and needs the math script
    pub has_math: bool,

    /// Whether the body embeds tweets and needs the widget script
    pub has_embed: bool,

    /// Full source file path
    pub source: PathBuf,

    /// Full output file path
    pub output: PathBuf,
}

impl Post {
    /// File name of the source, e.g. `2024-03-15-hello.md`
    pub fn source_name(&self) -> String {
        file_name(&self.source)
    }

    /// File name of the generated page, e.g. `2024-03-15-hello.html`
    pub fn output_name(&self) -> String {
        file_name(&self.output)
    }

    /// Title for listings, falling back to the file stem for untitled posts
    pub fn display_title(&self) -> String {
        if self.title.is_empty() {
            self.source
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        } else {
            self.title.clone()
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str) -> Post {
        Post {
            title: title.to_string(),
            date: "2024-03-15".to_string(),
            raw: String::new(),
            content: String::new(),
            has_math: false,
            has_embed: false,
            source: PathBuf::from("/site/content/2024-03-15-hello.md"),
            output: PathBuf::from("/site/writing/2024-03-15-hello.html"),
        }
    }

    #[test]
    fn test_file_names() {
        let post = post("Hello");
        assert_eq!(post.source_name(), "2024-03-15-hello.md");
        assert_eq!(post.output_name(), "2024-03-15-hello.html");
    }

    #[test]
    fn test_display_title_fallback() {
        assert_eq!(post("Hello").display_title(), "Hello");
        assert_eq!(post("").display_title(), "2024-03-15-hello");
    }
}

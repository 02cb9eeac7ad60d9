//! URL helper functions for links between generated files

use std::path::{Component, Path};

/// Turn a filesystem path into a `/`-separated URL path
///
/// # Examples
/// ```ignore
/// path_to_url(Path::new("/site/writing")) // -> "/site/writing"
/// ```
pub fn path_to_url(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();
    format!("/{}", parts.join("/"))
}

/// Calculate relative URL from one path to another
///
/// # Examples
/// ```ignore
/// relative_url("/foo/bar/", "/css/style.css") // -> "../../css/style.css"
/// ```
pub fn relative_url(from: &str, to: &str) -> String {
    let from_parts: Vec<&str> = from.split('/').filter(|p| !p.is_empty()).collect();
    let to_parts: Vec<&str> = to.split('/').filter(|p| !p.is_empty()).collect();

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = vec![".."; from_parts.len() - common];
    parts.extend(&to_parts[common..]);

    if parts.is_empty() {
        "./".to_string()
    } else {
        parts.join("/")
    }
}

/// Relative href from a page in `from_dir` to the directory `to_dir`, ending in `/`
///
/// # Examples
/// ```ignore
/// dir_href(Path::new("/site/writing"), Path::new("/site")) // -> "../"
/// ```
pub fn dir_href(from_dir: &Path, to_dir: &Path) -> String {
    let href = relative_url(&path_to_url(from_dir), &path_to_url(to_dir));
    if href.ends_with('/') {
        href
    } else {
        format!("{}/", href)
    }
}

/// Relative href from a page in `from_dir` to `file`
pub fn file_href(from_dir: &Path, file: &Path) -> String {
    relative_url(&path_to_url(from_dir), &path_to_url(file))
}

//! List site content

use anyhow::Result;

use crate::content::{ContentLoader, Post};
use crate::Site;

/// Print posts in listing order
pub fn run(site: &Site) -> Result<()> {
    tracing::debug!("Listing posts for site at {:?}", site.base_dir);
    let posts = ContentLoader::new(&site.config).load_posts()?;

    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!("{}", format_line(post));
    }

    Ok(())
}

fn format_line(post: &Post) -> String {
    let date = if post.date.is_empty() {
        "----------"
    } else {
        post.date.as_str()
    };
    format!("  {} - {} [{}]", date, post.display_title(), post.source_name())
}

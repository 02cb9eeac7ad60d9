//! Built-in page templates using Tera template engine
//!
//! The post and index templates are embedded directly in the binary.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Write;
use tera::{Context, Tera};

use crate::config::Config;
use crate::content::Post;
use crate::helpers::{dir_href, file_href};

/// Template renderer with the embedded writing theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Post bodies are already HTML
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("post.html", include_str!("writing/post.html")),
            ("index.html", include_str!("writing/index.html")),
        ])?;

        tera.register_filter("date_format", date_format_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render the full page for one post
    pub fn render_post(&self, post: &Post, config: &Config) -> Result<String> {
        let page = PostPage::new(post, config);
        self.render("post.html", &Context::from_serialize(&page)?)
    }

    /// Render the index page listing `posts` in the given order
    pub fn render_index(&self, posts: &[Post], config: &Config) -> Result<String> {
        let page = IndexPage::new(posts, config);
        self.render("index.html", &Context::from_serialize(&page)?)
    }
}

/// Tera filter: format a `YYYY-MM-DD` date string with a chrono format.
///
/// Values that aren't dates, an empty format, or an invalid format leave the
/// value unchanged.
fn date_format_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let format = match args.get("format") {
        Some(val) => tera::try_get_value!("date_format", "format", String, val),
        None => String::new(),
    };

    Ok(tera::Value::String(format_date(&s, &format)))
}

/// Reformat a `YYYY-MM-DD` date, falling back to the input as-is
pub fn format_date(date: &str, format: &str) -> String {
    if format.is_empty() {
        return date.to_string();
    }
    let Ok(parsed) = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        return date.to_string();
    };

    let mut out = String::new();
    match write!(out, "{}", parsed.format(format)) {
        Ok(()) => out,
        Err(_) => {
            tracing::warn!("Invalid date format {:?}, keeping {:?}", format, date);
            date.to_string()
        }
    }
}

/// Template context for a post page
#[derive(Debug, Clone, Serialize)]
pub struct PostPage<'a> {
    pub title: &'a str,
    pub date: &'a str,
    pub content: &'a str,
    pub has_math: bool,
    pub has_embed: bool,
    pub math_script: &'a str,
    /// Relative href from the post page to the root directory, ending in `/`
    pub root: String,
    pub index_name: &'a str,
}

impl<'a> PostPage<'a> {
    pub fn new(post: &'a Post, config: &'a Config) -> Self {
        let page_dir = post
            .output
            .parent()
            .unwrap_or(config.output_dir.as_path());
        Self {
            title: &post.title,
            date: &post.date,
            content: &post.content,
            has_math: post.has_math,
            has_embed: post.has_embed,
            math_script: &config.math_script,
            root: dir_href(page_dir, &config.root_dir),
            index_name: &config.index_name,
        }
    }
}

/// Template context for the index page
#[derive(Debug, Clone, Serialize)]
pub struct IndexPage {
    pub title: String,
    pub date_format: String,
    pub posts: Vec<IndexEntry>,
}

/// One line of the index listing
#[derive(Debug, Clone, Serialize)]
pub struct IndexEntry {
    pub title: String,
    pub date: String,
    pub href: String,
}

impl IndexPage {
    pub fn new(posts: &[Post], config: &Config) -> Self {
        let posts = posts
            .iter()
            .map(|post| IndexEntry {
                title: post.display_title(),
                date: post.date.clone(),
                href: file_href(&config.root_dir, &post.output),
            })
            .collect();

        Self {
            title: config.index_title.clone(),
            date_format: config.date_format.clone(),
            posts,
        }
    }
}

//! Pattern transforms for the supported markdown subset
//!
//! Every rule is a pure `&str -> String` substitution. Rules are applied to a
//! single block in the fixed order of [`BLOCK_RULES`].

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// A single text substitution rule
pub type Rule = fn(&str) -> String;

/// The rule chain applied to every block, in order.
///
/// Images must run before links so that the leading `!` claims `![alt](src)`.
pub const BLOCK_RULES: [Rule; 7] = [
    headers,
    math,
    blockquote,
    emphasis,
    images,
    links,
    tweet_embed,
];

lazy_static! {
    static ref HEADER_RE: Regex = Regex::new(r"(?m)^(#{1,3}) (.+)$").unwrap();
    static ref BLOCK_MATH_RE: Regex = Regex::new(r"\$\$([\s\S]+?)\$\$").unwrap();
    static ref INLINE_MATH_RE: Regex = Regex::new(r"\$([^$]+?)\$").unwrap();
    static ref BOLD_RE: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    static ref ITALIC_RE: Regex = Regex::new(r"\*(.+?)\*").unwrap();
    static ref IMAGE_RE: Regex = Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").unwrap();
    static ref LINK_RE: Regex = Regex::new(r"\[([^\]]+?)\]\(([^)]+?)\)").unwrap();
    static ref TWEET_RE: Regex = Regex::new(r"<tweet>(.+?)</tweet>").unwrap();
}

/// Apply the full rule chain to one block
pub fn apply_all(block: &str) -> String {
    BLOCK_RULES
        .iter()
        .fold(block.to_string(), |text, rule| rule(&text))
}

/// Check whether a line is a `#`, `##` or `###` header
pub fn is_header_line(line: &str) -> bool {
    !line.contains('\n') && HEADER_RE.is_match(line)
}

/// `# a` / `## a` / `### a` to `<h1>a</h1>` / `<h2>a</h2>` / `<h3>a</h3>`
pub fn headers(text: &str) -> String {
    HEADER_RE
        .replace_all(text, |caps: &Captures| {
            let level = caps[1].len();
            format!("<h{level}>{}</h{level}>", &caps[2])
        })
        .into_owned()
}

/// `$$x$$` to `\[x\]` and `$x$` to `\(x\)`
///
/// Block math is matched over the whole text first. Inline math only runs on
/// the text between block spans.
pub fn math(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for span in BLOCK_MATH_RE.find_iter(text) {
        out.push_str(&inline_math(&text[last..span.start()]));
        let whole = span.as_str();
        out.push_str(&format!(r"\[{}\]", &whole[2..whole.len() - 2]));
        last = span.end();
    }
    out.push_str(&inline_math(&text[last..]));

    out
}

fn inline_math(text: &str) -> String {
    INLINE_MATH_RE
        .replace_all(text, r"\(${1}\)")
        .into_owned()
}

/// Wrap a block starting with `>` in a blockquote, dropping that one `>`
pub fn blockquote(block: &str) -> String {
    match block.strip_prefix('>') {
        Some(quoted) => format!("<blockquote>{quoted}</blockquote>"),
        None => block.to_string(),
    }
}

/// Bold first, then italic on the result
pub fn emphasis(text: &str) -> String {
    let bold = BOLD_RE.replace_all(text, "<strong>${1}</strong>");
    ITALIC_RE.replace_all(&bold, "<em>${1}</em>").into_owned()
}

pub fn images(text: &str) -> String {
    IMAGE_RE
        .replace_all(text, r#"<img src="${2}" alt="${1}">"#)
        .into_owned()
}

pub fn links(text: &str) -> String {
    LINK_RE
        .replace_all(text, r#"<a href="${2}">${1}</a>"#)
        .into_owned()
}

/// `<tweet>ID</tweet>` to the Twitter embed markup.
///
/// The widget script is added once per page by the post template, not here.
pub fn tweet_embed(text: &str) -> String {
    TWEET_RE
        .replace_all(
            text,
            r#"<blockquote class="twitter-tweet" data-media-max-width="560"><a href="https://twitter.com/x/status/${1}"></a></blockquote>"#,
        )
        .into_owned()
}

//! Minimal HTML inspection for the home page check
//!
//! Only what the check needs: the document title and the first `h1`/`h2`.
//! Comments, scripts and styles are dropped before searching.

use regex::Regex;
use shared::{Result, SmokeError};

fn pattern(source: &str) -> Result<Regex> {
    Regex::new(source).map_err(|e| SmokeError::Config(format!("Invalid pattern '{}': {}", source, e)))
}

/// First top-level heading of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 1 or 2
    pub level: u8,
    /// Text content with markup removed and whitespace collapsed
    pub text: String,
    /// False when hidden by attribute or inline style, or empty
    pub visible: bool,
}

/// What the home page check reads from a document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageSummary {
    pub title: Option<String>,
    pub first_heading: Option<Heading>,
}

impl PageSummary {
    pub fn parse(html: &str) -> Result<Self> {
        let cleaned = pattern(r"(?s)<!--.*?-->")?.replace_all(html, " ");
        let cleaned = pattern(r"(?is)<script\b.*?</script\s*>")?.replace_all(&cleaned, " ");
        let cleaned = pattern(r"(?is)<style\b.*?</style\s*>")?.replace_all(&cleaned, " ");

        let title = pattern(r"(?is)<title\b[^>]*>(.*?)</title\s*>")?
            .captures(&cleaned)
            .map(|c| text_content(&c[1]))
            .transpose()?;

        let first_heading = match pattern(r"(?is)<h([12])\b([^>]*)>(.*?)</h[12]\s*>")?.captures(&cleaned) {
            Some(c) => {
                let level = if &c[1] == "1" { 1 } else { 2 };
                let text = text_content(&c[3])?;
                let visible = !text.is_empty() && !hidden_by_attributes(&c[2])?;
                Some(Heading { level, text, visible })
            }
            None => None,
        };

        Ok(Self {
            title,
            first_heading,
        })
    }
}

/// Strip tags, decode the common entities and collapse whitespace
fn text_content(fragment: &str) -> Result<String> {
    let stripped = pattern(r"(?s)<[^>]*>")?.replace_all(fragment, " ");
    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    Ok(decoded.split_whitespace().collect::<Vec<_>>().join(" "))
}

fn hidden_by_attributes(attributes: &str) -> Result<bool> {
    if pattern(r#"(?i)(^|\s)hidden(\s|=|$)"#)?.is_match(attributes) {
        return Ok(true);
    }
    let style = pattern(r#"(?is)\bstyle\s*=\s*("[^"]*"|'[^']*')"#)?
        .captures(attributes)
        .map(|c| c[1].to_lowercase().replace(char::is_whitespace, ""));
    Ok(style
        .map(|s| s.contains("display:none") || s.contains("visibility:hidden"))
        .unwrap_or(false))
}

//! Head fragment injector (HTML text → HTML text).
//!
//! Edits built HTML documents in place:
//!
//! 1. `<html>` gains `lang` when it has none
//! 2. `<title>` is replaced, or inserted before `</head>`
//! 3. the `seo:begin` / `seo:end` region is replaced wholesale, or the
//!    fragment is inserted before `</head>`
//!
//! Running the injector on its own output reproduces it byte for byte.

use crate::seo::{
    SeoContext,
    head::{HEAD_BEGIN, HEAD_END},
};
use crate::utils::html;
use anyhow::{Context, Result};
use regex::Regex;
use std::{fs, path::Path, sync::LazyLock};

/// Documents injected when present in the output directory.
pub const TARGETS: [&str; 2] = ["index.html", "404.html"];

static RE_HTML_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<html\b[^>]*>").unwrap());
static RE_LANG_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\slang\s*=").unwrap());
static RE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title\b[^>]*>.*?</title\s*>").unwrap());
static RE_HEAD_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</head\s*>").unwrap());

/// Where the fragment ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// An existing marker region was replaced.
    Replaced,
    /// Inserted before `</head>`.
    Inserted,
    /// No markers and no `</head>`; the fragment was not placed.
    NoHead,
}

/// Injects the resolved head fragment into HTML documents.
pub struct HeadInjector<'a> {
    lang: &'a str,
    title: &'a str,
    fragment: &'a str,
}

impl<'a> HeadInjector<'a> {
    pub fn new(ctx: &'a SeoContext, fragment: &'a str) -> Self {
        Self {
            lang: &ctx.language,
            title: &ctx.title,
            fragment,
        }
    }

    /// Apply all edits to a document.
    pub fn inject(&self, html: &str) -> (String, Placement) {
        let html = self.set_lang(html);
        let html = self.set_title(&html);
        self.place_fragment(&html)
    }

    /// Read, inject and write back one file.
    pub fn inject_file(&self, path: &Path) -> Result<Placement> {
        let html = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let (output, placement) = self.inject(&html);
        if output != html {
            fs::write(path, output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        Ok(placement)
    }

    fn set_lang(&self, html: &str) -> String {
        let Some(open) = RE_HTML_OPEN.find(html) else {
            return html.to_string();
        };
        if RE_LANG_ATTR.is_match(open.as_str()) {
            return html.to_string();
        }

        // right after `<html`
        let at = open.start() + "<html".len();
        let lang = html::escape_attr(self.lang);
        format!("{} lang=\"{lang}\"{}", &html[..at], &html[at..])
    }

    /// Only the head is searched, so inline `<svg><title>` elements in the
    /// body are left alone.
    fn set_title(&self, html: &str) -> String {
        let Some(head_close) = RE_HEAD_CLOSE.find(html) else {
            return html.to_string();
        };
        let title = format!("<title>{}</title>", html::escape(self.title));
        if let Some(existing) = RE_TITLE.find(&html[..head_close.start()]) {
            let mut out = String::with_capacity(html.len() + title.len());
            out.push_str(&html[..existing.start()]);
            out.push_str(&title);
            out.push_str(&html[existing.end()..]);
            return out;
        }
        insert_before_head_close(html, &format!("  {title}\n"))
            .unwrap_or_else(|| html.to_string())
    }

    fn place_fragment(&self, html: &str) -> (String, Placement) {
        if let Some((start, end)) = marker_region(html) {
            let mut out = String::with_capacity(html.len() + self.fragment.len());
            out.push_str(&html[..start]);
            out.push_str(self.fragment);
            out.push_str(&html[end..]);
            return (out, Placement::Replaced);
        }

        match insert_before_head_close(html, &format!("{}\n", self.fragment)) {
            Some(out) => (out, Placement::Inserted),
            None => (html.to_string(), Placement::NoHead),
        }
    }
}

/// Insert `text` right before the first `</head>`, keeping its spelling.
fn insert_before_head_close(html: &str, text: &str) -> Option<String> {
    let at = RE_HEAD_CLOSE.find(html)?.start();
    let mut out = String::with_capacity(html.len() + text.len());
    out.push_str(&html[..at]);
    out.push_str(text);
    out.push_str(&html[at..]);
    Some(out)
}

/// Byte range of the first complete `HEAD_BEGIN ... HEAD_END` region,
/// markers included.
///
/// A begin marker pairs with the nearest end marker after it, so a stray
/// begin earlier in the document is never swept into the region.
fn marker_region(html: &str) -> Option<(usize, usize)> {
    let mut from = 0;
    while let Some(offset) = html[from..].find(HEAD_END) {
        let end = from + offset;
        if let Some(start) = html[from..end].rfind(HEAD_BEGIN) {
            return Some((from + start, end + HEAD_END.len()));
        }
        from = end + HEAD_END.len();
    }
    None
}

//! XML text helpers shared by the sitemap and feed writers.

use std::borrow::Cow;

/// Escape special XML characters.
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

/// Split every `]]>` so the text survives inside a CDATA section.
pub fn split_cdata_end(s: &str) -> Cow<'_, str> {
    if s.contains("]]>") {
        Cow::Owned(s.replace("]]>", "]]]]><![CDATA[>"))
    } else {
        Cow::Borrowed(s)
    }
}

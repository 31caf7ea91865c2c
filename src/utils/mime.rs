//! MIME type detection for linked icon and feed resources.

/// Common MIME type constants.
pub mod types {
    pub const RSS: &str = "application/rss+xml";
    pub const LD_JSON: &str = "application/ld+json";

    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const AVIF: &str = "image/avif";
    pub const SVG: &str = "image/svg+xml";
    pub const ICO: &str = "image/x-icon";
}

/// Guess an image MIME type from a URL or path.
///
/// Query strings and fragments are ignored. Returns `None` for unknown
/// extensions so the caller can omit the `type` attribute.
pub fn for_image(href: &str) -> Option<&'static str> {
    let path = href.split(['?', '#']).next().unwrap_or_default();
    let file = path.rsplit('/').next().unwrap_or_default();
    let (_, ext) = file.rsplit_once('.')?;

    match ext.to_ascii_lowercase().as_str() {
        "svg" => Some(types::SVG),
        "png" => Some(types::PNG),
        "jpg" | "jpeg" => Some(types::JPEG),
        "ico" => Some(types::ICO),
        "webp" => Some(types::WEBP),
        "avif" => Some(types::AVIF),
        "gif" => Some(types::GIF),
        _ => None,
    }
}

//! RSS 2.0 feed generation.
//!
//! Items come from `blog.posts` (or `blog.items`), newest first. Post
//! records use loose field names, see [`BlogPost`].

use crate::{
    config::BlogPost,
    debug,
    seo::SeoContext,
    utils::{date::DateTimeUtc, xml::split_cdata_end},
};
use anyhow::{Result, anyhow};
use rss::{ChannelBuilder, GuidBuilder, ImageBuilder, Item, ItemBuilder, validation::Validate};

pub const FILE_NAME: &str = "feed.xml";

/// Maximum length of an item description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 2000;

/// A blog post resolved for feed inclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    /// Absolute when the canonical base is; doubles as the guid.
    pub link: String,
    pub pub_date: DateTimeUtc,
    pub description: Option<String>,
}

impl FeedItem {
    /// Undated posts and unparseable dates fall back to `now`.
    pub fn from_post(post: &BlogPost, ctx: &SeoContext, now: DateTimeUtc) -> Self {
        let link = post
            .link_path()
            .map_or_else(|| ctx.canonical.clone(), |path| ctx.url(path));

        let pub_date = match post.date_raw() {
            Some(raw) => DateTimeUtc::parse(raw).unwrap_or_else(|| {
                debug!("feed"; "unparseable date `{}` on `{}`, using build time", raw, post.title());
                now
            }),
            None => now,
        };

        Self {
            title: post.title().to_string(),
            link,
            pub_date,
            description: post.summary().map(truncate_chars),
        }
    }
}

/// Resolve and sort posts, newest first. Equal dates keep document order.
pub fn collect_items(posts: &[BlogPost], ctx: &SeoContext, now: DateTimeUtc) -> Vec<FeedItem> {
    let mut items: Vec<FeedItem> = posts
        .iter()
        .map(|post| FeedItem::from_post(post, ctx, now))
        .collect();
    items.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
    items
}

/// Render `feed.xml`.
///
/// The channel is validated only when the canonical base is absolute, since
/// RSS links must be full URLs.
pub fn render(ctx: &SeoContext, items: &[FeedItem], now: DateTimeUtc) -> Result<String> {
    let image = ImageBuilder::default()
        .url(ctx.image.as_str())
        .title(ctx.title.as_str())
        .link(ctx.canonical.as_str())
        .build();

    let channel = ChannelBuilder::default()
        .title(ctx.title.as_str())
        .link(ctx.canonical.as_str())
        .description(ctx.feed_description.as_str())
        .language(Some(ctx.language.clone()))
        .last_build_date(Some(now.to_rfc2822()))
        .image(Some(image))
        .items(items.iter().map(to_rss_item).collect::<Vec<_>>())
        .build();

    if ctx.has_absolute_urls() {
        channel
            .validate()
            .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
    } else {
        debug!("feed"; "relative links, skipping RSS validation");
    }

    let mut xml = channel.to_string();
    xml.push('\n');
    Ok(xml)
}

/// `rss` writes item descriptions as CDATA, so only `]]>` needs splitting.
fn to_rss_item(item: &FeedItem) -> Item {
    ItemBuilder::default()
        .title(Some(item.title.clone()))
        .link(Some(item.link.clone()))
        .guid(Some(
            GuidBuilder::default()
                .permalink(true)
                .value(item.link.as_str())
                .build(),
        ))
        .pub_date(Some(item.pub_date.to_rfc2822()))
        .description(
            item.description
                .as_deref()
                .map(|d| split_cdata_end(d).into_owned()),
        )
        .build()
}

fn truncate_chars(s: &str) -> String {
    match s.char_indices().nth(MAX_DESCRIPTION_CHARS) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

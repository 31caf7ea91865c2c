//! `blog` section of `data.json`.

use crate::config::types::NonEmpty;
use serde::Deserialize;

/// Blog listing used to build the RSS feed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogConfig {
    pub posts: Option<Vec<BlogPost>>,
    pub items: Option<Vec<BlogPost>>,
    /// Alternate feed location, used when `seo.rss` is unset.
    pub rss_json: Option<String>,
}

impl BlogConfig {
    /// Post records: `posts` if non-empty, else `items`, else nothing.
    pub fn entries(&self) -> &[BlogPost] {
        [&self.posts, &self.items]
            .into_iter()
            .flatten()
            .find(|list| !list.is_empty())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// A post-like record. Field names vary between data sources, so each
/// property has an ordered list of accepted keys.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPost {
    pub title: Option<String>,
    pub name: Option<String>,

    pub url: Option<String>,
    pub link: Option<String>,
    pub slug: Option<String>,
    pub path: Option<String>,

    pub date: Option<String>,
    pub published_at: Option<String>,
    pub pub_date: Option<String>,
    pub created_at: Option<String>,

    pub excerpt: Option<String>,
    pub description: Option<String>,
}

impl BlogPost {
    /// `title` -> `name` -> `"Untitled"`
    pub fn title(&self) -> &str {
        self.title
            .non_empty()
            .or_else(|| self.name.non_empty())
            .unwrap_or("Untitled")
    }

    /// `url` -> `link` -> `slug` -> `path`
    pub fn link_path(&self) -> Option<&str> {
        first_non_empty([&self.url, &self.link, &self.slug, &self.path])
    }

    /// `date` -> `publishedAt` -> `pubDate` -> `createdAt`
    pub fn date_raw(&self) -> Option<&str> {
        first_non_empty([
            &self.date,
            &self.published_at,
            &self.pub_date,
            &self.created_at,
        ])
    }

    /// `excerpt` -> `description`
    pub fn summary(&self) -> Option<&str> {
        first_non_empty([&self.excerpt, &self.description])
    }
}

fn first_non_empty<'a, const N: usize>(fields: [&'a Option<String>; N]) -> Option<&'a str> {
    fields.into_iter().find_map(NonEmpty::non_empty)
}

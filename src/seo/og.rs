//! Open Graph, Facebook and Twitter Card tags.

use super::{SeoContext, head::HeadTag};
use crate::config::{Scalar, SeoConfig};
use crate::core::url::host_of;

pub const OG_TYPE: &str = "website";
pub const TWITTER_CARD: &str = "summary_large_image";

/// `og:*` tags, including the repeated `og:see_also` / `og:locale:alternate`.
pub fn open_graph(ctx: &SeoContext, seo: &SeoConfig) -> Vec<HeadTag> {
    let mut tags = vec![
        HeadTag::property("og:type", OG_TYPE),
        HeadTag::property("og:site_name", &ctx.site_name),
        HeadTag::property("og:title", &ctx.title),
        HeadTag::property("og:description", &ctx.description),
        HeadTag::property("og:url", &ctx.canonical),
        HeadTag::property("og:image", &ctx.image),
        HeadTag::property("og:image:width", &ctx.image_width),
        HeadTag::property("og:image:height", &ctx.image_height),
        HeadTag::property("og:image:alt", &ctx.title),
        HeadTag::property("og:locale", &ctx.locale),
    ];
    if let Some(updated) = &ctx.updated_at {
        tags.push(HeadTag::property("og:updated_time", updated));
    }
    tags.extend(seo.see_also.iter().map(|u| HeadTag::property("og:see_also", u)));
    tags.extend(
        seo.locale_alternates
            .iter()
            .map(|loc| HeadTag::property("og:locale:alternate", loc)),
    );
    tags
}

/// `fb:*` and `article:tag` tags.
pub fn facebook(seo: &SeoConfig) -> Vec<HeadTag> {
    let text = |v: &Option<Scalar>| v.as_ref().map(ToString::to_string).unwrap_or_default();

    let mut tags = vec![
        HeadTag::property("fb:app_id", text(&seo.facebook_app_id)),
        HeadTag::property("fb:pages", text(&seo.fb_page_id)),
    ];
    tags.extend(
        seo.facebook_admins
            .iter()
            .map(|id| HeadTag::property("fb:admins", id.to_string())),
    );
    tags.extend(
        seo.article_tags
            .iter()
            .map(|tag| HeadTag::property("article:tag", tag)),
    );
    tags
}

/// `twitter:*` tags. `twitter:domain` is only known for absolute canonicals.
pub fn twitter(ctx: &SeoContext) -> Vec<HeadTag> {
    let handle = ctx.twitter.clone().unwrap_or_default();
    let id = ctx.twitter_id.clone().unwrap_or_default();

    vec![
        HeadTag::name("twitter:card", TWITTER_CARD),
        HeadTag::name("twitter:title", &ctx.title),
        HeadTag::name("twitter:description", &ctx.description),
        HeadTag::name("twitter:image", &ctx.image),
        HeadTag::name("twitter:site", &handle),
        HeadTag::name("twitter:creator", &handle),
        HeadTag::name("twitter:site:id", &id),
        HeadTag::name("twitter:creator:id", &id),
        HeadTag::name("twitter:domain", host_of(&ctx.canonical).unwrap_or_default()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteData;
    use crate::seo::Overrides;

    fn resolve(json: &str) -> (SeoContext, SiteData) {
        let data = SiteData::parse(json).unwrap();
        (SeoContext::resolve(&data, &Overrides::default()), data)
    }

    fn rendered(tags: &[HeadTag]) -> Vec<String> {
        tags.iter().filter(|t| !t.is_empty()).map(HeadTag::render).collect()
    }

    #[test]
    fn test_open_graph_defaults() {
        let (ctx, data) = resolve(r#"{"seo":{"siteUrl":"https://example.com","title":"Ada"}}"#);
        let tags = rendered(&open_graph(&ctx, &data.seo));
        assert_eq!(tags[0], r#"<meta property="og:type" content="website" />"#);
        assert!(tags.contains(
            &r#"<meta property="og:image" content="https://example.com/assets/images/og-image.png" />"#
                .to_string()
        ));
        assert!(tags.contains(&r#"<meta property="og:image:width" content="1200" />"#.to_string()));
        assert!(tags.contains(&r#"<meta property="og:image:alt" content="Ada" />"#.to_string()));
        assert!(tags.contains(&r#"<meta property="og:locale" content="en_US" />"#.to_string()));
    }

    #[test]
    fn test_open_graph_repeated() {
        let (ctx, data) = resolve(
            r#"{"seo":{"seeAlso":["https://github.com/ada","https://x.com/ada"],"localeAlternates":["id_ID"]}}"#,
        );
        let tags = rendered(&open_graph(&ctx, &data.seo));
        assert_eq!(tags.iter().filter(|t| t.contains("og:see_also")).count(), 2);
        assert!(tags.contains(
            &r#"<meta property="og:locale:alternate" content="id_ID" />"#.to_string()
        ));
    }

    #[test]
    fn test_facebook() {
        let (_, data) = resolve(
            r#"{"seo":{"facebookAppId":1234,"facebookAdmins":["1","2"],"articleTags":["rust"]}}"#,
        );
        let tags = rendered(&facebook(&data.seo));
        assert_eq!(
            tags,
            vec![
                r#"<meta property="fb:app_id" content="1234" />"#,
                r#"<meta property="fb:admins" content="1" />"#,
                r#"<meta property="fb:admins" content="2" />"#,
                r#"<meta property="article:tag" content="rust" />"#,
            ]
        );
    }

    #[test]
    fn test_twitter() {
        let (ctx, _) = resolve(r#"{"seo":{"siteUrl":"https://example.com","twitter":"ada"}}"#);
        let tags = rendered(&twitter(&ctx));
        assert!(tags.contains(&r#"<meta name="twitter:site" content="@ada" />"#.to_string()));
        assert!(tags.contains(&r#"<meta name="twitter:creator" content="@ada" />"#.to_string()));
        assert!(tags.contains(&r#"<meta name="twitter:domain" content="example.com" />"#.to_string()));
        assert!(!tags.iter().any(|t| t.contains("twitter:site:id")));
    }

    #[test]
    fn test_twitter_relative_canonical() {
        let (ctx, _) = resolve("{}");
        let tags = rendered(&twitter(&ctx));
        assert!(!tags.iter().any(|t| t.contains("twitter:domain")));
        assert!(!tags.iter().any(|t| t.contains("twitter:site")));
    }
}

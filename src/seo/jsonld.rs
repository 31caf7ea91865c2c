//! schema.org JSON-LD documents.
//!
//! Person, WebSite (with a SearchAction), WebPage and BreadcrumbList are
//! always emitted; Organization only when `seo.organization.name` is set.

use super::SeoContext;
use crate::config::{NonEmpty, OrganizationConfig, PersonalConfig, SectionFlags, SiteData, string_values};
use crate::utils::{html, mime};
use serde_json::{Map, Value, json};

const CONTEXT: &str = "https://schema.org";
const DEFAULT_JOB_TITLE: &str = "Web Developer";

/// One `<script type="application/ld+json">` block.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonLd {
    pub id: &'static str,
    pub value: Value,
}

impl JsonLd {
    pub fn render(&self) -> String {
        let body = self.value.to_string();
        format!(
            r#"<script type="{}" id="{}">{}</script>"#,
            mime::types::LD_JSON,
            self.id,
            html::escape_script(&body)
        )
    }
}

/// All documents, in emission order.
pub fn documents(ctx: &SeoContext, data: &SiteData) -> Vec<JsonLd> {
    let mut docs = vec![
        JsonLd {
            id: "ld-person",
            value: person(ctx, &data.personal),
        },
        JsonLd {
            id: "ld-website",
            value: website(ctx),
        },
        JsonLd {
            id: "ld-webpage",
            value: webpage(ctx),
        },
        JsonLd {
            id: "ld-breadcrumb",
            value: breadcrumb(ctx, data.section_flags()),
        },
    ];
    if let Some(org) = data.seo.organization.as_ref().and_then(|o| organization(ctx, o)) {
        docs.push(JsonLd {
            id: "ld-org",
            value: org,
        });
    }
    docs
}

pub fn person(ctx: &SeoContext, personal: &PersonalConfig) -> Value {
    let mut doc = object(json!({
        "@context": CONTEXT,
        "@type": "Person",
        "name": personal.name.non_empty().unwrap_or(&ctx.site_name),
    }));
    if let Some(email) = personal.email.non_empty() {
        doc.insert("email".into(), email.into());
    }
    doc.insert("url".into(), ctx.canonical.clone().into());
    doc.insert(
        "jobTitle".into(),
        personal.job_title.non_empty().unwrap_or(DEFAULT_JOB_TITLE).into(),
    );
    let image = personal
        .avatar_url
        .non_empty()
        .unwrap_or(&ctx.favicons.apple);
    doc.insert("image".into(), ctx.url(image).into());
    doc.insert("sameAs".into(), json!(string_values(&personal.socials)));
    Value::Object(doc)
}

pub fn website(ctx: &SeoContext) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "WebSite",
        "name": ctx.site_name,
        "url": ctx.canonical,
        "potentialAction": {
            "@type": "SearchAction",
            "target": format!("{}?q={{search_term_string}}", ctx.canonical),
            "query-input": "required name=search_term_string",
        },
    })
}

pub fn webpage(ctx: &SeoContext) -> Value {
    let mut doc = object(json!({
        "@context": CONTEXT,
        "@type": "WebPage",
        "name": ctx.title,
        "url": ctx.canonical,
        "isPartOf": { "@type": "WebSite", "url": ctx.canonical, "name": ctx.site_name },
        "description": ctx.description,
        "inLanguage": ctx.language,
    }));
    if let Some(updated) = &ctx.updated_at {
        doc.insert("dateModified".into(), updated.clone().into());
    }
    Value::Object(doc)
}

/// Home, then one crumb per enabled page section.
pub fn breadcrumb(ctx: &SeoContext, flags: SectionFlags) -> Value {
    let sections = [
        (flags.about, "About", "#about"),
        (flags.projects, "Projects", "#projects"),
        (flags.portfolio, "Portfolio", "#portfolio"),
        (flags.contact, "Contact", "#contact"),
    ];
    let crumbs = std::iter::once(("Home", ctx.base_path.as_str())).chain(
        sections
            .into_iter()
            .filter(|(enabled, ..)| *enabled)
            .map(|(_, name, href)| (name, href)),
    );

    let items: Vec<Value> = crumbs
        .enumerate()
        .map(|(i, (name, href))| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "item": { "@id": ctx.url(href), "name": name },
            })
        })
        .collect();

    json!({
        "@context": CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

pub fn organization(ctx: &SeoContext, org: &OrganizationConfig) -> Option<Value> {
    let name = org.name.non_empty()?;

    let mut doc = object(json!({
        "@context": CONTEXT,
        "@type": "Organization",
        "name": name,
    }));
    if let Some(legal) = org.legal_name.non_empty() {
        doc.insert("legalName".into(), legal.into());
    }
    doc.insert(
        "url".into(),
        org.url.non_empty().unwrap_or(&ctx.canonical).into(),
    );
    if let Some(logo) = org.logo.non_empty() {
        doc.insert("logo".into(), ctx.url(logo).into());
    }
    if !org.same_as.is_empty() {
        doc.insert("sameAs".into(), json!(org.same_as));
    }
    Some(Value::Object(doc))
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::Overrides;

    fn resolve(json: &str) -> (SeoContext, SiteData) {
        let data = SiteData::parse(json).unwrap();
        (SeoContext::resolve(&data, &Overrides::default()), data)
    }

    #[test]
    fn test_person() {
        let (ctx, data) = resolve(
            r#"{
                "seo":{"siteUrl":"https://example.com"},
                "personal":{"name":"Ada","email":"ada@example.com","avatarUrl":"/img/ada.png",
                            "socials":{"github":"https://github.com/ada","x":""}}
            }"#,
        );
        let doc = person(&ctx, &data.personal);
        assert_eq!(doc["name"], "Ada");
        assert_eq!(doc["email"], "ada@example.com");
        assert_eq!(doc["url"], "https://example.com/");
        assert_eq!(doc["jobTitle"], "Web Developer");
        assert_eq!(doc["image"], "https://example.com/img/ada.png");
        assert_eq!(doc["sameAs"], json!(["https://github.com/ada"]));

        let keys: Vec<&str> = doc.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["@context", "@type", "name", "email", "url", "jobTitle", "image", "sameAs"]
        );
    }

    #[test]
    fn test_person_defaults() {
        let (ctx, data) = resolve(r#"{"seo":{"siteName":"Folio"}}"#);
        let doc = person(&ctx, &data.personal);
        assert_eq!(doc["name"], "Folio");
        assert!(doc.get("email").is_none());
        assert_eq!(doc["image"], "/assets/images/apple-touch-icon.png");
    }

    #[test]
    fn test_website_search_action() {
        let (ctx, _) = resolve(r#"{"seo":{"siteUrl":"https://example.com","basePath":"/p"}}"#);
        let doc = website(&ctx);
        assert_eq!(
            doc["potentialAction"]["target"],
            "https://example.com/p/?q={search_term_string}"
        );
        assert_eq!(
            doc["potentialAction"]["query-input"],
            "required name=search_term_string"
        );
    }

    #[test]
    fn test_webpage_date_modified() {
        let (ctx, _) = resolve(r#"{"seo":{"updatedAt":"2024-03-01","locale":"de_DE"}}"#);
        let doc = webpage(&ctx);
        assert_eq!(doc["dateModified"], "2024-03-01T00:00:00Z");
        assert_eq!(doc["inLanguage"], "de");

        let (ctx, _) = resolve("{}");
        assert!(webpage(&ctx).get("dateModified").is_none());
    }

    #[test]
    fn test_breadcrumb_sections() {
        let (ctx, data) = resolve(
            r#"{
                "seo":{"siteUrl":"https://example.com"},
                "about":{"enabled":true},
                "portfolio":{"enabled":false},
                "contact":{"email":"a@b.c"}
            }"#,
        );
        let doc = breadcrumb(&ctx, data.section_flags());
        let items = doc["itemListElement"].as_array().unwrap();
        let names: Vec<&str> = items.iter().map(|i| i["item"]["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["Home", "About", "Contact"]);
        assert_eq!(items[0]["item"]["@id"], "https://example.com/");
        assert_eq!(items[1]["item"]["@id"], "https://example.com/#about");
        assert_eq!(items[2]["position"], 3);
    }

    #[test]
    fn test_organization() {
        let (ctx, data) = resolve(
            r#"{"seo":{"siteUrl":"https://example.com","organization":{"name":"Acme","logo":"/logo.png"}}}"#,
        );
        let doc = organization(&ctx, data.seo.organization.as_ref().unwrap()).unwrap();
        assert_eq!(doc["url"], "https://example.com/");
        assert_eq!(doc["logo"], "https://example.com/logo.png");
        assert!(doc.get("legalName").is_none());
        assert_eq!(documents(&ctx, &data).last().unwrap().id, "ld-org");

        let (ctx, data) = resolve(r#"{"seo":{"organization":{"legalName":"Acme Ltd"}}}"#);
        assert!(organization(&ctx, data.seo.organization.as_ref().unwrap()).is_none());
        assert_eq!(documents(&ctx, &data).len(), 4);
    }

    #[test]
    fn test_render_escapes_script_close() {
        let doc = JsonLd {
            id: "ld-webpage",
            value: json!({ "description": "</script><b>" }),
        };
        let rendered = doc.render();
        assert_eq!(
            rendered,
            r#"<script type="application/ld+json" id="ld-webpage">{"description":"<\/script><b>"}</script>"#
        );
    }
}

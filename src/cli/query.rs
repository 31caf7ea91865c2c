//! `query` command: print the resolved SEO values.

use super::{QueryArgs, Session};
use anyhow::Result;

pub fn run_query(session: &Session, args: &QueryArgs) -> Result<()> {
    println!("{}", render(session, args)?);
    Ok(())
}

fn render(session: &Session, args: &QueryArgs) -> Result<String> {
    let json = if args.pretty {
        serde_json::to_string_pretty(&session.ctx)?
    } else {
        serde_json::to_string(&session.ctx)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ProjectPaths, SiteData};
    use crate::seo::{Overrides, SeoContext};

    fn session(json: &str) -> Session {
        let data = SiteData::parse(json).unwrap();
        let ctx = SeoContext::resolve(&data, &Overrides::default());
        Session {
            paths: ProjectPaths::default(),
            data,
            ctx,
        }
    }

    #[test]
    fn test_query_json() {
        let session = session(r#"{"seo":{"siteUrl":"https://example.com","basePath":"p"}}"#);
        let out = render(&session, &QueryArgs { pretty: false }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["canonical"], "https://example.com/p/");
        assert_eq!(value["base_path"], "/p/");
        assert_eq!(value["site_url"], "absolute");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn test_query_malformed_site_url() {
        let session = session(r#"{"seo":{"siteUrl":"nope"}}"#);
        let out = render(&session, &QueryArgs { pretty: true }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["site_url"]["malformed"], "nope");
        assert!(out.contains('\n'));
    }
}

//! Shared setup for every command: paths, site data, resolved context.

use super::Cli;
use crate::{
    config::{ProjectPaths, SiteData},
    debug,
    seo::{Overrides, SeoContext},
};
use anyhow::Result;

/// Loaded site data plus everything derived from it.
pub struct Session {
    pub paths: ProjectPaths,
    pub data: SiteData,
    pub ctx: SeoContext,
}

impl Session {
    /// Locate and parse `data.json`, then resolve it with CLI/env overrides.
    pub fn load(cli: &Cli) -> Result<Self> {
        let paths = ProjectPaths::new(&cli.root, &cli.output, &cli.public);
        let data = SiteData::load(&paths, cli.data.as_deref())?;

        let overrides = Overrides::from_env(cli.base_path.clone(), cli.site_url.clone());
        let ctx = SeoContext::resolve(&data, &overrides);
        debug!("config"; "canonical {} (base path {})", ctx.canonical, ctx.base_path);

        Ok(Self { paths, data, ctx })
    }
}

//! `build` command: write artifacts and inject the head fragment.

use super::Session;
use crate::{log, pipeline, utils::date::DateTimeUtc};
use anyhow::Result;

pub fn build_site(session: &Session) -> Result<()> {
    let now = DateTimeUtc::build_time();
    let report = pipeline::run(&session.data, &session.ctx, &session.paths, now)?;
    log!("done"; "{}", report.summary());
    Ok(())
}

//! `personal` section of `data.json`.

use crate::config::types::null_default;
use serde::Deserialize;

/// The site owner.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalConfig {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub email: Option<String>,
    pub job_title: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(rename = "logo_path")]
    pub logo_path: Option<String>,
    /// platform -> profile URL, document order preserved
    #[serde(deserialize_with = "null_default")]
    pub socials: serde_json::Map<String, serde_json::Value>,
}

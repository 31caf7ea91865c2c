//! Web app manifest generation.
//!
//! The manifest is regenerated on every run but merged with a prior
//! manifest (from `public/`, else the output directory), so hand-tuned
//! values survive:
//!
//! | Field                              | Prior wins | Generated value              |
//! |------------------------------------|------------|------------------------------|
//! | `name`                             | no         | app name                     |
//! | `short_name`                       | yes        | app name, first 12 chars     |
//! | `display`                          | yes        | `standalone`                 |
//! | `start_url`, `scope`, `id`         | yes        | base path                    |
//! | `theme_color`, `background_color`  | yes        | light theme color / `#ffffff`|
//! | `icons`                            | if listed  | probed 192 / 512 icons       |
//!
//! Any other key of the prior manifest is kept after the generated ones.

use crate::{
    asset::find_static_web_path,
    config::{ProjectPaths, SiteData, parse_json},
    debug,
    seo::SeoContext,
    utils::mime,
};
use serde_json::{Map, Value, json};
use std::fs;

pub const SHORT_NAME_CHARS: usize = 12;
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

const ICON_192_CANDIDATES: [&str; 1] = ["/assets/images/apple-touch-icon.png"];
const ICON_192_FALLBACK: &str = "/assets/images/apple-touch-icon.png";

const ICON_512_CANDIDATES: [&str; 3] = [
    "/assets/images/web-app-manifest-512x512.png",
    "/assets/images/android-chrome-512x512.png",
    "/assets/images/icon-512.png",
];
const ICON_512_FALLBACK: &str = "/assets/images/web-app-manifest-512x512.png";

/// Fields whose prior value is preserved, in output order after `name`.
const PRESERVED: [&str; 8] = [
    "short_name",
    "display",
    "start_url",
    "scope",
    "id",
    "theme_color",
    "background_color",
    "icons",
];

/// Manifest icon sources, resolved against the output and public dirs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestIcons {
    pub icon_192: String,
    pub icon_512: String,
}

impl ManifestIcons {
    /// Probe for shipped icons; unmatched sizes use the conventional path.
    pub fn probe(paths: &ProjectPaths) -> Self {
        Self {
            icon_192: find_static_web_path(ICON_192_CANDIDATES, paths)
                .unwrap_or_else(|| ICON_192_FALLBACK.to_string()),
            icon_512: find_static_web_path(ICON_512_CANDIDATES, paths)
                .unwrap_or_else(|| ICON_512_FALLBACK.to_string()),
        }
    }
}

/// Web path of the manifest, with exactly one leading `/`.
pub fn web_path(ctx: &SeoContext) -> String {
    format!("/{}", ctx.manifest_href.trim_start_matches('/'))
}

/// Load the prior manifest, if any.
///
/// Unreadable or unparseable candidates are skipped.
pub fn read_prior(paths: &ProjectPaths, web_path: &str) -> Map<String, Value> {
    for path in [paths.public_join(web_path), paths.output_join(web_path)] {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        match parse_json::<Value>(&content) {
            Ok(Value::Object(map)) => {
                debug!("manifest"; "merging prior manifest {}", path.display());
                return map;
            }
            Ok(_) => debug!("manifest"; "ignoring {}: not a JSON object", path.display()),
            Err(e) => debug!("manifest"; "ignoring {}: {}", path.display(), e),
        }
    }
    Map::new()
}

/// Build the merged manifest.
pub fn build(
    ctx: &SeoContext,
    data: &SiteData,
    prior: &Map<String, Value>,
    icons: &ManifestIcons,
) -> Value {
    let base = ctx.base_path.as_str();
    let color = data
        .seo
        .theme_color_light
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_BACKGROUND);

    let generated = [
        Value::from(short_name(&ctx.app_name)),
        Value::from("standalone"),
        Value::from(base),
        Value::from(base),
        Value::from(base),
        Value::from(color),
        Value::from(color),
        json!([
            icon_entry(&icons.icon_192, "192x192"),
            icon_entry(&icons.icon_512, "512x512"),
        ]),
    ];

    let mut manifest = Map::new();
    manifest.insert("name".into(), ctx.app_name.clone().into());
    for (key, value) in PRESERVED.into_iter().zip(generated) {
        let kept = prior.get(key).filter(|v| is_set(key, v)).cloned();
        manifest.insert(key.into(), kept.unwrap_or(value));
    }
    for (key, value) in prior {
        if !manifest.contains_key(key) {
            manifest.insert(key.clone(), value.clone());
        }
    }
    Value::Object(manifest)
}

/// Pretty JSON with a trailing newline.
pub fn render(manifest: &Value) -> String {
    let mut out = serde_json::to_string_pretty(manifest).unwrap_or_else(|_| "{}".to_string());
    out.push('\n');
    out
}

fn short_name(name: &str) -> String {
    name.chars().take(SHORT_NAME_CHARS).collect()
}

fn icon_entry(src: &str, sizes: &str) -> Value {
    json!({
        "src": src,
        "sizes": sizes,
        "type": mime::types::PNG,
        "purpose": "any maskable",
    })
}

/// Whether a prior value counts as explicitly set.
fn is_set(key: &str, value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => key != "icons" || !items.is_empty(),
        Value::Number(_) | Value::Object(_) => key != "icons",
    }
}

//! Page sections that contribute breadcrumb entries.

use serde::Deserialize;

/// A section that is only shown when explicitly enabled (`about`, `portfolio`).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct SectionToggle {
    pub enabled: bool,
}

/// Breadcrumb-relevant view of the page sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionFlags {
    pub about: bool,
    pub projects: bool,
    pub portfolio: bool,
    pub contact: bool,
}

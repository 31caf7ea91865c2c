//! Section definitions of the site data document.
//!
//! Each module corresponds to a top-level key of `data.json`:
//!
//! | Module     | JSON key                       | Purpose                         |
//! |------------|--------------------------------|---------------------------------|
//! | `seo`      | `seo`                          | Search, social and PWA metadata |
//! | `personal` | `personal`                     | Site owner, avatar, socials     |
//! | `blog`     | `blog`                         | Posts for the RSS feed          |
//! | `sections` | `about`, `projects`, ...       | Breadcrumb entries              |

mod blog;
mod personal;
mod sections;
mod seo;

pub use blog::{BlogConfig, BlogPost};
pub use personal::PersonalConfig;
pub use sections::{SectionFlags, SectionToggle};
pub use seo::{FaviconConfig, OrganizationConfig, SeoConfig};

//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `paths`  | Project directory layout                     |
//! | `value`  | Scalar leaves and serde helpers              |

mod error;
mod paths;
mod value;

pub use error::{ConfigError, ParseFailure};
pub use paths::ProjectPaths;
pub use value::{NonEmpty, Scalar, null_default, string_values};

//! Static asset lookups against the build output and the public directory.

mod probe;

pub use probe::find_static_web_path;

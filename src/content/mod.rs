//! Static file serving: URL-to-filesystem path resolution and file loading.

pub mod loader;
pub mod resolver;

//! Static file serving
//!
//! This module resolves request paths against the document root, applies
//! the traversal check, and streams file content to the client.

pub mod resolve;
pub mod server;

pub use resolve::{ResolveError, resolve};
pub use server::StaticFiles;

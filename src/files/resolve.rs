//! Request-path to filesystem-path resolution
//!
//! The traversal check is deliberately a literal substring test, not a
//! canonicalization: any path containing `..` is refused outright, and
//! symlinks are not resolved. Encoded traversal sequences are out of scope
//! for the same reason.

use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// The request path contains the `..` traversal sequence.
    Traversal,
}

/// Resolves a request path to a candidate filesystem path under `root`.
///
/// Rejects any path containing `..` anywhere, substitutes the index file
/// for `/`, and joins the remainder onto the document root. The leading
/// `/` is stripped before the join so the request path cannot replace the
/// root wholesale.
pub fn resolve(root: &Path, index: &str, request_path: &str) -> Result<PathBuf, ResolveError> {
    if request_path.contains("..") {
        return Err(ResolveError::Traversal);
    }

    let relative = if request_path == "/" {
        index
    } else {
        request_path.trim_start_matches('/')
    };

    Ok(root.join(relative))
}

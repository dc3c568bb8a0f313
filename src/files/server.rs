//! File lookup and streaming
//!
//! Maps a validated request path to a file under the document root and
//! streams it through the response writer, or sends the matching error
//! page. Every file is looked up fresh per request; there is no cache and
//! no directory listing.

use std::path::PathBuf;
use tokio::fs::File;
use tracing::debug;

use crate::config::StaticFilesConfig;
use crate::files::resolve::{ResolveError, resolve};
use crate::http::mime;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;

/// Serves files from a fixed document root.
///
/// Cheap to clone; each connection task gets its own copy so tasks share
/// no mutable state.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
    index: String,
}

impl StaticFiles {
    pub fn new(cfg: StaticFilesConfig) -> Self {
        Self {
            root: cfg.root,
            index: cfg.index,
        }
    }

    /// Produces the complete response for a GET request path.
    ///
    /// Traversal attempts get 403. Open and metadata failures, and paths
    /// that resolve to a directory, are all folded into 404 so the
    /// response never reveals whether a path exists but is unreadable.
    /// The file handle is dropped on every exit path, including after a
    /// mid-stream I/O error.
    pub async fn serve(
        &self,
        request_path: &str,
        writer: &mut ResponseWriter<'_>,
    ) -> anyhow::Result<()> {
        let candidate = match resolve(&self.root, &self.index, request_path) {
            Ok(path) => path,
            Err(ResolveError::Traversal) => {
                debug!(path = %request_path, "Refusing traversal sequence");
                return writer.send(&Response::error_page(StatusCode::Forbidden)).await;
            }
        };

        let mut file = match File::open(&candidate).await {
            Ok(f) => f,
            Err(e) => {
                debug!(path = %candidate.display(), error = %e, "Open failed");
                return writer.send(&Response::error_page(StatusCode::NotFound)).await;
            }
        };

        let metadata = match file.metadata().await {
            Ok(m) if m.is_file() => m,
            Ok(_) => {
                debug!(path = %candidate.display(), "Not a regular file");
                return writer.send(&Response::error_page(StatusCode::NotFound)).await;
            }
            Err(e) => {
                debug!(path = %candidate.display(), error = %e, "Stat failed");
                return writer.send(&Response::error_page(StatusCode::NotFound)).await;
            }
        };

        let content_type = mime::content_type_for(&candidate);

        writer
            .write_head(StatusCode::Ok, content_type, metadata.len())
            .await?;
        writer.stream_body(&mut file).await?;

        Ok(())
    }
}

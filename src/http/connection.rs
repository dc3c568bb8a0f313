use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info};

use crate::files::StaticFiles;
use crate::http::parser::parse_request_line;
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;

/// Maximum number of request bytes read from a connection. The request
/// line must fit in this single read; whatever headers follow are ignored.
const MAX_REQUEST_BYTES: usize = 8192;

pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    files: StaticFiles,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Serving(Request),
    Rejecting(StatusCode),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, peer: SocketAddr, files: StaticFiles) -> Self {
        Self {
            stream,
            peer,
            files,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection through one request/response exchange.
    ///
    /// The socket is shut down exactly once, whichever path is taken, and
    /// never reused for a second request.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &self.state {
                ConnectionState::Reading => {
                    self.state = self.read_and_parse().await?;
                }

                ConnectionState::Serving(req) => {
                    let path = req.path.clone();
                    let mut writer = ResponseWriter::new(&mut self.stream);
                    self.files.serve(&path, &mut writer).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Rejecting(status) => {
                    let status = *status;
                    let mut writer = ResponseWriter::new(&mut self.stream);
                    writer.send(&Response::error_page(status)).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    // Best effort: the peer may already have hung up.
                    let _ = self.stream.shutdown().await;
                    break;
                }
            }
        }

        Ok(())
    }

    /// Performs the single bounded read and parses the request line.
    async fn read_and_parse(&mut self) -> anyhow::Result<ConnectionState> {
        let mut buf = [0u8; MAX_REQUEST_BYTES];
        let n = self.stream.read(&mut buf).await?;

        if n == 0 {
            // Client connected and sent nothing.
            return Ok(ConnectionState::Closed);
        }

        match parse_request_line(&buf[..n]) {
            Ok(req) => {
                // One-line access record, emitted before dispatch.
                info!(peer = %self.peer, method = %req.method, path = %req.path, "Request");

                if req.is_get() {
                    Ok(ConnectionState::Serving(req))
                } else {
                    Ok(ConnectionState::Rejecting(StatusCode::NotImplemented))
                }
            }
            Err(e) => {
                debug!(peer = %self.peer, error = ?e, "Malformed request line");
                Ok(ConnectionState::Rejecting(StatusCode::BadRequest))
            }
        }
    }
}

use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpSocket};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::files::StaticFiles;
use crate::http::connection::Connection;

/// Binds per the configuration and runs the accept loop until shutdown.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let server = Server::bind(cfg).await?;
    server.run().await
}

/// The connection acceptor.
///
/// The only long-lived loop in the process; everything else runs inside
/// per-connection tasks.
pub struct Server {
    listener: TcpListener,
    files: StaticFiles,
}

impl Server {
    /// Binds the listening socket with address reuse and the configured
    /// backlog. Bind and listen failures are fatal and propagate to the
    /// caller.
    pub async fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let addr: SocketAddr = cfg.server.listen_addr.parse()?;

        let socket = match addr {
            SocketAddr::V4(_) => TcpSocket::new_v4()?,
            SocketAddr::V6(_) => TcpSocket::new_v6()?,
        };
        socket.set_reuseaddr(true)?;
        socket.bind(addr)?;

        let listener = socket.listen(cfg.server.backlog)?;
        info!("Listening on {}", cfg.server.listen_addr);

        Ok(Self {
            listener,
            files: StaticFiles::new(cfg.static_files.clone()),
        })
    }

    /// The address actually bound, useful when listening on port 0.
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections forever, one isolated task per connection.
    ///
    /// Accept failures are logged and the loop continues. A finished task
    /// is reclaimed by the runtime on its own; nothing here ever waits on
    /// a connection.
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!(error = %e, "Accept failed");
                    continue;
                }
            };
            debug!(peer = %peer, "Accepted connection");

            let files = self.files.clone();
            tokio::spawn(async move {
                let mut conn = Connection::new(socket, peer, files);
                if let Err(e) = conn.run().await {
                    error!(peer = %peer, error = %e, "Connection error");
                }
            });
        }
    }
}

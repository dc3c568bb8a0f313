use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::http::response::{Response, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Chunk size used when forwarding a body stream, so memory use stays
/// independent of file size.
pub const CHUNK_SIZE: usize = 8192;

/// Serializes the complete header block for a response.
///
/// Status line, `Content-Type`, `Content-Length`, `Connection: close`, and
/// the blank separator line, with CRLF terminators throughout. Returned as
/// one buffer so the whole block is written as a single unit before any
/// body byte.
pub fn serialize_head(
    status: StatusCode,
    content_type: &str,
    content_length: u64,
) -> Vec<u8> {
    format!(
        "{} {} {}\r\n\
         Content-Type: {}\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase(),
        content_type,
        content_length,
    )
    .into_bytes()
}

/// Writes a response onto one connection.
///
/// The writer never closes the stream; teardown belongs to the connection
/// handler.
pub struct ResponseWriter<'a> {
    stream: &'a mut TcpStream,
}

impl<'a> ResponseWriter<'a> {
    pub fn new(stream: &'a mut TcpStream) -> Self {
        Self { stream }
    }

    /// Sends the header block as one write.
    ///
    /// The declared `content_length` must match the number of body bytes
    /// actually written afterwards.
    pub async fn write_head(
        &mut self,
        status: StatusCode,
        content_type: &str,
        content_length: u64,
    ) -> anyhow::Result<()> {
        let head = serialize_head(status, content_type, content_length);
        self.stream.write_all(&head).await?;
        Ok(())
    }

    /// Sends a fully buffered response: header block, then body.
    pub async fn send(&mut self, response: &Response) -> anyhow::Result<()> {
        self.write_head(
            response.status,
            response.content_type,
            response.body.len() as u64,
        )
        .await?;
        self.stream.write_all(&response.body).await?;
        Ok(())
    }

    /// Forwards a body stream to the connection in fixed-size chunks.
    ///
    /// Returns the number of bytes copied. The header block must already
    /// have been written.
    pub async fn stream_body<R>(&mut self, reader: &mut R) -> anyhow::Result<u64>
    where
        R: AsyncRead + Unpin,
    {
        let mut chunk = BytesMut::with_capacity(CHUNK_SIZE);
        let mut copied = 0u64;

        loop {
            chunk.clear();
            let n = reader.read_buf(&mut chunk).await?;
            if n == 0 {
                break;
            }

            self.stream.write_all(&chunk).await?;
            copied += n as u64;
        }

        Ok(copied)
    }
}

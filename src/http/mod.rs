//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 surface of the server: one request
//! line in, one response out, then the connection is torn down.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the request-response state machine
//! - **`parser`**: Parses the request line from the received byte buffer
//! - **`request`**: Parsed request representation with bounded fields
//! - **`response`**: HTTP response representation and canned error pages
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One read of the incoming request bytes
//!        └──────┬──────┘
//!               │ Request line parsed
//!               ▼
//!        ┌──────────────────┐
//!        │ Serving/Rejecting│ ← Stream a file, or send an error page
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │ ← Socket shut down, never reused
//!        └──────────────────┘
//! ```
//!
//! There is no keep-alive: every connection carries exactly one exchange.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;

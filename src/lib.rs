//! Staticd - Minimal Concurrent Static File Server
//!
//! Core library for HTTP parsing and static file serving.

pub mod config;
pub mod files;
pub mod http;
pub mod server;

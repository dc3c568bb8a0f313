//! Connection acceptance and supervision.

pub mod listener;

pub use listener::Server;

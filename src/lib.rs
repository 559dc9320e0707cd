//! httpwire - HTTP/1.1 from raw TCP byte streams
//!
//! Core library: incremental request parsing, strictly-ordered response
//! writing, and the concurrent connection server that drives them.

pub mod config;
pub mod http;
pub mod server;

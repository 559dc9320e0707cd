//! HTTP/1.1 protocol implementation over raw byte streams.
//!
//! This module implements the HTTP/1.1 subset the server speaks: textual
//! header block terminated by an empty CRLF line, optional fixed-length
//! body governed solely by `Content-Length`. One request per connection;
//! the connection always closes after the response.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: Owns one accepted socket and drives the parser
//!   against it chunk by chunk
//! - **`parser`**: Incremental request parser, fed arbitrarily-split byte
//!   chunks
//! - **`headers`**: Case-insensitive header map and field-line parsing
//! - **`request`**: Parsed request representation handed to handlers
//! - **`response`**: Status code registry
//! - **`writer`**: Serializes the response in strict wire order
//! - **`error`**: Protocol error taxonomy
//!
//! # Request parser state machine
//!
//! The parser never waits for a full message to buffer; each `parse` call
//! consumes at most one protocol element from the front of whatever bytes
//! have arrived so far:
//!
//! ```text
//!        ┌──────────┐
//!        │   Init   │ ← Scan for the request line
//!        └────┬─────┘
//!             │ Request line parsed
//!             ▼
//!        ┌──────────┐
//!        │ Headers  │ ← One field line per call
//!        └────┬─────┘
//!             │ Blank line reached
//!             ├─ Content-Length > 0 ─▼
//!             │                ┌──────────┐
//!             │                │   Body   │ ← Accumulate declared bytes
//!             │                └────┬─────┘
//!             │ no body             │ Body complete
//!             ▼                     ▼
//!        ┌────────────────────────────┐
//!        │            Done            │ ← Consumes nothing further
//!        └────────────────────────────┘
//! ```
//!
//! The response writer walks the mirror-image states `Init → Header →
//! Body → Done`: once the status line and headers are on the wire they
//! cannot be revised, and a body write implies a default `200 OK` block if
//! none was written explicitly.

pub mod connection;
pub mod error;
pub mod headers;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;

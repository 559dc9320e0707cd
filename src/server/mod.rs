//! Connection server: TCP accept loop and the handler boundary.
//!
//! [`serve`] binds a listener and accepts connections concurrently, one
//! spawned task per connection. Each task parses exactly one request,
//! invokes the [`Handler`], streams the response, and closes the socket.
//! The only state shared across connections is the listener and the
//! closed flag behind [`Server::close`].

pub mod handler;
pub mod listener;

pub use handler::Handler;
pub use listener::{Server, serve};

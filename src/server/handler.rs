use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

/// The application boundary: one callback per accepted connection.
///
/// A handler inspects the parsed request and emits a response through the
/// writer. It may set headers, write a status, and write a body at most
/// once; a handler that writes nothing still produces a complete default
/// `200 OK` response. Implemented for plain closures, so a function is a
/// handler:
///
/// ```
/// # use httpwire::http::{request::Request, writer::ResponseWriter};
/// # use httpwire::server::handler::Handler;
/// fn hello(w: &mut ResponseWriter, _req: &Request) {
///     let _ = w.write(b"hello\n");
/// }
/// fn assert_handler(_: impl Handler) {}
/// assert_handler(hello);
/// ```
pub trait Handler: Send + Sync + 'static {
    fn handle(&self, w: &mut ResponseWriter, req: &Request);
}

impl<F> Handler for F
where
    F: Fn(&mut ResponseWriter, &Request) + Send + Sync + 'static,
{
    fn handle(&self, w: &mut ResponseWriter, req: &Request) {
        self(w, req)
    }
}

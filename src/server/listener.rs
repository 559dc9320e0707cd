use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Notify;
use tracing::{debug, error, info};

use crate::http::connection::Connection;
use crate::http::response::StatusCode;
use crate::http::writer::ResponseWriter;
use crate::server::handler::Handler;

/// Handle to a running server.
///
/// Returned by [`serve`]; the accept loop runs concurrently until
/// [`Server::close`] is called. Closing is idempotent and safe to call
/// from any task.
pub struct Server {
    closed: Arc<AtomicBool>,
    shutdown: Arc<Notify>,
    local_addr: SocketAddr,
}

impl Server {
    /// The address the listener actually bound, useful when the
    /// configured port was 0.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stops accepting connections and releases the listener socket.
    ///
    /// The first call wins; subsequent calls are no-ops. In-flight
    /// connections are not interrupted and run to completion.
    pub fn close(&self) {
        if self
            .closed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            self.shutdown.notify_one();
        }
    }
}

/// Binds a TCP listener and starts accepting connections concurrently.
///
/// Returns immediately; each accepted connection is served on its own task
/// so one connection's failure never affects another. The handler is
/// invoked once per connection with the parsed request, and the connection
/// is closed after the response regardless of what the handler did.
pub async fn serve<H: Handler>(addr: &str, handler: H) -> anyhow::Result<Server> {
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!("Listening on {}", local_addr);

    let closed = Arc::new(AtomicBool::new(false));
    let shutdown = Arc::new(Notify::new());
    let handler = Arc::new(handler);

    tokio::spawn(accept_loop(
        listener,
        handler,
        closed.clone(),
        shutdown.clone(),
    ));

    Ok(Server {
        closed,
        shutdown,
        local_addr,
    })
}

async fn accept_loop<H: Handler>(
    listener: TcpListener,
    handler: Arc<H>,
    closed: Arc<AtomicBool>,
    shutdown: Arc<Notify>,
) {
    loop {
        let (socket, peer) = tokio::select! {
            _ = shutdown.notified() => {
                info!("Server stopped");
                return;
            }
            res = listener.accept() => match res {
                Ok(pair) => pair,
                Err(e) => {
                    if closed.load(Ordering::Acquire) {
                        info!("Server stopped");
                        return;
                    }
                    error!("Accept error: {}", e);
                    continue;
                }
            },
        };
        debug!("Accepted connection from {}", peer);

        let handler = handler.clone();
        tokio::spawn(async move {
            if let Err(e) = handle_connection(socket, handler).await {
                error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}

async fn handle_connection<H: Handler>(socket: TcpStream, handler: Arc<H>) -> anyhow::Result<()> {
    let mut conn = Connection::new(socket);

    let mut writer = ResponseWriter::new();
    match conn.read_request().await {
        Ok(request) => {
            debug!(
                "{} {}",
                request.request_line.method, request.request_line.target
            );
            handler.handle(&mut writer, &request);
        }
        Err(e) => {
            // Best effort: the peer may be gone or never spoke HTTP
            writer.write_status(StatusCode::InternalServerError)?;
            writer.write(e.to_string().as_bytes())?;
        }
    }
    writer.finish();

    conn.write_response(&mut writer).await
}

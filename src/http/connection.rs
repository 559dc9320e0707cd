use bytes::{Buf, BytesMut};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::http::error::ParseError;
use crate::http::parser::RequestParser;
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

const READ_CHUNK: usize = 1024;
const MAX_BUFFER: usize = 64 * 1024;

/// One accepted TCP connection: the socket plus its read buffer.
///
/// Owns the socket end-to-end; dropping the connection closes it.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
}

impl Connection {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(READ_CHUNK),
        }
    }

    /// Drives a fresh parser to completion against the socket.
    ///
    /// Reads fixed-size chunks and feeds the parser until it reports done.
    /// The stream ending before that is a protocol failure, never a
    /// silently truncated request. A buffer that keeps growing past the cap
    /// with the parser consuming nothing is surfaced as an error rather
    /// than looping forever.
    pub async fn read_request(&mut self) -> anyhow::Result<Request> {
        let mut parser = RequestParser::new();
        let mut eof = false;

        while !parser.is_done() {
            if !eof {
                let mut chunk = [0u8; READ_CHUNK];
                let n = self.stream.read(&mut chunk).await?;
                if n == 0 {
                    eof = true;
                } else {
                    self.buffer.extend_from_slice(&chunk[..n]);
                }
            }

            let mut progressed = false;
            loop {
                let consumed = parser.parse(&self.buffer)?;
                if consumed == 0 {
                    break;
                }
                self.buffer.advance(consumed);
                progressed = true;
                if parser.is_done() {
                    break;
                }
            }

            if parser.is_done() {
                break;
            }
            if eof {
                return Err(ParseError::UnexpectedEof.into());
            }
            if !progressed && self.buffer.len() >= MAX_BUFFER {
                return Err(ParseError::BufferFull.into());
            }
        }

        parser
            .into_request()
            .ok_or_else(|| anyhow::anyhow!("parser finished without a request"))
    }

    /// Streams a finished response out on this connection.
    pub async fn write_response(&mut self, writer: &mut ResponseWriter) -> anyhow::Result<()> {
        writer.write_to_stream(&mut self.stream).await
    }
}

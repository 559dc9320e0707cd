use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::error::WriteError;
use crate::http::headers::HeaderMap;
use crate::http::response::StatusCode;

const HTTP_VERSION: &str = "HTTP/1.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriterState {
    Init,
    Header,
    Body,
    Done,
}

/// Serializes one HTTP response in wire order.
///
/// The wire forbids revising already-emitted bytes, so emission is a state
/// machine: status line and headers first, then the body with its
/// Content-Length trailer, then nothing. A body write before any explicit
/// status auto-emits a default `200 OK` header block; [`finish`] guarantees
/// even an untouched writer produces a well-terminated response.
///
/// Bytes accumulate in an internal buffer and are pushed to the socket in
/// one pass by [`write_to_stream`] once the response is complete.
///
/// [`finish`]: ResponseWriter::finish
/// [`write_to_stream`]: ResponseWriter::write_to_stream
#[derive(Debug)]
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
    headers: HeaderMap,
    state: WriterState,
}

impl ResponseWriter {
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.set("connection", "close");
        headers.set("content-type", "text/plain");

        Self {
            buffer: Vec::new(),
            written: 0,
            headers,
            state: WriterState::Init,
        }
    }

    /// Headers to be emitted with the status line.
    ///
    /// Pre-populated with `Connection: close` and `Content-Type: text/plain`;
    /// use [`HeaderMap::set`] to override them. Mutations after the status
    /// line has been written are not emitted.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Emits the status line followed by the current header block.
    pub fn write_status(&mut self, status: StatusCode) -> Result<(), WriteError> {
        if self.state != WriterState::Init {
            return Err(WriteError::StatusAlreadyWritten);
        }
        self.emit_status(status);
        Ok(())
    }

    /// Emits the body, preceded by its `Content-Length` and the blank line
    /// terminating the header block.
    ///
    /// If no status was written, a default `200 OK` block is emitted first.
    /// The length is taken from this one slice, so the whole body must be
    /// handed over in a single call; a second call is an error.
    pub fn write(&mut self, body: &[u8]) -> Result<usize, WriteError> {
        match self.state {
            WriterState::Init => self.emit_status(StatusCode::Ok),
            WriterState::Header => {}
            WriterState::Body | WriterState::Done => return Err(WriteError::BodyAlreadyWritten),
        }

        self.buffer
            .extend_from_slice(format!("Content-Length: {}\r\n\r\n", body.len()).as_bytes());
        self.buffer.extend_from_slice(body);
        self.state = WriterState::Body;
        Ok(body.len())
    }

    /// Terminates the response.
    ///
    /// A writer the handler never touched still yields a complete default
    /// `200 OK` response; one with a status but no body gets its closing
    /// blank line. After a body write this is a no-op.
    pub fn finish(&mut self) {
        match self.state {
            WriterState::Init => {
                self.emit_status(StatusCode::Ok);
                self.buffer.extend_from_slice(b"\r\n");
            }
            WriterState::Header => {
                self.buffer.extend_from_slice(b"\r\n");
            }
            WriterState::Body | WriterState::Done => {}
        }
        self.state = WriterState::Done;
    }

    /// The serialized response accumulated so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    fn emit_status(&mut self, status: StatusCode) {
        let status_line = format!(
            "{} {} {}\r\n",
            HTTP_VERSION,
            status.as_u16(),
            status.reason_phrase()
        );
        self.buffer.extend_from_slice(status_line.as_bytes());

        for (name, value) in self.headers.iter() {
            self.buffer.extend_from_slice(canonical_name(name).as_bytes());
            self.buffer.extend_from_slice(b": ");
            self.buffer.extend_from_slice(value.as_bytes());
            self.buffer.extend_from_slice(b"\r\n");
        }

        self.state = WriterState::Header;
    }

    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }
        stream.flush().await?;

        Ok(())
    }
}

impl Default for ResponseWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Title-cases each hyphen-delimited segment for wire presentation,
/// e.g. `content-type` becomes `Content-Type`.
fn canonical_name(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

use thiserror::Error;

/// Errors raised while parsing a request from the wire.
///
/// All variants are request-fatal: the connection responds with an error
/// status and closes. `Display` output is what ends up in that response
/// body, so the messages are written for clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed request line")]
    MalformedRequestLine,

    #[error("invalid method")]
    InvalidMethod,

    #[error("unsupported http version")]
    UnsupportedHttpVersion,

    #[error("malformed field line")]
    InvalidFieldLine,

    #[error("invalid header name")]
    InvalidHeaderName,

    #[error("invalid content length")]
    InvalidContentLength,

    #[error("unexpected end of stream before request was complete")]
    UnexpectedEof,

    #[error("read buffer full without parser progress")]
    BufferFull,
}

/// Errors raised when a response is emitted out of protocol order.
///
/// The wire forbids revising already-sent bytes, so the writer rejects any
/// call that would require it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    #[error("status line already written")]
    StatusAlreadyWritten,

    #[error("response body already written")]
    BodyAlreadyWritten,
}

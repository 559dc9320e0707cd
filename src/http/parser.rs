use crate::http::error::ParseError;
use crate::http::headers::{HeaderMap, find_crlf};
use crate::http::request::{Method, Request, RequestLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    Init,
    Headers,
    Body,
    Done,
}

/// Incremental HTTP/1.1 request parser.
///
/// Fed arbitrary byte chunks via [`RequestParser::parse`]; never blocks
/// waiting for a full message. A return of `Ok(0)` means "no complete
/// element at the front of the buffer yet" - the caller reads more bytes
/// and calls again with the unconsumed remainder at the front.
#[derive(Debug)]
pub struct RequestParser {
    state: ParserState,
    request_line: Option<RequestLine>,
    headers: HeaderMap,
    body: Vec<u8>,
    content_length: usize,
}

impl RequestParser {
    pub fn new() -> Self {
        Self {
            state: ParserState::Init,
            request_line: None,
            headers: HeaderMap::new(),
            body: Vec::new(),
            content_length: 0,
        }
    }

    /// Consumes at most one protocol element from the front of `data` and
    /// returns the number of bytes consumed.
    pub fn parse(&mut self, data: &[u8]) -> Result<usize, ParseError> {
        match self.state {
            ParserState::Init => {
                let Some((request_line, consumed)) = parse_request_line(data)? else {
                    return Ok(0);
                };
                self.request_line = Some(request_line);
                self.state = ParserState::Headers;
                Ok(consumed)
            }

            ParserState::Headers => {
                let (consumed, section_done) = self.headers.parse_field_line(data)?;
                if section_done {
                    self.content_length = content_length(&self.headers)?;
                    self.state = if self.content_length > 0 {
                        ParserState::Body
                    } else {
                        ParserState::Done
                    };
                }
                Ok(consumed)
            }

            ParserState::Body => {
                let needed = self.content_length - self.body.len();
                let take = needed.min(data.len());
                self.body.extend_from_slice(&data[..take]);
                if self.body.len() == self.content_length {
                    self.state = ParserState::Done;
                }
                Ok(take)
            }

            ParserState::Done => Ok(0),
        }
    }

    pub fn is_done(&self) -> bool {
        self.state == ParserState::Done
    }

    /// Returns the finished request, or `None` if parsing is incomplete.
    pub fn into_request(self) -> Option<Request> {
        if self.state != ParserState::Done {
            return None;
        }
        Some(Request {
            request_line: self.request_line?,
            headers: self.headers,
            body: self.body,
        })
    }
}

impl Default for RequestParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Decides body framing once the header section terminates.
///
/// Missing or empty Content-Length means no body. A non-empty value that
/// does not parse as a non-negative integer fails the request.
fn content_length(headers: &HeaderMap) -> Result<usize, ParseError> {
    match headers.get("content-length") {
        None | Some("") => Ok(0),
        Some(v) => v.parse().map_err(|_| ParseError::InvalidContentLength),
    }
}

fn parse_request_line(data: &[u8]) -> Result<Option<(RequestLine, usize)>, ParseError> {
    let Some(idx) = find_crlf(data) else {
        return Ok(None);
    };
    let line = &data[..idx];
    let consumed = idx + 2;

    // exactly two single spaces; a doubled space yields an empty token
    let parts: Vec<&[u8]> = line.split(|&b| b == b' ').collect();
    if parts.len() != 3 {
        return Err(ParseError::MalformedRequestLine);
    }

    let method = std::str::from_utf8(parts[0])
        .ok()
        .and_then(Method::from_str)
        .ok_or(ParseError::InvalidMethod)?;

    let target = std::str::from_utf8(parts[1])
        .map_err(|_| ParseError::MalformedRequestLine)?
        .to_string();

    let version_parts: Vec<&[u8]> = parts[2].split(|&b| b == b'/').collect();
    if version_parts.len() != 2 || version_parts[0] != b"HTTP" {
        return Err(ParseError::MalformedRequestLine);
    }
    if version_parts[1] != b"1.1" {
        return Err(ParseError::UnsupportedHttpVersion);
    }

    let request_line = RequestLine {
        method,
        target,
        http_version: "1.1".to_string(),
    };
    Ok(Some((request_line, consumed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let data = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let mut parser = RequestParser::new();
        let mut read = 0;
        while !parser.is_done() {
            read += parser.parse(&data[read..]).unwrap();
        }

        assert_eq!(read, data.len());
        let request = parser.into_request().unwrap();
        assert_eq!(request.request_line.method, Method::GET);
        assert_eq!(request.request_line.target, "/");
        assert_eq!(request.header("host"), Some("example.com"));
    }
}

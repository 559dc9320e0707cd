use std::collections::HashMap;

use crate::http::error::ParseError;

const CRLF: &[u8] = b"\r\n";

/// Case-insensitive map of HTTP header fields.
///
/// Field names are lower-cased on write and on lookup. Repeated fields are
/// comma-joined by [`HeaderMap::add`] (the parse-time policy); response
/// code uses [`HeaderMap::set`] when a field must be replaced outright.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    fields: HashMap<String, String>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Looks up a field value by name, case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// # use httpwire::http::headers::HeaderMap;
    /// let mut headers = HeaderMap::new();
    /// headers.set("Host", "localhost:42069");
    /// assert_eq!(headers.get("host"), Some("localhost:42069"));
    /// assert_eq!(headers.get("HOST"), Some("localhost:42069"));
    /// ```
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(&name.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    /// Adds a field, joining with `", "` if the name is already present.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into().to_ascii_lowercase();
        let value = value.into();
        match self.fields.get_mut(&name) {
            Some(existing) => {
                existing.push_str(", ");
                existing.push_str(&value);
            }
            None => {
                self.fields.insert(name, value);
            }
        }
    }

    /// Sets a field, replacing any existing value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields
            .insert(name.into().to_ascii_lowercase(), value.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(lower-cased name, value)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consumes one field line from the front of `data`.
    ///
    /// Returns `(bytes_consumed, section_done)`:
    ///
    /// - `(0, false)` when `data` holds no complete line yet; the caller
    ///   must supply more bytes, this is not an error,
    /// - `(2, true)` when the line is the bare CRLF terminating the header
    ///   section,
    /// - `(line_len + 2, false)` when a field was parsed and stored.
    ///
    /// The field name must be an HTTP token and the colon must not be
    /// preceded by a space: `"Host : x"` is rejected, `"Host: x"` accepted.
    pub fn parse_field_line(&mut self, data: &[u8]) -> Result<(usize, bool), ParseError> {
        let Some(idx) = find_crlf(data) else {
            return Ok((0, false));
        };
        if idx == 0 {
            return Ok((CRLF.len(), true));
        }

        let line = &data[..idx];
        let consumed = idx + CRLF.len();

        let colon = line
            .iter()
            .position(|&b| b == b':')
            .ok_or(ParseError::InvalidFieldLine)?;
        if colon == 0 || line[colon - 1] == b' ' {
            return Err(ParseError::InvalidFieldLine);
        }

        let name = line[..colon].trim_ascii();
        if !is_token(name) {
            return Err(ParseError::InvalidHeaderName);
        }
        let name = std::str::from_utf8(name).map_err(|_| ParseError::InvalidHeaderName)?;

        let value = line[colon + 1..].trim_ascii();
        let value = std::str::from_utf8(value).map_err(|_| ParseError::InvalidFieldLine)?;

        self.add(name, value);

        Ok((consumed, false))
    }
}

pub(crate) fn find_crlf(data: &[u8]) -> Option<usize> {
    data.windows(CRLF.len()).position(|w| w == CRLF)
}

/// An HTTP token: one or more ASCII alphanumerics or tchar punctuation.
fn is_token(s: &[u8]) -> bool {
    if s.is_empty() {
        return false;
    }
    s.iter().all(|&b| {
        b.is_ascii_alphanumeric()
            || matches!(
                b,
                b'!' | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
    })
}

use httpwire::http::headers::HeaderMap;
use httpwire::http::request::{Method, Request, RequestLine};

fn make_request(method: Method, target: &str) -> Request {
    Request {
        request_line: RequestLine {
            method,
            target: target.to_string(),
            http_version: "1.1".to_string(),
        },
        headers: HeaderMap::new(),
        body: Vec::new(),
    }
}

#[test]
fn test_method_from_str_known_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
        ("HEAD", Method::HEAD),
        ("OPTIONS", Method::OPTIONS),
        ("PATCH", Method::PATCH),
    ];

    for (s, expected) in methods {
        assert_eq!(Method::from_str(s), Some(expected));
    }
}

#[test]
fn test_method_from_str_is_case_sensitive() {
    assert_eq!(Method::from_str("get"), None);
    assert_eq!(Method::from_str("Get"), None);
}

#[test]
fn test_method_from_str_unknown() {
    assert_eq!(Method::from_str("FETCH"), None);
    assert_eq!(Method::from_str(""), None);
}

#[test]
fn test_method_round_trips_through_as_str() {
    for s in ["GET", "POST", "PUT", "DELETE", "HEAD", "OPTIONS", "PATCH"] {
        let method = Method::from_str(s).unwrap();
        assert_eq!(method.as_str(), s);
        assert_eq!(method.to_string(), s);
    }
}

#[test]
fn test_request_header_lookup_is_case_insensitive() {
    let mut request = make_request(Method::GET, "/");
    request.headers.add("Host", "example.com");

    assert_eq!(request.header("host"), Some("example.com"));
    assert_eq!(request.header("HOST"), Some("example.com"));
    assert_eq!(request.header("missing"), None);
}

#[test]
fn test_request_content_length_accessor() {
    let mut request = make_request(Method::POST, "/api");
    request.headers.add("Content-Length", "11");
    request.body = b"hello world".to_vec();

    assert_eq!(request.content_length(), 11);
}

#[test]
fn test_request_content_length_defaults_to_zero() {
    let request = make_request(Method::GET, "/");

    assert_eq!(request.content_length(), 0);
}

//! Demo requests. Each carries `name`, `age`, `height` and `married` in its headers,
//! its query string and its form body, with a different value per source.

use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{Method, Request};
use paramex::form::FORM_URLENCODED;
use uuid::Uuid;

pub const QUERY: &str = "name=query_name&age=20&height=1.78&married=false";
pub const FORM_BODY: &str = "name=form_name&age=50&height=1.72&married=true";

/// A `POST` request carrying all three sources.
pub fn make_request() -> Result<Request<Vec<u8>>, http::Error> {
    make_request_with_body(FORM_BODY)
}

/// Same as [`make_request`] with a custom form body.
pub fn make_request_with_body(body: &str) -> Result<Request<Vec<u8>>, http::Error> {
    Request::builder()
        .method(Method::POST)
        .uri(format!("https://example.com/people?{QUERY}"))
        .header(CONTENT_TYPE, FORM_URLENCODED)
        .header(CONTENT_LENGTH, body.len())
        .header("name", "header_name")
        .header("age", "40")
        .header("height", "1.74")
        .header("married", "true")
        .body(body.as_bytes().to_vec())
}

/// A profile update: a UUID in the query string and a repeated `strArray` key in the body.
pub fn profile_request(id: Uuid) -> Result<Request<Vec<u8>>, http::Error> {
    let body = "strArray=str1&strArray=str2&strArray=1";
    Request::builder()
        .method(Method::PATCH)
        .uri(format!("https://example.com/profiles?id={id}"))
        .header(CONTENT_TYPE, FORM_URLENCODED)
        .header("strArray", "from_header")
        .body(body.as_bytes().to_vec())
}

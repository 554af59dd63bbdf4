//! HTTP response builders, decoupled from routing.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde::Serialize;

use crate::logger;

/// Build the root greeting response. Plain text, no Content-Type header.
pub fn build_greeting_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .body(Full::new(Bytes::from("hello world")))
        .unwrap_or_else(|e| {
            logger::log_response_build_error("greeting", &e);
            Response::new(Full::new(Bytes::from("hello world")))
        })
}

/// Build a 200 JSON response with CORS allowed for any origin.
///
/// A serialization failure is not surfaced to the client: the body is
/// whatever bytes resulted, possibly empty.
pub fn build_json_response<T: Serialize>(value: &T) -> Response<Full<Bytes>> {
    let body = serde_json::to_vec(value).unwrap_or_default();

    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            logger::log_response_build_error("json", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            logger::log_response_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

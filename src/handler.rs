use crate::config::AppState;
use crate::items;
use crate::logger;
use crate::response;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::Ordering;

/// Extract the first value of `name` from a raw query string, decoded.
///
/// Mirrors the usual first-wins lookup: `a=1&a=2` yields `1`. An absent
/// key returns `None`; `a=` returns `Some("")`.
fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Route the request based on path. Dispatch is path-only: any method on
/// a known path reaches its handler.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let uri = req.uri();
    let path = uri.path();

    let access_log = state.cached_access_log.load(Ordering::Relaxed);
    if access_log {
        logger::log_request(req.method(), uri, req.version());
        if state.config.logging.show_headers {
            logger::log_headers_count(req.headers().len());
        }
    }

    let response = match path {
        "/" => response::build_greeting_response(),
        "/list" => handle_list(uri.query(), access_log),
        _ => response::build_404_response(),
    };

    if access_log {
        logger::log_response(response.status().as_u16());
    }

    Ok(response)
}

/// Serve the hardcoded item list, truncated to one entry when the
/// `content` query parameter is non-empty.
fn handle_list(query: Option<&str>, access_log: bool) -> Response<Full<Bytes>> {
    let content = query_param(query, "content");

    if access_log {
        logger::log_list_query(content.as_deref());
    }

    let mut items = items::build_items();
    items::apply_content_filter(&mut items, content.as_deref());

    if access_log {
        logger::log_list_result(&items);
    }

    response::build_json_response(&items)
}

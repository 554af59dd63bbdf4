use crate::config::Config;
use crate::items::Item;
use chrono::Local;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

fn timestamp() -> String {
    Local::now().format("%d/%b/%Y:%H:%M:%S %z").to_string()
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Server started successfully");
    println!("Listening on: http://{addr}");
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Access log: {}", config.logging.access_log);
    println!("======================================\n");
}

pub fn log_accept_error(err: &std::io::Error) {
    eprintln!("[Error] Failed to accept connection: {err}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[Error] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[{}] [Request] {} {} {:?}", timestamp(), method, uri, version);
}

pub fn log_headers_count(count: usize) {
    println!("[Headers] Count: {count}");
}

pub fn log_list_query(content: Option<&str>) {
    println!("[List] content: {}", content.unwrap_or(""));
}

pub fn log_list_result(items: &[Item]) {
    println!("[List] items: {}", format_items(items));
}

/// Render the list the way it appears in the access log:
/// `[{aaa AAA} {bbb BBB}]`.
fn format_items(items: &[Item]) -> String {
    let entries: Vec<String> = items
        .iter()
        .map(|item| format!("{{{} {}}}", item.title, item.content))
        .collect();
    format!("[{}]", entries.join(" "))
}

pub fn log_response(status: u16) {
    println!("[Response] Sent {status}\n");
}

pub fn log_response_build_error(kind: &str, err: &impl std::fmt::Display) {
    eprintln!("[Error] Failed to build {kind} response: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::build_items;

    #[test]
    fn test_format_items_full_list() {
        assert_eq!(format_items(&build_items()), "[{aaa AAA} {bbb BBB}]");
    }

    #[test]
    fn test_format_items_truncated_list() {
        let mut items = build_items();
        items.truncate(1);
        assert_eq!(format_items(&items), "[{aaa AAA}]");
    }
}

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;
use tokio::net::TcpListener;

mod config;
mod handler;
mod items;
mod logger;
mod response;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    // Bind failure is fatal: the error propagates out of main
    let listener = TcpListener::bind(addr).await?;

    let state = Arc::new(config::AppState::new(&cfg));
    logger::log_server_start(&addr, &cfg);

    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => {
                handle_connection(stream, Arc::clone(&state));
            }
            Err(e) => {
                logger::log_accept_error(&e);
            }
        }
    }
}

/// Serve a single connection in a spawned task.
fn handle_connection(stream: tokio::net::TcpStream, state: Arc<config::AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&state);
                async move { handler::handle_request(req, state).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}

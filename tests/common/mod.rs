//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use order_redactor::config::RedactorConfig;
use order_redactor::http::HttpServer;
use order_redactor::lifecycle::Shutdown;
use order_redactor::upstream::ApiKey;

pub const TEST_KEY: &str = "sq-test-key";

/// Start a programmable mock upstream on an ephemeral port.
///
/// The closure receives the raw request head and returns `(status, body)`.
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            tokio::spawn(async move {
                let head = read_head(&mut socket).await;
                let (status, body) = f(head).await;
                let status_text = match status {
                    200 => "200 OK",
                    401 => "401 Unauthorized",
                    404 => "404 Not Found",
                    500 => "500 Internal Server Error",
                    503 => "503 Service Unavailable",
                    _ => "200 OK",
                };

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_text,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

/// Mock upstream that always answers `status` with `body`.
pub async fn start_mock_backend(status: u16, body: &'static str) -> SocketAddr {
    start_programmable_backend(move |_| async move { (status, body.to_string()) }).await
}

/// Mock upstream that accepts connections and never answers.
pub async fn start_silent_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_secs(30)).await;
                drop(socket);
            });
        }
    });

    addr
}

async fn read_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// A running proxy plus the handle that stops it.
pub struct TestProxy {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestProxy {
    pub fn url(&self, query: &str) -> String {
        format!("http://{}/{}", self.addr, query)
    }
}

impl Drop for TestProxy {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the proxy on an ephemeral port.
pub async fn start_proxy(config: RedactorConfig) -> TestProxy {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, ApiKey::new(TEST_KEY)).unwrap();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestProxy { addr, shutdown }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

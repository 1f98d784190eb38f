//! Shared test helpers for coordinator and scan tests.
//!
//! Provides a minimal HTTP server that tracks how many requests it is serving
//! at once, which mock servers cannot observe.

use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Handle to a running test server.
pub struct TestServer {
    pub port: u16,
    max_in_flight: Arc<AtomicUsize>,
    accept_loop: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Highest number of requests served concurrently so far.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.accept_loop.abort();
    }
}

/// Starts a server on all interfaces answering `200 OK` to every request.
///
/// `delay_for` picks the response delay from the local address the client
/// connected to, so different loopback addresses can behave differently.
pub async fn spawn_test_server<F>(delay_for: F) -> TestServer
where
    F: Fn(IpAddr) -> Duration + Send + Sync + 'static,
{
    let listener = TcpListener::bind("0.0.0.0:0")
        .await
        .expect("Failed to bind test server");
    let port = listener.local_addr().expect("No local address").port();
    let in_flight = Arc::new(AtomicUsize::new(0));
    let max_in_flight = Arc::new(AtomicUsize::new(0));
    let delay_for = Arc::new(delay_for);

    let in_flight_loop = in_flight;
    let max_loop = Arc::clone(&max_in_flight);
    let accept_loop = tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let in_flight = Arc::clone(&in_flight_loop);
            let max_in_flight = Arc::clone(&max_loop);
            let delay_for = Arc::clone(&delay_for);
            tokio::spawn(async move {
                let mut buf = [0u8; 2048];
                if socket.read(&mut buf).await.unwrap_or(0) == 0 {
                    return;
                }
                let current = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                max_in_flight.fetch_max(current, Ordering::SeqCst);

                let delay = socket
                    .local_addr()
                    .map(|addr| delay_for(addr.ip()))
                    .unwrap_or(Duration::ZERO);
                tokio::time::sleep(delay).await;

                in_flight.fetch_sub(1, Ordering::SeqCst);
                let _ = socket
                    .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
                    .await;
                let _ = socket.shutdown().await;
            });
        }
    });

    TestServer {
        port,
        max_in_flight,
        accept_loop,
    }
}

/// Returns a loopback port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    listener.local_addr().expect("No local address").port()
}

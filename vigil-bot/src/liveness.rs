use std::net::{Ipv4Addr, SocketAddr};

use axum::{Router, routing::get};
use tracing::{error, info};

pub const ALIVE_BODY: &str = "✅ The bot is alive and running!";

pub fn router() -> Router {
    Router::new().route("/", get(alive))
}

async fn alive() -> &'static str {
    ALIVE_BODY
}

/// Serve the keep-alive route on its own task.
///
/// Bind or serve failures are logged; they never take the bot down.
pub fn spawn(port: u16) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
        let listener = match tokio::net::TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(err) => {
                error!(?err, %addr, "failed to bind liveness endpoint");
                return;
            }
        };

        info!(%addr, "Liveness endpoint listening.");
        if let Err(err) = axum::serve(listener, router()).await {
            error!(?err, "liveness endpoint stopped");
        }
    })
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    use super::{ALIVE_BODY, router};

    #[tokio::test]
    async fn root_route_answers_ok() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router()).await.unwrap();
        });

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();

        let mut response = Vec::new();
        stream.read_to_end(&mut response).await.unwrap();
        let response = String::from_utf8(response).unwrap();

        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.ends_with(ALIVE_BODY));
    }
}

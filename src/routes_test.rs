use super::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::{Duration, timeout};

async fn spawn_base_router() -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, base_routes()).await.unwrap();
    });
    addr
}

async fn raw_get(addr: std::net::SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut response = String::new();
    timeout(Duration::from_secs(2), stream.read_to_string(&mut response))
        .await
        .expect("response timed out")
        .unwrap();
    response
}

#[test]
fn pkg_dir_joins_site_root_and_pkg() {
    assert_eq!(pkg_dir("target/site", "pkg"), PathBuf::from("target/site/pkg"));
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_served_over_http() {
    let addr = spawn_base_router().await;
    let response = raw_get(addr, "/healthz").await;
    assert!(response.starts_with("HTTP/1.1 200"), "unexpected response: {response}");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let addr = spawn_base_router().await;
    let response = raw_get(addr, "/nope").await;
    assert!(response.starts_with("HTTP/1.1 404"), "unexpected response: {response}");
}

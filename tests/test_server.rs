//! End-to-end tests driving the real accept loop over localhost TCP.

use staticd::config::Config;
use staticd::server::Server;
use std::net::SocketAddr;
use std::path::Path;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Builds a document root with a few known files.
fn make_doc_root() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();
    std::fs::write(dir.path().join("style.css"), "body { color: red }").unwrap();
    std::fs::write(dir.path().join("blob.bin"), [0u8, 159, 146, 150, 255]).unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    std::fs::write(dir.path().join("sub").join("page.html"), "<p>sub</p>").unwrap();
    dir
}

async fn spawn_server(root: &Path) -> SocketAddr {
    let mut cfg = Config::default();
    cfg.server.listen_addr = "127.0.0.1:0".to_string();
    cfg.static_files.root = root.to_path_buf();

    let server = Server::bind(&cfg).await.unwrap();
    let addr = server.local_addr().unwrap();
    tokio::spawn(server.run());
    addr
}

/// One full exchange: connect, send the raw request, read until the server
/// closes the connection.
async fn exchange(addr: SocketAddr, request: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    response
}

fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
    let pos = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header/body separator");
    let head = String::from_utf8(raw[..pos].to_vec()).unwrap();
    (head, raw[pos + 4..].to_vec())
}

fn header_value<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.lines()
        .filter_map(|l| l.split_once(": "))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v)
}

#[tokio::test]
async fn serves_existing_file_with_exact_length_and_content() {
    let root = make_doc_root();
    let addr = spawn_server(root.path()).await;

    let raw = exchange(addr, b"GET /index.html HTTP/1.1\r\nHost: t\r\n\r\n").await;
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert_eq!(header_value(&head, "Content-Type"), Some("text/html"));
    assert_eq!(header_value(&head, "Connection"), Some("close"));
    assert_eq!(
        header_value(&head, "Content-Length"),
        Some(body.len().to_string().as_str())
    );
    assert_eq!(body, b"<h1>home</h1>");
}

#[tokio::test]
async fn serves_binary_content_byte_for_byte() {
    let root = make_doc_root();
    let addr = spawn_server(root.path()).await;

    let raw = exchange(addr, b"GET /blob.bin HTTP/1.1\r\n\r\n").await;
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert_eq!(header_value(&head, "Content-Length"), Some("5"));
    assert_eq!(body, vec![0u8, 159, 146, 150, 255]);
}

#[tokio::test]
async fn css_gets_its_mime_type() {
    let root = make_doc_root();
    let addr = spawn_server(root.path()).await;

    let raw = exchange(addr, b"GET /style.css HTTP/1.1\r\n\r\n").await;
    let (head, _) = split_response(&raw);

    assert_eq!(header_value(&head, "Content-Type"), Some("text/css"));
}

#[tokio::test]
async fn root_path_serves_index_html() {
    let root = make_doc_root();
    let addr = spawn_server(root.path()).await;

    let explicit = exchange(addr, b"GET /index.html HTTP/1.1\r\n\r\n").await;
    let implicit = exchange(addr, b"GET / HTTP/1.1\r\n\r\n").await;

    assert_eq!(explicit, implicit);
}

#[tokio::test]
async fn missing_file_gets_404_page() {
    let root = make_doc_root();
    let addr = spawn_server(root.path()).await;

    let raw = exchange(addr, b"GET /nope.html HTTP/1.1\r\n\r\n").await;
    let (head, body) = split_response(&raw);
    let body = String::from_utf8(body).unwrap();

    assert!(head.starts_with("HTTP/1.1 404 Not Found"));
    assert_eq!(header_value(&head, "Content-Type"), Some("text/html"));
    assert!(body.contains("404"));
    assert!(body.contains("Not Found"));
}

#[tokio::test]
async fn directory_path_gets_404() {
    let root = make_doc_root();
    let addr = spawn_server(root.path()).await;

    let raw = exchange(addr, b"GET /sub HTTP/1.1\r\n\r\n").await;
    let (head, _) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 404 Not Found"));
}

#[tokio::test]
async fn traversal_paths_get_403() {
    let root = make_doc_root();
    let addr = spawn_server(root.path()).await;

    for path in ["/../secret", "/a/../b", "/..", "/x..y"] {
        let req = format!("GET {} HTTP/1.1\r\n\r\n", path);
        let raw = exchange(addr, req.as_bytes()).await;
        let (head, body) = split_response(&raw);
        let body = String::from_utf8(body).unwrap();

        assert!(head.starts_with("HTTP/1.1 403 Forbidden"), "{}", path);
        assert!(body.contains("403"), "{}", path);
    }
}

#[tokio::test]
async fn two_token_request_line_gets_400() {
    let root = make_doc_root();
    let addr = spawn_server(root.path()).await;

    let raw = exchange(addr, b"GET /\r\n\r\n").await;
    let (head, body) = split_response(&raw);
    let body = String::from_utf8(body).unwrap();

    assert!(head.starts_with("HTTP/1.1 400 Bad Request"));
    assert!(body.contains("Bad Request"));
}

#[tokio::test]
async fn post_gets_501() {
    let root = make_doc_root();
    let addr = spawn_server(root.path()).await;

    let raw = exchange(addr, b"POST /index.html HTTP/1.1\r\n\r\n").await;
    let (head, body) = split_response(&raw);
    let body = String::from_utf8(body).unwrap();

    assert!(head.starts_with("HTTP/1.1 501 Not Implemented"));
    assert!(body.contains("Not Implemented"));
}

#[tokio::test]
async fn silent_client_gets_no_response() {
    let root = make_doc_root();
    let addr = spawn_server(root.path()).await;

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.shutdown().await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    assert!(response.is_empty());
}

#[tokio::test]
async fn concurrent_connections_are_independent() {
    let root = make_doc_root();
    let addr = spawn_server(root.path()).await;

    let (ok, missing) = tokio::join!(
        exchange(addr, b"GET /style.css HTTP/1.1\r\n\r\n"),
        exchange(addr, b"GET /nope.css HTTP/1.1\r\n\r\n"),
    );

    let (ok_head, ok_body) = split_response(&ok);
    let (missing_head, _) = split_response(&missing);

    assert!(ok_head.starts_with("HTTP/1.1 200 OK"));
    assert_eq!(ok_body, b"body { color: red }");
    assert!(missing_head.starts_with("HTTP/1.1 404 Not Found"));
}

#[tokio::test]
async fn connection_closes_after_one_response() {
    let root = make_doc_root();
    let addr = spawn_server(root.path()).await;

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /index.html HTTP/1.1\r\n\r\n")
        .await
        .unwrap();

    // read_to_end returning proves the server closed its end.
    let mut first = Vec::new();
    stream.read_to_end(&mut first).await.unwrap();
    assert!(!first.is_empty());

    // Nothing more arrives on a fresh read of the closed socket.
    let mut buf = [0u8; 16];
    let n = stream.read(&mut buf).await.unwrap();
    assert_eq!(n, 0);
}

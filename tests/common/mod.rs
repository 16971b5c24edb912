//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use codeshell::{GatewayConfig, ServerHandle};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// What the mock upstream saw for one request.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct CapturedRequest {
    pub content_type: Option<String>,
    pub content_length: Option<String>,
    pub body: Bytes,
}

/// A running mock compile upstream.
#[allow(dead_code)]
pub struct MockUpstream {
    pub addr: SocketAddr,
    pub requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

#[allow(dead_code)]
impl MockUpstream {
    pub fn url(&self) -> String {
        format!("http://{}/api/compile.json", self.addr)
    }

    pub fn captured(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

type Responder = Arc<dyn Fn(Bytes) -> (u16, String) + Send + Sync>;

#[derive(Clone)]
struct MockState {
    respond: Responder,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

async fn compile_endpoint(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };
    state.requests.lock().unwrap().push(CapturedRequest {
        content_type: header_text(header::CONTENT_TYPE),
        content_length: header_text(header::CONTENT_LENGTH),
        body: body.clone(),
    });

    let (status, reply) = (state.respond)(body);
    (StatusCode::from_u16(status).unwrap(), reply)
}

/// Start a programmable mock upstream on an ephemeral port.
///
/// `respond` maps the received body to the status and body to send back.
#[allow(dead_code)]
pub async fn start_mock_upstream<F>(respond: F) -> MockUpstream
where
    F: Fn(Bytes) -> (u16, String) + Send + Sync + 'static,
{
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        respond: Arc::new(respond),
        requests: requests.clone(),
    };
    let app = Router::new()
        .route("/api/compile.json", post(compile_endpoint))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockUpstream { addr, requests }
}

const TRUNCATED_RESPONSE: &[u8] =
    b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"par";

/// Start an upstream that reads one request, promises a 100-byte body, sends
/// five bytes and hangs up.
#[allow(dead_code)]
pub async fn start_truncating_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            read_request(&mut stream).await;
            let _ = stream.write_all(TRUNCATED_RESPONSE).await;
            let _ = stream.shutdown().await;
        }
    });
    format!("http://{}/api/compile.json", addr)
}

/// Consume request head and body so closing the socket does not reset it.
async fn read_request(stream: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let Ok(n) = stream.read(&mut chunk).await else { return };
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        let Some(head_end) = text.find("\r\n\r\n") else { continue };
        let content_length = text[..head_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        if buf.len() >= head_end + 4 + content_length {
            return;
        }
    }
}

/// Send `GET <target>` over a raw socket and return the whole response text.
///
/// HTTP clients normalize dot segments before sending, so targets such as
/// `/../x` or `/a/.` need to be written by hand.
#[allow(dead_code)]
pub async fn raw_get(addr: SocketAddr, target: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request =
        format!("GET {target} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();
    raw
}

/// An address nothing is listening on.
#[allow(dead_code)]
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/compile.json", addr)
}

/// Start a gateway on an ephemeral port.
#[allow(dead_code)]
pub async fn start_gateway(root: &Path, upstream_url: String) -> ServerHandle {
    let mut config = GatewayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.static_files.root = root.to_path_buf();
    config.upstream.url = upstream_url;
    config.upstream.connect_timeout_secs = Some(5);
    codeshell::start(config).await.unwrap()
}

/// Test client that never goes through a system proxy.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Assert the three CORS headers are present with their fixed values.
#[allow(dead_code)]
pub fn assert_cors(headers: &reqwest::header::HeaderMap) {
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}

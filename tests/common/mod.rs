//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use employee_facade::config::FacadeConfig;
use employee_facade::{HttpServer, Shutdown};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A request as seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

pub type Recorder = Arc<Mutex<Vec<RecordedRequest>>>;

/// Start a programmable mock upstream on an ephemeral port.
///
/// `handler` maps each request to a status code and a raw body.
pub async fn start_upstream<F>(handler: F) -> (SocketAddr, Recorder)
where
    F: Fn(&RecordedRequest) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let recorder: Recorder = Arc::new(Mutex::new(Vec::new()));
    let handler = Arc::new(handler);

    let seen = recorder.clone();
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            let handler = handler.clone();
            let seen = seen.clone();
            tokio::spawn(async move {
                serve_one(socket, handler.as_ref(), &seen).await;
            });
        }
    });

    (addr, recorder)
}

async fn serve_one<F>(mut socket: TcpStream, handler: &F, seen: &Recorder)
where
    F: Fn(&RecordedRequest) -> (u16, String),
{
    let Some(request) = read_request(&mut socket).await else {
        return;
    };
    let (status, body) = handler(&request);
    seen.lock().unwrap().push(request);

    let status_text = match status {
        200 => "200 OK",
        201 => "201 Created",
        400 => "400 Bad Request",
        404 => "404 Not Found",
        429 => "429 Too Many Requests",
        500 => "500 Internal Server Error",
        502 => "502 Bad Gateway",
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
}

async fn read_request(socket: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let head_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let content_length = lines
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < head_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body_end = buf.len().min(head_end + content_length);
    let body = String::from_utf8_lossy(&buf[head_end..body_end]).to_string();

    Some(RecordedRequest { method, path, body })
}

/// Start the facade against `upstream` and return its address.
pub async fn start_facade(upstream: SocketAddr) -> (SocketAddr, Shutdown) {
    let mut config = FacadeConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.upstream.base_url = format!("http://{}", upstream);

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Upstream employee JSON in its wire format.
pub fn employee_json(id: &str, name: &str, salary: u64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "employee_name": name,
        "employee_salary": salary,
        "employee_age": 30,
        "employee_title": "Engineer",
        "employee_email": format!("{}@company.com", id),
    })
}

/// Upstream envelope around `data`.
pub fn envelope(data: serde_json::Value) -> String {
    serde_json::json!({
        "status": "Successfully processed request.",
        "data": data,
    })
    .to_string()
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

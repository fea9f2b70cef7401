//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

/// Start a mock registry that answers every request with `status` and
/// records each request line (e.g. `DELETE /v1/kv/a/b?recurse HTTP/1.1`).
pub async fn start_mock_registry(status: u16) -> (SocketAddr, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = requests.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let seen = seen.clone();
                    tokio::spawn(async move {
                        let (reader, mut writer) = socket.into_split();
                        let mut reader = BufReader::new(reader);

                        let mut request_line = String::new();
                        if reader.read_line(&mut request_line).await.is_err() {
                            return;
                        }
                        loop {
                            let mut header = String::new();
                            match reader.read_line(&mut header).await {
                                Ok(0) => break,
                                Ok(_) if header == "\r\n" => break,
                                Ok(_) => continue,
                                Err(_) => return,
                            }
                        }
                        seen.lock().unwrap().push(request_line.trim_end().to_string());

                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            _ => "200 OK",
                        };
                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                            status_text
                        );
                        let _ = writer.write_all(response_str.as_bytes()).await;
                        let _ = writer.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, requests)
}

/// A fresh templates/configs layout under the system temp dir:
/// `{root}/tmpl/haproxy.tmpl` plus fragments for each service.
pub fn scratch_layout(services: &[&str]) -> PathBuf {
    let root = std::env::temp_dir().join(format!("proxy-fleet-it-{}", uuid::Uuid::new_v4()));
    let templates = root.join("tmpl");
    std::fs::create_dir_all(&templates).unwrap();
    std::fs::write(templates.join("haproxy.tmpl"), "global\n    daemon\n").unwrap();
    for service in services {
        std::fs::write(
            templates.join(format!("{}-fe.cfg", service)),
            format!("    use_backend {}-be if url_{}\n", service, service),
        )
        .unwrap();
        std::fs::write(
            templates.join(format!("{}-be.cfg", service)),
            format!("backend {}-be\n", service),
        )
        .unwrap();
    }
    root
}

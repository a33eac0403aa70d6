//! Canned-response HTTP listener for client tests
//!
//! Binds an ephemeral local port and answers consecutive connections with
//! pre-scripted responses, one per connection. `Connection: close` forces
//! the client to reconnect between requests, so each scripted response
//! lines up with one client call.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

/// Serves each body as a 200 JSON response to consecutive connections.
/// Returns the server's base URL.
#[allow(dead_code)]
pub fn serve_json(bodies: Vec<&str>) -> String {
    serve_responses(bodies.into_iter().map(|b| (200, b.to_string())).collect())
}

/// Serves scripted (status, body) pairs to consecutive connections.
/// Returns the server's base URL.
pub fn serve_responses(responses: Vec<(u16, String)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    thread::spawn(move || {
        for (status, body) in responses {
            let (mut stream, _) = match listener.accept() {
                Ok(conn) => conn,
                Err(_) => return,
            };

            // Drain the full request (headers plus any body) before
            // answering, so the client never sees the connection close
            // mid-write. The scripted response does not depend on the
            // request's contents.
            let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
            let mut raw = Vec::new();
            let mut chunk = [0u8; 8192];
            loop {
                match stream.read(&mut chunk) {
                    Ok(0) => break,
                    Ok(n) => {
                        raw.extend_from_slice(&chunk[..n]);
                        if request_is_complete(&raw) {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }

            let reason = match status {
                200 => "OK",
                404 => "Not Found",
                500 => "Internal Server Error",
                503 => "Service Unavailable",
                _ => "Unknown",
            };

            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}", addr)
}

/// True once `raw` holds a complete HTTP request: full header block plus
/// `Content-Length` bytes of body.
fn request_is_complete(raw: &[u8]) -> bool {
    let Some(head_end) = raw.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };

    let head = String::from_utf8_lossy(&raw[..head_end]);
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    raw.len() >= head_end + 4 + content_length
}

/// Binds and immediately drops a local port, yielding a base URL that
/// refuses connections.
#[allow(dead_code)]
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

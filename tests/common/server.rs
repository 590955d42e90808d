//! One-request HTTP responder standing in for the conversational API.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

/// Raw text of the request the server received
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub request_line: String,
    pub headers: Vec<String>,
    pub body: String,
}

pub struct OneShotServer {
    pub endpoint: String,
    handle: JoinHandle<Option<CapturedRequest>>,
}

impl OneShotServer {
    /// Answer the first request with `status` and `body`, then stop.
    pub fn respond(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
        let addr = listener.local_addr().expect("local addr");
        let body = body.to_string();

        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().ok()?;
            let mut reader = BufReader::new(stream);

            let mut request_line = String::new();
            reader.read_line(&mut request_line).ok()?;

            let mut headers = Vec::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).ok()?;
                let line = line.trim_end().to_string();
                if line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap_or(0);
                    }
                }
                headers.push(line);
            }

            let mut raw_body = vec![0u8; content_length];
            reader.read_exact(&mut raw_body).ok()?;

            let response = format!(
                "HTTP/1.1 {status} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let mut stream = reader.into_inner();
            stream.write_all(response.as_bytes()).ok()?;
            stream.flush().ok()?;

            Some(CapturedRequest {
                request_line: request_line.trim_end().to_string(),
                headers,
                body: String::from_utf8_lossy(&raw_body).to_string(),
            })
        });

        Self {
            endpoint: format!("http://{addr}/v1beta2/models/gemini-pro:generateMessage"),
            handle,
        }
    }

    /// Request seen by the server; `None` if nothing connected or it failed
    pub fn request(self) -> Option<CapturedRequest> {
        self.handle.join().ok().flatten()
    }
}

/// An endpoint on a port nothing listens on
pub fn refused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/v1beta2/models/gemini-pro:generateMessage")
}

//! Test helpers: an in-process HTTP stub of the assembler service

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// 固定レスポンスを返すスタブサーバ
pub struct StubServer {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// 受け取ったリクエスト（ヘッダ + 本文）
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// `status` は "200 OK" のようなステータス行の後半
pub async fn spawn_stub(status: &'static str, body: &'static str) -> StubServer {
    spawn_stub_sequence(vec![(status, body)]).await
}

/// 接続ごとに順番にレスポンスを返す（最後のレスポンスを繰り返す）
pub async fn spawn_stub_sequence(responses: Vec<(&'static str, &'static str)>) -> StubServer {
    assert!(!responses.is_empty());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));

    let recorded = requests.clone();
    tokio::spawn(async move {
        let mut served = 0;
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let (status, body) = responses[served.min(responses.len() - 1)];
            served += 1;

            let recorded = recorded.clone();
            tokio::spawn(async move {
                if let Some(request) = handle(stream, status, body).await {
                    recorded.lock().unwrap().push(request);
                }
            });
        }
    });

    StubServer {
        url: format!("http://{}/process-files/", addr),
        requests,
    }
}

fn content_length(headers: &str) -> Option<usize> {
    headers.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.trim().eq_ignore_ascii_case("content-length") {
            value.trim().parse().ok()
        } else {
            None
        }
    })
}

async fn handle(mut stream: TcpStream, status: &str, body: &str) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let received = buf.len() - (header_end + 4);
            match content_length(&text[..header_end]) {
                Some(len) if received >= len => break,
                Some(_) => {}
                // chunked: multipart の終端 boundary まで読む
                None if text.ends_with("--\r\n") || text.ends_with("0\r\n\r\n") => break,
                None => {}
            }
        }
    }

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await.ok()?;
    stream.shutdown().await.ok()?;

    Some(String::from_utf8_lossy(&buf).into_owned())
}

use http::{Method, StatusCode};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::error::{AppError, AppResult, ServeError};

/// Request heads larger than this are rejected.
const MAX_HEAD_BYTES: usize = 16 * 1024;

#[derive(Debug)]
pub(super) struct RequestHead {
    pub(super) method: Method,
    pub(super) target: String,
}

#[derive(Debug)]
pub(super) struct HttpError {
    pub(super) status: StatusCode,
    pub(super) message: &'static str,
}

impl HttpError {
    const fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }
}

pub(super) async fn read_request_head(socket: &mut TcpStream) -> Result<RequestHead, HttpError> {
    let mut buffer: Vec<u8> = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let bytes = socket
            .read(&mut chunk)
            .await
            .map_err(|_err| HttpError::new(StatusCode::BAD_REQUEST, "Failed to read request"))?;
        if bytes == 0 {
            return Err(HttpError::new(StatusCode::BAD_REQUEST, "Empty request"));
        }
        let read_slice = chunk
            .get(..bytes)
            .ok_or_else(|| HttpError::new(StatusCode::BAD_REQUEST, "Invalid read length"))?;
        buffer.extend_from_slice(read_slice);
        if let Some(pos) = find_header_end(&buffer) {
            break pos;
        }
        if buffer.len() > MAX_HEAD_BYTES {
            return Err(HttpError::new(
                StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE,
                "Request head too large",
            ));
        }
    };

    let head = buffer
        .get(..header_end)
        .ok_or_else(|| HttpError::new(StatusCode::BAD_REQUEST, "Malformed request head"))?;
    parse_request_head(head)
}

pub(super) fn parse_request_head(head: &[u8]) -> Result<RequestHead, HttpError> {
    let text = std::str::from_utf8(head)
        .map_err(|_err| HttpError::new(StatusCode::BAD_REQUEST, "Invalid request encoding"))?;
    let request_line = text
        .split("\r\n")
        .next()
        .ok_or_else(|| HttpError::new(StatusCode::BAD_REQUEST, "Missing request line"))?;
    let mut parts = request_line.split_whitespace();
    let (Some(method), Some(target), Some(version), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(HttpError::new(
            StatusCode::BAD_REQUEST,
            "Malformed request line",
        ));
    };
    if !version.starts_with("HTTP/1.") {
        return Err(HttpError::new(
            StatusCode::BAD_REQUEST,
            "Unsupported HTTP version",
        ));
    }
    if !target.starts_with('/') {
        return Err(HttpError::new(
            StatusCode::BAD_REQUEST,
            "Request target must be a path",
        ));
    }
    let method = Method::from_bytes(method.as_bytes())
        .map_err(|_err| HttpError::new(StatusCode::BAD_REQUEST, "Invalid HTTP method"))?;

    Ok(RequestHead {
        method,
        target: target.to_owned(),
    })
}

fn find_header_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|window| window == b"\r\n\r\n")
}

/// Writes a complete `Connection: close` response. With `include_body`
/// unset the headers still describe the body, which is how HEAD is answered.
pub(super) async fn write_response(
    socket: &mut TcpStream,
    status: StatusCode,
    content_type: &str,
    body: &[u8],
    include_body: bool,
) -> AppResult<()> {
    let mut head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default(),
        content_type,
        body.len()
    );
    if status == StatusCode::METHOD_NOT_ALLOWED {
        head.push_str("Allow: GET, HEAD\r\n");
    }
    head.push_str("\r\n");

    socket.write_all(head.as_bytes()).await.map_err(|err| {
        AppError::serve(ServeError::Io {
            context: "writing response head",
            source: err,
        })
    })?;
    if include_body {
        socket.write_all(body).await.map_err(|err| {
            AppError::serve(ServeError::Io {
                context: "writing response body",
                source: err,
            })
        })?;
    }
    socket.flush().await.map_err(|err| {
        AppError::serve(ServeError::Io {
            context: "flushing response",
            source: err,
        })
    })?;
    Ok(())
}

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use super::wire::parse_request_head;
use super::{AssetRoot, AssetServer, DEFAULT_FALLBACK, ServeOptions, content_type};
use crate::error::{AppError, AppResult};
use crate::shutdown::{ShutdownSender, shutdown_channel};

const INDEX_BODY: &str = "<html>deck</html>";
const SCRIPT_BODY: &str = "console.log('warm');";

fn io_err(context: &str, err: &std::io::Error) -> AppError {
    AppError::validation(format!("{}: {}", context, err))
}

fn site(with_index: bool) -> AppResult<TempDir> {
    let dir = tempfile::tempdir().map_err(|err| io_err("tempdir", &err))?;
    if with_index {
        std::fs::write(dir.path().join("index.html"), INDEX_BODY)
            .map_err(|err| io_err("write index", &err))?;
    }
    std::fs::create_dir(dir.path().join("assets")).map_err(|err| io_err("mkdir", &err))?;
    std::fs::write(dir.path().join("assets").join("app.js"), SCRIPT_BODY)
        .map_err(|err| io_err("write script", &err))?;
    Ok(dir)
}

async fn start(root: &Path) -> AppResult<(SocketAddr, ShutdownSender)> {
    let options = ServeOptions {
        listen: SocketAddr::from(([127, 0, 0, 1], 0)),
        root: root.to_path_buf(),
        fallback: DEFAULT_FALLBACK.to_owned(),
    };
    let server = AssetServer::bind(&options).await?;
    let addr = server.local_addr()?;
    let (shutdown_tx, _) = shutdown_channel();
    tokio::spawn(server.run(shutdown_tx.subscribe()));
    Ok((addr, shutdown_tx))
}

async fn exchange(addr: SocketAddr, request: &str) -> AppResult<String> {
    let mut stream = TcpStream::connect(addr)
        .await
        .map_err(|err| io_err("connect", &err))?;
    stream
        .write_all(request.as_bytes())
        .await
        .map_err(|err| io_err("write request", &err))?;
    let mut response = Vec::new();
    stream
        .read_to_end(&mut response)
        .await
        .map_err(|err| io_err("read response", &err))?;
    String::from_utf8(response)
        .map_err(|err| AppError::validation(format!("Response is not UTF-8: {}", err)))
}

fn get(path: &str) -> String {
    format!("GET {} HTTP/1.1\r\nHost: localhost\r\n\r\n", path)
}

/// Checks the status line, the headers or body fragments, and the tail.
fn expect_response(response: &str, status: &str, contains: &[&str], tail: &str) -> AppResult<()> {
    if !response.starts_with(status) {
        return Err(AppError::validation(format!(
            "Expected '{}', got: {}",
            status, response
        )));
    }
    if let Some(missing) = contains.iter().find(|needle| !response.contains(**needle)) {
        return Err(AppError::validation(format!(
            "Response is missing '{}': {}",
            missing, response
        )));
    }
    if !response.ends_with(tail) {
        return Err(AppError::validation(format!(
            "Response should end with '{}': {}",
            tail, response
        )));
    }
    Ok(())
}

#[test]
fn content_types_follow_the_extension_map() -> AppResult<()> {
    let cases = [
        ("index.html", "text/html"),
        ("a/app.js", "application/javascript"),
        ("font.woff2", "font/woff2"),
        ("logo.svg", "image/svg+xml"),
        ("data.bin", "application/octet-stream"),
        ("README", "application/octet-stream"),
    ];
    for (path, expected) in cases {
        let found = content_type(Path::new(path));
        if found != expected {
            return Err(AppError::validation(format!(
                "{} mapped to {}, expected {}",
                path, found, expected
            )));
        }
    }
    Ok(())
}

#[test]
fn request_targets_resolve_under_the_root() -> AppResult<()> {
    let assets = AssetRoot::new("/srv/dist".into(), DEFAULT_FALLBACK);
    let script = Some(PathBuf::from("/srv/dist/assets/app.js"));
    let cases = [
        ("/", None),
        ("/?lang=en", None),
        ("/assets/app.js?v=3", script.clone()),
        ("/assets/./app.js", script),
        ("/../etc/passwd", None),
        ("/assets/../../etc/passwd", None),
    ];
    for (target, expected) in cases {
        let found = assets.candidate(target);
        if found != expected {
            return Err(AppError::validation(format!(
                "{} resolved to {:?}, expected {:?}",
                target, found, expected
            )));
        }
    }
    if assets.fallback() != Path::new("/srv/dist/index.html") {
        return Err(AppError::validation(format!(
            "Unexpected fallback {}",
            assets.fallback().display()
        )));
    }
    Ok(())
}

#[test]
fn malformed_request_lines_are_rejected() -> AppResult<()> {
    let malformed: [&[u8]; 4] = [
        b"GET /",
        b"GET / HTTP/1.1 extra",
        b"GET / SPDY/3",
        b"GET http://example.com/ HTTP/1.1",
    ];
    for head in malformed {
        if parse_request_head(head).is_ok() {
            return Err(AppError::validation(format!(
                "Expected '{}' to be rejected",
                String::from_utf8_lossy(head)
            )));
        }
    }
    if parse_request_head(b"GET /index.html HTTP/1.0\r\nHost: x").is_err() {
        return Err(AppError::validation("HTTP/1.0 request should parse"));
    }
    Ok(())
}

#[tokio::test]
async fn serves_files_with_their_content_type() -> AppResult<()> {
    let dir = site(true)?;
    let (addr, shutdown_tx) = start(dir.path()).await?;

    let response = exchange(addr, &get("/assets/app.js?cache=1")).await?;
    expect_response(
        &response,
        "HTTP/1.1 200 OK",
        &["Content-Type: application/javascript"],
        SCRIPT_BODY,
    )?;

    drop(shutdown_tx.send(()));
    Ok(())
}

#[tokio::test]
async fn unknown_paths_and_traversal_fall_back_to_index() -> AppResult<()> {
    let dir = site(true)?;
    let (addr, shutdown_tx) = start(dir.path()).await?;

    for path in ["/", "/slides/3", "/../../etc/passwd", "/assets"] {
        let response = exchange(addr, &get(path)).await?;
        expect_response(
            &response,
            "HTTP/1.1 200 OK",
            &["Content-Type: text/html"],
            INDEX_BODY,
        )?;
    }

    drop(shutdown_tx.send(()));
    Ok(())
}

#[tokio::test]
async fn head_omits_the_body() -> AppResult<()> {
    let dir = site(true)?;
    let (addr, shutdown_tx) = start(dir.path()).await?;

    let response = exchange(addr, "HEAD /assets/app.js HTTP/1.1\r\n\r\n").await?;
    let length = format!("Content-Length: {}", SCRIPT_BODY.len());
    expect_response(&response, "HTTP/1.1 200 OK", &[length.as_str()], "\r\n\r\n")?;

    drop(shutdown_tx.send(()));
    Ok(())
}

#[tokio::test]
async fn missing_fallback_is_not_found() -> AppResult<()> {
    let dir = site(false)?;
    let (addr, shutdown_tx) = start(dir.path()).await?;

    let response = exchange(addr, &get("/nothing-here")).await?;
    expect_response(&response, "HTTP/1.1 404 Not Found", &[], "Not found")?;

    drop(shutdown_tx.send(()));
    Ok(())
}

#[tokio::test]
async fn bad_requests_and_methods_are_refused() -> AppResult<()> {
    let dir = site(true)?;
    let (addr, shutdown_tx) = start(dir.path()).await?;

    let garbage = exchange(addr, "garbage\r\n\r\n").await?;
    expect_response(&garbage, "HTTP/1.1 400 Bad Request", &[], "")?;

    let post = exchange(addr, "POST / HTTP/1.1\r\nContent-Length: 0\r\n\r\n").await?;
    expect_response(
        &post,
        "HTTP/1.1 405 Method Not Allowed",
        &["Allow: GET, HEAD"],
        "",
    )?;

    drop(shutdown_tx.send(()));
    Ok(())
}

#[tokio::test]
async fn root_must_be_a_directory() -> AppResult<()> {
    let dir = site(true)?;
    let options = ServeOptions {
        listen: SocketAddr::from(([127, 0, 0, 1], 0)),
        root: dir.path().join("index.html"),
        fallback: DEFAULT_FALLBACK.to_owned(),
    };
    match AssetServer::bind(&options).await {
        Err(AppError::Serve(crate::error::ServeError::RootNotDirectory { .. })) => Ok(()),
        Err(err) => Err(AppError::validation(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::validation("Expected a root error")),
    }
}

//! Static asset server for the built web deck.
mod assets;
mod wire;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use http::{Method, StatusCode};
use tokio::net::{TcpListener, TcpStream};

use crate::error::{AppError, AppResult, ServeError};
use crate::shutdown::ShutdownReceiver;

pub use assets::{AssetRoot, DEFAULT_FALLBACK, content_type};

use wire::{read_request_head, write_response};

/// Port used when neither `--listen` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub listen: SocketAddr,
    pub root: PathBuf,
    pub fallback: String,
}

pub struct AssetServer {
    listener: TcpListener,
    assets: Arc<AssetRoot>,
}

impl AssetServer {
    /// Checks the root and binds the listener.
    ///
    /// # Errors
    ///
    /// Returns an error when the root is not a directory or the address
    /// cannot be bound.
    pub async fn bind(options: &ServeOptions) -> AppResult<Self> {
        let is_dir = tokio::fs::metadata(&options.root)
            .await
            .is_ok_and(|meta| meta.is_dir());
        if !is_dir {
            return Err(AppError::serve(ServeError::RootNotDirectory {
                path: options.root.display().to_string(),
            }));
        }

        let listener = TcpListener::bind(options.listen).await.map_err(|err| {
            AppError::serve(ServeError::Bind {
                addr: options.listen.to_string(),
                source: err,
            })
        })?;
        Ok(Self {
            listener,
            assets: Arc::new(AssetRoot::new(options.root.clone(), &options.fallback)),
        })
    }

    /// # Errors
    ///
    /// Returns an error when the bound address cannot be read back.
    pub fn local_addr(&self) -> AppResult<SocketAddr> {
        self.listener.local_addr().map_err(|err| {
            AppError::serve(ServeError::Io {
                context: "reading listener address",
                source: err,
            })
        })
    }

    /// Accepts connections until shutdown is broadcast. Each connection is
    /// handled on its own task.
    pub async fn run(self, mut shutdown_rx: ShutdownReceiver) {
        tracing::info!(
            "Serving {} on {}",
            self.assets.root().display(),
            self.listener
                .local_addr()
                .map_or_else(|_err| "unknown address".to_owned(), |addr| addr.to_string())
        );
        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                accepted = self.listener.accept() => {
                    let (socket, peer) = match accepted {
                        Ok(result) => result,
                        Err(err) => {
                            tracing::warn!("Failed to accept connection: {}", err);
                            continue;
                        }
                    };
                    let assets = Arc::clone(&self.assets);
                    tokio::spawn(async move {
                        if let Err(err) = handle_connection(socket, &assets).await {
                            tracing::debug!("Connection from {} ended early: {}", peer, err);
                        }
                    });
                }
            }
        }
        tracing::info!("Asset server stopped");
    }
}

/// Binds and serves until shutdown.
///
/// # Errors
///
/// Returns an error when binding fails.
pub async fn run_server(options: &ServeOptions, shutdown_rx: ShutdownReceiver) -> AppResult<()> {
    let server = AssetServer::bind(options).await?;
    server.run(shutdown_rx).await;
    Ok(())
}

async fn handle_connection(mut socket: TcpStream, assets: &AssetRoot) -> AppResult<()> {
    let head = match read_request_head(&mut socket).await {
        Ok(head) => head,
        Err(err) => {
            return write_response(
                &mut socket,
                err.status,
                "text/plain",
                err.message.as_bytes(),
                true,
            )
            .await;
        }
    };

    let include_body = head.method != Method::HEAD;
    if head.method != Method::GET && head.method != Method::HEAD {
        return write_response(
            &mut socket,
            StatusCode::METHOD_NOT_ALLOWED,
            "text/plain",
            b"Method not allowed",
            true,
        )
        .await;
    }

    match assets.load(&head.target).await {
        Some(asset) => {
            tracing::debug!("{} {} -> 200", head.method, head.target);
            write_response(
                &mut socket,
                StatusCode::OK,
                asset.content_type,
                &asset.body,
                include_body,
            )
            .await
        }
        None => {
            tracing::debug!("{} {} -> 404", head.method, head.target);
            write_response(
                &mut socket,
                StatusCode::NOT_FOUND,
                "text/plain",
                b"Not found",
                include_body,
            )
            .await
        }
    }
}

#[cfg(test)]
mod tests;

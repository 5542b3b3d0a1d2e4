use std::path::{Component, Path, PathBuf};

/// Default document served for `/` and for every path that does not name a
/// file under the root.
pub const DEFAULT_FALLBACK: &str = "index.html";

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Extension to `Content-Type`. Anything else is served as octet-stream.
const MIME_TYPES: [(&str, &str); 11] = [
    ("html", "text/html"),
    ("js", "application/javascript"),
    ("css", "text/css"),
    ("json", "application/json"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("ttf", "font/ttf"),
];

#[must_use]
pub fn content_type(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| {
            MIME_TYPES
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, mime)| *mime)
        })
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}

#[derive(Debug)]
pub struct Asset {
    pub body: Vec<u8>,
    pub content_type: &'static str,
}

#[derive(Debug, Clone)]
pub struct AssetRoot {
    root: PathBuf,
    fallback: PathBuf,
}

impl AssetRoot {
    #[must_use]
    pub fn new(root: PathBuf, fallback: &str) -> Self {
        let fallback = root.join(fallback);
        Self { root, fallback }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn fallback(&self) -> &Path {
        &self.fallback
    }

    /// Maps a request target onto a candidate file under the root. The query
    /// string is dropped. Returns `None` for `/` and for targets that try to
    /// leave the root, both of which are answered with the fallback.
    #[must_use]
    pub fn candidate(&self, target: &str) -> Option<PathBuf> {
        let path = target.split(['?', '#']).next().unwrap_or_default();
        let mut resolved = self.root.clone();
        let mut segments = 0usize;
        for segment in path.split('/').filter(|segment| !segment.is_empty()) {
            let mut components = Path::new(segment).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(part)), None) => {
                    resolved.push(part);
                    segments = segments.saturating_add(1);
                }
                (Some(Component::CurDir), None) => {}
                (Some(_), _) | (None, _) => return None,
            }
        }
        (segments > 0).then_some(resolved)
    }

    /// Loads the file for `target`, falling back when it does not name a
    /// regular file. `None` means the fallback itself could not be read.
    pub async fn load(&self, target: &str) -> Option<Asset> {
        if let Some(path) = self.candidate(target)
            && tokio::fs::metadata(&path)
                .await
                .is_ok_and(|meta| meta.is_file())
        {
            match tokio::fs::read(&path).await {
                Ok(body) => {
                    return Some(Asset {
                        body,
                        content_type: content_type(&path),
                    });
                }
                Err(err) => {
                    tracing::warn!("Failed to read {}: {}", path.display(), err);
                }
            }
        }

        match tokio::fs::read(&self.fallback).await {
            Ok(body) => Some(Asset {
                body,
                content_type: content_type(&self.fallback),
            }),
            Err(err) => {
                tracing::debug!(
                    "Fallback {} unavailable: {}",
                    self.fallback.display(),
                    err
                );
                None
            }
        }
    }
}

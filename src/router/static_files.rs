//! Static file resolution
//!
//! Maps a request path onto a file under a fixed root directory and reads it
//! whole. Content type is not decided here.

use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("cannot open {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("path {path:?} leaves the static root")]
    Forbidden { path: String },
}

#[derive(Debug, Clone)]
pub struct StaticFileResolver {
    root: PathBuf,
}

impl StaticFileResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File system location for a request path.
    ///
    /// A single leading `/` is stripped. Any `..`, root or prefix component
    /// in what remains is rejected, so the result always lies under the root.
    pub fn file_path(&self, request_path: &str) -> Result<PathBuf, ResolveError> {
        let relative = Path::new(request_path.strip_prefix('/').unwrap_or(request_path));

        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(ResolveError::Forbidden {
                path: request_path.to_string(),
            });
        }

        Ok(self.root.join(relative))
    }

    /// Reads the full contents of the file behind `request_path`.
    pub async fn resolve(&self, request_path: &str) -> Result<Vec<u8>, ResolveError> {
        let path = self.file_path(request_path)?;

        match tokio::fs::read(&path).await {
            Ok(contents) => Ok(contents),
            Err(source) => Err(ResolveError::NotFound { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_one_leading_slash() {
        let resolver = StaticFileResolver::new("/srv/static");
        assert_eq!(
            resolver.file_path("/css/site.css").unwrap(),
            PathBuf::from("/srv/static/css/site.css")
        );
    }

    #[test]
    fn rejects_absolute_after_strip() {
        let resolver = StaticFileResolver::new("/srv/static");
        assert!(matches!(
            resolver.file_path("//etc/passwd"),
            Err(ResolveError::Forbidden { .. })
        ));
    }
}

//! Local preview server for a built site.
//!
//! Mirrors a subpath deployment: only requests under the base path are
//! served, and every response carries the page's Content-Security-Policy.

use std::fs;
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};

use log::{debug, info, warn};
use tiny_http::{Header, Request, Response, Server};

use crate::config::BasePath;
use crate::render::content_security_policy;
use crate::site::{digest, BuildManifest, MANIFEST_FILE};
use crate::{Error, Result};

/// Serves files from a built site directory
pub struct PreviewServer {
    server: Server,
    site_dir: PathBuf,
    base_path: BasePath,
}

impl PreviewServer {
    /// Bind to `addr` (e.g. `127.0.0.1:4173`, or port `0` for any free port).
    pub fn bind(addr: &str, site_dir: impl Into<PathBuf>, base_path: BasePath) -> Result<Self> {
        let server = Server::http(addr).map_err(|e| Error::ServeError(format!("bind {}: {}", addr, e)))?;
        let site_dir = site_dir.into();
        info!(
            "serving {} at http://{}{}",
            site_dir.display(),
            server.server_addr(),
            base_path
        );
        Ok(Self {
            server,
            site_dir,
            base_path,
        })
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serve requests until the listener fails.
    pub fn run(&self) -> Result<()> {
        loop {
            self.handle_next()?;
        }
    }

    /// Block for one request and answer it.
    pub fn handle_next(&self) -> Result<()> {
        let request = self
            .server
            .recv()
            .map_err(|e| Error::ServeError(format!("receive: {}", e)))?;
        self.respond(request)
    }

    fn respond(&self, request: Request) -> Result<()> {
        let url = request.url().to_string();
        let path = url.split(['?', '#']).next().unwrap_or_default();
        debug!("{} {}", request.method(), path);

        let response = match self.resolve(path) {
            Some(file) => match fs::read(&file) {
                Ok(body) => {
                    let etag = format!("\"{}\"", digest(&body));
                    Response::from_data(body)
                        .with_header(header("Content-Type", content_type(&file)))
                        .with_header(header("ETag", &etag))
                }
                Err(e) => {
                    warn!("cannot read {}: {}", file.display(), e);
                    not_found()
                }
            },
            None => not_found(),
        }
        .with_header(header("Content-Security-Policy", &content_security_policy()));

        request
            .respond(response)
            .map_err(|e| Error::ServeError(format!("respond: {}", e)))
    }

    /// Map a request path to a file in the site directory.
    fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let relative = self.base_path.strip(request_path)?;
        let mut path = self.site_dir.clone();
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::CurDir => {}
                _ => return None,
            }
        }
        if path.is_dir() {
            path.push("index.html");
        }
        path.is_file().then_some(path)
    }
}

fn not_found() -> Response<std::io::Cursor<Vec<u8>>> {
    Response::from_data(b"Not Found".to_vec())
        .with_status_code(404)
        .with_header(header("Content-Type", "text/plain; charset=utf-8"))
}

fn header(name: &str, value: &str) -> Header {
    match Header::from_bytes(name.as_bytes(), value.as_bytes()) {
        Ok(h) => h,
        // names are fixed and values are generated ASCII
        Err(()) => unreachable!("invalid header {}", name),
    }
}

/// Content-Type for a file by extension.
pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// Base path recorded in a built site's manifest.
///
/// Falls back to the root path, with a warning, when the manifest is missing
/// or unreadable.
pub fn manifest_base_path(dir: impl AsRef<Path>) -> BasePath {
    let dir = dir.as_ref();
    match BuildManifest::load(dir) {
        Ok(manifest) => BasePath::new(&manifest.base_path),
        Err(e) => {
            warn!(
                "no usable manifest in {}: {}; serving under /",
                dir.display(),
                e
            );
            BasePath::root()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types_by_extension() {
        assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("assets/site.css")), "text/css; charset=utf-8");
        assert_eq!(content_type(Path::new("logo.PNG")), "application/octet-stream");
        assert_eq!(content_type(Path::new("README")), "application/octet-stream");
    }

    #[test]
    fn resolve_rejects_traversal_and_foreign_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<p>hi</p>").unwrap();
        let server = PreviewServer::bind("127.0.0.1:0", dir.path(), BasePath::new("site")).unwrap();

        assert_eq!(server.resolve("/site/"), Some(dir.path().join("index.html")));
        assert_eq!(server.resolve("/site"), Some(dir.path().join("index.html")));
        assert_eq!(server.resolve("/site/index.html"), Some(dir.path().join("index.html")));
        assert_eq!(server.resolve("/site/../index.html"), None);
        assert_eq!(server.resolve("/index.html"), None);
        assert_eq!(server.resolve("/site/missing.css"), None);
    }

    #[test]
    fn base_path_comes_from_manifest_or_root() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(manifest_base_path(dir.path()), BasePath::root());

        fs::write(dir.path().join(MANIFEST_FILE), "{ not json").unwrap();
        assert_eq!(manifest_base_path(dir.path()), BasePath::root());

        fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{"base_path":"/care-agency-webpage/","files":{},"smoke_passed":true}"#,
        )
        .unwrap();
        assert_eq!(
            manifest_base_path(dir.path()),
            BasePath::new("care-agency-webpage")
        );
    }
}

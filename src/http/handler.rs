//! Request-to-response translation.

use std::path::Path;

use crate::content::{loader, resolver};
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};

/// Body used when even `/404.html` is missing.
const FALLBACK_404_BODY: &str = "<h1>404 Not Found</h1>";

/// Decides the response for one raw request.
///
/// Routing rules:
/// - non-GET requests get the fixed 405 response;
/// - `/` and `/index.html` both serve `/index.html`;
/// - `/error.html` is served with status 500 whether or not it exists;
/// - any other path is served as-is with 200;
/// - a missing file serves `/404.html` with 404, or an inline body when
///   that page is missing too.
pub async fn respond(raw: &[u8], root: &Path) -> Response {
    let request = Request::interpret(raw);

    if request.method != Method::Get {
        return Response::method_not_allowed();
    }

    let forced_error = request.path == Some("/error.html");

    let content = match request.path {
        Some("/") | Some("/index.html") => load_under(root, "/index.html").await,
        Some(path) => load_under(root, path).await,
        None => None,
    };

    match content {
        Some(body) if forced_error => Response::new(StatusCode::InternalServerError, body),
        Some(body) => Response::new(StatusCode::Ok, body),
        None => {
            // /error.html keeps its forced status even through the fallback.
            let status = if forced_error {
                StatusCode::InternalServerError
            } else {
                StatusCode::NotFound
            };

            let body = match load_under(root, "/404.html").await {
                Some(body) => body,
                None => FALLBACK_404_BODY.into(),
            };

            Response::new(status, body)
        }
    }
}

async fn load_under(root: &Path, url_path: &str) -> Option<Vec<u8>> {
    let resolved = resolver::resolve(root, url_path)?;
    loader::load(&resolved).await
}

/// The request method as the naive detector sees it.
///
/// Anything without the literal token `GET` somewhere in the buffer is
/// `Unrecognized` and answered with 405.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Unrecognized,
}

/// The parts of an inbound request the server actually looks at.
#[derive(Debug, Clone)]
pub struct Request<'a> {
    pub method: Method,
    pub path: Option<&'a str>,
}

impl<'a> Request<'a> {
    /// Interprets a raw request buffer.
    ///
    /// Method detection is a substring scan for `GET`, not request-line
    /// parsing, and the path is whatever sits between the first `/` and the
    /// next space. Either may be missing; a missing path falls through to
    /// the not-found handling downstream.
    pub fn interpret(raw: &'a [u8]) -> Self {
        Self {
            method: detect_method(raw),
            path: extract_path(raw),
        }
    }
}

fn detect_method(raw: &[u8]) -> Method {
    if raw.windows(3).any(|w| w == b"GET") {
        Method::Get
    } else {
        Method::Unrecognized
    }
}

fn extract_path(raw: &[u8]) -> Option<&str> {
    let start = raw.iter().position(|&b| b == b'/')?;
    let len = raw[start..].iter().position(|&b| b == b' ')?;
    std::str::from_utf8(&raw[start..start + len]).ok()
}

//! Request path to file path resolution.

use std::fmt::Write;
use std::path::{Component, Path, PathBuf};

/// Map a request path to a file beneath `root`.
///
/// `/` becomes the default file. Returns `None` when the path would leave
/// `root` (parent-directory segments, absolute or prefixed components) or
/// names a directory (`/a/`, `/a/.`).
pub fn resolve(root: &Path, request_path: &str, default_file: &str) -> Option<PathBuf> {
    let relative = match request_path {
        "/" => default_file,
        dir if dir.ends_with('/') || dir.ends_with("/.") => return None,
        other => other.trim_start_matches('/'),
    };

    let mut resolved = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(resolved)
}

/// Make a request path safe to echo in a response body.
///
/// Printable ASCII passes through, except characters that are significant in
/// HTML; everything else is percent-encoded byte by byte.
pub fn sanitize_for_echo(request_path: &str) -> String {
    let mut out = String::with_capacity(request_path.len());
    for byte in request_path.bytes() {
        let passthrough =
            byte.is_ascii_graphic() && !matches!(byte, b'<' | b'>' | b'"' | b'\'' | b'&' | b'`');
        if passthrough {
            out.push(byte as char);
        } else {
            let _ = write!(out, "%{:02X}", byte);
        }
    }
    out
}

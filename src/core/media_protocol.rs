//! Custom `media` protocol that streams local video files into the webview.
//!
//! `<video>` seeks with `Range` requests, so single byte ranges are honored
//! with `206 Partial Content`.

use std::borrow::Cow;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use http::{header, Request, Response, StatusCode};

use crate::error::EditorResult;

pub const MEDIA_PROTOCOL: &str = "media";

/// Upper bound on bytes read for a single request.
const MAX_CHUNK_BYTES: u64 = 4 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    /// First byte, inclusive.
    pub start: u64,
    /// Last byte, inclusive.
    pub end: u64,
}

impl ByteRange {
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Shorten the range to at most `MAX_CHUNK_BYTES`, keeping its start.
    fn capped(self) -> Self {
        Self {
            start: self.start,
            end: self.end.min(self.start + MAX_CHUNK_BYTES - 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeRequest {
    Full,
    Partial(ByteRange),
    Unsatisfiable,
}

/// Parse a `Range` header against a resource of `len` bytes.
///
/// Only the first range of a multi-range request is served, and never more
/// than `MAX_CHUNK_BYTES` of it. Headers that are not byte ranges fall back to
/// the full resource.
pub fn parse_range(header: Option<&str>, len: u64) -> RangeRequest {
    let Some(spec) = header.and_then(|h| h.trim().strip_prefix("bytes=")) else {
        return RangeRequest::Full;
    };
    let first = spec.split(',').next().unwrap_or("").trim();
    let Some((start, end)) = first.split_once('-') else {
        return RangeRequest::Full;
    };
    let (start, end) = (start.trim(), end.trim());

    let range = if start.is_empty() {
        // Suffix range: last N bytes.
        let Ok(suffix) = end.parse::<u64>() else {
            return RangeRequest::Full;
        };
        if suffix == 0 || len == 0 {
            return RangeRequest::Unsatisfiable;
        }
        ByteRange {
            start: len.saturating_sub(suffix),
            end: len - 1,
        }
    } else {
        let Ok(start) = start.parse::<u64>() else {
            return RangeRequest::Full;
        };
        if start >= len {
            return RangeRequest::Unsatisfiable;
        }
        let end = if end.is_empty() {
            len - 1
        } else {
            match end.parse::<u64>() {
                Ok(end) if end >= start => end.min(len - 1),
                _ => return RangeRequest::Unsatisfiable,
            }
        };
        ByteRange { start, end }
    };
    RangeRequest::Partial(range.capped())
}

/// Map a request path back to the local file it names.
pub fn request_file_path(uri_path: &str) -> PathBuf {
    let trimmed = uri_path.strip_prefix('/').unwrap_or(uri_path);
    let decoded = urlencoding::decode(trimmed)
        .map(|p| p.into_owned())
        .unwrap_or_else(|_| trimmed.to_string());
    PathBuf::from(decoded)
}

/// Handle one request from the webview.
pub fn serve(request: &Request<Vec<u8>>) -> Response<Cow<'static, [u8]>> {
    let path = request_file_path(request.uri().path());
    let range_header = request
        .headers()
        .get(header::RANGE)
        .and_then(|v| v.to_str().ok());

    match respond_with_file(&path, range_header) {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "media request failed");
            let status = match &err {
                crate::error::EditorError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                    StatusCode::NOT_FOUND
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            status_response(status)
        }
    }
}

fn respond_with_file(
    path: &Path,
    range_header: Option<&str>,
) -> EditorResult<Response<Cow<'static, [u8]>>> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    let response = match parse_range(range_header, len) {
        RangeRequest::Unsatisfiable => Response::builder()
            .status(StatusCode::RANGE_NOT_SATISFIABLE)
            .header(header::CONTENT_RANGE, format!("bytes */{len}"))
            .body(Cow::Borrowed(&[][..])),
        RangeRequest::Partial(range) => {
            let body = read_range(&mut file, range)?;
            Response::builder()
                .status(StatusCode::PARTIAL_CONTENT)
                .header(header::CONTENT_TYPE, mime.as_ref())
                .header(header::ACCEPT_RANGES, "bytes")
                .header(
                    header::CONTENT_RANGE,
                    format!("bytes {}-{}/{}", range.start, range.end, len),
                )
                .header(header::CONTENT_LENGTH, body.len())
                .body(Cow::Owned(body))
        }
        // Large files without a range get their first chunk so the webview
        // continues with range requests.
        RangeRequest::Full if len > MAX_CHUNK_BYTES => {
            let range = ByteRange { start: 0, end: len - 1 }.capped();
            let body = read_range(&mut file, range)?;
            Response::builder()
                .status(StatusCode::PARTIAL_CONTENT)
                .header(header::CONTENT_TYPE, mime.as_ref())
                .header(header::ACCEPT_RANGES, "bytes")
                .header(
                    header::CONTENT_RANGE,
                    format!("bytes {}-{}/{}", range.start, range.end, len),
                )
                .header(header::CONTENT_LENGTH, body.len())
                .body(Cow::Owned(body))
        }
        RangeRequest::Full => {
            let mut body = Vec::with_capacity(len as usize);
            file.read_to_end(&mut body)?;
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime.as_ref())
                .header(header::ACCEPT_RANGES, "bytes")
                .header(header::CONTENT_LENGTH, body.len())
                .body(Cow::Owned(body))
        }
    };
    Ok(response.unwrap_or_else(|_| status_response(StatusCode::INTERNAL_SERVER_ERROR)))
}

fn read_range(file: &mut File, range: ByteRange) -> std::io::Result<Vec<u8>> {
    file.seek(SeekFrom::Start(range.start))?;
    let mut body = vec![0_u8; range.len() as usize];
    file.read_exact(&mut body)?;
    Ok(body)
}

fn status_response(status: StatusCode) -> Response<Cow<'static, [u8]>> {
    let mut response = Response::new(Cow::Borrowed(&[][..]));
    *response.status_mut() = status;
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_closed_range() {
        assert_eq!(
            parse_range(Some("bytes=0-99"), 1000),
            RangeRequest::Partial(ByteRange { start: 0, end: 99 })
        );
        assert_eq!(
            parse_range(Some("bytes=900-5000"), 1000),
            RangeRequest::Partial(ByteRange { start: 900, end: 999 })
        );
    }

    #[test]
    fn test_parse_open_and_suffix_ranges() {
        assert_eq!(
            parse_range(Some("bytes=500-"), 1000),
            RangeRequest::Partial(ByteRange { start: 500, end: 999 })
        );
        assert_eq!(
            parse_range(Some("bytes=-100"), 1000),
            RangeRequest::Partial(ByteRange { start: 900, end: 999 })
        );
        assert_eq!(
            parse_range(Some("bytes=-5000"), 1000),
            RangeRequest::Partial(ByteRange { start: 0, end: 999 })
        );
    }

    #[test]
    fn test_open_range_is_capped() {
        let len = MAX_CHUNK_BYTES * 3;
        assert_eq!(
            parse_range(Some("bytes=0-"), len),
            RangeRequest::Partial(ByteRange { start: 0, end: MAX_CHUNK_BYTES - 1 })
        );
    }

    #[test]
    fn test_closed_and_suffix_ranges_are_capped() {
        let len = MAX_CHUNK_BYTES * 3;
        assert_eq!(
            parse_range(Some(&format!("bytes=0-{}", len - 1)), len),
            RangeRequest::Partial(ByteRange { start: 0, end: MAX_CHUNK_BYTES - 1 })
        );
        assert_eq!(
            parse_range(Some(&format!("bytes=-{}", MAX_CHUNK_BYTES * 2)), len),
            RangeRequest::Partial(ByteRange {
                start: MAX_CHUNK_BYTES,
                end: MAX_CHUNK_BYTES * 2 - 1,
            })
        );
    }

    #[test]
    fn test_unsatisfiable_and_fallbacks() {
        assert_eq!(parse_range(Some("bytes=1000-"), 1000), RangeRequest::Unsatisfiable);
        assert_eq!(parse_range(Some("bytes=50-10"), 1000), RangeRequest::Unsatisfiable);
        assert_eq!(parse_range(None, 1000), RangeRequest::Full);
        assert_eq!(parse_range(Some("items=0-1"), 1000), RangeRequest::Full);
        assert_eq!(parse_range(Some("bytes=abc"), 1000), RangeRequest::Full);
    }

    #[test]
    fn test_request_path_is_decoded() {
        let url = crate::utils::get_local_file_url(Path::new("/tmp/my clip.mp4"));
        let encoded = url.rsplit('/').next().unwrap();
        assert_eq!(
            request_file_path(&format!("/{encoded}")),
            PathBuf::from("/tmp/my clip.mp4")
        );
    }

    #[test]
    fn test_serve_partial_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mp4");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"0123456789").unwrap();

        let uri = format!(
            "media://localhost/{}",
            urlencoding::encode(&path.to_string_lossy())
        );
        let request = Request::builder()
            .uri(uri)
            .header(header::RANGE, "bytes=2-5")
            .body(Vec::new())
            .unwrap();
        let response = serve(&request);

        assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(response.body().as_ref(), b"2345");
        assert_eq!(response.headers()[header::CONTENT_RANGE], "bytes 2-5/10");
        assert_eq!(response.headers()[header::CONTENT_TYPE], "video/mp4");
    }

    #[test]
    fn test_serve_without_range_sends_first_chunk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("long.mp4");
        let len = MAX_CHUNK_BYTES + 10;
        std::fs::write(&path, vec![7_u8; len as usize]).unwrap();

        let uri = format!(
            "media://localhost/{}",
            urlencoding::encode(&path.to_string_lossy())
        );
        let request = Request::builder().uri(uri).body(Vec::new()).unwrap();
        let response = serve(&request);

        assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(response.body().len() as u64, MAX_CHUNK_BYTES);
        assert_eq!(
            response.headers()[header::CONTENT_RANGE],
            format!("bytes 0-{}/{}", MAX_CHUNK_BYTES - 1, len).as_str()
        );
    }

    #[test]
    fn test_serve_small_file_without_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.mp4");
        std::fs::write(&path, b"0123456789").unwrap();

        let uri = format!(
            "media://localhost/{}",
            urlencoding::encode(&path.to_string_lossy())
        );
        let request = Request::builder().uri(uri).body(Vec::new()).unwrap();
        let response = serve(&request);

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body().as_ref(), b"0123456789");
    }

    #[test]
    fn test_serve_missing_file() {
        let request = Request::builder()
            .uri("media://localhost/%2Fno%2Fsuch%2Ffile.mp4")
            .body(Vec::new())
            .unwrap();
        assert_eq!(serve(&request).status(), StatusCode::NOT_FOUND);
    }
}

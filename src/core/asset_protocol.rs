//! Serves local media to the webview through the `nla` custom protocol.
//!
//! Request paths are the percent-encoded asset path produced by
//! [`crate::utils::get_local_file_url`]. Video elements issue `Range`
//! requests, so single byte ranges are answered with `206 Partial Content`.

use http::header::{ACCEPT_RANGES, CONTENT_LENGTH, CONTENT_RANGE, CONTENT_TYPE, RANGE};
use http::{HeaderValue, Request, Response, StatusCode};
use log::{debug, warn};
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::core::paths;
use crate::error::{AppError, AppResult};

pub const ASSET_PROTOCOL: &str = "nla";

/// Inclusive byte range within a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }
}

/// Parse a `Range` header value for a file of `total` bytes.
///
/// Supports `bytes=a-b`, `bytes=a-` and `bytes=-n`. Multi-range requests are
/// answered with the first range only.
pub fn parse_range(header: &str, total: u64) -> AppResult<ByteRange> {
    let spec = header
        .trim()
        .strip_prefix("bytes=")
        .ok_or_else(|| AppError::range(header))?;
    let first = spec.split(',').next().unwrap_or("").trim();
    let (start, end) = first.split_once('-').ok_or_else(|| AppError::range(header))?;
    let parse = |value: &str| value.trim().parse::<u64>().map_err(|_| AppError::range(header));

    if total == 0 {
        return Err(AppError::range(header));
    }
    let last = total - 1;
    let range = match (start.trim().is_empty(), end.trim().is_empty()) {
        (false, false) => ByteRange {
            start: parse(start)?,
            end: parse(end)?.min(last),
        },
        (false, true) => ByteRange {
            start: parse(start)?,
            end: last,
        },
        (true, false) => {
            let suffix = parse(end)?;
            if suffix == 0 {
                return Err(AppError::range(header));
            }
            ByteRange {
                start: total.saturating_sub(suffix),
                end: last,
            }
        }
        (true, true) => return Err(AppError::range(header)),
    };
    if range.start > range.end || range.start > last {
        return Err(AppError::range(header));
    }
    Ok(range)
}

/// Turn a request URI path into a contained relative asset path.
pub fn decode_asset_path(uri_path: &str) -> AppResult<PathBuf> {
    let decoded = percent_decode_str(uri_path.trim_start_matches('/'))
        .decode_utf8()
        .map_err(|_| AppError::asset_path(uri_path))?;
    let path = PathBuf::from(decoded.as_ref());
    if !paths::is_contained_relative(&path) {
        return Err(AppError::asset_path(uri_path));
    }
    Ok(path)
}

/// Handle one custom-protocol request.
pub fn handle_asset_request(request: &Request<Vec<u8>>) -> Response<Cow<'static, [u8]>> {
    let relative = match decode_asset_path(request.uri().path()) {
        Ok(path) => path,
        Err(err) => {
            warn!("assets: rejected request {}: {}", request.uri(), err);
            return empty(StatusCode::BAD_REQUEST);
        }
    };
    let range = request.headers().get(RANGE).and_then(|v| v.to_str().ok());
    serve_file(&paths::resolve_resource_path(&relative), range)
}

/// Build the response for `path`, optionally restricted to a byte range.
///
/// Ranged requests read only the requested bytes.
pub fn serve_file(path: &Path, range: Option<&str>) -> Response<Cow<'static, [u8]>> {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    let Some(header) = range else {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("assets: cannot read {}: {}", path.display(), err);
                return empty(StatusCode::NOT_FOUND);
            }
        };
        let total = bytes.len() as u64;
        debug!("assets: {} ({} bytes)", path.display(), total);
        let mut response = with_body(StatusCode::OK, bytes);
        set_header(&mut response, CONTENT_TYPE, mime.essence_str());
        set_header(&mut response, CONTENT_LENGTH, &total.to_string());
        set_header(&mut response, ACCEPT_RANGES, "bytes");
        return response;
    };

    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            warn!("assets: cannot open {}: {}", path.display(), err);
            return empty(StatusCode::NOT_FOUND);
        }
    };
    let total = match file.metadata() {
        Ok(metadata) => metadata.len(),
        Err(err) => {
            warn!("assets: cannot stat {}: {}", path.display(), err);
            return empty(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    match parse_range(header, total) {
        Ok(range) => {
            let slice = match read_range(&mut file, range) {
                Ok(slice) => slice,
                Err(err) => {
                    warn!("assets: {} {}", path.display(), err);
                    return empty(StatusCode::INTERNAL_SERVER_ERROR);
                }
            };
            debug!("assets: {} bytes {}-{}/{}", path.display(), range.start, range.end, total);
            let mut response = with_body(StatusCode::PARTIAL_CONTENT, slice);
            set_header(&mut response, CONTENT_TYPE, mime.essence_str());
            set_header(&mut response, CONTENT_LENGTH, &range.len().to_string());
            set_header(&mut response, ACCEPT_RANGES, "bytes");
            set_header(
                &mut response,
                CONTENT_RANGE,
                &format!("bytes {}-{}/{}", range.start, range.end, total),
            );
            response
        }
        Err(err) => {
            warn!("assets: {} {}", path.display(), err);
            let mut response = empty(StatusCode::RANGE_NOT_SATISFIABLE);
            set_header(&mut response, CONTENT_RANGE, &format!("bytes */{}", total));
            response
        }
    }
}

/// Read exactly the bytes covered by `range`.
fn read_range(file: &mut File, range: ByteRange) -> AppResult<Vec<u8>> {
    file.seek(SeekFrom::Start(range.start))?;
    let mut buffer = Vec::with_capacity(range.len() as usize);
    file.take(range.len()).read_to_end(&mut buffer)?;
    Ok(buffer)
}

fn with_body(status: StatusCode, body: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    let mut response = Response::new(Cow::Owned(body));
    *response.status_mut() = status;
    response
}

fn empty(status: StatusCode) -> Response<Cow<'static, [u8]>> {
    with_body(status, Vec::new())
}

fn set_header(response: &mut Response<Cow<'static, [u8]>>, name: http::header::HeaderName, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        response.headers_mut().insert(name, value);
    }
}

use std::path::Path;

/// Base URL the webview uses for the "nla" custom protocol.
#[cfg(any(target_os = "windows", target_os = "android"))]
pub const ASSET_URL_BASE: &str = "http://nla.localhost/";
#[cfg(not(any(target_os = "windows", target_os = "android")))]
pub const ASSET_URL_BASE: &str = "nla://localhost/";

/// Generates a URL for a local asset that is served by the "nla" custom protocol handler.
/// The whole path is percent-encoded into a single segment and decoded again by
/// `core::asset_protocol::decode_asset_path`.
pub fn get_local_file_url(path: &Path) -> String {
    let p_str = path.to_string_lossy().replace('\\', "/");
    format!("{}{}", ASSET_URL_BASE, urlencoding::encode(&p_str))
}

/// Inline style for an absolutely positioned box.
pub fn absolute_box_style(left: f64, top: f64, width: f64, height: f64) -> String {
    format!("position: absolute; left: {left}px; top: {top}px; width: {width}px; height: {height}px;")
}

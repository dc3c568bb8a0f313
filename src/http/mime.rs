use std::path::Path;

/// Fallback for unknown or missing extensions.
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Maps a file name to a content-type string based on its last
/// `.`-delimited extension.
///
/// The match is exact and case-sensitive ("JPG" is not "jpg"); anything
/// outside the fixed table, including files with no extension, falls back
/// to `text/plain`. Pure lookup, no I/O.
pub fn content_type_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return DEFAULT_CONTENT_TYPE;
    };

    match ext {
        "html" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => DEFAULT_CONTENT_TYPE,
    }
}

//! Embedding generated SVG as a background image.

/// Wraps `svg` markup in a percent-encoded `url("data:image/svg+xml,...")`.
///
/// Every reserved character (including `#`, `<`, `"` and spaces) is escaped,
/// so the result is safe inside a double-quoted CSS url.
///
/// ```
/// use tilecss::style::encode::svg_data_uri;
///
/// let uri = svg_data_uri("<svg fill='#fff'/>");
/// assert_eq!(uri, "url(\"data:image/svg+xml,%3Csvg%20fill%3D%27%23fff%27%2F%3E\")");
/// ```
pub fn svg_data_uri(svg: &str) -> String {
    format!("url(\"data:image/svg+xml,{}\")", urlencoding::encode(svg))
}

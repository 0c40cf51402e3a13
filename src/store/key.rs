//! Object key construction.

/// Prefix under which all gateway-served assets live in the bucket.
pub const KEY_PREFIX: &str = "static";

/// Build the object key for an ordered list of path segments.
///
/// Segments are joined verbatim: no escaping, no normalization, no
/// traversal collapsing. Lookups hit or miss on literal string equality
/// in the store.
pub fn object_key(segments: &[&str]) -> String {
    format!("{}/{}", KEY_PREFIX, segments.join("/"))
}

//! Stable-path normalization.
//!
//! Mirrors `getStablePath` in
//! `packages/api-fetch/src/middlewares/preloading.js`.
//!
//! Two request paths that differ only in the order of their query
//! parameters identify the same resource, so both the preload table keys
//! and incoming request paths are normalized to a canonical form before
//! lookup.

/// Normalize a request path to a stable form.
///
/// The query string is split into its `key=value` entries, the entries are
/// sorted by key in code-point order, and the path is reassembled. The sort
/// is stable, so duplicate keys keep their original relative order. Entries
/// are carried verbatim — no percent-decoding or re-encoding happens.
///
/// Paths without a query string are returned unchanged.
///
/// # Example
///
/// ```
/// use block_kit_api_fetch::stable_path;
///
/// assert_eq!(stable_path("/foo/bar"), "/foo/bar");
/// assert_eq!(stable_path("/foo/bar?b=1&a=5"), "/foo/bar?a=5&b=1");
/// ```
pub fn stable_path(path: &str) -> String {
    let Some((base, query)) = path.split_once('?') else {
        return path.to_owned();
    };
    if query.is_empty() {
        return base.to_owned();
    }
    let mut entries: Vec<&str> = query.split('&').collect();
    entries.sort_by(|a, b| entry_key(a).cmp(entry_key(b)));
    let mut out = String::with_capacity(path.len());
    out.push_str(base);
    out.push('?');
    out.push_str(&entries.join("&"));
    out
}

/// The key portion of a `key=value` query entry. Entries without `=` sort
/// by their full text.
fn entry_key(entry: &str) -> &str {
    match entry.split_once('=') {
        Some((key, _)) => key,
        None => entry,
    }
}

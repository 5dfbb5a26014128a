//! Consume-once preload table and the middleware that serves it.
//!
//! Mirrors `createPreloadingMiddleware` in
//! `packages/api-fetch/src/middlewares/preloading.js`.

use std::sync::Mutex;

use indexmap::IndexMap;
use serde_json::Value;

use crate::stable_path::stable_path;
use crate::types::{FetchResponse, Method, PreloadError, PreloadedResponse, Request};

/// Preloaded responses keyed by stable path.
///
/// `OPTIONS` requests are served from a separate sub-table; every other
/// method shares the top-level table. Keys are normalized with
/// [`stable_path`] on insertion, so a key stored with unsorted query
/// parameters still matches the normalized form of an incoming request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreloadTable {
    entries: IndexMap<String, PreloadedResponse>,
    options: IndexMap<String, PreloadedResponse>,
}

impl PreloadTable {
    pub fn new() -> Self {
        PreloadTable::default()
    }

    /// Build a table from the JSON object the server embeds in the page.
    ///
    /// The top level must be an object. A top-level `"OPTIONS"` key holds a
    /// nested object of responses for `OPTIONS` requests; every other key
    /// is a preloaded response record with at least a `body` field.
    pub fn from_json(value: Value) -> Result<Self, PreloadError> {
        let Value::Object(map) = value else {
            return Err(PreloadError::NotAnObject);
        };
        let mut table = PreloadTable::new();
        for (path, entry) in map {
            if path == "OPTIONS" {
                let Value::Object(nested) = entry else {
                    return Err(PreloadError::InvalidOptionsTable);
                };
                for (options_path, options_entry) in nested {
                    table.insert_options(&options_path, parse_record(&options_path, options_entry)?);
                }
            } else {
                table.insert(&path, parse_record(&path, entry)?);
            }
        }
        Ok(table)
    }

    /// Store a response for non-`OPTIONS` requests to `path`.
    pub fn insert(&mut self, path: &str, response: PreloadedResponse) {
        self.entries.insert(stable_path(path), response);
    }

    /// Store a response for `OPTIONS` requests to `path`.
    pub fn insert_options(&mut self, path: &str, response: PreloadedResponse) {
        self.options.insert(stable_path(path), response);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.options.is_empty()
    }

    /// Remove and return the entry for `(method, key)`, if any. `key` must
    /// already be stable.
    fn take(&mut self, method: Method, key: &str) -> Option<PreloadedResponse> {
        if method.is_options() {
            self.options.shift_remove(key)
        } else {
            self.entries.shift_remove(key)
        }
    }
}

fn parse_record(path: &str, entry: Value) -> Result<PreloadedResponse, PreloadError> {
    serde_json::from_value(entry).map_err(|err| PreloadError::InvalidEntry {
        path: path.to_owned(),
        reason: err.to_string(),
    })
}

/// Serves the first request for each preloaded path from a [`PreloadTable`]
/// and forwards everything else to the next handler.
///
/// The table is owned exclusively by the middleware and consumed
/// destructively: a hit deletes the entry, so a given `(method, path)` pair
/// is answered from the table at most once. The check-and-delete runs under
/// a mutex, which keeps that guarantee even with the middleware shared
/// across threads.
#[derive(Debug)]
pub struct PreloadingMiddleware {
    cache: Mutex<PreloadTable>,
}

impl PreloadingMiddleware {
    pub fn new(table: PreloadTable) -> Self {
        PreloadingMiddleware {
            cache: Mutex::new(table),
        }
    }

    /// Convenience constructor from the raw server-embedded JSON object.
    pub fn from_json(value: Value) -> Result<Self, PreloadError> {
        Ok(PreloadingMiddleware::new(PreloadTable::from_json(value)?))
    }

    /// Answer `request` from the table, or forward it to `next` unmodified.
    ///
    /// On a hit the stored record is removed from the table and resolved
    /// according to the request's `parse` flag: the body alone when `parse`
    /// is `true`, the whole record when it is `false`. On a miss `next`
    /// receives the same request object and its result is returned
    /// unchanged.
    pub fn handle<F>(&self, request: &Request, next: F) -> FetchResponse
    where
        F: FnOnce(&Request) -> FetchResponse,
    {
        let key = stable_path(&request.path);
        let hit = {
            let mut cache = self.cache.lock().unwrap();
            cache.take(request.method, &key)
        };
        match hit {
            Some(record) if request.parse => FetchResponse::Body(record.body),
            Some(record) => FetchResponse::Raw(record),
            None => next(request),
        }
    }
}

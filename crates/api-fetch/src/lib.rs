//! block-kit-api-fetch — preloaded-response request cache.
//!
//! Rust port of the preloading middleware in
//! `packages/api-fetch/src/middlewares/preloading.js`.
//!
//! A server can embed responses for a known set of REST paths directly in
//! the page. [`PreloadingMiddleware`] sits in front of the real transport
//! and answers the first request for each preloaded path from that table;
//! every entry is consumed at most once, and anything not in the table
//! falls through to the next handler untouched.
//!
//! # Example
//!
//! ```
//! use block_kit_api_fetch::{FetchResponse, PreloadingMiddleware, Request};
//! use serde_json::json;
//!
//! let middleware = PreloadingMiddleware::from_json(json!({
//!     "wp/v2/posts": { "body": { "status": "draft" } },
//! }))
//! .unwrap();
//!
//! let request = Request::get("wp/v2/posts");
//! let first = middleware.handle(&request, |_| unreachable!("preloaded"));
//! assert_eq!(first, FetchResponse::Body(json!({ "status": "draft" })));
//!
//! // The entry is gone; the second call reaches the next handler.
//! let second = middleware.handle(&request, |_| FetchResponse::Body(json!(null)));
//! assert_eq!(second, FetchResponse::Body(json!(null)));
//! ```

pub mod preloading;
pub mod stable_path;
pub mod types;

pub use preloading::{PreloadTable, PreloadingMiddleware};
pub use stable_path::stable_path;
pub use types::{FetchResponse, Method, PreloadError, PreloadedResponse, Request};

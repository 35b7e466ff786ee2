//! Data models for scraped posts and the JSON envelopes served over HTTP.
//!
//! This module defines the structures that flow through a single request:
//! - [`Post`]: One headline link extracted from the homepage
//! - [`PostsResponse`]: The success envelope returned by `GET /posts`
//! - [`ErrorResponse`]: The failure envelope returned when the fetch fails
//!
//! Nothing here outlives the request that produced it.

use serde::Serialize;

/// A single headline link scraped from the homepage.
///
/// Both fields are guaranteed non-empty by the extractor. The `url` is kept
/// exactly as the page wrote it, so it may be absolute or relative.
///
/// Field order matters for the wire format: `url` serializes before `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// The link target (`href` of the `.post__link` element).
    pub url: String,
    /// The whitespace-trimmed headline text of the `.post__title` element.
    pub title: String,
}

/// Success body for `GET /posts`.
///
/// `posts` is always present, even when empty.
#[derive(Debug, Default, Serialize)]
pub struct PostsResponse {
    /// Posts in the order they appear in the document.
    pub posts: Vec<Post>,
}

/// Failure body for `GET /posts`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Fixed human-readable message.
    pub message: String,
    /// Display text of the underlying error.
    pub error: String,
}

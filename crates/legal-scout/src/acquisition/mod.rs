//! Acquisition layer: HTTP access and page text extraction.

pub mod fetcher;
pub mod http_client;

pub use fetcher::{visible_text, HttpFetcher, PageFetcher};
pub use http_client::{HttpClient, HttpResponse};

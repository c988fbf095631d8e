//! HTTP request execution.
mod fetcher;


pub use fetcher::{Fetched, Fetcher, ReqwestFetcher};

//! HTTP adapter for remote assets.

mod fetcher;

pub use fetcher::HttpAssetFetcher;

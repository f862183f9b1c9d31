pub mod cache;
pub mod color;
pub mod fetcher;
pub mod record;

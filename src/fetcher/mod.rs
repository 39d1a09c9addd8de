// Fetcher module: trait seam plus the reqwest-backed backend client.

pub mod client;
pub mod traits;

pub use client::BackendClient;
pub use traits::{FetchRequest, Fetcher};

//! Platform data module: client seam and in-memory sample store

mod client;
mod sample;
mod traits;

pub use client::SampleClient;
pub use traits::PlatformClient;

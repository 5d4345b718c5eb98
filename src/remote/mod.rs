mod client;
mod fetch;

pub use client::new_client;
pub use fetch::{fetch_location, RemoteError};

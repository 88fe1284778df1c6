//! npm registry protocol: endpoint layout, HTTP client with retries,
//! packument parsing, and the transport seam used by the crawler.

pub mod client;
pub mod packument;
pub mod registry;
pub mod transport;

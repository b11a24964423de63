pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod fixtures;
pub mod logger;
pub mod models;
pub mod poller;

#[cfg(test)]
pub(crate) mod test_support;

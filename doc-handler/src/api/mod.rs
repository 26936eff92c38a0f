//! REST API module for doc-handler
//!
//! Provides the HTTP endpoints around the classifier

pub mod handlers;
pub mod server;

pub use server::ApiServer;

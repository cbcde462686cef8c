//! HTTP server module.
//!
//! Runs the dual-listener bootstrap: an HTTPS listener serving static content
//! and a plaintext listener whose requests are always redirected to HTTPS.
//! Both listeners run the same pipeline (redirect filter, then static
//! responder); the plaintext side simply never passes the filter.

pub mod redirect;
pub mod server;
pub mod static_files;

pub use server::start_servers;

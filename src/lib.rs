//! Portico - Secure Static Gateway
//!
//! Serves static web assets over HTTPS and redirects plaintext HTTP traffic
//! to the HTTPS endpoint. Two listeners share one request pipeline: a
//! redirect filter followed by a static file responder.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod tls;

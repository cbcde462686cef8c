//! Request pipeline assembly.
//!
//! There are no application routes: every request either gets redirected by
//! the filter or falls through to the static file service. Compression sits
//! outside the filter so redirect and file responses alike negotiate
//! transfer encoding from the client's Accept-Encoding.

use axum::{middleware, Router};
use tower_http::compression::CompressionLayer;

use crate::config::GatewayConfig;
use crate::http::redirect::{redirect_filter, SecureChannel};
use crate::http::static_files::create_static_service;
use crate::middleware::request_id_layer;

/// Create the shared request pipeline for one listener.
///
/// Layers, outermost first: request ID span, compression, redirect filter,
/// static responder.
pub fn create_router(config: &GatewayConfig, channel: SecureChannel) -> Router {
    Router::new()
        .fallback_service(create_static_service(config))
        .layer(middleware::from_fn_with_state(channel, redirect_filter))
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(request_id_layer))
}

//! Dual listener bootstrap.
//!
//! Binds the HTTPS listener and the plaintext redirect listener once the
//! credentials have been loaded and validated. Both listeners run the same
//! pipeline; only the channel marker differs. Bind failures are not caught
//! specially and propagate as fatal startup errors.

use std::net::SocketAddr;

use axum_server::tls_rustls::RustlsConfig;

use crate::config::GatewayConfig;
use crate::http::redirect::SecureChannel;
use crate::routes::create_router;
use crate::tls::Credentials;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Failed to load TLS configuration: {0}")]
    TlsConfig(String),
}

/// Start both listeners and drive them until one fails.
///
/// The secure listener serves static content on `0.0.0.0:listening_port`;
/// the plaintext listener on `0.0.0.0:listening_redirect_port` runs the
/// same pipeline, so every request on it is redirected. The process stays
/// here until externally killed.
pub async fn start_servers(
    credentials: Credentials,
    config: &GatewayConfig,
) -> Result<(), ServerError> {
    let rustls_config = RustlsConfig::from_pem(credentials.cert, credentials.key)
        .await
        .map_err(|e| ServerError::TlsConfig(e.to_string()))?;

    let secure_addr = SocketAddr::from(([0, 0, 0, 0], config.listening_port));
    let redirect_addr = SocketAddr::from(([0, 0, 0, 0], config.listening_redirect_port));

    let secure_app = create_router(config, SecureChannel(true));
    let plain_app = create_router(config, SecureChannel(false));

    log_listening(config);

    let secure = axum_server::bind_rustls(secure_addr, rustls_config)
        .serve(secure_app.into_make_service());
    let plain = axum_server::bind(redirect_addr).serve(plain_app.into_make_service());

    tokio::try_join!(secure, plain)?;

    Ok(())
}

/// Emit one confirmation line per bound port. Runs before the listeners
/// start serving.
fn log_listening(config: &GatewayConfig) {
    tracing::info!(port = config.listening_port, "Server running on secure port");
    tracing::info!(
        port = config.listening_redirect_port,
        "Server redirecting on plaintext port"
    );
}

//! Static file serving with a single-document fallback.
//!
//! Serves files from the configured public directory. Any path that matches
//! no file falls back to the configured default document with a success
//! status, the usual arrangement for single-page application shells where
//! the client handles routing.

use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

use crate::config::GatewayConfig;

/// Create the static file service for the gateway.
///
/// Returns a `ServeDir` over the public directory whose fallback serves the
/// default document, so unmatched paths get the document body with 200
/// rather than a 404.
pub fn create_static_service(config: &GatewayConfig) -> ServeDir<ServeFile> {
    let fallback = Path::new(&config.public_dir).join(&config.fallback_document);

    ServeDir::new(&config.public_dir).fallback(ServeFile::new(fallback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TlsConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::fs;
    use tower::ServiceExt;

    fn test_config(public_dir: &str) -> GatewayConfig {
        GatewayConfig {
            tls: TlsConfig {
                cert: "cert.pem".to_string(),
                key: "key.pem".to_string(),
            },
            listening_port: 4443,
            listening_redirect_port: 8080,
            public_dir: public_dir.to_string(),
            fallback_document: "index.html".to_string(),
        }
    }

    #[tokio::test]
    async fn test_serves_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html>shell</html>").unwrap();
        fs::write(dir.path().join("app.js"), "console.log('hi');").unwrap();

        let service = create_static_service(&test_config(dir.path().to_str().unwrap()));
        let response = service
            .oneshot(Request::builder().uri("/app.js").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"console.log('hi');");
    }

    #[tokio::test]
    async fn test_unmatched_path_gets_fallback_document() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html>shell</html>").unwrap();

        let service = create_static_service(&test_config(dir.path().to_str().unwrap()));
        let response = service
            .oneshot(
                Request::builder()
                    .uri("/missing-file.png")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Catch-all fallback: success status, not 404
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"<html>shell</html>");
    }

    #[tokio::test]
    async fn test_root_path_gets_index() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html>shell</html>").unwrap();

        let service = create_static_service(&test_config(dir.path().to_str().unwrap()));
        let response = service
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"<html>shell</html>");
    }
}

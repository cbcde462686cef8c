//! HTTP to HTTPS redirect filter.
//!
//! Middleware applied to both listeners. Requests that arrived over the
//! secure channel pass through untouched; everything else is answered with a
//! permanent redirect to the equivalent HTTPS URL, built from the request's
//! own host and original path, so the redirect is transparent to the client.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::Host;
use http::Uri;

/// Marks which channel a listener accepts connections on. Each listener
/// installs this as middleware state at bind time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SecureChannel(pub bool);

/// Redirect filter middleware.
///
/// Stateless and identical on both listeners: the only input besides the
/// request is the listener's channel marker.
pub async fn redirect_filter(
    State(SecureChannel(secure)): State<SecureChannel>,
    Host(host): Host,
    request: Request,
    next: Next,
) -> Response {
    if secure {
        return next.run(request).await;
    }

    let location = https_location(&host, request.uri());
    tracing::debug!(from = %request.uri(), to = %location, "Redirecting to HTTPS");

    Redirect::permanent(&location).into_response()
}

/// Build the HTTPS URL for a plaintext request: the request's hostname with
/// any port stripped, plus the original path and query.
fn https_location(host: &str, uri: &Uri) -> String {
    let hostname = host.split(':').next().unwrap_or(host);
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    format!("https://{}{}", hostname, path_and_query)
}

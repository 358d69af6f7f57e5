//! Per-request tracing span and `trace-id` response header.
//!
//! Every request runs inside an `http_request` span carrying a fresh UUID,
//! so events logged by handlers and adapters (including the restaurant
//! lookup's failure log) can be correlated with the response a client saw.

use std::time::Instant;

use actix_web::Error;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::middleware::Next;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

/// Response header carrying the request's trace identifier.
pub const TRACE_ID_HEADER: HeaderName = HeaderName::from_static("trace-id");

/// Middleware function for [`actix_web::middleware::from_fn`].
///
/// # Examples
/// ```
/// use actix_web::{App, middleware::from_fn};
/// use restaurant_discovery::middleware::trace_requests;
///
/// let _app = App::new().wrap(from_fn(trace_requests));
/// ```
pub async fn trace_requests(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let trace_id = Uuid::new_v4();
    let span = info_span!(
        "http_request",
        %trace_id,
        method = %req.method(),
        path = %req.path(),
    );
    let started = Instant::now();

    let mut res = next.call(req).instrument(span.clone()).await?;

    span.in_scope(|| {
        info!(
            status = res.status().as_u16(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "request completed"
        );
    });
    match HeaderValue::from_str(&trace_id.to_string()) {
        Ok(value) => {
            res.headers_mut().insert(TRACE_ID_HEADER, value);
        }
        Err(error) => {
            error!(%error, %trace_id, "failed to encode trace identifier header");
        }
    }
    Ok(res)
}

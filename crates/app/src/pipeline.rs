//! Request pipeline: handlers and the middleware composed around them.
//!
//! Every use-case is a [`Request`] served by a [`Handler`]. Cross-cutting
//! behaviour is added by wrapping the handler in middleware that implements
//! the same trait, so a pipeline reads inside-out:
//!
//! ```ignore
//! Logging::new(Performance::new(Validating::new(validator, handler), threshold))
//! ```

use std::fmt;
use std::future::Future;
use std::time::{Duration, Instant};

use tracing::Instrument;

use restomap_domain::error::{FieldFailure, RestoMapError, ValidationError};

/// Requests slower than this are reported by [`Performance`] unless
/// configured otherwise.
pub const DEFAULT_SLOW_REQUEST_THRESHOLD: Duration = Duration::from_millis(500);

/// A use-case input with a known response type.
pub trait Request: fmt::Debug + Send + Sync {
    type Response: Send;

    /// Name used in logs and spans.
    const NAME: &'static str;
}

/// Something that turns a request into its response.
pub trait Handler<R: Request>: Send + Sync {
    fn handle(&self, request: R) -> impl Future<Output = Result<R::Response, RestoMapError>> + Send;
}

/// Checks a request before it reaches its handler.
///
/// An empty list means the request is valid. `Err` is reserved for failures
/// of the check itself (e.g. the store being unreachable).
pub trait Validator<R: Request>: Send + Sync {
    fn validate(
        &self,
        request: &R,
    ) -> impl Future<Output = Result<Vec<FieldFailure>, RestoMapError>> + Send;
}

/// Runs a [`Validator`] and only forwards valid requests.
pub struct Validating<V, H> {
    validator: V,
    inner: H,
}

impl<V, H> Validating<V, H> {
    pub fn new(validator: V, inner: H) -> Self {
        Self { validator, inner }
    }
}

impl<R, V, H> Handler<R> for Validating<V, H>
where
    R: Request,
    V: Validator<R>,
    H: Handler<R>,
{
    async fn handle(&self, request: R) -> Result<R::Response, RestoMapError> {
        let failures = self.validator.validate(&request).await?;
        if !failures.is_empty() {
            return Err(ValidationError::Failures(failures).into());
        }
        self.inner.handle(request).await
    }
}

/// Reports requests that take longer than a threshold.
pub struct Performance<H> {
    inner: H,
    threshold: Duration,
}

impl<H> Performance<H> {
    pub fn new(inner: H, threshold: Duration) -> Self {
        Self { inner, threshold }
    }
}

impl<R, H> Handler<R> for Performance<H>
where
    R: Request,
    H: Handler<R>,
{
    async fn handle(&self, request: R) -> Result<R::Response, RestoMapError> {
        let started = Instant::now();
        let result = self.inner.handle(request).await;
        let elapsed = started.elapsed();
        if elapsed > self.threshold {
            tracing::warn!(
                request = R::NAME,
                elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                threshold_ms = u64::try_from(self.threshold.as_millis()).unwrap_or(u64::MAX),
                "long running request"
            );
        }
        result
    }
}

/// Opens a span per request and logs its outcome.
///
/// Client errors are logged at `WARN`, storage failures at `ERROR`.
pub struct Logging<H> {
    inner: H,
}

impl<H> Logging<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<R, H> Handler<R> for Logging<H>
where
    R: Request,
    H: Handler<R>,
{
    async fn handle(&self, request: R) -> Result<R::Response, RestoMapError> {
        let span = tracing::info_span!("request", name = R::NAME);
        span.in_scope(|| tracing::info!(?request, "handling request"));

        let result = self.inner.handle(request).instrument(span.clone()).await;

        span.in_scope(|| match &result {
            Ok(_) => tracing::debug!("request completed"),
            Err(RestoMapError::Storage(err)) => {
                tracing::error!(error = %err, "request failed");
            }
            Err(err) => tracing::warn!(error = %err, "request rejected"),
        });
        result
    }
}

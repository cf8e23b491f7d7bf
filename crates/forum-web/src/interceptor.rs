//! Request interceptor.
//!
//! Wraps a registered operation invocation and sequences, short-circuiting
//! on the first failure: login check, parameter validation, frequency
//! admission, invocation of the wrapped operation, and the post-success
//! counter increment.

use std::future::Future;
use std::sync::Arc;

use forum_core::descriptor::{FrequencyKind, OperationDescriptor};
use forum_core::error::{ForumError, Result};
use forum_core::repository::OperationCountRepository;
use forum_core::response::ResponseVo;
use forum_core::session::SessionStore;
use forum_core::settings::SettingsCache;
use forum_core::validate::{ConstrainedField, check_fields};

use crate::frequency::FrequencyLimiter;
use crate::registry::OperationRegistry;

/// Orchestrates interception around registered operations.
pub struct RequestInterceptor {
    registry: OperationRegistry,
    limiter: FrequencyLimiter,
}

impl RequestInterceptor {
    pub fn new(
        registry: OperationRegistry,
        counts: Arc<dyn OperationCountRepository>,
        settings: SettingsCache,
    ) -> Self {
        Self {
            registry,
            limiter: FrequencyLimiter::new(counts, settings),
        }
    }

    /// Runs `invoke` under the interception rules registered for
    /// `operation`.
    ///
    /// An unregistered operation is invoked directly with no side effects.
    /// Deliberate rejections (missing login, constraint violation, threshold
    /// reached) and business errors raised by the wrapped logic propagate
    /// unchanged; any other failure is reported as an internal error. Every
    /// failure is logged with the operation name before propagation.
    pub async fn intercept<T, F, Fut>(
        &self,
        operation: &str,
        session: &dyn SessionStore,
        params: &[ConstrainedField],
        invoke: F,
    ) -> Result<ResponseVo<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ResponseVo<T>>>,
    {
        let Some(descriptor) = self.registry.descriptor(operation).copied() else {
            return invoke().await;
        };

        match self.run(&descriptor, session, params, invoke).await {
            Ok(response) => Ok(response),
            Err(err) => {
                tracing::error!("Interceptor rejected {}: {}", operation, err);
                if err.is_interceptor_rejection() {
                    Err(err)
                } else {
                    Err(ForumError::internal(err.to_string()))
                }
            }
        }
    }

    async fn run<T, F, Fut>(
        &self,
        descriptor: &OperationDescriptor,
        session: &dyn SessionStore,
        params: &[ConstrainedField],
        invoke: F,
    ) -> Result<ResponseVo<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ResponseVo<T>>>,
    {
        if descriptor.check_login && session.identity().is_none() {
            return Err(ForumError::Unauthorized);
        }

        if descriptor.check_params {
            check_fields(params)?;
        }

        self.limiter.check(session, descriptor.frequency).await?;

        let response = invoke().await?;

        if descriptor.frequency != FrequencyKind::None && response.is_success() {
            self.limiter.record_success(session, descriptor.frequency);
        }

        Ok(response)
    }
}

//! Request interception for the forum web layer.
//!
//! Operations are registered with an [`OperationDescriptor`] and wrapped by
//! [`RequestInterceptor`], which sequences login check, parameter
//! validation, frequency admission, invocation, and post-success counter
//! bookkeeping.

pub mod frequency;
pub mod interceptor;
pub mod registry;

pub use frequency::FrequencyLimiter;
pub use interceptor::RequestInterceptor;
pub use registry::OperationRegistry;

pub use forum_core::descriptor::OperationDescriptor;

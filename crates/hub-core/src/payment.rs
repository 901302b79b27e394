//! Port to the external payment processor.
//!
//! The core never talks to a payment provider directly. Contract payment
//! operations take any [`PaymentProcessor`]; the contract's `payment_status`
//! advances only after the processor reports success, and the opaque
//! [`PaymentReference`] it returns is stored on the contract.

use std::fmt;
use std::future::Future;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque reference handed out by the processor on authorization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PaymentReference(pub String);

impl PaymentReference {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Failure reported by the processor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("payment declined: {0}")]
    Declined(String),

    #[error("payment processor unavailable: {0}")]
    Unavailable(String),
}

/// External payment processor operations the contract lifecycle depends on.
pub trait PaymentProcessor: Send + Sync {
    /// Reserve `amount` and return a reference for later capture or refund.
    fn authorize(
        &self,
        amount: f64,
    ) -> impl Future<Output = Result<PaymentReference, PaymentError>> + Send;

    /// Collect a previously authorized amount.
    fn capture(
        &self,
        reference: &PaymentReference,
    ) -> impl Future<Output = Result<(), PaymentError>> + Send;

    /// Return an authorized or captured amount.
    fn refund(
        &self,
        reference: &PaymentReference,
    ) -> impl Future<Output = Result<(), PaymentError>> + Send;
}

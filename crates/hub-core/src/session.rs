//! Explicit caller context threaded through every service mutation.
//!
//! There is no ambient "current user". Callers construct a [`Session`] and pass
//! it by reference; the service records the actor on every audit entry.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// The actor on whose behalf a service call runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Session {
    pub actor_id: i64,
    pub label: Option<String>,
}

impl Session {
    /// Session for a known actor.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `actor_id` is not positive.
    pub fn new(actor_id: i64) -> Result<Self, CoreError> {
        if actor_id <= 0 {
            return Err(CoreError::validation(format!(
                "actor_id must be positive, got {actor_id}"
            )));
        }
        Ok(Self {
            actor_id,
            label: None,
        })
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_actor() {
        assert!(Session::new(0).is_err());
        assert!(Session::new(-3).is_err());
    }

    #[test]
    fn carries_label() {
        let session = Session::new(5).unwrap().with_label("hr-desk");
        assert_eq!(session.actor_id, 5);
        assert_eq!(session.label.as_deref(), Some("hr-desk"));
    }
}

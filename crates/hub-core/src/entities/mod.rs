//! Entity structs for all WorkHub domain records.
//!
//! Each entity maps to one table in the libSQL database (see `hub-db`
//! migrations). All structs derive `Serialize`, `Deserialize`, and `JsonSchema`
//! for JSON roundtrip and schema export.
//!
//! Constructor contract:
//! - `Kind::new(..)` builds a *transient* entity (`id == 0`, no `created_at`)
//!   with the default initial status, validated.
//! - Records loaded from storage are *hydrated* with every field and checked
//!   with [`Entity::validate`].

use std::fmt;

use chrono::{DateTime, Utc};

use crate::TRANSIENT_ID;
use crate::enums::EntityKind;
use crate::errors::CoreError;
use crate::machine::Lifecycle;

mod application;
mod attendance;
mod audit;
mod contract;
mod leave;
mod milestone;
mod offer;
mod payroll;
mod project;
mod task;
mod validate;

pub use application::Application;
pub use attendance::Attendance;
pub use audit::AuditEntry;
pub use contract::Contract;
pub use leave::Leave;
pub use milestone::Milestone;
pub use offer::Offer;
pub use payroll::Payroll;
pub use project::Project;
pub use task::Task;

/// A persisted domain record with an integer identity.
pub trait Entity: Clone + fmt::Debug + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> i64;

    fn created_at(&self) -> Option<DateTime<Utc>>;

    /// Field-level constraints (required text, non-negative amounts, date order).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the offending field.
    fn validate_fields(&self) -> Result<(), CoreError>;

    fn is_transient(&self) -> bool {
        self.id() == TRANSIENT_ID
    }

    /// Identity and field constraints together.
    ///
    /// A transient entity carries no timestamp; a persisted one carries both a
    /// positive id and its `created_at`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the identity is inconsistent or a
    /// field is out of range.
    fn validate(&self) -> Result<(), CoreError> {
        match (self.id(), self.created_at()) {
            (id, _) if id < 0 => {
                return Err(CoreError::validation(format!(
                    "{} id must not be negative, got {id}",
                    Self::KIND
                )));
            }
            (TRANSIENT_ID, Some(_)) => {
                return Err(CoreError::validation(format!(
                    "transient {} must not carry created_at",
                    Self::KIND
                )));
            }
            (id, None) if id != TRANSIENT_ID => {
                return Err(CoreError::validation(format!(
                    "persisted {} {id} is missing created_at",
                    Self::KIND
                )));
            }
            _ => {}
        }
        self.validate_fields()
    }
}

/// An entity whose main `status` field follows a [`Lifecycle`].
pub trait Stateful: Entity {
    type Status: Lifecycle;

    fn status(&self) -> Self::Status;

    /// Overwrite the status. Callers check the move with
    /// [`crate::machine::transition`] first.
    fn set_status(&mut self, status: Self::Status);
}

macro_rules! stateful {
    ($($entity:ty => $status:ty),+ $(,)?) => {
        $(
            impl Stateful for $entity {
                type Status = $status;

                fn status(&self) -> $status {
                    self.status
                }

                fn set_status(&mut self, status: $status) {
                    self.status = status;
                }
            }
        )+
    };
}

stateful! {
    Offer => crate::enums::OfferStatus,
    Application => crate::enums::ApplicationStatus,
    Contract => crate::enums::ContractStatus,
    Milestone => crate::enums::MilestoneStatus,
    Project => crate::enums::ProjectStatus,
    Task => crate::enums::TaskStatus,
    Leave => crate::enums::LeaveStatus,
    Attendance => crate::enums::AttendanceStatus,
    Payroll => crate::enums::PayrollStatus,
}

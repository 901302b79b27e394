//! The status machine: a pure decision function over closed transition tables.
//!
//! Given a current status and a requested target status, the machine answers
//! [`Decision::Allowed`] or [`Decision::Rejected`]. It performs no I/O; applying
//! the decision is the service layer's job. Self-transitions never appear in any
//! table, so repeating an applied transition is always rejected.

use std::fmt;

use serde::Serialize;

use crate::enums::{
    ApplicationStatus, AttendanceStatus, ContractStatus, EntityKind, LeaveStatus,
    MilestoneStatus, OfferStatus, PayrollStatus, ProjectStatus, TaskStatus,
};
use crate::errors::CoreError;

/// A closed status enumeration with a transition table.
pub trait Lifecycle: Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Entity kind that owns this status field.
    const KIND: EntityKind;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Status assigned to newly created entities.
    fn initial() -> Self;

    /// Storage name (`snake_case`).
    fn name(self) -> &'static str;

    /// Statuses reachable in one step.
    fn successors(self) -> &'static [Self];

    fn can_transition_to(self, next: Self) -> bool {
        self.successors().contains(&next)
    }

    fn is_terminal(self) -> bool {
        self.successors().is_empty()
    }

    /// Parse a storage name. Hyphens are accepted in place of underscores.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the name is not a status of this kind.
    fn parse(raw: &str) -> Result<Self, CoreError> {
        let normalized = raw.trim().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.name() == normalized)
            .ok_or_else(|| {
                CoreError::validation(format!("unknown {} status '{raw}'", Self::KIND))
            })
    }
}

/// Outcome of asking the machine about a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Allowed,
    Rejected,
}

impl Decision {
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Decide whether `from → to` is in the table for `S`.
#[must_use]
pub fn decide<S: Lifecycle>(from: S, to: S) -> Decision {
    if from.can_transition_to(to) {
        Decision::Allowed
    } else {
        Decision::Rejected
    }
}

/// Check `from → to` and return the new status.
///
/// # Errors
///
/// Returns `CoreError::IllegalTransition` naming the kind and both statuses
/// when the pair is not in the table.
pub fn transition<S: Lifecycle>(from: S, to: S) -> Result<S, CoreError> {
    match decide(from, to) {
        Decision::Allowed => Ok(to),
        Decision::Rejected => Err(illegal(from, to)),
    }
}

/// Build the `IllegalTransition` error for a rejected pair.
#[must_use]
pub fn illegal<S: Lifecycle>(from: S, to: S) -> CoreError {
    CoreError::IllegalTransition {
        kind: S::KIND,
        from: from.name().to_string(),
        to: to.name().to_string(),
    }
}

/// String-typed entry point for callers that hold status names (CLI, imports).
///
/// `Contract` decisions use the contract lifecycle; the payment sub-machine is
/// reachable through [`decide`] with `PaymentStatus`.
///
/// # Errors
///
/// Returns `CoreError::Validation` if either name is not a status of `kind`.
pub fn decide_named(kind: EntityKind, from: &str, to: &str) -> Result<Decision, CoreError> {
    fn named<S: Lifecycle>(from: &str, to: &str) -> Result<Decision, CoreError> {
        Ok(decide(S::parse(from)?, S::parse(to)?))
    }

    match kind {
        EntityKind::Offer => named::<OfferStatus>(from, to),
        EntityKind::Application => named::<ApplicationStatus>(from, to),
        EntityKind::Contract => named::<ContractStatus>(from, to),
        EntityKind::Milestone => named::<MilestoneStatus>(from, to),
        EntityKind::Project => named::<ProjectStatus>(from, to),
        EntityKind::Task => named::<TaskStatus>(from, to),
        EntityKind::Leave => named::<LeaveStatus>(from, to),
        EntityKind::Attendance => named::<AttendanceStatus>(from, to),
        EntityKind::Payroll => named::<PayrollStatus>(from, to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::PaymentStatus;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// The full set of legal transitions, written out independently of the enums.
    fn table() -> Vec<(EntityKind, &'static str, &'static str)> {
        vec![
            (EntityKind::Offer, "draft", "published"),
            (EntityKind::Offer, "published", "in_progress"),
            (EntityKind::Offer, "in_progress", "completed"),
            (EntityKind::Application, "pending", "accepted"),
            (EntityKind::Application, "pending", "rejected"),
            (EntityKind::Contract, "generated", "signed"),
            (EntityKind::Contract, "signed", "in_progress"),
            (EntityKind::Contract, "in_progress", "completed"),
            (EntityKind::Contract, "completed", "archived"),
            (EntityKind::Milestone, "pending", "completed"),
            (EntityKind::Leave, "pending", "approved"),
            (EntityKind::Leave, "pending", "rejected"),
            (EntityKind::Payroll, "pending", "paid"),
            (EntityKind::Project, "planning", "in_progress"),
            (EntityKind::Project, "planning", "cancelled"),
            (EntityKind::Project, "in_progress", "on_hold"),
            (EntityKind::Project, "in_progress", "completed"),
            (EntityKind::Project, "in_progress", "cancelled"),
            (EntityKind::Project, "on_hold", "in_progress"),
            (EntityKind::Project, "on_hold", "cancelled"),
            (EntityKind::Task, "todo", "in_progress"),
            (EntityKind::Task, "in_progress", "done"),
            (EntityKind::Task, "in_progress", "todo"),
            (EntityKind::Attendance, "absent", "excused"),
            (EntityKind::Attendance, "late", "excused"),
        ]
    }

    fn sweep<S: Lifecycle>(allowed: &[(EntityKind, &str, &str)]) -> usize {
        let mut checked = 0;
        for &from in S::ALL {
            for &to in S::ALL {
                let expected = allowed
                    .iter()
                    .any(|&(k, f, t)| k == S::KIND && f == from.name() && t == to.name());
                let decision = decide(from, to);
                assert_eq!(
                    decision.is_allowed(),
                    expected,
                    "{} {} -> {}",
                    S::KIND,
                    from,
                    to
                );
                checked += 1;
            }
        }
        checked
    }

    #[test]
    fn every_pair_matches_the_table() {
        let allowed = table();
        let mut checked = 0;
        checked += sweep::<OfferStatus>(&allowed);
        checked += sweep::<ApplicationStatus>(&allowed);
        checked += sweep::<ContractStatus>(&allowed);
        checked += sweep::<MilestoneStatus>(&allowed);
        checked += sweep::<LeaveStatus>(&allowed);
        checked += sweep::<AttendanceStatus>(&allowed);
        checked += sweep::<PayrollStatus>(&allowed);
        checked += sweep::<ProjectStatus>(&allowed);
        checked += sweep::<TaskStatus>(&allowed);
        assert_eq!(checked, 16 + 9 + 25 + 4 + 9 + 16 + 4 + 25 + 9);
    }

    #[rstest]
    #[case(PaymentStatus::Unpaid, PaymentStatus::Authorized, true)]
    #[case(PaymentStatus::Authorized, PaymentStatus::Captured, true)]
    #[case(PaymentStatus::Captured, PaymentStatus::Refunded, true)]
    #[case(PaymentStatus::Authorized, PaymentStatus::Refunded, true)]
    #[case(PaymentStatus::Unpaid, PaymentStatus::Captured, false)]
    #[case(PaymentStatus::Unpaid, PaymentStatus::Refunded, false)]
    #[case(PaymentStatus::Refunded, PaymentStatus::Captured, false)]
    #[case(PaymentStatus::Captured, PaymentStatus::Authorized, false)]
    fn payment_sub_machine(
        #[case] from: PaymentStatus,
        #[case] to: PaymentStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(decide(from, to).is_allowed(), allowed);
    }

    #[test]
    fn self_transitions_are_never_allowed() {
        fn none_reflexive<S: Lifecycle>() {
            for &status in S::ALL {
                assert_eq!(decide(status, status), Decision::Rejected, "{status}");
            }
        }
        none_reflexive::<OfferStatus>();
        none_reflexive::<ApplicationStatus>();
        none_reflexive::<ContractStatus>();
        none_reflexive::<PaymentStatus>();
        none_reflexive::<MilestoneStatus>();
        none_reflexive::<LeaveStatus>();
        none_reflexive::<AttendanceStatus>();
        none_reflexive::<PayrollStatus>();
        none_reflexive::<ProjectStatus>();
        none_reflexive::<TaskStatus>();
    }

    #[test]
    fn repeating_an_applied_transition_fails() {
        let accepted = transition(ApplicationStatus::Pending, ApplicationStatus::Accepted)
            .expect("first transition is legal");
        let err = transition(accepted, ApplicationStatus::Accepted).unwrap_err();
        assert_eq!(
            err,
            CoreError::IllegalTransition {
                kind: EntityKind::Application,
                from: "accepted".into(),
                to: "accepted".into(),
            }
        );
    }

    #[test]
    fn contract_cannot_skip_or_reverse() {
        assert!(transition(ContractStatus::Generated, ContractStatus::InProgress).is_err());
        assert!(transition(ContractStatus::Completed, ContractStatus::Signed).is_err());
        assert_eq!(
            transition(ContractStatus::Signed, ContractStatus::InProgress),
            Ok(ContractStatus::InProgress)
        );
    }

    #[rstest]
    #[case(EntityKind::Offer, "draft", "published", Decision::Allowed)]
    #[case(EntityKind::Offer, "draft", "in-progress", Decision::Rejected)]
    #[case(EntityKind::Contract, "generated", "signed", Decision::Allowed)]
    #[case(EntityKind::Leave, "approved", "rejected", Decision::Rejected)]
    #[case(EntityKind::Task, "in_progress", "todo", Decision::Allowed)]
    fn decide_named_parses_names(
        #[case] kind: EntityKind,
        #[case] from: &str,
        #[case] to: &str,
        #[case] expected: Decision,
    ) {
        assert_eq!(decide_named(kind, from, to), Ok(expected));
    }

    #[test]
    fn decide_named_rejects_unknown_names() {
        let err = decide_named(EntityKind::Offer, "draft", "shipped").unwrap_err();
        assert!(matches!(err, CoreError::Validation(ref msg) if msg.contains("shipped")));
    }

    #[test]
    fn initial_statuses() {
        assert_eq!(OfferStatus::initial(), OfferStatus::Draft);
        assert_eq!(ApplicationStatus::initial(), ApplicationStatus::Pending);
        assert_eq!(ContractStatus::initial(), ContractStatus::Generated);
        assert_eq!(PaymentStatus::initial(), PaymentStatus::Unpaid);
        assert_eq!(ProjectStatus::initial(), ProjectStatus::Planning);
        assert_eq!(TaskStatus::initial(), TaskStatus::Todo);
    }
}

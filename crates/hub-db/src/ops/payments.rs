//! Contract payments through an external processor.
//!
//! The payment sub-machine is checked before the processor is called, and
//! `payment_status` / `payment_reference` are written only after the
//! processor reports success. A declined or failed call leaves the contract
//! untouched.

use hub_core::entities::Contract;
use hub_core::enums::{AuditAction, EntityKind, PaymentStatus};
use hub_core::errors::CoreError;
use hub_core::machine;
use hub_core::payment::{PaymentProcessor, PaymentReference};
use hub_core::session::Session;

use crate::error::DatabaseError;
use crate::gateway::Gateway;
use crate::service::{HubService, status_detail};

fn stored_reference(contract: &Contract) -> Result<PaymentReference, CoreError> {
    contract
        .payment_reference
        .clone()
        .map(PaymentReference)
        .ok_or_else(|| {
            CoreError::validation(format!(
                "contract {} has no payment reference",
                contract.id
            ))
        })
}

async fn settle<P: PaymentProcessor>(
    gw: &Gateway<'_>,
    session: &Session,
    processor: &P,
    contract_id: i64,
    target: PaymentStatus,
) -> Result<Contract, DatabaseError> {
    let mut contract: Contract = gw.get(contract_id).await?;
    let from = contract.payment_status;
    let to = machine::transition(from, target)?;

    let reference = match to {
        PaymentStatus::Authorized => processor.authorize(contract.amount).await?,
        PaymentStatus::Captured => {
            let reference = stored_reference(&contract)?;
            processor.capture(&reference).await?;
            reference
        }
        PaymentStatus::Refunded => {
            let reference = stored_reference(&contract)?;
            processor.refund(&reference).await?;
            reference
        }
        PaymentStatus::Unpaid => return Err(machine::illegal(from, to).into()),
    };

    contract.payment_status = to;
    contract.payment_reference = Some(reference.0);
    gw.update(&contract).await?;
    gw.append_audit(
        session,
        EntityKind::Contract,
        contract_id,
        AuditAction::StatusChanged,
        Some(status_detail("payment_status", from, to)?),
    )
    .await?;
    tracing::info!(contract = contract_id, %from, %to, "payment status changed");
    Ok(contract)
}

impl HubService {
    pub async fn authorize_payment<P: PaymentProcessor>(
        &self,
        session: &Session,
        processor: &P,
        contract_id: i64,
    ) -> Result<Contract, DatabaseError> {
        self.settle_payment(session, processor, contract_id, PaymentStatus::Authorized)
            .await
    }

    pub async fn capture_payment<P: PaymentProcessor>(
        &self,
        session: &Session,
        processor: &P,
        contract_id: i64,
    ) -> Result<Contract, DatabaseError> {
        self.settle_payment(session, processor, contract_id, PaymentStatus::Captured)
            .await
    }

    pub async fn refund_payment<P: PaymentProcessor>(
        &self,
        session: &Session,
        processor: &P,
        contract_id: i64,
    ) -> Result<Contract, DatabaseError> {
        self.settle_payment(session, processor, contract_id, PaymentStatus::Refunded)
            .await
    }

    /// Drive the payment sub-machine to `target` through `processor`.
    pub async fn settle_payment<P: PaymentProcessor>(
        &self,
        session: &Session,
        processor: &P,
        contract_id: i64,
        target: PaymentStatus,
    ) -> Result<Contract, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = settle(&uow.gateway(), session, processor, contract_id, target).await;
        uow.finish(result).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeProcessor, date, test_service, test_session};
    use pretty_assertions::assert_eq;

    async fn signed_contract(svc: &HubService) -> Contract {
        let ses = test_session();
        let offer = svc.create_offer(&ses, 3, "Logo", None, 400.0).await.unwrap();
        svc.publish_offer(&ses, offer.id).await.unwrap();
        let app = svc.apply_to_offer(&ses, offer.id, 42, None).await.unwrap();
        svc.accept_application(&ses, app.id).await.unwrap();
        svc.generate_contract(&ses, app.id, date(2026, 3, 1), date(2026, 4, 1), 400.0, "Net 30")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn authorize_then_capture() {
        let svc = test_service().await;
        let ses = test_session();
        let contract = signed_contract(&svc).await;
        let processor = FakeProcessor::default();

        let authorized = svc
            .authorize_payment(&ses, &processor, contract.id)
            .await
            .unwrap();
        assert_eq!(authorized.payment_status, PaymentStatus::Authorized);
        assert_eq!(authorized.payment_reference.as_deref(), Some("pi_test_1"));

        let captured = svc
            .capture_payment(&ses, &processor, contract.id)
            .await
            .unwrap();
        assert_eq!(captured.payment_status, PaymentStatus::Captured);
        assert_eq!(
            processor.calls(),
            vec!["authorize 400".to_string(), "capture pi_test_1".to_string()]
        );

        let stored = svc.get_contract(contract.id).await.unwrap();
        assert_eq!(stored, captured);
    }

    #[tokio::test]
    async fn declined_authorization_leaves_contract_unpaid() {
        let svc = test_service().await;
        let ses = test_session();
        let contract = signed_contract(&svc).await;

        let err = svc
            .authorize_payment(&ses, &FakeProcessor::declining(), contract.id)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Payment(ref msg) if msg.contains("declined")));

        let stored = svc.get_contract(contract.id).await.unwrap();
        assert_eq!(stored.payment_status, PaymentStatus::Unpaid);
        assert!(stored.payment_reference.is_none());
    }

    #[tokio::test]
    async fn capture_before_authorize_never_reaches_processor() {
        let svc = test_service().await;
        let ses = test_session();
        let contract = signed_contract(&svc).await;
        let processor = FakeProcessor::default();

        let err = svc
            .capture_payment(&ses, &processor, contract.id)
            .await
            .unwrap_err();
        assert!(err.is_illegal_transition());
        assert!(processor.calls().is_empty());
    }

    #[tokio::test]
    async fn refund_from_authorized() {
        let svc = test_service().await;
        let ses = test_session();
        let contract = signed_contract(&svc).await;
        let processor = FakeProcessor::default();

        svc.authorize_payment(&ses, &processor, contract.id)
            .await
            .unwrap();
        let refunded = svc
            .refund_payment(&ses, &processor, contract.id)
            .await
            .unwrap();
        assert_eq!(refunded.payment_status, PaymentStatus::Refunded);

        let err = svc
            .capture_payment(&ses, &processor, contract.id)
            .await
            .unwrap_err();
        assert!(err.is_illegal_transition());
    }

    #[tokio::test]
    async fn payment_changes_are_audited() {
        let svc = test_service().await;
        let ses = test_session();
        let contract = signed_contract(&svc).await;

        svc.authorize_payment(&ses, &FakeProcessor::default(), contract.id)
            .await
            .unwrap();
        let history = svc
            .history(EntityKind::Contract, contract.id)
            .await
            .unwrap();
        let last = history.last().unwrap();
        assert_eq!(last.action, AuditAction::StatusChanged);
        assert_eq!(
            last.detail.as_ref().unwrap()["field"],
            serde_json::json!("payment_status")
        );
    }

    #[tokio::test]
    async fn unknown_contract_is_not_found() {
        let svc = test_service().await;
        let err = svc
            .authorize_payment(&test_session(), &FakeProcessor::default(), 99)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}

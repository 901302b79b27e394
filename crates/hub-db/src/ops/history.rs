//! Audit history queries.

use hub_core::entities::AuditEntry;
use hub_core::enums::EntityKind;

use crate::audit::AuditFilter;
use crate::error::DatabaseError;
use crate::service::HubService;

impl HubService {
    /// Every audit entry for one entity, oldest first.
    pub async fn history(
        &self,
        kind: EntityKind,
        id: i64,
    ) -> Result<Vec<AuditEntry>, DatabaseError> {
        self.audit(&AuditFilter {
            entity_kind: Some(kind),
            entity_id: Some(id),
            ..Default::default()
        })
        .await
    }

    /// Audit entries matching `filter`, oldest first.
    pub async fn audit(&self, filter: &AuditFilter) -> Result<Vec<AuditEntry>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = uow.gateway().query_audit(filter).await;
        uow.finish(result).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_service, test_session};
    use hub_core::audit_detail::StatusChangedDetail;
    use hub_core::enums::AuditAction;
    use hub_core::session::Session;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn history_follows_the_offer_lifecycle() {
        let svc = test_service().await;
        let ses = test_session();
        let offer = svc
            .create_offer(&ses, 3, "Logo design", None, 400.0)
            .await
            .unwrap();
        svc.publish_offer(&ses, offer.id).await.unwrap();

        let entries = svc.history(EntityKind::Offer, offer.id).await.unwrap();
        let actions: Vec<AuditAction> = entries.iter().map(|e| e.action).collect();
        assert_eq!(actions, vec![AuditAction::Created, AuditAction::StatusChanged]);
        assert!(entries.iter().all(|e| e.actor_id == ses.actor_id));

        let detail: StatusChangedDetail =
            serde_json::from_value(entries[1].detail.clone().unwrap()).unwrap();
        assert_eq!(detail.field, "status");
        assert_eq!(detail.from, "draft");
        assert_eq!(detail.to, "published");
    }

    #[tokio::test]
    async fn rejected_transition_leaves_no_entry() {
        let svc = test_service().await;
        let ses = test_session();
        let offer = svc
            .create_offer(&ses, 3, "Logo design", None, 400.0)
            .await
            .unwrap();
        assert!(svc.complete_offer(&ses, offer.id).await.is_err());

        let entries = svc.history(EntityKind::Offer, offer.id).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, AuditAction::Created);
    }

    #[tokio::test]
    async fn audit_filters_by_actor() {
        let svc = test_service().await;
        let alice = test_session();
        let bob = Session::new(2).unwrap();
        svc.create_offer(&alice, 3, "Copywriting", None, 120.0)
            .await
            .unwrap();
        svc.create_offer(&bob, 3, "Illustration", None, 300.0)
            .await
            .unwrap();

        let by_bob = svc
            .audit(&AuditFilter {
                actor_id: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_bob.len(), 1);
        assert_eq!(by_bob[0].entity_kind, EntityKind::Offer);
    }

    #[tokio::test]
    async fn unknown_entity_has_empty_history() {
        let svc = test_service().await;
        assert!(svc.history(EntityKind::Task, 77).await.unwrap().is_empty());
    }
}

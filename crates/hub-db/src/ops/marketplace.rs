//! Offers, applications, contracts, and milestones.

use chrono::NaiveDate;
use hub_core::entities::{Application, Contract, Milestone, Offer};
use hub_core::enums::{
    ApplicationStatus, AuditAction, ContractStatus, EntityKind, MilestoneStatus, OfferStatus,
};
use hub_core::errors::CoreError;
use hub_core::responses::AcceptResponse;
use hub_core::session::Session;
use serde::Serialize;

use crate::error::DatabaseError;
use crate::gateway::Filter;
use crate::service::{HubService, advance, create};

/// Field edits to an offer. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OfferChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl OfferChanges {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.amount.is_none()
    }
}

impl HubService {
    pub async fn create_offer(
        &self,
        session: &Session,
        employer_id: i64,
        title: &str,
        description: Option<&str>,
        amount: f64,
    ) -> Result<Offer, DatabaseError> {
        let offer = Offer::new(employer_id, title, description.map(String::from), amount)?;
        let uow = self.db().begin().await?;
        let result = create(&uow.gateway(), session, offer).await;
        uow.finish(result).await
    }

    /// Edit title, description, or amount. Status is never touched here, and
    /// offers that are already staffed or finished cannot be edited.
    pub async fn edit_offer(
        &self,
        session: &Session,
        id: i64,
        changes: OfferChanges,
    ) -> Result<Offer, DatabaseError> {
        let uow = self.db().begin().await?;
        let result: Result<Offer, DatabaseError> = async {
            let gw = uow.gateway();
            let mut offer: Offer = gw.get(id).await?;
            if changes.is_empty() {
                return Ok(offer);
            }
            if !matches!(offer.status, OfferStatus::Draft | OfferStatus::Published) {
                return Err(CoreError::validation(format!(
                    "offer {id} is {}; only draft or published offers can be edited",
                    offer.status
                ))
                .into());
            }
            if let Some(title) = &changes.title {
                offer.title.clone_from(title);
            }
            if let Some(description) = &changes.description {
                offer.description.clone_from(description);
            }
            if let Some(amount) = changes.amount {
                offer.amount = amount;
            }
            gw.update(&offer).await?;
            gw.append_audit(
                session,
                EntityKind::Offer,
                id,
                AuditAction::Updated,
                Some(serde_json::to_value(&changes)?),
            )
            .await?;
            Ok(offer)
        }
        .await;
        uow.finish(result).await
    }

    pub async fn publish_offer(&self, session: &Session, id: i64) -> Result<Offer, DatabaseError> {
        self.transition_offer(session, id, OfferStatus::Published).await
    }

    /// Move a published offer to `in_progress` without going through an
    /// application.
    pub async fn start_offer(&self, session: &Session, id: i64) -> Result<Offer, DatabaseError> {
        self.transition_offer(session, id, OfferStatus::InProgress).await
    }

    pub async fn complete_offer(&self, session: &Session, id: i64) -> Result<Offer, DatabaseError> {
        self.transition_offer(session, id, OfferStatus::Completed).await
    }

    pub async fn transition_offer(
        &self,
        session: &Session,
        id: i64,
        target: OfferStatus,
    ) -> Result<Offer, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = advance::<Offer>(&uow.gateway(), session, id, target).await;
        uow.finish(result).await
    }

    pub async fn get_offer(&self, id: i64) -> Result<Offer, DatabaseError> {
        self.get(id).await
    }

    pub async fn list_offers(&self, filter: &Filter) -> Result<Vec<Offer>, DatabaseError> {
        self.list(filter).await
    }

    /// Delete an offer. Fails with a constraint error while applications
    /// still reference it.
    pub async fn delete_offer(&self, session: &Session, id: i64) -> Result<(), DatabaseError> {
        self.delete::<Offer>(session, id).await
    }

    /// Apply to a published offer.
    ///
    /// An offer that does not exist or is not published is reported as not
    /// found: it is not open to applicants.
    pub async fn apply_to_offer(
        &self,
        session: &Session,
        offer_id: i64,
        applicant_id: i64,
        cover_letter: Option<&str>,
    ) -> Result<Application, DatabaseError> {
        let application = Application::new(offer_id, applicant_id, cover_letter.map(String::from))?;
        let uow = self.db().begin().await?;
        let result: Result<Application, DatabaseError> = async {
            let gw = uow.gateway();
            match gw.find_by_id::<Offer>(offer_id).await? {
                Some(offer) if offer.status == OfferStatus::Published => {}
                _ => return Err(CoreError::not_found(EntityKind::Offer, offer_id).into()),
            }
            create(&gw, session, application).await
        }
        .await;
        uow.finish(result).await
    }

    /// Accept an application and move its offer to `in_progress`, atomically.
    ///
    /// If either move is illegal nothing is written.
    pub async fn accept_application(
        &self,
        session: &Session,
        application_id: i64,
    ) -> Result<AcceptResponse, DatabaseError> {
        let uow = self.db().begin().await?;
        let result: Result<AcceptResponse, DatabaseError> = async {
            let gw = uow.gateway();
            let application = advance::<Application>(
                &gw,
                session,
                application_id,
                ApplicationStatus::Accepted,
            )
            .await?;
            let offer =
                advance::<Offer>(&gw, session, application.offer_id, OfferStatus::InProgress)
                    .await?;
            Ok(AcceptResponse { application, offer })
        }
        .await;
        let response = uow.finish(result).await?;
        tracing::info!(
            application = response.application.id,
            offer = response.offer.id,
            "application accepted"
        );
        Ok(response)
    }

    /// Reject an application. The offer is not touched.
    pub async fn reject_application(
        &self,
        session: &Session,
        application_id: i64,
    ) -> Result<Application, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = advance::<Application>(
            &uow.gateway(),
            session,
            application_id,
            ApplicationStatus::Rejected,
        )
        .await;
        uow.finish(result).await
    }

    pub async fn get_application(&self, id: i64) -> Result<Application, DatabaseError> {
        self.get(id).await
    }

    pub async fn list_applications(
        &self,
        offer_id: i64,
        limit: u32,
    ) -> Result<Vec<Application>, DatabaseError> {
        self.list(&Filter::new().eq("offer_id", offer_id).limit(limit))
            .await
    }

    /// Generate a contract for an accepted application.
    pub async fn generate_contract(
        &self,
        session: &Session,
        application_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        amount: f64,
        terms: &str,
    ) -> Result<Contract, DatabaseError> {
        let contract = Contract::new(application_id, start_date, end_date, amount, terms)?;
        let uow = self.db().begin().await?;
        let result: Result<Contract, DatabaseError> = async {
            let gw = uow.gateway();
            let application: Application = gw.get(application_id).await?;
            if application.status != ApplicationStatus::Accepted {
                return Err(CoreError::validation(format!(
                    "application {application_id} is {}; contracts require an accepted application",
                    application.status
                ))
                .into());
            }
            create(&gw, session, contract).await
        }
        .await;
        uow.finish(result).await
    }

    /// Move a contract along its lifecycle. Completing a contract completes
    /// the offer it was generated for.
    pub async fn advance_contract(
        &self,
        session: &Session,
        id: i64,
        target: ContractStatus,
    ) -> Result<Contract, DatabaseError> {
        let uow = self.db().begin().await?;
        let result: Result<Contract, DatabaseError> = async {
            let gw = uow.gateway();
            let contract = advance::<Contract>(&gw, session, id, target).await?;
            if contract.status == ContractStatus::Completed {
                let application: Application = gw.get(contract.application_id).await?;
                advance::<Offer>(&gw, session, application.offer_id, OfferStatus::Completed)
                    .await?;
            }
            Ok(contract)
        }
        .await;
        uow.finish(result).await
    }

    pub async fn get_contract(&self, id: i64) -> Result<Contract, DatabaseError> {
        self.get(id).await
    }

    pub async fn list_contracts(&self, filter: &Filter) -> Result<Vec<Contract>, DatabaseError> {
        self.list(filter).await
    }

    pub async fn add_milestone(
        &self,
        session: &Session,
        contract_id: i64,
        title: &str,
        amount: f64,
        due_date: Option<NaiveDate>,
    ) -> Result<Milestone, DatabaseError> {
        let milestone = Milestone::new(contract_id, title, amount, due_date)?;
        let uow = self.db().begin().await?;
        let result: Result<Milestone, DatabaseError> = async {
            let gw = uow.gateway();
            gw.get::<Contract>(contract_id).await?;
            create(&gw, session, milestone).await
        }
        .await;
        uow.finish(result).await
    }

    pub async fn complete_milestone(
        &self,
        session: &Session,
        id: i64,
    ) -> Result<Milestone, DatabaseError> {
        let uow = self.db().begin().await?;
        let result =
            advance::<Milestone>(&uow.gateway(), session, id, MilestoneStatus::Completed).await;
        uow.finish(result).await
    }

    pub async fn list_milestones(
        &self,
        contract_id: i64,
        limit: u32,
    ) -> Result<Vec<Milestone>, DatabaseError> {
        self.list(&Filter::new().eq("contract_id", contract_id).limit(limit))
            .await
    }
}

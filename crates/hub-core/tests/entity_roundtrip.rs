//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::{NaiveDate, NaiveTime, Utc};
use hub_core::audit_detail::{CascadeDetail, StatusChangedDetail};
use hub_core::entities::*;
use hub_core::enums::*;
use hub_core::responses::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    offer_roundtrip,
    Offer,
    Offer {
        id: 12,
        employer_id: 3,
        title: "Logo design".into(),
        description: Some("Vector logo, two revisions".into()),
        amount: 250.0,
        status: OfferStatus::Published,
        created_at: Some(Utc::now()),
    }
);

roundtrip_and_validate!(
    transient_offer_roundtrip,
    Offer,
    Offer::new(3, "Landing page", None, 800.0).unwrap()
);

roundtrip_and_validate!(
    application_roundtrip,
    Application,
    Application {
        id: 4,
        offer_id: 12,
        applicant_id: 21,
        cover_letter: Some("Five years of brand work".into()),
        status: ApplicationStatus::Accepted,
        created_at: Some(Utc::now()),
    }
);

roundtrip_and_validate!(
    contract_roundtrip,
    Contract,
    Contract {
        id: 2,
        application_id: 4,
        start_date: date(3, 1),
        end_date: date(4, 1),
        amount: 250.0,
        terms: "Net 30".into(),
        status: ContractStatus::Signed,
        payment_status: PaymentStatus::Authorized,
        payment_reference: Some("pi_3Nx".into()),
        created_at: Some(Utc::now()),
    }
);

roundtrip_and_validate!(
    milestone_roundtrip,
    Milestone,
    Milestone {
        id: 1,
        contract_id: 2,
        title: "First draft".into(),
        amount: 100.0,
        due_date: Some(date(3, 15)),
        status: MilestoneStatus::Pending,
        created_at: Some(Utc::now()),
    }
);

roundtrip_and_validate!(
    project_roundtrip,
    Project,
    Project {
        id: 5,
        name: "Intranet".into(),
        description: None,
        budget: 12_000.0,
        start_date: date(1, 5),
        end_date: Some(date(6, 30)),
        status: ProjectStatus::OnHold,
        created_at: Some(Utc::now()),
    }
);

roundtrip_and_validate!(
    task_roundtrip,
    Task,
    Task {
        id: 9,
        project_id: 5,
        title: "Wire SSO".into(),
        description: Some("SAML first".into()),
        priority: TaskPriority::High,
        status: TaskStatus::InProgress,
        created_at: Some(Utc::now()),
    }
);

roundtrip_and_validate!(
    leave_view_roundtrip,
    LeaveView,
    LeaveView::from(Leave::new(7, LeaveType::Sick, date(3, 1), date(3, 5), None).unwrap())
);

roundtrip_and_validate!(
    attendance_view_roundtrip,
    AttendanceView,
    AttendanceView::from(
        Attendance::new(
            7,
            date(3, 2),
            Some(time(9, 0)),
            Some(time(17, 30)),
            AttendanceStatus::Present,
        )
        .unwrap()
    )
);

roundtrip_and_validate!(
    payroll_view_roundtrip,
    PayrollView,
    PayrollView::from(Payroll::new(7, date(3, 1), date(3, 31), 3000.0, 200.0, 150.0).unwrap())
);

roundtrip_and_validate!(
    audit_entry_roundtrip,
    AuditEntry,
    AuditEntry {
        id: 1,
        entity_kind: EntityKind::Application,
        entity_id: 4,
        actor_id: 3,
        action: AuditAction::StatusChanged,
        detail: Some(
            serde_json::to_value(StatusChangedDetail {
                field: "status".into(),
                from: "pending".into(),
                to: "accepted".into(),
                reason: None,
            })
            .unwrap()
        ),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    cascade_detail_roundtrip,
    CascadeDetail,
    CascadeDetail {
        dependent_kind: "task".into(),
        dependent_ids: vec![9, 10],
    }
);

roundtrip_and_validate!(
    delete_response_roundtrip,
    DeleteResponse,
    DeleteResponse {
        kind: EntityKind::Project,
        id: 5,
        cascaded: 2,
    }
);

#[test]
fn payroll_view_serializes_net_salary_flat() {
    let view = PayrollView::from(
        Payroll::new(7, date(3, 1), date(3, 31), 3000.0, 200.0, 150.0).unwrap(),
    );
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["net_salary"], serde_json::json!(3050.0));
    assert_eq!(json["base_salary"], serde_json::json!(3000.0));
    assert_eq!(json["status"], "pending");
}

#[test]
fn enum_values_match_storage_names() {
    let json = serde_json::to_value(ContractStatus::InProgress).unwrap();
    assert_eq!(json, "in_progress");
    let json = serde_json::to_value(ProjectStatus::OnHold).unwrap();
    assert_eq!(json, "on_hold");
}

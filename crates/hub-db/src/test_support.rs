//! Shared test utilities for hub-db tests.

use chrono::NaiveDate;
use hub_core::payment::{PaymentError, PaymentProcessor, PaymentReference};
use hub_core::session::Session;
use std::sync::Mutex;

use crate::HubDb;
use crate::service::HubService;

/// Create an in-memory `HubService`.
pub async fn test_service() -> HubService {
    let db = HubDb::open_local(":memory:").await.unwrap();
    HubService::from_db(db)
}

/// Session for actor 1.
pub fn test_session() -> Session {
    Session::new(1).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Processor double that records calls and can be told to decline.
#[derive(Default)]
pub struct FakeProcessor {
    pub decline: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeProcessor {
    pub fn declining() -> Self {
        Self {
            decline: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), PaymentError> {
        self.calls.lock().unwrap().push(call);
        if self.decline {
            Err(PaymentError::Declined("card declined".into()))
        } else {
            Ok(())
        }
    }
}

impl PaymentProcessor for FakeProcessor {
    async fn authorize(&self, amount: f64) -> Result<PaymentReference, PaymentError> {
        self.record(format!("authorize {amount}"))?;
        Ok(PaymentReference("pi_test_1".into()))
    }

    async fn capture(&self, reference: &PaymentReference) -> Result<(), PaymentError> {
        self.record(format!("capture {reference}"))
    }

    async fn refund(&self, reference: &PaymentReference) -> Result<(), PaymentError> {
        self.record(format!("refund {reference}"))
    }
}

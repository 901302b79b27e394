//! Payments are processed outside WorkHub; these commands record the outcome.

use hub_core::payment::{PaymentError, PaymentProcessor, PaymentReference};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PaymentCommands;
use crate::context::AppContext;
use crate::output::output;

/// Processor stand-in for payments already handled by an external system.
///
/// Authorization hands back the reference the operator supplied; capture and
/// refund always succeed because the money has already moved.
struct RecordedPayment {
    reference: Option<String>,
}

impl PaymentProcessor for RecordedPayment {
    async fn authorize(&self, _amount: f64) -> Result<PaymentReference, PaymentError> {
        self.reference
            .clone()
            .filter(|reference| !reference.trim().is_empty())
            .map(PaymentReference)
            .ok_or_else(|| PaymentError::Unavailable("no processor reference given".into()))
    }

    async fn capture(&self, _reference: &PaymentReference) -> Result<(), PaymentError> {
        Ok(())
    }

    async fn refund(&self, _reference: &PaymentReference) -> Result<(), PaymentError> {
        Ok(())
    }
}

/// Handle `workhub payment`.
pub async fn handle(
    action: &PaymentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    let session = ctx.session()?;
    let contract = match action {
        PaymentCommands::Authorize {
            contract,
            reference,
        } => {
            let processor = RecordedPayment {
                reference: Some(reference.clone()),
            };
            svc.authorize_payment(&session, &processor, *contract).await?
        }
        PaymentCommands::Capture { contract } => {
            let processor = RecordedPayment { reference: None };
            svc.capture_payment(&session, &processor, *contract).await?
        }
        PaymentCommands::Refund { contract } => {
            let processor = RecordedPayment { reference: None };
            svc.refund_payment(&session, &processor, *contract).await?
        }
    };
    output(&contract, flags.format)
}

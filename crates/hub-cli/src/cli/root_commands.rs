use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    ApplicationCommands, AttendanceCommands, ContractCommands, LeaveCommands, MilestoneCommands,
    OfferCommands, PaymentCommands, PayrollCommands, ProjectCommands, TaskCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Job offers.
    Offer {
        #[command(subcommand)]
        action: OfferCommands,
    },
    /// Applications to offers.
    Application {
        #[command(subcommand)]
        action: ApplicationCommands,
    },
    /// Contracts generated from accepted applications.
    Contract {
        #[command(subcommand)]
        action: ContractCommands,
    },
    /// Record externally processed contract payments.
    Payment {
        #[command(subcommand)]
        action: PaymentCommands,
    },
    /// Contract milestones.
    Milestone {
        #[command(subcommand)]
        action: MilestoneCommands,
    },
    /// Leave requests.
    Leave {
        #[command(subcommand)]
        action: LeaveCommands,
    },
    /// Daily attendance.
    Attendance {
        #[command(subcommand)]
        action: AttendanceCommands,
    },
    /// Payroll periods.
    Payroll {
        #[command(subcommand)]
        action: PayrollCommands,
    },
    /// Projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Project tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Audit history of one entity.
    History(HistoryArgs),
    /// Ask the status machine whether a transition is legal.
    Check(CheckArgs),
    /// Print the JSON Schema of an entity or response type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    /// Entity kind (offer, application, contract, ...).
    pub kind: String,
    pub id: i64,
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Entity kind (offer, application, contract, ...).
    pub kind: String,
    pub from: String,
    pub to: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name, e.g. `offer`, `payroll`, `audit-entry`. Omit to list names.
    pub type_name: Option<String>,
}

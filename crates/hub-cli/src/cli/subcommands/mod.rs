mod hr;
mod marketplace;
mod projects;

pub use hr::{AttendanceCommands, LeaveCommands, PayrollCommands};
pub use marketplace::{
    ApplicationCommands, ContractCommands, MilestoneCommands, OfferCommands, PaymentCommands,
};
pub use projects::{ProjectCommands, TaskCommands};

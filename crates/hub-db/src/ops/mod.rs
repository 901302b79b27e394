//! Domain service operations, grouped by area.
//!
//! Each module adds methods to `HubService` via `impl HubService` blocks.

pub mod history;
pub mod hr;
pub mod marketplace;
pub mod payments;
pub mod projects;

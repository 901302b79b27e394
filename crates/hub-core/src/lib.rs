//! # hub-core
//!
//! Core types, status machines, and error types for WorkHub.
//!
//! This crate provides the foundational types shared across all WorkHub crates:
//! - Entity structs for the marketplace, HR, and project domains
//! - Status enums with closed transition tables (`Lifecycle`)
//! - The pure status machine deciding whether a transition is legal
//! - Derived calculations (net salary, hours worked, leave days)
//! - The explicit session context threaded through service calls
//! - The payment processor port used by contract payments
//! - Cross-cutting error types
//! - CLI response types

pub mod audit_detail;
pub mod calc;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod machine;
pub mod payment;
pub mod responses;
pub mod session;

/// Identifier carried by an entity that has not been persisted yet.
pub const TRANSIENT_ID: i64 = 0;

pub mod application;
pub mod attendance;
pub mod check;
pub mod contract;
pub mod dispatch;
pub mod history;
pub mod leave;
pub mod milestone;
pub mod offer;
pub mod payment;
pub mod payroll;
pub mod project;
pub mod schema;
pub mod shared;
pub mod task;

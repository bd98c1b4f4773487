//! Employees domain module.
//!
//! Plain employee records; contracts and invoices reference employees by id
//! (no embedded object graph, no IO, no HTTP, no storage).

pub mod employee;

pub use employee::{ContactInfo, Employee};

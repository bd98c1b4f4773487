//! Contracts domain module.
//!
//! This crate contains business rules for employee contracts (period sanity,
//! non-overlap per employee, daily-rate bounds), implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod contract;
pub mod validator;

pub use contract::{Contract, ContractDraft, ContractType, PayGrade};
pub use validator::{
    ContractError, MAX_DAILY_RATE, ValidatedContract, validate_and_prepare_contract,
    validate_daily_rate, validate_period,
};

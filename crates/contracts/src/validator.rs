//! Contract validation rules.
//!
//! All checks are pure functions over a caller-supplied snapshot of the
//! employee's other contracts; "today" is injected rather than read from the
//! wall clock.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crewbill_core::{ContractId, DatePeriod, EmployeeId};

use crate::contract::{Contract, ContractDraft, ContractType, PayGrade};

/// Business ceiling on the daily rate, in smallest currency unit
/// (10 000.00 in major units).
pub const MAX_DAILY_RATE: u64 = 1_000_000;

/// Deterministic business-rule violations for contracts.
///
/// Variants carry the offending values and, for conflicts, the conflicting
/// record so callers can render a user-facing message. Never transient; no
/// retry policy applies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContractError {
    #[error("contract start date must be before end date ({period})")]
    PeriodOrder { period: DatePeriod },

    #[error("contract start date {start} cannot be in the past (today is {today})")]
    PastStart { start: NaiveDate, today: NaiveDate },

    #[error("contract period overlaps with existing contract {conflicting} ({period})")]
    Overlap {
        conflicting: ContractId,
        period: DatePeriod,
    },

    #[error("daily rate must be greater than zero")]
    RateTooLow { rate: u64 },

    #[error("daily rate {rate} exceeds maximum allowed value {max}")]
    RateTooHigh { rate: u64, max: u64 },
}

/// Validate a contract period against the employee's other contracts.
///
/// `existing` is a point-in-time snapshot; contracts belonging to other
/// employees are ignored, and `exclude` skips the record being edited so it
/// does not collide with itself. When several contracts overlap, the one with
/// the lowest id is reported, keeping the failure deterministic regardless of
/// snapshot order.
pub fn validate_period(
    period: DatePeriod,
    employee_id: EmployeeId,
    existing: &[Contract],
    exclude: Option<ContractId>,
    today: NaiveDate,
) -> Result<(), ContractError> {
    if period.start >= period.end {
        return Err(ContractError::PeriodOrder { period });
    }

    if period.start < today {
        return Err(ContractError::PastStart {
            start: period.start,
            today,
        });
    }

    let conflict = existing
        .iter()
        .filter(|c| c.employee_id == employee_id)
        .filter(|c| Some(c.id) != exclude)
        .filter(|c| period.overlaps(&c.period))
        .min_by_key(|c| c.id);

    if let Some(other) = conflict {
        return Err(ContractError::Overlap {
            conflicting: other.id,
            period: other.period,
        });
    }

    Ok(())
}

/// Validate the daily rate against the business bounds.
///
/// Rates are unsigned cents, so zero is the only non-positive value.
pub fn validate_daily_rate(rate: u64) -> Result<(), ContractError> {
    if rate == 0 {
        return Err(ContractError::RateTooLow { rate });
    }
    if rate > MAX_DAILY_RATE {
        return Err(ContractError::RateTooHigh {
            rate,
            max: MAX_DAILY_RATE,
        });
    }
    Ok(())
}

/// A contract draft that has passed the full rule set.
///
/// Only constructible through [`validate_and_prepare_contract`]; holding one
/// is proof the fields were validated together against a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedContract {
    employee_id: EmployeeId,
    period: DatePeriod,
    daily_rate: u64,
    pay_grade: PayGrade,
    contract_type: ContractType,
}

impl ValidatedContract {
    pub fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }

    pub fn period(&self) -> DatePeriod {
        self.period
    }

    pub fn daily_rate(&self) -> u64 {
        self.daily_rate
    }

    pub fn pay_grade(&self) -> PayGrade {
        self.pay_grade
    }

    pub fn contract_type(&self) -> ContractType {
        self.contract_type
    }

    /// Materialize the record under the id assigned by the caller.
    pub fn into_contract(self, id: ContractId) -> Contract {
        Contract {
            id,
            employee_id: self.employee_id,
            period: self.period,
            daily_rate: self.daily_rate,
            pay_grade: self.pay_grade,
            contract_type: self.contract_type,
        }
    }
}

/// Run the full contract rule set over a draft.
///
/// `exclude` names the contract being edited (edit flows re-run every rule
/// against the new values, minus the record's collision with itself).
pub fn validate_and_prepare_contract(
    draft: ContractDraft,
    existing: &[Contract],
    exclude: Option<ContractId>,
    today: NaiveDate,
) -> Result<ValidatedContract, ContractError> {
    validate_period(draft.period, draft.employee_id, existing, exclude, today)?;
    validate_daily_rate(draft.daily_rate)?;

    Ok(ValidatedContract {
        employee_id: draft.employee_id,
        period: draft.period,
        daily_rate: draft.daily_rate,
        pay_grade: draft.pay_grade,
        contract_type: draft.contract_type,
    })
}

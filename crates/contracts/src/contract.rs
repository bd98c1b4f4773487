use serde::{Deserialize, Serialize};

use crewbill_core::{ContractId, DatePeriod, EmployeeId, Entity};

/// Pay grade attached to a contract.
///
/// Opaque category tag; nothing in the validation rules depends on the
/// particular grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayGrade {
    Junior,
    Intermediate,
    Senior,
    Expert,
}

/// Engagement form of a contract. Opaque tag, like [`PayGrade`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
    FullTime,
    PartTime,
    Contract,
}

/// A time-bounded daily-rate contract for one employee.
///
/// Invariants (enforced by [`crate::validator`], not by construction):
/// the period is ordered (`start < end`) and no two contracts of the same
/// employee overlap, endpoints included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub id: ContractId,
    pub employee_id: EmployeeId,
    pub period: DatePeriod,
    /// Daily rate in smallest currency unit (e.g., cents).
    pub daily_rate: u64,
    pub pay_grade: PayGrade,
    pub contract_type: ContractType,
}

impl Entity for Contract {
    type Id = ContractId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Caller-supplied fields for a contract about to be created or edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDraft {
    pub employee_id: EmployeeId,
    pub period: DatePeriod,
    /// Daily rate in smallest currency unit (e.g., cents).
    pub daily_rate: u64,
    pub pay_grade: PayGrade,
    pub contract_type: ContractType,
}

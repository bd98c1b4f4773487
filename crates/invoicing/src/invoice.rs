use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crewbill_core::{ContractId, DatePeriod, EmployeeId, Entity, InvoiceId};

use crate::number::InvoiceNumber;

/// Invoice status lifecycle.
///
/// Closed set. Status may be set directly to any value on update; the
/// machine only gates which statuses permit mutation and deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Approved,
    Rejected,
}

impl InvoiceStatus {
    /// Whether an invoice in this status may have its period/amount fields
    /// edited. Only drafts and rejected invoices are editable.
    pub fn can_mutate(self) -> bool {
        match self {
            InvoiceStatus::Draft | InvoiceStatus::Rejected => true,
            InvoiceStatus::Approved => false,
        }
    }

    /// Whether an invoice in this status may be deleted. Drafts only.
    pub fn can_delete(self) -> bool {
        match self {
            InvoiceStatus::Draft => true,
            InvoiceStatus::Approved | InvoiceStatus::Rejected => false,
        }
    }
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::Approved => "Approved",
            InvoiceStatus::Rejected => "Rejected",
        };
        f.write_str(label)
    }
}

/// An invoice billing a sub-period of one employee's contract.
///
/// Invariants (enforced by [`crate::lifecycle`], not by construction):
/// the period is ordered and lies inside the contract period, no two
/// invoices of the same employee overlap (endpoints included), and
/// `total_amount == days_worked * contract.daily_rate` exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub number: InvoiceNumber,
    pub employee_id: EmployeeId,
    pub contract_id: ContractId,
    pub period: DatePeriod,
    pub days_worked: u32,
    /// Amount in smallest currency unit (e.g., cents).
    pub total_amount: u64,
    pub status: InvoiceStatus,
    pub created_at: DateTime<Utc>,
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Caller-supplied fields for an invoice about to be created or edited.
///
/// The total amount is not part of the draft: it is derived from the worked
/// days and the contract's daily rate during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub employee_id: EmployeeId,
    pub contract_id: ContractId,
    pub period: DatePeriod,
    pub days_worked: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_draft_and_rejected_are_mutable() {
        assert!(InvoiceStatus::Draft.can_mutate());
        assert!(InvoiceStatus::Rejected.can_mutate());
        assert!(!InvoiceStatus::Approved.can_mutate());
    }

    #[test]
    fn only_draft_is_deletable() {
        assert!(InvoiceStatus::Draft.can_delete());
        assert!(!InvoiceStatus::Approved.can_delete());
        assert!(!InvoiceStatus::Rejected.can_delete());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&InvoiceStatus::Approved).unwrap();
        assert_eq!(json, "\"approved\"");
    }
}

//! Persistence boundary consumed by the engine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crewbill_contracts::{Contract, ValidatedContract};
use crewbill_core::{ContractId, DatePeriod, EmployeeId, InvoiceId};
use crewbill_employees::Employee;
use crewbill_invoicing::{Invoice, InvoiceNumber, InvoiceStatus, ValidatedInvoice};

/// A fully validated invoice ready to be persisted, before the store has
/// assigned its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInvoice {
    pub number: InvoiceNumber,
    pub employee_id: EmployeeId,
    pub contract_id: ContractId,
    pub period: DatePeriod,
    pub days_worked: u32,
    pub total_amount: u64,
    pub status: InvoiceStatus,
    pub created_at: DateTime<Utc>,
}

impl NewInvoice {
    pub fn from_validated(
        validated: ValidatedInvoice,
        number: InvoiceNumber,
        status: InvoiceStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            number,
            employee_id: validated.employee_id(),
            contract_id: validated.contract_id(),
            period: validated.period(),
            days_worked: validated.days_worked(),
            total_amount: validated.total_amount(),
            status,
            created_at,
        }
    }
}

/// Snapshot reads and record writes the engine needs from persistence.
///
/// Reads must return a consistent point-in-time snapshot; the engine holds a
/// per-employee lock across read-validate-write, so implementations backed by
/// a real database only need per-call consistency.
///
/// `invoices_created_on` feeds the invoice-number sequence and is scoped
/// globally (all employees). The engine's per-employee lock does not make the
/// count atomic across employees; implementations wanting strictly gapless,
/// duplicate-free numbers under concurrent load should back this with a
/// database sequence or unique constraint on the number column.
pub trait StaffingStore: Send + Sync {
    fn employee(&self, id: EmployeeId) -> Option<Employee>;

    fn contract(&self, id: ContractId) -> Option<Contract>;

    fn contracts_for_employee(&self, employee_id: EmployeeId) -> Vec<Contract>;

    fn invoice(&self, id: InvoiceId) -> Option<Invoice>;

    fn invoices_for_employee(&self, employee_id: EmployeeId) -> Vec<Invoice>;

    /// Count of invoices whose `created_at` calendar date equals `date`.
    fn invoices_created_on(&self, date: NaiveDate) -> u64;

    /// Persist a validated contract, assigning its id.
    fn insert_contract(&self, validated: ValidatedContract) -> Contract;

    /// Overwrite an existing contract record.
    fn update_contract(&self, contract: Contract);

    /// Persist a validated invoice, assigning its id.
    fn insert_invoice(&self, invoice: NewInvoice) -> Invoice;

    /// Overwrite an existing invoice record.
    fn update_invoice(&self, invoice: Invoice);

    fn delete_invoice(&self, id: InvoiceId);
}

//! In-memory [`StaffingStore`].
//!
//! Intended for tests/dev and embedding. Not optimized for performance.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use chrono::NaiveDate;

use crewbill_contracts::{Contract, ValidatedContract};
use crewbill_core::{ContractId, EmployeeId, InvoiceId};
use crewbill_employees::Employee;
use crewbill_invoicing::Invoice;

use crate::store::{NewInvoice, StaffingStore};

#[derive(Debug, Default)]
struct State {
    employees: BTreeMap<EmployeeId, Employee>,
    contracts: BTreeMap<ContractId, Contract>,
    invoices: BTreeMap<InvoiceId, Invoice>,
    next_contract_id: i64,
    next_invoice_id: i64,
}

/// In-memory store over `BTreeMap`s, so snapshot enumeration order is id
/// ascending and therefore deterministic.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an employee record (the engine never creates employees).
    pub fn put_employee(&self, employee: Employee) {
        self.write().employees.insert(employee.id, employee);
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StaffingStore for MemoryStore {
    fn employee(&self, id: EmployeeId) -> Option<Employee> {
        self.read().employees.get(&id).cloned()
    }

    fn contract(&self, id: ContractId) -> Option<Contract> {
        self.read().contracts.get(&id).cloned()
    }

    fn contracts_for_employee(&self, employee_id: EmployeeId) -> Vec<Contract> {
        self.read()
            .contracts
            .values()
            .filter(|c| c.employee_id == employee_id)
            .cloned()
            .collect()
    }

    fn invoice(&self, id: InvoiceId) -> Option<Invoice> {
        self.read().invoices.get(&id).cloned()
    }

    fn invoices_for_employee(&self, employee_id: EmployeeId) -> Vec<Invoice> {
        self.read()
            .invoices
            .values()
            .filter(|i| i.employee_id == employee_id)
            .cloned()
            .collect()
    }

    fn invoices_created_on(&self, date: NaiveDate) -> u64 {
        self.read()
            .invoices
            .values()
            .filter(|i| i.created_at.date_naive() == date)
            .count() as u64
    }

    fn insert_contract(&self, validated: ValidatedContract) -> Contract {
        let mut state = self.write();
        state.next_contract_id += 1;
        let contract = validated.into_contract(ContractId::new(state.next_contract_id));
        state.contracts.insert(contract.id, contract.clone());
        contract
    }

    fn update_contract(&self, contract: Contract) {
        self.write().contracts.insert(contract.id, contract);
    }

    fn insert_invoice(&self, invoice: NewInvoice) -> Invoice {
        let mut state = self.write();
        state.next_invoice_id += 1;
        let invoice = Invoice {
            id: InvoiceId::new(state.next_invoice_id),
            number: invoice.number,
            employee_id: invoice.employee_id,
            contract_id: invoice.contract_id,
            period: invoice.period,
            days_worked: invoice.days_worked,
            total_amount: invoice.total_amount,
            status: invoice.status,
            created_at: invoice.created_at,
        };
        state.invoices.insert(invoice.id, invoice.clone());
        invoice
    }

    fn update_invoice(&self, invoice: Invoice) {
        self.write().invoices.insert(invoice.id, invoice);
    }

    fn delete_invoice(&self, id: InvoiceId) {
        self.write().invoices.remove(&id);
    }
}

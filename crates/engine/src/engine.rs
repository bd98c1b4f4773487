//! Contract and invoice operations over a [`StaffingStore`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crewbill_contracts::{
    Contract, ContractDraft, ContractError, validate_and_prepare_contract,
};
use crewbill_core::{Clock, ContractId, DatePeriod, EmployeeId, InvoiceId};
use crewbill_invoicing::{
    Invoice, InvoiceDraft, InvoiceError, InvoiceNumber, InvoiceStatus, ValidationMode,
    validate_and_prepare_invoice,
};

use crate::locks::EmployeeLocks;
use crate::store::{NewInvoice, StaffingStore};

/// Failures surfaced by the engine: the domain-rule violations, plus lookup
/// and status-gate failures owned by this boundary.
///
/// Translating these into transport-level responses (HTTP codes etc.) is the
/// caller's job; nothing here carries one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error(transparent)]
    Invoice(#[from] InvoiceError),

    #[error("employee {0} not found")]
    EmployeeNotFound(EmployeeId),

    #[error("contract {contract_id} not found or does not belong to employee {employee_id}")]
    ContractNotFound {
        contract_id: ContractId,
        employee_id: EmployeeId,
    },

    #[error("invoice {0} not found")]
    InvoiceNotFound(InvoiceId),

    #[error("invoice {id} cannot be edited in {status} status")]
    NotEditable { id: InvoiceId, status: InvoiceStatus },

    #[error("invoice {id} cannot be deleted in {status} status")]
    NotDeletable { id: InvoiceId, status: InvoiceStatus },
}

/// Caller-supplied fields for an invoice edit.
///
/// The worked days must match the period exactly (update semantics); the
/// status may be set to any value — the machine gates *whether* the invoice
/// is editable, not which transitions are taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceUpdate {
    pub period: DatePeriod,
    pub days_worked: u32,
    pub status: InvoiceStatus,
}

/// Orchestrates validation and persistence for contracts and invoices.
///
/// Validators themselves are pure and snapshot-based; the engine closes the
/// snapshot-to-write gap by holding the employee's lock across
/// read-validate-write.
pub struct Engine<S, C> {
    store: S,
    clock: C,
    locks: EmployeeLocks,
}

impl<S: StaffingStore, C: Clock> Engine<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            locks: EmployeeLocks::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate and persist a new contract.
    pub fn create_contract(&self, draft: ContractDraft) -> Result<Contract, EngineError> {
        let employee_id = draft.employee_id;
        if self.store.employee(employee_id).is_none() {
            return Err(EngineError::EmployeeNotFound(employee_id));
        }

        let lock = self.locks.for_employee(employee_id);
        let _guard = lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

        let existing = self.store.contracts_for_employee(employee_id);
        let validated =
            validate_and_prepare_contract(draft, &existing, None, self.clock.today())
                .inspect_err(|err| warn!(%employee_id, %err, "contract rejected"))?;

        let contract = self.store.insert_contract(validated);
        debug!(%employee_id, contract_id = %contract.id, "contract created");
        Ok(contract)
    }

    /// Re-validate and overwrite an existing contract.
    ///
    /// The full rule set runs against the new values, with the edited record
    /// excluded from its own overlap check.
    pub fn update_contract(
        &self,
        id: ContractId,
        draft: ContractDraft,
    ) -> Result<Contract, EngineError> {
        let employee_id = draft.employee_id;
        let current = self
            .store
            .contract(id)
            .filter(|c| c.employee_id == employee_id)
            .ok_or(EngineError::ContractNotFound {
                contract_id: id,
                employee_id,
            })?;

        let lock = self.locks.for_employee(current.employee_id);
        let _guard = lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

        let existing = self.store.contracts_for_employee(employee_id);
        let validated =
            validate_and_prepare_contract(draft, &existing, Some(id), self.clock.today())
                .inspect_err(|err| warn!(%employee_id, contract_id = %id, %err, "contract update rejected"))?;

        let contract = validated.into_contract(id);
        self.store.update_contract(contract.clone());
        debug!(%employee_id, contract_id = %id, "contract updated");
        Ok(contract)
    }

    /// Validate and persist a new invoice: Draft status, creation timestamp
    /// and a date-scoped sequential number are assigned here.
    pub fn create_invoice(&self, draft: InvoiceDraft) -> Result<Invoice, EngineError> {
        let employee_id = draft.employee_id;
        let lock = self.locks.for_employee(employee_id);
        let _guard = lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

        let contract = self
            .store
            .contract(draft.contract_id)
            .filter(|c| c.employee_id == employee_id)
            .ok_or(EngineError::ContractNotFound {
                contract_id: draft.contract_id,
                employee_id,
            })?;

        let existing = self.store.invoices_for_employee(employee_id);
        let validated =
            validate_and_prepare_invoice(draft, &contract, &existing, ValidationMode::Create)
                .inspect_err(|err| warn!(%employee_id, %err, "invoice rejected"))?;

        let today = self.clock.today();
        let number = InvoiceNumber::generate(today, self.store.invoices_created_on(today));

        let invoice = self.store.insert_invoice(NewInvoice::from_validated(
            validated,
            number,
            InvoiceStatus::Draft,
            self.clock.now(),
        ));
        debug!(%employee_id, invoice_id = %invoice.id, number = %invoice.number, "invoice created");
        Ok(invoice)
    }

    /// Re-validate and overwrite an existing invoice.
    ///
    /// Only invoices whose status permits mutation (Draft, Rejected) may be
    /// edited. Worked days and amount are recomputed from the new period and
    /// recorded over the caller's claim; the status is set to the requested
    /// value.
    pub fn update_invoice(
        &self,
        id: InvoiceId,
        update: InvoiceUpdate,
    ) -> Result<Invoice, EngineError> {
        let employee_id = self
            .store
            .invoice(id)
            .ok_or(EngineError::InvoiceNotFound(id))?
            .employee_id;

        let lock = self.locks.for_employee(employee_id);
        let _guard = lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

        // Re-read under the lock; the record may have changed since the
        // unlocked lookup that told us which employee to serialize on.
        let invoice = self
            .store
            .invoice(id)
            .ok_or(EngineError::InvoiceNotFound(id))?;

        if !invoice.status.can_mutate() {
            warn!(invoice_id = %id, status = %invoice.status, "invoice edit blocked by status");
            return Err(EngineError::NotEditable {
                id,
                status: invoice.status,
            });
        }

        let contract = self
            .store
            .contract(invoice.contract_id)
            .filter(|c| c.employee_id == invoice.employee_id)
            .ok_or(EngineError::ContractNotFound {
                contract_id: invoice.contract_id,
                employee_id: invoice.employee_id,
            })?;

        let draft = InvoiceDraft {
            employee_id: invoice.employee_id,
            contract_id: invoice.contract_id,
            period: update.period,
            days_worked: update.days_worked,
        };
        let existing = self.store.invoices_for_employee(invoice.employee_id);
        let validated = validate_and_prepare_invoice(
            draft,
            &contract,
            &existing,
            ValidationMode::Update { invoice_id: id },
        )
        .inspect_err(|err| warn!(invoice_id = %id, %err, "invoice update rejected"))?;

        let updated = Invoice {
            id,
            number: invoice.number,
            employee_id: invoice.employee_id,
            contract_id: invoice.contract_id,
            period: validated.period(),
            days_worked: validated.days_worked(),
            total_amount: validated.total_amount(),
            status: update.status,
            created_at: invoice.created_at,
        };
        self.store.update_invoice(updated.clone());
        debug!(invoice_id = %id, status = %updated.status, "invoice updated");
        Ok(updated)
    }

    /// Delete an invoice. Drafts only.
    pub fn delete_invoice(&self, id: InvoiceId) -> Result<(), EngineError> {
        let invoice = self
            .store
            .invoice(id)
            .ok_or(EngineError::InvoiceNotFound(id))?;

        if !invoice.status.can_delete() {
            warn!(invoice_id = %id, status = %invoice.status, "invoice delete blocked by status");
            return Err(EngineError::NotDeletable {
                id,
                status: invoice.status,
            });
        }

        self.store.delete_invoice(id);
        debug!(invoice_id = %id, "invoice deleted");
        Ok(())
    }
}

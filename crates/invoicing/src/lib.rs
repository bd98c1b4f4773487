//! Invoicing domain module.
//!
//! This crate contains business rules for invoices billed against employee
//! contracts: period containment, per-employee non-overlap, worked-day and
//! amount consistency, sequential invoice numbers and the status machine.
//! Implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod invoice;
pub mod lifecycle;
pub mod number;

pub use invoice::{Invoice, InvoiceDraft, InvoiceStatus};
pub use lifecycle::{
    InvoiceError, ValidatedInvoice, ValidationMode, check_days_worked,
    validate_and_prepare_invoice, validate_no_overlap, validate_period, validate_total_amount,
};
pub use number::InvoiceNumber;

//! Sequential, date-scoped invoice numbers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Human-readable invoice identifier, `INV-{yyyymmdd}-{seq:04}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceNumber(String);

impl InvoiceNumber {
    /// Derive the next number for `reference`, given how many invoices were
    /// already created on that calendar date (globally, not per employee).
    ///
    /// Pure given its inputs. Reading the current count and keeping it
    /// consistent until the write commits is the caller's problem; see the
    /// engine's per-day sequencing notes.
    pub fn generate(reference: NaiveDate, created_so_far: u64) -> Self {
        let seq = created_so_far + 1;
        Self(format!("INV-{}-{:04}", reference.format("%Y%m%d"), seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

//! Invoice validation and lifecycle rules.
//!
//! Four checks compose, in order: period containment, per-employee
//! non-overlap, worked-day consistency, amount consistency. All are pure
//! functions over a caller-supplied snapshot of the employee's invoices.

use serde::Serialize;
use thiserror::Error;

use crewbill_contracts::Contract;
use crewbill_core::{ContractId, DatePeriod, DateRangeError, EmployeeId, InvoiceId, working_days};

use crate::invoice::{Invoice, InvoiceDraft};

/// Deterministic business-rule violations for invoices.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvoiceError {
    #[error("invoice start date must be before end date ({period})")]
    PeriodOrder { period: DatePeriod },

    #[error("invoice period ({invoice}) must be within contract period ({contract})")]
    OutOfContract {
        invoice: DatePeriod,
        contract: DatePeriod,
    },

    #[error("invoice period overlaps with existing invoice {conflicting} ({period})")]
    Overlap {
        conflicting: InvoiceId,
        period: DatePeriod,
    },

    #[error("days worked ({claimed}) cannot exceed actual working days ({actual})")]
    DaysExceedActual { claimed: u32, actual: u32 },

    #[error("days worked ({claimed}) does not match actual working days ({actual})")]
    DaysMismatch { claimed: u32, actual: u32 },

    #[error("total amount ({amount}) does not match expected amount ({expected})")]
    AmountMismatch { amount: u64, expected: u64 },

    #[error("invoice amount overflow")]
    AmountOverflow,

    #[error(transparent)]
    InvalidRange(#[from] DateRangeError),
}

/// Whether an invoice is being created or an existing one edited.
///
/// The two paths deliberately differ on worked days: create accepts a claim
/// of fewer days than the period actually holds (partial billing), update
/// requires an exact match and records the recomputed value. Update also
/// names the invoice being edited so it is excluded from its own overlap
/// check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Create,
    Update { invoice_id: InvoiceId },
}

/// Check the invoice period is ordered and inside the contract period.
pub fn validate_period(period: DatePeriod, contract: &Contract) -> Result<(), InvoiceError> {
    if period.start >= period.end {
        return Err(InvoiceError::PeriodOrder { period });
    }

    if !contract.period.contains(&period) {
        return Err(InvoiceError::OutOfContract {
            invoice: period,
            contract: contract.period,
        });
    }

    Ok(())
}

/// Check the period against every other invoice of the same employee.
///
/// `existing` is a point-in-time snapshot of the employee's invoices;
/// `exclude` skips the record being edited. Overlap is the inclusive,
/// symmetric interval test. When several invoices overlap, the one with the
/// lowest id is reported so failures are deterministic regardless of
/// snapshot order.
pub fn validate_no_overlap(
    period: DatePeriod,
    existing: &[Invoice],
    exclude: Option<InvoiceId>,
) -> Result<(), InvoiceError> {
    let conflict = existing
        .iter()
        .filter(|i| Some(i.id) != exclude)
        .filter(|i| period.overlaps(&i.period))
        .min_by_key(|i| i.id);

    if let Some(other) = conflict {
        return Err(InvoiceError::Overlap {
            conflicting: other.id,
            period: other.period,
        });
    }

    Ok(())
}

/// Reconcile the claimed worked days with the period's working days.
///
/// Returns the day count to record: the claimed value on create, the
/// computed value on update (caller input is overwritten, not trusted).
pub fn check_days_worked(
    period: DatePeriod,
    claimed: u32,
    mode: ValidationMode,
) -> Result<u32, InvoiceError> {
    let actual = working_days(period.start, period.end)?;

    match mode {
        ValidationMode::Create => {
            if claimed > actual {
                return Err(InvoiceError::DaysExceedActual { claimed, actual });
            }
            Ok(claimed)
        }
        ValidationMode::Update { .. } => {
            if claimed != actual {
                return Err(InvoiceError::DaysMismatch { claimed, actual });
            }
            Ok(actual)
        }
    }
}

/// Check `total_amount == days_worked * daily_rate`, exactly.
///
/// Amounts are integer cents, so equality is exact with no rounding
/// tolerance.
pub fn validate_total_amount(
    total_amount: u64,
    days_worked: u32,
    daily_rate: u64,
) -> Result<(), InvoiceError> {
    let expected = expected_amount(days_worked, daily_rate)?;
    if total_amount != expected {
        return Err(InvoiceError::AmountMismatch {
            amount: total_amount,
            expected,
        });
    }
    Ok(())
}

fn expected_amount(days_worked: u32, daily_rate: u64) -> Result<u64, InvoiceError> {
    u64::from(days_worked)
        .checked_mul(daily_rate)
        .ok_or(InvoiceError::AmountOverflow)
}

/// An invoice draft that has passed the full rule set.
///
/// Only constructible through [`validate_and_prepare_invoice`]; the worked
/// days and total amount are the values to persist (on update they may
/// differ from the caller's claim).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedInvoice {
    employee_id: EmployeeId,
    contract_id: ContractId,
    period: DatePeriod,
    days_worked: u32,
    total_amount: u64,
}

impl ValidatedInvoice {
    pub fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }

    pub fn contract_id(&self) -> ContractId {
        self.contract_id
    }

    pub fn period(&self) -> DatePeriod {
        self.period
    }

    pub fn days_worked(&self) -> u32 {
        self.days_worked
    }

    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }
}

/// Run the full invoice rule set over a draft, in order: period, overlap,
/// worked days, amount.
///
/// `contract` must be the contract the draft bills against; `existing` is
/// the snapshot of the employee's invoices. The amount is derived from the
/// recorded day count and the contract's daily rate, then re-checked through
/// [`validate_total_amount`].
pub fn validate_and_prepare_invoice(
    draft: InvoiceDraft,
    contract: &Contract,
    existing: &[Invoice],
    mode: ValidationMode,
) -> Result<ValidatedInvoice, InvoiceError> {
    validate_period(draft.period, contract)?;

    let exclude = match mode {
        ValidationMode::Create => None,
        ValidationMode::Update { invoice_id } => Some(invoice_id),
    };
    validate_no_overlap(draft.period, existing, exclude)?;

    let days_worked = check_days_worked(draft.period, draft.days_worked, mode)?;

    let total_amount = expected_amount(days_worked, contract.daily_rate)?;
    validate_total_amount(total_amount, days_worked, contract.daily_rate)?;

    Ok(ValidatedInvoice {
        employee_id: draft.employee_id,
        contract_id: draft.contract_id,
        period: draft.period,
        days_worked,
        total_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use proptest::prelude::*;

    use crate::invoice::InvoiceStatus;
    use crate::number::InvoiceNumber;
    use crewbill_contracts::{ContractType, PayGrade};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn contract() -> Contract {
        Contract {
            id: ContractId::new(1),
            employee_id: EmployeeId::new(1),
            period: DatePeriod::new(d(2024, 1, 1), d(2024, 12, 31)),
            daily_rate: 100,
            pay_grade: PayGrade::Senior,
            contract_type: ContractType::FullTime,
        }
    }

    fn invoice(id: i64, start: NaiveDate, end: NaiveDate) -> Invoice {
        Invoice {
            id: InvoiceId::new(id),
            number: InvoiceNumber::generate(start, 0),
            employee_id: EmployeeId::new(1),
            contract_id: ContractId::new(1),
            period: DatePeriod::new(start, end),
            days_worked: 1,
            total_amount: 100,
            status: InvoiceStatus::Draft,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    // 2024-06-03 is a Monday; through Friday 2024-06-14 spans exactly
    // 10 working days.
    fn ten_weekday_draft(days_worked: u32) -> InvoiceDraft {
        InvoiceDraft {
            employee_id: EmployeeId::new(1),
            contract_id: ContractId::new(1),
            period: DatePeriod::new(d(2024, 6, 3), d(2024, 6, 14)),
            days_worked,
        }
    }

    #[test]
    fn period_inside_contract_passes() {
        validate_period(DatePeriod::new(d(2024, 3, 1), d(2024, 3, 31)), &contract()).unwrap();
    }

    #[test]
    fn period_escaping_contract_is_rejected() {
        let err = validate_period(DatePeriod::new(d(2024, 12, 1), d(2025, 1, 15)), &contract())
            .unwrap_err();
        assert!(matches!(err, InvoiceError::OutOfContract { .. }));
    }

    #[test]
    fn reversed_period_is_a_period_order_error() {
        let err = validate_period(DatePeriod::new(d(2024, 3, 31), d(2024, 3, 1)), &contract())
            .unwrap_err();
        assert!(matches!(err, InvoiceError::PeriodOrder { .. }));
    }

    #[test]
    fn overlapping_invoice_is_rejected() {
        let existing = vec![invoice(5, d(2024, 3, 1), d(2024, 3, 15))];
        let err = validate_no_overlap(
            DatePeriod::new(d(2024, 3, 15), d(2024, 3, 31)),
            &existing,
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            InvoiceError::Overlap { conflicting, .. } if conflicting == InvoiceId::new(5)
        ));
    }

    #[test]
    fn edited_invoice_is_excluded_from_its_own_overlap_check() {
        let existing = vec![invoice(5, d(2024, 3, 1), d(2024, 3, 15))];
        validate_no_overlap(
            DatePeriod::new(d(2024, 3, 1), d(2024, 3, 20)),
            &existing,
            Some(InvoiceId::new(5)),
        )
        .unwrap();
    }

    #[test]
    fn lowest_conflicting_id_is_reported_first() {
        let existing = vec![
            invoice(8, d(2024, 3, 10), d(2024, 3, 20)),
            invoice(2, d(2024, 3, 1), d(2024, 3, 12)),
        ];
        let err = validate_no_overlap(
            DatePeriod::new(d(2024, 3, 11), d(2024, 3, 25)),
            &existing,
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            InvoiceError::Overlap { conflicting, .. } if conflicting == InvoiceId::new(2)
        ));
    }

    #[test]
    fn exact_amount_passes_and_off_by_anything_fails() {
        validate_total_amount(2000, 20, 100).unwrap();
        let err = validate_total_amount(2500, 20, 100).unwrap_err();
        assert_eq!(
            err,
            InvoiceError::AmountMismatch {
                amount: 2500,
                expected: 2000,
            }
        );
    }

    #[test]
    fn create_allows_billing_fewer_days_than_worked() {
        let validated = validate_and_prepare_invoice(
            ten_weekday_draft(9),
            &contract(),
            &[],
            ValidationMode::Create,
        )
        .unwrap();
        // The claimed value is what gets recorded.
        assert_eq!(validated.days_worked(), 9);
        assert_eq!(validated.total_amount(), 900);
    }

    #[test]
    fn create_rejects_claiming_more_days_than_the_period_holds() {
        let err = validate_and_prepare_invoice(
            ten_weekday_draft(11),
            &contract(),
            &[],
            ValidationMode::Create,
        )
        .unwrap_err();
        assert_eq!(
            err,
            InvoiceError::DaysExceedActual {
                claimed: 11,
                actual: 10,
            }
        );
    }

    #[test]
    fn update_requires_exact_day_match() {
        let err = validate_and_prepare_invoice(
            ten_weekday_draft(9),
            &contract(),
            &[],
            ValidationMode::Update {
                invoice_id: InvoiceId::new(1),
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            InvoiceError::DaysMismatch {
                claimed: 9,
                actual: 10,
            }
        );
    }

    #[test]
    fn update_records_the_computed_values() {
        let validated = validate_and_prepare_invoice(
            ten_weekday_draft(10),
            &contract(),
            &[],
            ValidationMode::Update {
                invoice_id: InvoiceId::new(1),
            },
        )
        .unwrap();
        assert_eq!(validated.days_worked(), 10);
        assert_eq!(validated.total_amount(), 1000);
    }

    fn day_in_2024(ordinal: u32) -> NaiveDate {
        d(2024, 1, 2) + chrono::Days::new(u64::from(ordinal))
    }

    proptest! {
        // Any invoice period intersecting another invoice of the same
        // employee must be rejected, wherever the two periods sit.
        #[test]
        fn intersecting_invoices_are_always_rejected(
            start in 0u32..200,
            len in 1u32..30,
            offset in 0u32..30,
        ) {
            let existing_period =
                DatePeriod::new(day_in_2024(start), day_in_2024(start + len));
            let candidate =
                DatePeriod::new(day_in_2024(start + offset), day_in_2024(start + offset + len));
            prop_assume!(candidate.overlaps(&existing_period));

            let other = invoice(1, existing_period.start, existing_period.end);
            let result = validate_no_overlap(candidate, &[other], None);
            let is_overlap = matches!(result, Err(InvoiceError::Overlap { .. }));
            prop_assert!(is_overlap);
        }

        // On create, any claim at or under the period's working days passes
        // the day check and is recorded as claimed.
        #[test]
        fn create_accepts_any_partial_claim(claimed in 0u32..=10) {
            let period = DatePeriod::new(d(2024, 6, 3), d(2024, 6, 14));
            let recorded =
                check_days_worked(period, claimed, ValidationMode::Create).unwrap();
            prop_assert_eq!(recorded, claimed);
        }
    }
}

//! `crewbill-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! typed identifiers, inclusive date periods, the working-day calendar and the
//! injectable clock the validators read "today" from.

pub mod calendar;
pub mod clock;
pub mod entity;
pub mod id;
pub mod period;
pub mod value_object;

pub use calendar::{DateRangeError, working_days};
pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::Entity;
pub use id::{ContractId, EmployeeId, InvoiceId, ParseIdError};
pub use period::DatePeriod;
pub use value_object::ValueObject;

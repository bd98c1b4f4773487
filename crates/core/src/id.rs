//! Strongly-typed identifiers used across the domain.
//!
//! Records reference each other by id (an `i64` database key), never by
//! embedded object references; relationship resolution happens at the
//! persistence boundary.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to parse a typed identifier from a string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid {kind} identifier: {input:?}")]
pub struct ParseIdError {
    pub kind: &'static str,
    pub input: String,
}

/// Identifier of an employee.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

/// Identifier of a contract.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(i64);

/// Identifier of an invoice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(i64);

macro_rules! impl_int_id {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let id = i64::from_str(s).map_err(|_| ParseIdError {
                    kind: $name,
                    input: s.to_owned(),
                })?;
                Ok(Self(id))
            }
        }
    };
}

impl_int_id!(EmployeeId, "EmployeeId");
impl_int_id!(ContractId, "ContractId");
impl_int_id!(InvoiceId, "InvoiceId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_round_trip() {
        let id: ContractId = "42".parse().unwrap();
        assert_eq!(id, ContractId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn rejects_non_numeric_input() {
        let err = "abc".parse::<InvoiceId>().unwrap_err();
        assert_eq!(err.kind, "InvoiceId");
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&EmployeeId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crewbill_core::{EmployeeId, Entity};

/// Contact information for an employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

/// An employee on the roster.
///
/// Contracts and invoices belong to an employee but are held elsewhere and
/// reference this record by [`EmployeeId`]; the engine fetches them through
/// the persistence boundary when validating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub contact: ContactInfo,
    pub department: String,
    pub position: String,
    /// Annual salary in smallest currency unit (e.g., cents).
    pub salary: u64,
    pub hire_date: NaiveDate,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Employee {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_first_and_last() {
        let employee = Employee {
            id: EmployeeId::new(1),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            contact: ContactInfo {
                email: "ada@example.com".to_string(),
                phone: "123-456-7890".to_string(),
            },
            department: "Engineering".to_string(),
            position: "Senior Developer".to_string(),
            salary: 100_000_00,
            hire_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
        };
        assert_eq!(employee.full_name(), "Ada Lovelace");
    }
}

use serde::{Deserialize, Serialize};

use tally_core::Money;

/// A person in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    name: String,
    age: u32,
    department: String,
    salary: Money,
}

impl User {
    pub fn new(name: impl Into<String>, age: u32, department: impl Into<String>, salary: Money) -> Self {
        Self {
            name: name.into(),
            age,
            department: department.into(),
            salary,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn salary(&self) -> Money {
        self.salary
    }

    /// Name length in characters (not bytes).
    pub fn name_len(&self) -> usize {
        self.name.chars().count()
    }
}

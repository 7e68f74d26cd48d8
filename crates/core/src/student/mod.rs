//! Student records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::keys::AdmissionNumber;

/// Student gender as recorded at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

/// Guardian contact details.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Guardian {
    /// Guardian's full name.
    pub name: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Email address.
    pub email: Option<String>,
}

/// A registered student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique, immutable admission number.
    pub admission_no: AdmissionNumber,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Gender.
    pub gender: Option<Gender>,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Guardian contact.
    pub guardian: Guardian,
    /// Current class, if the student has been placed in one.
    pub class_name: Option<String>,
}

impl Student {
    /// Current class, treating a blank class name as absent.
    #[must_use]
    pub fn current_class(&self) -> Option<&str> {
        self.class_name
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

//! Record identity and the student data a registration carries.

use std::fmt;

use chrono::NaiveDate;

/// Unique identifier for a committed registration.
///
/// Assigned by the store from a monotonic counter and never reused, even
/// after the record it named is deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Student-supplied registration data, without identity.
///
/// No field is validated: any string, empty included, is accepted as
/// submitted. The two calendar dates are `None` when the submitted text was
/// not a date.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct StudentProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub degree: String,
    pub major: String,
    pub grad_year: Option<NaiveDate>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: String,
    pub ethnicity: String,
}

/// A committed registration: identity plus profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub id: RecordId,
    pub profile: StudentProfile,
}

impl Registration {
    pub fn new(id: RecordId, profile: StudentProfile) -> Self {
        Self { id, profile }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_ids_display_with_hash_prefix() {
        assert_eq!(RecordId(7).to_string(), "#7");
    }

    #[test]
    fn default_profile_is_fully_empty() {
        let profile = StudentProfile::default();
        assert!(profile.name.is_empty());
        assert!(profile.ethnicity.is_empty());
        assert_eq!(profile.grad_year, None);
        assert_eq!(profile.date_of_birth, None);
    }
}

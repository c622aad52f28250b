//! The form's working state: one editable text value per field.

use chrono::NaiveDate;

use crate::fields::Field;
use crate::record::{Registration, StudentProfile};

/// Date text format accepted by the form.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// In-progress form text, one value per field, no identity.
///
/// Every value is free text while being edited; typing is never rejected.
/// Dates only become typed values when the draft is converted to a profile.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Draft {
    values: [String; Field::COUNT],
}

impl Draft {
    /// Fresh blank draft, every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of one field.
    pub fn value(&self, field: Field) -> &str {
        &self.values[field as usize]
    }

    /// Replaces one field's text wholesale.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values[field as usize] = value.into();
    }

    /// Loads a committed record's profile for editing.
    pub fn from_record(record: &Registration) -> Self {
        Self::from_profile(&record.profile)
    }

    /// Renders a typed profile back into editable text.
    pub fn from_profile(profile: &StudentProfile) -> Self {
        let mut draft = Self::new();
        for field in Field::all() {
            draft.set_value(field, profile_text(profile, field));
        }
        draft
    }

    /// Converts the draft into a typed profile.
    ///
    /// Strings pass through untouched, empty included. Date text must be
    /// `YYYY-MM-DD`; anything else yields `None` rather than an error.
    pub fn to_profile(&self) -> StudentProfile {
        StudentProfile {
            name: self.value(Field::Name).to_owned(),
            email: self.value(Field::Email).to_owned(),
            phone: self.value(Field::Phone).to_owned(),
            address: self.value(Field::Address).to_owned(),
            city: self.value(Field::City).to_owned(),
            state: self.value(Field::State).to_owned(),
            zip: self.value(Field::Zip).to_owned(),
            degree: self.value(Field::Degree).to_owned(),
            major: self.value(Field::Major).to_owned(),
            grad_year: parse_date(self.value(Field::GradYear)),
            date_of_birth: parse_date(self.value(Field::DateOfBirth)),
            gender: self.value(Field::Gender).to_owned(),
            ethnicity: self.value(Field::Ethnicity).to_owned(),
        }
    }

    /// True when every field is empty.
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }
}

/// Formats one profile field as form text.
fn profile_text(profile: &StudentProfile, field: Field) -> String {
    match field {
        Field::Name => profile.name.clone(),
        Field::Email => profile.email.clone(),
        Field::Phone => profile.phone.clone(),
        Field::Address => profile.address.clone(),
        Field::City => profile.city.clone(),
        Field::State => profile.state.clone(),
        Field::Zip => profile.zip.clone(),
        Field::Degree => profile.degree.clone(),
        Field::Major => profile.major.clone(),
        Field::GradYear => format_date(profile.grad_year),
        Field::DateOfBirth => format_date(profile.date_of_birth),
        Field::Gender => profile.gender.clone(),
        Field::Ethnicity => profile.ethnicity.clone(),
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

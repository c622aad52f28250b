//! Field catalog: every form field, its label, and how it is edited.
//!
//! The descriptor table is what keeps the frontend generic: it walks
//! [`Field::all`], asks each field for its [`FieldDescriptor`], and renders
//! text, dropdown, and date fields through a single code path instead of
//! per-field widgets.

use strum::{EnumCount, EnumIter, FromRepr};

/// Options offered for the degree dropdown.
pub const DEGREE_OPTIONS: &[&str] = &[
    "Bachelor of Science",
    "Bachelor of Arts",
    "Master of Science",
    "Master of Arts",
];

/// Options offered for the gender dropdown.
pub const GENDER_OPTIONS: &[&str] = &["Male", "Female", "Non-Binary"];

/// Options offered for the ethnicity dropdown.
pub const ETHNICITY_OPTIONS: &[&str] = &[
    "Asian",
    "Black or African American",
    "Hispanic or Latino",
    "White",
    "Other",
];

/// Every editable field of a registration, in form order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumCount, EnumIter, FromRepr)]
pub enum Field {
    /// First field of the form, where the cursor starts.
    #[default]
    Name,
    Email,
    Phone,
    Address,
    City,
    State,
    Zip,
    Degree,
    Major,
    GradYear,
    DateOfBirth,
    Gender,
    Ethnicity,
}

/// How a field is edited and displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// One of a fixed set of options, or the empty non-choice.
    Dropdown(&'static [&'static str]),
    /// Calendar date entered as `YYYY-MM-DD` text.
    Date,
}

/// Label and edit behavior for one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub field: Field,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl Field {
    /// Number of form fields.
    pub const COUNT: usize = <Field as EnumCount>::COUNT;

    /// All fields in form order.
    pub fn all() -> impl Iterator<Item = Field> {
        <Self as strum::IntoEnumIterator>::iter()
    }

    /// The field after this one in form order, wrapping at the end.
    pub fn next(self) -> Field {
        Field::from_repr((self as usize + 1) % Field::COUNT).unwrap_or(self)
    }

    /// The field before this one in form order, wrapping at the start.
    pub fn prev(self) -> Field {
        Field::from_repr((self as usize + Field::COUNT - 1) % Field::COUNT).unwrap_or(self)
    }

    /// Returns the descriptor driving this field's rendering and editing.
    pub const fn descriptor(self) -> FieldDescriptor {
        let (label, kind) = match self {
            Field::Name => ("Name", FieldKind::Text),
            Field::Email => ("Email", FieldKind::Text),
            Field::Phone => ("Phone", FieldKind::Text),
            Field::Address => ("Address", FieldKind::Text),
            Field::City => ("City", FieldKind::Text),
            Field::State => ("State", FieldKind::Text),
            Field::Zip => ("Zip", FieldKind::Text),
            Field::Degree => ("Degree", FieldKind::Dropdown(DEGREE_OPTIONS)),
            Field::Major => ("Major", FieldKind::Text),
            Field::GradYear => ("Graduation Year", FieldKind::Date),
            Field::DateOfBirth => ("Date of Birth", FieldKind::Date),
            Field::Gender => ("Gender", FieldKind::Dropdown(GENDER_OPTIONS)),
            Field::Ethnicity => ("Ethnicity", FieldKind::Dropdown(ETHNICITY_OPTIONS)),
        };
        FieldDescriptor {
            field: self,
            label,
            kind,
        }
    }

    pub const fn label(self) -> &'static str {
        self.descriptor().label
    }

    pub const fn kind(self) -> FieldKind {
        self.descriptor().kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_cover_every_field_in_order() {
        let fields: Vec<Field> = Field::all().collect();
        assert_eq!(fields.len(), Field::COUNT);
        assert_eq!(fields.first(), Some(&Field::Name));
        assert_eq!(fields.last(), Some(&Field::Ethnicity));

        for field in Field::all() {
            let descriptor = field.descriptor();
            assert_eq!(descriptor.field, field);
            assert!(!descriptor.label.is_empty());
        }
    }

    #[test]
    fn dropdown_fields_offer_nonempty_options() {
        for field in Field::all() {
            if let FieldKind::Dropdown(options) = field.kind() {
                assert!(!options.is_empty(), "{field:?} has no options");
                assert!(options.iter().all(|option| !option.is_empty()));
            }
        }
    }

    #[test]
    fn field_order_wraps_in_both_directions() {
        assert_eq!(Field::Name.next(), Field::Email);
        assert_eq!(Field::Ethnicity.next(), Field::Name);
        assert_eq!(Field::Name.prev(), Field::Ethnicity);
        assert_eq!(Field::Email.prev(), Field::Name);

        let mut field = Field::Name;
        for _ in 0..Field::COUNT {
            field = field.next();
        }
        assert_eq!(field, Field::Name);
    }

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<&str> = Field::all().map(Field::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Field::COUNT);
    }
}

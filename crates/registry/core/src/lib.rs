//! Core domain for the rollcall registration manager.
//!
//! Everything non-presentational lives here:
//! - record types ([`RecordId`], [`StudentProfile`], [`Registration`])
//! - the in-memory [`RegistrationStore`], the single source of truth for
//!   the roster
//! - the [`FormSession`] state machine a form frontend drives
//! - the [`Field`] catalog of descriptors a generic renderer consumes
//!
//! The crate has no UI dependencies; frontends own a store and a session
//! and read both back out through their accessors.

pub mod draft;
pub mod fields;
pub mod form;
pub mod record;
pub mod store;

pub use draft::Draft;
pub use fields::{
    DEGREE_OPTIONS, ETHNICITY_OPTIONS, Field, FieldDescriptor, FieldKind, GENDER_OPTIONS,
};
pub use form::{FormMode, FormSession, SubmitOutcome};
pub use record::{RecordId, Registration, StudentProfile};
pub use store::{RegistrationStore, StoreError};

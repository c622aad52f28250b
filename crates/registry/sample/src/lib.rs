//! Random sample registrations for demos and seeded rosters.
//!
//! Dropdown-backed fields draw from the registry-core option catalogs, so a
//! generated profile is always something the form itself could have
//! submitted. Free-text fields come from fixed word catalogs; no network, no
//! locale data.

mod catalog;

use chrono::{Datelike, Local, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;

use registry_core::{DEGREE_OPTIONS, Draft, ETHNICITY_OPTIONS, GENDER_OPTIONS, StudentProfile};

/// Youngest sampled student, in years.
const MIN_AGE_YEARS: i32 = 17;
/// Oldest sampled student, in years.
const MAX_AGE_YEARS: i32 = 30;
/// Furthest sampled graduation, in years from now.
const MAX_YEARS_TO_GRADUATION: i32 = 4;

/// Generates a fully populated student profile.
///
/// Graduation lands on January 1st between one and
/// [`MAX_YEARS_TO_GRADUATION`] years out; the birth date puts the student
/// between [`MIN_AGE_YEARS`] and [`MAX_AGE_YEARS`] years old.
pub fn sample_profile<R: Rng + ?Sized>(rng: &mut R) -> StudentProfile {
    let first = pick(rng, catalog::FIRST_NAMES);
    let last = pick(rng, catalog::LAST_NAMES);
    let today = Local::now().date_naive();

    StudentProfile {
        name: format!("{first} {last}"),
        email: format!(
            "{}.{}@{}",
            first.to_lowercase(),
            last.to_lowercase(),
            pick(rng, catalog::EMAIL_DOMAINS)
        ),
        phone: format!(
            "({}) {}-{:04}",
            rng.gen_range(200..1000),
            rng.gen_range(200..1000),
            rng.gen_range(0..10000)
        ),
        address: format!("{} {}", rng.gen_range(1..10000), pick(rng, catalog::STREET_NAMES)),
        city: pick(rng, catalog::CITIES).to_owned(),
        state: pick(rng, catalog::STATES).to_owned(),
        zip: format!("{:05}", rng.gen_range(0..100000)),
        degree: pick(rng, DEGREE_OPTIONS).to_owned(),
        major: pick(rng, catalog::MAJORS).to_owned(),
        grad_year: NaiveDate::from_ymd_opt(
            today.year() + rng.gen_range(1..=MAX_YEARS_TO_GRADUATION),
            1,
            1,
        ),
        date_of_birth: NaiveDate::from_ymd_opt(
            today.year() - rng.gen_range(MIN_AGE_YEARS..=MAX_AGE_YEARS),
            rng.gen_range(1..=12),
            rng.gen_range(1..=28),
        ),
        gender: pick(rng, GENDER_OPTIONS).to_owned(),
        ethnicity: pick(rng, ETHNICITY_OPTIONS).to_owned(),
    }
}

/// Generates a draft ready to drop into a form session, as if every field
/// had been typed by hand.
pub fn sample_draft<R: Rng + ?Sized>(rng: &mut R) -> Draft {
    Draft::from_profile(&sample_profile(rng))
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &'a [&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or("")
}

//! Fixed word catalogs the sample generator draws from.

pub const FIRST_NAMES: &[&str] = &[
    "Alice", "Ben", "Carla", "David", "Elena", "Felix", "Grace", "Hassan", "Irene", "James",
    "Keiko", "Liam", "Maria", "Noah", "Priya", "Quinn", "Rosa", "Sam", "Tara", "Wei",
];

pub const LAST_NAMES: &[&str] = &[
    "Anderson", "Brooks", "Chen", "Diaz", "Evans", "Fischer", "Garcia", "Hoffman", "Ito",
    "Johnson", "Kim", "Lopez", "Murphy", "Nguyen", "Okafor", "Patel", "Reyes", "Silva",
    "Torres", "Williams",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "example.edu",
    "students.example.edu",
    "mail.example.com",
    "campus.example.org",
];

pub const STREET_NAMES: &[&str] = &[
    "Maple Street",
    "Oak Avenue",
    "Cedar Lane",
    "Elm Drive",
    "College Road",
    "University Boulevard",
    "Park Place",
    "Sunset Terrace",
];

pub const CITIES: &[&str] = &[
    "Springfield",
    "Riverton",
    "Fairview",
    "Lakewood",
    "Greenville",
    "Ashford",
    "Brookside",
    "Milltown",
];

pub const STATES: &[&str] = &[
    "CA", "NY", "TX", "WA", "IL", "MA", "OR", "CO", "GA", "MI", "NC", "PA",
];

pub const MAJORS: &[&str] = &[
    "Computer Science",
    "Biology",
    "Mechanical Engineering",
    "Economics",
    "Psychology",
    "English Literature",
    "Mathematics",
    "History",
    "Chemistry",
    "Political Science",
];

//! Enumerations offered by the advanced search selects: `(value, label)`

pub const DISTANCE_OPTIONS: &[(&str, &str)] = &[
    ("5", "Within 5 miles"),
    ("10", "Within 10 miles"),
    ("25", "Within 25 miles"),
    ("50", "Within 50 miles"),
    ("100", "Within 100 miles"),
];

pub const EXPERIENCE_OPTIONS: &[(&str, &str)] = &[
    ("0-1", "Less than 1 year"),
    ("1-3", "1 to 3 years"),
    ("3-5", "3 to 5 years"),
    ("5-10", "5 to 10 years"),
    ("10+", "More than 10 years"),
];

pub fn is_known_distance(value: &str) -> bool {
    DISTANCE_OPTIONS.iter().any(|(v, _)| *v == value)
}

pub fn is_known_experience(value: &str) -> bool {
    EXPERIENCE_OPTIONS.iter().any(|(v, _)| *v == value)
}

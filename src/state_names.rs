//! US state name mapping for form input
//! Maps uppercase full state names to their two-letter postal codes

use std::collections::HashMap;
use std::sync::LazyLock;

/// Full state name (uppercase) -> two-letter code
pub static STATE_CODES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert("ALABAMA", "AL");
    m.insert("ALASKA", "AK");
    m.insert("ARIZONA", "AZ");
    m.insert("ARKANSAS", "AR");
    m.insert("CALIFORNIA", "CA");
    m.insert("COLORADO", "CO");
    m.insert("CONNECTICUT", "CT");
    m.insert("DELAWARE", "DE");
    m.insert("FLORIDA", "FL");
    m.insert("GEORGIA", "GA");
    m.insert("HAWAII", "HI");
    m.insert("IDAHO", "ID");
    m.insert("ILLINOIS", "IL");
    m.insert("INDIANA", "IN");
    m.insert("IOWA", "IA");
    m.insert("KANSAS", "KS");
    m.insert("KENTUCKY", "KY");
    m.insert("LOUISIANA", "LA");
    m.insert("MAINE", "ME");
    m.insert("MARYLAND", "MD");
    m.insert("MASSACHUSETTS", "MA");
    m.insert("MICHIGAN", "MI");
    m.insert("MINNESOTA", "MN");
    m.insert("MISSISSIPPI", "MS");
    m.insert("MISSOURI", "MO");
    m.insert("MONTANA", "MT");
    m.insert("NEBRASKA", "NE");
    m.insert("NEVADA", "NV");
    m.insert("NEW HAMPSHIRE", "NH");
    m.insert("NEW JERSEY", "NJ");
    m.insert("NEW MEXICO", "NM");
    m.insert("NEW YORK", "NY");
    m.insert("NORTH CAROLINA", "NC");
    m.insert("NORTH DAKOTA", "ND");
    m.insert("OHIO", "OH");
    m.insert("OKLAHOMA", "OK");
    m.insert("OREGON", "OR");
    m.insert("PENNSYLVANIA", "PA");
    m.insert("RHODE ISLAND", "RI");
    m.insert("SOUTH CAROLINA", "SC");
    m.insert("SOUTH DAKOTA", "SD");
    m.insert("TENNESSEE", "TN");
    m.insert("TEXAS", "TX");
    m.insert("UTAH", "UT");
    m.insert("VERMONT", "VT");
    m.insert("VIRGINIA", "VA");
    m.insert("WASHINGTON", "WA");
    m.insert("WEST VIRGINIA", "WV");
    m.insert("WISCONSIN", "WI");
    m.insert("WYOMING", "WY");

    m
});

/// Trim and uppercase raw input, then swap a full state name for its code.
/// Anything not in the table passes through unchanged.
pub fn normalize(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    match STATE_CODES.get(upper.as_str()) {
        Some(code) => code.to_string(),
        None => upper,
    }
}

/// Syntactic check only: non-empty and exactly two characters.
pub fn is_valid(code: &str) -> bool {
    code.chars().count() == 2
}

/// Whether `code` is one of the table's two-letter codes
pub fn is_known_code(code: &str) -> bool {
    STATE_CODES.values().any(|c| *c == code)
}

/// Reverse lookup, e.g. "TX" -> "TEXAS"
pub fn state_name_for_code(code: &str) -> Option<&'static str> {
    STATE_CODES
        .iter()
        .find(|(_, c)| **c == code)
        .map(|(name, _)| *name)
}

//! Status badge styling.

const NEUTRAL: &str = "bg-gray-100 text-gray-800";

/// CSS classes for a kitten or cat status label.
///
/// Unknown labels get the neutral grey badge.
#[must_use]
pub fn status_badge_class(status: &str) -> &'static str {
    match status {
        "Available" | "Active" => "bg-green-100 text-green-800",
        "Reserved" => "bg-yellow-100 text-yellow-800",
        "Keeping" => "bg-blue-100 text-blue-800",
        "Retired" => "bg-purple-100 text-purple-800",
        "Guardian Home" => "bg-indigo-100 text-indigo-800",
        _ => NEUTRAL,
    }
}

use udon_sdk::Percent;

/// Picks the larger of two optional percents. Ties go to `b`.
pub fn larger_percent_value<'a>(
    a: Option<&'a Percent>,
    b: Option<&'a Percent>,
) -> Option<&'a Percent> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if a.greater_than(b) { a } else { b }),
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}

use super::domain::BadgeLevel;

/// Map a composite score to its badge tier. Band lower edges are inclusive.
pub fn classify(composite_score: f64) -> BadgeLevel {
    if composite_score >= 90.0 {
        BadgeLevel::High
    } else if composite_score >= 70.0 {
        BadgeLevel::Medium
    } else if composite_score >= 50.0 {
        BadgeLevel::Low
    } else {
        BadgeLevel::Risk
    }
}

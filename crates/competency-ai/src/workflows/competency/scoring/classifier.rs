use super::super::domain::PerformanceLevel;

/// Minimum overall score for each tier, highest first.
pub(crate) const PERFORMANCE_LADDER: [(u8, PerformanceLevel); 4] = [
    (90, PerformanceLevel::Exceptional),
    (80, PerformanceLevel::Excellent),
    (70, PerformanceLevel::Good),
    (60, PerformanceLevel::Satisfactory),
];

pub(crate) fn classify(overall: u8) -> PerformanceLevel {
    PERFORMANCE_LADDER
        .iter()
        .find(|(threshold, _)| overall >= *threshold)
        .map(|(_, level)| *level)
        .unwrap_or(PerformanceLevel::NeedsImprovement)
}

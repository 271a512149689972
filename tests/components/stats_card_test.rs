//! Tests for StatsCard component

use rstest::rstest;

use jobify_web::components::stats_card::IconVariant;
use jobify_web::types::{JobApplication, JobMode, JobStats, JobStatus};

/// Every variant maps to a stable, non-empty icon class
#[rstest]
fn icon_variant_class_mapping(
    #[values(
        IconVariant::Primary,
        IconVariant::Success,
        IconVariant::Warning,
        IconVariant::Danger,
        IconVariant::Neutral
    )]
    variant: IconVariant,
) {
    let class = variant.class();
    assert!(class.starts_with("stat-icon"));
    assert_eq!(class, variant.class());
}

fn job(status: JobStatus) -> JobApplication {
    JobApplication {
        id: "app-0001".to_string(),
        position: "Platform Engineer".to_string(),
        company: "Helios Cloud".to_string(),
        location: "Remote".to_string(),
        status,
        mode: JobMode::FullTime,
        applied: "2026-07-18".to_string(),
    }
}

/// The stats page shows one card per status bucket plus the total; the
/// values come straight from the tally.
#[test]
fn stats_cards_reflect_tally() {
    let jobs = vec![
        job(JobStatus::Pending),
        job(JobStatus::Pending),
        job(JobStatus::Interview),
        job(JobStatus::Declined),
    ];
    let stats = JobStats::tally(&jobs);
    let values = [
        stats.pending.to_string(),
        stats.interview.to_string(),
        stats.declined.to_string(),
        stats.total().to_string(),
    ];
    assert_eq!(values, ["2", "1", "1", "4"]);
}

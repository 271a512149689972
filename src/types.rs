//! Display types for job applications and dashboard aggregates

use serde::{Deserialize, Serialize};

/// Tracking status of a single application
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "interview")]
    Interview,
    #[serde(rename = "declined")]
    Declined,
}

impl Default for JobStatus {
    fn default() -> Self {
        JobStatus::Pending
    }
}

impl JobStatus {
    /// Get display name
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            JobStatus::Pending => "Pending",
            JobStatus::Interview => "Interview",
            JobStatus::Declined => "Declined",
        }
    }

    /// Form value for select options
    #[must_use]
    pub fn as_value(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Interview => "interview",
            JobStatus::Declined => "declined",
        }
    }

    /// Parse a form value back into a status
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(JobStatus::Pending),
            "interview" => Some(JobStatus::Interview),
            "declined" => Some(JobStatus::Declined),
            _ => None,
        }
    }
}

/// Employment mode of the position applied for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobMode {
    #[serde(rename = "full-time")]
    FullTime,
    #[serde(rename = "part-time")]
    PartTime,
    #[serde(rename = "internship")]
    Internship,
}

impl Default for JobMode {
    fn default() -> Self {
        JobMode::FullTime
    }
}

impl JobMode {
    /// Get display name
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            JobMode::FullTime => "Full-time",
            JobMode::PartTime => "Part-time",
            JobMode::Internship => "Internship",
        }
    }

    /// Form value for select options
    #[must_use]
    pub fn as_value(&self) -> &'static str {
        match self {
            JobMode::FullTime => "full-time",
            JobMode::PartTime => "part-time",
            JobMode::Internship => "internship",
        }
    }

    /// Parse a form value back into a mode
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "full-time" => Some(JobMode::FullTime),
            "part-time" => Some(JobMode::PartTime),
            "internship" => Some(JobMode::Internship),
            _ => None,
        }
    }
}

/// A tracked job application
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct JobApplication {
    pub id: String,
    pub position: String,
    pub company: String,
    pub location: String,
    pub status: JobStatus,
    pub mode: JobMode,
    /// Date the application was recorded, as a display string
    pub applied: String,
}

/// Draft values collected by the add-job form
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JobForm {
    pub position: String,
    pub company: String,
    pub location: String,
    pub status: JobStatus,
    pub mode: JobMode,
}

/// Aggregate counts shown on the stats page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStats {
    pub pending: u32,
    pub interview: u32,
    pub declined: u32,
}

impl JobStats {
    /// Count applications per status
    #[must_use]
    pub fn tally(jobs: &[JobApplication]) -> Self {
        let mut stats = JobStats::default();
        for job in jobs {
            match job.status {
                JobStatus::Pending => stats.pending += 1,
                JobStatus::Interview => stats.interview += 1,
                JobStatus::Declined => stats.declined += 1,
            }
        }
        stats
    }

    /// Total number of tracked applications
    #[must_use]
    pub fn total(&self) -> u32 {
        self.pending + self.interview + self.declined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str, status: JobStatus) -> JobApplication {
        JobApplication {
            id: id.to_string(),
            position: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            status,
            mode: JobMode::FullTime,
            applied: "2026-07-01".to_string(),
        }
    }

    #[test]
    fn tally_counts_per_status() {
        let jobs = vec![
            job("app-0001", JobStatus::Pending),
            job("app-0002", JobStatus::Interview),
            job("app-0003", JobStatus::Pending),
            job("app-0004", JobStatus::Declined),
        ];
        let stats = JobStats::tally(&jobs);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.interview, 1);
        assert_eq!(stats.declined, 1);
        assert_eq!(stats.total(), 4);
    }

    #[test]
    fn tally_of_empty_list_is_zero() {
        let stats = JobStats::tally(&[]);
        assert_eq!(stats, JobStats::default());
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn status_form_values_round_trip() {
        for status in [JobStatus::Pending, JobStatus::Interview, JobStatus::Declined] {
            assert_eq!(JobStatus::parse(status.as_value()), Some(status));
        }
        assert_eq!(JobStatus::parse("archived"), None);
    }

    #[test]
    fn mode_form_values_round_trip() {
        for mode in [JobMode::FullTime, JobMode::PartTime, JobMode::Internship] {
            assert_eq!(JobMode::parse(mode.as_value()), Some(mode));
        }
        assert_eq!(JobMode::parse("contract"), None);
    }
}

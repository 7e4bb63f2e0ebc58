//! The summary counters shown at the top of the skills dashboard.

use crate::{
    ingest::Snapshot,
    system::{
        config::AnalyzerConfig,
        skill_gap::compute_gap_statistics,
    },
};
use getset::Getters;
use serde::{Serialize, Deserialize};

#[derive(Clone, Debug, Default, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct DashboardCounters {
    /// Skills in the catalog
    total_skills: usize,
    /// Employees in the snapshot
    total_employees: usize,
    skills_with_gap: usize,
    employees_with_gap: usize,
    combined_metric: usize,
}

/// Compute the dashboard counters for a snapshot.
///
/// `total_skills` is always the whole catalog. Skipping archived records only
/// drops archived jobs and employees from the analysis, so an archived skill a
/// live job still requires can have a gap, and `skills_with_gap` never exceeds
/// `total_skills`. Archived employees are left out of `total_employees` when
/// they're skipped.
pub fn summarize(snapshot: &Snapshot, config: &AnalyzerConfig) -> DashboardCounters {
    let stats = compute_gap_statistics(snapshot.employees(), snapshot.jobs(), config);
    DashboardCounters {
        total_skills: snapshot.skills().len(),
        total_employees: snapshot.employees().iter()
            .filter(|e| !(*config.skip_archived() && e.is_archived()))
            .count(),
        skills_with_gap: stats.skills_with_gap().len(),
        employees_with_gap: stats.employees_with_gap().len(),
        combined_metric: *stats.combined_metric(),
    }
}

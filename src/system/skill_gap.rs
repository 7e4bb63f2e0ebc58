//! The skill gap analysis. Given everyone's jobs and acquired skills, figure
//! out which skills are short and who is short on them.
//!
//! A *gap* is a required skill whose mandated level is strictly above the
//! employee's acquired level for it (a skill the employee doesn't have on
//! record counts as level 0). Meeting a requirement exactly is not a gap.
//!
//! ```rust
//! use skillgap_core::{
//!     AcquiredSkill, Employee, EmployeeID, Job, JobID, RequiredSkill, SkillID,
//!     system::{
//!         config::AnalyzerConfig,
//!         skill_gap::compute_gap_statistics,
//!     },
//! };
//!
//! let jobs = vec![
//!     Job::builder().id(1).title("welder").required_skills(vec![RequiredSkill::new(1, 3)]).build().unwrap(),
//! ];
//! let employees = vec![
//!     Employee::builder().id(1).jobs(vec![JobID::new(1)]).skills(vec![AcquiredSkill::new(1, 2)]).build().unwrap(),
//! ];
//! let stats = compute_gap_statistics(&employees, &jobs, &AnalyzerConfig::default());
//! assert!(stats.skills_with_gap().contains(&SkillID::new(1)));
//! assert!(stats.employees_with_gap().contains(&EmployeeID::new(1)));
//! assert_eq!(stats.combined_metric(), &1);
//! ```

use crate::models::{
    employee::{self, AcquiredSkill, Employee, EmployeeID},
    job::{Job, RequiredSkill},
    level::Level,
    skill::SkillID,
};
use crate::system::{
    config::{AnalyzerConfig, CombinedMetric},
    required::required_levels_for_jobs,
};
use getset::Getters;
use serde::{Serialize, Deserialize};
use std::collections::BTreeSet;
use tracing::debug;

/// One unmet requirement for one employee.
#[derive(Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct SkillGap {
    skill: SkillID,
    /// The level the employee's jobs require
    required: Level,
    /// The level the employee holds (`Level::NONE` if not on record)
    acquired: Level,
}

impl SkillGap {
    /// How many levels short the employee is.
    pub fn deficit(&self) -> u8 {
        self.required.deficit_over(&self.acquired)
    }
}

/// The aggregate gap figures over a set of employees.
#[derive(Clone, Debug, Default, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct GapStatistics {
    /// Distinct skills at least one employee is short on
    skills_with_gap: BTreeSet<SkillID>,
    /// Distinct employees short on at least one skill
    employees_with_gap: BTreeSet<EmployeeID>,
    /// Every distinct (employee, skill) gap
    unmet_pairs: BTreeSet<(EmployeeID, SkillID)>,
    /// The headline number, see `CombinedMetric`
    combined_metric: usize,
}

/// Returns true if `required` is not met by the skills in `acquired`.
///
/// ```rust
/// use skillgap_core::{AcquiredSkill, RequiredSkill, system::skill_gap::has_unmet_requirement};
///
/// let acquired = vec![AcquiredSkill::new(1, 3)];
/// assert!(!has_unmet_requirement(&acquired, &RequiredSkill::new(1, 3)));
/// assert!(has_unmet_requirement(&acquired, &RequiredSkill::new(1, 4)));
/// assert!(has_unmet_requirement(&acquired, &RequiredSkill::new(2, 1)));
/// assert!(!has_unmet_requirement(&acquired, &RequiredSkill::new(2, 0)));
/// ```
pub fn has_unmet_requirement(acquired: &[AcquiredSkill], required: &RequiredSkill) -> bool {
    required.level() > &employee::acquired_level(acquired, required.skill())
}

/// List every unmet requirement of a single employee, measured against the
/// jobs they are currently assigned to. Jobs missing from `jobs` are skipped.
pub fn employee_gaps(employee: &Employee, jobs: &[Job], config: &AnalyzerConfig) -> Vec<SkillGap> {
    let jobs = usable_jobs(jobs, config);
    gaps_against(employee, &jobs, config)
}

/// Drop archived jobs if the config asks us to.
fn usable_jobs(jobs: &[Job], config: &AnalyzerConfig) -> Vec<Job> {
    jobs.iter()
        .filter(|job| !(*config.skip_archived() && job.is_archived()))
        .cloned()
        .collect()
}

fn gaps_against(employee: &Employee, jobs: &[Job], config: &AnalyzerConfig) -> Vec<SkillGap> {
    required_levels_for_jobs(employee.jobs(), jobs, config.conflicts()).into_iter()
        .filter(|req| has_unmet_requirement(employee.skills(), req))
        .map(|req| {
            SkillGap {
                skill: *req.skill(),
                required: *req.level(),
                acquired: employee.acquired_level(req.skill()),
            }
        })
        .collect()
}

/// Compute the gap statistics over all `employees`, measuring each one
/// against their assigned `jobs`.
///
/// This never fails. Dangling job or skill references just don't match
/// anything, so bad data can only ever make the numbers smaller.
pub fn compute_gap_statistics(employees: &[Employee], jobs: &[Job], config: &AnalyzerConfig) -> GapStatistics {
    let jobs = usable_jobs(jobs, config);
    let mut stats = GapStatistics::default();
    for employee in employees {
        if *config.skip_archived() && employee.is_archived() {
            continue;
        }
        for gap in gaps_against(employee, &jobs, config) {
            stats.skills_with_gap.insert(*gap.skill());
            stats.employees_with_gap.insert(*employee.id());
            stats.unmet_pairs.insert((*employee.id(), *gap.skill()));
        }
    }
    stats.combined_metric = match config.metric() {
        CombinedMetric::Product => stats.skills_with_gap.len() * stats.employees_with_gap.len(),
        CombinedMetric::DistinctPairs => stats.unmet_pairs.len(),
    };
    debug!(
        skills_with_gap = stats.skills_with_gap.len(),
        employees_with_gap = stats.employees_with_gap.len(),
        combined_metric = stats.combined_metric,
        "computed gap statistics"
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::job::JobID,
        system::config::LevelConflict,
        util::{self, test::*},
    };

    fn skill_set(ids: Vec<i64>) -> BTreeSet<SkillID> {
        ids.into_iter().map(SkillID::new).collect()
    }

    fn employee_set(ids: Vec<i64>) -> BTreeSet<EmployeeID> {
        ids.into_iter().map(EmployeeID::new).collect()
    }

    #[test]
    fn unmet_requirement_boundaries() {
        for acquired in 0..=4 {
            for required in 0..=4 {
                let acq = vec![AcquiredSkill::new(1, acquired)];
                let req = RequiredSkill::new(1, required);
                assert_eq!(has_unmet_requirement(&acq, &req), acquired < required, "acquired {} required {}", acquired, required);
            }
        }
        // not on record means level 0
        assert!(has_unmet_requirement(&[], &RequiredSkill::new(1, 1)));
        assert!(!has_unmet_requirement(&[], &RequiredSkill::new(1, 0)));
        // out of range is clamped, never panics
        assert!(!has_unmet_requirement(&[AcquiredSkill::new(1, 40)], &RequiredSkill::new(1, 9)));
        assert!(has_unmet_requirement(&[AcquiredSkill::new(1, -5)], &RequiredSkill::new(1, 1)));
    }

    #[test]
    fn single_gap() {
        let jobs = vec![make_job(1, "welder", vec![(1, 3)])];
        let employees = vec![make_employee(1, vec![1], vec![(1, 2)])];
        assert!(has_unmet_requirement(employees[0].skills(), &RequiredSkill::new(1, 3)));
        let stats = compute_gap_statistics(&employees, &jobs, &AnalyzerConfig::default());
        assert_eq!(stats.skills_with_gap(), &skill_set(vec![1]));
        assert_eq!(stats.employees_with_gap(), &employee_set(vec![1]));
        assert_eq!(stats.combined_metric(), &1);
    }

    #[test]
    fn gap_closed() {
        let jobs = vec![make_job(1, "welder", vec![(1, 3)])];
        let employees = vec![make_employee(1, vec![1], vec![(1, 3)])];
        assert!(!has_unmet_requirement(employees[0].skills(), &RequiredSkill::new(1, 3)));
        let stats = compute_gap_statistics(&employees, &jobs, &AnalyzerConfig::default());
        assert!(stats.skills_with_gap().is_empty());
        assert!(stats.employees_with_gap().is_empty());
        assert_eq!(stats.combined_metric(), &0);
    }

    #[test]
    fn two_jobs_no_skills() {
        let jobs = vec![
            make_job(1, "welder", vec![(1, 3)]),
            make_job(2, "fitter", vec![(2, 1)]),
        ];
        let employees = vec![make_employee(1, vec![1, 2], vec![])];
        let stats = compute_gap_statistics(&employees, &jobs, &AnalyzerConfig::default());
        assert_eq!(stats.skills_with_gap(), &skill_set(vec![1, 2]));
        assert_eq!(stats.employees_with_gap(), &employee_set(vec![1]));
        assert_eq!(stats.combined_metric(), &2);
    }

    #[test]
    fn product_vs_pairs() {
        // e1 is short on s1, e2 is short on s2. the product says 4, there
        // are only 2 actual gaps.
        let jobs = vec![
            make_job(1, "welder", vec![(1, 3)]),
            make_job(2, "fitter", vec![(2, 2)]),
        ];
        let employees = vec![
            make_employee(1, vec![1], vec![(1, 1)]),
            make_employee(2, vec![2], vec![(2, 1)]),
            make_employee(3, vec![], vec![]),
        ];
        let stats = compute_gap_statistics(&employees, &jobs, &AnalyzerConfig::default());
        assert_eq!(stats.combined_metric(), &4);
        assert_eq!(stats.unmet_pairs().len(), 2);

        let config = AnalyzerConfig::builder().metric(CombinedMetric::DistinctPairs).build().unwrap();
        let stats = compute_gap_statistics(&employees, &jobs, &config);
        assert_eq!(stats.combined_metric(), &2);
        assert!(stats.unmet_pairs().contains(&(EmployeeID::new(2), SkillID::new(2))));
    }

    #[test]
    fn conflicting_levels() {
        let jobs = vec![
            make_job(1, "welder", vec![(1, 3)]),
            make_job(2, "fitter", vec![(1, 1)]),
        ];
        let employees = vec![make_employee(1, vec![1, 2], vec![(1, 2)])];

        let stats = compute_gap_statistics(&employees, &jobs, &AnalyzerConfig::default());
        assert_eq!(stats.skills_with_gap(), &skill_set(vec![1]));

        let config = AnalyzerConfig::builder().conflicts(LevelConflict::LastWins).build().unwrap();
        let stats = compute_gap_statistics(&employees, &jobs, &config);
        assert!(stats.skills_with_gap().is_empty());
    }

    #[test]
    fn conflicting_levels_follow_catalog_order() {
        let jobs = vec![
            make_job(1, "welder", vec![(1, 3)]),
            make_job(2, "fitter", vec![(1, 1)]),
        ];
        // assigned fitter first, welder last
        let employees = vec![make_employee(1, vec![2, 1], vec![(1, 2)])];

        let config = AnalyzerConfig::builder().conflicts(LevelConflict::LastWins).build().unwrap();
        let stats = compute_gap_statistics(&employees, &jobs, &config);
        assert!(stats.skills_with_gap().is_empty());
        assert!(employee_gaps(&employees[0], &jobs, &config).is_empty());

        let stats = compute_gap_statistics(&employees, &jobs, &AnalyzerConfig::default());
        assert_eq!(stats.skills_with_gap(), &skill_set(vec![1]));
    }

    #[test]
    fn employee_gap_detail() {
        let jobs = vec![make_job(1, "welder", vec![(1, 4), (2, 2), (3, 1)])];
        let employee = make_employee(1, vec![1, 99], vec![(1, 1), (3, 1)]);
        let gaps = employee_gaps(&employee, &jobs, &AnalyzerConfig::default());
        assert_eq!(gaps.len(), 2);
        assert_eq!(gaps[0].skill(), &SkillID::new(1));
        assert_eq!(gaps[0].required(), &Level::new(4));
        assert_eq!(gaps[0].acquired(), &Level::new(1));
        assert_eq!(gaps[0].deficit(), 3);
        assert_eq!(gaps[1].skill(), &SkillID::new(2));
        assert_eq!(gaps[1].acquired(), &Level::NONE);
        assert_eq!(gaps[1].deficit(), 2);
    }

    #[test]
    fn permissive_on_bad_data() {
        let jobs = vec![make_job(1, "welder", vec![])];
        let employees = vec![
            // job 42 doesn't exist
            make_employee(1, vec![42], vec![(1, 2)]),
            // job with no requirements
            make_employee(2, vec![1], vec![]),
        ];
        let stats = compute_gap_statistics(&employees, &jobs, &AnalyzerConfig::default());
        assert_eq!(stats, GapStatistics::default());
        assert_eq!(compute_gap_statistics(&[], &[], &AnalyzerConfig::default()), GapStatistics::default());
    }

    #[test]
    fn archived() {
        let mut jobs = vec![
            make_job(1, "welder", vec![(1, 3)]),
            make_job(2, "fitter", vec![(2, 3)]),
        ];
        let mut employees = vec![
            make_employee(1, vec![1, 2], vec![]),
            make_employee(2, vec![1], vec![]),
        ];
        jobs[1].set_archived(Some(util::time::now()));
        employees[1].set_archived(Some(util::time::now()));

        let stats = compute_gap_statistics(&employees, &jobs, &AnalyzerConfig::default());
        assert_eq!(stats.skills_with_gap(), &skill_set(vec![1, 2]));
        assert_eq!(stats.employees_with_gap(), &employee_set(vec![1, 2]));

        let config = AnalyzerConfig::builder().skip_archived(true).build().unwrap();
        let stats = compute_gap_statistics(&employees, &jobs, &config);
        assert_eq!(stats.skills_with_gap(), &skill_set(vec![1]));
        assert_eq!(stats.employees_with_gap(), &employee_set(vec![1]));
        assert_eq!(stats.combined_metric(), &1);
    }

    #[test]
    fn bounded_and_idempotent() {
        let skills = make_skills(vec![1, 2, 3]);
        let jobs = vec![
            make_job(1, "welder", vec![(1, 3), (2, 2)]),
            make_job(2, "fitter", vec![(2, 4), (3, 1)]),
            make_job(3, "clerk", vec![]),
        ];
        let employees = vec![
            make_employee(1, vec![1], vec![(1, 3), (2, 1)]),
            make_employee(2, vec![1, 2], vec![(3, 1)]),
            make_employee(3, vec![3], vec![(1, 4)]),
            make_employee(4, vec![2], vec![(2, 4), (3, 2)]),
        ];
        let config = AnalyzerConfig::default();
        let stats = compute_gap_statistics(&employees, &jobs, &config);
        assert!(stats.skills_with_gap().len() <= skills.len());
        assert!(stats.employees_with_gap().len() <= employees.len());
        assert_eq!(stats.skills_with_gap(), &skill_set(vec![1, 2]));
        assert_eq!(stats.employees_with_gap(), &employee_set(vec![1, 2]));
        assert_eq!(stats.combined_metric(), &4);
        assert_eq!(compute_gap_statistics(&employees, &jobs, &config), stats);

        let untouched = make_job(1, "welder", vec![(1, 3), (2, 2)]);
        assert_eq!(jobs[0], untouched);
        assert!(employees[0].holds_job(&JobID::new(1)));
    }
}

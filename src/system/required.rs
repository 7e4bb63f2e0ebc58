//! Derives the skills an employee is required to hold from the jobs they are
//! currently assigned to.
//!
//! There are two flavors here. `required_skills_for_jobs` produces the list
//! skill-entry forms are pre-populated with: flattened, not deduplicated, and
//! with every level reset to zero ("not yet rated"). `required_levels_for_jobs`
//! produces the deduplicated list of requirements *with* their levels, which is
//! what gaps are measured against.

use crate::models::{
    job::{Job, JobID, RequiredSkill},
    level::Level,
    skill::{Skill, SkillID},
};
use crate::system::config::LevelConflict;
use getset::Getters;
use serde::{Serialize, Deserialize};
use std::collections::HashMap;
use tracing::trace;

/// A required skill as shown to an editor. The level is always
/// `Level::NONE` here: it is the employee's level that is being entered, not
/// the job's.
#[derive(Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct RequiredSkillView {
    skill: SkillID,
    /// The skill's code, if the skill is in the catalog we were given
    code: Option<String>,
    /// The skill's display name, if the skill is in the catalog we were given
    name: Option<String>,
    level: Level,
}

/// Grab the jobs in `jobs` whose ID is in `job_ids`, in catalog order. IDs
/// that point nowhere are skipped.
pub(crate) fn assigned_jobs<'a>(job_ids: &'a [JobID], jobs: &'a [Job]) -> impl Iterator<Item = &'a Job> + 'a {
    for id in job_ids {
        if !jobs.iter().any(|job| job.id() == id) {
            trace!(job = id.as_i64(), "assigned job missing from catalog, skipping");
        }
    }
    jobs.iter().filter(move |job| job_ids.contains(job.id()))
}

/// Project the required skills of the given jobs into editor views.
///
/// No deduplication happens: if two jobs both require a skill, it shows up
/// twice. Callers inserting into a form are expected to check membership.
///
/// ```rust
/// use skillgap_core::{
///     Job, JobID, Level, RequiredSkill, Skill,
///     system::required::required_skills_for_jobs,
/// };
///
/// let skills = vec![Skill::builder().id(1).code("WLD").name("Welding").build().unwrap()];
/// let jobs = vec![
///     Job::builder().id(10).title("welder").required_skills(vec![RequiredSkill::new(1, 3)]).build().unwrap(),
/// ];
/// let views = required_skills_for_jobs(&[JobID::new(10)], &jobs, &skills);
/// assert_eq!(views.len(), 1);
/// assert_eq!(views[0].code(), &Some("WLD".to_string()));
/// assert_eq!(views[0].level(), &Level::NONE);
///
/// assert!(required_skills_for_jobs(&[], &jobs, &skills).is_empty());
/// ```
pub fn required_skills_for_jobs(job_ids: &[JobID], jobs: &[Job], skills: &[Skill]) -> Vec<RequiredSkillView> {
    if job_ids.is_empty() {
        return vec![];
    }
    let catalog = skills.iter()
        .map(|skill| (*skill.id(), skill))
        .collect::<HashMap<_, _>>();
    assigned_jobs(job_ids, jobs)
        .flat_map(|job| job.required_skills().iter())
        .map(|req| {
            let skill = catalog.get(req.skill());
            RequiredSkillView {
                skill: *req.skill(),
                code: skill.map(|s| s.code().clone()),
                name: skill.map(|s| s.name().clone()),
                level: Level::NONE,
            }
        })
        .collect()
}

/// Collect the requirements of the given jobs, one entry per skill (in order
/// of first appearance), reconciling levels when several jobs require the
/// same skill.
pub fn required_levels_for_jobs(job_ids: &[JobID], jobs: &[Job], conflicts: &LevelConflict) -> Vec<RequiredSkill> {
    let mut reqs: Vec<RequiredSkill> = Vec::new();
    for req in assigned_jobs(job_ids, jobs).flat_map(|job| job.required_skills().iter()) {
        match reqs.iter_mut().find(|existing| existing.skill() == req.skill()) {
            Some(existing) => {
                let replace = match conflicts {
                    LevelConflict::Highest => req.level() > existing.level(),
                    LevelConflict::LastWins => true,
                };
                if replace {
                    *existing = req.clone();
                }
            }
            None => reqs.push(req.clone()),
        }
    }
    reqs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::*;

    fn ids(ids: Vec<i64>) -> Vec<JobID> {
        ids.into_iter().map(JobID::new).collect()
    }

    #[test]
    fn no_jobs_no_skills() {
        let jobs = vec![make_job(1, "welder", vec![(10, 3)])];
        let skills = make_skills(vec![10]);
        assert!(required_skills_for_jobs(&[], &jobs, &skills).is_empty());
        assert!(required_levels_for_jobs(&[], &jobs, &LevelConflict::Highest).is_empty());
    }

    #[test]
    fn views_reset_level_and_keep_duplicates() {
        let jobs = vec![
            make_job(1, "welder", vec![(10, 3), (11, 2)]),
            make_job(2, "fitter", vec![(10, 1), (12, 4)]),
            make_job(3, "clerk", vec![(13, 2)]),
        ];
        let skills = make_skills(vec![10, 11, 12, 13]);
        let views = required_skills_for_jobs(&ids(vec![2, 1]), &jobs, &skills);
        let skill_ids = views.iter().map(|v| v.skill().as_i64()).collect::<Vec<_>>();
        // catalog order, flattened, duplicates retained
        assert_eq!(skill_ids, vec![10, 11, 10, 12]);
        for view in &views {
            assert_eq!(view.level(), &Level::NONE);
        }
        assert_eq!(views[1].code(), &Some("S11".to_string()));
        assert_eq!(views[1].name(), &Some("skill 11".to_string()));
    }

    #[test]
    fn unknown_references() {
        let jobs = vec![make_job(1, "welder", vec![(10, 3), (77, 2)])];
        let skills = make_skills(vec![10]);
        // job 9 doesn't exist: skipped
        let views = required_skills_for_jobs(&ids(vec![9]), &jobs, &skills);
        assert!(views.is_empty());
        // skill 77 isn't in the catalog: still required, just unnamed
        let views = required_skills_for_jobs(&ids(vec![1, 9]), &jobs, &skills);
        assert_eq!(views.len(), 2);
        assert_eq!(views[1].skill(), &SkillID::new(77));
        assert_eq!(views[1].code(), &None);
        assert_eq!(views[1].name(), &None);
    }

    #[test]
    fn levels_reconcile() {
        let jobs = vec![
            make_job(1, "welder", vec![(10, 3), (11, 2)]),
            make_job(2, "fitter", vec![(10, 1), (12, 4)]),
        ];
        let highest = required_levels_for_jobs(&ids(vec![1, 2]), &jobs, &LevelConflict::Highest);
        assert_eq!(highest, vec![
            RequiredSkill::new(10, 3),
            RequiredSkill::new(11, 2),
            RequiredSkill::new(12, 4),
        ]);
        let last = required_levels_for_jobs(&ids(vec![1, 2]), &jobs, &LevelConflict::LastWins);
        assert_eq!(last, vec![
            RequiredSkill::new(10, 1),
            RequiredSkill::new(11, 2),
            RequiredSkill::new(12, 4),
        ]);
    }
}

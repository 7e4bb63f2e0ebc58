//! Sorts an employee's skills into "required by their current jobs" and
//! "additional" buckets, and keeps that sorting current while their job
//! assignment is being edited.
//!
//! The one rule that matters: nothing the employee already has on record is
//! ever dropped. When a job goes away, the skills it required fall out of the
//! required bucket into the additional bucket, levels intact.
//!
//! ```rust
//! use skillgap_core::{
//!     AcquiredSkill, Employee, Job, JobID, Level, RequiredSkill, SkillID,
//!     system::reclassify::SkillEditor,
//! };
//!
//! let jobs = vec![
//!     Job::builder().id(1).title("welder").required_skills(vec![RequiredSkill::new(1, 3)]).build().unwrap(),
//! ];
//! let employee = Employee::builder()
//!     .id(1)
//!     .jobs(vec![JobID::new(1)])
//!     .skills(vec![AcquiredSkill::new(1, 1)])
//!     .build().unwrap();
//!
//! let mut editor = SkillEditor::new(employee, &jobs, &[]);
//! assert_eq!(editor.buckets().required(), &vec![AcquiredSkill::new(1, 1)]);
//!
//! editor.unassign_job(&JobID::new(1));
//! assert!(editor.buckets().required().is_empty());
//! assert_eq!(editor.buckets().additional(), &vec![AcquiredSkill::new(1, 1)]);
//! assert_eq!(editor.buckets().level_of(&SkillID::new(1)), Some(Level::new(1)));
//! ```

use crate::models::{
    employee::{AcquiredSkill, Employee},
    job::{Job, JobID},
    level::Level,
    skill::{Skill, SkillID},
};
use crate::system::required::{required_skills_for_jobs, RequiredSkillView};
use getset::Getters;
use serde::{Serialize, Deserialize};

/// An employee's skills, split by whether their current jobs require them.
/// The two buckets never share a skill.
#[derive(Clone, Debug, Default, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct SkillBuckets {
    /// Skills the current jobs require, one per skill
    required: Vec<AcquiredSkill>,
    /// Skills on record that the current jobs don't require
    additional: Vec<AcquiredSkill>,
}

impl SkillBuckets {
    /// Whether `skill` is in either bucket.
    pub fn contains(&self, skill: &SkillID) -> bool {
        self.iter().any(|acq| acq.skill() == skill)
    }

    /// The level `skill` sits at in whichever bucket holds it.
    pub fn level_of(&self, skill: &SkillID) -> Option<Level> {
        self.iter()
            .find(|acq| acq.skill() == skill)
            .map(|acq| *acq.level())
    }

    /// Iterate both buckets, required first.
    pub fn iter(&self) -> impl Iterator<Item = &AcquiredSkill> {
        self.required.iter().chain(self.additional.iter())
    }
}

/// Split `existing` against a freshly derived required list.
///
/// Required skills keep the level already on record, or start at
/// `Level::NONE` if the employee doesn't have them yet. Everything on record
/// that isn't required lands in the additional bucket, in its original order.
pub fn reclassify(existing: &[AcquiredSkill], required: &[RequiredSkillView]) -> SkillBuckets {
    let mut buckets = SkillBuckets::default();
    for view in required {
        if buckets.required.iter().any(|acq| acq.skill() == view.skill()) {
            continue;
        }
        let level = existing.iter()
            .find(|acq| acq.skill() == view.skill())
            .map(|acq| *acq.level())
            .unwrap_or(Level::NONE);
        buckets.required.push(AcquiredSkill::new(*view.skill(), level));
    }
    for acq in existing {
        if buckets.contains(acq.skill()) {
            continue;
        }
        buckets.additional.push(acq.clone());
    }
    buckets
}

/// Holds the state of an employee's skill form while it's being edited, and
/// re-derives the buckets every time the job assignment or a level changes.
///
/// The editor tracks a *record*: the skills the employee came in with plus
/// any skill given a level or added during editing. Only the record survives
/// job changes; placeholders for newly required skills that nobody touched
/// disappear again when the job requiring them is removed.
#[derive(Clone, Debug, Getters)]
pub struct SkillEditor<'a> {
    employee: Employee,
    catalog_jobs: &'a [Job],
    catalog_skills: &'a [Skill],
    /// The job assignment being edited
    #[getset(get = "pub")]
    jobs: Vec<JobID>,
    /// Skills on record, with their levels
    #[getset(get = "pub")]
    record: Vec<AcquiredSkill>,
    /// What the current jobs require, with catalog codes and names
    #[getset(get = "pub")]
    required: Vec<RequiredSkillView>,
    /// The current split of skills
    #[getset(get = "pub")]
    buckets: SkillBuckets,
}

impl<'a> SkillEditor<'a> {
    /// Start editing `employee` against the given job and skill catalogs.
    pub fn new(employee: Employee, jobs: &'a [Job], skills: &'a [Skill]) -> Self {
        let mut editor = Self {
            jobs: employee.jobs().clone(),
            record: employee.skills().clone(),
            employee,
            catalog_jobs: jobs,
            catalog_skills: skills,
            required: vec![],
            buckets: SkillBuckets::default(),
        };
        editor.refresh();
        editor
    }

    fn refresh(&mut self) {
        self.required = required_skills_for_jobs(&self.jobs, self.catalog_jobs, self.catalog_skills);
        self.buckets = reclassify(&self.record, &self.required);
    }

    /// Assign a job. Assigning a job twice does nothing.
    pub fn assign_job(&mut self, job: JobID) {
        if !self.jobs.contains(&job) {
            self.jobs.push(job);
        }
        self.refresh();
    }

    /// Remove a job from the assignment.
    pub fn unassign_job(&mut self, job: &JobID) {
        self.jobs.retain(|id| id != job);
        self.refresh();
    }

    /// Replace the whole job assignment.
    pub fn set_jobs(&mut self, jobs: Vec<JobID>) {
        self.jobs = jobs;
        self.refresh();
    }

    /// Set the level of a skill, putting it on record if it wasn't already.
    pub fn set_level<L: Into<Level>>(&mut self, skill: SkillID, level: L) {
        let level = level.into();
        match self.record.iter_mut().find(|acq| acq.skill() == &skill) {
            Some(acq) => {
                acq.set_level(level);
            }
            None => self.record.push(AcquiredSkill::new(skill, level)),
        }
        self.refresh();
    }

    /// Add a skill the current jobs don't ask for. Returns `false` (and
    /// changes nothing) if the skill is already in either bucket.
    pub fn add_additional<L: Into<Level>>(&mut self, skill: SkillID, level: L) -> bool {
        if self.buckets.contains(&skill) {
            return false;
        }
        self.record.push(AcquiredSkill::new(skill, level));
        self.refresh();
        true
    }

    /// Finish editing, producing the employee with the edited job assignment
    /// and every skill currently shown in either bucket.
    pub fn into_employee(self) -> Employee {
        let SkillEditor { mut employee, jobs, buckets, .. } = self;
        let SkillBuckets { mut required, additional } = buckets;
        required.extend(additional);
        employee.set_jobs(jobs);
        employee.set_skills(required);
        employee
    }
}

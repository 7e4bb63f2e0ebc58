//! An employee is assigned to zero or more jobs and holds a record of the
//! skills they have acquired, each at some level.
//!
//! Nothing here checks that the job or skill IDs actually point at anything;
//! the employee is a consumer of the catalogs, not a validator of them.

use crate::models::{
    job::JobID,
    level::Level,
    skill::SkillID,
};
use getset::{Getters, Setters};
use serde::{Serialize, Deserialize};

/// A skill an employee holds, at a given level.
#[derive(Clone, Debug, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", set = "pub")]
pub struct AcquiredSkill {
    skill: SkillID,
    level: Level,
}

impl AcquiredSkill {
    pub fn new<S: Into<SkillID>, L: Into<Level>>(skill: S, level: L) -> Self {
        Self {
            skill: skill.into(),
            level: level.into(),
        }
    }
}

catalog_model! {
    /// The `Employee` model links a person to their jobs and skills.
    pub struct Employee {
        id: <<EmployeeID>>,
        /// The employee's full name.
        #[builder(default)]
        name: String,
        /// The jobs this employee is currently assigned to.
        #[builder(default)]
        jobs: Vec<JobID>,
        /// The skills this employee has on record.
        #[builder(default)]
        skills: Vec<AcquiredSkill>,
    }
    EmployeeBuilder
}

impl Employee {
    /// The level at which this employee holds `skill`. A skill that isn't on
    /// record counts as `Level::NONE`.
    pub fn acquired_level(&self, skill: &SkillID) -> Level {
        acquired_level(self.skills(), skill)
    }

    pub fn holds_job(&self, job: &JobID) -> bool {
        self.jobs().contains(job)
    }
}

/// Look up a skill's level in a list of acquired skills, defaulting to
/// `Level::NONE`.
pub(crate) fn acquired_level(acquired: &[AcquiredSkill], skill: &SkillID) -> Level {
    acquired.iter()
        .find(|acq| acq.skill() == skill)
        .map(|acq| *acq.level())
        .unwrap_or(Level::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::*;

    #[test]
    fn acquired_level() {
        let employee = make_employee(1, vec![7], vec![(10, 2), (11, 4)]);
        assert_eq!(employee.acquired_level(&SkillID::new(10)), Level::new(2));
        assert_eq!(employee.acquired_level(&SkillID::new(11)), Level::EXPERT);
        assert_eq!(employee.acquired_level(&SkillID::new(99)), Level::NONE);
        assert!(employee.holds_job(&JobID::new(7)));
        assert!(!employee.holds_job(&JobID::new(8)));
    }

    #[test]
    fn defaults() {
        let employee = Employee::builder().id(5).build().unwrap();
        assert_eq!(employee.name(), "");
        assert!(employee.jobs().is_empty());
        assert!(employee.skills().is_empty());
        assert!(!employee.is_archived());
    }
}

//! A job is a position employees are assigned to. Each job mandates a set of
//! skills at a minimum proficiency, which is what employees get measured
//! against.

use crate::models::{
    level::Level,
    skill::SkillID,
};
use getset::Getters;
use serde::{Serialize, Deserialize};

/// A skill a job mandates, with the minimum level needed to hold the job.
#[derive(Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct RequiredSkill {
    skill: SkillID,
    level: Level,
}

impl RequiredSkill {
    pub fn new<S: Into<SkillID>, L: Into<Level>>(skill: S, level: L) -> Self {
        Self {
            skill: skill.into(),
            level: level.into(),
        }
    }
}

catalog_model! {
    /// The `Job` model describes a position and the skills it requires.
    pub struct Job {
        id: <<JobID>>,
        /// The job's title
        title: String,
        /// What skills this job requires and at which level. Can be empty.
        #[builder(default)]
        required_skills: Vec<RequiredSkill>,
    }
    JobBuilder
}

impl Job {
    /// Returns the required level for a skill, if this job requires it.
    pub fn required_level(&self, skill: &SkillID) -> Option<Level> {
        self.required_skills().iter()
            .find(|req| req.skill() == skill)
            .map(|req| *req.level())
    }
}

//! Welcome to the skillgap core, the datastructures and algorithms that sit
//! behind a training-management dashboard's skill gap figures.
//!
//! The crate takes an already-fetched snapshot of employees (with their job
//! assignments and acquired skills) and jobs (with their required skills) and
//! derives from it:
//!
//! - which skills are unmet by at least one employee who needs them,
//! - which employees have at least one unmet required skill,
//! - a combined headline metric, and
//! - the list of skills an employee is *currently* required to hold, along
//!   with a reclassification of their existing skills into "required" and
//!   "additional" buckets whenever their job assignment changes.
//!
//! Everything here is a pure function of its inputs. Storage, fetching, and
//! rendering live somewhere else and we don't touch them here. See the
//! [system module](system/index.html) for the analysis entry points and the
//! [ingest module](ingest/index.html) for loading records from JSON.

/// A macro that standardizes including and exporting our catalog models.
macro_rules! load_models {
    (
        @pub use
        $( ($path:ident, $model:ident, $($extratypes:ident),*), )*
    ) => {
        pub use models::{
            $( $path::{$model, $($extratypes),*}, )*
        };
    };

    (
        @pub mod
        $( ($path:ident, $($_rest:tt)*), )*
    ) => {
        $(
            pub mod $path;
        )*
    };

    // entry point
    ($($load_type:tt)*) => {
        load_models! {
            @$($load_type)*
            // loaded in dependency order: jobs reference skills, employees
            // reference both.
            (skill, Skill, SkillID),
            (job, Job, JobID, RequiredSkill),
            (employee, Employee, EmployeeID, AcquiredSkill),
        }
    };
}

pub mod error;
mod util;
pub mod models;
pub mod system;
pub mod ingest;

load_models! { pub use }
pub use models::level::Level;

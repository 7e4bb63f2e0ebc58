//! The system module holds the analysis itself: deriving what an employee's
//! jobs require of them, measuring gaps against it, and keeping an
//! employee's skill buckets in sync while their jobs are edited.
//!
//! Everything in here is a pure function of its inputs (or, for the
//! [SkillEditor], of its own state). There are no caches and nothing is
//! persisted, so the way to get fresh numbers is simply to call again.
//!
//! [SkillEditor]: reclassify/struct.SkillEditor.html

pub mod config;
pub mod dashboard;
pub mod reclassify;
pub mod required;
pub mod skill_gap;

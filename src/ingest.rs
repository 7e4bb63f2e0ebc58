//! The ingestion boundary. Records come in from the platform's REST API as
//! JSON, and that JSON is not always consistent: French and English field
//! names, `LIBELLE_FONCTION` next to `LIBELLE FONCTION`, levels sent as
//! strings, job references sent as bare ids or as whole objects, lists wrapped
//! in a `data` envelope or not. All of that gets normalized here so the models
//! (and the analysis) only ever see one shape.
//!
//! Missing collections become empty, missing levels become `Level::NONE`, and
//! missing text becomes empty. Archive markers may be timestamps, `true` /
//! `false` flags, or `null`, under `archived`, `archived_at` or `deleted_at`;
//! ones we can't read leave the record live. What *does* fail is JSON that
//! isn't JSON, a top-level payload that isn't a list of records, or a record
//! without a usable integer id, and the error then names that record-level
//! cause.
//!
//! ```rust
//! use skillgap_core::{ingest, EmployeeID, JobID, Level, SkillID};
//!
//! let employees = ingest::parse_employees(r#"[
//!     {"id": 1, "nom": "Ada", "emplois": [{"id": 3}], "competences": [{"competence_id": 7, "niveau": "2"}]}
//! ]"#).unwrap();
//! assert_eq!(employees[0].id(), &EmployeeID::new(1));
//! assert_eq!(employees[0].name(), "Ada");
//! assert_eq!(employees[0].jobs(), &vec![JobID::new(3)]);
//! assert_eq!(employees[0].acquired_level(&SkillID::new(7)), Level::new(2));
//! ```

use crate::{
    error::{Error, Result},
    models::{
        employee::{AcquiredSkill, Employee},
        job::{Job, JobID, RequiredSkill},
        level::Level,
        skill::Skill,
    },
    util,
};
use chrono::{DateTime, Utc};
use getset::{Getters, MutGetters};
use serde::{Deserialize, Deserializer, Serialize, de::{DeserializeOwned, IgnoredAny}};
use serde_json::Value;
use tracing::{debug, trace};

/// A number that may have been sent as a JSON number, a float, or a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Loose {
    fn as_i64(&self) -> Option<i64> {
        match self {
            Loose::Int(val) => Some(*val),
            Loose::Float(val) if val.is_finite() => Some(val.round() as i64),
            Loose::Float(_) => None,
            Loose::Text(val) => val.trim().parse().ok(),
        }
    }
}

fn loose_id<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<i64, D::Error> {
    Loose::deserialize(deserializer)?
        .as_i64()
        .ok_or_else(|| serde::de::Error::custom("expected an integer id"))
}

fn loose_opt_id<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<i64>, D::Error> {
    Ok(Option::<Loose>::deserialize(deserializer)?.and_then(|x| x.as_i64()))
}

/// Treat `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
    where D: Deserializer<'de>,
          T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Pull the list of records out of a payload, which is either a bare list or
/// a `{"data": [...]}` envelope. Errors inside the records come back as-is.
fn parse_payload<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    let list = match serde_json::from_str::<Value>(json)? {
        Value::Array(list) => Value::Array(list),
        Value::Object(mut envelope) if envelope.contains_key("data") => {
            match envelope.remove("data") {
                Some(Value::Null) | None => return Ok(vec![]),
                Some(data) => data,
            }
        }
        _ => {
            let err: serde_json::Error = serde::de::Error::custom("expected a list of records or a `data` envelope");
            return Err(Error::Ingest(err));
        }
    };
    Ok(serde_json::from_value(list)?)
}

/// One archive marker: a timestamp, a plain flag, or something unreadable.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawArchive {
    Flag(bool),
    Stamp(String),
    Other(IgnoredAny),
}

impl RawArchive {
    fn resolve(&self) -> Option<DateTime<Utc>> {
        match self {
            RawArchive::Flag(true) => Some(util::time::default_time()),
            RawArchive::Flag(false) => None,
            RawArchive::Stamp(val) => {
                let parsed = util::time::parse_timestamp(val);
                if parsed.is_none() {
                    trace!(value = val.as_str(), "unreadable archive timestamp, treating record as live");
                }
                parsed
            }
            RawArchive::Other(_) => {
                trace!("archive marker is neither a flag nor a timestamp, treating record as live");
                None
            }
        }
    }
}

/// Every spelling of "this record is archived". A record may carry several;
/// a real timestamp beats a bare `true` flag.
#[derive(Default, Deserialize)]
struct RawArchived {
    #[serde(default)]
    archived: Option<RawArchive>,
    #[serde(default)]
    archived_at: Option<RawArchive>,
    #[serde(default)]
    deleted_at: Option<RawArchive>,
}

impl RawArchived {
    fn resolve(&self) -> Option<DateTime<Utc>> {
        let resolve = |marker: &Option<RawArchive>| marker.as_ref().and_then(|x| x.resolve());
        resolve(&self.archived_at)
            .or_else(|| resolve(&self.deleted_at))
            .or_else(|| resolve(&self.archived))
    }
}

/// The join-table bits some endpoints nest under `pivot`.
#[derive(Default, Deserialize)]
struct RawPivot {
    #[serde(default, deserialize_with = "loose_opt_id")]
    level: Option<i64>,
    #[serde(default, deserialize_with = "loose_opt_id")]
    niveau: Option<i64>,
    #[serde(default, deserialize_with = "loose_opt_id")]
    niveau_requis: Option<i64>,
}

impl RawPivot {
    fn level(&self) -> Option<i64> {
        self.level.or(self.niveau).or(self.niveau_requis)
    }
}

/// A skill reference with a level, as found in both `competences` and
/// `required_skills`.
#[derive(Deserialize)]
struct RawSkillRef {
    #[serde(default, deserialize_with = "loose_opt_id")]
    skill_id: Option<i64>,
    #[serde(default, deserialize_with = "loose_opt_id")]
    competence_id: Option<i64>,
    #[serde(default, deserialize_with = "loose_opt_id")]
    id: Option<i64>,
    #[serde(default, deserialize_with = "loose_opt_id")]
    level: Option<i64>,
    #[serde(default, deserialize_with = "loose_opt_id")]
    niveau: Option<i64>,
    #[serde(default, deserialize_with = "loose_opt_id")]
    niveau_requis: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pivot: RawPivot,
}

impl RawSkillRef {
    /// The referenced skill id and its level. An explicit `skill_id` wins
    /// over `id`, since `id` is sometimes the join row's own id.
    fn resolve(&self) -> Option<(i64, Level)> {
        let skill = self.skill_id.or(self.competence_id).or(self.id)?;
        let level = self.level
            .or(self.niveau)
            .or(self.niveau_requis)
            .or_else(|| self.pivot.level())
            .unwrap_or(0);
        Some((skill, Level::new(level)))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawJobRef {
    Id(Loose),
    Object {
        #[serde(default, deserialize_with = "loose_opt_id")]
        job_id: Option<i64>,
        #[serde(default, deserialize_with = "loose_opt_id")]
        emploi_id: Option<i64>,
        #[serde(default, deserialize_with = "loose_opt_id")]
        id: Option<i64>,
    },
}

impl RawJobRef {
    fn resolve(&self) -> Option<i64> {
        match self {
            RawJobRef::Id(id) => id.as_i64(),
            RawJobRef::Object { job_id, emploi_id, id } => job_id.or(*emploi_id).or(*id),
        }
    }
}

#[derive(Deserialize)]
struct RawSkill {
    #[serde(deserialize_with = "loose_id")]
    id: i64,
    #[serde(default, alias = "CODE", alias = "code_competence", deserialize_with = "null_as_default")]
    code: String,
    #[serde(default, alias = "libelle", alias = "LIBELLE", alias = "nom", deserialize_with = "null_as_default")]
    name: String,
    #[serde(flatten)]
    archived: RawArchived,
}

#[derive(Deserialize)]
struct RawJob {
    #[serde(deserialize_with = "loose_id")]
    id: i64,
    #[serde(
        default,
        alias = "libelle_fonction",
        alias = "LIBELLE_FONCTION",
        alias = "LIBELLE FONCTION",
        deserialize_with = "null_as_default"
    )]
    title: String,
    #[serde(default, alias = "competences_requises", deserialize_with = "null_as_default")]
    required_skills: Vec<RawSkillRef>,
    #[serde(flatten)]
    archived: RawArchived,
}

#[derive(Deserialize)]
struct RawEmployee {
    #[serde(deserialize_with = "loose_id")]
    id: i64,
    #[serde(default, alias = "nom", deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, alias = "emplois", deserialize_with = "null_as_default")]
    jobs: Vec<RawJobRef>,
    #[serde(default, alias = "competences", deserialize_with = "null_as_default")]
    skills: Vec<RawSkillRef>,
    #[serde(flatten)]
    archived: RawArchived,
}

fn into_skill(raw: RawSkill) -> Result<Skill> {
    let mut builder = Skill::builder()
        .id(raw.id)
        .code(raw.code)
        .name(raw.name);
    if let Some(archived) = raw.archived.resolve() {
        builder = builder.archived(archived);
    }
    builder.build().map_err(Error::BuilderFailed)
}

fn into_job(raw: RawJob) -> Result<Job> {
    let required = raw.required_skills.iter()
        .filter_map(|req| req.resolve())
        .map(|(skill, level)| RequiredSkill::new(skill, level))
        .collect::<Vec<_>>();
    let mut builder = Job::builder()
        .id(raw.id)
        .title(raw.title)
        .required_skills(required);
    if let Some(archived) = raw.archived.resolve() {
        builder = builder.archived(archived);
    }
    builder.build().map_err(Error::BuilderFailed)
}

fn into_employee(raw: RawEmployee) -> Result<Employee> {
    let jobs = raw.jobs.iter()
        .filter_map(|job| job.resolve())
        .map(JobID::new)
        .collect::<Vec<_>>();
    let skills = raw.skills.iter()
        .filter_map(|acq| acq.resolve())
        .map(|(skill, level)| AcquiredSkill::new(skill, level))
        .collect::<Vec<_>>();
    let mut builder = Employee::builder()
        .id(raw.id)
        .name(raw.name)
        .jobs(jobs)
        .skills(skills);
    if let Some(archived) = raw.archived.resolve() {
        builder = builder.archived(archived);
    }
    builder.build().map_err(Error::BuilderFailed)
}

/// Parse the skill catalog.
pub fn parse_skills(json: &str) -> Result<Vec<Skill>> {
    let skills = parse_payload::<RawSkill>(json)?
        .into_iter()
        .map(into_skill)
        .collect::<Result<Vec<_>>>()?;
    debug!(count = skills.len(), "ingested skills");
    Ok(skills)
}

/// Parse the job catalog, with each job's required skills.
pub fn parse_jobs(json: &str) -> Result<Vec<Job>> {
    let jobs = parse_payload::<RawJob>(json)?
        .into_iter()
        .map(into_job)
        .collect::<Result<Vec<_>>>()?;
    debug!(count = jobs.len(), "ingested jobs");
    Ok(jobs)
}

/// Parse employees, with their job assignments and acquired skills.
pub fn parse_employees(json: &str) -> Result<Vec<Employee>> {
    let employees = parse_payload::<RawEmployee>(json)?
        .into_iter()
        .map(into_employee)
        .collect::<Result<Vec<_>>>()?;
    debug!(count = employees.len(), "ingested employees");
    Ok(employees)
}

/// A read-only snapshot of everything the analysis needs, taken at one point
/// in time.
#[derive(Clone, Debug, Default, PartialEq, Getters, MutGetters, Serialize, Deserialize)]
#[getset(get = "pub", get_mut = "pub")]
pub struct Snapshot {
    skills: Vec<Skill>,
    jobs: Vec<Job>,
    employees: Vec<Employee>,
}

impl Snapshot {
    pub fn new(skills: Vec<Skill>, jobs: Vec<Job>, employees: Vec<Employee>) -> Self {
        Self { skills, jobs, employees }
    }

    /// Build a snapshot from the three JSON payloads.
    pub fn from_json(skills: &str, jobs: &str, employees: &str) -> Result<Self> {
        Ok(Self::new(parse_skills(skills)?, parse_jobs(jobs)?, parse_employees(employees)?))
    }

    /// A copy of this snapshot with every archived record left out.
    pub fn without_archived(&self) -> Self {
        Self {
            skills: self.skills.iter().filter(|x| !x.is_archived()).cloned().collect(),
            jobs: self.jobs.iter().filter(|x| !x.is_archived()).cloned().collect(),
            employees: self.employees.iter().filter(|x| !x.is_archived()).cloned().collect(),
        }
    }
}

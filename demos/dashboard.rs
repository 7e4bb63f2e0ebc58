use skillgap_core::{
    error::Result,
    ingest::Snapshot,
    system::{
        config::AnalyzerConfig,
        dashboard::{self, DashboardCounters},
        reclassify::SkillEditor,
        skill_gap,
    },
    EmployeeID, JobID,
};

const SKILLS: &str = r#"[
    {"id": 1, "code": "WLD", "name": "Welding"},
    {"id": 2, "code": "BLP", "name": "Reading blueprints"},
    {"id": 3, "code": "SAF", "name": "Site safety"}
]"#;

const JOBS: &str = r#"{"data": [
    {"id": 10, "LIBELLE_FONCTION": "Welder", "required_skills": [{"skill_id": 1, "level": 3}, {"skill_id": 3, "level": 2}]},
    {"id": 11, "LIBELLE FONCTION": "Foreman", "required_skills": [{"skill_id": 2, "level": 2}, {"skill_id": 3, "level": 4}]}
]}"#;

const EMPLOYEES: &str = r#"[
    {"id": 100, "nom": "Jerry", "emplois": [{"id": 10}], "competences": [{"competence_id": 1, "niveau": 2}, {"competence_id": 3, "niveau": 2}]},
    {"id": 101, "nom": "Larry", "emplois": [10, 11], "competences": [{"competence_id": 1, "niveau": 4}]},
    {"id": 102, "nom": "Mary", "emplois": [], "competences": []}
]"#;

/// Load a snapshot (normally fetched from the platform's API) and compute the
/// dashboard counters for it.
fn example() -> Result<(Snapshot, DashboardCounters)> {
    let snapshot = Snapshot::from_json(SKILLS, JOBS, EMPLOYEES)?;
    let counters = dashboard::summarize(&snapshot, &AnalyzerConfig::default());
    Ok((snapshot, counters))
}

fn main() -> Result<()> {
    let (snapshot, counters) = example()?;
    println!(
        "{} skills, {} with a gap; {} employees, {} with a gap; combined {}",
        counters.total_skills(),
        counters.skills_with_gap(),
        counters.total_employees(),
        counters.employees_with_gap(),
        counters.combined_metric(),
    );

    for employee in snapshot.employees() {
        for gap in skill_gap::employee_gaps(employee, snapshot.jobs(), &AnalyzerConfig::default()) {
            println!("  {} is {} level(s) short on skill {}", employee.name(), gap.deficit(), gap.skill());
        }
    }

    // Jerry moves from welding to running the site
    let jerry = snapshot.employees().iter()
        .find(|e| e.id() == &EmployeeID::new(100))
        .cloned();
    if let Some(jerry) = jerry {
        let mut editor = SkillEditor::new(jerry, snapshot.jobs(), snapshot.skills());
        editor.set_jobs(vec![JobID::new(11)]);
        for view in editor.required() {
            println!("  required: {}", view.name().as_deref().unwrap_or("?"));
        }
        for acq in editor.buckets().additional() {
            println!("  additional: skill {} at level {}", acq.skill(), acq.level());
        }
    }
    Ok(())
}

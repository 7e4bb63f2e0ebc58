//! A skill is an entry in the competency catalog. Jobs require skills and
//! employees acquire them, both by `SkillID`.

catalog_model! {
    /// The `Skill` model names a competency and gives it a short code.
    pub struct Skill {
        id: <<SkillID>>,
        /// Short unique code, ie "WLD-02"
        code: String,
        /// Display name
        name: String,
    }
    SkillBuilder
}

//! Skill Model

use serde::{Deserialize, Serialize};

/// One skill row of an employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub skill_name: String,
    pub experience_in_years: u32,
    /// beginner | intermediate | advanced
    pub proficiency: String,
}

impl Skill {
    pub fn new(
        skill_name: impl Into<String>,
        experience_in_years: u32,
        proficiency: impl Into<String>,
    ) -> Self {
        Self {
            skill_name: skill_name.into(),
            experience_in_years,
            proficiency: proficiency.into(),
        }
    }
}

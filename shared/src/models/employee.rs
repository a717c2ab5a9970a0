//! Employee Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::Skill;

/// Server-assigned employee identifier
pub type EmployeeId = i64;

/// How the employee prefers to be contacted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPreference {
    #[default]
    Email,
    Phone,
}

impl ContactPreference {
    /// Wire/form value of this preference
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for ContactPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown contact preference value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown contact preference: {0}")]
pub struct ParseContactPreferenceError(pub String);

impl FromStr for ContactPreference {
    type Err = ParseContactPreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            other => Err(ParseContactPreferenceError(other.to_string())),
        }
    }
}

/// Employee entity
///
/// ```json
/// {
///     "id": 1,
///     "fullName": "Mark Hastings",
///     "contactPreference": "email",
///     "email": "mark@pragimtech.com",
///     "phone": null,
///     "skills": [{ "skillName": "C#", "experienceInYears": 5, "proficiency": "beginner" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// `None` until the server persists the record
    pub id: Option<EmployeeId>,
    pub full_name: String,
    pub contact_preference: ContactPreference,
    pub email: String,
    pub phone: Option<String>,
    /// Display order only
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Employee {
    /// Whether the server has assigned an id yet
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            id: Some(7),
            full_name: "Mary".to_string(),
            contact_preference: ContactPreference::Phone,
            email: "mary@example.com".to_string(),
            phone: Some("555-0100".to_string()),
            skills: vec![Skill::new("Rust", 3, "advanced")],
        }
    }

    #[test]
    fn test_employee_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["fullName"], "Mary");
        assert_eq!(json["contactPreference"], "phone");
        assert_eq!(json["skills"][0]["skillName"], "Rust");
        assert_eq!(json["skills"][0]["experienceInYears"], 3);
    }

    #[test]
    fn test_employee_deserializes_null_id_and_phone() {
        let employee: Employee = serde_json::from_str(
            r#"{"id":null,"fullName":"Al","contactPreference":"email","email":"al@x.com","phone":null,"skills":[]}"#,
        )
        .unwrap();
        assert_eq!(employee.id, None);
        assert_eq!(employee.phone, None);
        assert!(!employee.is_persisted());
    }

    #[test]
    fn test_missing_skills_defaults_to_empty() {
        let employee: Employee = serde_json::from_str(
            r#"{"id":3,"fullName":"Al","contactPreference":"email","email":"al@x.com","phone":null}"#,
        )
        .unwrap();
        assert!(employee.skills.is_empty());
        assert!(employee.is_persisted());
    }

    #[test]
    fn test_contact_preference_parse() {
        assert_eq!("email".parse::<ContactPreference>(), Ok(ContactPreference::Email));
        assert_eq!("phone".parse::<ContactPreference>(), Ok(ContactPreference::Phone));
        assert!("fax".parse::<ContactPreference>().is_err());
        assert_eq!(ContactPreference::default(), ContactPreference::Email);
    }
}

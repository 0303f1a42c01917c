//! Employee records and the generated seed roster
//!
//! Field names serialize in camelCase; that is the on-disk layout under the
//! `employees` LocalStorage key.

use serde::{Deserialize, Serialize};

/// Number of records in the generated seed roster
pub const SEED_COUNT: u32 = 50;

const SEED_DEPARTMENTS: [&str; 4] = ["HR", "IT", "Design", "Analytics"];

/// Seniority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Position {
    #[default]
    Junior,
    Mid,
    Senior,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Junior, Position::Mid, Position::Senior];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Junior => "Junior",
            Position::Mid => "Mid",
            Position::Senior => "Senior",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "junior" => Some(Position::Junior),
            "mid" => Some(Position::Mid),
            "senior" => Some(Position::Senior),
            _ => None,
        }
    }

    /// Translation key for the option label
    pub fn label_key(&self) -> &'static str {
        match self {
            Position::Junior => "positions.junior",
            Position::Mid => "positions.mid",
            Position::Senior => "positions.senior",
        }
    }
}

/// A stored employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_employment: String,
    pub date_of_birth: String,
    pub phone: String,
    pub email: String,
    pub department: String,
    pub position: Position,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Merge the set fields of `patch`; unset fields stay as they are
    pub fn apply(&mut self, patch: &EmployeePatch) {
        let EmployeePatch {
            first_name,
            last_name,
            date_of_employment,
            date_of_birth,
            phone,
            email,
            department,
            position,
        } = patch;

        if let Some(v) = first_name {
            self.first_name.clone_from(v);
        }
        if let Some(v) = last_name {
            self.last_name.clone_from(v);
        }
        if let Some(v) = date_of_employment {
            self.date_of_employment.clone_from(v);
        }
        if let Some(v) = date_of_birth {
            self.date_of_birth.clone_from(v);
        }
        if let Some(v) = phone {
            self.phone.clone_from(v);
        }
        if let Some(v) = email {
            self.email.clone_from(v);
        }
        if let Some(v) = department {
            self.department.clone_from(v);
        }
        if let Some(v) = position {
            self.position = *v;
        }
    }
}

/// A record about to be added. `id: None` lets the store assign one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    #[serde(default)]
    pub id: Option<u32>,
    pub first_name: String,
    pub last_name: String,
    pub date_of_employment: String,
    pub date_of_birth: String,
    pub phone: String,
    pub email: String,
    pub department: String,
    pub position: Position,
}

impl EmployeeDraft {
    pub fn into_employee(self, id: u32) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_employment: self.date_of_employment,
            date_of_birth: self.date_of_birth,
            phone: self.phone,
            email: self.email,
            department: self.department,
            position: self.position,
        }
    }
}

/// Partial update; `None` means "leave as is"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_employment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl From<EmployeeDraft> for EmployeePatch {
    /// Edit form submits every field; the draft id is ignored
    fn from(draft: EmployeeDraft) -> Self {
        Self {
            first_name: Some(draft.first_name),
            last_name: Some(draft.last_name),
            date_of_employment: Some(draft.date_of_employment),
            date_of_birth: Some(draft.date_of_birth),
            phone: Some(draft.phone),
            email: Some(draft.email),
            department: Some(draft.department),
            position: Some(draft.position),
        }
    }
}

/// Deterministic demo roster used when nothing usable is stored
pub fn seed_employees() -> Vec<Employee> {
    (0..SEED_COUNT)
        .map(|i| {
            let n = i + 1;
            Employee {
                id: n,
                first_name: format!("Name{n}"),
                last_name: format!("Surname{n}"),
                date_of_employment: format!("202{}-0{}-15", i % 4, (i % 9) + 1),
                date_of_birth: "1998-12-21".to_string(),
                phone: "+90 532 000 00 00".to_string(),
                email: format!("user{n}@example.com"),
                department: SEED_DEPARTMENTS[(i % 4) as usize].to_string(),
                position: Position::ALL[(i % 3) as usize],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_deterministic() {
        let seed = seed_employees();
        assert_eq!(seed.len(), SEED_COUNT as usize);
        assert_eq!(seed, seed_employees());

        let ids: Vec<u32> = seed.iter().map(|e| e.id).collect();
        assert_eq!(ids, (1..=50).collect::<Vec<_>>());

        // i = 9: year 2021, month (9 % 9) + 1 = 1, dept IT, position Junior
        let tenth = &seed[9];
        assert_eq!(tenth.first_name, "Name10");
        assert_eq!(tenth.date_of_employment, "2021-01-15");
        assert_eq!(tenth.department, "IT");
        assert_eq!(tenth.position, Position::Junior);
        assert_eq!(tenth.email, "user10@example.com");
    }

    #[test]
    fn test_camel_case_layout() {
        let json = serde_json::to_value(&seed_employees()[0]).unwrap();
        assert_eq!(json["firstName"], "Name1");
        assert_eq!(json["dateOfEmployment"], "2020-01-15");
        assert_eq!(json["position"], "Junior");
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn test_apply_patch_touches_only_set_fields() {
        let mut employee = seed_employees().remove(0);
        let before = employee.clone();

        employee.apply(&EmployeePatch {
            department: Some("Sales".into()),
            position: Some(Position::Senior),
            ..Default::default()
        });

        assert_eq!(employee.department, "Sales");
        assert_eq!(employee.position, Position::Senior);
        assert_eq!(employee.first_name, before.first_name);
        assert_eq!(employee.phone, before.phone);
        assert_eq!(employee.id, before.id);
    }

    #[test]
    fn test_patch_from_json_partial() {
        let patch: EmployeePatch = serde_json::from_str(r#"{"department":"IT"}"#).unwrap();
        assert_eq!(patch.department.as_deref(), Some("IT"));
        assert!(patch.first_name.is_none());
        assert_ne!(patch, EmployeePatch::default());
    }

    #[test]
    fn test_position_parse() {
        assert_eq!(Position::from_str("senior"), Some(Position::Senior));
        assert_eq!(Position::from_str(" Mid "), Some(Position::Mid));
        assert_eq!(Position::from_str("Lead"), None);
        for p in Position::ALL {
            assert_eq!(Position::from_str(p.as_str()), Some(p));
        }
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A saved project shown in the projects list.
///
/// Projects only exist as seed data; selecting one opens the editor without
/// loading anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDate,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>, created_at: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_at,
        }
    }

    /// Creation date as shown in the list (`YYYY-MM-DD`).
    pub fn created_label(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }
}

/// The fixed set of projects every session starts with.
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project::new("1", "Мой первый проект", seed_date(2024, 1, 15)),
        Project::new("2", "Видео презентация", seed_date(2024, 1, 10)),
    ]
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

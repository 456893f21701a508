use chrono::NaiveDateTime;
use serde::Serialize;

/// Roster entry. The report core only reads `id`; the other fields belong
/// to the roster and are kept for the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub admin: bool,   // ⇔ employees.admin_flag (1 = admin, 0 = general)
    pub deleted: bool, // ⇔ employees.delete_flag (1 = deleted, 0 = active)
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Employee {
    pub fn new(id: i64, code: impl Into<String>, name: impl Into<String>, admin: bool) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            admin,
            deleted: false,
            created_at: None,
            updated_at: None,
        }
    }

    /// Does this employee own `employee_id`'s records?
    pub fn owns(&self, employee_id: i64) -> bool {
        self.id == employee_id
    }

    pub fn role_str(&self) -> &'static str {
        if self.admin { "admin" } else { "general" }
    }
}

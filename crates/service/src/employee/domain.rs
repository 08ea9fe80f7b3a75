use serde::{Deserialize, Deserializer, Serialize};

/// Persisted employee as returned to callers.
pub type Employee = models::employee::Model;

/// Request body for create and update. Absent or `null` fields deserialize
/// as empty strings; any `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeInput {
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

impl EmployeeInput {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { first_name: first_name.into(), last_name: last_name.into(), email: email.into() }
    }

    /// Copy non-empty fields onto `target`. An empty field keeps the stored
    /// value, so a field can never be cleared through an update.
    pub fn apply_to(self, target: &mut Employee) {
        if !self.email.is_empty() { target.email = self.email; }
        if !self.first_name.is_empty() { target.first_name = self.first_name; }
        if !self.last_name.is_empty() { target.last_name = self.last_name; }
    }
}

use serde::{Deserialize, Serialize};

/// Profile fields of the signed-in user. Every field defaults to `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub zip_code: String,
    pub date_of_birth: String,
}

impl UserProfile {
    /// "First Last", trimmed when the last name is empty.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

use super::*;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Activity {
    pub id: i32,
    pub email: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Body of POST/PATCH /activity-groups. Absent and `null` fields both read
/// back as empty strings, so validation treats them alike.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityPayload {
    pub title: Option<String>,
    pub email: Option<String>,
}

impl ActivityPayload {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }
}

impl Activity {
    /// Merge a PATCH payload: `title` is copied unconditionally, `email`
    /// only when the incoming value is non-empty.
    pub fn apply_update(&mut self, payload: &ActivityPayload) {
        self.title = payload.title().to_string();
        let email = payload.email();
        if !email.is_empty() {
            self.email = email.to_string();
        }
    }
}

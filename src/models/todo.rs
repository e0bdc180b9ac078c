use super::*;

/// Stored value of the active flag. Anything else means inactive.
pub const ACTIVE_FLAG: &str = "1";
/// Priority forced onto every newly created todo.
pub const DEFAULT_PRIORITY: &str = "very-high";

/// Internal row shape. `is_active` is kept as the two-valued string flag the
/// storage schema uses; outward-facing shapes project it to a boolean.
#[derive(Debug, Clone, FromRow)]
pub struct Todo {
    pub id: i32,
    pub activity_group_id: i32,
    pub title: String,
    pub is_active: String,
    pub priority: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Body of POST /todo-items. Client-supplied `is_active`/`priority` are
/// intentionally not modeled here: creation always forces the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTodoPayload {
    pub activity_group_id: Option<i32>,
    pub title: Option<String>,
}

impl NewTodoPayload {
    pub fn activity_group_id(&self) -> i32 {
        self.activity_group_id.unwrap_or(0)
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

/// Body of PATCH /todo-items. No field is required; `is_active` arrives in
/// its raw string form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub activity_group_id: Option<i32>,
    pub is_active: Option<String>,
    pub priority: Option<String>,
}

impl Todo {
    pub fn is_active_bool(&self) -> bool {
        self.is_active == ACTIVE_FLAG
    }

    /// Merge a PATCH payload: a field overwrites the stored value only when
    /// supplied non-empty (non-zero for `activity_group_id`).
    pub fn apply_patch(&mut self, patch: &TodoPatch) {
        if let Some(title) = patch.title.as_deref().filter(|t| !t.is_empty()) {
            self.title = title.to_string();
        }
        if let Some(id) = patch.activity_group_id.filter(|id| *id != 0) {
            self.activity_group_id = id;
        }
        if let Some(flag) = patch.is_active.as_deref().filter(|f| !f.is_empty()) {
            self.is_active = flag.to_string();
        }
        if let Some(priority) = patch.priority.as_deref().filter(|p| !p.is_empty()) {
            self.priority = priority.to_string();
        }
    }
}

/// Shape returned by list, get and update: `activity_group_id` as a string,
/// `is_active` as a boolean.
#[derive(Debug, Clone, Serialize)]
pub struct TodoView {
    pub id: i32,
    pub activity_group_id: String,
    pub title: String,
    pub is_active: bool,
    pub priority: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Todo> for TodoView {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            activity_group_id: todo.activity_group_id.to_string(),
            title: todo.title.clone(),
            is_active: todo.is_active_bool(),
            priority: todo.priority.clone(),
            created_at: todo.created_at,
            updated_at: todo.updated_at,
            deleted_at: todo.deleted_at,
        }
    }
}

/// Shape returned by create: same boolean projection, but
/// `activity_group_id` stays an integer.
#[derive(Debug, Clone, Serialize)]
pub struct TodoCreated {
    pub id: i32,
    pub activity_group_id: i32,
    pub title: String,
    pub is_active: bool,
    pub priority: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Todo> for TodoCreated {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            activity_group_id: todo.activity_group_id,
            title: todo.title.clone(),
            is_active: todo.is_active_bool(),
            priority: todo.priority.clone(),
            created_at: todo.created_at,
            updated_at: todo.updated_at,
            deleted_at: todo.deleted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Todo {
        let now = Utc::now();
        Todo {
            id: 10,
            activity_group_id: 5,
            title: "water plants".to_string(),
            is_active: ACTIVE_FLAG.to_string(),
            priority: DEFAULT_PRIORITY.to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn active_flag_projects_to_bool() {
        let mut todo = sample();
        assert!(todo.is_active_bool());

        todo.is_active = "0".to_string();
        assert!(!todo.is_active_bool());

        todo.is_active = String::new();
        assert!(!todo.is_active_bool());
    }

    #[test]
    fn view_renders_activity_group_id_as_string() {
        let view = TodoView::from(&sample());
        assert_eq!(view.activity_group_id, "5");
        assert!(view.is_active);
    }

    #[test]
    fn created_shape_keeps_integer_activity_group_id() {
        let created = TodoCreated::from(&sample());
        assert_eq!(created.activity_group_id, 5);
        assert!(created.is_active);
    }

    #[test]
    fn create_payload_discards_client_active_and_priority() {
        // Extra keys deserialize fine but carry no data; creation always
        // uses the forced defaults.
        let payload: NewTodoPayload = serde_json::from_str(
            r#"{"activity_group_id": 1, "title": "a", "is_active": false, "priority": "low"}"#,
        )
        .unwrap();
        assert_eq!(payload.activity_group_id(), 1);
        assert_eq!(payload.title(), "a");
        assert_eq!(ACTIVE_FLAG, "1");
        assert_eq!(DEFAULT_PRIORITY, "very-high");
    }

    #[test]
    fn patch_with_only_title_leaves_other_fields() {
        let mut todo = sample();
        todo.apply_patch(&TodoPatch {
            title: Some("x".to_string()),
            ..Default::default()
        });
        assert_eq!(todo.title, "x");
        assert_eq!(todo.activity_group_id, 5);
        assert_eq!(todo.is_active, ACTIVE_FLAG);
        assert_eq!(todo.priority, DEFAULT_PRIORITY);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut todo = sample();
        todo.apply_patch(&TodoPatch::default());
        assert_eq!(todo.title, "water plants");
        assert_eq!(todo.activity_group_id, 5);
    }

    #[test]
    fn patch_ignores_empty_and_zero_values() {
        let mut todo = sample();
        todo.apply_patch(&TodoPatch {
            title: Some(String::new()),
            activity_group_id: Some(0),
            is_active: Some(String::new()),
            priority: Some(String::new()),
        });
        assert_eq!(todo.title, "water plants");
        assert_eq!(todo.activity_group_id, 5);
    }

    #[test]
    fn patch_overwrites_supplied_fields() {
        let mut todo = sample();
        todo.apply_patch(&TodoPatch {
            title: None,
            activity_group_id: Some(7),
            is_active: Some("0".to_string()),
            priority: Some("low".to_string()),
        });
        assert_eq!(todo.activity_group_id, 7);
        assert_eq!(todo.is_active, "0");
        assert_eq!(todo.priority, "low");
        assert_eq!(todo.title, "water plants");
    }
}

//! Per-entity field validation. Validators collect every failing field in
//! declaration order; the client-facing message reports only the head of the
//! list as `"<field> cannot be null"`.

use crate::models::{ActivityPayload, NewTodoPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire-facing snake_case field name.
    pub failed_field: &'static str,
    /// Validation rule name, e.g. `"required"`.
    pub tag: &'static str,
    /// Optional constraint parameter for rules that carry one.
    pub param: Option<String>,
}

impl FieldError {
    fn required(field: &'static str) -> Self {
        Self {
            failed_field: field,
            tag: "required",
            param: None,
        }
    }
}

pub fn validate_activity(payload: &ActivityPayload) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if payload.title().is_empty() {
        errors.push(FieldError::required("title"));
    }
    errors
}

pub fn validate_new_todo(payload: &NewTodoPayload) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if payload.activity_group_id() == 0 {
        errors.push(FieldError::required("activity_group_id"));
    }
    if payload.title().is_empty() {
        errors.push(FieldError::required("title"));
    }
    errors
}

/// Message for the first failing field, if any.
pub fn first_error_message(errors: &[FieldError]) -> Option<String> {
    errors
        .first()
        .map(|error| format!("{} cannot be null", error.failed_field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_requires_title() {
        let errors = validate_activity(&ActivityPayload::default());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].failed_field, "title");
        assert_eq!(errors[0].tag, "required");
        assert_eq!(
            first_error_message(&errors).as_deref(),
            Some("title cannot be null")
        );
    }

    #[test]
    fn activity_with_title_passes() {
        let payload = ActivityPayload {
            title: Some("groceries".to_string()),
            email: None,
        };
        assert!(validate_activity(&payload).is_empty());
        assert_eq!(first_error_message(&[]), None);
    }

    #[test]
    fn todo_requires_activity_group_id_and_title() {
        let errors = validate_new_todo(&NewTodoPayload::default());
        let fields: Vec<_> = errors.iter().map(|e| e.failed_field).collect();
        assert_eq!(fields, vec!["activity_group_id", "title"]);
    }

    #[test]
    fn todo_missing_activity_group_id_is_reported_first() {
        let payload = NewTodoPayload {
            activity_group_id: None,
            title: Some("a".to_string()),
        };
        let errors = validate_new_todo(&payload);
        assert_eq!(
            first_error_message(&errors).as_deref(),
            Some("activity_group_id cannot be null")
        );
    }

    #[test]
    fn todo_zero_activity_group_id_counts_as_missing() {
        let payload = NewTodoPayload {
            activity_group_id: Some(0),
            title: Some("a".to_string()),
        };
        let errors = validate_new_todo(&payload);
        assert_eq!(errors[0].failed_field, "activity_group_id");
    }

    #[test]
    fn todo_with_both_fields_passes() {
        let payload = NewTodoPayload {
            activity_group_id: Some(1),
            title: Some("a".to_string()),
        };
        assert!(validate_new_todo(&payload).is_empty());
    }
}

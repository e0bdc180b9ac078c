use super::*;

/// Uniform `{status, message, data}` wrapper applied to every response.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: String,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "Success".to_string(),
            message: "Success".to_string(),
            data,
        }
    }
}

impl Envelope<serde_json::Value> {
    /// Success with an empty `{}` data object (delete responses).
    pub fn empty() -> Self {
        Self::success(serde_json::json!({}))
    }

    /// Failure envelope; `data` is always an empty object.
    pub fn failure(status: &str, message: impl Into<String>) -> Self {
        Self {
            status: status.to_string(),
            message: message.into(),
            data: serde_json::json!({}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_shape() {
        let envelope = Envelope::success(json!({"id": 1}));
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"status": "Success", "message": "Success", "data": {"id": 1}})
        );
    }

    #[test]
    fn failure_envelope_has_empty_data() {
        let envelope = Envelope::failure("Not Found", "Activity with ID 99 Not Found");
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "status": "Not Found",
                "message": "Activity with ID 99 Not Found",
                "data": {}
            })
        );
    }
}

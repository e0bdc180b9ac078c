pub mod error;

pub use error::ApiError;

use crate::services;

#[derive(Clone)]
pub struct AppState {
    pub activity_service: services::ActivityService,
    pub todo_service: services::TodoService,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub mod activity;
pub mod response;
pub mod todo;

pub use activity::*;
pub use response::*;
pub use todo::*;

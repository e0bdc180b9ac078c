use chrono::Utc;
use sqlx::PgPool;

use crate::models::Todo;

/// CRUD over todo-item rows, including the cascade used when an activity
/// group is deleted. Same soft-delete discipline as [`ActivityService`].
///
/// [`ActivityService`]: crate::services::ActivityService
#[derive(Clone)]
pub struct TodoService {
    db: PgPool,
}

impl TodoService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self, activity_group_id: Option<i32>) -> sqlx::Result<Vec<Todo>> {
        match activity_group_id {
            Some(id) => {
                sqlx::query_as::<_, Todo>(
                    r#"
                    SELECT * FROM todos
                    WHERE activity_group_id = $1 AND deleted_at IS NULL
                    ORDER BY id
                    "#,
                )
                .bind(id)
                .fetch_all(&self.db)
                .await
            }
            None => {
                sqlx::query_as::<_, Todo>(
                    "SELECT * FROM todos WHERE deleted_at IS NULL ORDER BY id",
                )
                .fetch_all(&self.db)
                .await
            }
        }
    }

    pub async fn find(&self, id: i32) -> sqlx::Result<Option<Todo>> {
        sqlx::query_as::<_, Todo>("SELECT * FROM todos WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    /// Inserts a new row. A foreign-key rejection from storage is returned
    /// as-is for the caller to classify.
    pub async fn create(
        &self,
        activity_group_id: i32,
        title: &str,
        is_active: &str,
        priority: &str,
    ) -> sqlx::Result<Todo> {
        let now = Utc::now();
        sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (activity_group_id, title, is_active, priority, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(activity_group_id)
        .bind(title)
        .bind(is_active)
        .bind(priority)
        .bind(now)
        .bind(now)
        .fetch_one(&self.db)
        .await
    }

    pub async fn save(&self, todo: &Todo) -> sqlx::Result<Todo> {
        sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos
            SET activity_group_id = $1, title = $2, is_active = $3, priority = $4, updated_at = $5
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(todo.activity_group_id)
        .bind(&todo.title)
        .bind(&todo.is_active)
        .bind(&todo.priority)
        .bind(Utc::now())
        .bind(todo.id)
        .fetch_one(&self.db)
        .await
    }

    pub async fn delete(&self, id: i32) -> sqlx::Result<u64> {
        let result =
            sqlx::query("UPDATE todos SET deleted_at = $1 WHERE id = $2 AND deleted_at IS NULL")
                .bind(Utc::now())
                .bind(id)
                .execute(&self.db)
                .await?;

        Ok(result.rows_affected())
    }

    /// Cascade step of activity deletion: soft-deletes every live todo
    /// owned by the given activity group.
    pub async fn delete_for_activity(&self, activity_group_id: i32) -> sqlx::Result<u64> {
        let result = sqlx::query(
            "UPDATE todos SET deleted_at = $1 WHERE activity_group_id = $2 AND deleted_at IS NULL",
        )
        .bind(Utc::now())
        .bind(activity_group_id)
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected())
    }
}

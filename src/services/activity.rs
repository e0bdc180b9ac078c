use chrono::Utc;
use sqlx::PgPool;

use crate::models::Activity;

/// CRUD over activity-group rows. Reads see only live rows; deletes are
/// soft (they stamp `deleted_at`).
#[derive(Clone)]
pub struct ActivityService {
    db: PgPool,
}

impl ActivityService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> sqlx::Result<Vec<Activity>> {
        sqlx::query_as::<_, Activity>(
            "SELECT * FROM activities WHERE deleted_at IS NULL ORDER BY id",
        )
        .fetch_all(&self.db)
        .await
    }

    pub async fn find(&self, id: i32) -> sqlx::Result<Option<Activity>> {
        sqlx::query_as::<_, Activity>(
            "SELECT * FROM activities WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
    }

    pub async fn create(&self, title: &str, email: &str) -> sqlx::Result<Activity> {
        let now = Utc::now();
        sqlx::query_as::<_, Activity>(
            r#"
            INSERT INTO activities (email, title, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(title)
        .bind(now)
        .bind(now)
        .fetch_one(&self.db)
        .await
    }

    pub async fn save(&self, activity: &Activity) -> sqlx::Result<Activity> {
        sqlx::query_as::<_, Activity>(
            r#"
            UPDATE activities
            SET email = $1, title = $2, updated_at = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(&activity.email)
        .bind(&activity.title)
        .bind(Utc::now())
        .bind(activity.id)
        .fetch_one(&self.db)
        .await
    }

    /// Soft-deletes one row; returns the number of rows affected (0 when
    /// the id matches no live row).
    pub async fn delete(&self, id: i32) -> sqlx::Result<u64> {
        let result =
            sqlx::query("UPDATE activities SET deleted_at = $1 WHERE id = $2 AND deleted_at IS NULL")
                .bind(Utc::now())
                .bind(id)
                .execute(&self.db)
                .await?;

        Ok(result.rows_affected())
    }
}

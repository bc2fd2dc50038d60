use sqlx::PgPool;

use crate::models::Submission;

/// Upper bound on rows returned by [`list`].
pub const LIST_CAP: i64 = 1000;

pub async fn create(pool: &PgPool, submission: &Submission) -> Result<Submission, sqlx::Error> {
    sqlx::query_as::<_, Submission>(
        r#"INSERT INTO contact_submissions (id, name, email, company, message, "timestamp")
           VALUES ($1, $2, $3, $4, $5, $6) RETURNING *"#,
    )
    .bind(submission.id)
    .bind(&submission.name)
    .bind(&submission.email)
    .bind(&submission.company)
    .bind(&submission.message)
    .bind(submission.timestamp)
    .fetch_one(pool)
    .await
}

/// Rows come back in whatever order Postgres yields them; no sort is applied.
pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<Submission>, sqlx::Error> {
    sqlx::query_as::<_, Submission>("SELECT * FROM contact_submissions LIMIT $1")
        .bind(limit)
        .fetch_all(pool)
        .await
}

pub mod submissions;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::Submission;

/// Persistence seam for contact submissions.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Insert one record atomically and return it as stored.
    async fn insert(&self, submission: &Submission) -> Result<Submission, sqlx::Error>;

    /// Fetch up to `limit` records in storage order.
    async fn list(&self, limit: i64) -> Result<Vec<Submission>, sqlx::Error>;
}

pub struct PgSubmissionStore {
    pool: PgPool,
}

impl PgSubmissionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn insert(&self, submission: &Submission) -> Result<Submission, sqlx::Error> {
        submissions::create(&self.pool, submission).await
    }

    async fn list(&self, limit: i64) -> Result<Vec<Submission>, sqlx::Error> {
        submissions::list(&self.pool, limit).await
    }
}

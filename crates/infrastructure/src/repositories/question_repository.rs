//! Question repository implementation.
//!
//! PostgreSQL-backed question storage. Every listing is ordered by id.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use tracing::{debug, instrument};

use trivia_application::{ApplicationResult, QuestionRepositoryPort};
use trivia_common::PaginationParams;
use trivia_domain::{CategoryId, NewQuestion, Question, QuestionId};

use super::escape_like;
use crate::Error;

const QUESTION_COLUMNS: &str = "id, question, answer, difficulty, category";

/// PostgreSQL implementation of the question port.
pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_question(row: PgRow) -> Question {
    Question {
        id: QuestionId::new(row.get("id")),
        question: row.get("question"),
        answer: row.get("answer"),
        category: CategoryId::new(row.get("category")),
        difficulty: row.get("difficulty"),
    }
}

#[async_trait]
impl QuestionRepositoryPort for PgQuestionRepository {
    #[instrument(skip(self))]
    async fn list_page(
        &self,
        pagination: &PaginationParams,
    ) -> ApplicationResult<(Vec<Question>, u64)> {
        let offset = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);
        let limit = pagination.limit() as i64;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;

        let sql = format!(
            "SELECT {} FROM questions ORDER BY id LIMIT $1 OFFSET $2",
            QUESTION_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok((
            rows.into_iter().map(row_to_question).collect(),
            total.max(0) as u64,
        ))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> ApplicationResult<Vec<Question>> {
        let sql = format!("SELECT {} FROM questions ORDER BY id", QUESTION_COLUMNS);
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(rows.into_iter().map(row_to_question).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_category(&self, category: CategoryId) -> ApplicationResult<Vec<Question>> {
        let sql = format!(
            "SELECT {} FROM questions WHERE category = $1 ORDER BY id",
            QUESTION_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(category.value())
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(rows.into_iter().map(row_to_question).collect())
    }

    #[instrument(skip(self))]
    async fn search(&self, term: &str) -> ApplicationResult<Vec<Question>> {
        let sql = format!(
            r#"SELECT {} FROM questions WHERE question ILIKE $1 ESCAPE '\' ORDER BY id"#,
            QUESTION_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(format!("%{}%", escape_like(term)))
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        debug!(hits = rows.len(), "Question search executed");
        Ok(rows.into_iter().map(row_to_question).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: QuestionId) -> ApplicationResult<Option<Question>> {
        let sql = format!("SELECT {} FROM questions WHERE id = $1", QUESTION_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(row.map(row_to_question))
    }

    #[instrument(skip(self, question))]
    async fn insert(&self, question: &NewQuestion) -> ApplicationResult<Question> {
        let sql = format!(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            QUESTION_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(&question.question)
            .bind(&question.answer)
            .bind(question.difficulty)
            .bind(question.category.value())
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(row_to_question(row))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: QuestionId) -> ApplicationResult<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> ApplicationResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(total.max(0) as u64)
    }
}

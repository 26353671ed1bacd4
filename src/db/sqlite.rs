use crate::db::models::{Category, NewQuestion, Question};
use crate::db::schema::SQLITE_INIT;
use crate::error::TriviaError;
use rand::seq::SliceRandom;
use sqlx::{Pool, Sqlite};

pub type SqlitePool = Pool<Sqlite>;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

#[derive(Clone)]
pub struct TriviaStorage {
    pool: SqlitePool,
}

impl TriviaStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), TriviaError> {
        // execute statement by statement (sqlx::query rejects multi-commands)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// All categories, ordered by display type ascending.
    pub async fn list_categories(&self) -> Result<Vec<Category>, TriviaError> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY type ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(categories)
    }

    pub async fn category_exists(&self, id: i64) -> Result<bool, TriviaError> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    /// Seed/test helper; categories have no creation endpoint.
    pub async fn insert_category(&self, kind: &str) -> Result<i64, TriviaError> {
        let result = sqlx::query("INSERT INTO categories (type) VALUES (?)")
            .bind(kind)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// All questions in id order, which doubles as the pagination order.
    pub async fn list_questions(&self) -> Result<Vec<Question>, TriviaError> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    pub async fn list_questions_by_category(
        &self,
        category: i64,
    ) -> Result<Vec<Question>, TriviaError> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ? ORDER BY id"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    /// Case-insensitive substring match on the question text.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, TriviaError> {
        // SQLite LIKE is case-insensitive for ASCII; NOCASE makes it explicit.
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions \
             WHERE question LIKE '%' || ? || '%' COLLATE NOCASE ORDER BY id"
        ))
        .bind(term)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    /// Insert a question and return it with the generated id.
    pub async fn insert_question(&self, new: &NewQuestion) -> Result<Question, TriviaError> {
        let result = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .execute(&self.pool)
        .await?;

        Ok(Question {
            id: result.last_insert_rowid(),
            question: new.question.clone(),
            answer: new.answer.clone(),
            category: new.category,
            difficulty: new.difficulty,
        })
    }

    pub async fn delete_question(&self, id: i64) -> Result<(), TriviaError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(TriviaError::NotFound(format!("question {id} does not exist")));
        }
        Ok(())
    }

    /// One uniformly random question from the given category (`None` = all
    /// categories) whose id is not in `excluded`. `Ok(None)` when the pool
    /// of candidates is exhausted.
    pub async fn select_random_question(
        &self,
        category: Option<i64>,
        excluded: &[i64],
    ) -> Result<Option<Question>, TriviaError> {
        let candidates = match category {
            Some(id) => self.list_questions_by_category(id).await?,
            None => self.list_questions().await?,
        };
        let remaining: Vec<Question> = candidates
            .into_iter()
            .filter(|q| !excluded.contains(&q.id))
            .collect();
        Ok(remaining.choose(&mut rand::thread_rng()).cloned())
    }
}

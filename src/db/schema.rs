use sqlx::PgPool;
use tracing::info;

use crate::Result;

/// DDL run at startup. Every statement is idempotent.
///
/// Constraint names are relied upon when mapping foreign-key violations back
/// to the missing entity, see `AppError::from(sqlx::Error)`.
pub const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS employees (
        id          SERIAL PRIMARY KEY,
        full_name   VARCHAR(255) NOT NULL,
        position    VARCHAR(255) NOT NULL,
        hire_date   DATE NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS goals (
        id          SERIAL PRIMARY KEY,
        employee_id INTEGER NOT NULL,
        title       VARCHAR(255) NOT NULL,
        description TEXT,
        due_date    DATE,
        CONSTRAINT goals_employee_id_fkey FOREIGN KEY (employee_id)
            REFERENCES employees (id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS reviews (
        id          SERIAL PRIMARY KEY,
        employee_id INTEGER NOT NULL,
        goal_id     INTEGER,
        score       INTEGER NOT NULL,
        comment     TEXT,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
        CONSTRAINT reviews_employee_id_fkey FOREIGN KEY (employee_id)
            REFERENCES employees (id) ON DELETE CASCADE,
        CONSTRAINT reviews_goal_id_fkey FOREIGN KEY (goal_id)
            REFERENCES goals (id) ON DELETE CASCADE,
        CONSTRAINT reviews_score_range CHECK (score BETWEEN 1 AND 5)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_goals_employee_id ON goals (employee_id)",
    "CREATE INDEX IF NOT EXISTS ix_reviews_employee_id ON reviews (employee_id)",
    "CREATE INDEX IF NOT EXISTS ix_reviews_goal_id ON reviews (goal_id)",
];

/// Creates the tables and indexes if they are missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(*statement).execute(pool).await?;
    }
    info!("Database schema is up to date");
    Ok(())
}

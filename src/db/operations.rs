use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::db::models::{Employee, Goal, Review};
use crate::db::Store;
use crate::schemas::{EmployeeCreate, GoalCreate, ReviewCreate};
use crate::Result;

const EMPLOYEE_COLUMNS: &str = "id, full_name, position, hire_date";
const GOAL_COLUMNS: &str = "id, employee_id, title, description, due_date";
const REVIEW_COLUMNS: &str = "id, employee_id, goal_id, score, comment, created_at";

/// PostgreSQL-backed [`Store`].
#[derive(Clone)]
pub struct DbOperations {
    pool: Arc<PgPool>,
}

impl DbOperations {
    pub async fn new_with_options(
        url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(url)
            .await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    pub fn pool(&self) -> &PgPool {
        self.pool.as_ref()
    }
}

#[async_trait]
impl Store for DbOperations {
    async fn insert_employee(&self, new: &EmployeeCreate) -> Result<Employee> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "INSERT INTO employees (full_name, position, hire_date) VALUES ($1, $2, $3) RETURNING {}",
            EMPLOYEE_COLUMNS
        ))
        .bind(&new.full_name)
        .bind(&new.position)
        .bind(new.hire_date)
        .fetch_one(self.pool.as_ref())
        .await?;

        debug!("Inserted employee {}", employee.id);
        Ok(employee)
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM employees ORDER BY id",
            EMPLOYEE_COLUMNS
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(employees)
    }

    async fn get_employee(&self, id: i32) -> Result<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM employees WHERE id = $1",
            EMPLOYEE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(employee)
    }

    async fn insert_goal(&self, new: &GoalCreate) -> Result<Goal> {
        let goal = sqlx::query_as::<_, Goal>(&format!(
            r#"
            INSERT INTO goals (employee_id, title, description, due_date)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            GOAL_COLUMNS
        ))
        .bind(new.employee_id)
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.due_date)
        .fetch_one(self.pool.as_ref())
        .await?;

        debug!("Inserted goal {} for employee {}", goal.id, goal.employee_id);
        Ok(goal)
    }

    async fn list_goals(&self) -> Result<Vec<Goal>> {
        let goals = sqlx::query_as::<_, Goal>(&format!("SELECT {} FROM goals ORDER BY id", GOAL_COLUMNS))
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(goals)
    }

    async fn get_goal(&self, id: i32) -> Result<Option<Goal>> {
        let goal = sqlx::query_as::<_, Goal>(&format!("SELECT {} FROM goals WHERE id = $1", GOAL_COLUMNS))
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(goal)
    }

    async fn goals_for_employee(&self, employee_id: i32) -> Result<Vec<Goal>> {
        let goals = sqlx::query_as::<_, Goal>(&format!(
            "SELECT {} FROM goals WHERE employee_id = $1 ORDER BY id",
            GOAL_COLUMNS
        ))
        .bind(employee_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(goals)
    }

    async fn insert_review(&self, new: &ReviewCreate) -> Result<Review> {
        let review = sqlx::query_as::<_, Review>(&format!(
            r#"
            INSERT INTO reviews (employee_id, goal_id, score, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            REVIEW_COLUMNS
        ))
        .bind(new.employee_id)
        .bind(new.goal_id)
        .bind(new.score)
        .bind(&new.comment)
        .fetch_one(self.pool.as_ref())
        .await?;

        debug!("Inserted review {} for employee {}", review.id, review.employee_id);
        Ok(review)
    }

    async fn list_reviews(&self) -> Result<Vec<Review>> {
        let reviews = sqlx::query_as::<_, Review>(&format!("SELECT {} FROM reviews ORDER BY id", REVIEW_COLUMNS))
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(reviews)
    }

    async fn reviews_for_employee(&self, employee_id: i32) -> Result<Vec<Review>> {
        let reviews = sqlx::query_as::<_, Review>(&format!(
            "SELECT {} FROM reviews WHERE employee_id = $1 ORDER BY id",
            REVIEW_COLUMNS
        ))
        .bind(employee_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(reviews)
    }

    async fn reviews_for_goal(&self, goal_id: i32) -> Result<Vec<Review>> {
        let reviews = sqlx::query_as::<_, Review>(&format!(
            "SELECT {} FROM reviews WHERE goal_id = $1 ORDER BY id",
            REVIEW_COLUMNS
        ))
        .bind(goal_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(reviews)
    }
}

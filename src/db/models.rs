use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i32,
    pub full_name: String,
    pub position: String,
    pub hire_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Goal {
    pub id: i32,
    pub employee_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: i32,
    pub employee_id: i32,
    /// Optional link to a goal; the review is deleted together with that goal.
    pub goal_id: Option<i32>,
    pub score: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

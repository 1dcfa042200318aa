//! Request and response shapes of the REST API.
//!
//! Create payloads are validated with [`EmployeeCreate::validate`] and friends
//! before anything reaches the store. Read shapes are the row types in
//! [`crate::db::models`]; the detail views below embed related rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::models::{Employee, Goal, Review};
use crate::error::AppError;

pub const MAX_TEXT_LEN: usize = 255;
pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub full_name: String,
    pub position: String,
    pub hire_date: NaiveDate,
}

impl EmployeeCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        check_text("full_name", &self.full_name)?;
        check_text("position", &self.position)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalCreate {
    pub employee_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl GoalCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        check_text("title", &self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewCreate {
    pub employee_id: i32,
    #[serde(default)]
    pub goal_id: Option<i32>,
    pub score: i32,
    #[serde(default)]
    pub comment: Option<String>,
}

impl ReviewCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&self.score) {
            return Err(AppError::ValidationError(format!(
                "score must be between {} and {}, got {}",
                MIN_SCORE, MAX_SCORE, self.score
            )));
        }
        Ok(())
    }
}

/// Employee together with every goal and review that belongs to it.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeWithDetails {
    #[serde(flatten)]
    pub employee: Employee,
    pub goals: Vec<Goal>,
    pub reviews: Vec<Review>,
}

/// Goal with its owner's name and position inlined, plus the reviews pointing at it.
#[derive(Debug, Clone, Serialize)]
pub struct GoalWithDetails {
    #[serde(flatten)]
    pub goal: Goal,
    pub employee_full_name: String,
    pub employee_position: String,
    pub reviews: Vec<Review>,
}

impl GoalWithDetails {
    pub fn new(goal: Goal, owner: &Employee, reviews: Vec<Review>) -> Self {
        Self {
            goal,
            employee_full_name: owner.full_name.clone(),
            employee_position: owner.position.clone(),
            reviews,
        }
    }
}

fn check_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::ValidationError(format!("{} must not be empty", field)));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(AppError::ValidationError(format!(
            "{} must be at most {} characters",
            field, MAX_TEXT_LEN
        )));
    }
    Ok(())
}

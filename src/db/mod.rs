//! Database module
//!
//! Row types, the schema bootstrap, and the [`Store`] trait handlers talk to.
//! [`DbOperations`] is the PostgreSQL implementation.

pub mod models;
pub mod operations;
pub mod schema;

use async_trait::async_trait;

pub use models::{Employee, Goal, Review};
pub use operations::DbOperations;
pub use schema::ensure_schema;

use crate::schemas::{EmployeeCreate, GoalCreate, ReviewCreate};
use crate::Result;

/// Persistence operations needed by the request handlers.
///
/// Lists are returned in ascending id order. Inserts assume the payload was
/// already validated; referential checks are still enforced by the backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_employee(&self, new: &EmployeeCreate) -> Result<Employee>;
    async fn list_employees(&self) -> Result<Vec<Employee>>;
    async fn get_employee(&self, id: i32) -> Result<Option<Employee>>;

    async fn insert_goal(&self, new: &GoalCreate) -> Result<Goal>;
    async fn list_goals(&self) -> Result<Vec<Goal>>;
    async fn get_goal(&self, id: i32) -> Result<Option<Goal>>;
    async fn goals_for_employee(&self, employee_id: i32) -> Result<Vec<Goal>>;

    async fn insert_review(&self, new: &ReviewCreate) -> Result<Review>;
    async fn list_reviews(&self) -> Result<Vec<Review>>;
    async fn reviews_for_employee(&self, employee_id: i32) -> Result<Vec<Review>>;
    async fn reviews_for_goal(&self, goal_id: i32) -> Result<Vec<Review>>;
}

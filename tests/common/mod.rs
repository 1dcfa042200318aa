#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use perf_review_server::schemas::{EmployeeCreate, GoalCreate, ReviewCreate};
use perf_review_server::{AppState, Employee, Goal, Result, Review, Settings, Store};
use std::sync::{Arc, Mutex};

/// In-process [`Store`] so the HTTP surface can be exercised without PostgreSQL.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    employees: Vec<Employee>,
    goals: Vec<Goal>,
    reviews: Vec<Review>,
}

impl MemoryStore {
    pub fn counts(&self) -> (usize, usize, usize) {
        let t = self.inner.lock().unwrap();
        (t.employees.len(), t.goals.len(), t.reviews.len())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_employee(&self, new: &EmployeeCreate) -> Result<Employee> {
        let mut t = self.inner.lock().unwrap();
        let employee = Employee {
            id: t.employees.len() as i32 + 1,
            full_name: new.full_name.clone(),
            position: new.position.clone(),
            hire_date: new.hire_date,
        };
        t.employees.push(employee.clone());
        Ok(employee)
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        Ok(self.inner.lock().unwrap().employees.clone())
    }

    async fn get_employee(&self, id: i32) -> Result<Option<Employee>> {
        Ok(self.inner.lock().unwrap().employees.iter().find(|e| e.id == id).cloned())
    }

    async fn insert_goal(&self, new: &GoalCreate) -> Result<Goal> {
        let mut t = self.inner.lock().unwrap();
        let goal = Goal {
            id: t.goals.len() as i32 + 1,
            employee_id: new.employee_id,
            title: new.title.clone(),
            description: new.description.clone(),
            due_date: new.due_date,
        };
        t.goals.push(goal.clone());
        Ok(goal)
    }

    async fn list_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.inner.lock().unwrap().goals.clone())
    }

    async fn get_goal(&self, id: i32) -> Result<Option<Goal>> {
        Ok(self.inner.lock().unwrap().goals.iter().find(|g| g.id == id).cloned())
    }

    async fn goals_for_employee(&self, employee_id: i32) -> Result<Vec<Goal>> {
        let t = self.inner.lock().unwrap();
        Ok(t.goals.iter().filter(|g| g.employee_id == employee_id).cloned().collect())
    }

    async fn insert_review(&self, new: &ReviewCreate) -> Result<Review> {
        let mut t = self.inner.lock().unwrap();
        let review = Review {
            id: t.reviews.len() as i32 + 1,
            employee_id: new.employee_id,
            goal_id: new.goal_id,
            score: new.score,
            comment: new.comment.clone(),
            created_at: Utc::now(),
        };
        t.reviews.push(review.clone());
        Ok(review)
    }

    async fn list_reviews(&self) -> Result<Vec<Review>> {
        Ok(self.inner.lock().unwrap().reviews.clone())
    }

    async fn reviews_for_employee(&self, employee_id: i32) -> Result<Vec<Review>> {
        let t = self.inner.lock().unwrap();
        Ok(t.reviews.iter().filter(|r| r.employee_id == employee_id).cloned().collect())
    }

    async fn reviews_for_goal(&self, goal_id: i32) -> Result<Vec<Review>> {
        let t = self.inner.lock().unwrap();
        Ok(t.reviews.iter().filter(|r| r.goal_id == Some(goal_id)).cloned().collect())
    }
}

pub fn test_state(store: Arc<MemoryStore>) -> AppState {
    let config = Settings::new().expect("Failed to load config");
    AppState::with_store(config, store)
}

/// Builds the API under `/api` the same way `main` mounts it.
macro_rules! init_app {
    ($store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(crate::common::test_state($store)))
                .service(
                    actix_web::web::scope("/api")
                        .configure(perf_review_server::handlers::configure),
                ),
        )
        .await
    };
}

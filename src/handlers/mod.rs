//! HTTP handlers for the REST API.
//!
//! Each handler validates its payload, checks that referenced rows exist and
//! performs a single read or write through [`crate::db::Store`].

pub mod employees;
pub mod goals;
pub mod reviews;

use actix_web::{error, web};

use crate::error::AppError;

/// Registers every API route plus the extractor configs that turn malformed
/// bodies and path ids into 422 responses.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| error::Error::from(AppError::ValidationError(err.to_string()))),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| error::Error::from(AppError::ValidationError(err.to_string()))),
    )
    .service(
        web::resource("/employees")
            .route(web::get().to(employees::list_employees))
            .route(web::post().to(employees::create_employee)),
    )
    .route("/employees/{employee_id}", web::get().to(employees::get_employee))
    .service(
        web::resource("/goals")
            .route(web::get().to(goals::list_goals))
            .route(web::post().to(goals::create_goal)),
    )
    .route("/goals/{goal_id}", web::get().to(goals::get_goal))
    .service(
        web::resource("/reviews")
            .route(web::get().to(reviews::list_reviews))
            .route(web::post().to(reviews::create_review)),
    );
}

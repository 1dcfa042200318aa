use actix_web::{web, HttpResponse};
use tracing::{info, warn};

use crate::error::AppError;
use crate::schemas::ReviewCreate;
use crate::AppState;

pub async fn create_review(
    req: web::Json<ReviewCreate>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    req.validate()?;

    if state.store.get_employee(req.employee_id).await?.is_none() {
        warn!("Rejected review for unknown employee {}", req.employee_id);
        return Err(AppError::NotFound("Employee"));
    }

    if let Some(goal_id) = req.goal_id {
        if state.store.get_goal(goal_id).await?.is_none() {
            warn!("Rejected review for unknown goal {}", goal_id);
            return Err(AppError::NotFound("Goal"));
        }
    }

    let review = state.store.insert_review(&req).await?;
    info!(
        "Created review {} for employee {} with score {}",
        review.id, review.employee_id, review.score
    );
    Ok(HttpResponse::Created().json(review))
}

pub async fn list_reviews(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let reviews = state.store.list_reviews().await?;
    Ok(HttpResponse::Ok().json(reviews))
}

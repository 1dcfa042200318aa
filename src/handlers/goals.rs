use actix_web::{web, HttpResponse};
use tracing::{info, warn};

use crate::error::AppError;
use crate::schemas::{GoalCreate, GoalWithDetails};
use crate::AppState;

pub async fn create_goal(
    req: web::Json<GoalCreate>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    req.validate()?;

    if state.store.get_employee(req.employee_id).await?.is_none() {
        warn!("Rejected goal for unknown employee {}", req.employee_id);
        return Err(AppError::NotFound("Employee"));
    }

    let goal = state.store.insert_goal(&req).await?;
    info!("Created goal {} for employee {}", goal.id, goal.employee_id);
    Ok(HttpResponse::Created().json(goal))
}

pub async fn list_goals(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let goals = state.store.list_goals().await?;
    Ok(HttpResponse::Ok().json(goals))
}

pub async fn get_goal(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let goal_id = path.into_inner();

    let goal = state
        .store
        .get_goal(goal_id)
        .await?
        .ok_or(AppError::NotFound("Goal"))?;

    // The owner row always exists while the goal does (ON DELETE CASCADE).
    let owner = state
        .store
        .get_employee(goal.employee_id)
        .await?
        .ok_or(AppError::NotFound("Employee"))?;
    let reviews = state.store.reviews_for_goal(goal_id).await?;

    Ok(HttpResponse::Ok().json(GoalWithDetails::new(goal, &owner, reviews)))
}

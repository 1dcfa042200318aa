use actix_web::{web, HttpResponse};
use tracing::{info, warn};

use crate::error::AppError;
use crate::schemas::{EmployeeCreate, EmployeeWithDetails};
use crate::AppState;

pub async fn create_employee(
    req: web::Json<EmployeeCreate>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    req.validate()?;

    let employee = state.store.insert_employee(&req).await?;
    info!("Created employee {} ({})", employee.id, employee.full_name);
    Ok(HttpResponse::Created().json(employee))
}

pub async fn list_employees(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let employees = state.store.list_employees().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();

    let employee = match state.store.get_employee(employee_id).await? {
        Some(employee) => employee,
        None => {
            warn!("Employee {} not found", employee_id);
            return Err(AppError::NotFound("Employee"));
        }
    };

    let goals = state.store.goals_for_employee(employee_id).await?;
    let reviews = state.store.reviews_for_employee(employee_id).await?;

    Ok(HttpResponse::Ok().json(EmployeeWithDetails { employee, goals, reviews }))
}

//! Employee resource handlers
//!
//! Request-shape problems answer 400 with a plain-text message. Everything
//! that reaches the repository answers 200 with whatever it returned.

use axum::extract::{FromRequest, Path, Request, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use shared::error::AppError;
use shared::models::employee::{
    EMPLOYEE_SHAPE_MESSAGE, Employee, EmployeePayload, INVALID_EMPLOYEE_ID_MESSAGE,
};
use shared::models::status::StatusEnvelope;

use crate::repository::Retrieved;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, AppError>;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/employee", post(create_employee).put(update_employee))
        .route(
            "/employee/{employee_id}",
            get(get_employee).delete(delete_employee),
        )
}

/// JSON body parsed into an [`EmployeePayload`] and validated
///
/// Any rejection (bad content type, broken JSON, missing or mistyped field,
/// body over the limit) collapses into the same 400 shape message.
pub struct ValidEmployee(pub Employee);

impl<S> FromRequest<S> for ValidEmployee
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<EmployeePayload>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "Employee body rejected");
                AppError::invalid_request(EMPLOYEE_SHAPE_MESSAGE)
            })?;
        Ok(Self(payload.validate()?))
    }
}

fn parse_employee_id(raw: &str) -> Result<i32, AppError> {
    raw.parse()
        .map_err(|_| AppError::invalid_format(INVALID_EMPLOYEE_ID_MESSAGE))
}

/// POST /records/employee
pub async fn create_employee(
    State(state): State<AppState>,
    ValidEmployee(employee): ValidEmployee,
) -> Json<StatusEnvelope> {
    Json(state.employees.insert(&employee).await)
}

/// GET /records/employee/{employee_id}
pub async fn get_employee(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Retrieved> {
    let employee_id = parse_employee_id(&raw_id)?;
    Ok(Json(state.employees.retrieve_by_id(employee_id).await))
}

/// PUT /records/employee
pub async fn update_employee(
    State(state): State<AppState>,
    ValidEmployee(employee): ValidEmployee,
) -> Json<StatusEnvelope> {
    Json(state.employees.update(&employee).await)
}

/// DELETE /records/employee/{employee_id}
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusEnvelope> {
    let employee_id = parse_employee_id(&raw_id)?;
    Ok(Json(state.employees.delete(employee_id).await))
}

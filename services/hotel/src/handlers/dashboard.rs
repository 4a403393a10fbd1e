use axum::{Json, extract::State};

use crate::domain::types::DashboardCounts;
use crate::error::HotelServiceError;
use crate::state::AppState;
use crate::usecase::dashboard::GetDashboardUseCase;

// ── GET /admin/dashboard ─────────────────────────────────────────────────────

pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardCounts>, HotelServiceError> {
    let usecase = GetDashboardUseCase {
        repo: state.dashboard_repo(),
    };
    Ok(Json(usecase.execute().await?))
}

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hotelier_domain::pagination::PageRequest;

use crate::domain::types::{StockItem, StockItemDetails, StockLevel};
use crate::error::HotelServiceError;
use crate::state::AppState;
use crate::usecase::stock::{
    CreateStockItemUseCase, DeleteStockItemUseCase, ListStockItemsUseCase, UpdateStockItemUseCase,
};

#[derive(Serialize)]
pub struct StockItemResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub price: f64,
    pub unit: String,
    pub description: Option<String>,
    pub level: StockLevel,
    #[serde(serialize_with = "hotelier_core::serde::to_rfc3339_ms")]
    pub last_restocked: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "hotelier_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<StockItem> for StockItemResponse {
    fn from(item: StockItem) -> Self {
        let level = item.level();
        let details = item.details;
        Self {
            id: item.id,
            name: details.name,
            category: details.category,
            quantity: details.quantity,
            price: details.price,
            unit: details.unit,
            description: details.description,
            level,
            last_restocked: item.last_restocked,
            created_at: item.created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct StockItemRequest {
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub price: f64,
    pub unit: String,
    pub description: Option<String>,
}

impl From<StockItemRequest> for StockItemDetails {
    fn from(body: StockItemRequest) -> Self {
        Self {
            name: body.name,
            category: body.category,
            quantity: body.quantity,
            price: body.price,
            unit: body.unit,
            description: body.description,
        }
    }
}

// ── GET /stock/items ─────────────────────────────────────────────────────────

pub async fn list_items(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<StockItemResponse>>, HotelServiceError> {
    let usecase = ListStockItemsUseCase {
        repo: state.stock_repo(),
    };
    let items = usecase.execute(page).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

// ── POST /stock/items ────────────────────────────────────────────────────────

pub async fn create_item(
    State(state): State<AppState>,
    Json(body): Json<StockItemRequest>,
) -> Result<(StatusCode, Json<StockItemResponse>), HotelServiceError> {
    let usecase = CreateStockItemUseCase {
        repo: state.stock_repo(),
    };
    let item = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(item.into())))
}

// ── PUT /stock/items/{id} ────────────────────────────────────────────────────

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<StockItemRequest>,
) -> Result<Json<StockItemResponse>, HotelServiceError> {
    let usecase = UpdateStockItemUseCase {
        repo: state.stock_repo(),
    };
    Ok(Json(usecase.execute(id, body.into()).await?.into()))
}

// ── DELETE /stock/items/{id} ─────────────────────────────────────────────────

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, HotelServiceError> {
    let usecase = DeleteStockItemUseCase {
        repo: state.stock_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

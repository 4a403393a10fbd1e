use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use hotelier_domain::pagination::PageRequest;

use crate::domain::repository::StockRepository;
use crate::domain::types::{StockItem, StockItemDetails, StockLevel};
use crate::error::HotelServiceError;

fn normalized(details: StockItemDetails) -> StockItemDetails {
    StockItemDetails {
        name: details.name.trim().to_owned(),
        category: details.category.trim().to_owned(),
        unit: details.unit.trim().to_owned(),
        description: details
            .description
            .map(|d| d.trim().to_owned())
            .filter(|d| !d.is_empty()),
        ..details
    }
}

// ── ListStockItems ───────────────────────────────────────────────────────────

pub struct ListStockItemsUseCase<R: StockRepository> {
    pub repo: R,
}

impl<R: StockRepository> ListStockItemsUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<StockItem>, HotelServiceError> {
        self.repo.list(page).await
    }
}

// ── CreateStockItem ──────────────────────────────────────────────────────────

pub struct CreateStockItemUseCase<R: StockRepository> {
    pub repo: R,
}

impl<R: StockRepository> CreateStockItemUseCase<R> {
    pub async fn execute(&self, details: StockItemDetails) -> Result<StockItem, HotelServiceError> {
        let details = normalized(details);
        details.validate()?;

        let now = Utc::now();
        let item = StockItem {
            id: Uuid::now_v7(),
            details,
            last_restocked: now,
            created_at: now,
        };
        self.repo.create(&item).await?;
        Ok(item)
    }
}

// ── UpdateStockItem ──────────────────────────────────────────────────────────

pub struct UpdateStockItemUseCase<R: StockRepository> {
    pub repo: R,
}

impl<R: StockRepository> UpdateStockItemUseCase<R> {
    pub async fn execute(
        &self,
        id: Uuid,
        details: StockItemDetails,
    ) -> Result<StockItem, HotelServiceError> {
        let details = normalized(details);
        details.validate()?;
        let item = self
            .repo
            .update(id, &details)
            .await?
            .ok_or(HotelServiceError::StockItemNotFound)?;
        if item.level() != StockLevel::Ok {
            info!(item_id = %item.id, quantity = item.details.quantity, "stock item running low");
        }
        Ok(item)
    }
}

// ── DeleteStockItem ──────────────────────────────────────────────────────────

pub struct DeleteStockItemUseCase<R: StockRepository> {
    pub repo: R,
}

impl<R: StockRepository> DeleteStockItemUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), HotelServiceError> {
        if !self.repo.delete(id).await? {
            return Err(HotelServiceError::StockItemNotFound);
        }
        Ok(())
    }
}

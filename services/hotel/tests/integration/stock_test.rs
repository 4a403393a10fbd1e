use uuid::Uuid;

use hotelier_hotel::domain::types::StockLevel;
use hotelier_hotel::error::HotelServiceError;
use hotelier_hotel::usecase::stock::{
    CreateStockItemUseCase, DeleteStockItemUseCase, UpdateStockItemUseCase,
};

use crate::helpers::{MemoryStock, stock_details};

#[tokio::test]
async fn should_stamp_restock_time_on_create() {
    let stock = MemoryStock::default();

    let item = CreateStockItemUseCase { repo: stock.clone() }
        .execute(stock_details("  Bath towels ", 40))
        .await
        .unwrap();

    assert_eq!(item.details.name, "Bath towels");
    assert_eq!(item.last_restocked, item.created_at);
    assert_eq!(item.level(), StockLevel::Ok);
    assert_eq!(stock.rows.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_report_level_after_update() {
    let stock = MemoryStock::default();
    let item = CreateStockItemUseCase { repo: stock.clone() }
        .execute(stock_details("Soap", 40))
        .await
        .unwrap();
    let usecase = UpdateStockItemUseCase { repo: stock.clone() };

    let low = usecase
        .execute(item.id, stock_details("Soap", 3))
        .await
        .unwrap();
    assert_eq!(low.level(), StockLevel::Low);
    assert!(low.last_restocked >= item.last_restocked);

    let out = usecase
        .execute(item.id, stock_details("Soap", 0))
        .await
        .unwrap();
    assert_eq!(out.level(), StockLevel::Out);
}

#[tokio::test]
async fn should_refuse_negative_price() {
    let mut details = stock_details("Soap", 5);
    details.price = -1.0;

    let err = CreateStockItemUseCase {
        repo: MemoryStock::default(),
    }
    .execute(details)
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "price must not be negative");
}

#[tokio::test]
async fn should_report_missing_stock_item() {
    let stock = MemoryStock::default();

    let err = UpdateStockItemUseCase { repo: stock.clone() }
        .execute(Uuid::now_v7(), stock_details("Soap", 5))
        .await
        .unwrap_err();
    assert!(matches!(err, HotelServiceError::StockItemNotFound));

    let err = DeleteStockItemUseCase { repo: stock }
        .execute(Uuid::now_v7())
        .await
        .unwrap_err();
    assert!(matches!(err, HotelServiceError::StockItemNotFound));
}

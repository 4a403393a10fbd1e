use chrono::Utc;
use uuid::Uuid;

use hotelier_domain::status::TaskStatus;
use hotelier_hotel::domain::types::{DashboardCounts, Employee};
use hotelier_hotel::usecase::dashboard::GetDashboardUseCase;
use hotelier_hotel::usecase::stock::CreateStockItemUseCase;
use hotelier_hotel::usecase::task::{CreateTaskInput, CreateTaskUseCase};

use crate::helpers::{MemoryDashboard, MemoryProfiles, employee_details, stock_details};

#[tokio::test]
async fn should_count_everything_on_an_empty_hotel_as_zero() {
    let counts = GetDashboardUseCase {
        repo: MemoryDashboard::default(),
    }
    .execute()
    .await
    .unwrap();

    assert_eq!(counts, DashboardCounts::default());
}

#[tokio::test]
async fn should_count_items_below_ten_as_low_stock() {
    let dashboard = MemoryDashboard::default();
    let stock = CreateStockItemUseCase {
        repo: dashboard.stock.clone(),
    };
    for (name, quantity) in [("Soap", 0), ("Towels", 9), ("Sheets", 10), ("Pillows", 40)] {
        stock.execute(stock_details(name, quantity)).await.unwrap();
    }

    let counts = GetDashboardUseCase { repo: dashboard }.execute().await.unwrap();

    assert_eq!(counts.stock_items, 4);
    assert_eq!(counts.low_stock_items, 2);
}

#[tokio::test]
async fn should_count_tasks_by_status_and_employees() {
    let dashboard = MemoryDashboard::default();
    let tasks = CreateTaskUseCase {
        repo: dashboard.tasks.clone(),
        profiles: MemoryProfiles::default(),
    };
    for status in [
        None,
        Some(TaskStatus::Pending),
        Some(TaskStatus::InProgress),
        Some(TaskStatus::Completed),
    ] {
        tasks
            .execute(CreateTaskInput {
                title: "Count linen".to_owned(),
                description: String::new(),
                assigned_to: None,
                status,
            })
            .await
            .unwrap();
    }
    dashboard
        .employees
        .rows
        .lock()
        .unwrap()
        .push(Employee {
            id: Uuid::now_v7(),
            details: employee_details(),
            code: "0000001".to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });

    let counts = GetDashboardUseCase { repo: dashboard }.execute().await.unwrap();

    assert_eq!(counts.employees, 1);
    assert_eq!(counts.tasks.pending, 2);
    assert_eq!(counts.tasks.in_progress, 1);
    assert_eq!(counts.tasks.completed, 1);
    assert_eq!(counts.stock_items, 0);
}

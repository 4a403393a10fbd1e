use sea_orm::DatabaseConnection;

use crate::gate::GateState;
use crate::infra::db::{
    DbCodeRegistry, DbDashboardRepository, DbEmployeeRepository, DbProfileRepository,
    DbReservationRepository, DbRoomRepository, DbStockRepository, DbTaskRepository,
};
use crate::usecase::identity::RandomCodes;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub gate: GateState,
}

impl AppState {
    pub fn code_registry(&self) -> DbCodeRegistry {
        DbCodeRegistry {
            db: self.db.clone(),
        }
    }

    pub fn codes(&self) -> RandomCodes {
        RandomCodes
    }

    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn employee_repo(&self) -> DbEmployeeRepository {
        DbEmployeeRepository {
            db: self.db.clone(),
        }
    }

    pub fn task_repo(&self) -> DbTaskRepository {
        DbTaskRepository {
            db: self.db.clone(),
        }
    }

    pub fn stock_repo(&self) -> DbStockRepository {
        DbStockRepository {
            db: self.db.clone(),
        }
    }

    pub fn room_repo(&self) -> DbRoomRepository {
        DbRoomRepository {
            db: self.db.clone(),
        }
    }

    pub fn reservation_repo(&self) -> DbReservationRepository {
        DbReservationRepository {
            db: self.db.clone(),
        }
    }

    pub fn dashboard_repo(&self) -> DbDashboardRepository {
        DbDashboardRepository {
            db: self.db.clone(),
        }
    }
}

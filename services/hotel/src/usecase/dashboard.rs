use crate::domain::repository::DashboardRepository;
use crate::domain::types::DashboardCounts;
use crate::error::HotelServiceError;

pub struct GetDashboardUseCase<R: DashboardRepository> {
    pub repo: R,
}

impl<R: DashboardRepository> GetDashboardUseCase<R> {
    pub async fn execute(&self) -> Result<DashboardCounts, HotelServiceError> {
        self.repo.counts().await
    }
}

use sea_orm::entity::prelude::*;

/// A stay request. Public bookings fill the guest contact columns and may
/// hold a chamber; reservations made by a reservation user carry `user_id`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub check_in: Date,
    pub check_out: Date,
    pub room_type: String,
    pub guests: i32,
    pub special_requests: Option<String>,
    pub status: String,
    pub chamber_id: Option<Uuid>,
    pub chamber_number: Option<String>,
    pub user_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservation_history::Entity")]
    History,
}

impl Related<super::reservation_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::History.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

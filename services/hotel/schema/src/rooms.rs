use sea_orm::entity::prelude::*;

/// A room type in the public catalog. List-valued attributes are JSON arrays
/// of strings.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub room_type: String,
    pub description: String,
    pub guests: i32,
    pub size_m2: i32,
    pub beds: String,
    pub price_per_night: f64,
    pub rating: f64,
    pub amenities: Json,
    pub features: Json,
    pub cancellation_policy: String,
    pub image_urls: Json,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, IntoActiveModel as _, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, SqlErr, Statement, TransactionTrait, Value,
    sea_query::{Expr, LockBehavior, LockType},
};
use uuid::Uuid;

use hotelier_domain::pagination::PageRequest;
use hotelier_domain::role::Role;
use hotelier_domain::status::{ChamberStatus, ReservationStatus, TaskStatus};
use hotelier_hotel_schema::{
    employees, profiles, reservation_history, reservations, room_chambers, rooms, stock_items,
    tasks,
};

use crate::domain::repository::{
    CodeRegistry, DashboardRepository, EmployeeRepository, ProfileRepository,
    ReservationRepository, RoomRepository, StockRepository, TaskRepository,
};
use crate::domain::types::{
    BookingOutcome, Chamber, DashboardCounts, Department, Employee, EmployeeDetails, GuestContact,
    HistoryEntry, LOW_STOCK_THRESHOLD, Profile, ProfileChanges, Reservation, Room, RoomDetails,
    StatusChange, Stay, StockItem, StockItemDetails, Task, TaskChanges, TaskCounts,
};
use crate::error::HotelServiceError;

/// Map a unique-constraint violation to `conflict`; anything else is internal.
fn conflict_or_internal(
    err: DbErr,
    conflict: HotelServiceError,
    context: &'static str,
) -> HotelServiceError {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        conflict
    } else {
        anyhow::Error::new(err).context(context).into()
    }
}

// ── Code registry ────────────────────────────────────────────────────────────

/// Advisory lock key held by every write that stores an access code.
const ACCESS_CODE_LOCK: i64 = 0x686f_7465_6c69;

async fn code_held<C: ConnectionTrait>(conn: &C, code: &str) -> Result<bool, DbErr> {
    let profiles = profiles::Entity::find()
        .filter(profiles::Column::Code.eq(code))
        .count(conn)
        .await?;
    if profiles > 0 {
        return Ok(true);
    }
    let employees = employees::Entity::find()
        .filter(employees::Column::Code.eq(code))
        .count(conn)
        .await?;
    Ok(employees > 0)
}

/// Take the access-code lock until `txn` ends, then check `code` against
/// both identity tables. Each table's unique index only covers itself, so
/// writers storing a code serialize here.
async fn lock_code(txn: &DatabaseTransaction, code: &str) -> Result<(), HotelServiceError> {
    txn.execute(Statement::from_sql_and_values(
        txn.get_database_backend(),
        "SELECT pg_advisory_xact_lock($1)",
        [Value::from(ACCESS_CODE_LOCK)],
    ))
    .await
    .context("lock access codes")?;
    if code_held(txn, code).await.context("check access code")? {
        return Err(HotelServiceError::CodeTaken);
    }
    Ok(())
}

#[derive(Clone)]
pub struct DbCodeRegistry {
    pub db: DatabaseConnection,
}

impl CodeRegistry for DbCodeRegistry {
    async fn code_in_use(&self, code: &str) -> Result<bool, HotelServiceError> {
        Ok(code_held(&self.db, code)
            .await
            .context("look up access code")?)
    }
}

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<Profile>, HotelServiceError> {
        let models = profiles::Entity::find()
            .order_by_desc(profiles::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list profiles")?;
        models.into_iter().map(profile_from_model).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, HotelServiceError> {
        let model = profiles::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find profile by id")?;
        model.map(profile_from_model).transpose()
    }

    async fn create(&self, profile: &Profile) -> Result<(), HotelServiceError> {
        let txn = self.db.begin().await.context("begin profile insert")?;
        lock_code(&txn, &profile.code).await?;
        profiles::ActiveModel {
            id: Set(profile.id),
            name: Set(profile.name.clone()),
            role: Set(profile.role.as_str().to_owned()),
            code: Set(profile.code.clone()),
            created_at: Set(profile.created_at),
        }
        .insert(&txn)
        .await
        .map_err(|e| conflict_or_internal(e, HotelServiceError::CodeTaken, "create profile"))?;
        txn.commit().await.context("commit profile insert")?;
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &ProfileChanges,
    ) -> Result<Option<Profile>, HotelServiceError> {
        let txn = self.db.begin().await.context("begin profile update")?;
        let Some(model) = profiles::Entity::find_by_id(id)
            .one(&txn)
            .await
            .context("find profile for update")?
        else {
            return Ok(None);
        };
        if let Some(code) = changes.code.as_deref().filter(|c| *c != model.code) {
            lock_code(&txn, code).await?;
        }
        let mut am = model.into_active_model();
        if let Some(name) = &changes.name {
            am.name = Set(name.clone());
        }
        if let Some(role) = changes.role {
            am.role = Set(role.as_str().to_owned());
        }
        if let Some(code) = &changes.code {
            am.code = Set(code.clone());
        }
        let model = am
            .update(&txn)
            .await
            .map_err(|e| conflict_or_internal(e, HotelServiceError::CodeTaken, "update profile"))?;
        txn.commit().await.context("commit profile update")?;
        profile_from_model(model).map(Some)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, HotelServiceError> {
        let result = profiles::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete profile")?;
        Ok(result.rows_affected > 0)
    }
}

fn profile_from_model(model: profiles::Model) -> Result<Profile, HotelServiceError> {
    let role = model
        .role
        .parse::<Role>()
        .with_context(|| format!("profile {} carries an unknown role", model.id))?;
    Ok(Profile {
        id: model.id,
        name: model.name,
        role,
        code: model.code,
        created_at: model.created_at,
    })
}

// ── Employee repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEmployeeRepository {
    pub db: DatabaseConnection,
}

impl EmployeeRepository for DbEmployeeRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<Employee>, HotelServiceError> {
        let models = employees::Entity::find()
            .order_by_desc(employees::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list employees")?;
        models.into_iter().map(employee_from_model).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, HotelServiceError> {
        let model = employees::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find employee by id")?;
        model.map(employee_from_model).transpose()
    }

    async fn create(&self, employee: &Employee) -> Result<(), HotelServiceError> {
        let details = &employee.details;
        let txn = self.db.begin().await.context("begin employee insert")?;
        lock_code(&txn, &employee.code).await?;
        employees::ActiveModel {
            id: Set(employee.id),
            first_name: Set(details.first_name.clone()),
            last_name: Set(details.last_name.clone()),
            telephone: Set(details.telephone.clone()),
            address: Set(details.address.clone()),
            email: Set(details.email.clone()),
            ccp: Set(details.ccp.clone()),
            department: Set(details.department.as_str().to_owned()),
            code: Set(employee.code.clone()),
            created_at: Set(employee.created_at),
            updated_at: Set(employee.updated_at),
        }
        .insert(&txn)
        .await
        .map_err(|e| conflict_or_internal(e, HotelServiceError::CodeTaken, "create employee"))?;
        txn.commit().await.context("commit employee insert")?;
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        details: &EmployeeDetails,
    ) -> Result<Option<Employee>, HotelServiceError> {
        let Some(model) = employees::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find employee for update")?
        else {
            return Ok(None);
        };
        let mut am = model.into_active_model();
        am.first_name = Set(details.first_name.clone());
        am.last_name = Set(details.last_name.clone());
        am.telephone = Set(details.telephone.clone());
        am.address = Set(details.address.clone());
        am.email = Set(details.email.clone());
        am.ccp = Set(details.ccp.clone());
        am.department = Set(details.department.as_str().to_owned());
        am.updated_at = Set(Utc::now());
        let model = am.update(&self.db).await.context("update employee")?;
        employee_from_model(model).map(Some)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, HotelServiceError> {
        let result = employees::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete employee")?;
        Ok(result.rows_affected > 0)
    }
}

fn employee_from_model(model: employees::Model) -> Result<Employee, HotelServiceError> {
    let department = model
        .department
        .parse::<Department>()
        .map_err(|_| anyhow::anyhow!("employee {} has department {}", model.id, model.department))?;
    Ok(Employee {
        id: model.id,
        details: EmployeeDetails {
            first_name: model.first_name,
            last_name: model.last_name,
            telephone: model.telephone,
            address: model.address,
            email: model.email,
            ccp: model.ccp,
            department,
        },
        code: model.code,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Task repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTaskRepository {
    pub db: DatabaseConnection,
}

impl TaskRepository for DbTaskRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<Task>, HotelServiceError> {
        let models = tasks::Entity::find()
            .order_by_desc(tasks::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list tasks")?;
        models.into_iter().map(task_from_model).collect()
    }

    async fn create(&self, task: &Task) -> Result<(), HotelServiceError> {
        tasks::ActiveModel {
            id: Set(task.id),
            title: Set(task.title.clone()),
            description: Set(task.description.clone()),
            status: Set(task.status.as_str().to_owned()),
            assigned_to: Set(task.assigned_to),
            created_at: Set(task.created_at),
            updated_at: Set(task.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create task")?;
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &TaskChanges,
    ) -> Result<Option<Task>, HotelServiceError> {
        let Some(model) = tasks::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find task for update")?
        else {
            return Ok(None);
        };
        let mut am = model.into_active_model();
        if let Some(title) = &changes.title {
            am.title = Set(title.clone());
        }
        if let Some(description) = &changes.description {
            am.description = Set(description.clone());
        }
        if let Some(status) = changes.status {
            am.status = Set(status.as_str().to_owned());
        }
        if let Some(assigned_to) = changes.assigned_to {
            am.assigned_to = Set(assigned_to);
        }
        am.updated_at = Set(Utc::now());
        let model = am.update(&self.db).await.context("update task")?;
        task_from_model(model).map(Some)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, HotelServiceError> {
        let result = tasks::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete task")?;
        Ok(result.rows_affected > 0)
    }
}

fn task_from_model(model: tasks::Model) -> Result<Task, HotelServiceError> {
    let status = model
        .status
        .parse::<TaskStatus>()
        .with_context(|| format!("task {} carries an unknown status", model.id))?;
    Ok(Task {
        id: model.id,
        title: model.title,
        description: model.description,
        status,
        assigned_to: model.assigned_to,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Stock repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbStockRepository {
    pub db: DatabaseConnection,
}

impl StockRepository for DbStockRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<StockItem>, HotelServiceError> {
        let models = stock_items::Entity::find()
            .order_by_asc(stock_items::Column::Category)
            .order_by_asc(stock_items::Column::Name)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list stock items")?;
        Ok(models.into_iter().map(stock_item_from_model).collect())
    }

    async fn create(&self, item: &StockItem) -> Result<(), HotelServiceError> {
        let details = &item.details;
        stock_items::ActiveModel {
            id: Set(item.id),
            name: Set(details.name.clone()),
            category: Set(details.category.clone()),
            quantity: Set(details.quantity),
            price: Set(details.price),
            unit: Set(details.unit.clone()),
            description: Set(details.description.clone()),
            last_restocked: Set(item.last_restocked),
            created_at: Set(item.created_at),
        }
        .insert(&self.db)
        .await
        .context("create stock item")?;
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        details: &StockItemDetails,
    ) -> Result<Option<StockItem>, HotelServiceError> {
        let Some(model) = stock_items::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find stock item for update")?
        else {
            return Ok(None);
        };
        let mut am = model.into_active_model();
        am.name = Set(details.name.clone());
        am.category = Set(details.category.clone());
        am.quantity = Set(details.quantity);
        am.price = Set(details.price);
        am.unit = Set(details.unit.clone());
        am.description = Set(details.description.clone());
        am.last_restocked = Set(Utc::now());
        let model = am.update(&self.db).await.context("update stock item")?;
        Ok(Some(stock_item_from_model(model)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, HotelServiceError> {
        let result = stock_items::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete stock item")?;
        Ok(result.rows_affected > 0)
    }
}

fn stock_item_from_model(model: stock_items::Model) -> StockItem {
    StockItem {
        id: model.id,
        details: StockItemDetails {
            name: model.name,
            category: model.category,
            quantity: model.quantity,
            price: model.price,
            unit: model.unit,
            description: model.description,
        },
        last_restocked: model.last_restocked,
        created_at: model.created_at,
    }
}

// ── Room repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRoomRepository {
    pub db: DatabaseConnection,
}

impl RoomRepository for DbRoomRepository {
    async fn list(&self) -> Result<Vec<Room>, HotelServiceError> {
        let models = rooms::Entity::find()
            .order_by_desc(rooms::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list rooms")?;
        models.into_iter().map(room_from_model).collect()
    }

    async fn exists(&self, room_type: &str) -> Result<bool, HotelServiceError> {
        let count = rooms::Entity::find()
            .filter(rooms::Column::RoomType.eq(room_type))
            .count(&self.db)
            .await
            .context("count rooms by type")?;
        Ok(count > 0)
    }

    async fn create(&self, room: &Room) -> Result<(), HotelServiceError> {
        let details = &room.details;
        rooms::ActiveModel {
            id: Set(room.id),
            room_type: Set(details.room_type.clone()),
            description: Set(details.description.clone()),
            guests: Set(details.guests),
            size_m2: Set(details.size_m2),
            beds: Set(details.beds.clone()),
            price_per_night: Set(details.price_per_night),
            rating: Set(details.rating),
            amenities: Set(serde_json::json!(details.amenities)),
            features: Set(serde_json::json!(details.features)),
            cancellation_policy: Set(details.cancellation_policy.clone()),
            image_urls: Set(serde_json::json!(details.image_urls)),
            created_at: Set(room.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| conflict_or_internal(e, HotelServiceError::RoomTypeTaken, "create room"))?;
        Ok(())
    }

    async fn add_chamber(&self, chamber: &Chamber) -> Result<(), HotelServiceError> {
        room_chambers::ActiveModel {
            id: Set(chamber.id),
            chamber_number: Set(chamber.chamber_number.clone()),
            room_type: Set(chamber.room_type.clone()),
            status: Set(chamber.status.as_str().to_owned()),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| conflict_or_internal(e, HotelServiceError::ChamberTaken, "add chamber"))?;
        Ok(())
    }
}

fn string_list(value: serde_json::Value, column: &str) -> Result<Vec<String>, HotelServiceError> {
    Ok(serde_json::from_value(value).with_context(|| format!("decode rooms.{column}"))?)
}

fn room_from_model(model: rooms::Model) -> Result<Room, HotelServiceError> {
    Ok(Room {
        id: model.id,
        details: RoomDetails {
            room_type: model.room_type,
            description: model.description,
            guests: model.guests,
            size_m2: model.size_m2,
            beds: model.beds,
            price_per_night: model.price_per_night,
            rating: model.rating,
            amenities: string_list(model.amenities, "amenities")?,
            features: string_list(model.features, "features")?,
            cancellation_policy: model.cancellation_policy,
            image_urls: string_list(model.image_urls, "image_urls")?,
        },
        created_at: model.created_at,
    })
}

// ── Reservation repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReservationRepository {
    pub db: DatabaseConnection,
}

impl ReservationRepository for DbReservationRepository {
    async fn book(
        &self,
        id: Uuid,
        guest: &GuestContact,
        stay: &Stay,
    ) -> Result<BookingOutcome, HotelServiceError> {
        let outcome = self
            .db
            .transaction::<_, BookingOutcome, DbErr>(|txn| {
                let guest = guest.clone();
                let stay = stay.clone();
                Box::pin(async move {
                    // Concurrent bookings skip each other's locked rows instead
                    // of queueing on the same chamber.
                    let chamber = room_chambers::Entity::find()
                        .filter(room_chambers::Column::RoomType.eq(stay.room_type.as_str()))
                        .filter(room_chambers::Column::Status.eq(ChamberStatus::Available.as_str()))
                        .order_by_asc(room_chambers::Column::ChamberNumber)
                        .lock_with_behavior(LockType::Update, LockBehavior::SkipLocked)
                        .one(txn)
                        .await?;

                    let status = match chamber {
                        Some(_) => ReservationStatus::Pending,
                        None => ReservationStatus::NotAssigned,
                    };
                    let now = Utc::now();
                    reservations::ActiveModel {
                        id: Set(id),
                        first_name: Set(Some(guest.first_name)),
                        last_name: Set(Some(guest.last_name)),
                        email: Set(Some(guest.email)),
                        phone: Set(Some(guest.phone)),
                        check_in: Set(stay.check_in),
                        check_out: Set(stay.check_out),
                        room_type: Set(stay.room_type),
                        guests: Set(stay.guests),
                        special_requests: Set(stay.special_requests),
                        status: Set(status.as_str().to_owned()),
                        chamber_id: Set(chamber.as_ref().map(|c| c.id)),
                        chamber_number: Set(chamber.as_ref().map(|c| c.chamber_number.clone())),
                        user_id: Set(None),
                        created_at: Set(now),
                        updated_at: Set(now),
                    }
                    .insert(txn)
                    .await?;

                    if let Some(chamber) = &chamber {
                        let flipped = room_chambers::Entity::update_many()
                            .col_expr(
                                room_chambers::Column::Status,
                                Expr::value(ChamberStatus::Reserved.as_str()),
                            )
                            .filter(room_chambers::Column::Id.eq(chamber.id))
                            .filter(room_chambers::Column::Status.eq(ChamberStatus::Available.as_str()))
                            .exec(txn)
                            .await?;
                        if flipped.rows_affected != 1 {
                            return Err(DbErr::Custom(format!(
                                "chamber {} left the available pool mid-booking",
                                chamber.chamber_number
                            )));
                        }
                    }

                    Ok(BookingOutcome {
                        id,
                        status,
                        chamber_number: chamber.map(|c| c.chamber_number),
                    })
                })
            })
            .await
            .context("book reservation")?;
        Ok(outcome)
    }

    async fn create(&self, reservation: &Reservation) -> Result<(), HotelServiceError> {
        let guest = reservation.guest.clone();
        let stay = &reservation.stay;
        reservations::ActiveModel {
            id: Set(reservation.id),
            first_name: Set(guest.as_ref().map(|g| g.first_name.clone())),
            last_name: Set(guest.as_ref().map(|g| g.last_name.clone())),
            email: Set(guest.as_ref().map(|g| g.email.clone())),
            phone: Set(guest.map(|g| g.phone)),
            check_in: Set(stay.check_in),
            check_out: Set(stay.check_out),
            room_type: Set(stay.room_type.clone()),
            guests: Set(stay.guests),
            special_requests: Set(stay.special_requests.clone()),
            status: Set(reservation.status.as_str().to_owned()),
            chamber_id: Set(reservation.chamber_id),
            chamber_number: Set(reservation.chamber_number.clone()),
            user_id: Set(reservation.user_id),
            created_at: Set(reservation.created_at),
            updated_at: Set(reservation.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create reservation")?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>, HotelServiceError> {
        let model = reservations::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find reservation by id")?;
        model.map(reservation_from_model).transpose()
    }

    async fn list_all(&self, page: PageRequest) -> Result<Vec<Reservation>, HotelServiceError> {
        let models = reservations::Entity::find()
            .order_by_desc(reservations::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list reservations")?;
        models.into_iter().map(reservation_from_model).collect()
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Reservation>, HotelServiceError> {
        let models = reservations::Entity::find()
            .filter(reservations::Column::UserId.eq(user_id))
            .order_by_desc(reservations::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list reservations for user")?;
        models.into_iter().map(reservation_from_model).collect()
    }

    async fn update_stay(
        &self,
        id: Uuid,
        user_id: Uuid,
        stay: &Stay,
    ) -> Result<Option<Reservation>, HotelServiceError> {
        let Some(model) = reservations::Entity::find_by_id(id)
            .filter(reservations::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find reservation for update")?
        else {
            return Ok(None);
        };
        if model.status != ReservationStatus::Pending.as_str() {
            return Err(HotelServiceError::ReservationLocked);
        }
        let mut am = model.into_active_model();
        am.check_in = Set(stay.check_in);
        am.check_out = Set(stay.check_out);
        am.room_type = Set(stay.room_type.clone());
        am.guests = Set(stay.guests);
        am.special_requests = Set(stay.special_requests.clone());
        am.updated_at = Set(Utc::now());
        let model = am.update(&self.db).await.context("update reservation")?;
        reservation_from_model(model).map(Some)
    }

    async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> Result<bool, HotelServiceError> {
        let result = reservations::Entity::delete_many()
            .filter(reservations::Column::Id.eq(id))
            .filter(reservations::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .context("delete reservation")?;
        Ok(result.rows_affected > 0)
    }

    async fn change_status(
        &self,
        id: Uuid,
        status: ReservationStatus,
        changed_by: Uuid,
    ) -> Result<Option<StatusChange>, HotelServiceError> {
        let change = self
            .db
            .transaction::<_, Option<(reservations::Model, String, Option<String>)>, DbErr>(
                |txn| {
                    Box::pin(async move {
                        let Some(model) = reservations::Entity::find_by_id(id)
                            .lock_exclusive()
                            .one(txn)
                            .await?
                        else {
                            return Ok(None);
                        };
                        let previous = model.status.clone();
                        if previous == status.as_str() {
                            return Ok(Some((model, previous, None)));
                        }

                        let now = Utc::now();
                        let mut released = None;
                        let mut am = model.clone().into_active_model();
                        am.status = Set(status.as_str().to_owned());
                        am.updated_at = Set(now);

                        if status == ReservationStatus::Cancelled {
                            if let Some(chamber_id) = model.chamber_id {
                                room_chambers::Entity::update_many()
                                    .col_expr(
                                        room_chambers::Column::Status,
                                        Expr::value(ChamberStatus::Available.as_str()),
                                    )
                                    .filter(room_chambers::Column::Id.eq(chamber_id))
                                    .exec(txn)
                                    .await?;
                                am.chamber_id = Set(None);
                                am.chamber_number = Set(None);
                                released = model.chamber_number.clone();
                            }
                        }
                        let updated = am.update(txn).await?;

                        reservation_history::ActiveModel {
                            id: Set(Uuid::now_v7()),
                            reservation_id: Set(id),
                            field_changed: Set("status".to_owned()),
                            old_value: Set(Some(previous.clone())),
                            new_value: Set(Some(status.as_str().to_owned())),
                            changed_by: Set(changed_by),
                            changed_at: Set(now),
                        }
                        .insert(txn)
                        .await?;

                        Ok(Some((updated, previous, released)))
                    })
                },
            )
            .await
            .context("change reservation status")?;

        let Some((model, previous, released_chamber)) = change else {
            return Ok(None);
        };
        let previous = previous
            .parse::<ReservationStatus>()
            .with_context(|| format!("reservation {id} carried an unknown status"))?;
        Ok(Some(StatusChange {
            reservation: reservation_from_model(model)?,
            previous,
            released_chamber,
        }))
    }

    async fn list_history(
        &self,
        page: PageRequest,
    ) -> Result<Vec<HistoryEntry>, HotelServiceError> {
        let models = reservation_history::Entity::find()
            .order_by_desc(reservation_history::Column::ChangedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list reservation history")?;
        Ok(models
            .into_iter()
            .map(|m| HistoryEntry {
                id: m.id,
                reservation_id: m.reservation_id,
                field_changed: m.field_changed,
                old_value: m.old_value,
                new_value: m.new_value,
                changed_by: m.changed_by,
                changed_at: m.changed_at,
            })
            .collect())
    }
}

fn reservation_from_model(model: reservations::Model) -> Result<Reservation, HotelServiceError> {
    let status = model
        .status
        .parse::<ReservationStatus>()
        .with_context(|| format!("reservation {} carries an unknown status", model.id))?;
    let guest = match (model.first_name, model.last_name, model.email, model.phone) {
        (Some(first_name), Some(last_name), Some(email), Some(phone)) => Some(GuestContact {
            first_name,
            last_name,
            email,
            phone,
        }),
        _ => None,
    };
    Ok(Reservation {
        id: model.id,
        guest,
        stay: Stay {
            check_in: model.check_in,
            check_out: model.check_out,
            room_type: model.room_type,
            guests: model.guests,
            special_requests: model.special_requests,
        },
        status,
        chamber_id: model.chamber_id,
        chamber_number: model.chamber_number,
        user_id: model.user_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Dashboard ────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDashboardRepository {
    pub db: DatabaseConnection,
}

impl DbDashboardRepository {
    async fn tasks_with(&self, status: TaskStatus) -> Result<u64, HotelServiceError> {
        Ok(tasks::Entity::find()
            .filter(tasks::Column::Status.eq(status.as_str()))
            .count(&self.db)
            .await
            .with_context(|| format!("count {status} tasks"))?)
    }
}

impl DashboardRepository for DbDashboardRepository {
    async fn counts(&self) -> Result<DashboardCounts, HotelServiceError> {
        let employees = employees::Entity::find()
            .count(&self.db)
            .await
            .context("count employees")?;
        let stock_items = stock_items::Entity::find()
            .count(&self.db)
            .await
            .context("count stock items")?;
        let low_stock_items = stock_items::Entity::find()
            .filter(stock_items::Column::Quantity.lt(LOW_STOCK_THRESHOLD))
            .count(&self.db)
            .await
            .context("count low stock items")?;
        Ok(DashboardCounts {
            employees,
            tasks: TaskCounts {
                pending: self.tasks_with(TaskStatus::Pending).await?,
                in_progress: self.tasks_with(TaskStatus::InProgress).await?,
                completed: self.tasks_with(TaskStatus::Completed).await?,
            },
            stock_items,
            low_stock_items,
        })
    }
}

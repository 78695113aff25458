//! SeaORM adapter for the contact store.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entities::contacts;
use crate::infra::db_errors::CONTACT_NOT_FOUND_PREFIX;

pub mod dto;

pub use dto::{ContactCreate, ContactUpdate};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

fn contact_not_found(id: i64) -> sea_orm::DbErr {
    sea_orm::DbErr::Custom(format!("{CONTACT_NOT_FOUND_PREFIX}{id}"))
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ContactCreate,
) -> Result<contacts::Model, sea_orm::DbErr> {
    let active = contacts::ActiveModel {
        id: NotSet,
        first_name: Set(dto.first_name),
        last_name: Set(dto.last_name),
        phone: Set(dto.phone),
        email: Set(dto.email),
    };
    active.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<contacts::Model>, sea_orm::DbErr> {
    contacts::Entity::find_by_id(id).one(conn).await
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ContactUpdate,
) -> Result<contacts::Model, sea_orm::DbErr> {
    let existing = contacts::Entity::find_by_id(dto.id)
        .one(conn)
        .await?
        .ok_or_else(|| contact_not_found(dto.id))?;

    let mut active: contacts::ActiveModel = existing.into();
    active.first_name = Set(dto.first_name);
    active.last_name = Set(dto.last_name);
    active.phone = Set(dto.phone);
    active.email = Set(dto.email);
    active.update(conn).await
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), sea_orm::DbErr> {
    let result = contacts::Entity::delete_by_id(id).exec(conn).await?;
    if result.rows_affected == 0 {
        return Err(contact_not_found(id));
    }
    Ok(())
}

/// One page of contacts ordered by id, skipping `offset` rows.
pub async fn list_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<Vec<contacts::Model>, sea_orm::DbErr> {
    contacts::Entity::find()
        .order_by_asc(contacts::Column::Id)
        .offset(offset)
        .limit(limit)
        .all(conn)
        .await
}

/// Substring match on any of the four text columns.
pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
) -> Result<Vec<contacts::Model>, sea_orm::DbErr> {
    let any_field = Condition::any()
        .add(contacts::Column::FirstName.contains(term))
        .add(contacts::Column::LastName.contains(term))
        .add(contacts::Column::Phone.contains(term))
        .add(contacts::Column::Email.contains(term));

    contacts::Entity::find()
        .filter(any_field)
        .order_by_asc(contacts::Column::Id)
        .all(conn)
        .await
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    contacts::Entity::find().count(conn).await
}

pub async fn count_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, sea_orm::DbErr> {
    contacts::Entity::find()
        .filter(contacts::Column::Id.eq(id))
        .count(conn)
        .await
}

pub async fn count_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
    exclude_id: Option<i64>,
) -> Result<u64, sea_orm::DbErr> {
    let mut query = contacts::Entity::find().filter(contacts::Column::Email.eq(email));
    if let Some(id) = exclude_id {
        query = query.filter(contacts::Column::Id.ne(id));
    }
    query.count(conn).await
}

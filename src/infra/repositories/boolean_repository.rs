//! Boolean repository: the storage-access contract and its SeaORM-backed
//! implementation.
//!
//! The contract keeps "record missing" distinguishable from "storage
//! unavailable" by reporting absence as `AppError::NotFound` and every other
//! storage failure as `AppError::Database`, so handlers can map outcomes to
//! status codes without inspecting engine-specific error payloads.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};
use uuid::Uuid;

use super::entities::boolean::{ActiveModel, Entity as BooleanEntity};
use crate::domain::{Boolean, BooleanInput};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Boolean repository trait for dependency injection.
///
/// Exactly two kinds of implementers are intended: the storage-backed
/// `BooleanStore` and test doubles.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BooleanRepository: Send + Sync {
    /// Fetch a record by identifier. No side effects.
    async fn get(&self, id: Uuid) -> AppResult<Boolean>;

    /// Mint a new identifier, persist the full record, and return the
    /// minted identifier. Never reports `NotFound`.
    async fn create(&self, input: BooleanInput) -> AppResult<Uuid>;

    /// Replace `key` and `value` of the record at `id`. The row identity is
    /// forced to `id` regardless of anything the caller supplied.
    async fn update(&self, id: Uuid, input: BooleanInput) -> AppResult<()>;

    /// Remove the record at `id`.
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of BooleanRepository over SeaORM
pub struct BooleanStore {
    db: DatabaseConnection,
}

impl BooleanStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BooleanRepository for BooleanStore {
    async fn get(&self, id: Uuid) -> AppResult<Boolean> {
        let result = BooleanEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(Boolean::from).ok_or(AppError::NotFound)
    }

    async fn create(&self, input: BooleanInput) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        let active_model = ActiveModel {
            id: Set(id),
            key: Set(input.key),
            value: Set(input.value),
        };

        BooleanEntity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(id)
    }

    async fn update(&self, id: Uuid, input: BooleanInput) -> AppResult<()> {
        // Single UPDATE keyed on the path id; the engine reports whether a
        // row was touched, so absence is detected without a prior read that
        // could race with a concurrent delete.
        let active_model = ActiveModel {
            id: Set(id),
            key: Set(input.key),
            value: Set(input.value),
        };

        match BooleanEntity::update(active_model).exec(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(AppError::NotFound),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = BooleanEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

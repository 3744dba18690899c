use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    models::{Field, Holiday, HolidayPayload, PaginationEnvelope},
    services::{pagination, patch, validation, PageRequest, Profile},
};

/// Orchestrates the five holiday operations over the entity store.
///
/// Stateless per call; every request gets validated, routed through the
/// store and mapped back to a typed outcome.
#[derive(Clone)]
pub struct HolidayService {
    db: Database,
}

impl HolidayService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Create a new holiday; the store assigns the id.
    pub async fn create(&self, payload: HolidayPayload) -> ApiResult<Holiday> {
        validation::validate(&payload, Profile::Create)?;

        // Validation guarantees a non-null name; anything else is an
        // unrecoverable payload state.
        let name = match payload.name {
            Field::Value(name) => name,
            _ => return Err(ApiError::validation_generic("Unknown validation error")),
        };
        let date = payload.date.value();

        let created = self.db.create_holiday(&name, date).await?;
        tracing::debug!("created holiday {}", created.id);

        Ok(created)
    }

    /// List holidays as one page wrapped in the pagination envelope.
    pub async fn find_all(&self, request: PageRequest) -> ApiResult<PaginationEnvelope<Holiday>> {
        let order_by = pagination::order_by_clause(&request.sort)?;
        let (limit, offset) = request.limit_offset();

        let (items, total) = self.db.find_holidays_page(&order_by, limit, offset).await?;

        Ok(pagination::envelope(items, total, &request))
    }

    pub async fn get(&self, id: i64) -> ApiResult<Holiday> {
        self.db
            .get_holiday(id)
            .await?
            .ok_or_else(ApiError::resource_not_found)
    }

    /// Apply a partial update under an exclusive row lock.
    ///
    /// The lock is held from `get_holiday_for_update` until commit, so two
    /// concurrent patches on the same id serialize: the second one reads the
    /// first one's committed row as its base and neither update is lost.
    /// Any error after lock acquisition drops the transaction, which rolls
    /// it back and releases the lock.
    pub async fn patch(&self, id: i64, payload: HolidayPayload) -> ApiResult<Holiday> {
        validation::validate(&payload, Profile::Patch)?;

        let mut tx = self.db.pool().begin().await?;

        let existing = self
            .db
            .get_holiday_for_update(&mut tx, id)
            .await?
            .ok_or_else(ApiError::resource_not_found)?;

        let merged = patch::merge(existing, &payload);
        self.db.save_holiday(&mut tx, &merged).await?;

        tx.commit().await?;
        tracing::debug!("patched holiday {}", id);

        Ok(merged)
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        if !self.db.holiday_exists(id).await? {
            return Err(ApiError::resource_not_found());
        }

        self.db.delete_holiday(id).await?;
        tracing::debug!("deleted holiday {}", id);

        Ok(())
    }
}

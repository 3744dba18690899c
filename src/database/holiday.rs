use chrono::NaiveDate;
use sqlx::any::AnyRow;
use sqlx::{Any, Row, Transaction};

use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    models::Holiday,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn date_to_column(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format(DATE_FORMAT).to_string())
}

fn holiday_from_row(row: &AnyRow) -> ApiResult<Holiday> {
    let id: i64 = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    let date: Option<String> = row.try_get("date")?;

    let date = date
        .map(|d| {
            NaiveDate::parse_from_str(&d, DATE_FORMAT)
                .map_err(|e| ApiError::Internal(format!("Corrupt date column for id {}: {}", id, e)))
        })
        .transpose()?;

    Ok(Holiday { id, name, date })
}

impl Database {
    /// Insert a new holiday; the store assigns the id.
    pub async fn create_holiday(&self, name: &str, date: Option<NaiveDate>) -> ApiResult<Holiday> {
        let result = sqlx::query("INSERT INTO holidays (name, date) VALUES (?, ?)")
            .bind(name)
            .bind(date_to_column(date))
            .execute(self.pool())
            .await?;

        let id = result
            .last_insert_id()
            .ok_or_else(|| ApiError::Internal("Insert did not return a row id".to_string()))?;

        Ok(Holiday {
            id,
            name: name.to_string(),
            date,
        })
    }

    /// Get a holiday by id.
    pub async fn get_holiday(&self, id: i64) -> ApiResult<Option<Holiday>> {
        let row = sqlx::query("SELECT id, name, date FROM holidays WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        row.as_ref().map(holiday_from_row).transpose()
    }

    /// Read a holiday inside `tx` with an exclusive row lock held until the
    /// transaction commits or rolls back.
    ///
    /// The lock is taken with a self-assignment UPDATE rather than
    /// `SELECT ... FOR UPDATE`, which SQLite does not support: the UPDATE
    /// acquires SQLite's write lock and a per-row lock on the server
    /// backends, so a concurrent patch on the same id blocks here until the
    /// first transaction completes. The UPDATE is lock acquisition only;
    /// MySQL counts changed rows rather than matched rows, so existence
    /// comes from the SELECT.
    pub async fn get_holiday_for_update(
        &self,
        tx: &mut Transaction<'_, Any>,
        id: i64,
    ) -> ApiResult<Option<Holiday>> {
        sqlx::query("UPDATE holidays SET id = id WHERE id = ?")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        let row = sqlx::query("SELECT id, name, date FROM holidays WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;

        row.as_ref().map(holiday_from_row).transpose()
    }

    /// Fetch one page of holidays plus the total row count.
    ///
    /// `order_by` must already be validated against the sortable column set;
    /// it is interpolated, not bound. `limit` of None means unpaged.
    pub async fn find_holidays_page(
        &self,
        order_by: &str,
        limit: Option<i64>,
        offset: i64,
    ) -> ApiResult<(Vec<Holiday>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM holidays")
            .fetch_one(self.pool())
            .await?;

        let sql = format!("SELECT id, name, date FROM holidays ORDER BY {}", order_by);

        let rows = match limit {
            Some(limit) => {
                sqlx::query(&format!("{} LIMIT ? OFFSET ?", sql))
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(self.pool())
                    .await?
            }
            None => sqlx::query(&sql).fetch_all(self.pool()).await?,
        };

        let items = rows
            .iter()
            .map(holiday_from_row)
            .collect::<ApiResult<Vec<_>>>()?;

        Ok((items, total))
    }

    pub async fn holiday_exists(&self, id: i64) -> ApiResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM holidays WHERE id = ?")
            .bind(id)
            .fetch_one(self.pool())
            .await?;

        Ok(count > 0)
    }

    pub async fn delete_holiday(&self, id: i64) -> ApiResult<()> {
        sqlx::query("DELETE FROM holidays WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(())
    }

    /// Upsert a holiday by id inside `tx`.
    ///
    /// The update-or-insert decision is made from row existence, not from
    /// the UPDATE's affected-row count: MySQL reports 0 for a
    /// value-identical UPDATE, which would turn a no-op save into a
    /// duplicate-key INSERT.
    pub async fn save_holiday(
        &self,
        tx: &mut Transaction<'_, Any>,
        holiday: &Holiday,
    ) -> ApiResult<()> {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM holidays WHERE id = ?")
            .bind(holiday.id)
            .fetch_one(&mut **tx)
            .await?;

        if existing > 0 {
            sqlx::query("UPDATE holidays SET name = ?, date = ? WHERE id = ?")
                .bind(&holiday.name)
                .bind(date_to_column(holiday.date))
                .bind(holiday.id)
                .execute(&mut **tx)
                .await?;
        } else {
            sqlx::query("INSERT INTO holidays (id, name, date) VALUES (?, ?, ?)")
                .bind(holiday.id)
                .bind(&holiday.name)
                .bind(date_to_column(holiday.date))
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }
}

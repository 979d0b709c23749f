//! `SQLite` implementation of [`SdCardRepository`].
//!
//! Space counters are stored as signed integers (`SQLite` has no unsigned
//! type); values beyond `i64::MAX` bytes are clamped on write.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use phonehub_app::ports::SdCardRepository;
use phonehub_domain::error::PhoneHubError;
use phonehub_domain::id::{PhoneId, SdCardId};
use phonehub_domain::sd::{SdCard, SdInfo};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`SdCard`].
struct Wrapper(SdCard);

fn space_to_db(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn space_from_db(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("sd_card_id")?;
        let phone_id: Option<i64> = row.try_get("phone_id")?;
        let total: i64 = row.try_get("total_space")?;
        let used: i64 = row.try_get("used_space")?;
        let free: i64 = row.try_get("free_space")?;

        Ok(Self(SdCard {
            id: SdCardId::from_i64(id),
            phone_id: phone_id.map(PhoneId::from_i64),
            manufacturer: row.try_get("manufacturer")?,
            serial_no: row.try_get("serial_no")?,
            total_space: space_from_db(total),
            used_space: space_from_db(used),
            free_space: space_from_db(free),
        }))
    }
}

const DETACH: &str = "UPDATE sd_cards SET phone_id = NULL WHERE phone_id = ?";
const UPSERT: &str = "INSERT INTO sd_cards (phone_id, manufacturer, serial_no, total_space, \
     used_space, free_space) VALUES (?, ?, ?, ?, ?, ?) \
     ON CONFLICT (serial_no) DO UPDATE SET \
     phone_id = excluded.phone_id, \
     manufacturer = excluded.manufacturer, \
     total_space = excluded.total_space, \
     used_space = excluded.used_space, \
     free_space = excluded.free_space \
     RETURNING sd_card_id, phone_id, manufacturer, serial_no, total_space, used_space, free_space";
const SELECT_ALL: &str = "SELECT * FROM sd_cards ORDER BY sd_card_id";

/// `SQLite`-backed SD card repository.
pub struct SqliteSdCardRepository {
    pool: SqlitePool,
}

impl SqliteSdCardRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl SdCardRepository for SqliteSdCardRepository {
    fn reconcile(
        &self,
        phone_id: PhoneId,
        slots: Vec<SdInfo>,
    ) -> impl Future<Output = Result<Vec<SdCard>, PhoneHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            sqlx::query(DETACH)
                .bind(phone_id.as_i64())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            let mut linked = Vec::with_capacity(slots.len());
            for info in slots {
                let row: Wrapper = sqlx::query_as(UPSERT)
                    .bind(phone_id.as_i64())
                    .bind(&info.manufacturer)
                    .bind(&info.serial_no)
                    .bind(space_to_db(info.total_space))
                    .bind(space_to_db(info.used_space))
                    .bind(space_to_db(info.free_space))
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(StorageError::from)?;
                linked.push(row.0);
            }

            tx.commit().await.map_err(StorageError::from)?;
            Ok(linked)
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<SdCard>, PhoneHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

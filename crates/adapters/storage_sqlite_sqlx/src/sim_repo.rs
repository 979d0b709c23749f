//! `SQLite` implementation of [`SimSlotRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use phonehub_app::ports::SimSlotRepository;
use phonehub_domain::error::PhoneHubError;
use phonehub_domain::id::{PhoneId, SimSlotId};
use phonehub_domain::sim::{SimInfo, SimSlot};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`SimSlot`].
struct Wrapper(SimSlot);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("sim_card_id")?;
        let phone_id: Option<i64> = row.try_get("phone_id")?;

        Ok(Self(SimSlot {
            id: SimSlotId::from_i64(id),
            phone_id: phone_id.map(PhoneId::from_i64),
            phone_number: row.try_get("phone_number")?,
            operator: row.try_get("operator")?,
        }))
    }
}

const DETACH: &str = "UPDATE sim_cards SET phone_id = NULL WHERE phone_id = ?";
const UPSERT: &str = "INSERT INTO sim_cards (phone_id, phone_number, operator) VALUES (?, ?, ?) \
     ON CONFLICT (phone_number) DO UPDATE SET \
     phone_id = excluded.phone_id, \
     operator = excluded.operator \
     RETURNING sim_card_id, phone_id, phone_number, operator";
const SELECT_ALL: &str = "SELECT * FROM sim_cards ORDER BY sim_card_id";

/// `SQLite`-backed SIM slot repository.
pub struct SqliteSimSlotRepository {
    pool: SqlitePool,
}

impl SqliteSimSlotRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl SimSlotRepository for SqliteSimSlotRepository {
    fn reconcile(
        &self,
        phone_id: PhoneId,
        slots: Vec<SimInfo>,
    ) -> impl Future<Output = Result<Vec<SimSlot>, PhoneHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            // Detach and relink inside one transaction so a concurrent
            // reconcile never observes a half-detached state.
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
                    .bind(&info.phone_number)
                    .bind(&info.operator)
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(StorageError::from)?;
                linked.push(row.0);
            }

            tx.commit().await.map_err(StorageError::from)?;
            Ok(linked)
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<SimSlot>, PhoneHubError>> + Send {
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

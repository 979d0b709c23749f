//! `SQLite` implementation of [`PhoneRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use phonehub_app::ports::PhoneRepository;
use phonehub_domain::error::PhoneHubError;
use phonehub_domain::id::PhoneId;
use phonehub_domain::phone::{Phone, PhoneInfo};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Phone`].
struct Wrapper(Phone);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Phone> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("phone_id")?;
        let archs_json: String = row.try_get("supported_archs")?;
        let supported_archs: Vec<String> = serde_json::from_str(&archs_json)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Phone {
            id: PhoneId::from_i64(id),
            info: PhoneInfo {
                manufacturer: row.try_get("manufacturer")?,
                model_tag: row.try_get("model_tag")?,
                model_number: row.try_get("model_number")?,
                os_version: row.try_get("os_version")?,
                api_version: row.try_get("api_version")?,
                cpu: row.try_get("cpu")?,
                firmware: row.try_get("firmware")?,
                bootloader: row.try_get("bootloader")?,
                supported_archs,
                sim_slots: row.try_get("sim_slots")?,
                sd_slots: row.try_get("sd_slots")?,
            },
        }))
    }
}

const UPSERT: &str = "INSERT INTO phones (manufacturer, model_tag, model_number, os_version, \
     api_version, cpu, firmware, bootloader, supported_archs, sim_slots, sd_slots) \
     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
     ON CONFLICT (model_tag) DO UPDATE SET \
     manufacturer = excluded.manufacturer, \
     model_number = excluded.model_number, \
     os_version = excluded.os_version, \
     api_version = excluded.api_version, \
     cpu = excluded.cpu, \
     firmware = excluded.firmware, \
     bootloader = excluded.bootloader, \
     supported_archs = excluded.supported_archs, \
     sim_slots = excluded.sim_slots, \
     sd_slots = excluded.sd_slots \
     RETURNING phone_id";
const SELECT_ID_BY_TAG: &str = "SELECT phone_id FROM phones WHERE model_tag = ?";
const SELECT_BY_TAG: &str = "SELECT * FROM phones WHERE model_tag = ? LIMIT 1";
const SELECT_ALL: &str = "SELECT * FROM phones ORDER BY phone_id";

/// `SQLite`-backed phone repository.
pub struct SqlitePhoneRepository {
    pool: SqlitePool,
}

impl SqlitePhoneRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PhoneRepository for SqlitePhoneRepository {
    fn upsert(
        &self,
        info: PhoneInfo,
    ) -> impl Future<Output = Result<(Phone, bool), PhoneHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            // Advisory pre-select for the created flag only; the upsert
            // below is the single atomic arbiter of row identity.
            let existing: Option<(i64,)> = sqlx::query_as(SELECT_ID_BY_TAG)
                .bind(&info.model_tag)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            let archs_json =
                serde_json::to_string(&info.supported_archs).map_err(StorageError::from)?;

            let row = sqlx::query(UPSERT)
                .bind(&info.manufacturer)
                .bind(&info.model_tag)
                .bind(&info.model_number)
                .bind(&info.os_version)
                .bind(&info.api_version)
                .bind(&info.cpu)
                .bind(&info.firmware)
                .bind(&info.bootloader)
                .bind(&archs_json)
                .bind(info.sim_slots)
                .bind(info.sd_slots)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            let id: i64 = row.try_get("phone_id").map_err(StorageError::from)?;

            Ok((
                Phone {
                    id: PhoneId::from_i64(id),
                    info,
                },
                existing.is_none(),
            ))
        }
    }

    fn find_by_model_tag(
        &self,
        model_tag: &str,
    ) -> impl Future<Output = Result<Option<Phone>, PhoneHubError>> + Send {
        let pool = self.pool.clone();
        let model_tag = model_tag.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_TAG)
                .bind(&model_tag)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Phone>, PhoneHubError>> + Send {
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

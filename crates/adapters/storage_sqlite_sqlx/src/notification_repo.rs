//! `SQLite` implementation of [`NotificationRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use phonehub_app::ports::NotificationRepository;
use phonehub_domain::error::PhoneHubError;
use phonehub_domain::id::NotificationId;
use phonehub_domain::notification::{Notification, NotificationInfo};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Notification`].
struct Wrapper(Notification);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("notification_id")?;

        Ok(Self(Notification {
            id: NotificationId::from_i64(id),
            info: NotificationInfo {
                model_number: row.try_get("model_number")?,
                source: row.try_get("source")?,
                sender: row.try_get("sender")?,
                body: row.try_get("body")?,
                timestamp: row.try_get("timestamp")?,
            },
        }))
    }
}

const INSERT: &str = "INSERT INTO notifications (model_number, source, sender, body, timestamp) \
     VALUES (?, ?, ?, ?, ?) RETURNING notification_id";
const SELECT_BY_MODEL: &str =
    "SELECT * FROM notifications WHERE model_number = ? ORDER BY timestamp DESC";

/// `SQLite`-backed notification repository.
pub struct SqliteNotificationRepository {
    pool: SqlitePool,
}

impl SqliteNotificationRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl NotificationRepository for SqliteNotificationRepository {
    fn insert(
        &self,
        info: NotificationInfo,
    ) -> impl Future<Output = Result<Notification, PhoneHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row = sqlx::query(INSERT)
                .bind(&info.model_number)
                .bind(&info.source)
                .bind(&info.sender)
                .bind(&info.body)
                .bind(info.timestamp)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            let id: i64 = row.try_get("notification_id").map_err(StorageError::from)?;

            Ok(Notification {
                id: NotificationId::from_i64(id),
                info,
            })
        }
    }

    fn find_by_model_number(
        &self,
        model_number: &str,
    ) -> impl Future<Output = Result<Vec<Notification>, PhoneHubError>> + Send {
        let pool = self.pool.clone();
        let model_number = model_number.to_string();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_MODEL)
                .bind(&model_number)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

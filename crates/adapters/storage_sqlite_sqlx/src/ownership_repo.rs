//! `SQLite` implementation of [`OwnershipRepository`].

use std::future::Future;

use sqlx::{Row, SqlitePool};

use phonehub_app::ports::OwnershipRepository;
use phonehub_domain::account::{AccountWithPhones, Profile};
use phonehub_domain::error::{NotFoundError, PhoneHubError};
use phonehub_domain::id::{AccountId, PhoneId};

use crate::error::{StorageError, is_foreign_key_violation};

const LINK: &str = "INSERT INTO ownership_links (phone_id, account_id) VALUES (?, ?) \
     ON CONFLICT (phone_id) DO UPDATE SET account_id = excluded.account_id";
const SELECT_JOINED: &str = "SELECT a.account_id, a.name, a.email, a.code, l.phone_id \
     FROM accounts a \
     JOIN ownership_links l ON l.account_id = a.account_id \
     ORDER BY a.account_id, l.phone_id";

/// `SQLite`-backed ownership link repository.
pub struct SqliteOwnershipRepository {
    pool: SqlitePool,
}

impl SqliteOwnershipRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl OwnershipRepository for SqliteOwnershipRepository {
    fn link(
        &self,
        account_id: AccountId,
        phone_id: PhoneId,
    ) -> impl Future<Output = Result<(), PhoneHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(LINK)
                .bind(phone_id.as_i64())
                .bind(account_id.as_i64())
                .execute(&pool)
                .await;

            match result {
                Ok(_) => Ok(()),
                // Foreign keys are enforced, so a dangling reference means
                // the caller passed an id that does not exist.
                Err(err) if is_foreign_key_violation(&err) => Err(NotFoundError {
                    entity: "Link target",
                    key: format!("account {account_id}, phone {phone_id}"),
                }
                .into()),
                Err(err) => Err(StorageError::from(err).into()),
            }
        }
    }

    fn accounts_with_phones(
        &self,
    ) -> impl Future<Output = Result<Vec<AccountWithPhones>, PhoneHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows = sqlx::query(SELECT_JOINED)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            // Rows arrive ordered by account, so grouping is a single pass.
            let mut result: Vec<AccountWithPhones> = Vec::new();
            let mut current: Option<(i64, AccountWithPhones)> = None;
            for row in rows {
                let account_id: i64 = row.try_get("account_id").map_err(StorageError::from)?;
                let phone_id: i64 = row.try_get("phone_id").map_err(StorageError::from)?;

                match &mut current {
                    Some((id, entry)) if *id == account_id => {
                        entry.phone_ids.push(PhoneId::from_i64(phone_id));
                    }
                    _ => {
                        if let Some((_, entry)) = current.take() {
                            result.push(entry);
                        }
                        current = Some((
                            account_id,
                            AccountWithPhones {
                                profile: Profile {
                                    name: row.try_get("name").map_err(StorageError::from)?,
                                    email: row.try_get("email").map_err(StorageError::from)?,
                                    code: row.try_get("code").map_err(StorageError::from)?,
                                },
                                phone_ids: vec![PhoneId::from_i64(phone_id)],
                            },
                        ));
                    }
                }
            }
            if let Some((_, entry)) = current.take() {
                result.push(entry);
            }

            Ok(result)
        }
    }
}

//! `SQLite` implementation of [`AccountRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use phonehub_app::ports::AccountRepository;
use phonehub_domain::account::{Account, NewAccount};
use phonehub_domain::error::{ConflictError, PhoneHubError};
use phonehub_domain::id::AccountId;

use crate::error::{StorageError, is_unique_violation};

/// Wrapper for converting database rows into domain [`Account`].
struct Wrapper(Account);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Account> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("account_id")?;

        Ok(Self(Account {
            id: AccountId::from_i64(id),
            name: row.try_get("name")?,
            code: row.try_get("code")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            role: row.try_get("role")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO accounts (name, code, email, password_hash, role) \
     VALUES (?, ?, ?, ?, ?) RETURNING account_id";
const SELECT_BY_EMAIL: &str = "SELECT * FROM accounts WHERE email = ? LIMIT 1";
const SELECT_BY_CODE: &str = "SELECT * FROM accounts WHERE code = ? LIMIT 1";
const CODE_EXISTS: &str = "SELECT EXISTS (SELECT 1 FROM accounts WHERE code = ?)";

/// `SQLite`-backed account repository.
pub struct SqliteAccountRepository {
    pool: SqlitePool,
}

impl SqliteAccountRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for SqliteAccountRepository {
    fn insert(
        &self,
        account: NewAccount,
    ) -> impl Future<Output = Result<Account, PhoneHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&account.name)
                .bind(account.code)
                .bind(&account.email)
                .bind(&account.password_hash)
                .bind(&account.role)
                .fetch_one(&pool)
                .await;

            let row = match result {
                Ok(row) => row,
                // The constraint is the arbiter: name the violated column
                // so the registration loop can redraw codes.
                Err(err) if is_unique_violation(&err, "accounts.email") => {
                    return Err(ConflictError {
                        entity: "Account",
                        constraint: "email",
                    }
                    .into());
                }
                Err(err) if is_unique_violation(&err, "accounts.code") => {
                    return Err(ConflictError {
                        entity: "Account",
                        constraint: "code",
                    }
                    .into());
                }
                Err(err) => return Err(StorageError::from(err).into()),
            };

            let id: i64 = row.try_get("account_id").map_err(StorageError::from)?;

            Ok(Account {
                id: AccountId::from_i64(id),
                name: account.name,
                code: account.code,
                email: account.email,
                password_hash: account.password_hash,
                role: account.role,
            })
        }
    }

    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Account>, PhoneHubError>> + Send {
        let pool = self.pool.clone();
        let email = email.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_EMAIL)
                .bind(&email)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn find_by_code(
        &self,
        code: u32,
    ) -> impl Future<Output = Result<Option<Account>, PhoneHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_CODE)
                .bind(code)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn code_exists(&self, code: u32) -> impl Future<Output = Result<bool, PhoneHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let (exists,): (bool,) = sqlx::query_as(CODE_EXISTS)
                .bind(code)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(exists)
        }
    }
}

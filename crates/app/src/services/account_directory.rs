//! Account directory — registration and login verification.

use phonehub_domain::account::{Account, NewAccount, Registration, ROLE_USER};
use phonehub_domain::error::PhoneHubError;

use crate::ports::AccountRepository;
use crate::services::code_allocator::CodeAllocator;
use crate::services::credential::CredentialService;

/// Application service owning account records.
pub struct AccountDirectory<R> {
    repo: R,
    credentials: CredentialService,
    allocator: CodeAllocator,
}

impl<R: AccountRepository> AccountDirectory<R> {
    /// Create a directory backed by the given repository.
    pub fn new(repo: R, allocator: CodeAllocator) -> Self {
        Self {
            repo,
            credentials: CredentialService,
            allocator,
        }
    }

    /// Register a new account.
    ///
    /// The password is hashed once, then the directory loops: draw a code
    /// and attempt a constrained insert. A uniqueness conflict on the code
    /// column means another writer took it between draw and insert, so the
    /// draw is retried; a conflict on email is terminal. The loop shares
    /// the allocator's attempt budget.
    ///
    /// # Errors
    ///
    /// [`PhoneHubError::Validation`] for blank fields,
    /// [`PhoneHubError::Conflict`] for a taken email,
    /// [`PhoneHubError::CodeSpaceExhausted`] past the attempt budget, or a
    /// storage error.
    #[tracing::instrument(skip(self, registration), fields(email = %registration.email))]
    pub async fn register(&self, registration: Registration) -> Result<Account, PhoneHubError> {
        registration.validate()?;
        let password_hash = self.credentials.hash(&registration.password)?;

        for _ in 0..self.allocator.max_attempts() {
            let code = self.allocator.allocate(&self.repo).await?;
            let attempt = self
                .repo
                .insert(NewAccount {
                    name: registration.name.clone(),
                    code,
                    email: registration.email.clone(),
                    password_hash: password_hash.clone(),
                    role: ROLE_USER.to_string(),
                })
                .await;
            match attempt {
                Err(err) if err.is_conflict_on("code") => continue,
                other => return other,
            }
        }
        Err(PhoneHubError::CodeSpaceExhausted)
    }

    /// Verify a login attempt, returning the account on success.
    ///
    /// # Errors
    ///
    /// Fails with [`PhoneHubError::Unauthorized`] whether the email is
    /// unknown or the password wrong — callers never learn which.
    #[tracing::instrument(skip(self, password))]
    pub async fn verify_login(&self, email: &str, password: &str) -> Result<Account, PhoneHubError> {
        let Some(account) = self.repo.find_by_email(email).await? else {
            return Err(PhoneHubError::Unauthorized);
        };
        if !self.credentials.verify(password, &account.password_hash) {
            return Err(PhoneHubError::Unauthorized);
        }
        Ok(account)
    }

    /// Resolve an account by its registration code.
    ///
    /// # Errors
    ///
    /// [`PhoneHubError::NotFound`] when no account holds `code`.
    pub async fn find_by_code(&self, code: u32) -> Result<Account, PhoneHubError> {
        self.repo.find_by_code(code).await?.ok_or_else(|| {
            phonehub_domain::error::NotFoundError {
                entity: "Account",
                key: code.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::sync::Mutex;

    use phonehub_domain::error::{ConflictError, ValidationError};
    use phonehub_domain::id::AccountId;

    use super::*;

    #[derive(Default)]
    struct InMemoryAccountRepo {
        store: Mutex<Vec<Account>>,
    }

    impl AccountRepository for InMemoryAccountRepo {
        fn insert(
            &self,
            account: NewAccount,
        ) -> impl Future<Output = Result<Account, PhoneHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result = if store.iter().any(|a| a.email == account.email) {
                Err(ConflictError {
                    entity: "Account",
                    constraint: "email",
                }
                .into())
            } else if store.iter().any(|a| a.code == account.code) {
                Err(ConflictError {
                    entity: "Account",
                    constraint: "code",
                }
                .into())
            } else {
                let stored = Account {
                    id: AccountId::from_i64(store.len() as i64 + 1),
                    name: account.name,
                    code: account.code,
                    email: account.email,
                    password_hash: account.password_hash,
                    role: account.role,
                };
                store.push(stored.clone());
                Ok(stored)
            };
            async { result }
        }

        fn find_by_email(
            &self,
            email: &str,
        ) -> impl Future<Output = Result<Option<Account>, PhoneHubError>> + Send {
            let result = self
                .store
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.email == email)
                .cloned();
            async { Ok(result) }
        }

        fn find_by_code(
            &self,
            code: u32,
        ) -> impl Future<Output = Result<Option<Account>, PhoneHubError>> + Send {
            let result = self
                .store
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.code == code)
                .cloned();
            async { Ok(result) }
        }

        fn code_exists(
            &self,
            code: u32,
        ) -> impl Future<Output = Result<bool, PhoneHubError>> + Send {
            let exists = self.store.lock().unwrap().iter().any(|a| a.code == code);
            async move { Ok(exists) }
        }
    }

    fn directory() -> AccountDirectory<InMemoryAccountRepo> {
        AccountDirectory::new(InMemoryAccountRepo::default(), CodeAllocator::default())
    }

    fn registration(email: &str) -> Registration {
        Registration {
            name: "A".to_string(),
            email: email.to_string(),
            password: "pw".to_string(),
        }
    }

    #[tokio::test]
    async fn should_register_account_with_code_and_hash() {
        let dir = directory();
        let account = dir.register(registration("a@x.com")).await.unwrap();
        assert!((10_000..=99_999).contains(&account.code));
        assert_eq!(account.role, ROLE_USER);
        assert_ne!(account.password_hash, "pw");
    }

    #[tokio::test]
    async fn should_reject_duplicate_email() {
        let dir = directory();
        dir.register(registration("a@x.com")).await.unwrap();
        let result = dir.register(registration("a@x.com")).await;
        assert!(matches!(result, Err(ref err) if err.is_conflict_on("email")));
    }

    #[tokio::test]
    async fn should_reject_blank_name() {
        let dir = directory();
        let mut reg = registration("a@x.com");
        reg.name = String::new();
        assert!(matches!(
            dir.register(reg).await,
            Err(PhoneHubError::Validation(ValidationError::EmptyName))
        ));
    }

    #[tokio::test]
    async fn should_verify_registered_credentials() {
        let dir = directory();
        dir.register(registration("a@x.com")).await.unwrap();
        let account = dir.verify_login("a@x.com", "pw").await.unwrap();
        assert_eq!(account.email, "a@x.com");
    }

    #[tokio::test]
    async fn should_reject_wrong_password_and_unknown_email_alike() {
        let dir = directory();
        dir.register(registration("a@x.com")).await.unwrap();

        let wrong_password = dir.verify_login("a@x.com", "nope").await;
        let unknown_email = dir.verify_login("b@x.com", "pw").await;
        assert!(matches!(wrong_password, Err(PhoneHubError::Unauthorized)));
        assert!(matches!(unknown_email, Err(PhoneHubError::Unauthorized)));
    }

    #[tokio::test]
    async fn should_resolve_account_by_code() {
        let dir = directory();
        let account = dir.register(registration("a@x.com")).await.unwrap();
        let found = dir.find_by_code(account.code).await.unwrap();
        assert_eq!(found.id, account.id);
    }

    #[tokio::test]
    async fn should_fail_not_found_for_unknown_code() {
        let dir = directory();
        assert!(matches!(
            dir.find_by_code(10_000).await,
            Err(PhoneHubError::NotFound(_))
        ));
    }
}

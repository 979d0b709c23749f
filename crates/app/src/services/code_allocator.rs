//! Code allocator — draws unique 5-digit registration codes.

use rand::Rng;

use phonehub_domain::error::PhoneHubError;

use crate::ports::AccountRepository;

/// Inclusive range of valid registration codes.
pub const CODE_MIN: u32 = 10_000;
/// Inclusive upper bound of valid registration codes.
pub const CODE_MAX: u32 = 99_999;

/// Default bound on re-draws before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Draws uniformly random codes, re-drawing on collision against existing
/// accounts.
///
/// The existence check is advisory: the final arbiter is the uniqueness
/// constraint enforced at insert time, which the account directory retries
/// on. Attempts are bounded so a near-full code space degrades to
/// [`PhoneHubError::CodeSpaceExhausted`] instead of an unbounded loop.
#[derive(Debug, Clone, Copy)]
pub struct CodeAllocator {
    max_attempts: u32,
}

impl Default for CodeAllocator {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl CodeAllocator {
    /// Build an allocator that gives up after `max_attempts` draws.
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// The configured attempt budget.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Draw a code not currently held by any account.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneHubError::CodeSpaceExhausted`] past the attempt
    /// budget, or a storage error from the existence check.
    pub async fn allocate<R: AccountRepository>(&self, repo: &R) -> Result<u32, PhoneHubError> {
        for _ in 0..self.max_attempts {
            let code = rand::thread_rng().gen_range(CODE_MIN..=CODE_MAX);
            if !repo.code_exists(code).await? {
                return Ok(code);
            }
        }
        Err(PhoneHubError::CodeSpaceExhausted)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::future::Future;
    use std::sync::Mutex;

    use phonehub_domain::account::{Account, NewAccount};

    use super::*;

    #[derive(Default)]
    struct FakeAccountRepo {
        taken: Mutex<HashSet<u32>>,
    }

    impl AccountRepository for FakeAccountRepo {
        fn insert(
            &self,
            _account: NewAccount,
        ) -> impl Future<Output = Result<Account, PhoneHubError>> + Send {
            async { unimplemented!("not used by allocator tests") }
        }

        fn find_by_email(
            &self,
            _email: &str,
        ) -> impl Future<Output = Result<Option<Account>, PhoneHubError>> + Send {
            async { Ok(None) }
        }

        fn find_by_code(
            &self,
            _code: u32,
        ) -> impl Future<Output = Result<Option<Account>, PhoneHubError>> + Send {
            async { Ok(None) }
        }

        fn code_exists(
            &self,
            code: u32,
        ) -> impl Future<Output = Result<bool, PhoneHubError>> + Send {
            let exists = self.taken.lock().unwrap().contains(&code);
            async move { Ok(exists) }
        }
    }

    #[tokio::test]
    async fn should_draw_codes_within_range() {
        let repo = FakeAccountRepo::default();
        let allocator = CodeAllocator::default();
        for _ in 0..50 {
            let code = allocator.allocate(&repo).await.unwrap();
            assert!((CODE_MIN..=CODE_MAX).contains(&code));
        }
    }

    #[tokio::test]
    async fn should_draw_distinct_codes_when_tracking_taken_set() {
        let repo = FakeAccountRepo::default();
        let allocator = CodeAllocator::default();
        let mut seen = HashSet::new();
        for _ in 0..100 {
            let code = allocator.allocate(&repo).await.unwrap();
            assert!(seen.insert(code), "allocator returned taken code {code}");
            repo.taken.lock().unwrap().insert(code);
        }
    }

    #[tokio::test]
    async fn should_skip_taken_code() {
        let repo = FakeAccountRepo::default();
        repo.taken.lock().unwrap().extend(CODE_MIN..CODE_MAX);
        // Only CODE_MAX is free; a generous budget must find it.
        let allocator = CodeAllocator::new(100_000);
        let code = allocator.allocate(&repo).await.unwrap();
        assert_eq!(code, CODE_MAX);
    }

    #[tokio::test]
    async fn should_exhaust_when_space_is_full() {
        let repo = FakeAccountRepo::default();
        repo.taken.lock().unwrap().extend(CODE_MIN..=CODE_MAX);
        let allocator = CodeAllocator::new(50);
        assert!(matches!(
            allocator.allocate(&repo).await,
            Err(PhoneHubError::CodeSpaceExhausted)
        ));
    }
}

//! Notification log — append-only feed of agent-forwarded notifications.

use phonehub_domain::error::PhoneHubError;
use phonehub_domain::notification::{Notification, NotificationInfo};

use crate::ports::NotificationRepository;

/// Application service owning the notification log.
pub struct NotificationLog<R> {
    repo: R,
}

impl<R: NotificationRepository> NotificationLog<R> {
    /// Create a log backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Append one notification.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, info), fields(model_number = %info.model_number))]
    pub async fn record(&self, info: NotificationInfo) -> Result<Notification, PhoneHubError> {
        self.repo.insert(info).await
    }

    /// List notifications for one device, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn for_model(&self, model_number: &str) -> Result<Vec<Notification>, PhoneHubError> {
        self.repo.find_by_model_number(model_number).await
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::sync::Mutex;

    use phonehub_domain::id::NotificationId;

    use super::*;

    #[derive(Default)]
    struct InMemoryNotificationRepo {
        store: Mutex<Vec<Notification>>,
    }

    impl NotificationRepository for InMemoryNotificationRepo {
        fn insert(
            &self,
            info: NotificationInfo,
        ) -> impl Future<Output = Result<Notification, PhoneHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            let notification = Notification {
                id: NotificationId::from_i64(store.len() as i64 + 1),
                info,
            };
            store.push(notification.clone());
            async { Ok(notification) }
        }

        fn find_by_model_number(
            &self,
            model_number: &str,
        ) -> impl Future<Output = Result<Vec<Notification>, PhoneHubError>> + Send {
            let mut result: Vec<Notification> = self
                .store
                .lock()
                .unwrap()
                .iter()
                .filter(|n| n.info.model_number == model_number)
                .cloned()
                .collect();
            result.sort_by_key(|n| std::cmp::Reverse(n.info.timestamp));
            async { Ok(result) }
        }
    }

    fn info(model: &str, timestamp: i64) -> NotificationInfo {
        NotificationInfo {
            model_number: model.to_string(),
            source: "org.example.mail".to_string(),
            sender: "inbox".to_string(),
            body: "hello".to_string(),
            timestamp,
        }
    }

    #[tokio::test]
    async fn should_list_only_matching_model_newest_first() {
        let log = NotificationLog::new(InMemoryNotificationRepo::default());
        log.record(info("GVU6C", 100)).await.unwrap();
        log.record(info("OTHER", 150)).await.unwrap();
        log.record(info("GVU6C", 200)).await.unwrap();

        let feed = log.for_model("GVU6C").await.unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].info.timestamp, 200);
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use contracts::domain::a001_operation_log::aggregate::OperationRecord;
use tokio::task::JoinHandle;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("operation log store is not connected")]
    NotConnected,

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Журнал операций: только добавление и чтение последних записей
#[async_trait]
pub trait OperationLogStore: Send + Sync {
    /// Добавить запись. Записи после добавления не изменяются и не удаляются.
    async fn append(&self, record: &OperationRecord) -> Result<(), StoreError>;

    /// До `limit` записей, новые сверху
    async fn query_recent(&self, limit: u64) -> Result<Vec<OperationRecord>, StoreError>;
}

/// Добавить запись в журнал в отдельной задаче
///
/// Ответ клиенту не ждёт записи в БД: ошибка только пишется в лог.
pub fn spawn_append(store: Arc<dyn OperationLogStore>, record: OperationRecord) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = store.append(&record).await {
            tracing::error!(
                operation = %record.operation,
                "Failed to save operation to log: {}",
                e
            );
        }
    })
}


#[cfg(test)]
mod tests {
    use super::testing::{FailingStore, RecordingStore};
    use super::*;

    #[tokio::test]
    async fn test_spawn_append_stores_record() {
        let store = Arc::new(RecordingStore::default());
        let record = OperationRecord::new("addition", 2.0, Some(3.0), 5.0);

        spawn_append(store.clone(), record.clone()).await.unwrap();

        assert_eq!(store.records(), vec![record]);
    }

    #[tokio::test]
    async fn test_spawn_append_swallows_store_failure() {
        let store: Arc<dyn OperationLogStore> = Arc::new(FailingStore);
        let record = OperationRecord::new("addition", 2.0, Some(3.0), 5.0);

        // задача завершается штатно, ошибка уходит только в лог
        spawn_append(store, record).await.unwrap();
    }
}

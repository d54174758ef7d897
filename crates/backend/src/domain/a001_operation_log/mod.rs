pub mod repository;
pub mod store;

pub use repository::SeaOrmOperationLogStore;
pub use store::{spawn_append, OperationLogStore, StoreError};

/// Сколько последних записей отдаёт GET /history
pub const HISTORY_LIMIT: u64 = 10;

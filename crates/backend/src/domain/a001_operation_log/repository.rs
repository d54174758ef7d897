use async_trait::async_trait;
use contracts::domain::a001_operation_log::aggregate::OperationRecord;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, QuerySelect, Set};

use super::store::{OperationLogStore, StoreError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "operation_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub operation: String,
    pub operand1: f64,
    pub operand2: Option<f64>,
    /// SQLite хранит NaN как NULL
    pub result: Option<f64>,
    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for OperationRecord {
    fn from(m: Model) -> Self {
        OperationRecord {
            operation: m.operation,
            operand1: m.operand1,
            operand2: m.operand2,
            result: m.result.unwrap_or(f64::NAN),
            timestamp: m.timestamp,
        }
    }
}

/// Журнал операций в SQLite через sea-orm
///
/// Соединение открывается один раз при старте. Если подключиться не удалось,
/// сервис всё равно работает, а каждый вызов возвращает `StoreError::NotConnected`.
pub struct SeaOrmOperationLogStore {
    conn: Option<DatabaseConnection>,
}

impl SeaOrmOperationLogStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn: Some(conn) }
    }

    pub fn disconnected() -> Self {
        Self { conn: None }
    }

    fn conn(&self) -> Result<&DatabaseConnection, StoreError> {
        self.conn.as_ref().ok_or(StoreError::NotConnected)
    }
}

#[async_trait]
impl OperationLogStore for SeaOrmOperationLogStore {
    async fn append(&self, record: &OperationRecord) -> Result<(), StoreError> {
        let active = ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            operation: Set(record.operation.clone()),
            operand1: Set(record.operand1),
            operand2: Set(record.operand2),
            result: Set(Some(record.result).filter(|r| !r.is_nan())),
            timestamp: Set(record.timestamp),
        };
        active.insert(self.conn()?).await?;
        Ok(())
    }

    async fn query_recent(&self, limit: u64) -> Result<Vec<OperationRecord>, StoreError> {
        let records = Entity::find()
            .order_by_desc(Column::Timestamp)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(self.conn()?)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        Ok(records)
    }
}

//! Request log database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::RequestLog;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "request_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub status_code: i16,
    pub succeeded: bool,
    pub error: Option<String>,
    pub latency_ms: i64,
    pub client_ip: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for RequestLog {
    fn from(model: Model) -> Self {
        RequestLog {
            id: model.id,
            method: model.method,
            path: model.path,
            query: model.query,
            status_code: model.status_code,
            succeeded: model.succeeded,
            error: model.error,
            latency_ms: model.latency_ms,
            client_ip: model.client_ip,
            created_at: model.created_at,
        }
    }
}

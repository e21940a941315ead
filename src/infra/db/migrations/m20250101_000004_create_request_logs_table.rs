//! Migration: Create the request_logs table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RequestLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RequestLogs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RequestLogs::Method).string_len(10).not_null())
                    .col(ColumnDef::new(RequestLogs::Path).string().not_null())
                    .col(ColumnDef::new(RequestLogs::Query).string().null())
                    .col(
                        ColumnDef::new(RequestLogs::StatusCode)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RequestLogs::Succeeded).boolean().not_null())
                    .col(ColumnDef::new(RequestLogs::Error).string().null())
                    .col(ColumnDef::new(RequestLogs::LatencyMs).big_integer().not_null())
                    .col(ColumnDef::new(RequestLogs::ClientIp).string_len(64).not_null())
                    .col(
                        ColumnDef::new(RequestLogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // The admin listing reads newest-first
        manager
            .create_index(
                Index::create()
                    .name("idx_request_logs_created_at")
                    .table(RequestLogs::Table)
                    .col(RequestLogs::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_request_logs_created_at")
                    .table(RequestLogs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RequestLogs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RequestLogs {
    Table,
    Id,
    Method,
    Path,
    Query,
    StatusCode,
    Succeeded,
    Error,
    LatencyMs,
    ClientIp,
    CreatedAt,
}

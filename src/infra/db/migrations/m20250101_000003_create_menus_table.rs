//! Migration: Create the menus table and seed the navigation tree.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Menus::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Menus::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Menus::ParentId).big_integer().null())
                    .col(ColumnDef::new(Menus::Name).string().not_null())
                    .col(ColumnDef::new(Menus::Path).string().not_null())
                    .col(ColumnDef::new(Menus::Permission).string().null())
                    .col(ColumnDef::new(Menus::Icon).string().null())
                    .col(
                        ColumnDef::new(Menus::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Menus::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Seed the navigation tree. parent_id values refer to seed ids,
        // which are deterministic on a fresh table.
        let seed = Query::insert()
            .into_table(Menus::Table)
            .columns([
                Menus::ParentId,
                Menus::Name,
                Menus::Path,
                Menus::Permission,
                Menus::Icon,
                Menus::SortOrder,
            ])
            .values_panic([
                None::<i64>.into(),
                "Dashboard".into(),
                "/dashboard".into(),
                "dashboard:view".into(),
                "dashboard".into(),
                1.into(),
            ])
            .values_panic([
                None::<i64>.into(),
                "System".into(),
                "/system".into(),
                "system:view".into(),
                "setting".into(),
                2.into(),
            ])
            .values_panic([
                2i64.into(),
                "User Management".into(),
                "/system/users".into(),
                "system:user:list".into(),
                "user".into(),
                1.into(),
            ])
            .values_panic([
                2i64.into(),
                "Role Management".into(),
                "/system/roles".into(),
                "system:role:list".into(),
                "peoples".into(),
                2.into(),
            ])
            .values_panic([
                2i64.into(),
                "Request Logs".into(),
                "/system/logs".into(),
                "system:log:list".into(),
                "log".into(),
                3.into(),
            ])
            .to_owned();
        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Menus::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Menus {
    Table,
    Id,
    ParentId,
    Name,
    Path,
    Permission,
    Icon,
    SortOrder,
    CreatedAt,
}

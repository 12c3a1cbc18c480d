/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Job::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Job::CreatedBy).uuid().not_null())
                    .col(ColumnDef::new(Job::Organization).uuid().not_null())
                    .col(ColumnDef::new(Job::Title).string_len(300).not_null())
                    .col(ColumnDef::new(Job::Description).string_len(500).not_null())
                    .col(
                        ColumnDef::new(Job::IsOpen)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Job::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Job::ModifiedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-job-created_by")
                            .from(Job::Table, Job::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-job-organization")
                            .from(Job::Table, Job::Organization)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Job {
    Table,
    Id,
    CreatedBy,
    Organization,
    Title,
    Description,
    IsOpen,
    CreatedAt,
    ModifiedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Organization {
    Table,
    Id,
}

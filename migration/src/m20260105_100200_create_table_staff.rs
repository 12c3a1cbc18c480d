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
                    .table(Staff::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Staff::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Staff::User).uuid().not_null())
                    .col(ColumnDef::new(Staff::Organization).uuid().not_null())
                    .col(ColumnDef::new(Staff::JoinedAt).date_time().not_null())
                    .col(ColumnDef::new(Staff::ExitDate).date_time().null())
                    .col(ColumnDef::new(Staff::ModifiedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-staff-user")
                            .from(Staff::Table, Staff::User)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-staff-organization")
                            .from(Staff::Table, Staff::Organization)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Required by the ON CONFLICT clause of the join workflow.
        manager
            .create_index(
                Index::create()
                    .name("idx-staff-user-organization")
                    .table(Staff::Table)
                    .col(Staff::User)
                    .col(Staff::Organization)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Staff::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Staff {
    Table,
    Id,
    User,
    Organization,
    JoinedAt,
    ExitDate,
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

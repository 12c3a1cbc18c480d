/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20260105_100000_create_table_user;
mod m20260105_100100_create_table_organization;
mod m20260105_100200_create_table_staff;
mod m20260105_100300_create_table_job;
mod m20260105_100400_create_table_application;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_100000_create_table_user::Migration),
            Box::new(m20260105_100100_create_table_organization::Migration),
            Box::new(m20260105_100200_create_table_staff::Migration),
            Box::new(m20260105_100300_create_table_job::Migration),
            Box::new(m20260105_100400_create_table_application::Migration),
        ]
    }
}

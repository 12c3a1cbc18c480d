/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use chrono::Utc;
use migration::Migrator;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectOptions, ConnectionTrait,
    Database, DatabaseConnection, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, TryInsertResult,
};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::log::LevelFilter;
use uuid::Uuid;

use super::access::generate_access_code;
use super::consts::MAX_ACCESS_CODE_ATTEMPTS;
use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file)
            .context("Failed to read database url from file")?
            .trim()
            .to_string()
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    Ok(db)
}

pub async fn get_user_by_email<C: ConnectionTrait>(
    db: &C,
    email: &str,
) -> Result<Option<MUser>, DbErr> {
    EUser::find().filter(CUser::Email.eq(email)).one(db).await
}

/// Oldest organization holding `code`. Codes are short, so collisions are
/// possible and resolved in creation order.
pub async fn get_organization_by_access_code<C: ConnectionTrait>(
    db: &C,
    code: &str,
) -> Result<Option<MOrganization>, DbErr> {
    EOrganization::find()
        .filter(COrganization::StaffAccessCode.eq(code))
        .order_by_asc(COrganization::CreatedAt)
        .one(db)
        .await
}

/// Generates a join code not used by any organization yet. Gives up after
/// [`MAX_ACCESS_CODE_ATTEMPTS`] and returns the last candidate.
pub async fn generate_unique_access_code<C: ConnectionTrait>(db: &C) -> Result<String, DbErr> {
    let mut code = generate_access_code();

    for attempt in 1..=MAX_ACCESS_CODE_ATTEMPTS {
        let taken = EOrganization::find()
            .filter(COrganization::StaffAccessCode.eq(code.clone()))
            .count(db)
            .await?
            > 0;

        if !taken {
            return Ok(code);
        }

        tracing::debug!("Access code {} taken, attempt {}", code, attempt);
        code = generate_access_code();
    }

    tracing::warn!("Could not find a free access code, reusing {}", code);
    Ok(code)
}

/// Organizations administered by the user, oldest first.
pub async fn list_administered_organizations<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
) -> Result<Vec<MOrganization>, DbErr> {
    EOrganization::find()
        .filter(COrganization::Admin.eq(user_id))
        .order_by_asc(COrganization::CreatedAt)
        .all(db)
        .await
}

/// The user's first staff membership.
pub async fn get_staff_record<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
) -> Result<Option<MStaff>, DbErr> {
    EStaff::find()
        .filter(CStaff::User.eq(user_id))
        .order_by_asc(CStaff::JoinedAt)
        .one(db)
        .await
}

/// The organization's admin counts as staff even without a membership row.
pub async fn is_staff_of<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
    organization: &MOrganization,
) -> Result<bool, DbErr> {
    if organization.admin == user_id {
        return Ok(true);
    }

    let membership = EStaff::find()
        .filter(
            Condition::all()
                .add(CStaff::User.eq(user_id))
                .add(CStaff::Organization.eq(organization.id)),
        )
        .one(db)
        .await?;

    Ok(membership.is_some())
}

/// Membership `staff_id`, provided its organization is administered by
/// `admin_id`.
pub async fn get_managed_staff<C: ConnectionTrait>(
    db: &C,
    staff_id: Uuid,
    admin_id: Uuid,
) -> Result<Option<MStaff>, DbErr> {
    EStaff::find_by_id(staff_id)
        .join(JoinType::InnerJoin, RStaff::Organization.def())
        .filter(COrganization::Admin.eq(admin_id))
        .one(db)
        .await
}

pub async fn count_memberships<C: ConnectionTrait>(db: &C, user_id: Uuid) -> Result<u64, DbErr> {
    EStaff::find()
        .filter(CStaff::User.eq(user_id))
        .count(db)
        .await
}

/// Inserts the membership unless the (user, organization) pair already
/// exists. The check and the insert are one statement, so concurrent joins
/// cannot produce two rows. Returns the membership and whether it was created.
pub async fn get_or_create_staff<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
    organization_id: Uuid,
) -> Result<(MStaff, bool), DbErr> {
    let now = Utc::now().naive_utc();
    let staff = MStaff {
        id: Uuid::new_v4(),
        user: user_id,
        organization: organization_id,
        joined_at: now,
        exit_date: None,
        modified_at: now,
    };

    let astaff = AStaff {
        id: Set(staff.id),
        user: Set(staff.user),
        organization: Set(staff.organization),
        joined_at: Set(staff.joined_at),
        exit_date: Set(staff.exit_date),
        modified_at: Set(staff.modified_at),
    };

    let result = EStaff::insert(astaff)
        .on_conflict(
            OnConflict::columns([CStaff::User, CStaff::Organization])
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(db)
        .await?;

    if let TryInsertResult::Inserted(_) = result {
        return Ok((staff, true));
    }

    let existing = EStaff::find()
        .filter(
            Condition::all()
                .add(CStaff::User.eq(user_id))
                .add(CStaff::Organization.eq(organization_id)),
        )
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Staff membership".to_string()))?;

    Ok((existing, false))
}

/// Inserts the application unless the applicant already applied for the job.
/// Returns `None` on a duplicate.
pub async fn insert_application<C: ConnectionTrait>(
    db: &C,
    applicant_id: Uuid,
    job_id: Uuid,
    skill_description: String,
) -> Result<Option<MApplication>, DbErr> {
    let now = Utc::now().naive_utc();
    let application = MApplication {
        id: Uuid::new_v4(),
        applicant: applicant_id,
        job: job_id,
        skill_description,
        created_at: now,
        modified_at: now,
    };

    let aapplication = AApplication {
        id: Set(application.id),
        applicant: Set(application.applicant),
        job: Set(application.job),
        skill_description: Set(application.skill_description.clone()),
        created_at: Set(application.created_at),
        modified_at: Set(application.modified_at),
    };

    let result = EApplication::insert(aapplication)
        .on_conflict(
            OnConflict::columns([CApplication::Applicant, CApplication::Job])
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(db)
        .await?;

    match result {
        TryInsertResult::Inserted(_) => Ok(Some(application)),
        TryInsertResult::Conflicted | TryInsertResult::Empty => Ok(None),
    }
}

pub async fn get_job<C: ConnectionTrait>(db: &C, job_id: Uuid) -> Result<Option<MJob>, DbErr> {
    EJob::find_by_id(job_id).one(db).await
}

pub async fn list_open_jobs<C: ConnectionTrait>(db: &C) -> Result<Vec<MJob>, DbErr> {
    EJob::find()
        .filter(CJob::IsOpen.eq(true))
        .order_by_asc(CJob::CreatedAt)
        .all(db)
        .await
}

/// Staff of every organization the user administers. Without any, falls back
/// to the organization of the user's first membership. `None` when neither
/// exists.
pub async fn list_managed_staff<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
) -> Result<Option<Vec<MStaff>>, DbErr> {
    let mut organizations: Vec<Uuid> = list_administered_organizations(db, user_id)
        .await?
        .into_iter()
        .map(|organization| organization.id)
        .collect();

    if organizations.is_empty() {
        match get_staff_record(db, user_id).await? {
            Some(staff) => organizations.push(staff.organization),
            None => return Ok(None),
        }
    }

    EStaff::find()
        .filter(CStaff::Organization.is_in(organizations))
        .order_by_asc(CStaff::JoinedAt)
        .all(db)
        .await
        .map(Some)
}

pub async fn list_applications<C: ConnectionTrait>(
    db: &C,
    job_id: Uuid,
) -> Result<Vec<MApplication>, DbErr> {
    EApplication::find()
        .filter(CApplication::Job.eq(job_id))
        .order_by_asc(CApplication::CreatedAt)
        .all(db)
        .await
}

/// Persists `role` unless the user already has it.
pub async fn set_user_role<C: ConnectionTrait>(
    db: &C,
    user: MUser,
    role: UserRole,
) -> Result<MUser, DbErr> {
    if user.role == role {
        return Ok(user);
    }

    tracing::info!("Changing role of user {} from {} to {}", user.id, user.role, role);

    let mut auser: AUser = user.into();
    auser.role = Set(role);
    auser.update(db).await
}

/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use hirebase_core::access::is_access_code;
use hirebase_core::database::*;
use hirebase_core::permission::{can_join_organization, can_manage_staff};
use hirebase_core::role::RoleTransition;
use hirebase_core::types::*;
use sea_orm::{EntityTrait, ModelTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct JoinOrganizationRequest {
    pub org_access_code: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RemoveStaffQuery {
    pub pk: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChangeStaffRoleRequest {
    pub pk: Uuid,
    pub role: UserRole,
}

pub async fn post_join(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    body: Result<Json<JoinOrganizationRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MStaff>>> {
    let Json(body) = body?;
    let code = body.org_access_code.trim();

    let organization = if is_access_code(code) {
        get_organization_by_access_code(&state.db, code).await?
    } else {
        None
    };

    let organization = can_join_organization(&user, organization, code)?;
    let role = RoleTransition::JoinOrganization.apply(user.role)?;

    let txn = state.db.begin().await?;

    let (membership, created) = get_or_create_staff(&txn, user.id, organization.id).await?;
    set_user_role(&txn, user, role).await?;

    txn.commit().await?;

    if created {
        tracing::info!(
            "User {} joined organization {}",
            membership.user,
            organization.id
        );
    }

    Ok(Json(BaseResponse::success(
        "success, staff added to organization.",
        membership,
    )))
}

pub async fn get_staff(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<Vec<MStaff>>>> {
    can_manage_staff(&user)?;

    let staff = list_managed_staff(&state.db, user.id)
        .await?
        .ok_or_else(|| WebError::not_found("Organization"))?;

    Ok(Json(BaseResponse::success(
        "success, org staff returned.",
        staff,
    )))
}

pub async fn delete_staff(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    query: Result<Query<RemoveStaffQuery>, QueryRejection>,
) -> WebResult<StatusCode> {
    let Query(query) = query?;

    can_manage_staff(&user)?;

    let staff_id = query
        .pk
        .filter(|pk| !pk.trim().is_empty())
        .ok_or_else(WebError::missing_staff_id)?;
    let staff_id = Uuid::parse_str(staff_id.trim())
        .map_err(|_| WebError::BadRequest("Invalid staff id".to_string()))?;

    let txn = state.db.begin().await?;

    let membership = get_managed_staff(&txn, staff_id, user.id)
        .await?
        .ok_or_else(WebError::staff_not_found)?;
    let member_id = membership.user;
    let organization_id = membership.organization;

    membership.delete(&txn).await?;

    if count_memberships(&txn, member_id).await? == 0 {
        if let Some(member) = EUser::find_by_id(member_id).one(&txn).await? {
            let role = RoleTransition::LeaveLastOrganization.apply(member.role)?;
            set_user_role(&txn, member, role).await?;
        }
    }

    txn.commit().await?;

    tracing::info!(
        "Staff deleted. Removed {} from organization {}",
        staff_id,
        organization_id
    );

    Ok(StatusCode::NO_CONTENT)
}

pub async fn patch_staff(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    body: Result<Json<ChangeStaffRoleRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MUser>>> {
    let Json(body) = body?;

    can_manage_staff(&user)?;

    let transition = match body.role {
        UserRole::OrgHr => RoleTransition::PromoteToHr,
        UserRole::OrgStaff => RoleTransition::DemoteToStaff,
        role => {
            return Err(WebError::BadRequest(format!(
                "Role {} cannot be assigned to staff",
                role
            )));
        }
    };

    let txn = state.db.begin().await?;

    let membership = get_managed_staff(&txn, body.pk, user.id)
        .await?
        .ok_or_else(WebError::staff_not_found)?;

    let member = EUser::find_by_id(membership.user)
        .one(&txn)
        .await?
        .ok_or_else(|| WebError::not_found("User"))?;

    let role = transition.apply(member.role)?;
    let member = set_user_role(&txn, member, role).await?;

    txn.commit().await?;

    Ok(Json(BaseResponse::success(
        "success, staff role updated.",
        member,
    )))
}

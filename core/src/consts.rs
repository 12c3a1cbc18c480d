/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{DateTime, NaiveDateTime};
use std::ops::RangeInclusive;
use std::sync::LazyLock;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub static NULL_TIME: LazyLock<NaiveDateTime> =
    LazyLock::new(|| DateTime::UNIX_EPOCH.naive_utc());

/// Alphabet for organization join codes. Some letters appear twice and are
/// therefore drawn more often.
pub const ACCESS_CODE_CHARS: &[u8] = b"abchrbasefghijklmnopqrsytuvwxzut0123456789";
pub const ACCESS_CODE_LENGTH: usize = 3;
pub const MAX_ACCESS_CODE_ATTEMPTS: usize = 8;

pub const MAX_USER_NAME_LENGTH: usize = 100;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const MAX_ORGANIZATION_NAME_LENGTH: usize = 200;
pub const MAX_LOCATION_LENGTH: usize = 300;
pub const MAX_JOB_TITLE_LENGTH: usize = 300;
pub const MAX_JOB_DESCRIPTION_LENGTH: usize = 500;
pub const MAX_SKILL_DESCRIPTION_LENGTH: usize = 500;

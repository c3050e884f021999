// SPDX-License-Identifier: Apache-2.0

pub(crate) mod admin_skills;
pub(crate) mod handlers;
pub(crate) mod response_contract;
pub(crate) mod skills;
pub(crate) mod static_files;
pub(crate) mod upload;

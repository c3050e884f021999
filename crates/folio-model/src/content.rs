// SPDX-License-Identifier: Apache-2.0

//! Declared content entities. The projects and blog admin surfaces are
//! placeholders upstream, so these types have no store yet.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub summary: String,
    pub tech_stack: Vec<String>,
    pub github_link: Option<String>,
    pub demo_link: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub external_link: String,
    pub publication_date: Option<i64>,
    pub tags: Vec<String>,
    pub featured: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

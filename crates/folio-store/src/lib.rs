#![forbid(unsafe_code)]
//! SQLite-backed skill store.
//!
//! Name uniqueness is enforced here, not in the handlers: every row
//! carries a case-folded `name_normalized` column under a `UNIQUE`
//! index, and writes go through a transaction, so two concurrent
//! writers cannot both persist the same name in different casings.

mod error;
mod skills;

pub use error::StoreError;
pub use skills::{SkillStore, SCHEMA_VERSION};

pub const CRATE_NAME: &str = "folio-store";

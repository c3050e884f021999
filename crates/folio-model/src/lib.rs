#![forbid(unsafe_code)]
//! Portfolio domain model SSOT.
//!
//! Skill records are the only entity with a live store; `Project` and
//! `Blog` are declared for the content surfaces but carry no CRUD.

mod content;
mod fallback;
mod skill;

pub use content::{Blog, Project};
pub use fallback::{fallback_skills, FallbackSkill};
pub use skill::{
    normalize_skill_name, LogoType, ParseError, Skill, SkillCategory, SkillDraft, SkillName,
    DEFAULT_LOGO, NAME_MAX_LEN,
};

pub const CRATE_NAME: &str = "folio-model";

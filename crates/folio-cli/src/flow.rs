// SPDX-License-Identifier: Apache-2.0

//! Submission flow for the admin form:
//! `Idle → Submitting → Success | Error → Idle` once the banner is
//! cleared. The original client tracked this with ad hoc flags and let
//! rapid re-submissions race; here a second submit while one is in
//! flight is rejected as an invalid transition.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFlow {
    Idle,
    Submitting,
    Success { banner: String },
    Error { banner: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTransition {
    pub from: &'static str,
    pub attempted: &'static str,
}

impl Display for InvalidTransition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "cannot {} while {}", self.attempted, self.from)
    }
}

impl std::error::Error for InvalidTransition {}

impl SubmitFlow {
    #[must_use]
    pub const fn new() -> Self {
        Self::Idle
    }

    const fn state_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success { .. } => "showing success banner",
            Self::Error { .. } => "showing error banner",
        }
    }

    /// Idle → Submitting. Any other starting state is a rejected
    /// double-submit.
    pub fn begin(&mut self) -> Result<(), InvalidTransition> {
        match self {
            Self::Idle => {
                *self = Self::Submitting;
                Ok(())
            }
            other => Err(InvalidTransition {
                from: other.state_name(),
                attempted: "submit",
            }),
        }
    }

    /// Submitting → Success | Error.
    pub fn finish(&mut self, outcome: Result<String, String>) -> Result<(), InvalidTransition> {
        match self {
            Self::Submitting => {
                *self = match outcome {
                    Ok(banner) => Self::Success { banner },
                    Err(banner) => Self::Error { banner },
                };
                Ok(())
            }
            other => Err(InvalidTransition {
                from: other.state_name(),
                attempted: "finish",
            }),
        }
    }

    /// Banner timeout: Success | Error → Idle.
    pub fn clear_banner(&mut self) -> Result<(), InvalidTransition> {
        match self {
            Self::Success { .. } | Self::Error { .. } => {
                *self = Self::Idle;
                Ok(())
            }
            other => Err(InvalidTransition {
                from: other.state_name(),
                attempted: "clear banner",
            }),
        }
    }

    #[must_use]
    pub fn banner(&self) -> Option<&str> {
        match self {
            Self::Success { banner } | Self::Error { banner } => Some(banner),
            _ => None,
        }
    }
}

impl Default for SubmitFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_walks_the_full_cycle() {
        let mut flow = SubmitFlow::new();
        flow.begin().expect("begin");
        flow.finish(Ok("Skill created".to_string())).expect("finish");
        assert_eq!(flow.banner(), Some("Skill created"));
        flow.clear_banner().expect("clear");
        assert_eq!(flow, SubmitFlow::Idle);
    }

    #[test]
    fn double_submit_is_rejected() {
        let mut flow = SubmitFlow::new();
        flow.begin().expect("begin");
        let err = flow.begin().expect_err("double submit");
        assert_eq!(err.from, "submitting");
        assert_eq!(flow, SubmitFlow::Submitting);
    }

    #[test]
    fn failure_lands_in_error_with_the_server_message() {
        let mut flow = SubmitFlow::new();
        flow.begin().expect("begin");
        flow.finish(Err("Skill already exists".to_string()))
            .expect("finish");
        assert!(matches!(flow, SubmitFlow::Error { .. }));
        assert_eq!(flow.banner(), Some("Skill already exists"));
    }

    #[test]
    fn finish_and_clear_require_the_right_state() {
        let mut flow = SubmitFlow::new();
        assert!(flow.finish(Ok(String::new())).is_err());
        assert!(flow.clear_banner().is_err());
    }

    #[test]
    fn submit_while_banner_is_up_is_rejected_until_cleared() {
        let mut flow = SubmitFlow::new();
        flow.begin().expect("begin");
        flow.finish(Ok("done".to_string())).expect("finish");
        assert!(flow.begin().is_err());
        flow.clear_banner().expect("clear");
        flow.begin().expect("begin again");
    }
}

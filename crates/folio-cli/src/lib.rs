#![forbid(unsafe_code)]
//! Admin client for the portfolio service: the form-over-list flow of
//! the original admin page, driven from the terminal.

pub mod client;
pub mod commands;
pub mod flow;

pub use client::{ApiClient, CliError};
pub use flow::{InvalidTransition, SubmitFlow};

pub const CRATE_NAME: &str = "folio-cli";

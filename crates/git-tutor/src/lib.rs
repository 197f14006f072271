// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! git-tutor: view/state orchestrator and console
//!
//! This crate ties the GitHub log adapter and the AI analysis contract to a
//! single application state. It exports the state machine, the async
//! [`App`](app::App) that drives it, and the text console used by the
//! `git-tutor` binary.

pub mod app;
pub mod config;
pub mod console;
pub mod dashboard;
pub mod demo;
pub mod render;
pub mod state;

pub use app::App;
pub use config::{Config, ConfigError};
pub use state::{Action, AppState, Dispatch, LandingInputs, Slot, Ticket, View};

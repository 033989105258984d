//! # Core Application Logic
//!
//! This module contains Atlas's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (screens)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Filter view          │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   remote   │
//!             │  Adapter   │          │  (reqwest) │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and per-screen state
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`filter`]: Case-insensitive catalog filtering
//! - [`favorites`]: The favorites registry
//! - [`theme`]: Light/dark theme
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod favorites;
pub mod filter;
pub mod state;
pub mod theme;

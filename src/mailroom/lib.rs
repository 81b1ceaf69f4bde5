//! # Mailroom Architecture
//!
//! Mailroom is a **UI-agnostic donation-tracking library** with an
//! interactive CLI client on top. The library never touches stdout/stderr
//! or the process exit code; the binary wires the pieces together.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, resolves the data-file path            │
//! │  - The ONLY place that knows about exit codes               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Menu Layer (menu.rs)                                       │
//! │  - Explicit finite-state machine over the prompt loop       │
//! │  - Validates lines via grammar.rs, dispatches on enum tags  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: list, report, record                │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DonorStore trait                                │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`menu`]: The interactive state machine driving prompts and dispatch
//! - [`grammar`]: Pure input validators for the three menu grammars
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each action
//! - [`render`]: Report table, donor list, and email formatting
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`DonorBook`, `WorkingSelection`)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod grammar;
pub mod menu;
pub mod model;
pub mod render;
pub mod store;

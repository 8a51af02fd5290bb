//! # Todoapp Architecture
//!
//! Todoapp is a **UI-agnostic todo list library**. The `todo` binary, a
//! browser front end or any other client all sit on top of the same layers.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Transport (server.rs, client.rs)                           │
//! │  - HTTP routes, status codes, JSON bodies                   │
//! │  - The ONLY place that knows about HTTP                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (text ids → TodoId)                    │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Payload decoding and validation                          │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: list / get / create / update / delete   │
//! │  - FileStore, LocalStore (production), InMemoryStore (tests)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Every layer returns [`error::Result`]. An error's [`error::ErrorKind`]
//! (validation, not-found, internal) is all a transport needs to pick its
//! response; [`server::status_for`] is the one place that does so for HTTP.
//!
//! ## Testing Strategy
//!
//! 1. **Store and commands**: unit tests against [`store::memory::InMemoryStore`].
//! 2. **Backends**: filesystem tests in temporary directories.
//! 3. **HTTP**: a real server on an ephemeral port driven by [`client::TodoClient`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Todo`, `NewTodo`, `TodoPatch`, id parsing
//! - [`config`]: Layered configuration
//! - [`server`]: HTTP routes
//! - [`client`]: HTTP client adapter
//! - [`error`]: Error types

pub mod api;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod server;
pub mod store;

#[cfg(test)]
mod test_utils;

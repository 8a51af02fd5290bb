//! # Commands
//!
//! One module per operation. Commands take already-resolved ids and raw JSON
//! payloads, decode and validate the payload, and call the store. They never
//! know which transport invoked them.

pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod list;
pub mod update;

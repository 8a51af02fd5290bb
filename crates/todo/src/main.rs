//! # todo
//!
//! One binary, two roles:
//!
//! - `todo serve` runs the HTTP API over the configured store (a JSON file, or
//!   a key-value slot that can be seeded from a remote list on first read).
//! - Every other subcommand is a client: it talks to a running server through
//!   [`todoapp::client::TodoClient`] and prints the result.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  CLI (src/cli/)                              │
//! │  - clap parsing (setup.rs)                   │
//! │  - config, logging, dispatch (commands.rs)   │
//! │  - terminal output (render.rs)               │
//! └──────────────────────────────────────────────┘
//!          │ serve                │ list/add/...
//!          ▼                      ▼
//!   todoapp::server        todoapp::client ──HTTP──▶ todoapp::server
//!          │
//!          ▼
//!   todoapp::api → commands → store
//! ```
//!
//! Nothing below the CLI layer prints or exits; this file only turns an error
//! into a message and a non-zero exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

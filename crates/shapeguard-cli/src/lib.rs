//! # shapeguard-cli — Command-Line Front End
//!
//! Provides the `shapeguard` binary. Handlers live here so they can be
//! tested without spawning a process; `main.rs` only parses arguments and
//! dispatches.
//!
//! ## Subcommands
//!
//! - `shapeguard check`: Match one document against one schema literal.
//! - `shapeguard guard`: Run a guarded call over a schema list and an
//!   argument list.
//!
//! ```bash
//! shapeguard check --schema user.schema.json --value user.yaml
//! shapeguard guard --schemas sig.json --args call.json --raise
//! ```

pub mod check;
pub mod document;
pub mod guard;

/// Exit code for success.
pub const EXIT_OK: u8 = 0;

/// Exit code for a mismatch or failed call.
pub const EXIT_FAILURE: u8 = 1;

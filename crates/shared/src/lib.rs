//! Types shared between the deck core, the desktop shell and the CLI.

pub mod domain;
pub mod error;
pub mod protocol;

//! Handlers for each subcommand.

pub(crate) mod list;
pub(crate) mod setup;

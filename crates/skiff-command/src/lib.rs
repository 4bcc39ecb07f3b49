//! # skiff-command
//!
//! Turns the stream of chat messages plus the live snapshot into typed
//! command invocations. Messages are categorized by prefix and name,
//! screened by ordered filters, optionally parsed, and fanned out to
//! independently-failing subscribers.

pub mod command;
pub mod filter;
pub mod parser;
pub mod router;

pub use command::{CommandEvent, CommandInvocation, CommandSpec, FilteredCommand, ParseFailure};
pub use filter::{CommandFilter, GuildOnly, IgnoreBots, RequirePermission};
pub use parser::{ArgumentParser, ExactArgs, ParsedArgs, WhitespaceParser};
pub use router::{CommandEvents, CommandRouter};

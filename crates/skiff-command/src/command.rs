//! Command specs and pipeline results

use std::sync::Arc;

use skiff_cache::Snapshot;
use skiff_model::Message;

use crate::filter::CommandFilter;
use crate::parser::{ArgumentParser, ParsedArgs};

/// What a subscriber wants to receive
///
/// A category name plus aliases, an ordered filter list, and an optional
/// argument parser.
pub struct CommandSpec {
    pub(crate) name: String,
    pub(crate) aliases: Vec<String>,
    pub(crate) filters: Vec<Box<dyn CommandFilter>>,
    pub(crate) parser: Option<Box<dyn ArgumentParser>>,
}

impl CommandSpec {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            filters: Vec::new(),
            parser: None,
        }
    }

    /// Add an alternate name for the command
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Append a filter; filters run in the order they were added
    #[must_use]
    pub fn filter(mut self, filter: impl CommandFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Set the argument parser
    #[must_use]
    pub fn parser(mut self, parser: impl ArgumentParser + 'static) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    /// True if the invoked token names this command
    pub(crate) fn matches(&self, token: &str, case_insensitive: bool) -> bool {
        let eq = |name: &str| {
            if case_insensitive {
                name.eq_ignore_ascii_case(token)
            } else {
                name == token
            }
        };
        eq(&self.name) || self.aliases.iter().any(|a| eq(a))
    }
}

/// What a subscriber receives for one matching message
#[derive(Debug)]
pub enum CommandEvent {
    /// All filters passed and parsing (if any) succeeded
    Invocation(CommandInvocation),
    /// At least one filter rejected; the parser never ran
    Filtered(FilteredCommand),
    /// Filters passed but the parser failed
    ParseFailed(ParseFailure),
}

/// A command ready for the subscriber to act on
#[derive(Debug)]
pub struct CommandInvocation {
    pub message: Message,
    /// The snapshot that was current when the message was routed
    pub snapshot: Arc<Snapshot>,
    /// Parsed arguments, when the spec carries a parser
    pub args: Option<ParsedArgs>,
}

/// A candidate rejected by one or more filters
#[derive(Debug)]
pub struct FilteredCommand {
    pub message: Message,
    /// Names of every filter that rejected, in filter order
    pub failed: Vec<&'static str>,
}

/// A candidate whose argument parse failed
#[derive(Debug)]
pub struct ParseFailure {
    pub message: Message,
    pub error: String,
}

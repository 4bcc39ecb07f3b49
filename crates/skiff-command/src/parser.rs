//! Argument parsing
//!
//! An optional pipeline stage: subscribers that want structured arguments
//! plug in a parser; failures surface to that subscriber only, as a
//! [`ParseFailure`](crate::command::ParseFailure).

/// Parsed command arguments plus whatever input the parser left over
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedArgs {
    pub args: Vec<String>,
    pub rest: String,
}

/// A pluggable argument parser
pub trait ArgumentParser: Send + Sync {
    /// Parse the text following the command name
    ///
    /// # Errors
    /// A human-readable description of what failed to parse.
    fn parse(&self, input: &str) -> Result<ParsedArgs, String>;
}

/// Splits arguments on whitespace, consuming all input
pub struct WhitespaceParser;

impl ArgumentParser for WhitespaceParser {
    fn parse(&self, input: &str) -> Result<ParsedArgs, String> {
        Ok(ParsedArgs {
            args: input.split_whitespace().map(str::to_string).collect(),
            rest: String::new(),
        })
    }
}

/// Requires an exact number of whitespace-separated arguments
pub struct ExactArgs(pub usize);

impl ArgumentParser for ExactArgs {
    fn parse(&self, input: &str) -> Result<ParsedArgs, String> {
        let args: Vec<String> = input.split_whitespace().map(str::to_string).collect();
        if args.len() == self.0 {
            Ok(ParsedArgs {
                args,
                rest: String::new(),
            })
        } else {
            Err(format!("expected {} arguments, got {}", self.0, args.len()))
        }
    }
}

// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

use thiserror::Error;

/// The kind of problem found on the command-line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ErrorKind {
    /// The short or long option name is not registered.
    InvalidOption,
    /// A flag option was given a value (`--flag=value`).
    NoArgValue,
    /// An option that takes a value was not given one.
    NeedsArgValue,
    /// An option was found after a positional argument.
    ///
    /// Only produced when `Settings::no_interleaving()` is set.
    UnexpectedArg,
}

impl ErrorKind {
    /// Text describing the problem, used in the [Diagnostic] message.
    pub fn reason(&self) -> &'static str {
        match self {
            ErrorKind::InvalidOption => "invalid option",
            ErrorKind::NoArgValue => "option does not require an argument",
            ErrorKind::NeedsArgValue => "option requires an argument",
            ErrorKind::UnexpectedArg => "unexpected option",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// Details of a failed parse.
///
/// The `Display` form is the message a program should print
/// (normally to stderr) before exiting:
///
/// ```text
/// myprog: invalid option -- 'z'
/// Try 'myprog --help' for more information.
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Diagnostic {
    /// Type of failure.
    pub kind: ErrorKind,
    /// The option name (without dashes) or the bare prefix that caused
    /// the failure.
    pub token: String,
    /// Program name used to prefix the message.
    pub app_name: String,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(app_name: &str, kind: ErrorKind, token: &str) -> Self {
        Diagnostic {
            kind,
            token: token.into(),
            app_name: app_name.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {} -- '{}'\nTry '{} --help' for more information.",
            self.app_name, self.kind, self.token, self.app_name
        )
    }
}

/// The error type.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Incorrect API usage errors (programmer error)
    //------------------------------
    /// An option needs a short name, a long name or both.
    #[error("option has neither a short nor a long name")]
    NoName,

    /// Short option name cannot be used on the command-line.
    #[error("invalid short option name: {0:?}")]
    InvalidShortName(char),

    /// Long option name cannot be used on the command-line.
    #[error("invalid long option name: {0:?}")]
    InvalidLongName(String),

    /// An option with the same short name is already registered.
    #[error("duplicate short option name: {0:?}")]
    DuplicateShortName(char),

    /// An option with the same long name is already registered.
    #[error("duplicate long option name: {0:?}")]
    DuplicateLongName(String),

    //------------------------------
    // Runtime errors (user error)
    //------------------------------
    /// The command-line could not be parsed.
    #[error("{0}")]
    Parse(Diagnostic),
}

impl Error {
    /// Returns the diagnostic if this is a parse failure.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Error::Parse(d) => Some(d),
            _ => None,
        }
    }
}

impl From<Diagnostic> for Error {
    fn from(d: Diagnostic) -> Self {
        Error::Parse(d)
    }
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

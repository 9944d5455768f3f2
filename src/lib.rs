// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Crate for parsing short (`-x`) and long (`--long`) command-line options.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Syntax](#syntax)
//! * [Errors](#errors)
//! * [Settings](#settings)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! Declare the options your program supports in an [OptSet], then give the
//! command-line to a [Parser]. The parser returns a [Matches] value
//! recording which options were specified, the values they were given and
//! the remaining positional arguments, in order.
//!
//! The [OptSet] is never modified by parsing, so it can be reused for any
//! number of parses.
//!
//! # Quickstart
//!
//! ```rust
//! use dashopt::{Opt, OptSet, Parser, Result, NO_SHORT_NAME};
//!
//! fn main() -> Result<()> {
//!     let lines = Opt::with_value('l', "lines", "output only NBLINES lines")?
//!         .value_name("NBLINES");
//!     let number = Opt::new('n', "number", "number all output lines")?;
//!     let help = Opt::new(NO_SHORT_NAME, "help", "display this help and exit")?;
//!
//!     let mut opts = OptSet::new();
//!
//!     opts.add(lines.clone())?;
//!     opts.add(number.clone())?;
//!     opts.add(help.clone())?;
//!
//!     let mut parser = Parser::new("myprog");
//!
//!     let matches = parser.parse(&opts, vec!["-nl", "3", "notes.txt"])?;
//!
//!     assert!(matches.is_set(&number));
//!     assert_eq!(matches.value(&lines), Some("3"));
//!     assert!(!matches.is_set(&help));
//!     assert_eq!(matches.positionals(), &["notes.txt"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! To parse the real command-line, call [Parser::parse_env()].
//!
//! # Syntax
//!
//! - Any argument not starting with a dash is a positional argument.
//!   Options and positional arguments can be intermingled.
//!
//! - `-x` specifies the option with the short name `x`.
//!
//! - Short flag options can be grouped: `-abc` is the same as `-a -b -c`.
//!
//! - If a short option takes a value, the _next_ argument is its value,
//!   even if it starts with a dash. Only the last option of a group can
//!   take a value: `-abx value`.
//!
//! - `--name` specifies the option with the long name `name`.
//!
//! - A long option value must be attached with `=`: `--count=5`. Only the
//!   first `=` is special so `--define=a=b` gives the value `a=b`.
//!
//! - If an option is specified more than once, the last value wins.
//!
//! # Errors
//!
//! Parsing stops at the first invalid argument and returns
//! [Error::Parse]. The [Diagnostic] it holds gives the [ErrorKind] and the
//! offending option, and displays as a message ready to show the user:
//!
//! ```text
//! myprog: option requires an argument -- 'lines'
//! Try 'myprog --help' for more information.
//! ```
//!
//! The same message is available from [Parser::error_msg()] until
//! [Parser::reset()] is called.
//!
//! Since nothing is recorded until the whole command-line has been parsed,
//! a failed parse never leaves partially set options behind.
//!
//! # Settings
//!
//! The default behaviour can be changed with [Settings]:
//!
//! - [Settings::end_of_options()]: `--` ends option processing.
//! - [Settings::no_interleaving()]: options must precede all positional
//!   arguments.
//!
//! # Limitations
//!
//! - Long option names cannot be abbreviated.
//! - Options with optional values are not supported.
//! - Arguments are not permuted (no `POSIXLY_CORRECT` handling).
//! - Subcommands are not supported.

mod error;
mod opts;
mod parser;

pub use error::{Diagnostic, Error, ErrorKind, Result};

pub use opts::{Kind, Opt, OptSet, NO_SHORT_NAME};

pub use parser::{get_args, Match, Matches, Parser, Settings};

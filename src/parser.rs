// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;

use log::{debug, trace};

use crate::error::{Diagnostic, ErrorKind, Result};
use crate::opts::{Opt, OptSet, OPT_PREFIX, VALUE_SEPARATOR};

const LONG_OPT_PREFIX: &str = "--";

/// Special argument that, if [Settings::end_of_options()] is set, is silently
/// consumed and used to denote the end of all options; all arguments that
/// follow are considered to be positional arguments (even if they start with
/// `-`!)
///
/// See: `getopt(3)`.
const END_OF_OPTIONS: &str = "--";

/// Settings used to control the parsers behaviour.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialOrd, Default, PartialEq)]
pub struct Settings {
    /// If set, `--` stops option processing.
    end_of_options: bool,

    /// If set, options must not follow positional arguments.
    no_interleaving: bool,
}

impl Settings {
    /// Create a new settings object.
    pub fn new() -> Self {
        Settings::default()
    }

    /// Treat `--` as the end of the options: it is consumed and every
    /// argument after it is a positional argument.
    ///
    /// By default `--` is handled as a long option with an empty name
    /// which is reported as an [ErrorKind::InvalidOption].
    pub fn end_of_options(self) -> Self {
        Settings {
            end_of_options: true,
            ..self
        }
    }

    /// Require all options to appear before the first positional argument.
    ///
    /// When set, an option found after a positional argument fails the
    /// parse with [ErrorKind::UnexpectedArg]. By default options and
    /// positional arguments can be intermingled freely.
    ///
    /// # Example
    ///
    /// With a flag `-n` registered:
    ///
    /// ```bash
    /// $ prog -n file   # ok
    /// $ prog file -n   # ok by default, but fails when this is set
    /// ```
    pub fn no_interleaving(self) -> Self {
        Settings {
            no_interleaving: true,
            ..self
        }
    }
}

/// Get a list of all command-line arguments specified to the program with
/// the program name (the first argument) removed.
///
/// # Note
///
/// Used with [Parser::parse()]. However, this isn't usually
/// required: just call [Parser::parse_env()].
pub fn get_args() -> Vec<String> {
    env::args().skip(1).collect()
}

/// What the parser found for a single option.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Match {
    /// Set if the option was specified on the command-line.
    pub set: bool,
    /// Value given to the option.
    ///
    /// # Notes
    ///
    /// - Always [None] for flag options.
    /// - If the option is specified more than once, this is the last value.
    pub value: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Entry {
    short: Option<char>,
    long: Option<String>,
    state: Match,
}

/// The outcome of a successful parse.
///
/// Holds a [Match] for every option in the [OptSet] that was parsed
/// against (whether or not it was specified) and the positional arguments
/// in the order they were found.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Matches {
    entries: Vec<Entry>,
    positionals: Vec<String>,
}

impl Matches {
    fn new(opts: &OptSet) -> Self {
        let entries = opts
            .iter()
            .map(|o| Entry {
                short: o.short_name(),
                long: o.long_name().map(String::from),
                state: Match::default(),
            })
            .collect();

        Matches {
            entries,
            positionals: Vec::new(),
        }
    }

    fn record(&mut self, index: usize, value: Option<String>) {
        let state = &mut self.entries[index].state;

        state.set = true;

        if value.is_some() {
            state.value = value;
        }
    }

    /// Returns the result for the option with the specified short name.
    pub fn short(&self, short: char) -> Option<&Match> {
        self.entries
            .iter()
            .find(|e| e.short == Some(short))
            .map(|e| &e.state)
    }

    /// Returns the result for the option with the specified long name.
    pub fn long(&self, long: &str) -> Option<&Match> {
        self.entries
            .iter()
            .find(|e| e.long.as_deref() == Some(long))
            .map(|e| &e.state)
    }

    /// Returns the result for the specified option.
    pub fn get(&self, opt: &Opt) -> Option<&Match> {
        match (opt.short_name(), opt.long_name()) {
            (Some(short), _) => self.short(short),
            (None, Some(long)) => self.long(long),
            (None, None) => None,
        }
    }

    /// Returns true if the option was specified on the command-line.
    pub fn is_set(&self, opt: &Opt) -> bool {
        self.get(opt).map(|m| m.set).unwrap_or(false)
    }

    /// Returns the value given to the option.
    pub fn value(&self, opt: &Opt) -> Option<&str> {
        self.get(opt).and_then(|m| m.value.as_deref())
    }

    /// The positional (non-option) arguments, in command-line order.
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// Consume the matches, returning the positional arguments.
    pub fn into_positionals(self) -> Vec<String> {
        self.positionals
    }
}

/// The command-line parser.
///
/// A parser can be reused: each call to [Parser::parse()] starts from a
/// clean state apart from the last error message which is only cleared
/// by [Parser::reset()].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Parser {
    app_name: String,
    settings: Settings,
    error_msg: Option<String>,
}

impl Parser {
    /// Create a new parser. The application name is used to prefix
    /// error messages.
    pub fn new(app_name: &str) -> Self {
        Parser {
            app_name: app_name.into(),
            ..Default::default()
        }
    }

    /// Specify any settings for the parser.
    pub fn settings(self, settings: Settings) -> Self {
        Parser { settings, ..self }
    }

    /// The application name used in error messages.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The message for the last failed parse, or [None] if no parse has
    /// failed since the parser was created or [Parser::reset()] was called.
    pub fn error_msg(&self) -> Option<&str> {
        self.error_msg.as_deref()
    }

    /// Forget the last error message.
    pub fn reset(&mut self) {
        self.error_msg = None;
    }

    /// Parse the process command-line (without the program name).
    pub fn parse_env(&mut self, opts: &OptSet) -> Result<Matches> {
        self.parse(opts, get_args())
    }

    /// Parse a set of command line arguments (without the program name).
    ///
    /// # Arguments
    ///
    /// - `opts`: The options to recognise.
    /// - `cli_args`: The arguments. Specify your own, or call [get_args()].
    ///
    /// # Return value
    ///
    /// The [Matches] found, or an [crate::Error::Parse] for the first
    /// invalid argument. The error message is also available from
    /// [Parser::error_msg()].
    pub fn parse<I, S>(&mut self, opts: &OptSet, cli_args: I) -> Result<Matches>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.scan(opts, cli_args) {
            Ok(matches) => Ok(matches),
            Err(diag) => {
                debug!(
                    "parse failed: kind: {:?}, token: {:?}",
                    diag.kind, diag.token
                );

                self.error_msg = Some(diag.to_string());

                Err(diag.into())
            }
        }
    }

    fn diagnostic(&self, kind: ErrorKind, token: &str) -> Diagnostic {
        Diagnostic::new(&self.app_name, kind, token)
    }

    fn scan<I, S>(&self, opts: &OptSet, cli_args: I) -> std::result::Result<Matches, Diagnostic>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut matches = Matches::new(opts);
        let mut end_of_options = false;
        let mut seen_positional = false;

        let mut cli_args = cli_args.into_iter().map(Into::into);

        while let Some(cli_arg) = cli_args.next() {
            trace!("argument: {:?}", cli_arg);

            if end_of_options || !cli_arg.starts_with(OPT_PREFIX) {
                seen_positional = true;
                matches.positionals.push(cli_arg);
                continue;
            }

            if self.settings.end_of_options && cli_arg == END_OF_OPTIONS {
                end_of_options = true;
                continue;
            }

            if cli_arg.len() == OPT_PREFIX.len_utf8() {
                return Err(self.diagnostic(ErrorKind::InvalidOption, &cli_arg));
            }

            if self.settings.no_interleaving && seen_positional {
                return Err(self.diagnostic(ErrorKind::UnexpectedArg, &cli_arg));
            }

            if let Some(long) = cli_arg.strip_prefix(LONG_OPT_PREFIX) {
                self.handle_long(opts, &mut matches, long)?;
                continue;
            }

            // Short option cluster: only the last option can take a
            // value, which is the next argument (whatever it looks like).
            let cluster: Vec<char> = cli_arg.chars().skip(1).collect();

            // Note: cluster cannot be empty since cli_arg is not just the
            // prefix.
            if let Some((last, others)) = cluster.split_last() {
                for option in others {
                    let (index, opt) = self.find_short(opts, *option)?;

                    if opt.requires_value() {
                        return Err(self.diagnostic(ErrorKind::NeedsArgValue, &option.to_string()));
                    }

                    debug!("option: '{}'", option);
                    matches.record(index, None);
                }

                let (index, opt) = self.find_short(opts, *last)?;

                if opt.requires_value() {
                    let value = cli_args.next().ok_or_else(|| {
                        self.diagnostic(ErrorKind::NeedsArgValue, &last.to_string())
                    })?;

                    debug!("option: '{}', value: {:?}", last, value);
                    matches.record(index, Some(value));
                } else {
                    debug!("option: '{}'", last);
                    matches.record(index, None);
                }
            }
        }

        Ok(matches)
    }

    fn find_short<'o>(
        &self,
        opts: &'o OptSet,
        short: char,
    ) -> std::result::Result<(usize, &'o Opt), Diagnostic> {
        opts.find_by_short_name(short)
            .ok_or_else(|| self.diagnostic(ErrorKind::InvalidOption, &short.to_string()))
    }

    fn handle_long(
        &self,
        opts: &OptSet,
        matches: &mut Matches,
        long: &str,
    ) -> std::result::Result<(), Diagnostic> {
        let (name, value) = match long.split_once(VALUE_SEPARATOR) {
            Some((name, value)) => (name, Some(value)),
            None => (long, None),
        };

        let (index, opt) = opts
            .find_by_long_name(name)
            .ok_or_else(|| self.diagnostic(ErrorKind::InvalidOption, name))?;

        match (opt.requires_value(), value) {
            (true, None) => Err(self.diagnostic(ErrorKind::NeedsArgValue, name)),
            (false, Some(_)) => Err(self.diagnostic(ErrorKind::NoArgValue, name)),
            (_, value) => {
                debug!("option: {:?}, value: {:?}", name, value);
                matches.record(index, value.map(String::from));
                Ok(())
            }
        }
    }
}

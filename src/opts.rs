// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;
use std::slice;

use crate::error::{Error, Result};

pub(crate) const OPT_PREFIX: char = '-';
pub(crate) const VALUE_SEPARATOR: char = '=';

/// Value that can be passed to [Opt::new()] and [Opt::with_value()] to
/// specify that the option has no short name.
pub const NO_SHORT_NAME: char = '\u{0}';

/// Placeholder shown in the help output for an option value
/// if no value name was specified.
const DEFAULT_VALUE_NAME: &str = "VALUE";

/// Indent used for each line of the help output.
const HELP_INDENT: &str = "  ";

/// Space between the option names and the description in the help output.
const HELP_GAP: &str = "  ";

/// Specifies whether an option is a stand-alone flag or whether it
/// requires a value.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Kind {
    /// Option is stand-alone (no value allowed).
    Flag,
    /// Option must be given exactly one value.
    Value {
        /// Label for the value, only used in the help output.
        value_name: Option<String>,
    },
}

impl Default for Kind {
    fn default() -> Self {
        Kind::Flag
    }
}

impl Kind {
    /// Returns true if the option consumes a value.
    pub fn requires_value(&self) -> bool {
        matches!(self, Kind::Value { .. })
    }
}

/// Declaration of a command-line option.
///
/// An option has a short name (`-n`), a long name (`--number`) or both.
/// Declarations are never modified by the parser: the outcome of a parse
/// is returned separately as [crate::Matches].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Opt {
    short: Option<char>,
    long: Option<String>,
    help: String,
    kind: Kind,
}

impl Opt {
    /// Create a flag option.
    ///
    /// Use [NO_SHORT_NAME] for `short` and/or an empty string for `long`
    /// to leave that name unset. At least one of them must be set.
    pub fn new(short: char, long: &str, help: &str) -> Result<Self> {
        let short = match short {
            NO_SHORT_NAME => None,
            c if c == OPT_PREFIX || c.is_whitespace() => {
                return Err(Error::InvalidShortName(c))
            }
            c => Some(c),
        };

        let long = match long {
            "" => None,
            l if l.starts_with(OPT_PREFIX)
                || l.contains(VALUE_SEPARATOR)
                || l.contains(char::is_whitespace) =>
            {
                return Err(Error::InvalidLongName(l.into()))
            }
            l => Some(l.to_string()),
        };

        if short.is_none() && long.is_none() {
            return Err(Error::NoName);
        }

        Ok(Opt {
            short,
            long,
            help: help.into(),
            kind: Kind::Flag,
        })
    }

    /// Create an option that requires a value.
    pub fn with_value(short: char, long: &str, help: &str) -> Result<Self> {
        Ok(Opt::new(short, long, help)?.takes_value())
    }

    /// Convert the option into one requiring a value.
    pub fn takes_value(self) -> Self {
        match self.kind {
            Kind::Value { .. } => self,
            Kind::Flag => Opt {
                kind: Kind::Value { value_name: None },
                ..self
            },
        }
    }

    /// Specify the label shown for the value in the help output.
    ///
    /// Implies [Opt::takes_value()].
    pub fn value_name(self, name: &str) -> Self {
        Opt {
            kind: Kind::Value {
                value_name: Some(name.into()),
            },
            ..self
        }
    }

    /// Specify the description of the option.
    pub fn help(self, help: &str) -> Self {
        Opt {
            help: help.into(),
            ..self
        }
    }

    /// Single character name, if any.
    pub fn short_name(&self) -> Option<char> {
        self.short
    }

    /// Multi-character name, if any.
    pub fn long_name(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// The description of the option.
    pub fn description(&self) -> &str {
        &self.help
    }

    /// Whether the option is a flag or takes a value.
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Returns true if the option must be given a value.
    pub fn requires_value(&self) -> bool {
        self.kind.requires_value()
    }

    /// The label for the value (only set for options requiring a value).
    pub fn get_value_name(&self) -> Option<&str> {
        match &self.kind {
            Kind::Value { value_name } => {
                Some(value_name.as_deref().unwrap_or(DEFAULT_VALUE_NAME))
            }
            Kind::Flag => None,
        }
    }
}

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value_name = self.get_value_name();

        match (self.short, &self.long) {
            (Some(short), Some(long)) => {
                write!(f, "{}{}, {}{}{}", OPT_PREFIX, short, OPT_PREFIX, OPT_PREFIX, long)?;

                if let Some(name) = value_name {
                    write!(f, "{}{}", VALUE_SEPARATOR, name)?;
                }
            }
            (None, Some(long)) => {
                // Align with the long names of options that have both names.
                write!(f, "    {}{}{}", OPT_PREFIX, OPT_PREFIX, long)?;

                if let Some(name) = value_name {
                    write!(f, "{}{}", VALUE_SEPARATOR, name)?;
                }
            }
            (Some(short), None) => {
                write!(f, "{}{}", OPT_PREFIX, short)?;

                if let Some(name) = value_name {
                    write!(f, " {}", name)?;
                }
            }
            // Rejected by Opt::new().
            (None, None) => (),
        }

        Ok(())
    }
}

/// Ordered collection of options.
///
/// Short and long names are unique within a set: [OptSet::add()] rejects
/// an option whose name is already registered.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct OptSet {
    entries: Vec<Opt>,
}

impl OptSet {
    /// Create a new, empty option set.
    pub fn new() -> Self {
        OptSet::default()
    }

    /// Register an option.
    pub fn add(&mut self, opt: Opt) -> Result<()> {
        if let Some(short) = opt.short {
            if self.get_by_short_name(short).is_some() {
                return Err(Error::DuplicateShortName(short));
            }
        }

        if let Some(long) = opt.long_name() {
            if self.get_by_long_name(long).is_some() {
                return Err(Error::DuplicateLongName(long.into()));
            }
        }

        self.entries.push(opt);

        Ok(())
    }

    /// Returns the number of registered options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no options have been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the options in the order they were added.
    pub fn iter(&self) -> slice::Iter<'_, Opt> {
        self.entries.iter()
    }

    /// Returns the option with the specified short name.
    pub fn get_by_short_name(&self, short: char) -> Option<&Opt> {
        self.find_by_short_name(short).map(|(_, o)| o)
    }

    /// Returns the option with the specified long name.
    pub fn get_by_long_name(&self, long: &str) -> Option<&Opt> {
        self.find_by_long_name(long).map(|(_, o)| o)
    }

    /// Like [OptSet::get_by_short_name()], but also returns the
    /// insertion index of the option.
    pub(crate) fn find_by_short_name(&self, short: char) -> Option<(usize, &Opt)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, o)| o.short == Some(short))
    }

    pub(crate) fn find_by_long_name(&self, long: &str) -> Option<(usize, &Opt)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, o)| o.long_name() == Some(long))
    }

    /// Generate the option section of a help/usage statement.
    ///
    /// One line per option, in the order they were added, with the
    /// descriptions aligned:
    ///
    /// ```text
    ///   -l, --lines=NBLINES  output only NBLINES lines
    ///   -n, --number         number all output lines
    ///       --help           display this help and exit
    /// ```
    pub fn help_message(&self) -> String {
        let names: Vec<String> = self.entries.iter().map(|o| o.to_string()).collect();

        let width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);

        let lines: Vec<String> = names
            .iter()
            .zip(self.entries.iter())
            .map(|(name, opt)| {
                let line = format!(
                    "{}{:<width$}{}{}",
                    HELP_INDENT,
                    name,
                    HELP_GAP,
                    opt.help,
                    width = width
                );

                line.trim_end().to_string()
            })
            .collect();

        lines.join("\n")
    }
}

impl fmt::Display for OptSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.help_message())
    }
}

impl<'a> IntoIterator for &'a OptSet {
    type Item = &'a Opt;
    type IntoIter = slice::Iter<'a, Opt>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

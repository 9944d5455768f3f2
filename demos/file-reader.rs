// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// A `cat`-like program showing short and long options, option values
/// and positional arguments.
///
/// ```bash
/// $ cargo run --example file-reader -- -nl 5 Cargo.toml src/lib.rs
/// $ cargo run --example file-reader -- --lines=5 --number Cargo.toml
/// ```
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::exit;

use dashopt::{Opt, OptSet, Parser, Result, NO_SHORT_NAME};

const NAME: &str = "file-reader";
const VERSION: &str = "1.0";

struct Options {
    lines: Opt,
    number: Opt,
    help: Opt,
    version: Opt,
}

impl Options {
    fn new() -> Result<Self> {
        Ok(Options {
            lines: Opt::with_value('l', "lines", "output only NBLINES lines")?
                .value_name("NBLINES"),
            number: Opt::new('n', "number", "number all output lines")?,
            help: Opt::new(NO_SHORT_NAME, "help", "display this help and exit")?,
            version: Opt::new(
                NO_SHORT_NAME,
                "version",
                "output version information and exit",
            )?,
        })
    }

    fn to_set(&self) -> Result<OptSet> {
        let mut opts = OptSet::new();

        opts.add(self.lines.clone())?;
        opts.add(self.number.clone())?;
        opts.add(self.help.clone())?;
        opts.add(self.version.clone())?;

        Ok(opts)
    }
}

/// Write the lines of all files, stopping after `limit` lines in total.
fn write_files(files: &[String], number: bool, limit: Option<usize>) -> io::Result<()> {
    let mut count = 0;

    for file in files {
        let reader = BufReader::new(File::open(file)?);

        for line in reader.lines() {
            if limit.map_or(false, |limit| count >= limit) {
                return Ok(());
            }

            let line = line?;
            count += 1;

            if number {
                println!("{} {}", count, line);
            } else {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

fn real_main() -> std::result::Result<(), String> {
    let options = Options::new().map_err(|e| e.to_string())?;
    let opts = options.to_set().map_err(|e| e.to_string())?;

    let mut parser = Parser::new(NAME);

    // The parse error is already formatted for the user.
    let matches = parser.parse_env(&opts).map_err(|e| e.to_string())?;

    if matches.is_set(&options.version) {
        println!("{} {}", NAME, VERSION);
        return Ok(());
    }

    if matches.is_set(&options.help) || dashopt::get_args().is_empty() {
        println!("{} [OPTION] FILE ...", NAME);
        println!("{}", opts.help_message());
        return Ok(());
    }

    let limit = match matches.value(&options.lines) {
        Some(value) => match value.parse::<usize>() {
            Ok(n) if n > 0 => Some(n),
            _ => return Err("Invalid number of lines (has to be greater than 0)".into()),
        },
        None => None,
    };

    let files = matches.positionals();

    if files.is_empty() {
        return Err("Missing file(s)".into());
    }

    write_files(files, matches.is_set(&options.number), limit).map_err(|e| e.to_string())
}

fn main() {
    if let Err(e) = real_main() {
        eprintln!("{}", e);
        exit(1);
    }
}

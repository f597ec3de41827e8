// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Command line front end converting JSON reports into JUnit XML.
//!
//! The main thing in this module is [`Opts`], which composes the
//! [`junit::Cli`] options of a [`Converter`] with the input/output handling
//! of the `junit-formatter` binary.
//!
//! [`Converter`]: crate::Converter

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
    process::ExitCode,
};

use tracing_subscriber::{fmt, EnvFilter};

use crate::{
    error::Result,
    junit::{self, Converter},
    report::Report,
};

pub use clap::{Args, Parser};

/// Path meaning standard input or output.
const STDIO_PATH: &str = "-";

/// Root CLI (command line interface) of the `junit-formatter` binary.
#[derive(clap::Parser, Clone, Debug, Default)]
#[command(
    name = "junit-formatter",
    about = "Convert a JSON test report into a JUnit XML document",
    long_about = None
)]
pub struct Opts {
    /// JSON report to convert. Read from stdin if omitted or `-`.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// File to write the JUnit XML into. Written to stdout if omitted or
    /// `-`.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Exit with a non-zero code if any test failed.
    #[arg(long)]
    pub set_exit_code: bool,

    /// Increase logging verbosity (`-v` debug, `-vv` trace).
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// [`Converter`] CLI options.
    #[command(flatten)]
    pub junit: junit::Cli,
}

impl Opts {
    /// Shortcut for [`clap::Parser::parse()`], which doesn't require the
    /// trait being imported.
    #[must_use]
    pub fn parsed() -> Self {
        <Self as Parser>::parse()
    }

    /// Default logging level for the [`Opts::verbose`] count.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Summary of a successful conversion.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Outcome {
    /// Number of converted tests.
    pub tests: usize,

    /// Number of failed tests among them.
    pub failures: usize,
}

impl Outcome {
    /// Indicates whether this [`Outcome`] should fail the process.
    ///
    /// Failed tests only count if `set_exit_code` is enabled.
    #[must_use]
    pub const fn is_failure(self, set_exit_code: bool) -> bool {
        set_exit_code && self.failures > 0
    }

    /// Process [`ExitCode`] for this [`Outcome`].
    #[must_use]
    pub fn exit_code(self, set_exit_code: bool) -> ExitCode {
        if self.is_failure(set_exit_code) {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

/// Installs a formatting [`tracing`] subscriber logging into stderr.
///
/// Does nothing if a global subscriber is set already.
pub fn init_logging(opts: &Opts) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(opts.log_level()));
    drop(
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init(),
    );
}

/// Reads the [`Report`] as configured by the [`Opts`], converts it and
/// writes the resulting JUnit XML document.
///
/// # Errors
///
/// - [`Error::Io`] if the input can't be read or the output can't be
///   written.
/// - [`Error::Decode`] if the input isn't a valid JSON report.
/// - Any error of [`Converter::render()`].
///
/// [`Error::Decode`]: crate::Error::Decode
/// [`Error::Io`]: crate::Error::Io
pub fn run(opts: &Opts) -> Result<Outcome> {
    let report = read_report(opts.input.as_deref())?;
    tracing::debug!(packages = report.packages.len(), "read report");

    // Nothing is written unless the conversion succeeds.
    let document = Converter::new(opts.junit.to_config()).render(&report)?;
    match opts.output.as_deref().filter(|p| !is_stdio(p)) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "writing JUnit XML");
            write_document(File::create(path)?, &document)?;
        }
        None => write_document(io::stdout().lock(), &document)?,
    }

    Ok(Outcome { tests: report.test_count(), failures: report.failures() })
}

fn read_report(input: Option<&Path>) -> Result<Report> {
    let report = match input.filter(|p| !is_stdio(p)) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading report");
            serde_json::from_reader(BufReader::new(File::open(path)?))?
        }
        None => serde_json::from_reader(io::stdin().lock())?,
    };
    Ok(report)
}

fn write_document(output: impl io::Write, document: &[u8]) -> io::Result<()> {
    let mut output = BufWriter::new(output);
    output.write_all(document)?;
    output.flush()
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Report`] to [JUnit XML][1] converter.
//!
//! [1]: https://llg.cubic.org/docs/junit

use std::{
    io::{self, BufWriter, Write as _},
    slice,
};

use smart_default::SmartDefault;

use crate::{error::Result, report::Report};

use super::{builder, model::TestSuite, serialize};

/// Value of the `go.version` property when none is configured.
pub const UNKNOWN_GO_VERSION: &str = "unknown";

/// Configuration of a [`Converter`].
#[derive(Clone, Debug, Eq, PartialEq, SmartDefault)]
pub struct Config {
    /// Value of the `go.version` property of the produced test suite.
    #[default(UNKNOWN_GO_VERSION.to_owned())]
    pub go_version: String,

    /// Explicit test suite name, used instead of deriving one from the first
    /// package name.
    pub suite_name: Option<String>,
}

impl Config {
    /// Creates a new [`Config`] with the given `go.version` property value.
    #[must_use]
    pub fn with_go_version(go_version: impl Into<String>) -> Self {
        Self { go_version: go_version.into(), ..Self::default() }
    }
}

/// Converter of a [`Report`] into a [JUnit XML][1] document containing a
/// single `testsuite` for all the packages of the [`Report`].
///
/// [1]: https://llg.cubic.org/docs/junit
#[derive(Clone, Debug, Default)]
pub struct Converter {
    config: Config,
}

impl Converter {
    /// Creates a new [`Converter`] with the given [`Config`].
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns [`Config`] of this [`Converter`].
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the [`TestSuite`] representing the given [`Report`] without
    /// serializing it.
    ///
    /// # Errors
    ///
    /// See [`builder::build_suite()`].
    pub fn build_suite(&self, report: &Report) -> Result<TestSuite> {
        builder::build_suite(report, &self.config)
    }

    /// Converts the given [`Report`] and writes the resulting XML document
    /// into the `output`.
    ///
    /// The document is fully serialized before anything is written, so only
    /// an [`Error::Io`] may leave partial output behind.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyReport`] if the [`Report`] has no packages.
    /// - [`Error::MalformedPackageName`] if the suite name can't be derived.
    /// - [`Error::InvalidCharacter`] or [`Error::Xml`] if the document can't
    ///   be encoded.
    /// - [`Error::Io`] if writing into the `output` fails.
    ///
    /// [`Error::EmptyReport`]: crate::Error::EmptyReport
    /// [`Error::InvalidCharacter`]: crate::Error::InvalidCharacter
    /// [`Error::Io`]: crate::Error::Io
    /// [`Error::MalformedPackageName`]: crate::Error::MalformedPackageName
    /// [`Error::Xml`]: crate::Error::Xml
    pub fn convert(&self, report: &Report, output: impl io::Write) -> Result<()> {
        let document = self.render(report)?;

        let mut output = BufWriter::new(output);
        output.write_all(&document)?;
        output.flush()?;

        tracing::trace!(bytes = document.len(), "wrote JUnit XML document");
        Ok(())
    }

    /// Converts the given [`Report`] into an in-memory XML document.
    ///
    /// # Errors
    ///
    /// Same as [`Converter::convert()`], except [`Error::Io`].
    ///
    /// [`Error::Io`]: crate::Error::Io
    pub fn render(&self, report: &Report) -> Result<Vec<u8>> {
        let suite = self.build_suite(report)?;

        let mut document = Vec::new();
        serialize::write_document(slice::from_ref(&suite), &mut document)?;
        Ok(document)
    }
}

/// Converts the given [`Report`] into a [JUnit XML][1] document written into
/// the `output`, using `go_version` as the `go.version` property value.
///
/// # Errors
///
/// See [`Converter::convert()`].
///
/// [1]: https://llg.cubic.org/docs/junit
pub fn convert(
    report: &Report,
    output: impl io::Write,
    go_version: impl Into<String>,
) -> Result<()> {
    Converter::new(Config::with_go_version(go_version)).convert(report, output)
}

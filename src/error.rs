// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors of converting a [`Report`] into a JUnit XML document.
//!
//! [`Report`]: crate::Report

use std::io;

use derive_more::with_trait::{Display, Error as StdError};

/// Error of converting a [`Report`] into a JUnit XML document.
///
/// Nothing is written into the output when conversion fails with anything
/// but an [`Error::Io`]. An [`Error::Io`] may leave a partially written
/// document in the output.
///
/// [`Report`]: crate::Report
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// [`Report`] has no packages to form a test suite from.
    ///
    /// [`Report`]: crate::Report
    #[display("No report found: report contains no packages")]
    EmptyReport,

    /// Name of the first package has no `/`-separated prefix to derive the
    /// test suite name from.
    #[display(
        "Malformed package name `{name}`: \
         no `/` separator to derive test suite name from"
    )]
    MalformedPackageName {
        /// Offending package name.
        #[error(not(source))]
        name: String,
    },

    /// Character not allowed in an XML 1.0 document.
    #[display("Invalid XML character {ch:?} in {field}")]
    InvalidCharacter {
        /// Which part of the test suite contains the character.
        #[error(not(source))]
        field: &'static str,

        /// Offending character.
        #[error(not(source))]
        ch: char,
    },

    /// XML encoding failed.
    #[display("XML serialization failed: {_0}")]
    Xml(quick_xml::Error),

    /// Reading the input or writing the output failed.
    #[display("I/O error: {_0}")]
    Io(io::Error),

    /// Failed to decode a JSON report.
    #[cfg(feature = "cli")]
    #[display("Failed to decode report: {_0}")]
    Decode(serde_json::Error),
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new [`Error::MalformedPackageName`].
    #[must_use]
    pub fn malformed_package_name(name: impl Into<String>) -> Self {
        Self::MalformedPackageName { name: name.into() }
    }

    /// Returns true if this is an [`Error::EmptyReport`].
    #[must_use]
    pub const fn is_empty_report(&self) -> bool {
        matches!(self, Self::EmptyReport)
    }

    /// Returns true if this is an [`Error::MalformedPackageName`].
    #[must_use]
    pub const fn is_malformed_package_name(&self) -> bool {
        matches!(self, Self::MalformedPackageName { .. })
    }

    /// Returns true if the document couldn't be encoded.
    #[must_use]
    pub const fn is_serialization_error(&self) -> bool {
        matches!(self, Self::InvalidCharacter { .. } | Self::Xml(_))
    }

    /// Returns true if this is an [`Error::Io`].
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err)
    }
}

#[cfg(feature = "cli")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err)
    }
}

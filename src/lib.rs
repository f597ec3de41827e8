// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversion of collected test reports into [JUnit XML][1] documents
//! consumable by CI dashboards.
//!
//! A [`Report`] of packages and their tests is mapped onto a single JUnit
//! `testsuite` and written as a tab-indented XML document.
//!
//! # Example
//!
//! ```rust
//! use junit_formatter::{Package, Report, Test, TestResult};
//!
//! let report = Report::new([Package::new("github.com/org/repo/pkg", 1500)
//!     .with_test(Test::new("TestA", 500, TestResult::Pass))
//!     .with_test(
//!         Test::new("TestB", 1000, TestResult::Fail)
//!             .with_output(["assert failed", "line 2"]),
//!     )]);
//!
//! let mut xml = Vec::new();
//! junit_formatter::convert(&report, &mut xml, "go1.21.0").unwrap();
//!
//! let xml = String::from_utf8(xml).unwrap();
//! assert!(xml.contains(r#"<testsuite tests="2" failures="1" time="1.500""#));
//! ```
//!
//! [1]: https://llg.cubic.org/docs/junit

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    trivial_casts,
    trivial_numeric_casts
)]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

#[cfg(feature = "cli")]
#[cfg_attr(docsrs, doc(cfg(feature = "cli")))]
pub mod cli;
pub mod error;
pub mod junit;
pub mod report;

#[doc(inline)]
pub use self::{
    error::{Error, Result},
    junit::{convert, Config, Converter},
    report::{Package, Report, Test, TestResult},
};

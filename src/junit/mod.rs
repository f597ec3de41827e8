// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [JUnit XML report][1] generation.
//!
//! - [`builder`]: mapping of a [`Report`] onto a single [`TestSuite`]
//! - [`cli`]: CLI options of a [`Converter`]
//! - [`converter`]: [`Converter`] and its [`Config`]
//! - [`model`]: JUnit XML elements
//! - [`serialize`]: XML encoding of [`TestSuite`]s
//!
//! [`Report`]: crate::Report
//! [1]: https://llg.cubic.org/docs/junit

pub mod builder;
pub mod cli;
pub mod converter;
pub mod model;
pub mod serialize;

pub use self::{
    builder::{format_time, GO_VERSION_PROPERTY},
    cli::Cli,
    converter::{convert, Config, Converter, UNKNOWN_GO_VERSION},
    model::{Failure, Property, TestCase, TestSuite},
};

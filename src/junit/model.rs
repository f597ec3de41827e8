// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [JUnit XML][1] document elements.
//!
//! [1]: https://llg.cubic.org/docs/junit

/// [JUnit `testsuite`][1] element.
///
/// [1]: https://llg.cubic.org/docs/junit
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TestSuite {
    /// Number of [`TestCase`]s in this [`TestSuite`].
    pub tests: usize,

    /// Number of [`TestCase`]s carrying a [`Failure`].
    pub failures: usize,

    /// Total duration in seconds, formatted with 3 fractional digits.
    pub time: String,

    /// Name of this [`TestSuite`].
    pub name: String,

    /// [`Property`]s of this [`TestSuite`].
    pub properties: Vec<Property>,

    /// [`TestCase`]s in reporting order.
    pub test_cases: Vec<TestCase>,
}

/// [JUnit `testcase`][1] element.
///
/// [1]: https://llg.cubic.org/docs/junit
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TestCase {
    /// Grouping label of this [`TestCase`].
    pub classname: String,

    /// Name of this [`TestCase`].
    pub name: String,

    /// Duration in seconds, formatted with 3 fractional digits.
    pub time: String,

    /// [`Failure`] of this [`TestCase`], if it failed.
    pub failure: Option<Failure>,
}

impl TestCase {
    /// Indicates whether this [`TestCase`] carries a [`Failure`].
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        self.failure.is_some()
    }
}

/// [JUnit `failure`][1] element.
///
/// [1]: https://llg.cubic.org/docs/junit
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Failure {
    /// `message` attribute.
    pub message: String,

    /// `type` attribute.
    pub ty: String,

    /// Character data of the element.
    pub contents: String,
}

/// [JUnit `property`][1] element.
///
/// [1]: https://llg.cubic.org/docs/junit
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Property {
    /// Name of this [`Property`].
    pub name: String,

    /// Value of this [`Property`].
    pub value: String,
}

impl Property {
    /// Creates a new [`Property`].
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Input model of a collected test run.
//!
//! A [`Report`] is produced by whatever collected the test results (a test
//! output parser, a test runner) and is only read here.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Full result set of a test run, grouped by [`Package`]s.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Report {
    /// [`Package`]s in the order they were reported.
    pub packages: Vec<Package>,
}

impl Report {
    /// Creates a new [`Report`] out of the given [`Package`]s.
    #[must_use]
    pub fn new(packages: impl IntoIterator<Item = Package>) -> Self {
        Self { packages: packages.into_iter().collect() }
    }

    /// Indicates whether this [`Report`] has no [`Package`]s at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Total number of [`Test`]s across all [`Package`]s.
    #[must_use]
    pub fn test_count(&self) -> usize {
        self.packages.iter().map(|p| p.tests.len()).sum()
    }

    /// Number of [`Test`]s across all [`Package`]s which have
    /// [`TestResult::Fail`]ed.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.packages.iter().map(Package::failures).sum()
    }
}

/// Named group of [`Test`]s, like a source module.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Package {
    /// `/`-separated path of this [`Package`], like
    /// `github.com/org/repo/pkg`.
    pub name: String,

    /// Total duration of this [`Package`] in milliseconds.
    pub time: u64,

    /// [`Test`]s of this [`Package`] in execution order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tests: Vec<Test>,
}

impl Package {
    /// Creates a new [`Package`] without any [`Test`]s.
    #[must_use]
    pub fn new(name: impl Into<String>, time: u64) -> Self {
        Self { name: name.into(), time, tests: vec![] }
    }

    /// Appends the given [`Test`] to this [`Package`].
    #[must_use]
    pub fn with_test(mut self, test: Test) -> Self {
        self.tests.push(test);
        self
    }

    fn failures(&self) -> usize {
        self.tests.iter().filter(|t| t.result.is_failed()).count()
    }
}

/// Single executed test.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Test {
    /// Name of this [`Test`].
    pub name: String,

    /// Duration of this [`Test`] in milliseconds.
    pub time: u64,

    /// Outcome of this [`Test`].
    pub result: TestResult,

    /// Captured output lines. Only reported for failed [`Test`]s.
    #[cfg_attr(feature = "serde", serde(default))]
    pub output: Vec<String>,
}

impl Test {
    /// Creates a new [`Test`] without any captured output.
    #[must_use]
    pub fn new(name: impl Into<String>, time: u64, result: TestResult) -> Self {
        Self { name: name.into(), time, result, output: vec![] }
    }

    /// Replaces captured output of this [`Test`] with the given lines.
    #[must_use]
    pub fn with_output<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output = lines.into_iter().map(Into::into).collect();
        self
    }
}

/// Outcome of a [`Test`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum TestResult {
    /// [`Test`] passed.
    Pass,

    /// [`Test`] failed.
    Fail,

    /// [`Test`] was skipped.
    Skip,
}

impl TestResult {
    /// Indicates whether this is a [`TestResult::Fail`].
    #[must_use]
    pub const fn is_failed(self) -> bool {
        matches!(self, Self::Fail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report::new([
            Package::new("a/b", 10)
                .with_test(Test::new("TestOne", 4, TestResult::Pass))
                .with_test(Test::new("TestTwo", 6, TestResult::Fail)),
            Package::new("a/c", 3)
                .with_test(Test::new("TestThree", 1, TestResult::Skip))
                .with_test(Test::new("TestFour", 2, TestResult::Fail)),
        ])
    }

    #[test]
    fn counts_tests_across_packages() {
        assert_eq!(sample().test_count(), 4);
    }

    #[test]
    fn counts_only_failed_tests() {
        assert_eq!(sample().failures(), 2);
    }

    #[test]
    fn empty_report_has_nothing() {
        let report = Report::default();

        assert!(report.is_empty());
        assert_eq!(report.test_count(), 0);
        assert_eq!(report.failures(), 0);
    }

    #[test]
    fn with_output_replaces_lines() {
        let test = Test::new("TestOut", 0, TestResult::Fail)
            .with_output(["first"])
            .with_output(["second", "third"]);

        assert_eq!(test.output, ["second", "third"]);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn deserializes_uppercase_results() {
        let json = r#"{"packages": [{"name": "x/y", "time": 5, "tests": [
            {"name": "TestA", "time": 5, "result": "FAIL", "output": ["boom"]},
            {"name": "TestB", "time": 0, "result": "SKIP"}
        ]}]}"#;

        let report: Report = serde_json::from_str(json).unwrap();

        assert_eq!(
            report,
            Report::new([Package::new("x/y", 5)
                .with_test(
                    Test::new("TestA", 5, TestResult::Fail)
                        .with_output(["boom"]),
                )
                .with_test(Test::new("TestB", 0, TestResult::Skip))]),
        );
    }
}

// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Mapping of a [`Report`] onto a single [`TestSuite`].

use crate::{
    error::{Error, Result},
    report::{Report, Test},
};

use super::{
    converter::Config,
    model::{Failure, Property, TestCase, TestSuite},
};

/// Name of the [`Property`] holding the toolchain version.
pub const GO_VERSION_PROPERTY: &str = "go.version";

/// `message` of every [`Failure`].
const FAILURE_MESSAGE: &str = "Failed";

/// Formats the given milliseconds as seconds with exactly 3 fractional
/// digits.
#[must_use]
pub fn format_time(millis: u64) -> String {
    format!("{}.{:03}", millis / 1000, millis % 1000)
}

/// Derives a [`TestSuite`] name from a package name by stripping its last
/// `/`-separated segment.
///
/// # Errors
///
/// If the `package_name` contains no `/`.
pub fn suite_name(package_name: &str) -> Result<&str> {
    package_name
        .rsplit_once('/')
        .map(|(prefix, _)| prefix)
        .ok_or_else(|| Error::malformed_package_name(package_name))
}

/// Derives a [`TestCase::classname`] from a package name: its last
/// `/`-separated segment, or the whole name if there is no `/`.
#[must_use]
pub fn classname(package_name: &str) -> &str {
    package_name
        .rsplit_once('/')
        .map_or(package_name, |(_, last)| last)
}

/// Builds one [`TestSuite`] covering all the [`Package`]s of the given
/// [`Report`].
///
/// # Errors
///
/// - [`Error::EmptyReport`] if the [`Report`] has no [`Package`]s.
/// - [`Error::MalformedPackageName`] if no [`Config::suite_name`] is set and
///   the first [`Package`] name has no `/`.
///
/// [`Package`]: crate::Package
pub fn build_suite(report: &Report, config: &Config) -> Result<TestSuite> {
    let first = report.packages.first().ok_or(Error::EmptyReport)?;
    let name = match &config.suite_name {
        Some(name) => name.clone(),
        None => suite_name(&first.name)?.to_owned(),
    };

    let mut suite = TestSuite {
        name,
        properties: vec![Property::new(
            GO_VERSION_PROPERTY,
            config.go_version.as_str(),
        )],
        ..TestSuite::default()
    };

    let mut total_millis = 0_u64;
    for pkg in &report.packages {
        let classname = classname(&pkg.name);
        total_millis = total_millis.saturating_add(pkg.time);

        for test in &pkg.tests {
            let case = build_test_case(classname, test);
            suite.tests += 1;
            if case.is_failed() {
                suite.failures += 1;
            }
            suite.test_cases.push(case);
        }
    }
    suite.time = format_time(total_millis);

    tracing::debug!(
        name = %suite.name,
        packages = report.packages.len(),
        tests = suite.tests,
        failures = suite.failures,
        "built JUnit test suite"
    );

    Ok(suite)
}

/// Forms a [`TestCase`] out of a [`Test`], attaching a [`Failure`] only if
/// it has failed.
fn build_test_case(classname: &str, test: &Test) -> TestCase {
    TestCase {
        classname: classname.to_owned(),
        name: test.name.clone(),
        time: format_time(test.time),
        failure: test.result.is_failed().then(|| Failure {
            message: FAILURE_MESSAGE.to_owned(),
            ty: String::new(),
            contents: test.output.join("\n"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::report::{Package, TestResult};

    use super::*;

    fn config() -> Config {
        Config::with_go_version("go1.21.0")
    }

    #[test]
    fn formats_time_with_three_decimals() {
        assert_eq!(format_time(0), "0.000");
        assert_eq!(format_time(7), "0.007");
        assert_eq!(format_time(500), "0.500");
        assert_eq!(format_time(1500), "1.500");
        assert_eq!(format_time(61_234), "61.234");
    }

    #[test]
    fn suite_name_strips_last_segment() {
        assert_eq!(
            suite_name("github.com/org/repo/pkgname").unwrap(),
            "github.com/org/repo",
        );
        assert_eq!(suite_name("a/").unwrap(), "a");
        assert_eq!(suite_name("/root").unwrap(), "");
    }

    #[test]
    fn suite_name_requires_separator() {
        let err = suite_name("pkgname").unwrap_err();

        assert!(err.is_malformed_package_name());
    }

    #[test]
    fn classname_is_last_segment_or_whole_name() {
        assert_eq!(classname("github.com/org/repo/pkgname"), "pkgname");
        assert_eq!(classname("pkgname"), "pkgname");
        assert_eq!(classname("trailing/"), "");
    }

    #[test]
    fn rejects_empty_report() {
        let err = build_suite(&Report::default(), &config()).unwrap_err();

        assert!(err.is_empty_report());
    }

    #[test]
    fn empty_check_precedes_suite_name_override() {
        let config = Config {
            suite_name: Some("explicit".into()),
            ..config()
        };

        let err = build_suite(&Report::default(), &config).unwrap_err();

        assert!(err.is_empty_report());
    }

    #[test]
    fn suite_name_override_skips_derivation() {
        let report = Report::new([Package::new("single", 10)
            .with_test(Test::new("TestA", 10, TestResult::Pass))]);
        let config = Config {
            suite_name: Some("explicit".into()),
            ..config()
        };

        let suite = build_suite(&report, &config).unwrap();

        assert_eq!(suite.name, "explicit");
        assert_eq!(suite.test_cases[0].classname, "single");
    }

    #[test]
    fn only_first_package_names_suite() {
        let report = Report::new([
            Package::new("a/b/first", 1),
            Package::new("single", 1),
        ]);

        let suite = build_suite(&report, &config()).unwrap();

        assert_eq!(suite.name, "a/b");
    }

    #[test]
    fn builds_single_package_scenario() {
        let report = Report::new([Package::new(
            "github.com/org/repo/pkgname",
            1500,
        )
        .with_test(Test::new("TestA", 500, TestResult::Pass))
        .with_test(
            Test::new("TestB", 1000, TestResult::Fail)
                .with_output(["assert failed", "line 2"]),
        )]);

        let suite = build_suite(&report, &config()).unwrap();

        assert_eq!(
            suite,
            TestSuite {
                tests: 2,
                failures: 1,
                time: "1.500".into(),
                name: "github.com/org/repo".into(),
                properties: vec![Property::new("go.version", "go1.21.0")],
                test_cases: vec![
                    TestCase {
                        classname: "pkgname".into(),
                        name: "TestA".into(),
                        time: "0.500".into(),
                        failure: None,
                    },
                    TestCase {
                        classname: "pkgname".into(),
                        name: "TestB".into(),
                        time: "1.000".into(),
                        failure: Some(Failure {
                            message: "Failed".into(),
                            ty: String::new(),
                            contents: "assert failed\nline 2".into(),
                        }),
                    },
                ],
            },
        );
    }

    #[test]
    fn preserves_package_then_test_order() {
        let report = Report::new([
            Package::new("x/alpha", 200)
                .with_test(Test::new("TestZ", 100, TestResult::Fail))
                .with_test(Test::new("TestA", 100, TestResult::Pass)),
            Package::new("x/beta", 300)
                .with_test(Test::new("TestA", 150, TestResult::Pass))
                .with_test(Test::new("TestA", 150, TestResult::Fail)),
        ]);

        let suite = build_suite(&report, &config()).unwrap();

        let cases = suite
            .test_cases
            .iter()
            .map(|c| (c.classname.as_str(), c.name.as_str(), c.is_failed()))
            .collect::<Vec<_>>();
        assert_eq!(
            cases,
            [
                ("alpha", "TestZ", true),
                ("alpha", "TestA", false),
                ("beta", "TestA", false),
                ("beta", "TestA", true),
            ],
        );
        assert_eq!(suite.tests, 4);
        assert_eq!(suite.failures, 2);
        assert_eq!(suite.time, "0.500");
    }

    #[test]
    fn skipped_tests_carry_no_failure() {
        let report = Report::new([Package::new("x/y", 0).with_test(
            Test::new("TestSkip", 0, TestResult::Skip).with_output(["skip"]),
        )]);

        let suite = build_suite(&report, &config()).unwrap();

        assert_eq!(suite.tests, 1);
        assert_eq!(suite.failures, 0);
        assert!(suite.test_cases[0].failure.is_none());
    }

    #[test]
    fn failure_without_output_has_empty_contents() {
        let report = Report::new([Package::new("x/y", 0)
            .with_test(Test::new("TestFail", 0, TestResult::Fail))]);

        let suite = build_suite(&report, &config()).unwrap();

        let failure = suite.test_cases[0].failure.as_ref().unwrap();
        assert_eq!(failure.contents, "");
    }

    #[test]
    fn package_without_tests_still_counts_time() {
        let report = Report::new([
            Package::new("x/empty", 250),
            Package::new("x/full", 750)
                .with_test(Test::new("TestA", 700, TestResult::Pass)),
        ]);

        let suite = build_suite(&report, &config()).unwrap();

        assert_eq!(suite.tests, 1);
        assert_eq!(suite.time, "1.000");
    }
}

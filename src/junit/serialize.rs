// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Serialization of [`TestSuite`]s into a [JUnit XML][1] document.
//!
//! [1]: https://llg.cubic.org/docs/junit

use std::{borrow::Cow, io};

use quick_xml::{
    escape::escape,
    events::{
        attributes::Attribute, BytesDecl, BytesEnd, BytesStart, BytesText,
        Event,
    },
    name::QName,
    Writer,
};

use crate::error::{Error, Result};

use super::model::{Failure, Property, TestCase, TestSuite};

const TESTSUITE_TAG: &str = "testsuite";
const PROPERTIES_TAG: &str = "properties";
const PROPERTY_TAG: &str = "property";
const TESTCASE_TAG: &str = "testcase";
const FAILURE_TAG: &str = "failure";

/// Writes the given [`TestSuite`]s as a tab-indented XML document with an
/// XML declaration and a trailing newline.
///
/// Every [`TestSuite`] is a top-level element, so a single [`TestSuite`]
/// results in a document rooted at `<testsuite>`.
///
/// # Errors
///
/// - [`Error::InvalidCharacter`] if any string isn't representable in
///   XML 1.0. Nothing is written in this case.
/// - [`Error::Xml`] if writing into the `output` fails.
pub fn write_document(suites: &[TestSuite], output: impl io::Write) -> Result<()> {
    suites.iter().try_for_each(validate_suite)?;

    let mut writer = Writer::new_with_indent(output, b'\t', 1);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    for suite in suites {
        serialize_suite(suite, &mut writer)?;
    }
    writer.get_mut().write_all(b"\n")?;

    Ok(())
}

fn serialize_suite(
    suite: &TestSuite,
    writer: &mut Writer<impl io::Write>,
) -> quick_xml::Result<()> {
    // Destructuring makes sure every field is handled.
    let TestSuite { tests, failures, time, name, properties, test_cases } =
        suite;

    let mut tag = BytesStart::new(TESTSUITE_TAG);
    push_attribute(&mut tag, "tests", &tests.to_string());
    push_attribute(&mut tag, "failures", &failures.to_string());
    push_attribute(&mut tag, "time", time);
    push_attribute(&mut tag, "name", name);
    writer.write_event(Event::Start(tag))?;

    if !properties.is_empty() {
        writer.write_event(Event::Start(BytesStart::new(PROPERTIES_TAG)))?;
        for property in properties {
            serialize_property(property, writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(PROPERTIES_TAG)))?;
    }

    for case in test_cases {
        serialize_test_case(case, writer)?;
    }

    writer.write_event(Event::End(BytesEnd::new(TESTSUITE_TAG)))
}

fn serialize_property(
    property: &Property,
    writer: &mut Writer<impl io::Write>,
) -> quick_xml::Result<()> {
    let Property { name, value } = property;

    let mut tag = BytesStart::new(PROPERTY_TAG);
    push_attribute(&mut tag, "name", name);
    push_attribute(&mut tag, "value", value);
    serialize_childless(tag, writer)
}

fn serialize_test_case(
    case: &TestCase,
    writer: &mut Writer<impl io::Write>,
) -> quick_xml::Result<()> {
    let TestCase { classname, name, time, failure } = case;

    let mut tag = BytesStart::new(TESTCASE_TAG);
    push_attribute(&mut tag, "classname", classname);
    push_attribute(&mut tag, "name", name);
    push_attribute(&mut tag, "time", time);

    let Some(failure) = failure else {
        return serialize_childless(tag, writer);
    };
    writer.write_event(Event::Start(tag))?;
    serialize_failure(failure, writer)?;
    writer.write_event(Event::End(BytesEnd::new(TESTCASE_TAG)))
}

fn serialize_failure(
    failure: &Failure,
    writer: &mut Writer<impl io::Write>,
) -> quick_xml::Result<()> {
    let Failure { message, ty, contents } = failure;

    let mut tag = BytesStart::new(FAILURE_TAG);
    push_attribute(&mut tag, "message", message);
    push_attribute(&mut tag, "type", ty);
    writer.write_event(Event::Start(tag))?;
    let text = BytesText::from_escaped(escape_text(contents));
    writer.write_event(Event::Text(text))?;
    writer.write_event(Event::End(BytesEnd::new(FAILURE_TAG)))
}

/// Writes an element without children as `<tag ...></tag>` on one line.
fn serialize_childless(
    tag: BytesStart<'_>,
    writer: &mut Writer<impl io::Write>,
) -> quick_xml::Result<()> {
    let end = tag.to_end().into_owned();
    writer.write_event(Event::Start(tag))?;
    // Empty text keeps the closing tag on the same line.
    writer.write_event(Event::Text(BytesText::new("")))?;
    writer.write_event(Event::End(end))
}

/// Pushes an attribute with its `value` escaped so that whitespace survives
/// attribute value normalization of XML parsers.
fn push_attribute(tag: &mut BytesStart<'_>, key: &str, value: &str) {
    tag.push_attribute(Attribute {
        key: QName(key.as_bytes()),
        value: match escape_attribute(value) {
            Cow::Borrowed(v) => Cow::Borrowed(v.as_bytes()),
            Cow::Owned(v) => Cow::Owned(v.into_bytes()),
        },
    });
}

/// Escapes markup characters, and tabs, line feeds and carriage returns as
/// character references.
fn escape_attribute(value: &str) -> Cow<'_, str> {
    let escaped = escape(value);
    if !escaped.contains(|c: char| matches!(c, '\t' | '\n' | '\r')) {
        return escaped;
    }
    escaped
        .replace('\t', "&#x9;")
        .replace('\n', "&#xA;")
        .replace('\r', "&#xD;")
        .into()
}

/// Escapes markup characters, and carriage returns as character references,
/// so that line endings survive end-of-line normalization of XML parsers.
fn escape_text(value: &str) -> Cow<'_, str> {
    let escaped = escape(value);
    if !escaped.contains('\r') {
        return escaped;
    }
    escaped.replace('\r', "&#xD;").into()
}

fn validate_suite(suite: &TestSuite) -> Result<()> {
    validate("test suite name", &suite.name)?;
    for property in &suite.properties {
        validate("property name", &property.name)?;
        validate("property value", &property.value)?;
    }
    for case in &suite.test_cases {
        validate("test case classname", &case.classname)?;
        validate("test case name", &case.name)?;
        if let Some(failure) = &case.failure {
            validate("failure message", &failure.message)?;
            validate("failure type", &failure.ty)?;
            validate("failure contents", &failure.contents)?;
        }
    }
    Ok(())
}

/// Checks the given string against the XML 1.0 `Char` production.
fn validate(field: &'static str, value: &str) -> Result<()> {
    match value.chars().find(|&ch| !is_xml_char(ch)) {
        Some(ch) => Err(Error::InvalidCharacter { field, ch }),
        None => Ok(()),
    }
}

const fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

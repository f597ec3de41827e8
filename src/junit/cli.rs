// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI options of a [`Converter`].
//!
//! [`Converter`]: super::Converter

use super::Config;

/// CLI options of a [`Converter`].
///
/// [`Converter`]: super::Converter
#[derive(Clone, Debug, Default, clap::Args)]
#[group(skip)]
pub struct Cli {
    /// Value of the `go.version` property in the generated XML.
    #[arg(long, value_name = "VERSION", global = true)]
    pub go_version: Option<String>,

    /// Test suite name to use instead of the one derived from the first
    /// package name.
    #[arg(long, value_name = "NAME", global = true)]
    pub suite_name: Option<String>,
}

impl Cli {
    /// Applies these [`Cli`] options on top of the given [`Config`].
    #[must_use]
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(go_version) = self.go_version {
            config.go_version = go_version;
        }
        if let Some(name) = self.suite_name {
            config.suite_name = Some(name);
        }
        config
    }

    /// Converts these [`Cli`] options into a [`Config`].
    #[must_use]
    pub fn to_config(&self) -> Config {
        self.clone().apply(Config::default())
    }
}

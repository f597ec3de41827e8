// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `junit-formatter` binary: converts a JSON test report into JUnit XML.

use std::process::ExitCode;

use junit_formatter::cli;

fn main() -> ExitCode {
    let opts = cli::Opts::parsed();
    cli::init_logging(&opts);

    match cli::run(&opts) {
        Ok(outcome) => {
            tracing::info!(
                tests = outcome.tests,
                failures = outcome.failures,
                "converted report"
            );
            outcome.exit_code(opts.set_exit_code)
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

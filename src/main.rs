// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The stereoplot binary.

use clap::Parser;

fn main() {
    // Run stereoplot, only returning an error if there is one. Errors are
    // printed to stderr.
    if let Err(e) = stereoplot::Stereoplot::parse().run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::categories;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let cats = categories();
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &cats)? {
        let data = cats.iter().map(|c| vec![c.to_string()]).collect();
        println!("{}", pretty_table(&["Category"], data));
    }
    Ok(())
}

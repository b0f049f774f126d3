// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::routes::routes;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle() -> Result<()> {
    let data = routes()
        .iter()
        .map(|r| vec![r.path.to_string(), r.view.name().to_string()])
        .collect();
    println!("{}", pretty_table(&["Path", "View"], data));
    Ok(())
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use env_logger::Env;

use fintrack::api::ApiClient;
use fintrack::config::{self, Config};
use fintrack::{cli, commands};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let matches = cli::build_cli().get_matches();

    let mut cfg = Config::load().context("Load configuration")?;
    if let Some(url) = matches.get_one::<String>("base-url") {
        cfg.base_url = url.clone();
    }
    let api = ApiClient::from_config(&cfg).context("Build HTTP client")?;

    match matches.subcommand() {
        Some(("account", sub)) => commands::accounts::handle(&api, sub).await?,
        Some(("tx", sub)) => commands::transactions::handle(&api, sub).await?,
        Some(("budget", sub)) => commands::budgets::handle(&api, sub).await?,
        Some(("goal", sub)) => commands::goals::handle(&api, sub).await?,
        Some(("analytics", sub)) => commands::analytics::handle(&api, sub).await?,
        Some(("categories", sub)) => commands::categories::handle(sub)?,
        Some(("routes", _)) => commands::routes::handle()?,
        Some(("export", sub)) => commands::exporter::handle(&api, sub).await?,
        Some(("config", _)) => {
            println!("# {}", config::config_path()?.display());
            println!("{}", serde_json::to_string_pretty(&cfg)?);
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

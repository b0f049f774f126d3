// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

use crate::models::{AccountType, BudgetPeriod, TransactionType};

fn id_arg() -> Arg {
    Arg::new("id").required(true).help("Record id assigned by the backend")
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn opt(name: &'static str, required: bool) -> Arg {
    Arg::new(name).long(name).required(required)
}

fn account_cmd() -> Command {
    Command::new("account")
        .about("Manage accounts")
        .subcommand_required(true)
        .subcommand(json_flags(Command::new("list").about("List accounts")))
        .subcommand(
            Command::new("add")
                .about("Create an account")
                .arg(opt("name", true))
                .arg(opt("type", true).value_parser(AccountType::ALL))
                .arg(opt("balance", false).default_value("0"))
                .arg(opt("currency", true)),
        )
        .subcommand(
            Command::new("update")
                .about("Change fields of an account")
                .arg(id_arg())
                .arg(opt("name", false))
                .arg(opt("type", false).value_parser(AccountType::ALL))
                .arg(opt("balance", false))
                .arg(opt("currency", false)),
        )
        .subcommand(Command::new("rm").about("Delete an account").arg(id_arg()))
}

fn tx_cmd() -> Command {
    Command::new("tx")
        .about("Manage transactions")
        .subcommand_required(true)
        .subcommand(json_flags(
            Command::new("list")
                .about("List transactions, newest first")
                .arg(opt("category", false))
                .arg(opt("account", false))
                .arg(opt("limit", false).value_parser(value_parser!(usize))),
        ))
        .subcommand(
            Command::new("add")
                .about("Record a transaction")
                .arg(opt("account", true))
                .arg(opt("amount", true).allow_hyphen_values(true))
                .arg(opt("description", false).default_value(""))
                .arg(opt("category", true))
                .arg(opt("date", true))
                .arg(opt("type", true).value_parser(TransactionType::ALL)),
        )
        .subcommand(
            Command::new("update")
                .about("Change fields of a transaction")
                .arg(id_arg())
                .arg(opt("account", false))
                .arg(opt("amount", false).allow_hyphen_values(true))
                .arg(opt("description", false))
                .arg(opt("category", false))
                .arg(opt("date", false))
                .arg(opt("type", false).value_parser(TransactionType::ALL)),
        )
        .subcommand(Command::new("rm").about("Delete a transaction").arg(id_arg()))
}

fn budget_cmd() -> Command {
    Command::new("budget")
        .about("Manage budgets")
        .subcommand_required(true)
        .subcommand(json_flags(Command::new("list").about("List budgets")))
        .subcommand(
            Command::new("add")
                .about("Create a budget; spent is computed from this month's expenses")
                .arg(opt("category", true))
                .arg(opt("limit", true))
                .arg(
                    opt("period", false)
                        .value_parser(BudgetPeriod::ALL)
                        .default_value("monthly"),
                ),
        )
        .subcommand(
            Command::new("update")
                .about("Change fields of a budget and refresh spent")
                .arg(id_arg())
                .arg(opt("category", false))
                .arg(opt("limit", false))
                .arg(opt("period", false).value_parser(BudgetPeriod::ALL)),
        )
        .subcommand(Command::new("rm").about("Delete a budget").arg(id_arg()))
}

fn goal_cmd() -> Command {
    Command::new("goal")
        .about("Manage savings goals")
        .subcommand_required(true)
        .subcommand(json_flags(Command::new("list").about("List goals")))
        .subcommand(
            Command::new("add")
                .about("Create a goal")
                .arg(opt("name", true))
                .arg(opt("target", true))
                .arg(opt("current", false).default_value("0"))
                .arg(opt("deadline", true))
                .arg(opt("category", true)),
        )
        .subcommand(
            Command::new("update")
                .about("Change fields of a goal")
                .arg(id_arg())
                .arg(opt("name", false))
                .arg(opt("target", false))
                .arg(opt("current", false))
                .arg(opt("deadline", false))
                .arg(opt("category", false)),
        )
        .subcommand(Command::new("rm").about("Delete a goal").arg(id_arg()))
}

fn analytics_cmd() -> Command {
    Command::new("analytics")
        .about("Read aggregate figures")
        .subcommand_required(true)
        .subcommand(json_flags(
            Command::new("summary").about("Total balance, monthly income and expenses"),
        ))
        .subcommand(json_flags(
            Command::new("by-category").about("This month's expenses per category"),
        ))
        .subcommand(json_flags(
            Command::new("net-worth").about("Assets, liabilities and net worth per currency"),
        ))
        .subcommand(json_flags(
            Command::new("dashboard").about("Every account, transaction, budget and goal"),
        ))
}

fn export_cmd() -> Command {
    Command::new("export")
        .about("Export data to a file")
        .subcommand_required(true)
        .subcommand(
            Command::new("transactions")
                .about("Export all transactions")
                .arg(
                    opt("format", false)
                        .value_parser(["csv", "json"])
                        .default_value("csv"),
                )
                .arg(opt("out", true)),
        )
}

pub fn build_cli() -> Command {
    Command::new("fintrack")
        .version(clap::crate_version!())
        .about("Client for the personal finance REST API")
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .global(true)
                .help("Override the API base URL, e.g. http://localhost:8000/api"),
        )
        .subcommand(account_cmd())
        .subcommand(tx_cmd())
        .subcommand(budget_cmd())
        .subcommand(goal_cmd())
        .subcommand(analytics_cmd())
        .subcommand(json_flags(
            Command::new("categories").about("List the built-in categories"),
        ))
        .subcommand(Command::new("routes").about("Show the UI route table"))
        .subcommand(export_cmd())
        .subcommand(Command::new("config").about("Print the effective configuration"))
}

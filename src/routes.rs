// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    Dashboard,
    Accounts,
    Transactions,
    Budget,
    Goals,
    Analytics,
}

impl View {
    pub fn name(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Accounts => "Accounts",
            View::Transactions => "Transactions",
            View::Budget => "Budget",
            View::Goals => "Goals",
            View::Analytics => "Analytics",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            View::Dashboard => "/",
            View::Accounts => "/accounts",
            View::Transactions => "/transactions",
            View::Budget => "/budget",
            View::Goals => "/goals",
            View::Analytics => "/analytics",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub view: View,
}

pub const ROUTES: [Route; 6] = [
    Route { path: "/", view: View::Dashboard },
    Route { path: "/accounts", view: View::Accounts },
    Route { path: "/transactions", view: View::Transactions },
    Route { path: "/budget", view: View::Budget },
    Route { path: "/goals", view: View::Goals },
    Route { path: "/analytics", view: View::Analytics },
];

static BY_PATH: Lazy<HashMap<&'static str, View>> =
    Lazy::new(|| ROUTES.iter().map(|r| (r.path, r.view)).collect());

pub fn routes() -> &'static [Route] {
    &ROUTES
}

/// Exact match only; there are no parameters or nested paths.
pub fn resolve(path: &str) -> Option<View> {
    BY_PATH.get(path).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_path_resolves_to_its_own_view() {
        let mut seen = HashSet::new();
        for r in routes() {
            assert_eq!(resolve(r.path), Some(r.view));
            assert_eq!(r.view.path(), r.path);
            assert!(seen.insert(r.view), "{} mapped twice", r.view.name());
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        assert_eq!(resolve("/budgets"), None);
        assert_eq!(resolve("/accounts/"), None);
        assert_eq!(resolve(""), None);
    }
}

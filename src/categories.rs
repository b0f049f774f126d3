// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

/// Category labels offered by the pickers, in display order.
pub const CATEGORIES: [&str; 12] = [
    "Food & Dining",
    "Transportation",
    "Housing",
    "Shopping",
    "Entertainment",
    "Healthcare",
    "Education",
    "Travel",
    "Utilities",
    "Insurance",
    "Income",
    "Other",
];

pub fn categories() -> &'static [&'static str] {
    &CATEGORIES
}

pub fn is_known(name: &str) -> bool {
    CATEGORIES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn twelve_distinct_entries_in_fixed_order() {
        let cats = categories();
        assert_eq!(cats.len(), 12);
        assert_eq!(cats[0], "Food & Dining");
        assert_eq!(cats[11], "Other");
        let unique: HashSet<_> = cats.iter().collect();
        assert_eq!(unique.len(), cats.len());
        assert_eq!(categories(), cats);
    }

    #[test]
    fn membership_is_exact() {
        assert!(is_known("Travel"));
        assert!(!is_known("travel"));
        assert!(!is_known("Pets"));
    }
}

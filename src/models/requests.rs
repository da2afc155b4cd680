//! Request DTOs for the avatar API
//!
//! Parses the query string of incoming avatar requests.

use std::collections::BTreeSet;

/// Query parameter carrying the requested account names
pub const ACCOUNTS_PARAM: &str = "accounts";

/// Accounts requested from `GET /api/avatars`.
///
/// The parameter may be given once (`?accounts=alice`) or repeated
/// (`?accounts=alice&accounts=bob`, `?accounts[]=alice&accounts[]=bob`).
/// Duplicates and empty values are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountsQuery {
    accounts: BTreeSet<String>,
}

impl AccountsQuery {
    /// Builds the query from decoded `(name, value)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let accounts = pairs
            .into_iter()
            .filter(|(name, _)| {
                name == ACCOUNTS_PARAM || name.strip_suffix("[]") == Some(ACCOUNTS_PARAM)
            })
            .map(|(_, value)| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect();

        Self { accounts }
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// The distinct accounts, in sorted order.
    pub fn into_accounts(self) -> Vec<String> {
        self.accounts.into_iter().collect()
    }
}

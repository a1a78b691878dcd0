//! Ledger account entity and list filter

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::DEFAULT_PAGE_SIZE;

/// Account classification; must match the server's enum spelling exactly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccountType {
    #[default]
    Assets,
    Liabilities,
    Income,
    Expenses,
}

impl AccountType {
    pub const ALL: [AccountType; 4] = [
        AccountType::Assets,
        AccountType::Liabilities,
        AccountType::Income,
        AccountType::Expenses,
    ];
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Assets => write!(f, "Assets"),
            AccountType::Liabilities => write!(f, "Liabilities"),
            AccountType::Income => write!(f, "Income"),
            AccountType::Expenses => write!(f, "Expenses"),
        }
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "assets" => Ok(AccountType::Assets),
            "liabilities" => Ok(AccountType::Liabilities),
            "income" => Ok(AccountType::Income),
            "expenses" => Ok(AccountType::Expenses),
            other => Err(format!(
                "Invalid account type: '{}'. Use assets/liabilities/income/expenses",
                other
            )),
        }
    }
}

/// A ledger account as the API sends and receives it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LedgerAccount {
    pub id: Option<Uuid>,
    pub account_name: String,
    pub account_code: String,
    pub account_group: String,
    pub account_type: AccountType,
    pub description: String,
    pub created_at: String,
}

impl LedgerAccount {
    pub fn blank() -> Self {
        Self {
            id: Some(Uuid::nil()),
            ..Self::default()
        }
    }
}

/// Filter + page body for `POST /v1/LedgerAccount/list`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerFilter {
    pub account_name: String,
    pub account_code: String,
    pub account_group: String,
    pub page_size: u32,
    pub page_number: u32,
}

impl Default for LedgerFilter {
    fn default() -> Self {
        Self {
            account_name: String::new(),
            account_code: String::new(),
            account_group: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            page_number: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_type_round_trips_server_spelling() {
        let json = serde_json::to_string(&AccountType::Liabilities).unwrap();
        assert_eq!(json, "\"Liabilities\"");
        let parsed: AccountType = serde_json::from_str("\"Expenses\"").unwrap();
        assert_eq!(parsed, AccountType::Expenses);
    }

    #[test]
    fn account_type_parses_cli_spelling() {
        assert_eq!("income".parse::<AccountType>().unwrap(), AccountType::Income);
        assert!("equity".parse::<AccountType>().is_err());
    }
}

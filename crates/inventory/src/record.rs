use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One inventory entry.
///
/// Records are immutable in content: this system reorders and copies them,
/// never edits them in place. Field shapes mirror the inventory document
/// (`id`, `name`, `category`, `qty`, `location`); field values are taken
/// as-is and not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub qty: i64,
    pub location: String,
}

/// The field by which the current inventory view is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Id,
    Name,
    Category,
    Qty,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Category => "category",
            SortKey::Qty => "qty",
        }
    }

    /// Compare two records under this key.
    ///
    /// String keys order lexicographically by code point (locale collation
    /// is a non-goal); `Qty` orders numerically ascending.
    pub fn compare(&self, a: &InventoryRecord, b: &InventoryRecord) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Category => a.category.cmp(&b.category),
            SortKey::Qty => a.qty.cmp(&b.qty),
        }
    }
}

impl Default for SortKey {
    /// The default ordering applied on load.
    fn default() -> Self {
        SortKey::Id
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sort key that is not one of `id`, `name`, `category`, `qty`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            "category" => Ok(SortKey::Category),
            "qty" => Ok(SortKey::Qty),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

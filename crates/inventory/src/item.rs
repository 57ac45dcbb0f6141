use serde::{Deserialize, Serialize};

use crate::category::ItemCategory;
use crate::rules;

/// A single stock item.
///
/// The category is fixed at construction from the name; `name` is therefore
/// read-only while `sell_in` and `quality` stay open to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    category: ItemCategory,
    /// Days left before the sell-by date. Goes negative once the date passes.
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = ItemCategory::from_name(&name);
        Self {
            name,
            category,
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    /// Apply exactly one day of this item's rule.
    pub fn advance_one_day(&mut self) {
        match self.category {
            ItemCategory::Normal => rules::normal(self),
            ItemCategory::Aged => rules::aged(self),
            ItemCategory::Legendary => rules::legendary(self),
            ItemCategory::Backstage => rules::backstage(self),
            ItemCategory::Conjured => rules::conjured(self),
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Wire shape of an item. The category is never part of it.
#[derive(Serialize, Deserialize)]
struct ItemRecord {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.sell_in, record.quality)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        ItemRecord {
            name: item.name,
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}

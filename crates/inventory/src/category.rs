use serde::{Deserialize, Serialize};

/// Name of the legendary item.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Name of the item that improves with age.
pub const AGED_BRIE: &str = "Aged Brie";

/// Name of the concert pass.
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Any name containing this marker is a conjured item.
pub const CONJURED_MARKER: &str = "Conjured";

/// Upper bound on quality for every non-legendary item.
pub const MAX_QUALITY: i32 = 50;

/// Conventional quality of a legendary item. Never enforced.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Closed set of update rules.
///
/// Resolved once from the item name when the item is built, so the daily
/// update is an exhaustive match instead of repeated string comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    /// Degrades by 1 per day, 2 per day once past the sell date.
    Normal,
    /// Improves by 1 per day, 2 per day once past the sell date.
    Aged,
    /// Never changes.
    Legendary,
    /// Improves faster as the concert nears, worthless after it.
    Backstage,
    /// Degrades twice as fast as a normal item.
    Conjured,
}

impl ItemCategory {
    /// Pick the rule for `name`. First match wins; anything unrecognised is
    /// `Normal`.
    pub fn from_name(name: &str) -> Self {
        match name {
            SULFURAS => ItemCategory::Legendary,
            AGED_BRIE => ItemCategory::Aged,
            BACKSTAGE_PASSES => ItemCategory::Backstage,
            _ if name.contains(CONJURED_MARKER) => ItemCategory::Conjured,
            _ => ItemCategory::Normal,
        }
    }

    pub fn is_legendary(self) -> bool {
        self == ItemCategory::Legendary
    }
}

impl core::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            ItemCategory::Normal => "normal",
            ItemCategory::Aged => "aged",
            ItemCategory::Legendary => "legendary",
            ItemCategory::Backstage => "backstage",
            ItemCategory::Conjured => "conjured",
        };
        f.write_str(label)
    }
}

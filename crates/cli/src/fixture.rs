use std::path::Path;

use gildedrose_inventory::{
    AGED_BRIE, BACKSTAGE_PASSES, Inventory, Item, LEGENDARY_QUALITY, SULFURAS,
};

use crate::error::{CliError, Result};

/// The shop's standard opening stock.
pub fn standard_inventory() -> Inventory {
    Inventory::new(vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, LEGENDARY_QUALITY),
        Item::new(SULFURAS, -1, LEGENDARY_QUALITY),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ])
}

/// Read a JSON array of `{ name, sell_in, quality }` objects.
pub fn load_inventory(path: &Path) -> Result<Inventory> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::ReadInventory {
        path: path.to_path_buf(),
        source,
    })?;
    parse_inventory(&raw).map_err(|source| CliError::ParseInventory {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_inventory(raw: &str) -> serde_json::Result<Inventory> {
    let items: Vec<Item> = serde_json::from_str(raw)?;
    Ok(Inventory::new(items))
}

use std::io::Write;

use serde::Serialize;

use gildedrose_inventory::{Inventory, Item};

use crate::args::OutputFormat;
use crate::error::{CliError, Result};

#[derive(Serialize)]
struct DayListing<'a> {
    day: u32,
    items: &'a [Item],
}

/// Write one day's listing.
pub fn write_day<W: Write>(
    out: &mut W,
    day: u32,
    inventory: &Inventory,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "-------- day {day} --------")?;
            writeln!(out, "name, sellIn, quality")?;
            for item in inventory.items() {
                writeln!(out, "{item}")?;
            }
            writeln!(out)?;
        }
        OutputFormat::Json => {
            let listing = DayListing {
                day,
                items: inventory.items(),
            };
            serde_json::to_writer(&mut *out, &listing)
                .map_err(|source| CliError::Encode { day, source })?;
            writeln!(out)?;
        }
    }
    Ok(())
}

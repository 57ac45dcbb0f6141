use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use gildedrose_inventory::Inventory;

mod args;
mod error;
mod fixture;
mod render;

use args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    gildedrose_observability::init(cli.log_format.into(), &cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "run failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    tracing::info!(days = cli.days, output = ?cli.output, "starting simulation");

    let mut inventory = match &cli.inventory {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading inventory file");
            fixture::load_inventory(path)?
        }
        None => {
            tracing::debug!("using standard inventory");
            fixture::standard_inventory()
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    simulate(&mut out, &mut inventory, cli)?;
    out.flush().context("flushing output")?;
    Ok(())
}

/// Print day 0, then advance and print once per simulated day.
fn simulate<W: Write>(out: &mut W, inventory: &mut Inventory, cli: &Cli) -> error::Result<()> {
    for day in 0..=cli.days {
        if day > 0 {
            inventory.advance_one_day();
        }
        tracing::debug!(day, items = inventory.len(), "day listed");
        render::write_day(out, day, inventory, cli.output)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(days: &str) -> Cli {
        Cli::try_parse_from(["gilded-rose", "--days", days]).unwrap()
    }

    #[test]
    fn zero_days_prints_only_the_opening_stock() {
        let mut out = Vec::new();
        let mut inventory = fixture::standard_inventory();
        simulate(&mut out, &mut inventory, &cli("0")).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("-------- day 0 --------\n"));
        assert!(!text.contains("day 1"));
        assert_eq!(inventory, fixture::standard_inventory());
    }

    #[test]
    fn standard_inventory_after_one_day() {
        let mut out = Vec::new();
        let mut inventory = fixture::standard_inventory();
        simulate(&mut out, &mut inventory, &cli("1")).unwrap();

        let text = String::from_utf8(out).unwrap();
        let day_one = text.split("-------- day 1 --------\n").nth(1).unwrap();
        assert_eq!(
            day_one,
            "name, sellIn, quality\n\
             +5 Dexterity Vest, 9, 19\n\
             Aged Brie, 1, 1\n\
             Elixir of the Mongoose, 4, 6\n\
             Sulfuras, Hand of Ragnaros, 0, 80\n\
             Sulfuras, Hand of Ragnaros, -1, 80\n\
             Backstage passes to a TAFKAL80ETC concert, 14, 21\n\
             Backstage passes to a TAFKAL80ETC concert, 9, 50\n\
             Backstage passes to a TAFKAL80ETC concert, 4, 50\n\
             Conjured Mana Cake, 2, 4\n\
             \n"
        );
    }
}

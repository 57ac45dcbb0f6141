//! Per-category daily update rules.
//!
//! Every non-legendary rule decrements `sell_in` first; thresholds compare
//! against the decremented value. Clamps stay inside each rule: the
//! backstage end-of-life reset must win over the ceiling.

use crate::category::MAX_QUALITY;
use crate::item::Item;

fn tick(item: &mut Item) {
    item.sell_in = item.sell_in.saturating_sub(1);
}

fn past_sell_date(item: &Item) -> bool {
    item.sell_in < 0
}

pub(crate) fn normal(item: &mut Item) {
    tick(item);
    if item.quality <= 0 {
        return;
    }
    item.quality -= 1;
    if past_sell_date(item) && item.quality > 0 {
        item.quality -= 1;
    }
}

pub(crate) fn aged(item: &mut Item) {
    tick(item);
    if item.quality < MAX_QUALITY {
        item.quality += 1;
    }
    if past_sell_date(item) && item.quality < MAX_QUALITY {
        item.quality += 1;
    }
}

pub(crate) fn legendary(_item: &mut Item) {}

pub(crate) fn backstage(item: &mut Item) {
    tick(item);
    if item.quality < MAX_QUALITY {
        item.quality += 1;
    }
    if item.sell_in < 11 && item.quality < MAX_QUALITY {
        item.quality += 1;
    }
    if item.sell_in < 6 && item.quality < MAX_QUALITY {
        item.quality += 1;
    }
    // Concert is over.
    if past_sell_date(item) {
        item.quality = 0;
    }
}

pub(crate) fn conjured(item: &mut Item) {
    tick(item);
    if item.quality <= 0 {
        return;
    }
    let decay = if past_sell_date(item) { 4 } else { 2 };
    item.quality = (item.quality - decay).max(0);
}

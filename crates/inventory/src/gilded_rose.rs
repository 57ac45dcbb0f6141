use crate::item::Item;

/// Advance every item by one day, in slice order.
///
/// Items are independent of each other; only `sell_in` and `quality` are
/// touched. The slice keeps its length and order.
pub fn advance_one_day(items: &mut [Item]) {
    for item in items.iter_mut() {
        item.advance_one_day();
    }
}

/// Ordered stock owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn advance_one_day(&mut self) {
        advance_one_day(&mut self.items);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Mutable view of the items. The slice cannot grow or shrink.
    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Inventory {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

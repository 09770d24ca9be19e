use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use super::category::{Category, CategoryGroup};

/// Count per category.
///
/// Backed by a fixed array indexed by [`Category::index`], so every category
/// always has exactly one entry. Counts are unsigned and decrements saturate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountTable {
    counts: [u64; Category::COUNT],
}

impl CountTable {
    /// Create a table with every category at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> u64 {
        self.counts[category.index()]
    }

    pub fn increment_by(&mut self, category: Category, delta: u64) {
        let slot = &mut self.counts[category.index()];
        *slot = slot.saturating_add(delta);
    }

    /// Subtract `delta`, clamping at zero
    pub fn decrement_saturating(&mut self, category: Category, delta: u64) {
        let slot = &mut self.counts[category.index()];
        *slot = slot.saturating_sub(delta);
    }

    pub fn set(&mut self, category: Category, count: u64) {
        self.counts[category.index()] = count;
    }

    /// Set every count back to zero
    pub fn clear(&mut self) {
        self.counts = [0; Category::COUNT];
    }

    /// Iterate `(category, count)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn group_total(&self, group: CategoryGroup) -> u64 {
        group.categories().map(|c| self.get(c)).sum()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Serialize for CountTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, count) in self.iter() {
            map.serialize_entry(category.label(), &count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CountTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CountTableVisitor)
    }
}

struct CountTableVisitor;

impl<'de> Visitor<'de> for CountTableVisitor {
    type Value = CountTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping category labels to counts")
    }

    // Tolerates legacy or hand-edited files: unknown keys are skipped, missing
    // keys stay at zero, and values that are not non-negative integers are clamped.
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<CountTable, A::Error> {
        let mut table = CountTable::new();

        while let Some((key, value)) = access.next_entry::<String, serde_json::Value>()? {
            let category = match Category::from_label(&key) {
                Ok(category) => category,
                Err(e) => {
                    warn!("Ignoring snapshot entry: {}", e);
                    continue;
                }
            };

            let count = match value.as_u64() {
                Some(count) => count,
                None if value.as_i64().is_some() => {
                    warn!("Negative count for {:?} clamped to 0", key);
                    0
                }
                None => {
                    warn!("Non-integer count for {:?} ({}), using 0", key, value);
                    0
                }
            };
            table.set(category, count);
        }

        Ok(table)
    }
}

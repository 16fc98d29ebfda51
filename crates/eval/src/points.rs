// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Points awarded for recognizing a hand category.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::HandCategory;

/// A category to points lookup table.
///
/// The table is configuration, the default values are the ones used by the
/// game modes. Serializes as a map from category identifier to points, missing
/// categories are worth zero points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<HandCategory, u32>",
    into = "BTreeMap<HandCategory, u32>"
)]
pub struct PointsTable([u32; HandCategory::COUNT]);

impl PointsTable {
    /// A table where every category is worth zero points.
    pub const ZERO: PointsTable = PointsTable([0; HandCategory::COUNT]);

    /// Returns the points for a category.
    pub fn points_for(&self, category: HandCategory) -> u32 {
        self.0[category as usize]
    }

    /// Sets the points for a category.
    pub fn set(&mut self, category: HandCategory, points: u32) {
        self.0[category as usize] = points;
    }

    /// Returns this table with the points for a category changed.
    pub fn with(mut self, category: HandCategory, points: u32) -> Self {
        self.set(category, points);
        self
    }
}

impl Default for PointsTable {
    fn default() -> Self {
        Self([0, 1, 2, 3, 4, 6, 9, 25, 50, 800])
    }
}

impl FromIterator<(HandCategory, u32)> for PointsTable {
    fn from_iter<T: IntoIterator<Item = (HandCategory, u32)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::ZERO, |table, (category, points)| {
                table.with(category, points)
            })
    }
}

impl From<BTreeMap<HandCategory, u32>> for PointsTable {
    fn from(map: BTreeMap<HandCategory, u32>) -> Self {
        map.into_iter().collect()
    }
}

impl From<PointsTable> for BTreeMap<HandCategory, u32> {
    fn from(table: PointsTable) -> Self {
        HandCategory::categories()
            .map(|c| (c, table.points_for(c)))
            .collect()
    }
}

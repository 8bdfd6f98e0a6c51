// list/palette.rs

use bevy::prelude::*;
use rand::Rng;
use std::collections::HashMap;

use crate::items::ItemId;

/// Read-only colour per item, generated once for the demo rows
#[derive(Resource, Debug, Default, Clone)]
pub struct RowPalette {
    colors: HashMap<ItemId, Color>,
}

impl RowPalette {
    /// One random opaque colour per item
    pub fn random_for(items: &[ItemId], rng: &mut impl Rng) -> Self {
        let colors = items
            .iter()
            .map(|&item| (item, random_color(rng)))
            .collect();
        RowPalette { colors }
    }

    /// Colour for an item; unknown items render white
    pub fn color(&self, item: ItemId) -> Color {
        self.colors.get(&item).copied().unwrap_or(Color::WHITE)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }
}

fn random_color(rng: &mut impl Rng) -> Color {
    Color::srgb_u8(rng.random(), rng.random(), rng.random())
}

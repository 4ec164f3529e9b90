//! Stack-key color palettes.
//!
//! A [`Palette`] maps every stack key that can appear in a chart to a
//! concrete color. Lookups for unmapped keys are configuration errors,
//! not fallbacks.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{EmissionsError, Result};
use crate::render::ChartColor;

/// Built-in qualitative palettes, by their common plotting-library names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedPalette {
    Deep,
    Tab10,
    Dark2,
    Set1,
    Set2,
    Set3,
    Paired,
    Accent,
}

impl NamedPalette {
    /// The palette's hex swatch in definition order.
    #[must_use]
    pub const fn swatch(self) -> &'static [&'static str] {
        match self {
            Self::Deep => &[
                "#4c72b0", "#dd8452", "#55a868", "#c44e52", "#8172b3", "#937860", "#da8bc3",
                "#8c8c8c", "#ccb974", "#64b5cd",
            ],
            Self::Tab10 => &[
                "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2",
                "#7f7f7f", "#bcbd22", "#17becf",
            ],
            Self::Dark2 => &[
                "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02", "#a6761d",
                "#666666",
            ],
            Self::Set1 => &[
                "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628",
                "#f781bf", "#999999",
            ],
            Self::Set2 => &[
                "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494",
                "#b3b3b3",
            ],
            Self::Set3 => &[
                "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69",
                "#fccde5", "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f",
            ],
            Self::Paired => &[
                "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99", "#e31a1c", "#fdbf6f",
                "#ff7f00", "#cab2d6", "#6a3d9a", "#ffff99", "#b15928",
            ],
            Self::Accent => &[
                "#7fc97f", "#beaed4", "#fdc086", "#ffff99", "#386cb0", "#f0027f", "#bf5b17",
                "#666666",
            ],
        }
    }

    /// Color at `index`, cycling when the swatch is exhausted.
    #[must_use]
    pub fn color(self, index: usize) -> ChartColor {
        let swatch = self.swatch();
        ChartColor::hex(swatch[index % swatch.len()])
    }
}

/// A mapping from stack key to color.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: IndexMap<String, ChartColor>,
}

impl Palette {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zip `keys` with a named palette, cycling colors when there are
    /// more keys than swatch entries.
    #[must_use]
    pub fn from_keys<S: AsRef<str>>(keys: &[S], palette: NamedPalette) -> Self {
        let colors = keys
            .iter()
            .enumerate()
            .map(|(i, key)| (key.as_ref().to_string(), palette.color(i)))
            .collect();
        Self { colors }
    }

    pub fn insert(&mut self, key: impl Into<String>, color: ChartColor) {
        self.colors.insert(key.into(), color);
    }

    /// Rekey every entry through `mapping`; entries whose key is absent
    /// from the mapping are dropped.
    #[must_use]
    pub fn remapped(&self, mapping: &IndexMap<String, String>) -> Self {
        let colors = self
            .colors
            .iter()
            .filter_map(|(key, color)| {
                mapping.get(key).map(|new_key| (new_key.clone(), color.clone()))
            })
            .collect();
        Self { colors }
    }

    /// Look up the color for a stack key.
    ///
    /// # Errors
    /// Returns [`EmissionsError::PaletteMissingKey`] when the key has no
    /// configured color.
    pub fn color(&self, key: &str) -> Result<&ChartColor> {
        self.colors
            .get(key)
            .ok_or_else(|| EmissionsError::PaletteMissingKey {
                key: key.to_string(),
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod tests;

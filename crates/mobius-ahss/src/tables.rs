use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

fn default_cohomology_dims() -> BTreeMap<u32, u64> {
    BTreeMap::from([(2, 2), (3, 1), (4, 2), (5, 2)])
}

fn default_pin_ranks() -> BTreeMap<u32, u64> {
    BTreeMap::from([(0, 1), (1, 1), (2, 1), (3, 1)])
}

fn default_panels() -> Vec<(u32, u32)> {
    vec![(5, 0), (4, 1), (3, 2), (2, 3)]
}

fn default_generators() -> BTreeMap<u32, String> {
    BTreeMap::from([
        (2, "<a_2, b_2>".to_string()),
        (3, "<z_3>".to_string()),
        (4, "<x_4, y_4>".to_string()),
        (5, "<a_2∪z_3, b_2∪z_3>".to_string()),
    ])
}

/// Inputs to the E2-diagonal rank computation.
///
/// The tables are explicit configuration rather than embedded constants
/// so the rank sum stays testable against arbitrary inputs. Defaults
/// carry the published analysis of BG_int = (SU(3)×SU(2)×U(1)_Y)/Z_6:
/// cohomology dimensions over Z_2, the low-degree Pin+ bordism ranks,
/// and the p+q=5 diagonal panels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AhssInputs {
    /// Cohomology dimensions, degree p ↦ dim H^p(BG_int; Z_2).
    #[serde(default = "default_cohomology_dims")]
    pub cohomology_dims: BTreeMap<u32, u64>,
    /// Coefficient ranks, degree q ↦ rank_2(Ω^Pin+_q).
    #[serde(default = "default_pin_ranks")]
    pub pin_ranks: BTreeMap<u32, u64>,
    /// E2 panels (p, q) on the relevant diagonal.
    #[serde(default = "default_panels")]
    pub panels: Vec<(u32, u32)>,
    /// Generator labels per cohomology degree, for display only.
    #[serde(default = "default_generators")]
    pub generators: BTreeMap<u32, String>,
}

impl Default for AhssInputs {
    fn default() -> Self {
        Self {
            cohomology_dims: default_cohomology_dims(),
            pin_ranks: default_pin_ranks(),
            panels: default_panels(),
            generators: default_generators(),
        }
    }
}

impl AhssInputs {
    /// The diagonal the default panel list sits on.
    pub fn diagonal(&self) -> Option<u32> {
        let mut panels = self.panels.iter();
        let first = panels.next().map(|(p, q)| p + q)?;
        panels.all(|(p, q)| p + q == first).then_some(first)
    }
}

//! Layout direction

use serde::{Deserialize, Serialize};

/// Horizontal content flow
///
/// In right-to-left layouts the minimum value sits at the right edge of the
/// track and dragging left increases the value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

impl LayoutDirection {
    /// Mirror a `0..=1` ratio for this direction
    pub fn apply(self, ratio: f32) -> f32 {
        match self {
            LayoutDirection::Ltr => ratio,
            LayoutDirection::Rtl => 1.0 - ratio,
        }
    }
}

use serde::{Deserialize, Serialize};

/// Four margins bundled together for passing around as configuration.
///
/// Omitted sides default to 0 when deserialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginSet {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl MarginSet {
    pub fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }
}

use super::Classification;

/// Subdivision limits shared by every node of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Objects a node holds before its first split.
    pub max_objects: usize,
    /// Depth at which nodes stop splitting. The root is level 0.
    pub max_levels: usize,
    pub classification: Classification,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_objects: 10,
            max_levels: 8,
            classification: Classification::Loose,
        }
    }
}

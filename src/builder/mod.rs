//! Diagram builders: pure renderers turning a Dataset into Mermaid text

pub mod class;
pub mod er;
pub mod flowchart;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cardinality::CardinalityFormat;
use crate::types::Dataset;

pub use class::ClassDiagramBuilder;
pub use er::ErdBuilder;
pub use flowchart::FlowchartBuilder;

/// Layout direction for class diagrams and flowcharts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    TD, // Top-Down (same as TB)
    TB, // Top-Bottom
    LR, // Left-Right
    BT, // Bottom-Top
    RL, // Right-Left
}

impl Direction {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "TD" => Some(Direction::TD),
            "TB" => Some(Direction::TB),
            "LR" => Some(Direction::LR),
            "BT" => Some(Direction::BT),
            "RL" => Some(Direction::RL),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::TD => "TD",
            Direction::TB => "TB",
            Direction::LR => "LR",
            Direction::BT => "BT",
            Direction::RL => "RL",
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::LR
    }
}

/// Rendering knobs shared by every builder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderOptions {
    /// Render attribute rows/lists. Default: true
    #[serde(default = "default_true")]
    pub show_attributes: bool,
    /// Render method lists from entity metadata. Default: false
    #[serde(default)]
    pub show_methods: bool,
    /// Annotate edges with cardinality notation. Default: true
    #[serde(default = "default_true")]
    pub show_cardinality: bool,
    /// Attribute rows per entity before truncation. Default: 10
    #[serde(default = "default_max_attributes")]
    pub max_attributes: usize,
    /// Method rows per entity before truncation. Default: 5
    #[serde(default = "default_max_methods")]
    pub max_methods: usize,
    /// Layout direction. Default: LR
    #[serde(default)]
    pub direction: Direction,
    /// Keep table-name casing instead of uppercasing. Default: true
    #[serde(default = "default_true")]
    pub preserve_table_case: bool,
    /// Multiplicity notation. Default: simple ("1:N")
    #[serde(default)]
    pub cardinality_format: CardinalityFormat,
}

fn default_true() -> bool {
    true
}

fn default_max_attributes() -> usize {
    10
}

fn default_max_methods() -> usize {
    5
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            show_attributes: true,
            show_methods: false,
            show_cardinality: true,
            max_attributes: 10,
            max_methods: 5,
            direction: Direction::LR,
            preserve_table_case: true,
            cardinality_format: CardinalityFormat::Simple,
        }
    }
}

/// A builder failed to render a dataset.
///
/// The shipped builders degrade malformed entries (missing entities, blank
/// identifiers) to fallbacks instead of erroring, so this surfaces only from
/// alternative [`DiagramBuilder`] implementations. The strategy boundary
/// converts it into a failure envelope.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The builder cannot represent this dataset in its syntax
    #[error("unsupported dataset: {0}")]
    Unsupported(String),
    /// Rendering failed partway; no partial output is returned
    #[error("render failed: {0}")]
    Render(String),
}

/// The contract every diagram syntax implements.
///
/// `build_from_dataset` and `build_empty` are mandatory;
/// `build_entities_only` is an optional capability for syntaxes that can
/// draw isolated nodes when no relationships exist (ER, flowchart).
pub trait DiagramBuilder {
    /// Full rendering of entities and relationships
    fn build_from_dataset(&self, dataset: &Dataset) -> Result<String, BuildError>;

    /// Rendering for a dataset with no entities and no relationships;
    /// always embeds the sanitized message
    fn build_empty(&self, message: &str) -> String;

    /// Isolated-nodes rendering for datasets with entities but no
    /// relationships. `None` means the syntax has no such variant
    fn build_entities_only(&self, _dataset: &Dataset) -> Option<Result<String, BuildError>> {
        None
    }
}

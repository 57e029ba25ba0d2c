//! Strategies: per-diagram-type orchestration around the builders
//!
//! A strategy selects the empty / entities-only / full rendering path,
//! measures elapsed time, and converts builder errors into a uniform
//! result envelope. Nothing here ever panics or propagates a failure.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error};

use crate::builder::{
    BuildError, BuilderOptions, ClassDiagramBuilder, DiagramBuilder, ErdBuilder, FlowchartBuilder,
};
use crate::types::Dataset;

// ============================================================================
// Result envelope
// ============================================================================

/// Outcome of one generation call, consumed by the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub success: bool,
    /// Mermaid source, fed verbatim to the downstream renderer
    pub content: Option<String>,
    /// Diagram-syntax tag ("erDiagram", "classDiagram", "flowchart")
    #[serde(rename = "type")]
    pub diagram_type: String,
    pub error: Option<String>,
    pub generated_at: DateTime<Utc>,
}

/// UI-facing description of a strategy; never consulted by rendering logic
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StrategyMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub mermaid_type: &'static str,
}

// ============================================================================
// Diagram kind dispatch
// ============================================================================

/// The supported diagram types as a closed tagged union.
///
/// The upstream dashboard resolved type names through a runtime registry;
/// here the registry collapses into [`DiagramKind::from_name`] and an
/// explicit match per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    Erd,
    Class,
    Flowchart,
}

impl DiagramKind {
    pub const ALL: [DiagramKind; 3] =
        [DiagramKind::Erd, DiagramKind::Class, DiagramKind::Flowchart];

    /// Resolve a dashboard type name. Accepts both the short syntax names
    /// and the legacy registry keys
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "er" | "erd" | "erdiagram" | "database_tables" => Some(DiagramKind::Erd),
            "class" | "classdiagram" | "model_associations" => Some(DiagramKind::Class),
            "flowchart" | "model_associations_flowchart" => Some(DiagramKind::Flowchart),
            _ => None,
        }
    }

    pub fn metadata(&self) -> StrategyMetadata {
        match self {
            DiagramKind::Erd => StrategyMetadata {
                name: "Entity Relationship Diagram",
                description: "Database tables with columns and foreign-key relationships",
                mermaid_type: "erDiagram",
            },
            DiagramKind::Class => StrategyMetadata {
                name: "Class Diagram",
                description: "Models with attributes, methods and associations",
                mermaid_type: "classDiagram",
            },
            DiagramKind::Flowchart => StrategyMetadata {
                name: "Flowchart",
                description: "Compact node-and-edge view of model associations",
                mermaid_type: "flowchart",
            },
        }
    }

    fn empty_message(&self) -> &'static str {
        match self {
            DiagramKind::Erd => "No database relationships or tables found",
            DiagramKind::Class => "No models or associations found",
            DiagramKind::Flowchart => "No relationships to display",
        }
    }

    /// Build the strategy for this kind with the given rendering options
    pub fn strategy(&self, options: BuilderOptions) -> DiagramStrategy {
        let builder: Box<dyn DiagramBuilder> = match self {
            DiagramKind::Erd => Box::new(ErdBuilder::new(options)),
            DiagramKind::Class => Box::new(ClassDiagramBuilder::new(options)),
            DiagramKind::Flowchart => Box::new(FlowchartBuilder::new(options)),
        };
        DiagramStrategy::new(builder, self.metadata(), self.empty_message())
    }
}

// ============================================================================
// Strategy
// ============================================================================

/// One diagram type's orchestration: path selection, timing, error capture
pub struct DiagramStrategy {
    builder: Box<dyn DiagramBuilder>,
    metadata: StrategyMetadata,
    empty_message: &'static str,
}

impl DiagramStrategy {
    pub fn new(
        builder: Box<dyn DiagramBuilder>,
        metadata: StrategyMetadata,
        empty_message: &'static str,
    ) -> Self {
        Self {
            builder,
            metadata,
            empty_message,
        }
    }

    pub fn metadata(&self) -> StrategyMetadata {
        self.metadata
    }

    /// Render the dataset, never propagating a failure.
    ///
    /// Empty datasets get the builder's empty state; datasets with entities
    /// but no relationships get the isolated-nodes variant where the
    /// builder offers one; everything else is a full build.
    pub fn generate_from_dataset(&self, dataset: &Dataset) -> GenerationResult {
        let started = Instant::now();
        let outcome = self.render(dataset);
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match outcome {
            Ok(content) => {
                debug!(
                    diagram_type = self.metadata.mermaid_type,
                    elapsed_ms,
                    entities = dataset.entity_count(),
                    relationships = dataset.relationship_count(),
                    "diagram generated"
                );
                GenerationResult {
                    success: true,
                    content: Some(content),
                    diagram_type: self.metadata.mermaid_type.to_string(),
                    error: None,
                    generated_at: Utc::now(),
                }
            }
            Err(err) => {
                error!(
                    diagram_type = self.metadata.mermaid_type,
                    elapsed_ms,
                    entities = dataset.entity_count(),
                    relationships = dataset.relationship_count(),
                    error = %err,
                    "diagram generation failed"
                );
                GenerationResult {
                    success: false,
                    content: None,
                    diagram_type: self.metadata.mermaid_type.to_string(),
                    error: Some(err.to_string()),
                    generated_at: Utc::now(),
                }
            }
        }
    }

    fn render(&self, dataset: &Dataset) -> Result<String, BuildError> {
        if dataset.is_empty() {
            return Ok(self.builder.build_empty(self.empty_message));
        }
        if dataset.relationships.is_empty() {
            if let Some(result) = self.builder.build_entities_only(dataset) {
                return result;
            }
        }
        self.builder.build_from_dataset(dataset)
    }
}

//! g2m - Render entity/relationship datasets as Mermaid diagram text
//!
//! This library takes a normalized graph of entities, attributes, and
//! relationships (typically produced by a schema or model analyzer) and
//! renders it as Mermaid diagram source in one of several syntaxes.
//!
//! # Example
//!
//! ```rust
//! use g2m::{generate, BuilderOptions, Dataset, DiagramKind, Entity, Relationship};
//!
//! let mut dataset = Dataset::new();
//! dataset.add_entity(Entity::new("user", "User"));
//! dataset.add_entity(Entity::new("post", "Post"));
//! let mut rel = Relationship::new("user", "post");
//! rel.label = "posts".to_string();
//! dataset.add_relationship(rel);
//!
//! let result = generate(DiagramKind::Erd, &dataset, BuilderOptions::default());
//! assert!(result.success);
//! println!("{}", result.content.unwrap());
//! ```
//!
//! # Supported Diagram Types
//!
//! - Entity-relationship diagrams (erDiagram)
//! - Class diagrams (classDiagram)
//! - Flowcharts (flowchart LR)

pub mod builder;
pub mod cardinality;
pub mod sanitize;
pub mod strategy;
pub mod types;

pub use builder::{BuildError, BuilderOptions, DiagramBuilder, Direction};
pub use cardinality::{Cardinality, CardinalityFormat};
pub use strategy::{DiagramKind, DiagramStrategy, GenerationResult, StrategyMetadata};
pub use types::*;

/// Generate one diagram from a dataset.
///
/// Convenience wrapper that resolves the kind's strategy and runs it; the
/// returned envelope is always well-formed, whether or not rendering
/// succeeded.
pub fn generate(
    kind: DiagramKind,
    dataset: &Dataset,
    options: BuilderOptions,
) -> GenerationResult {
    kind.strategy(options).generate_from_dataset(dataset)
}

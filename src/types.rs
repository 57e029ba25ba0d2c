//! Type definitions for the normalized entity/relationship dataset

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::cardinality::Cardinality;

// ============================================================================
// Attribute types
// ============================================================================

/// Flags attached to an attribute by the analyzer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeMeta {
    /// Attribute is part of the primary key
    #[serde(default)]
    pub primary_key: bool,
    /// Attribute is a foreign key column
    #[serde(default)]
    pub foreign_key: bool,
    /// UML visibility marker (+, -, #, ~). Defaults to "+" at render time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

/// A single field of an entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    /// Semantic type ("integer", "string", ...). Empty normalizes to "any"
    /// at render time
    #[serde(default, rename = "type")]
    pub attr_type: String,
    #[serde(default)]
    pub metadata: AttributeMeta,
}

impl Attribute {
    pub fn new(name: impl Into<String>, attr_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attr_type: attr_type.into(),
            metadata: AttributeMeta::default(),
        }
    }

    /// The type to render: "any" when the analyzer left it blank
    pub fn display_type(&self) -> &str {
        if self.attr_type.trim().is_empty() {
            "any"
        } else {
            &self.attr_type
        }
    }
}

// ============================================================================
// Entity types
// ============================================================================

/// A method record carried in entity metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodDef {
    pub name: String,
    /// UML visibility marker. Defaults to "+" at render time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

impl MethodDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: None,
        }
    }
}

/// Analyzer-supplied metadata for an entity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityMeta {
    /// Ordered method records, rendered by the class and flowchart builders
    #[serde(default)]
    pub methods: Vec<MethodDef>,
}

/// A diagram node: a table or model with its attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Unique within a Dataset; the join key used by relationships
    pub id: String,
    /// Display name. Sanitization happens at render time
    pub name: String,
    /// Advisory classification ("table", "model"); not enforced
    #[serde(default, rename = "type")]
    pub entity_type: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub metadata: EntityMeta,
}

impl Entity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            entity_type: String::new(),
            attributes: Vec::new(),
            metadata: EntityMeta::default(),
        }
    }
}

// ============================================================================
// Relationship types
// ============================================================================

/// A directed, labeled, cardinality-tagged edge between two entity ids.
///
/// The referenced entities may be absent from the Dataset; renderers fall
/// back to the raw id as the display name when the lookup fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    pub source_id: String,
    pub target_id: String,
    /// Symbolic relation kind ("has_many", "schema_foreign_key", ...);
    /// informational only, never used for cardinality derivation
    #[serde(default, rename = "type")]
    pub rel_type: String,
    /// Free-text description rendered on the edge
    #[serde(default)]
    pub label: String,
    /// Unrecognized or absent values fall back to one-to-many
    #[serde(default)]
    pub cardinality: Cardinality,
}

impl Relationship {
    pub fn new(source_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            rel_type: String::new(),
            label: String::new(),
            cardinality: Cardinality::default(),
        }
    }
}

// ============================================================================
// Dataset
// ============================================================================

/// The normalized graph consumed by every builder.
///
/// Built once by an analyzer, handed read-only to exactly one strategy call,
/// then discarded. Entity insertion order is preserved so output is
/// deterministic; inserting an entity with an existing id replaces it
/// in place (last write wins).
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    entities: HashMap<String, Entity>,
    entity_order: Vec<String>, // Track insertion order
    pub relationships: Vec<Relationship>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from analyzer output, preserving input order
    pub fn from_parts(entities: Vec<Entity>, relationships: Vec<Relationship>) -> Self {
        let mut dataset = Self::new();
        for entity in entities {
            dataset.add_entity(entity);
        }
        dataset.relationships = relationships;
        dataset
    }

    pub fn add_entity(&mut self, entity: Entity) {
        if !self.entities.contains_key(&entity.id) {
            self.entity_order.push(entity.id.clone());
        }
        self.entities.insert(entity.id.clone(), entity);
    }

    pub fn add_relationship(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }

    pub fn get_entity(&self, id: &str) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Entities in insertion order
    pub fn entities_in_order(&self) -> impl Iterator<Item = &Entity> {
        self.entity_order
            .iter()
            .filter_map(move |id| self.entities.get(id))
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// True when there is nothing to render at all
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.relationships.is_empty()
    }
}

// ============================================================================
// JSON input shape
// ============================================================================

/// The wire shape analyzers produce: a flat entity list plus relationships
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetInput {
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl DatasetInput {
    pub fn into_dataset(self) -> Dataset {
        Dataset::from_parts(self.entities, self.relationships)
    }
}

//! Strategy-level tests: every path from dataset to result envelope
//!
//! Builder-specific formatting details live in the unit tests beside each
//! builder; these tests cover the behavior a dashboard embedding the
//! engine relies on.

use pretty_assertions::assert_eq;

use g2m::builder::{BuildError, DiagramBuilder};
use g2m::{
    generate, Attribute, BuilderOptions, Dataset, DiagramKind, DiagramStrategy, Entity,
    Relationship,
};

fn blog_dataset() -> Dataset {
    let mut user = Entity::new("user", "User");
    let mut user_id = Attribute::new("id", "integer");
    user_id.metadata.primary_key = true;
    user.attributes.push(user_id);
    user.attributes.push(Attribute::new("name", "string"));

    let mut post = Entity::new("post", "Post");
    let mut post_id = Attribute::new("id", "integer");
    post_id.metadata.primary_key = true;
    post.attributes.push(post_id);
    let mut author_id = Attribute::new("user_id", "integer");
    author_id.metadata.foreign_key = true;
    post.attributes.push(author_id);

    let mut rel = Relationship::new("user", "post");
    rel.rel_type = "has_many".to_string();
    rel.label = "posts".to_string();

    let mut dataset = Dataset::new();
    dataset.add_entity(user);
    dataset.add_entity(post);
    dataset.add_relationship(rel);
    dataset
}

#[test]
fn empty_dataset_yields_success_with_message_for_every_kind() {
    let dataset = Dataset::new();
    for kind in DiagramKind::ALL {
        let result = generate(kind, &dataset, BuilderOptions::default());
        assert!(result.success, "{:?} must succeed on empty input", kind);
        assert!(result.error.is_none());
        let content = result.content.expect("empty state still has content");
        assert!(
            content.starts_with(kind.metadata().mermaid_type),
            "{:?} empty state must open with its header",
            kind
        );
        assert!(content.contains("No "), "{:?} must embed its message", kind);
    }
}

#[test]
fn erd_output_is_byte_exact() {
    let result = generate(DiagramKind::Erd, &blog_dataset(), BuilderOptions::default());
    assert!(result.success);
    assert_eq!(
        result.content.unwrap(),
        "erDiagram\n\
         User {\n    integer id PK\n    string name\n}\n\
         Post {\n    integer id PK\n    integer user_id FK\n}\n\
         \n\
         User ||--o{ Post : \"posts\""
    );
}

#[test]
fn erd_uppercases_when_case_is_not_preserved() {
    let mut dataset = Dataset::new();
    let mut user = Entity::new("user", "User");
    let mut id = Attribute::new("id", "integer");
    id.metadata.primary_key = true;
    user.attributes.push(id);
    dataset.add_entity(user);

    let options = BuilderOptions {
        preserve_table_case: false,
        ..Default::default()
    };
    let result = generate(DiagramKind::Erd, &dataset, options);
    assert_eq!(result.content.unwrap(), "erDiagram\nUSER {\n    integer id PK\n}");
}

#[test]
fn class_diagram_reports_exact_overflow() {
    let mut entity = Entity::new("wide", "Wide");
    for i in 0..17 {
        entity.attributes.push(Attribute::new(format!("col{}", i), "string"));
    }
    let mut dataset = Dataset::new();
    dataset.add_entity(entity);

    let result = generate(DiagramKind::Class, &dataset, BuilderOptions::default());
    let content = result.content.unwrap();
    assert!(content.contains("%% ... 7 more attributes"));
}

#[test]
fn missing_target_entity_degrades_to_raw_id() {
    let mut dataset = Dataset::new();
    dataset.add_entity(Entity::new("user", "User"));
    let mut rel = Relationship::new("user", "post");
    rel.label = "posts".to_string();
    dataset.add_relationship(rel);

    let flowchart = generate(DiagramKind::Flowchart, &dataset, BuilderOptions::default());
    assert!(flowchart.success);
    assert!(flowchart.content.unwrap().contains("| post"));

    let class = generate(DiagramKind::Class, &dataset, BuilderOptions::default());
    assert!(class.success);
    assert!(class.content.unwrap().contains("--> post : posts"));
}

#[test]
fn entities_without_relationships_render_isolated_nodes() {
    let mut dataset = Dataset::new();
    dataset.add_entity(Entity::new("user", "User"));
    dataset.add_entity(Entity::new("post", "Post"));

    let result = generate(DiagramKind::Flowchart, &dataset, BuilderOptions::default());
    assert_eq!(
        result.content.unwrap(),
        "flowchart LR\nuser[\"User\"]\npost[\"Post\"]"
    );
}

#[test]
fn generation_is_idempotent() {
    let dataset = blog_dataset();
    for kind in DiagramKind::ALL {
        let first = generate(kind, &dataset, BuilderOptions::default());
        let second = generate(kind, &dataset, BuilderOptions::default());
        assert_eq!(first.content, second.content, "{:?} content must not drift", kind);
        assert_eq!(first.diagram_type, second.diagram_type);
    }
}

#[test]
fn result_envelope_serializes_for_the_presentation_layer() {
    let result = generate(DiagramKind::Erd, &blog_dataset(), BuilderOptions::default());
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("\"type\":\"erDiagram\""));
    assert!(json.contains("\"generated_at\""));
}

struct ExplodingBuilder;

impl DiagramBuilder for ExplodingBuilder {
    fn build_from_dataset(&self, _dataset: &Dataset) -> Result<String, BuildError> {
        Err(BuildError::Render("boom".to_string()))
    }

    fn build_empty(&self, message: &str) -> String {
        format!("%% {}", message)
    }
}

#[test]
fn builder_failure_becomes_an_error_envelope() {
    let strategy = DiagramStrategy::new(
        Box::new(ExplodingBuilder),
        DiagramKind::Erd.metadata(),
        "nothing here",
    );
    let mut dataset = Dataset::new();
    dataset.add_relationship(Relationship::new("a", "b"));

    let result = strategy.generate_from_dataset(&dataset);
    assert!(!result.success);
    assert!(result.content.is_none());
    assert_eq!(result.error.as_deref(), Some("render failed: boom"));
    assert_eq!(result.diagram_type, "erDiagram");
}

#[test]
fn failing_builder_still_serves_the_empty_state() {
    let strategy = DiagramStrategy::new(
        Box::new(ExplodingBuilder),
        DiagramKind::Erd.metadata(),
        "nothing here",
    );
    let result = strategy.generate_from_dataset(&Dataset::new());
    assert!(result.success);
    assert_eq!(result.content.as_deref(), Some("%% nothing here"));
}

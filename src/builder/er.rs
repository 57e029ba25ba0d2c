//! Entity-relationship diagram builder (`erDiagram`)

use super::{BuildError, BuilderOptions, DiagramBuilder};
use crate::cardinality::to_erd;
use crate::sanitize;
use crate::types::{Dataset, Entity};

/// Renders a Dataset as Mermaid `erDiagram` source.
///
/// Attributes past `max_attributes` are dropped silently; unlike the class
/// and flowchart builders there is no overflow marker in this syntax.
pub struct ErdBuilder {
    options: BuilderOptions,
}

impl ErdBuilder {
    pub fn new(options: BuilderOptions) -> Self {
        Self { options }
    }

    /// Table key for a relationship endpoint: the entity's display name
    /// when the lookup succeeds, the raw id otherwise
    fn table_key(&self, dataset: &Dataset, id: &str) -> String {
        let name = dataset
            .get_entity(id)
            .map(|e| e.name.as_str())
            .unwrap_or(id);
        sanitize::table_name(name, self.options.preserve_table_case)
    }

    fn push_entity_block(&self, out: &mut String, entity: &Entity) {
        let key = sanitize::table_name(&entity.name, self.options.preserve_table_case);
        out.push_str(&format!("{} {{\n", key));
        if self.options.show_attributes {
            for attr in entity.attributes.iter().take(self.options.max_attributes) {
                let attr_type = sanitize::attribute_type(attr.display_type());
                // PK takes precedence when both key flags are set
                let suffix = if attr.metadata.primary_key {
                    " PK"
                } else if attr.metadata.foreign_key {
                    " FK"
                } else {
                    ""
                };
                out.push_str(&format!("    {} {}{}\n", attr_type, attr.name, suffix));
            }
        }
        out.push_str("}\n");
    }

    fn render(&self, dataset: &Dataset, include_relationships: bool) -> String {
        let mut out = String::from("erDiagram\n");

        for entity in dataset.entities_in_order() {
            self.push_entity_block(&mut out, entity);
        }

        if include_relationships && !dataset.relationships.is_empty() {
            out.push('\n');
            for rel in &dataset.relationships {
                let source = self.table_key(dataset, &rel.source_id);
                let target = self.table_key(dataset, &rel.target_id);
                let connector = to_erd(rel.cardinality);
                let label = sanitize::label(&rel.label);
                // Label is quoted even when empty
                out.push_str(&format!(
                    "{} {} {} : \"{}\"\n",
                    source, connector, target, label
                ));
            }
        }

        out.trim_end().to_string()
    }
}

impl DiagramBuilder for ErdBuilder {
    fn build_from_dataset(&self, dataset: &Dataset) -> Result<String, BuildError> {
        Ok(self.render(dataset, true))
    }

    fn build_empty(&self, message: &str) -> String {
        format!("erDiagram\n%% {}", sanitize::label(message))
    }

    fn build_entities_only(&self, dataset: &Dataset) -> Option<Result<String, BuildError>> {
        Some(Ok(self.render(dataset, false)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attribute, Relationship};
    use pretty_assertions::assert_eq;

    fn builder() -> ErdBuilder {
        ErdBuilder::new(BuilderOptions::default())
    }

    fn user_with_pk() -> Entity {
        let mut user = Entity::new("user", "User");
        let mut id = Attribute::new("id", "integer");
        id.metadata.primary_key = true;
        user.attributes.push(id);
        user
    }

    #[test]
    fn renders_entity_block_with_key_suffixes() {
        let mut user = user_with_pk();
        let mut account_id = Attribute::new("account_id", "integer");
        account_id.metadata.foreign_key = true;
        user.attributes.push(account_id);

        let mut dataset = Dataset::new();
        dataset.add_entity(user);

        let output = builder().build_from_dataset(&dataset).unwrap();
        assert_eq!(
            output,
            "erDiagram\nUser {\n    integer id PK\n    integer account_id FK\n}"
        );
    }

    #[test]
    fn pk_wins_over_fk() {
        let mut entity = Entity::new("m", "Membership");
        let mut attr = Attribute::new("user_id", "integer");
        attr.metadata.primary_key = true;
        attr.metadata.foreign_key = true;
        entity.attributes.push(attr);

        let mut dataset = Dataset::new();
        dataset.add_entity(entity);

        let output = builder().build_from_dataset(&dataset).unwrap();
        assert!(output.contains("    integer user_id PK\n"));
        assert!(!output.contains("FK"));
    }

    #[test]
    fn truncates_attributes_without_overflow_marker() {
        let mut entity = Entity::new("wide", "Wide");
        for i in 0..15 {
            entity.attributes.push(Attribute::new(format!("col{}", i), "string"));
        }
        let mut dataset = Dataset::new();
        dataset.add_entity(entity);

        let output = builder().build_from_dataset(&dataset).unwrap();
        assert!(output.contains("col9"));
        assert!(!output.contains("col10"));
        assert!(!output.contains("more"));
    }

    #[test]
    fn relationship_label_is_always_quoted() {
        let mut dataset = Dataset::new();
        dataset.add_entity(Entity::new("user", "User"));
        dataset.add_entity(Entity::new("post", "Post"));
        dataset.add_relationship(Relationship::new("user", "post"));

        let output = builder().build_from_dataset(&dataset).unwrap();
        assert!(output.contains("User ||--o{ Post : \"\""));
    }

    #[test]
    fn missing_entity_falls_back_to_raw_id() {
        let mut dataset = Dataset::new();
        dataset.add_entity(Entity::new("user", "User"));
        let mut rel = Relationship::new("user", "orphan");
        rel.label = "lost".to_string();
        dataset.add_relationship(rel);

        let output = builder().build_from_dataset(&dataset).unwrap();
        assert!(output.contains("User ||--o{ orphan : \"lost\""));
    }

    #[test]
    fn uppercases_table_names_when_case_not_preserved() {
        let options = BuilderOptions {
            preserve_table_case: false,
            ..Default::default()
        };
        let mut dataset = Dataset::new();
        dataset.add_entity(user_with_pk());

        let output = ErdBuilder::new(options).build_from_dataset(&dataset).unwrap();
        assert_eq!(output, "erDiagram\nUSER {\n    integer id PK\n}");
    }

    #[test]
    fn entities_only_skips_relationship_section() {
        let mut dataset = Dataset::new();
        dataset.add_entity(Entity::new("user", "User"));
        dataset.add_relationship(Relationship::new("user", "post"));

        let output = builder().build_entities_only(&dataset).unwrap().unwrap();
        assert!(!output.contains("||--o{"));
        assert!(output.contains("User {"));
    }

    #[test]
    fn empty_state_embeds_message() {
        let output = builder().build_empty("No database relationships or tables found");
        assert_eq!(
            output,
            "erDiagram\n%% No database relationships or tables found"
        );
    }
}

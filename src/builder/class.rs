//! Class diagram builder (`classDiagram`)

use super::{BuildError, BuilderOptions, DiagramBuilder};
use crate::cardinality::to_class;
use crate::sanitize;
use crate::types::{Dataset, Entity};

/// Renders a Dataset as Mermaid `classDiagram` source.
///
/// Member counts are summarized with `%%` comment lines so a strict parser
/// never mistakes them for declarations; detail lines are gated on the
/// `show_attributes` / `show_methods` options and truncated with an
/// explicit `... N more` marker.
pub struct ClassDiagramBuilder {
    options: BuilderOptions,
}

impl ClassDiagramBuilder {
    pub fn new(options: BuilderOptions) -> Self {
        Self { options }
    }

    fn class_key(&self, dataset: &Dataset, id: &str) -> String {
        let name = dataset
            .get_entity(id)
            .map(|e| e.name.as_str())
            .unwrap_or(id);
        sanitize::class_name(name)
    }

    fn push_class_block(&self, out: &mut String, entity: &Entity) {
        out.push_str(&format!("class {} {{\n", sanitize::class_name(&entity.name)));

        let attributes = &entity.attributes;
        if !attributes.is_empty() {
            out.push_str(&format!("    %% {} attributes\n", attributes.len()));
            if self.options.show_attributes {
                for attr in attributes.iter().take(self.options.max_attributes) {
                    let visibility = attr.metadata.visibility.as_deref().unwrap_or("+");
                    let attr_type = sanitize::attribute_type(attr.display_type());
                    out.push_str(&format!("    {}{} {}\n", visibility, attr_type, attr.name));
                }
                if attributes.len() > self.options.max_attributes {
                    let hidden = attributes.len() - self.options.max_attributes;
                    out.push_str(&format!("    %% ... {} more attributes\n", hidden));
                }
            }
        }

        let methods = &entity.metadata.methods;
        if !methods.is_empty() {
            out.push_str(&format!("    %% {} methods\n", methods.len()));
            if self.options.show_methods {
                for method in methods.iter().take(self.options.max_methods) {
                    let visibility = method.visibility.as_deref().unwrap_or("+");
                    out.push_str(&format!(
                        "    {}{}\n",
                        visibility,
                        sanitize::method_name(&method.name)
                    ));
                }
                if methods.len() > self.options.max_methods {
                    let hidden = methods.len() - self.options.max_methods;
                    out.push_str(&format!("    %% ... {} more methods\n", hidden));
                }
            }
        }

        out.push_str("}\n");
    }
}

impl DiagramBuilder for ClassDiagramBuilder {
    fn build_from_dataset(&self, dataset: &Dataset) -> Result<String, BuildError> {
        let mut out = String::from("classDiagram\n");
        out.push_str(&format!("direction {}\n", self.options.direction.as_str()));

        for entity in dataset.entities_in_order() {
            self.push_class_block(&mut out, entity);
        }

        if !dataset.relationships.is_empty() {
            out.push_str("\n%% Relationships\n");
            for rel in &dataset.relationships {
                let source = self.class_key(dataset, &rel.source_id);
                let target = self.class_key(dataset, &rel.target_id);
                let label = sanitize::label(&rel.label);
                let label_suffix = if label.is_empty() {
                    String::new()
                } else {
                    format!(" : {}", label)
                };

                if self.options.show_cardinality {
                    let notation = to_class(rel.cardinality, self.options.cardinality_format);
                    out.push_str(&format!(
                        "{} \"{}\" --> {}{}\n",
                        source, notation, target, label_suffix
                    ));
                } else {
                    out.push_str(&format!("{} --> {}{}\n", source, target, label_suffix));
                }
            }
        }

        Ok(out.trim_end().to_string())
    }

    fn build_empty(&self, message: &str) -> String {
        format!(
            "classDiagram\ndirection {}\nnote \"{}\"",
            self.options.direction.as_str(),
            sanitize::label(message)
        )
    }
}

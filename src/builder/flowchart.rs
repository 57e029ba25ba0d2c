//! Flowchart builder (`flowchart`)

use super::{BuildError, BuilderOptions, DiagramBuilder};
use crate::cardinality::to_class;
use crate::sanitize;
use crate::types::{Dataset, Entity};

/// Line-break marker Mermaid accepts inside node labels
const NODE_LINE_BREAK: &str = "<br/>";

/// Renders a Dataset as Mermaid `flowchart` source.
///
/// Each entity collapses to a single node whose label stacks the display
/// name, member counts, and comma-joined member names. Cardinality has no
/// syntax of its own here, so it is folded into the edge label.
pub struct FlowchartBuilder {
    options: BuilderOptions,
}

impl FlowchartBuilder {
    pub fn new(options: BuilderOptions) -> Self {
        Self { options }
    }

    /// Comma-joined member names, truncated with an inline "... N more"
    fn joined_names(names: Vec<&str>, limit: usize) -> String {
        if names.len() > limit {
            let hidden = names.len() - limit;
            let mut parts: Vec<String> =
                names.into_iter().take(limit).map(str::to_string).collect();
            parts.push(format!("... {} more", hidden));
            parts.join(", ")
        } else {
            names.join(", ")
        }
    }

    fn node_content(&self, entity: &Entity) -> String {
        let mut lines = vec![sanitize::display_name(&entity.name)];

        if self.options.show_attributes && !entity.attributes.is_empty() {
            lines.push(format!("{} attributes", entity.attributes.len()));
            let names: Vec<&str> = entity.attributes.iter().map(|a| a.name.as_str()).collect();
            lines.push(Self::joined_names(names, self.options.max_attributes));
        }

        if self.options.show_methods && !entity.metadata.methods.is_empty() {
            lines.push(format!("{} methods", entity.metadata.methods.len()));
            let names: Vec<&str> = entity
                .metadata
                .methods
                .iter()
                .map(|m| m.name.as_str())
                .collect();
            lines.push(Self::joined_names(names, self.options.max_methods));
        }

        // The content sits inside double quotes in the node line
        sanitize::label(&lines.join(NODE_LINE_BREAK))
    }

    fn render(&self, dataset: &Dataset, include_edges: bool) -> String {
        let mut out = format!("flowchart {}\n", self.options.direction.as_str());

        for entity in dataset.entities_in_order() {
            out.push_str(&format!(
                "{}[\"{}\"]\n",
                sanitize::node_id(&entity.id),
                self.node_content(entity)
            ));
        }

        if include_edges && !dataset.relationships.is_empty() {
            out.push('\n');
            for rel in &dataset.relationships {
                let source = sanitize::node_id(&rel.source_id);
                let target = sanitize::node_id(&rel.target_id);
                let label = sanitize::label(&rel.label);

                let edge_label = if self.options.show_cardinality {
                    let notation = to_class(rel.cardinality, self.options.cardinality_format);
                    if label.is_empty() {
                        notation.to_string()
                    } else {
                        format!("{} ({})", label, notation)
                    }
                } else {
                    label
                };

                if edge_label.is_empty() {
                    out.push_str(&format!("{} --> {}\n", source, target));
                } else {
                    out.push_str(&format!("{} -->|\"{}\"| {}\n", source, edge_label, target));
                }
            }
        }

        out.trim_end().to_string()
    }
}

impl DiagramBuilder for FlowchartBuilder {
    fn build_from_dataset(&self, dataset: &Dataset) -> Result<String, BuildError> {
        Ok(self.render(dataset, true))
    }

    fn build_empty(&self, message: &str) -> String {
        format!(
            "flowchart {}\nempty[\"{}\"]",
            self.options.direction.as_str(),
            sanitize::label(message)
        )
    }

    fn build_entities_only(&self, dataset: &Dataset) -> Option<Result<String, BuildError>> {
        Some(Ok(self.render(dataset, false)))
    }
}

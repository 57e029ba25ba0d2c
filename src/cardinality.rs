//! Symbolic relationship cardinalities and their per-syntax notations
//!
//! The three lookup tables here are an external contract: the strings are
//! consumed verbatim by the downstream Mermaid renderer and must not drift.
//! Unknown or absent cardinalities fall back to one-to-many in every table.

use serde::{Deserialize, Serialize};

/// The closed set of symbolic relationship multiplicities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Cardinality {
    OneToMany,
    ManyToOne,
    OneToOne,
    ManyToMany,
    ZeroOrOneToMany,
    OneToZeroOrMany,
    ZeroOrOneToOne,
    OneToZeroOrOne,
}

impl Default for Cardinality {
    fn default() -> Self {
        Cardinality::OneToMany
    }
}

impl Cardinality {
    /// Tolerant parse: anything unrecognized becomes one-to-many
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "one_to_many" => Cardinality::OneToMany,
            "many_to_one" => Cardinality::ManyToOne,
            "one_to_one" => Cardinality::OneToOne,
            "many_to_many" => Cardinality::ManyToMany,
            "zero_or_one_to_many" => Cardinality::ZeroOrOneToMany,
            "one_to_zero_or_many" => Cardinality::OneToZeroOrMany,
            "zero_or_one_to_one" => Cardinality::ZeroOrOneToOne,
            "one_to_zero_or_one" => Cardinality::OneToZeroOrOne,
            _ => Cardinality::OneToMany,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::OneToMany => "one_to_many",
            Cardinality::ManyToOne => "many_to_one",
            Cardinality::OneToOne => "one_to_one",
            Cardinality::ManyToMany => "many_to_many",
            Cardinality::ZeroOrOneToMany => "zero_or_one_to_many",
            Cardinality::OneToZeroOrMany => "one_to_zero_or_many",
            Cardinality::ZeroOrOneToOne => "zero_or_one_to_one",
            Cardinality::OneToZeroOrOne => "one_to_zero_or_one",
        }
    }
}

impl From<String> for Cardinality {
    fn from(s: String) -> Self {
        Cardinality::parse(&s)
    }
}

impl From<Cardinality> for String {
    fn from(c: Cardinality) -> Self {
        c.as_str().to_string()
    }
}

/// Which multiplicity notation the class/flowchart builders emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardinalityFormat {
    /// UML-style ranges ("1..*")
    Standard,
    /// Ratio tokens ("1:N")
    Simple,
}

impl Default for CardinalityFormat {
    fn default() -> Self {
        CardinalityFormat::Simple
    }
}

/// Crow's-foot connector for ER diagrams. Not affected by
/// [`CardinalityFormat`]
pub fn to_erd(cardinality: Cardinality) -> &'static str {
    match cardinality {
        Cardinality::OneToMany => "||--o{",
        Cardinality::ManyToOne => "}o--||",
        Cardinality::OneToOne => "||--||",
        Cardinality::ManyToMany => "}o--o{",
        Cardinality::ZeroOrOneToMany => "|o--o{",
        // Crow's foot cannot distinguish this from plain one-to-many
        Cardinality::OneToZeroOrMany => "||--o{",
        Cardinality::ZeroOrOneToOne => "|o--||",
        Cardinality::OneToZeroOrOne => "||--o|",
    }
}

/// Class-diagram multiplicity in the requested format
pub fn to_class(cardinality: Cardinality, format: CardinalityFormat) -> &'static str {
    match format {
        CardinalityFormat::Simple => to_simple(cardinality),
        CardinalityFormat::Standard => match cardinality {
            Cardinality::OneToMany => "1..*",
            Cardinality::ManyToOne => "*..1",
            Cardinality::OneToOne => "1..1",
            Cardinality::ManyToMany => "*..*",
            Cardinality::ZeroOrOneToMany => "0..*",
            Cardinality::OneToZeroOrMany => "1..*",
            Cardinality::ZeroOrOneToOne => "0..1",
            Cardinality::OneToZeroOrOne => "1..1",
        },
    }
}

/// Ratio token ("1:N")
pub fn to_simple(cardinality: Cardinality) -> &'static str {
    match cardinality {
        Cardinality::OneToMany => "1:N",
        Cardinality::ManyToOne => "N:1",
        Cardinality::OneToOne => "1:1",
        Cardinality::ManyToMany => "N:M",
        Cardinality::ZeroOrOneToMany => "0,1:N",
        Cardinality::OneToZeroOrMany => "1:0,N",
        Cardinality::ZeroOrOneToOne => "0,1:1",
        Cardinality::OneToZeroOrOne => "1:0,1",
    }
}

// Syntax tree for parsed URI templates

use serde::{Deserialize, Serialize};

use super::operator::Operator;

/// Represents a parsed template as a list of parts
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub parts: Vec<TemplatePart>,
}

impl Template {
    pub fn new(parts: Vec<TemplatePart>) -> Self {
        Self { parts }
    }

    /// Get all varspecs in this template, in order of appearance
    pub fn variables(&self) -> Vec<&VarSpec> {
        self.expressions()
            .flat_map(|expr| expr.varspecs.iter())
            .collect()
    }

    /// Distinct variable names, first occurrence wins
    pub fn variable_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for var in self.variables() {
            if !names.contains(&var.name.as_str()) {
                names.push(&var.name);
            }
        }
        names
    }

    pub fn expressions(&self) -> impl Iterator<Item = &Expression> {
        self.parts.iter().filter_map(|part| match part {
            TemplatePart::Expression(expr) => Some(expr),
            TemplatePart::Literal(_) => None,
        })
    }
}

/// A template consists of literal text and `{...}` expressions
#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    Literal(String),
    Expression(Expression),
}

/// The body of one `{...}` span
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub operator: Operator,
    pub varspecs: Vec<VarSpec>,
}

impl Expression {
    pub fn new(operator: Operator, varspecs: Vec<VarSpec>) -> Self {
        Self { operator, varspecs }
    }
}

/// A variable reference with its optional modifier
#[derive(Debug, Clone, PartialEq)]
pub struct VarSpec {
    pub name: String,
    pub modifier: Modifier,
}

impl VarSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifier: Modifier::None,
        }
    }

    pub fn with_prefix(mut self, length: usize) -> Self {
        self.modifier = Modifier::Prefix(length);
        self
    }

    pub fn with_explode(mut self) -> Self {
        self.modifier = Modifier::Explode;
        self
    }

    pub fn is_exploded(&self) -> bool {
        self.modifier == Modifier::Explode
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Modifier {
    #[default]
    None,
    /// `:n`, keep the first n characters of a scalar
    Prefix(usize),
    /// `*`
    Explode,
}

/// Summary of every variable a template references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateMetadata {
    pub variables: Vec<VariableMetadata>,
}

impl TemplateMetadata {
    pub fn from_template(template: &Template) -> Self {
        let variables = template
            .expressions()
            .flat_map(|expr| {
                expr.varspecs.iter().map(move |var| VariableMetadata {
                    name: var.name.clone(),
                    operator: expr.operator,
                    explode: var.is_exploded(),
                    prefix_length: match var.modifier {
                        Modifier::Prefix(n) => Some(n),
                        _ => None,
                    },
                })
            })
            .collect();

        Self { variables }
    }
}

/// Per-variable usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableMetadata {
    pub name: String,
    pub operator: Operator,
    pub explode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_length: Option<usize>,
}

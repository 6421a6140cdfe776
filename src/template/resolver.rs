// Template expansion: renders each expression against the supplied variables

use super::ast::{Expression, Modifier, Template, TemplatePart, VarSpec};
use super::encoding::encode_value;
use super::flatten::flatten_pairs;
use super::operator::Operator;
use super::value::{Scalar, Value, Variables};

/// Expands parsed templates. Stateless; one instance can be shared freely.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateResolver;

impl TemplateResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve template with provided variable values
    pub fn resolve(&self, template: &Template, variables: &Variables) -> String {
        let mut result = String::new();

        for part in &template.parts {
            match part {
                TemplatePart::Literal(s) => result.push_str(s),
                TemplatePart::Expression(expr) => {
                    result.push_str(&self.expand_expression(expr, variables))
                }
            }
        }

        result
    }

    /// Expand a single expression. Undefined variables are skipped; the
    /// operator prefix is emitted only if the joined fragments are non-empty.
    pub fn expand_expression(&self, expr: &Expression, variables: &Variables) -> String {
        let op = expr.operator;
        let mut fragments = Vec::with_capacity(expr.varspecs.len());

        for var in &expr.varspecs {
            let value = match variables.get(&var.name) {
                Some(value) if !value.is_null() => value,
                _ => {
                    log::trace!("skipping undefined variable {:?}", var.name);
                    continue;
                }
            };

            if let Some(fragment) = self.render_varspec(op, var, value) {
                fragments.push(fragment);
            }
        }

        let joined = fragments.join(op.joiner());
        if joined.is_empty() {
            return String::new();
        }

        format!("{}{}", op.prefix(), joined)
    }

    /// Render one varspec. `None` means the variable contributes nothing.
    fn render_varspec(&self, op: Operator, var: &VarSpec, value: &Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::Scalar(scalar) => Some(render_scalar(op, var, scalar)),
            Value::List(items) => render_list(op, var, items),
            Value::Assoc(entries) => render_assoc(op, var, entries),
        }
    }
}

fn render_scalar(op: Operator, var: &VarSpec, scalar: &Scalar) -> String {
    let text = scalar.to_string();
    let text = match var.modifier {
        Modifier::Prefix(length) => truncate_chars(&text, length),
        _ => &text,
    };

    let encoded = encode_value(text, op.allows_reserved());
    if !op.is_query_form() {
        encoded
    } else if encoded.is_empty() && op == Operator::PathParameter {
        // `;` writes an empty scalar as a bare name
        var.name.clone()
    } else {
        pair(&var.name, &encoded)
    }
}

fn render_list(op: Operator, var: &VarSpec, items: &[Value]) -> Option<String> {
    let encoded: Vec<String> = items
        .iter()
        .filter_map(|item| scalar_item(&var.name, item))
        .map(|scalar| encode_value(&scalar.to_string(), op.allows_reserved()))
        .collect();

    if encoded.is_empty() {
        return None;
    }

    if var.is_exploded() {
        let members: Vec<String> = if op.is_query_form() {
            encoded.iter().map(|item| pair(&var.name, item)).collect()
        } else {
            encoded
        };
        return Some(members.join(op.joiner()));
    }

    let joined = encoded.join(",");
    Some(if op.is_query_form() {
        pair(&var.name, &joined)
    } else {
        joined
    })
}

fn render_assoc(op: Operator, var: &VarSpec, entries: &[(String, Value)]) -> Option<String> {
    let allow_reserved = op.allows_reserved();

    if var.is_exploded() {
        let pairs: Vec<String> = entries
            .iter()
            .filter_map(|(key, value)| match value {
                Value::Null => None,
                Value::Scalar(scalar) => Some(pair(
                    &encode_value(key, allow_reserved),
                    &encode_value(&scalar.to_string(), allow_reserved),
                )),
                Value::List(_) | Value::Assoc(_) => {
                    Some(flatten_pairs(key, value)).filter(|pairs| !pairs.is_empty())
                }
            })
            .collect();

        if pairs.is_empty() {
            return None;
        }
        return Some(pairs.join(op.joiner()));
    }

    let pairs: Vec<String> = entries
        .iter()
        .filter_map(|(key, value)| {
            scalar_item(&var.name, value).map(|scalar| {
                format!(
                    "{},{}",
                    encode_value(key, allow_reserved),
                    encode_value(&scalar.to_string(), allow_reserved)
                )
            })
        })
        .collect();

    if pairs.is_empty() {
        return None;
    }

    let joined = pairs.join(",");
    Some(if op.is_query_form() {
        pair(&var.name, &joined)
    } else {
        joined
    })
}

/// Members of a composite must be scalars; anything deeper is dropped
fn scalar_item<'v>(name: &str, item: &'v Value) -> Option<&'v Scalar> {
    if let Value::Scalar(scalar) = item {
        return Some(scalar);
    }

    if item.is_composite() {
        log::debug!(
            "dropping nested {} inside {:?}: only exploded associative values may nest",
            item.type_name(),
            name
        );
    }
    None
}

fn pair(name: &str, value: &str) -> String {
    format!("{}={}", name, value)
}

/// First `length` Unicode scalar values of `text`
fn truncate_chars(text: &str, length: usize) -> &str {
    match text.char_indices().nth(length) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

// Template module for RFC 6570 URI Template expansion
//
// This module provides scanning, expression parsing, and expansion of URI
// templates against scalar, list, and associative variable values.

mod ast;
mod encoding;
mod flatten;
mod operator;
mod parser;
mod resolver;
mod value;

pub use ast::{Expression, Modifier, Template, TemplateMetadata, TemplatePart, VarSpec, VariableMetadata};
pub use encoding::{decode_reserved, encode, encode_value, RESERVED_DELIMITERS};
pub use operator::Operator;
pub use parser::{parse_expression, TemplateParser};
pub use resolver::TemplateResolver;
pub use value::{Scalar, Value, Variables};

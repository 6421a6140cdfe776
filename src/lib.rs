//! RFC 6570 URI Template expansion.
//!
//! ```
//! use uritemplate::{expand, Value, Variables};
//!
//! let mut vars = Variables::new();
//! vars.insert("owner".to_string(), Value::from("rust-lang"));
//! vars.insert("labels".to_string(), Value::from(vec!["bug", "help wanted"]));
//!
//! let url = expand("https://api.example.com/repos/{owner}/issues{?labels}", &vars);
//! assert_eq!(url, "https://api.example.com/repos/rust-lang/issues?labels=bug,help%20wanted");
//! ```
//!
//! Expansion never fails. Undefined variables are skipped, and malformed
//! expressions degrade to literal text.

pub mod config;
pub mod template;

pub use template::{
    Expression, Modifier, Operator, Scalar, Template, TemplateMetadata, TemplateParser,
    TemplatePart, TemplateResolver, Value, VarSpec, Variables,
};

/// Expand `template` with the given variables
pub fn expand(template: &str, variables: &Variables) -> String {
    // Nothing to substitute
    if !template.contains('{') {
        return template.to_string();
    }

    let parsed = TemplateParser::parse(template);
    TemplateResolver::new().resolve(&parsed, variables)
}

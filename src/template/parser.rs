// Template scanner and expression parser
//
// Parsing never fails: anything that does not look like an expression is kept
// as literal text, and odd expression bodies are interpreted best-effort.

use super::ast::{Expression, Template, TemplatePart, VarSpec};
use super::operator::Operator;

pub struct TemplateParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TemplateParser<'a> {
    pub fn parse(template: &'a str) -> Template {
        let mut parser = Self {
            input: template,
            pos: 0,
        };
        parser.parse_template()
    }

    fn parse_template(&mut self) -> Template {
        let mut parts = Vec::new();
        let mut literal_buf = String::new();

        while let Some(ch) = self.peek_char() {
            if ch != '{' {
                literal_buf.push(ch);
                self.pos += ch.len_utf8();
                continue;
            }

            let body_start = self.pos + 1;
            match self.input[body_start..].find('}') {
                Some(offset) => {
                    if !literal_buf.is_empty() {
                        parts.push(TemplatePart::Literal(std::mem::take(&mut literal_buf)));
                    }
                    let body = &self.input[body_start..body_start + offset];
                    parts.push(TemplatePart::Expression(parse_expression(body)));
                    self.pos = body_start + offset + 1;
                }
                None => {
                    // Unterminated expression: keep the rest verbatim
                    log::debug!(
                        "unterminated expression at position {} in template {:?}",
                        self.pos,
                        self.input
                    );
                    literal_buf.push_str(&self.input[self.pos..]);
                    self.pos = self.input.len();
                }
            }
        }

        if !literal_buf.is_empty() {
            parts.push(TemplatePart::Literal(literal_buf));
        }

        Template::new(parts)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }
}

/// Parse the text between a pair of braces
pub fn parse_expression(body: &str) -> Expression {
    let mut chars = body.chars();
    let (operator, varspec_text) = match chars.next().and_then(Operator::from_char) {
        Some(op) => (op, chars.as_str()),
        None => (Operator::Simple, body),
    };

    let varspecs = varspec_text.split(',').map(parse_varspec).collect();
    Expression::new(operator, varspecs)
}

fn parse_varspec(raw: &str) -> VarSpec {
    let part = raw.trim();

    if let Some((name, position)) = part.split_once(':') {
        let name = name.trim();
        return match position.trim().parse::<usize>() {
            Ok(length) => VarSpec::new(name).with_prefix(length),
            Err(_) => {
                log::debug!("ignoring invalid prefix length {:?} for {:?}", position, name);
                VarSpec::new(name)
            }
        };
    }

    if let Some(name) = part.strip_suffix('*') {
        return VarSpec::new(name.trim()).with_explode();
    }

    VarSpec::new(part)
}

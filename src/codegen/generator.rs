use crate::parser::{Definition, Expression};

/// Emits JavaScript-style source for a parsed definition.
#[derive(Debug, Default)]
pub struct CodeGenerator;

impl CodeGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a function declaration that returns the body's value
    pub fn generate(&self, definition: &Definition) -> String {
        let code = format!(
            "function {}({}) {{ return {}}};",
            definition.name,
            definition.params.join(","),
            self.generate_expression(&definition.body)
        );
        tracing::debug!(bytes = code.len(), "generated code");
        code
    }

    pub fn generate_expression(&self, expr: &Expression) -> String {
        match expr {
            Expression::Call { callee, args } => {
                let args: Vec<String> = args.iter().map(|arg| self.generate_expression(arg)).collect();
                format!("{}({})", callee, args.join(","))
            }
            Expression::Variable(name) => name.clone(),
            Expression::Integer(value) => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Position;

    fn definition(name: &str, params: &[&str], body: Expression) -> Definition {
        Definition {
            name: name.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
            body,
            pos: Position::start(),
        }
    }

    #[test]
    fn wraps_body_in_return() {
        let def = definition("id", &["x"], Expression::variable("x"));
        assert_eq!(CodeGenerator::new().generate(&def), "function id(x) { return x};");
    }

    #[test]
    fn empty_params_and_args_render_empty_parens() {
        let def = definition("now", &[], Expression::call("clock", vec![]));
        assert_eq!(CodeGenerator::new().generate(&def), "function now() { return clock()};");
    }

    #[test]
    fn arguments_are_comma_joined_without_spaces() {
        let expr = Expression::call(
            "g",
            vec![
                Expression::call("h", vec![Expression::variable("x")]),
                Expression::integer(1u32),
                Expression::variable("y"),
            ],
        );
        assert_eq!(CodeGenerator::new().generate_expression(&expr), "g(h(x),1,y)");
    }

    #[test]
    fn integers_render_in_decimal() {
        assert_eq!(
            CodeGenerator::new().generate_expression(&Expression::integer(u64::MAX)),
            "18446744073709551615"
        );
    }
}

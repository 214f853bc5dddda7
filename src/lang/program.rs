use super::node::Statement;

/// Parsed program: statements in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_one_statement_per_line() {
        let program = crate::parse("hp=10; damage=5; hp/damage+(1.25*2);").unwrap();
        assert_eq!(
            program.to_string(),
            "hp = 10;\ndamage = 5;\n(hp / damage) + (1.25 * 2);"
        );
    }

    #[test]
    fn test_display_reparses_to_same_program() {
        let program = crate::parse("a = -2; b = (a % 3) * 4; -1.5;").unwrap();
        assert_eq!(crate::parse(&program.to_string()).unwrap(), program);
    }

    #[test]
    fn test_display_empty_program() {
        assert_eq!(Program::default().to_string(), "");
    }
}

use std::fmt;

use super::{Node, Statement};

/// The root of a parsed source text: an ordered sequence of statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements.first().map(|s| s.token_literal()).unwrap_or("")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Identifier, LetStatement};
    use crate::token::{Token, TokenKind};

    #[test]
    fn to_string_concatenates_statements() {
        let program = Program {
            statements: vec![Statement::Let(LetStatement {
                token: Token::new(TokenKind::Let, "let"),
                name: Identifier {
                    token: Token::new(TokenKind::Ident, "myVar"),
                    value: "myVar".to_string(),
                },
                value: crate::ast::Expression::Identifier(Identifier {
                    token: Token::new(TokenKind::Ident, "anotherVar"),
                    value: "anotherVar".to_string(),
                }),
            })],
        };

        assert_eq!(program.to_string(), "let myVar = anotherVar;");
    }
}

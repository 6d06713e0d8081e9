//! Pratt parser: turns a token stream into an [`ast::Program`], accumulating
//! diagnostics instead of aborting on the first bad token.

mod error;
mod precedence;


pub use error::ParseError;
pub use precedence::Precedence;

use std::collections::HashMap;

use log::{debug, trace};

use crate::ast::{
    ArrayLiteral, BlockStatement, BooleanLiteral, CallExpression, Expression, ExpressionStatement,
    FloatLiteral, FunctionLiteral, Identifier, IfExpression, IndexExpression, InfixExpression,
    IntegerLiteral, LetStatement, PrefixExpression, Program, ReturnStatement, Statement,
    StringLiteral,
};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

use precedence::precedence_of;

type PrefixParseFn = fn(&mut Parser) -> Option<Expression>;
type InfixParseFn = fn(&mut Parser, Expression) -> Option<Expression>;

pub struct Parser {
    lexer: Lexer,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<String>,
    prefix_parse_fns: HashMap<TokenKind, PrefixParseFn>,
    infix_parse_fns: HashMap<TokenKind, InfixParseFn>,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Self {
            lexer,
            cur_token,
            peek_token,
            errors: Vec::new(),
            prefix_parse_fns: HashMap::new(),
            infix_parse_fns: HashMap::new(),
        };

        use TokenKind::*;
        parser.register_prefix(Ident, Parser::parse_identifier);
        parser.register_prefix(Int, Parser::parse_integer_literal);
        parser.register_prefix(Float, Parser::parse_float_literal);
        parser.register_prefix(String, Parser::parse_string_literal);
        parser.register_prefix(Bang, Parser::parse_prefix_expression);
        parser.register_prefix(Minus, Parser::parse_prefix_expression);
        parser.register_prefix(True, Parser::parse_boolean_literal);
        parser.register_prefix(False, Parser::parse_boolean_literal);
        parser.register_prefix(LParen, Parser::parse_grouped_expression);
        parser.register_prefix(If, Parser::parse_if_expression);
        parser.register_prefix(Function, Parser::parse_function_literal);
        parser.register_prefix(LBracket, Parser::parse_array_literal);

        parser.register_infix(Plus, Parser::parse_infix_expression);
        parser.register_infix(Minus, Parser::parse_infix_expression);
        parser.register_infix(Slash, Parser::parse_infix_expression);
        parser.register_infix(Asterisk, Parser::parse_infix_expression);
        parser.register_infix(Modulo, Parser::parse_infix_expression);
        parser.register_infix(Eq, Parser::parse_infix_expression);
        parser.register_infix(NotEq, Parser::parse_infix_expression);
        parser.register_infix(Lt, Parser::parse_infix_expression);
        parser.register_infix(Gt, Parser::parse_infix_expression);
        parser.register_infix(LParen, Parser::parse_call_expression);
        parser.register_infix(LBracket, Parser::parse_index_expression);

        parser
    }

    fn register_prefix(&mut self, kind: TokenKind, func: PrefixParseFn) {
        self.prefix_parse_fns.insert(kind, func);
    }

    fn register_infix(&mut self, kind: TokenKind, func: InfixParseFn) {
        self.infix_parse_fns.insert(kind, func);
    }

    /// Diagnostics accumulated while parsing. The returned `Program` may be
    /// partial if this is non-empty; callers must not evaluate it.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    fn next_token(&mut self) {
        std::mem::swap(&mut self.cur_token, &mut self.peek_token);
        self.peek_token = self.lexer.next_token();
    }

    fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.errors.push(
                ParseError::UnexpectedToken {
                    expected: kind,
                    found: self.peek_token.kind,
                    literal: self.peek_token.literal.clone(),
                }
                .to_string(),
            );
            false
        }
    }

    fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek_token.kind)
    }

    fn cur_precedence(&self) -> Precedence {
        precedence_of(self.cur_token.kind)
    }

    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while !self.cur_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }

        debug!(target: "ember::parser", "parsed program with {} statement(s)", statements.len());
        Program { statements }
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        let stmt = match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            _ => self.parse_expression_statement().map(Statement::Expression),
        };

        if stmt.is_none() {
            self.synchronize();
        }

        stmt
    }

    /// Recover from a statement-level error by skipping to the next
    /// semicolon (or a brace that ends the enclosing block), so one bad
    /// token reports one error instead of cascading.
    fn synchronize(&mut self) {
        while !self.cur_is(TokenKind::Semicolon)
            && !self.cur_is(TokenKind::Eof)
            && !self.cur_is(TokenKind::RBrace)
        {
            self.next_token();
        }
    }

    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }

        let name = Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        };

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(LetStatement { token, name, value })
    }

    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let token = self.cur_token.clone();

        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(ReturnStatement { token, value })
    }

    fn parse_expression_statement(&mut self) -> Option<ExpressionStatement> {
        let token = self.cur_token.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(ExpressionStatement { token, expression })
    }

    fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.cur_token.clone();
        let mut statements = Vec::new();

        self.next_token();

        while !self.cur_is(TokenKind::RBrace) && !self.cur_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }

        BlockStatement {
            token: Some(token),
            statements,
        }
    }

    /// The Pratt core: parse a prefix expression, then keep folding infix
    /// operators in while the next one binds tighter than `precedence`.
    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = self.prefix_parse_fns.get(&self.cur_token.kind).copied() else {
            trace!(target: "ember::parser", "no prefix parse fn for {:?}", self.cur_token.kind);
            self.errors.push(
                ParseError::NoPrefixParseFn {
                    kind: self.cur_token.kind,
                }
                .to_string(),
            );
            return None;
        };

        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = self.infix_parse_fns.get(&self.peek_token.kind).copied() else {
                return Some(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        }))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
            Err(_) => {
                self.errors.push(
                    ParseError::MalformedInt {
                        literal: token.literal,
                    }
                    .to_string(),
                );
                None
            }
        }
    }

    fn parse_float_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        match token.literal.parse::<f64>() {
            Ok(value) => Some(Expression::FloatLiteral(FloatLiteral { token, value })),
            Err(_) => {
                self.errors.push(
                    ParseError::MalformedFloat {
                        literal: token.literal,
                    }
                    .to_string(),
                );
                None
            }
        }
    }

    fn parse_string_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let value = token.literal.clone();
        Some(Expression::StringLiteral(StringLiteral { token, value }))
    }

    fn parse_boolean_literal(&mut self) -> Option<Expression> {
        Some(Expression::BooleanLiteral(BooleanLiteral {
            token: self.cur_token.clone(),
            value: self.cur_is(TokenKind::True),
        }))
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(expr)
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::Function(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut identifiers = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(identifiers);
        }

        self.next_token();
        identifiers.push(Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        });

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            identifiers.push(Identifier {
                token: self.cur_token.clone(),
                value: self.cur_token.literal.clone(),
            });
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(identifiers)
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Some(Expression::Call(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    fn parse_array_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let elements = self.parse_expression_list(TokenKind::RBracket)?;

        Some(Expression::Array(ArrayLiteral { token, elements }))
    }

    fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();

        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }

        Some(Expression::Index(IndexExpression {
            token,
            left: Box::new(left),
            index: Box::new(index),
        }))
    }

    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }
}

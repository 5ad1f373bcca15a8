//! Statement parsing

use super::{Context, ListEnd, ParseResult, Parser, TolerantPoint};
use crate::ast::*;
use crate::error::unexpected_token;
use crate::lexer::{Keyword, Punctuator, TokenKind};
use core_types::{DiagnosticKind, Severity};
use log::trace;

impl<'a> Parser<'a> {
    /// Statements up to the closer given by `end`. Never fails: broken
    /// statements are recorded and replaced by error statements.
    pub(crate) fn parse_statement_list(&mut self, end: ListEnd) -> Vec<Statement> {
        let saved = self.ctx;
        self.ctx = Context {
            list_end: end,
            ..Context::TOP_LEVEL
        };

        let mut body = Vec::new();
        while !self.aborted && !self.at_list_end() {
            let start = self.current.span.start;
            match self.parse_statement() {
                Ok(statement) => body.push(statement),
                Err(err) => {
                    if let Some(statement) = self.recover_statement(start, err) {
                        body.push(statement);
                    }
                }
            }
        }

        self.ctx = saved;
        body
    }

    /// `{ statements }`
    pub(crate) fn parse_block(&mut self) -> ParseResult<Block> {
        self.guarded(|p| {
            let start = p.expect_punctuator(Punctuator::LBrace)?.span.start;
            let body = p.parse_statement_list(ListEnd::Brace);
            p.expect_punctuator(Punctuator::RBrace)?;
            Ok(Block {
                body,
                span: p.finish(start),
            })
        })
    }

    fn parse_statement(&mut self) -> ParseResult<Statement> {
        trace!(
            target: "js_frontend",
            "statement at {}: {:?}",
            self.current.span.start,
            self.current.kind
        );
        self.guarded(|p| match p.current.kind {
            TokenKind::Keyword(keyword) => match keyword {
                Keyword::Export => p.parse_export(),
                Keyword::Import => p.parse_import(),
                Keyword::Var | Keyword::Let | Keyword::Const => {
                    let start = p.current.span.start;
                    let declaration = p.parse_var_declaration()?;
                    p.consume_terminator(false);
                    Ok(Statement::VarDeclaration(VariableDeclaration {
                        span: p.finish(start),
                        ..declaration
                    }))
                }
                Keyword::If => p.parse_if(),
                Keyword::Switch => p.parse_switch(),
                Keyword::For => p.parse_for(),
                Keyword::While => p.parse_while(),
                Keyword::Do => p.parse_do(),
                Keyword::Try => p.parse_try(),
                Keyword::Break | Keyword::Continue => p.parse_jump(keyword),
                Keyword::Return | Keyword::Yield => p.parse_return_or_yield(keyword),
                Keyword::Throw => p.parse_throw(),
                _ => p.parse_expression_statement(),
            },
            TokenKind::Punctuator(Punctuator::LBrace) => Ok(Statement::Block(p.parse_block()?)),
            TokenKind::Punctuator(Punctuator::Semicolon) => {
                let token = p.advance();
                Ok(Statement::EmptyStatement { span: token.span })
            }
            _ => p.parse_expression_statement(),
        })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let start = self.current.span.start;
        let expression = self.tolerant(
            TolerantPoint::ExpressionStatement,
            |p| p.parse_expression(),
            Expression::Error,
        )?;
        match expression {
            Expression::Error(_) => {
                self.eat_punctuator(Punctuator::Semicolon);
            }
            _ if expression.is_declaration_like() => self.eat_declaration_semicolon(),
            _ => self.consume_terminator(true),
        }
        Ok(Statement::ExpressionStatement {
            expression,
            span: self.finish(start),
        })
    }

    /// Consume a `;`, or accept a preceding line break. Trailing statements
    /// may also end where their statement list ends. A missing terminator
    /// is reported but never fails the statement.
    fn consume_terminator(&mut self, trailing: bool) {
        if self.eat_punctuator(Punctuator::Semicolon) || self.newline_before {
            return;
        }
        let at_end = self.at_list_end();
        if trailing && at_end && self.options.allow_trailing_statement {
            return;
        }
        let severity = if at_end {
            Severity::Warning
        } else {
            Severity::Error
        };
        let err = unexpected_token("';' or line break", &self.current);
        if err.is_lexical() {
            return;
        }
        let message = if self.at_eof() {
            "missing ';' or line break before end of input".to_string()
        } else {
            err.to_string()
        };
        self.report(
            DiagnosticKind::StructuralParseError,
            severity,
            message,
            err.span(),
        );
    }

    /// Function and class declarations need no terminator; a `;` on the
    /// same line still belongs to them
    fn eat_declaration_semicolon(&mut self) {
        if !self.newline_before {
            self.eat_punctuator(Punctuator::Semicolon);
        }
    }

    /// True if no operand follows a `return`/`yield` on this line
    fn at_statement_end(&self) -> bool {
        self.check_punctuator(Punctuator::Semicolon) || self.newline_before || self.at_list_end()
    }

    /// `var`/`let`/`const` bindings without the terminator
    fn parse_var_declaration(&mut self) -> ParseResult<VariableDeclaration> {
        let token = self.advance();
        let kind = match token.kind {
            TokenKind::Keyword(Keyword::Let) => VarKind::Let,
            TokenKind::Keyword(Keyword::Const) => VarKind::Const,
            _ => VarKind::Var,
        };

        let mut declarations = Vec::new();
        loop {
            let declarator = self.tolerant(
                TolerantPoint::VarBinding,
                |p| p.parse_binding(),
                VariableDeclarator::Error,
            )?;
            let recovered = matches!(declarator, VariableDeclarator::Error(_));
            declarations.push(declarator);
            if self.eat_punctuator(Punctuator::Comma) {
                continue;
            }
            if recovered && self.current.kind == TokenKind::Identifier && !self.newline_before {
                continue;
            }
            break;
        }

        Ok(VariableDeclaration {
            kind,
            declarations,
            span: self.finish(token.span.start),
        })
    }

    /// `name` or `name = value`
    fn parse_binding(&mut self) -> ParseResult<VariableDeclarator> {
        let id = self.expect_identifier()?;
        let init = if self.eat_punctuator(Punctuator::Assign) {
            Some(self.parse_assignment()?)
        } else {
            None
        };
        Ok(VariableDeclarator::Binding {
            span: self.finish(id.span.start),
            id,
            init,
        })
    }

    /// `( expression )` as used by `if`, `while`, `do` and `switch`
    fn parse_paren_expression(&mut self) -> ParseResult<Expression> {
        self.expect_punctuator(Punctuator::LParen)?;
        let expression = self.nested(|p| {
            p.tolerant(
                TolerantPoint::Parenthesized,
                |p| p.parse_expression_before(Punctuator::RParen),
                Expression::Error,
            )
        })?;
        self.expect_punctuator(Punctuator::RParen)?;
        Ok(expression)
    }

    fn parse_if(&mut self) -> ParseResult<Statement> {
        let start = self.advance().span.start;
        let test = self.parse_paren_expression()?;
        let consequent = Box::new(self.parse_statement()?);
        // `else` binds to the nearest `if`
        let alternate = if self.check_keyword(Keyword::Else) {
            self.advance();
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(Statement::IfStatement {
            test,
            consequent,
            alternate,
            span: self.finish(start),
        })
    }

    fn parse_switch(&mut self) -> ParseResult<Statement> {
        let start = self.advance().span.start;
        let discriminant = self.parse_paren_expression()?;
        self.expect_punctuator(Punctuator::LBrace)?;

        let mut cases = Vec::new();
        while !self.check_punctuator(Punctuator::RBrace) {
            let case_start = self.current.span.start;
            let test = if self.check_keyword(Keyword::Case) {
                self.advance();
                Some(self.parse_expression()?)
            } else if self.check_keyword(Keyword::Default) {
                self.advance();
                None
            } else {
                return Err(unexpected_token("'case', 'default' or '}'", &self.current));
            };
            self.expect_punctuator(Punctuator::Colon)?;
            let consequent = self.parse_statement_list(ListEnd::SwitchCase);
            cases.push(SwitchCase {
                test,
                consequent,
                span: self.finish(case_start),
            });
        }
        self.expect_punctuator(Punctuator::RBrace)?;

        Ok(Statement::SwitchStatement {
            discriminant,
            cases,
            span: self.finish(start),
        })
    }

    /// The three `for` forms, told apart by the token after the loop
    /// variable: `in`, `of`, or `;`
    fn parse_for(&mut self) -> ParseResult<Statement> {
        let start = self.advance().span.start;
        self.expect_punctuator(Punctuator::LParen)?;

        enum Head {
            Classic {
                init: Option<ForInit>,
                test: Option<Expression>,
                update: Option<Expression>,
            },
            Each {
                of: bool,
                kind: Option<VarKind>,
                left: Expression,
                right: Expression,
            },
        }

        let head = self.nested(|p| {
            let header = |p: &mut Self, closer| {
                p.tolerant(
                    TolerantPoint::ForHeader,
                    |p| p.parse_expression_before(closer),
                    Expression::Error,
                )
            };

            let mut kind = None;
            let init = if p.check_punctuator(Punctuator::Semicolon) {
                None
            } else if matches!(
                p.current.kind,
                TokenKind::Keyword(Keyword::Var | Keyword::Let | Keyword::Const)
            ) {
                let declaration = p.without_in(|p| p.parse_var_declaration())?;
                kind = Some(declaration.kind);
                Some(ForInit::Variable(declaration))
            } else {
                let init = p.without_in(|p| {
                    p.tolerant(TolerantPoint::ForHeader, |p| p.parse_expression(), Expression::Error)
                })?;
                Some(ForInit::Expression(init))
            };

            let each = if p.check_keyword(Keyword::In) {
                Some(false)
            } else if p.check_word("of") {
                Some(true)
            } else {
                None
            };
            if let Some(of) = each {
                let left = match init {
                    Some(ForInit::Expression(expression)) => expression,
                    Some(ForInit::Variable(VariableDeclaration { declarations, .. }))
                        if declarations.len() == 1 =>
                    {
                        match declarations.into_iter().next() {
                            Some(VariableDeclarator::Binding {
                                id, init: None, ..
                            }) => Expression::Identifier(id),
                            _ => return Err(unexpected_token("';'", &p.current)),
                        }
                    }
                    _ => return Err(unexpected_token("';'", &p.current)),
                };
                p.advance();
                let right = header(p, Punctuator::RParen)?;
                return Ok(Head::Each {
                    of,
                    kind,
                    left,
                    right,
                });
            }

            p.expect_punctuator(Punctuator::Semicolon)?;
            let test = if p.check_punctuator(Punctuator::Semicolon) {
                None
            } else {
                Some(header(p, Punctuator::Semicolon)?)
            };
            p.expect_punctuator(Punctuator::Semicolon)?;
            let update = if p.check_punctuator(Punctuator::RParen) {
                None
            } else {
                Some(header(p, Punctuator::RParen)?)
            };
            Ok(Head::Classic { init, test, update })
        })?;

        self.expect_punctuator(Punctuator::RParen)?;
        let body = Box::new(self.parse_statement()?);
        let span = self.finish(start);

        Ok(match head {
            Head::Classic { init, test, update } => Statement::ForStatement {
                init,
                test,
                update,
                body,
                span,
            },
            Head::Each {
                of: false,
                kind,
                left,
                right,
            } => Statement::ForInStatement {
                kind,
                left,
                right,
                body,
                span,
            },
            Head::Each {
                of: true,
                kind,
                left,
                right,
            } => Statement::ForOfStatement {
                kind,
                left,
                right,
                body,
                span,
            },
        })
    }

    fn parse_while(&mut self) -> ParseResult<Statement> {
        let start = self.advance().span.start;
        let test = self.parse_paren_expression()?;
        let body = Box::new(self.parse_statement()?);
        Ok(Statement::WhileStatement {
            test,
            body,
            span: self.finish(start),
        })
    }

    fn parse_do(&mut self) -> ParseResult<Statement> {
        let start = self.advance().span.start;
        let body = self.parse_block()?;
        self.expect_keyword(Keyword::While)?;
        let test = self.parse_paren_expression()?;
        self.consume_terminator(false);
        Ok(Statement::DoStatement {
            body,
            test,
            span: self.finish(start),
        })
    }

    fn parse_try(&mut self) -> ParseResult<Statement> {
        let start = self.advance().span.start;
        let block = self.parse_block()?;

        let handler = if self.check_keyword(Keyword::Catch) {
            let catch_start = self.advance().span.start;
            let param = if self.eat_punctuator(Punctuator::LParen) {
                let param = self.nested(|p| p.expect_identifier())?;
                self.expect_punctuator(Punctuator::RParen)?;
                Some(param)
            } else {
                None
            };
            let body = self.parse_block()?;
            Some(CatchClause {
                param,
                body,
                span: self.finish(catch_start),
            })
        } else {
            None
        };

        let finalizer = if self.check_keyword(Keyword::Finally) {
            self.advance();
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Statement::TryStatement {
            block,
            handler,
            finalizer,
            span: self.finish(start),
        })
    }

    /// `break` or `continue`
    fn parse_jump(&mut self, keyword: Keyword) -> ParseResult<Statement> {
        let start = self.advance().span.start;
        self.consume_terminator(true);
        let span = self.finish(start);
        Ok(if keyword == Keyword::Break {
            Statement::BreakStatement { span }
        } else {
            Statement::ContinueStatement { span }
        })
    }

    fn parse_return_or_yield(&mut self, keyword: Keyword) -> ParseResult<Statement> {
        let start = self.advance().span.start;
        let argument = if self.at_statement_end() {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.consume_terminator(true);
        let span = self.finish(start);
        Ok(if keyword == Keyword::Return {
            Statement::ReturnStatement { argument, span }
        } else {
            Statement::YieldStatement { argument, span }
        })
    }

    fn parse_throw(&mut self) -> ParseResult<Statement> {
        let start = self.advance().span.start;
        let argument = self.parse_expression()?;
        self.consume_terminator(true);
        Ok(Statement::ThrowStatement {
            argument,
            span: self.finish(start),
        })
    }

    fn parse_import(&mut self) -> ParseResult<Statement> {
        let start = self.advance().span.start;

        let clause = if self.current.kind == TokenKind::String {
            None
        } else {
            let clause_start = self.current.span.start;
            let mut clause = ImportClause {
                default: None,
                namespace: None,
                named: None,
                span: self.current.span,
            };
            if self.current.kind == TokenKind::Identifier {
                clause.default = Some(self.expect_identifier()?);
            }
            if clause.default.is_none() || self.eat_punctuator(Punctuator::Comma) {
                if self.eat_punctuator(Punctuator::Star) {
                    self.expect_word("as")?;
                    clause.namespace = Some(self.expect_identifier()?);
                } else if self.check_punctuator(Punctuator::LBrace) {
                    clause.named = Some(self.parse_import_specifiers()?);
                } else {
                    return Err(unexpected_token("'*' or '{'", &self.current));
                }
            }
            clause.span = self.finish(clause_start);
            self.expect_word("from")?;
            Some(clause)
        };

        if self.current.kind != TokenKind::String {
            return Err(unexpected_token("module string", &self.current));
        }
        let token = self.advance();
        let source = Literal {
            kind: LiteralKind::String,
            raw: token.text.to_string(),
            span: token.span,
        };
        self.consume_terminator(false);

        Ok(Statement::ImportStatement {
            clause,
            source,
            span: self.finish(start),
        })
    }

    fn parse_import_specifiers(&mut self) -> ParseResult<Vec<ImportSpecifier>> {
        self.expect_punctuator(Punctuator::LBrace)?;
        let specifiers = self.nested(|p| {
            let mut specifiers = Vec::new();
            while !p.check_punctuator(Punctuator::RBrace) {
                let imported = p.expect_identifier_name()?;
                let local = if p.check_word("as") {
                    p.advance();
                    Some(p.expect_identifier()?)
                } else {
                    None
                };
                specifiers.push(ImportSpecifier {
                    span: p.finish(imported.span.start),
                    imported,
                    local,
                });
                if !p.eat_punctuator(Punctuator::Comma) {
                    break;
                }
            }
            Ok(specifiers)
        })?;
        self.expect_punctuator(Punctuator::RBrace)?;
        Ok(specifiers)
    }

    fn parse_export(&mut self) -> ParseResult<Statement> {
        let start = self.advance().span.start;

        let export = match self.current.kind {
            TokenKind::Punctuator(Punctuator::Star) => {
                self.advance();
                let source = self.parse_from_clause()?;
                self.consume_terminator(false);
                Export::All { source }
            }
            TokenKind::Punctuator(Punctuator::LBrace) => {
                let specifiers = self.parse_export_specifiers()?;
                let source = if self.check_word("from") {
                    Some(self.parse_from_clause()?)
                } else {
                    None
                };
                self.consume_terminator(false);
                Export::Named { specifiers, source }
            }
            TokenKind::Keyword(Keyword::Default) => {
                self.advance();
                if self.check_keyword(Keyword::Class) {
                    let class = self.parse_class(true)?;
                    self.eat_declaration_semicolon();
                    Export::Default(Expression::ClassExpression(class))
                } else {
                    let expression = self.parse_assignment()?;
                    if expression.is_declaration_like() {
                        self.eat_declaration_semicolon();
                    } else {
                        self.consume_terminator(false);
                    }
                    Export::Default(expression)
                }
            }
            TokenKind::Keyword(Keyword::Var | Keyword::Let | Keyword::Const) => {
                let declaration = self.parse_var_declaration()?;
                self.consume_terminator(false);
                Export::Variable(declaration)
            }
            TokenKind::Keyword(Keyword::Function) => {
                let function = self.parse_function(false, self.current.span.start)?;
                Export::Declaration(function)
            }
            TokenKind::Keyword(Keyword::Class) => {
                Export::Declaration(Expression::ClassExpression(self.parse_class(true)?))
            }
            TokenKind::Identifier
                if self.check_word("async") && self.peek().is_keyword(Keyword::Function) =>
            {
                let async_start = self.advance().span.start;
                Export::Declaration(self.parse_function(true, async_start)?)
            }
            _ => return Err(unexpected_token("declaration or export clause", &self.current)),
        };

        Ok(Statement::ExportStatement {
            export,
            span: self.finish(start),
        })
    }

    fn parse_export_specifiers(&mut self) -> ParseResult<Vec<ExportSpecifier>> {
        self.expect_punctuator(Punctuator::LBrace)?;
        let specifiers = self.nested(|p| {
            let mut specifiers = Vec::new();
            while !p.check_punctuator(Punctuator::RBrace) {
                let local = p.expect_identifier()?;
                let exported = if p.check_word("as") {
                    p.advance();
                    Some(p.expect_identifier_name()?)
                } else {
                    None
                };
                specifiers.push(ExportSpecifier {
                    span: p.finish(local.span.start),
                    local,
                    exported,
                });
                if !p.eat_punctuator(Punctuator::Comma) {
                    break;
                }
            }
            Ok(specifiers)
        })?;
        self.expect_punctuator(Punctuator::RBrace)?;
        Ok(specifiers)
    }

    /// `from "module"`
    fn parse_from_clause(&mut self) -> ParseResult<Literal> {
        self.expect_word("from")?;
        if self.current.kind != TokenKind::String {
            return Err(unexpected_token("module string", &self.current));
        }
        let token = self.advance();
        Ok(Literal {
            kind: LiteralKind::String,
            raw: token.text.to_string(),
            span: token.span,
        })
    }
}

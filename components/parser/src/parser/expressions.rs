//! Expression parsing (precedence climbing)

use super::{ParseResult, Parser, TolerantPoint};
use crate::ast::*;
use crate::error::{unexpected_token, ParseError};
use crate::lexer::{Keyword, Punctuator, Token, TokenKind};
use crate::precedence::{Fixity, OperatorInfo, Precedence};
use core_types::{DiagnosticKind, Span};

impl<'a> Parser<'a> {
    /// Full expression, including the comma operator
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_expression_bp(Precedence::LOWEST)
    }

    /// Expression that `closer` must follow. Stray tokens before the closer
    /// fail the parse, so the enclosing tolerant point skips them. A missing
    /// closer is left to the caller.
    pub(crate) fn parse_expression_before(&mut self, closer: Punctuator) -> ParseResult<Expression> {
        let expression = self.parse_expression()?;
        let token = self.current;
        let closer_missing = token.kind == TokenKind::EOF
            || matches!(
                token.kind,
                TokenKind::Punctuator(
                    Punctuator::LBrace | Punctuator::RParen | Punctuator::RBracket | Punctuator::RBrace
                )
            );
        if token.is_punctuator(closer) || closer_missing {
            Ok(expression)
        } else {
            Err(unexpected_token(&format!("'{}'", closer.as_str()), &token))
        }
    }

    /// Expression without a top-level comma (arguments, initializers, ...)
    pub(crate) fn parse_assignment(&mut self) -> ParseResult<Expression> {
        self.parse_expression_bp(Precedence::ASSIGN)
    }

    /// Parse a prefix or primary expression, then fold in every infix and
    /// postfix operator binding at least as tightly as `min`
    pub(crate) fn parse_expression_bp(&mut self, min: Precedence) -> ParseResult<Expression> {
        self.guarded(|p| {
            let mut left = p.parse_prefix()?;
            loop {
                if p.newline_before && p.ctx.newlines_significant {
                    break;
                }
                let kind = p.current.kind;
                if kind == TokenKind::Keyword(Keyword::In) && !p.ctx.allow_in {
                    break;
                }
                let Some(info) = p.table.infix(kind) else {
                    break;
                };
                if info.precedence < min {
                    break;
                }
                left = p.parse_infix(left, info)?;
            }
            Ok(left)
        })
    }

    fn parse_infix(&mut self, left: Expression, info: OperatorInfo) -> ParseResult<Expression> {
        let op = self.advance();
        let start = left.span().start;

        if info.fixity == Fixity::Postfix {
            return self.parse_postfix(left, op);
        }

        let TokenKind::Punctuator(punct) = op.kind else {
            // instanceof, in
            let operator = match op.kind {
                TokenKind::Keyword(Keyword::Instanceof) => BinaryOperator::Instanceof,
                _ => BinaryOperator::In,
            };
            let right = self.parse_expression_bp(info.right_operand_precedence())?;
            return Ok(binary(operator, left, right));
        };

        match punct {
            Punctuator::Comma => {
                let right = self.parse_expression_bp(info.right_operand_precedence())?;
                let span = left.span().cover(right.span());
                Ok(Expression::SequenceExpression {
                    left: Box::new(left),
                    right: Box::new(right),
                    span,
                })
            }
            Punctuator::Assign => {
                let target = self.assignment_target(left);
                let value = self.parse_expression_bp(info.right_operand_precedence())?;
                let span = Span::new(start, value.span().end);
                Ok(Expression::AssignmentExpression {
                    target: Box::new(target),
                    value: Box::new(value),
                    span,
                })
            }
            Punctuator::PlusEq | Punctuator::MinusEq | Punctuator::StarEq | Punctuator::SlashEq => {
                let operator = match punct {
                    Punctuator::PlusEq => CompoundOperator::AddAssign,
                    Punctuator::MinusEq => CompoundOperator::SubAssign,
                    Punctuator::StarEq => CompoundOperator::MulAssign,
                    _ => CompoundOperator::DivAssign,
                };
                let target = self.assignment_target(left);
                let value = self.parse_expression_bp(info.right_operand_precedence())?;
                let span = Span::new(start, value.span().end);
                Ok(Expression::CompoundAssignmentExpression {
                    operator,
                    target: Box::new(target),
                    value: Box::new(value),
                    span,
                })
            }
            Punctuator::Question => {
                let consequent = self.nested(|p| p.parse_assignment())?;
                self.expect_punctuator(Punctuator::Colon)?;
                let alternate = self.parse_expression_bp(info.right_operand_precedence())?;
                let span = Span::new(start, alternate.span().end);
                Ok(Expression::ConditionalExpression {
                    test: Box::new(left),
                    consequent: Box::new(consequent),
                    alternate: Box::new(alternate),
                    span,
                })
            }
            _ => {
                let operator = binary_operator(punct)
                    .ok_or_else(|| unexpected_token("operator", &op))?;
                let right = self.parse_expression_bp(info.right_operand_precedence())?;
                Ok(binary(operator, left, right))
            }
        }
    }

    fn parse_postfix(&mut self, left: Expression, op: Token<'a>) -> ParseResult<Expression> {
        let start = left.span().start;
        match op.kind {
            TokenKind::Punctuator(Punctuator::PlusPlus | Punctuator::MinusMinus) => {
                let operator = if op.is_punctuator(Punctuator::PlusPlus) {
                    UpdateOperator::Increment
                } else {
                    UpdateOperator::Decrement
                };
                Ok(Expression::UpdateExpression {
                    operator,
                    prefix: false,
                    argument: Box::new(left),
                    span: Span::new(start, op.span.end),
                })
            }
            TokenKind::Punctuator(Punctuator::LParen) => {
                let arguments = self.parse_arguments()?;
                Ok(Expression::CallExpression {
                    callee: Box::new(left),
                    arguments,
                    span: self.finish(start),
                })
            }
            TokenKind::Punctuator(Punctuator::Dot) => {
                let property = self.expect_identifier_name()?;
                let span = Span::new(start, property.span.end);
                Ok(Expression::MemberExpression {
                    object: Box::new(left),
                    property,
                    span,
                })
            }
            TokenKind::Punctuator(Punctuator::LBracket) => {
                let index = self.nested(|p| {
                    p.tolerant(
                        TolerantPoint::SubscriptIndex,
                        |p| p.parse_expression_before(Punctuator::RBracket),
                        Expression::Error,
                    )
                })?;
                self.expect_punctuator(Punctuator::RBracket)?;
                Ok(Expression::SubscriptExpression {
                    object: Box::new(left),
                    index: Box::new(index),
                    span: self.finish(start),
                })
            }
            _ => Err(unexpected_token("operator", &op)),
        }
    }

    /// Arguments after an already consumed `(`, through the closing `)`
    fn parse_arguments(&mut self) -> ParseResult<Vec<Expression>> {
        self.nested(|p| {
            let mut arguments = Vec::new();
            loop {
                if p.check_punctuator(Punctuator::RParen) {
                    break;
                }
                let argument = p.tolerant(
                    TolerantPoint::Argument,
                    |p| p.parse_assignment(),
                    Expression::Error,
                )?;
                let recovered = matches!(argument, Expression::Error(_));
                arguments.push(argument);
                if p.eat_punctuator(Punctuator::Comma) || p.check_punctuator(Punctuator::RParen) {
                    continue;
                }
                if !recovered {
                    let skipped =
                        p.missing_separator(TolerantPoint::Argument, "',' or ')'", Expression::Error)?;
                    arguments.push(skipped);
                }
                p.eat_punctuator(Punctuator::Comma);
            }
            p.expect_punctuator(Punctuator::RParen)?;
            Ok(arguments)
        })
    }

    /// A list element not followed by its separator: the tokens up to the
    /// next separator or closer become an error element
    fn missing_separator<T>(
        &mut self,
        point: TolerantPoint,
        expected: &str,
        wrap: impl FnOnce(ErrorNode) -> T,
    ) -> ParseResult<T> {
        let err = unexpected_token(expected, &self.current);
        self.tolerant(point, |_| Err(err), wrap)
    }

    /// Assignment targets are identifiers, member and subscript accesses.
    /// Anything else is replaced by an error node.
    fn assignment_target(&mut self, target: Expression) -> Expression {
        if target.is_assignment_target() || matches!(target, Expression::Error(_)) {
            return target;
        }
        let err = ParseError::InvalidAssignmentTarget {
            span: target.span(),
        };
        self.report_parse_error(DiagnosticKind::RecoverableParseError, &err);
        Expression::Error(self.error_node(target.span()))
    }

    fn parse_prefix(&mut self) -> ParseResult<Expression> {
        let token = self.current;
        let Some(info) = self.table.prefix(token.kind) else {
            return self.parse_primary();
        };
        if info.fixity != Fixity::Prefix {
            return self.parse_primary();
        }

        self.advance();
        let start = token.span.start;
        let operand_precedence = info.precedence.tighter();

        let unary = |operator, argument: Expression| {
            let span = Span::new(start, argument.span().end);
            Expression::UnaryExpression {
                operator,
                argument: Box::new(argument),
                span,
            }
        };

        let argument = self.parse_expression_bp(operand_precedence)?;
        let span = Span::new(start, argument.span().end);
        let expression = match token.kind {
            TokenKind::Keyword(Keyword::New) => Expression::NewExpression {
                callee: Box::new(argument),
                span,
            },
            TokenKind::Keyword(Keyword::Await) => Expression::AwaitExpression {
                argument: Box::new(argument),
                span,
            },
            TokenKind::Keyword(Keyword::Delete) => {
                let argument = if matches!(
                    argument,
                    Expression::MemberExpression { .. }
                        | Expression::SubscriptExpression { .. }
                        | Expression::Error(_)
                ) {
                    argument
                } else {
                    let err = ParseError::InvalidDeleteTarget {
                        span: argument.span(),
                    };
                    self.report_parse_error(DiagnosticKind::RecoverableParseError, &err);
                    Expression::Error(self.error_node(argument.span()))
                };
                unary(UnaryOperator::Delete, argument)
            }
            TokenKind::Keyword(Keyword::Typeof) => unary(UnaryOperator::Typeof, argument),
            TokenKind::Keyword(Keyword::Void) => unary(UnaryOperator::Void, argument),
            TokenKind::Punctuator(Punctuator::Not) => unary(UnaryOperator::Not, argument),
            TokenKind::Punctuator(Punctuator::Tilde) => unary(UnaryOperator::BitwiseNot, argument),
            TokenKind::Punctuator(Punctuator::Minus) => unary(UnaryOperator::Minus, argument),
            TokenKind::Punctuator(Punctuator::Plus) => unary(UnaryOperator::Plus, argument),
            TokenKind::Punctuator(p @ (Punctuator::PlusPlus | Punctuator::MinusMinus)) => {
                Expression::UpdateExpression {
                    operator: if p == Punctuator::PlusPlus {
                        UpdateOperator::Increment
                    } else {
                        UpdateOperator::Decrement
                    },
                    prefix: true,
                    argument: Box::new(argument),
                    span,
                }
            }
            _ => return Err(unexpected_token("expression", &token)),
        };
        Ok(expression)
    }

    fn parse_primary(&mut self) -> ParseResult<Expression> {
        let token = self.current;
        match token.kind {
            TokenKind::Identifier => {
                if token.text == "async" {
                    if let Some(expression) = self.parse_async_prefixed()? {
                        return Ok(expression);
                    }
                }
                if self.peek().is_punctuator(Punctuator::Arrow) {
                    let param = self.expect_identifier()?;
                    return self.parse_arrow_rest(false, vec![param], token.span.start);
                }
                Ok(Expression::Identifier(self.expect_identifier()?))
            }
            TokenKind::Number => Ok(Expression::Literal(self.literal(LiteralKind::Number))),
            TokenKind::String => Ok(Expression::Literal(self.literal(LiteralKind::String))),
            TokenKind::TemplateString => Ok(Expression::Literal(self.literal(LiteralKind::Template))),
            TokenKind::Regex => Ok(Expression::Literal(self.regex_literal())),
            TokenKind::Punctuator(Punctuator::Slash | Punctuator::SlashEq) => {
                self.rescan_current_as_regex();
                Ok(Expression::Literal(self.regex_literal()))
            }
            TokenKind::Punctuator(Punctuator::LParen) => self.parse_paren_or_arrow(),
            TokenKind::Punctuator(Punctuator::LBracket) => self.parse_array(),
            TokenKind::Punctuator(Punctuator::LBrace) => self.parse_object(),
            TokenKind::Keyword(keyword) => match keyword {
                Keyword::This => {
                    self.advance();
                    Ok(Expression::ThisExpression { span: token.span })
                }
                Keyword::Super => {
                    self.advance();
                    let next = self.current;
                    if next.is_punctuator(Punctuator::LParen)
                        || next.is_punctuator(Punctuator::Dot)
                        || next.is_punctuator(Punctuator::LBracket)
                    {
                        Ok(Expression::SuperExpression { span: token.span })
                    } else {
                        Err(unexpected_token("'(' or '.' after 'super'", &next))
                    }
                }
                Keyword::True => Ok(Expression::Literal(self.literal(LiteralKind::Boolean(true)))),
                Keyword::False => Ok(Expression::Literal(self.literal(LiteralKind::Boolean(false)))),
                Keyword::Null => Ok(Expression::Literal(self.literal(LiteralKind::Null))),
                Keyword::Undefined => Ok(Expression::Literal(self.literal(LiteralKind::Undefined))),
                Keyword::Function => self.parse_function(false, token.span.start),
                Keyword::Class => Ok(Expression::ClassExpression(self.parse_class(false)?)),
                _ => Err(unexpected_token("expression", &token)),
            },
            _ => Err(unexpected_token("expression", &token)),
        }
    }

    /// `async function`, `async x =>` and `async (a, b) =>`. Returns `None`
    /// when `async` is a plain identifier.
    fn parse_async_prefixed(&mut self) -> ParseResult<Option<Expression>> {
        let start = self.current.span.start;
        let next = self.peek();
        if next.is_keyword(Keyword::Function) {
            self.advance();
            return self.parse_function(true, start).map(Some);
        }
        if next.kind == TokenKind::Identifier && self.peek_nth(1).is_punctuator(Punctuator::Arrow) {
            self.advance();
            let param = self.expect_identifier()?;
            return self.parse_arrow_rest(true, vec![param], start).map(Some);
        }
        if next.is_punctuator(Punctuator::LParen) && self.arrow_params_follow(1) {
            self.advance();
            let params = self.parse_params()?;
            return self.parse_arrow_rest(true, params, start).map(Some);
        }
        Ok(None)
    }

    /// True if the tokens starting `offset` significant tokens after the
    /// current one have the shape `( [ident {, ident}] ) =>`. Scans ahead
    /// with a single copy of the lexer.
    fn arrow_params_follow(&self, offset: usize) -> bool {
        let mut lexer = self.lexer.clone();
        let mut tokens = std::iter::once(self.current)
            .chain(std::iter::from_fn(move || Some(lexer.next_token())))
            .filter(|token| !token.kind.is_extra())
            .skip(offset);
        let mut next = move || tokens.next().map_or(TokenKind::EOF, |token| token.kind);
        let punct = TokenKind::Punctuator;

        if next() != punct(Punctuator::LParen) {
            return false;
        }
        let mut token = next();
        if token == punct(Punctuator::RParen) {
            return next() == punct(Punctuator::Arrow);
        }
        loop {
            if token != TokenKind::Identifier {
                return false;
            }
            match next() {
                TokenKind::Punctuator(Punctuator::Comma) => token = next(),
                TokenKind::Punctuator(Punctuator::RParen) => return next() == punct(Punctuator::Arrow),
                _ => return false,
            }
        }
    }

    fn parse_paren_or_arrow(&mut self) -> ParseResult<Expression> {
        let start = self.current.span.start;
        if self.arrow_params_follow(0) {
            let params = self.parse_params()?;
            return self.parse_arrow_rest(false, params, start);
        }

        self.expect_punctuator(Punctuator::LParen)?;
        let expression = self.nested(|p| {
            p.tolerant(
                TolerantPoint::Parenthesized,
                |p| p.parse_expression_before(Punctuator::RParen),
                Expression::Error,
            )
        })?;
        self.expect_punctuator(Punctuator::RParen)?;
        Ok(Expression::ParenthesizedExpression {
            expression: Box::new(expression),
            span: self.finish(start),
        })
    }

    /// `=> body` after the parameters of an arrow function
    fn parse_arrow_rest(
        &mut self,
        is_async: bool,
        params: Vec<Identifier>,
        start: usize,
    ) -> ParseResult<Expression> {
        self.expect_punctuator(Punctuator::Arrow)?;
        let body = if self.check_punctuator(Punctuator::LBrace) {
            ArrowBody::Block(self.parse_block()?)
        } else {
            ArrowBody::Expression(Box::new(self.parse_assignment()?))
        };
        Ok(Expression::ArrowFunctionExpression {
            is_async,
            params,
            body,
            span: self.finish(start),
        })
    }

    /// `( [ident {, ident}] )`
    pub(crate) fn parse_params(&mut self) -> ParseResult<Vec<Identifier>> {
        self.expect_punctuator(Punctuator::LParen)?;
        self.nested(|p| {
            let mut params = Vec::new();
            if !p.check_punctuator(Punctuator::RParen) {
                loop {
                    params.push(p.expect_identifier()?);
                    if !p.eat_punctuator(Punctuator::Comma) {
                        break;
                    }
                }
            }
            p.expect_punctuator(Punctuator::RParen)?;
            Ok(params)
        })
    }

    /// `function [*] [name] (params) { body }`; `start` includes a
    /// consumed `async`
    pub(crate) fn parse_function(&mut self, is_async: bool, start: usize) -> ParseResult<Expression> {
        self.expect_keyword(Keyword::Function)?;
        let generator = self.eat_punctuator(Punctuator::Star);
        let id = if self.current.kind == TokenKind::Identifier {
            Some(self.expect_identifier()?)
        } else {
            None
        };
        let params = self.parse_params()?;
        let body = self.parse_block()?;
        let function = Function {
            id,
            params,
            body,
            is_async,
            span: self.finish(start),
        };
        Ok(if generator {
            Expression::GeneratorFunctionExpression(function)
        } else {
            Expression::FunctionExpression(function)
        })
    }

    /// `class [name] [extends expr] { methods }`. The name may be omitted
    /// only where `anonymous` allows it.
    pub(crate) fn parse_class(&mut self, anonymous: bool) -> ParseResult<Class> {
        let start = self.expect_keyword(Keyword::Class)?.span.start;
        let id = if anonymous && self.current.kind != TokenKind::Identifier {
            None
        } else {
            Some(self.expect_identifier()?)
        };
        let super_class = if self.check_keyword(Keyword::Extends) {
            self.advance();
            Some(Box::new(self.parse_expression_bp(Precedence::CALL)?))
        } else {
            None
        };

        self.expect_punctuator(Punctuator::LBrace)?;
        let body = self.nested(|p| {
            let mut methods = Vec::new();
            while !p.check_punctuator(Punctuator::RBrace) && !p.at_eof() {
                let member_start = p.current.span.start;
                let is_static = p.check_word("static") && !p.peek().is_punctuator(Punctuator::LParen);
                if is_static {
                    p.advance();
                }
                methods.push(p.parse_method(is_static, member_start)?);
                p.eat_punctuator(Punctuator::Semicolon);
            }
            Ok(methods)
        })?;
        self.expect_punctuator(Punctuator::RBrace)?;

        Ok(Class {
            id,
            super_class,
            body,
            span: self.finish(start),
        })
    }

    /// `[async] [get|set|*] name (params) { body }`
    fn parse_method(&mut self, is_static: bool, start: usize) -> ParseResult<MethodDefinition> {
        let modifier_applies = |p: &Self| !p.peek().is_punctuator(Punctuator::LParen);

        let is_async = self.check_word("async") && modifier_applies(self);
        if is_async {
            self.advance();
        }
        let kind = if self.eat_punctuator(Punctuator::Star) {
            MethodKind::Generator
        } else if self.check_word("get") && modifier_applies(self) {
            self.advance();
            MethodKind::Get
        } else if self.check_word("set") && modifier_applies(self) {
            self.advance();
            MethodKind::Set
        } else {
            MethodKind::Method
        };

        let key = match self.current.kind {
            TokenKind::Identifier | TokenKind::Keyword(_) => self.expect_identifier_name()?,
            _ => return Err(unexpected_token("method name", &self.current)),
        };
        let params = self.parse_params()?;
        let body = self.parse_block()?;
        Ok(MethodDefinition {
            is_static,
            is_async,
            kind,
            key,
            params,
            body,
            span: self.finish(start),
        })
    }

    fn parse_array(&mut self) -> ParseResult<Expression> {
        let start = self.expect_punctuator(Punctuator::LBracket)?.span.start;
        let elements = self.nested(|p| {
            let mut elements = Vec::new();
            while !p.check_punctuator(Punctuator::RBracket) {
                let element = p.tolerant(
                    TolerantPoint::ListElement,
                    |p| p.parse_assignment(),
                    Expression::Error,
                )?;
                let recovered = matches!(element, Expression::Error(_));
                elements.push(element);
                if p.eat_punctuator(Punctuator::Comma) || p.check_punctuator(Punctuator::RBracket) {
                    continue;
                }
                if !recovered {
                    let skipped =
                        p.missing_separator(TolerantPoint::ListElement, "',' or ']'", Expression::Error)?;
                    elements.push(skipped);
                }
                p.eat_punctuator(Punctuator::Comma);
            }
            Ok(elements)
        })?;
        self.expect_punctuator(Punctuator::RBracket)?;
        Ok(Expression::ArrayExpression {
            elements,
            span: self.finish(start),
        })
    }

    fn parse_object(&mut self) -> ParseResult<Expression> {
        let start = self.expect_punctuator(Punctuator::LBrace)?.span.start;
        let members = self.nested(|p| {
            let mut members = Vec::new();
            while !p.check_punctuator(Punctuator::RBrace) {
                let member = p.tolerant(
                    TolerantPoint::ListElement,
                    |p| p.parse_object_member(),
                    ObjectMember::Error,
                )?;
                let recovered = matches!(member, ObjectMember::Error(_));
                members.push(member);
                if p.eat_punctuator(Punctuator::Comma) || p.check_punctuator(Punctuator::RBrace) {
                    continue;
                }
                if !recovered {
                    let skipped =
                        p.missing_separator(TolerantPoint::ListElement, "',' or '}'", ObjectMember::Error)?;
                    members.push(skipped);
                }
                p.eat_punctuator(Punctuator::Comma);
            }
            Ok(members)
        })?;
        self.expect_punctuator(Punctuator::RBrace)?;
        Ok(Expression::ObjectExpression {
            members,
            span: self.finish(start),
        })
    }

    /// `key: value` or a method definition
    fn parse_object_member(&mut self) -> ParseResult<ObjectMember> {
        let start = self.current.span.start;
        let key = match self.current.kind {
            TokenKind::String => PropertyKey::String(self.literal(LiteralKind::String)),
            TokenKind::Number => PropertyKey::Number(self.literal(LiteralKind::Number)),
            TokenKind::Punctuator(Punctuator::Star) => {
                return Ok(ObjectMember::Method(self.parse_method(false, start)?));
            }
            TokenKind::Identifier | TokenKind::Keyword(_) => {
                if !self.peek().is_punctuator(Punctuator::Colon) {
                    return Ok(ObjectMember::Method(self.parse_method(false, start)?));
                }
                PropertyKey::Identifier(self.expect_identifier_name()?)
            }
            _ => return Err(unexpected_token("property name", &self.current)),
        };
        self.expect_punctuator(Punctuator::Colon)?;
        let value = self.parse_assignment()?;
        Ok(ObjectMember::Pair {
            key,
            span: Span::new(start, value.span().end),
            value,
        })
    }

    /// Consume the current token as a literal of `kind`
    fn literal(&mut self, kind: LiteralKind) -> Literal {
        let token = self.advance();
        Literal {
            kind,
            raw: token.text.to_string(),
            span: token.span,
        }
    }

    fn regex_literal(&mut self) -> Literal {
        let text = self.current.text;
        let body = text.strip_prefix('/').unwrap_or(text);
        let (pattern, flags) = match body.rfind('/') {
            Some(end) => (&body[..end], &body[end + 1..]),
            None => (body, ""),
        };
        let kind = LiteralKind::Regex {
            pattern: pattern.to_string(),
            flags: flags.to_string(),
        };
        self.literal(kind)
    }
}

fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Expression {
    let span = left.span().cover(right.span());
    Expression::BinaryExpression {
        operator,
        left: Box::new(left),
        right: Box::new(right),
        span,
    }
}

fn binary_operator(punct: Punctuator) -> Option<BinaryOperator> {
    let operator = match punct {
        Punctuator::AndAnd => BinaryOperator::And,
        Punctuator::OrOr => BinaryOperator::Or,
        Punctuator::Plus => BinaryOperator::Add,
        Punctuator::Minus => BinaryOperator::Sub,
        Punctuator::Star => BinaryOperator::Mul,
        Punctuator::Slash => BinaryOperator::Div,
        Punctuator::Percent => BinaryOperator::Mod,
        Punctuator::And => BinaryOperator::BitAnd,
        Punctuator::Or => BinaryOperator::BitOr,
        Punctuator::Xor => BinaryOperator::BitXor,
        Punctuator::LtLt => BinaryOperator::LeftShift,
        Punctuator::GtGt => BinaryOperator::RightShift,
        Punctuator::Lt => BinaryOperator::Lt,
        Punctuator::LtEq => BinaryOperator::LtEq,
        Punctuator::Gt => BinaryOperator::Gt,
        Punctuator::GtEq => BinaryOperator::GtEq,
        Punctuator::EqEq => BinaryOperator::Eq,
        Punctuator::EqEqEq => BinaryOperator::StrictEq,
        Punctuator::NotEq => BinaryOperator::NotEq,
        Punctuator::NotEqEq => BinaryOperator::StrictNotEq,
        _ => return None,
    };
    Some(operator)
}

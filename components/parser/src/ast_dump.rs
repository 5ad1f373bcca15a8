//! S-expression rendering of the AST.
//!
//! Used for golden-tree fixtures and debugging. Every node prints as
//! `(kind child child ...)` on one line; absent optional children of
//! `for` headers print as `_`. Spans are not printed.
//!
//! ```
//! let output = js_frontend::parse("x = a + 1;");
//! assert_eq!(
//!     js_frontend::ast_dump::dump_program(&output.program),
//!     "(program (expression_statement (assign (identifier x) (binary \"+\" (identifier a) (number 1)))))"
//! );
//! ```

use crate::ast::*;
use std::fmt::Write;

/// Render `program` as a single-line S-expression
pub fn dump_program(program: &Program) -> String {
    let mut dumper = Dumper::default();
    dumper.open("program");
    for statement in &program.body {
        dumper.statement(statement);
    }
    dumper.close();
    dumper.out
}

/// Render a single expression
pub fn dump_expression(expression: &Expression) -> String {
    let mut dumper = Dumper::default();
    dumper.expression(expression);
    dumper.out
}

#[derive(Default)]
struct Dumper {
    out: String,
}

impl Dumper {
    fn separate(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with('(') {
            self.out.push(' ');
        }
    }

    fn open(&mut self, name: &str) {
        self.separate();
        self.out.push('(');
        self.out.push_str(name);
    }

    fn close(&mut self) {
        self.out.push(')');
    }

    fn atom(&mut self, text: &str) {
        self.separate();
        self.out.push_str(text);
    }

    fn quoted(&mut self, text: &str) {
        self.separate();
        let _ = write!(self.out, "{:?}", text);
    }

    /// `(name)` with no children
    fn leaf(&mut self, name: &str) {
        self.open(name);
        self.close();
    }

    fn flag(&mut self, set: bool, name: &str) {
        if set {
            self.atom(name);
        }
    }

    fn identifier(&mut self, id: &Identifier) {
        self.open("identifier");
        self.atom(&id.name);
        self.close();
    }

    fn error(&mut self, error: &ErrorNode) {
        self.open("error");
        self.quoted(&error.text);
        self.close();
    }

    fn params(&mut self, params: &[Identifier]) {
        self.open("params");
        for param in params {
            self.atom(&param.name);
        }
        self.close();
    }

    fn block(&mut self, block: &Block) {
        self.open("block");
        for statement in &block.body {
            self.statement(statement);
        }
        self.close();
    }

    fn optional_expression(&mut self, expression: Option<&Expression>) {
        match expression {
            Some(expression) => self.expression(expression),
            None => self.atom("_"),
        }
    }

    fn statement(&mut self, statement: &Statement) {
        match statement {
            Statement::ExpressionStatement { expression, .. } => {
                self.open("expression_statement");
                self.expression(expression);
                self.close();
            }
            Statement::VarDeclaration(declaration) => self.var_declaration(declaration),
            Statement::IfStatement {
                test,
                consequent,
                alternate,
                ..
            } => {
                self.open("if");
                self.expression(test);
                self.statement(consequent);
                if let Some(alternate) = alternate {
                    self.statement(alternate);
                }
                self.close();
            }
            Statement::SwitchStatement {
                discriminant,
                cases,
                ..
            } => {
                self.open("switch");
                self.expression(discriminant);
                for case in cases {
                    match &case.test {
                        Some(test) => {
                            self.open("case");
                            self.expression(test);
                        }
                        None => self.open("default"),
                    }
                    for statement in &case.consequent {
                        self.statement(statement);
                    }
                    self.close();
                }
                self.close();
            }
            Statement::ForStatement {
                init,
                test,
                update,
                body,
                ..
            } => {
                self.open("for");
                match init {
                    Some(ForInit::Variable(declaration)) => self.var_declaration(declaration),
                    Some(ForInit::Expression(expression)) => self.expression(expression),
                    None => self.atom("_"),
                }
                self.optional_expression(test.as_ref());
                self.optional_expression(update.as_ref());
                self.statement(body);
                self.close();
            }
            Statement::ForInStatement {
                kind,
                left,
                right,
                body,
                ..
            }
            | Statement::ForOfStatement {
                kind,
                left,
                right,
                body,
                ..
            } => {
                let name = if matches!(statement, Statement::ForInStatement { .. }) {
                    "for_in"
                } else {
                    "for_of"
                };
                self.open(name);
                if let Some(kind) = kind {
                    self.atom(kind.as_str());
                }
                self.expression(left);
                self.expression(right);
                self.statement(body);
                self.close();
            }
            Statement::WhileStatement { test, body, .. } => {
                self.open("while");
                self.expression(test);
                self.statement(body);
                self.close();
            }
            Statement::DoStatement { body, test, .. } => {
                self.open("do");
                self.block(body);
                self.expression(test);
                self.close();
            }
            Statement::TryStatement {
                block,
                handler,
                finalizer,
                ..
            } => {
                self.open("try");
                self.block(block);
                if let Some(handler) = handler {
                    self.open("catch");
                    if let Some(param) = &handler.param {
                        self.identifier(param);
                    }
                    self.block(&handler.body);
                    self.close();
                }
                if let Some(finalizer) = finalizer {
                    self.open("finally");
                    self.block(finalizer);
                    self.close();
                }
                self.close();
            }
            Statement::BreakStatement { .. } => self.leaf("break"),
            Statement::ContinueStatement { .. } => self.leaf("continue"),
            Statement::ReturnStatement { argument, .. } | Statement::YieldStatement { argument, .. } => {
                let name = if matches!(statement, Statement::ReturnStatement { .. }) {
                    "return"
                } else {
                    "yield"
                };
                self.open(name);
                if let Some(argument) = argument {
                    self.expression(argument);
                }
                self.close();
            }
            Statement::ThrowStatement { argument, .. } => {
                self.open("throw");
                self.expression(argument);
                self.close();
            }
            Statement::EmptyStatement { .. } => self.leaf("empty"),
            Statement::Block(block) => self.block(block),
            Statement::ImportStatement { clause, source, .. } => {
                self.open("import");
                if let Some(clause) = clause {
                    if let Some(default) = &clause.default {
                        self.identifier(default);
                    }
                    if let Some(namespace) = &clause.namespace {
                        self.open("namespace");
                        self.atom(&namespace.name);
                        self.close();
                    }
                    if let Some(named) = &clause.named {
                        self.open("named");
                        for specifier in named {
                            self.open("specifier");
                            self.atom(&specifier.imported.name);
                            if let Some(local) = &specifier.local {
                                self.atom(&local.name);
                            }
                            self.close();
                        }
                        self.close();
                    }
                }
                self.literal(source);
                self.close();
            }
            Statement::ExportStatement { export, .. } => {
                self.open("export");
                match export {
                    Export::All { source } => {
                        self.atom("*");
                        self.literal(source);
                    }
                    Export::Named { specifiers, source } => {
                        self.open("named");
                        for specifier in specifiers {
                            self.open("specifier");
                            self.atom(&specifier.local.name);
                            if let Some(exported) = &specifier.exported {
                                self.atom(&exported.name);
                            }
                            self.close();
                        }
                        self.close();
                        if let Some(source) = source {
                            self.literal(source);
                        }
                    }
                    Export::Declaration(expression) => self.expression(expression),
                    Export::Variable(declaration) => self.var_declaration(declaration),
                    Export::Default(expression) => {
                        self.atom("default");
                        self.expression(expression);
                    }
                }
                self.close();
            }
            Statement::Error(error) => self.error(error),
        }
    }

    fn var_declaration(&mut self, declaration: &VariableDeclaration) {
        self.open("var_declaration");
        self.atom(declaration.kind.as_str());
        for declarator in &declaration.declarations {
            match declarator {
                VariableDeclarator::Binding { id, init, .. } => {
                    self.open("binding");
                    self.identifier(id);
                    if let Some(init) = init {
                        self.expression(init);
                    }
                    self.close();
                }
                VariableDeclarator::Error(error) => self.error(error),
            }
        }
        self.close();
    }

    fn literal(&mut self, literal: &Literal) {
        match &literal.kind {
            LiteralKind::Number => {
                self.open("number");
                self.atom(&literal.raw);
            }
            LiteralKind::String => {
                self.open("string");
                self.atom(&literal.raw);
            }
            LiteralKind::Template => {
                self.open("template");
                self.atom(&literal.raw);
            }
            LiteralKind::Regex { pattern, flags } => {
                self.open("regex");
                self.quoted(pattern);
                self.quoted(flags);
            }
            LiteralKind::Boolean(value) => {
                self.open("boolean");
                self.atom(if *value { "true" } else { "false" });
            }
            LiteralKind::Null => self.open("null"),
            LiteralKind::Undefined => self.open("undefined"),
        }
        self.close();
    }

    fn function(&mut self, name: &str, function: &Function) {
        self.open(name);
        self.flag(function.is_async, "async");
        if let Some(id) = &function.id {
            self.atom(&id.name);
        }
        self.params(&function.params);
        self.block(&function.body);
        self.close();
    }

    fn method(&mut self, method: &MethodDefinition) {
        self.open("method");
        self.flag(method.is_static, "static");
        self.flag(method.is_async, "async");
        match method.kind {
            MethodKind::Method => {}
            MethodKind::Get => self.atom("get"),
            MethodKind::Set => self.atom("set"),
            MethodKind::Generator => self.atom("*"),
        }
        self.atom(&method.key.name);
        self.params(&method.params);
        self.block(&method.body);
        self.close();
    }

    fn expression(&mut self, expression: &Expression) {
        match expression {
            Expression::Identifier(id) => self.identifier(id),
            Expression::Literal(literal) => self.literal(literal),
            Expression::ThisExpression { .. } => self.leaf("this"),
            Expression::SuperExpression { .. } => self.leaf("super"),
            Expression::ObjectExpression { members, .. } => {
                self.open("object");
                for member in members {
                    match member {
                        ObjectMember::Pair { key, value, .. } => {
                            self.open("pair");
                            match key {
                                PropertyKey::Identifier(id) => self.identifier(id),
                                PropertyKey::String(literal) | PropertyKey::Number(literal) => {
                                    self.literal(literal)
                                }
                            }
                            self.expression(value);
                            self.close();
                        }
                        ObjectMember::Method(method) => self.method(method),
                        ObjectMember::Error(error) => self.error(error),
                    }
                }
                self.close();
            }
            Expression::ArrayExpression { elements, .. } => {
                self.open("array");
                for element in elements {
                    self.expression(element);
                }
                self.close();
            }
            Expression::FunctionExpression(function) => self.function("function", function),
            Expression::GeneratorFunctionExpression(function) => self.function("generator", function),
            Expression::ArrowFunctionExpression {
                is_async,
                params,
                body,
                ..
            } => {
                self.open("arrow");
                self.flag(*is_async, "async");
                self.params(params);
                match body {
                    ArrowBody::Expression(expression) => self.expression(expression),
                    ArrowBody::Block(block) => self.block(block),
                }
                self.close();
            }
            Expression::ClassExpression(class) => {
                self.open("class");
                if let Some(id) = &class.id {
                    self.atom(&id.name);
                }
                if let Some(super_class) = &class.super_class {
                    self.open("extends");
                    self.expression(super_class);
                    self.close();
                }
                for method in &class.body {
                    self.method(method);
                }
                self.close();
            }
            Expression::CallExpression {
                callee, arguments, ..
            } => {
                self.open("call");
                self.expression(callee);
                for argument in arguments {
                    self.expression(argument);
                }
                self.close();
            }
            Expression::NewExpression { callee, .. } => {
                self.open("new");
                self.expression(callee);
                self.close();
            }
            Expression::AwaitExpression { argument, .. } => {
                self.open("await");
                self.expression(argument);
                self.close();
            }
            Expression::MemberExpression {
                object, property, ..
            } => {
                self.open("member");
                self.expression(object);
                self.atom(&property.name);
                self.close();
            }
            Expression::SubscriptExpression { object, index, .. } => {
                self.open("subscript");
                self.expression(object);
                self.expression(index);
                self.close();
            }
            Expression::AssignmentExpression { target, value, .. } => {
                self.open("assign");
                self.expression(target);
                self.expression(value);
                self.close();
            }
            Expression::CompoundAssignmentExpression {
                operator,
                target,
                value,
                ..
            } => {
                self.open("assign");
                self.quoted(operator.as_str());
                self.expression(target);
                self.expression(value);
                self.close();
            }
            Expression::ConditionalExpression {
                test,
                consequent,
                alternate,
                ..
            } => {
                self.open("conditional");
                self.expression(test);
                self.expression(consequent);
                self.expression(alternate);
                self.close();
            }
            Expression::BinaryExpression {
                operator,
                left,
                right,
                ..
            } => {
                self.open("binary");
                self.quoted(operator.as_str());
                self.expression(left);
                self.expression(right);
                self.close();
            }
            Expression::UnaryExpression {
                operator, argument, ..
            } => {
                self.open("unary");
                self.quoted(operator.as_str());
                self.expression(argument);
                self.close();
            }
            Expression::UpdateExpression {
                operator,
                prefix,
                argument,
                ..
            } => {
                self.open("update");
                self.quoted(operator.as_str());
                self.atom(if *prefix { "prefix" } else { "postfix" });
                self.expression(argument);
                self.close();
            }
            Expression::SequenceExpression { left, right, .. } => {
                self.open("sequence");
                self.expression(left);
                self.expression(right);
                self.close();
            }
            Expression::ParenthesizedExpression { expression, .. } => {
                self.open("paren");
                self.expression(expression);
                self.close();
            }
            Expression::Error(error) => self.error(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn dump(source: &str) -> String {
        dump_program(&parse(source).program)
    }

    #[test]
    fn test_dump_empty_program() {
        assert_eq!(dump("  "), "(program)");
    }

    #[test]
    fn test_dump_nested_statements() {
        assert_eq!(
            dump("if (a) { return; } else b()"),
            "(program (if (identifier a) (block (return)) (expression_statement (call (identifier b)))))"
        );
    }

    #[test]
    fn test_dump_for_placeholders() {
        assert_eq!(dump("for (;;) ;"), "(program (for _ _ _ (empty)))");
    }

    #[test]
    fn test_dump_quotes_error_text() {
        assert_eq!(
            dump("f(a b)"),
            "(program (expression_statement (call (identifier f) (identifier a) (error \"b\"))))"
        );
    }
}

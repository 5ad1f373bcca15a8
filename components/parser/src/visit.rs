//! Read-only AST traversal
//!
//! Implement [`Visitor`] and override the hooks of interest; each default
//! method calls the matching `walk_*` function, which visits the node's
//! children in source order. An override that still wants the children
//! visited calls the `walk_*` function itself.
//!
//! ```
//! use js_frontend::ast::{BinaryOperator, Expression};
//! use js_frontend::visit::{walk_expression, Visitor};
//!
//! #[derive(Default)]
//! struct CountAdds(usize);
//!
//! impl<'ast> Visitor<'ast> for CountAdds {
//!     fn visit_expression(&mut self, expression: &'ast Expression) {
//!         if let Expression::BinaryExpression { operator: BinaryOperator::Add, .. } = expression {
//!             self.0 += 1;
//!         }
//!         walk_expression(self, expression);
//!     }
//! }
//!
//! let output = js_frontend::parse("a + b + f(c + 1);");
//! let mut counter = CountAdds::default();
//! counter.visit_program(&output.program);
//! assert_eq!(counter.0, 3);
//! ```

use crate::ast::*;

/// Hooks called while walking a tree
pub trait Visitor<'ast> {
    /// Called for every program
    fn visit_program(&mut self, program: &'ast Program) {
        walk_program(self, program);
    }

    /// Called for every statement
    fn visit_statement(&mut self, statement: &'ast Statement) {
        walk_statement(self, statement);
    }

    /// Called for every block
    fn visit_block(&mut self, block: &'ast Block) {
        walk_block(self, block);
    }

    /// Called for every variable declaration
    fn visit_var_declaration(&mut self, declaration: &'ast VariableDeclaration) {
        walk_var_declaration(self, declaration);
    }

    /// Called for every expression
    fn visit_expression(&mut self, expression: &'ast Expression) {
        walk_expression(self, expression);
    }

    /// Called for every function
    fn visit_function(&mut self, function: &'ast Function) {
        walk_function(self, function);
    }

    /// Called for every class
    fn visit_class(&mut self, class: &'ast Class) {
        walk_class(self, class);
    }

    /// Called for every method
    fn visit_method(&mut self, method: &'ast MethodDefinition) {
        walk_method(self, method);
    }

    /// Binding names, references and property names alike
    fn visit_identifier(&mut self, _identifier: &'ast Identifier) {}

    /// Called for every literal, including module sources
    fn visit_literal(&mut self, _literal: &'ast Literal) {}

    /// Source ranges the parser could not make sense of
    fn visit_error(&mut self, _error: &'ast ErrorNode) {}
}

/// Visit the children of a program
pub fn walk_program<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, program: &'ast Program) {
    for statement in &program.body {
        visitor.visit_statement(statement);
    }
}

/// Visit the children of a block
pub fn walk_block<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, block: &'ast Block) {
    for statement in &block.body {
        visitor.visit_statement(statement);
    }
}

/// Visit the children of a variable declaration
pub fn walk_var_declaration<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    declaration: &'ast VariableDeclaration,
) {
    for declarator in &declaration.declarations {
        match declarator {
            VariableDeclarator::Binding { id, init, .. } => {
                visitor.visit_identifier(id);
                if let Some(init) = init {
                    visitor.visit_expression(init);
                }
            }
            VariableDeclarator::Error(error) => visitor.visit_error(error),
        }
    }
}

/// Visit the children of a statement
pub fn walk_statement<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, statement: &'ast Statement) {
    match statement {
        Statement::ExpressionStatement { expression, .. } => visitor.visit_expression(expression),
        Statement::VarDeclaration(declaration) => visitor.visit_var_declaration(declaration),
        Statement::IfStatement {
            test,
            consequent,
            alternate,
            ..
        } => {
            visitor.visit_expression(test);
            visitor.visit_statement(consequent);
            if let Some(alternate) = alternate {
                visitor.visit_statement(alternate);
            }
        }
        Statement::SwitchStatement {
            discriminant,
            cases,
            ..
        } => {
            visitor.visit_expression(discriminant);
            for case in cases {
                if let Some(test) = &case.test {
                    visitor.visit_expression(test);
                }
                for statement in &case.consequent {
                    visitor.visit_statement(statement);
                }
            }
        }
        Statement::ForStatement {
            init,
            test,
            update,
            body,
            ..
        } => {
            match init {
                Some(ForInit::Variable(declaration)) => visitor.visit_var_declaration(declaration),
                Some(ForInit::Expression(expression)) => visitor.visit_expression(expression),
                None => {}
            }
            if let Some(test) = test {
                visitor.visit_expression(test);
            }
            if let Some(update) = update {
                visitor.visit_expression(update);
            }
            visitor.visit_statement(body);
        }
        Statement::ForInStatement {
            left, right, body, ..
        }
        | Statement::ForOfStatement {
            left, right, body, ..
        } => {
            visitor.visit_expression(left);
            visitor.visit_expression(right);
            visitor.visit_statement(body);
        }
        Statement::WhileStatement { test, body, .. } => {
            visitor.visit_expression(test);
            visitor.visit_statement(body);
        }
        Statement::DoStatement { body, test, .. } => {
            visitor.visit_block(body);
            visitor.visit_expression(test);
        }
        Statement::TryStatement {
            block,
            handler,
            finalizer,
            ..
        } => {
            visitor.visit_block(block);
            if let Some(handler) = handler {
                if let Some(param) = &handler.param {
                    visitor.visit_identifier(param);
                }
                visitor.visit_block(&handler.body);
            }
            if let Some(finalizer) = finalizer {
                visitor.visit_block(finalizer);
            }
        }
        Statement::ReturnStatement { argument, .. } | Statement::YieldStatement { argument, .. } => {
            if let Some(argument) = argument {
                visitor.visit_expression(argument);
            }
        }
        Statement::ThrowStatement { argument, .. } => visitor.visit_expression(argument),
        Statement::Block(block) => visitor.visit_block(block),
        Statement::ImportStatement { clause, source, .. } => {
            if let Some(clause) = clause {
                if let Some(default) = &clause.default {
                    visitor.visit_identifier(default);
                }
                if let Some(namespace) = &clause.namespace {
                    visitor.visit_identifier(namespace);
                }
                for specifier in clause.named.iter().flatten() {
                    visitor.visit_identifier(&specifier.imported);
                    if let Some(local) = &specifier.local {
                        visitor.visit_identifier(local);
                    }
                }
            }
            visitor.visit_literal(source);
        }
        Statement::ExportStatement { export, .. } => match export {
            Export::All { source } => visitor.visit_literal(source),
            Export::Named { specifiers, source } => {
                for specifier in specifiers {
                    visitor.visit_identifier(&specifier.local);
                    if let Some(exported) = &specifier.exported {
                        visitor.visit_identifier(exported);
                    }
                }
                if let Some(source) = source {
                    visitor.visit_literal(source);
                }
            }
            Export::Declaration(expression) | Export::Default(expression) => {
                visitor.visit_expression(expression)
            }
            Export::Variable(declaration) => visitor.visit_var_declaration(declaration),
        },
        Statement::Error(error) => visitor.visit_error(error),
        Statement::BreakStatement { .. }
        | Statement::ContinueStatement { .. }
        | Statement::EmptyStatement { .. } => {}
    }
}

/// Visit the children of a function
pub fn walk_function<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, function: &'ast Function) {
    if let Some(id) = &function.id {
        visitor.visit_identifier(id);
    }
    for param in &function.params {
        visitor.visit_identifier(param);
    }
    visitor.visit_block(&function.body);
}

/// Visit the children of a class
pub fn walk_class<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, class: &'ast Class) {
    if let Some(id) = &class.id {
        visitor.visit_identifier(id);
    }
    if let Some(super_class) = &class.super_class {
        visitor.visit_expression(super_class);
    }
    for method in &class.body {
        visitor.visit_method(method);
    }
}

/// Visit the children of a method
pub fn walk_method<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, method: &'ast MethodDefinition) {
    visitor.visit_identifier(&method.key);
    for param in &method.params {
        visitor.visit_identifier(param);
    }
    visitor.visit_block(&method.body);
}

/// Visit the children of an expression
pub fn walk_expression<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expression: &'ast Expression) {
    match expression {
        Expression::Identifier(id) => visitor.visit_identifier(id),
        Expression::Literal(literal) => visitor.visit_literal(literal),
        Expression::ThisExpression { .. } | Expression::SuperExpression { .. } => {}
        Expression::ObjectExpression { members, .. } => {
            for member in members {
                match member {
                    ObjectMember::Pair { key, value, .. } => {
                        match key {
                            PropertyKey::Identifier(id) => visitor.visit_identifier(id),
                            PropertyKey::String(literal) | PropertyKey::Number(literal) => {
                                visitor.visit_literal(literal)
                            }
                        }
                        visitor.visit_expression(value);
                    }
                    ObjectMember::Method(method) => visitor.visit_method(method),
                    ObjectMember::Error(error) => visitor.visit_error(error),
                }
            }
        }
        Expression::ArrayExpression { elements, .. } => {
            for element in elements {
                visitor.visit_expression(element);
            }
        }
        Expression::FunctionExpression(function) | Expression::GeneratorFunctionExpression(function) => {
            visitor.visit_function(function)
        }
        Expression::ArrowFunctionExpression { params, body, .. } => {
            for param in params {
                visitor.visit_identifier(param);
            }
            match body {
                ArrowBody::Expression(expression) => visitor.visit_expression(expression),
                ArrowBody::Block(block) => visitor.visit_block(block),
            }
        }
        Expression::ClassExpression(class) => visitor.visit_class(class),
        Expression::CallExpression {
            callee, arguments, ..
        } => {
            visitor.visit_expression(callee);
            for argument in arguments {
                visitor.visit_expression(argument);
            }
        }
        Expression::NewExpression { callee: inner, .. }
        | Expression::AwaitExpression { argument: inner, .. }
        | Expression::UnaryExpression { argument: inner, .. }
        | Expression::UpdateExpression { argument: inner, .. }
        | Expression::ParenthesizedExpression {
            expression: inner, ..
        } => visitor.visit_expression(inner),
        Expression::MemberExpression {
            object, property, ..
        } => {
            visitor.visit_expression(object);
            visitor.visit_identifier(property);
        }
        Expression::SubscriptExpression { object, index, .. } => {
            visitor.visit_expression(object);
            visitor.visit_expression(index);
        }
        Expression::AssignmentExpression { target, value, .. }
        | Expression::CompoundAssignmentExpression { target, value, .. } => {
            visitor.visit_expression(target);
            visitor.visit_expression(value);
        }
        Expression::ConditionalExpression {
            test,
            consequent,
            alternate,
            ..
        } => {
            visitor.visit_expression(test);
            visitor.visit_expression(consequent);
            visitor.visit_expression(alternate);
        }
        Expression::BinaryExpression { left, right, .. }
        | Expression::SequenceExpression { left, right, .. } => {
            visitor.visit_expression(left);
            visitor.visit_expression(right);
        }
        Expression::Error(error) => visitor.visit_error(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[derive(Default)]
    struct Names(Vec<String>);

    impl<'ast> Visitor<'ast> for Names {
        fn visit_identifier(&mut self, identifier: &'ast Identifier) {
            self.0.push(identifier.name.clone());
        }
    }

    #[derive(Default)]
    struct Errors(usize);

    impl<'ast> Visitor<'ast> for Errors {
        fn visit_error(&mut self, _error: &'ast ErrorNode) {
            self.0 += 1;
        }
    }

    #[test]
    fn test_identifiers_in_source_order() {
        let output = parse("let x = f(a.b, y => y);\nclass C { m(p) { return this } }");
        let mut names = Names::default();
        names.visit_program(&output.program);
        assert_eq!(names.0, ["x", "f", "a", "b", "y", "y", "C", "m", "p"]);
    }

    #[test]
    fn test_error_nodes_are_visited() {
        let output = parse("let a = ;\nf(1 2);\n}");
        let mut errors = Errors::default();
        errors.visit_program(&output.program);
        assert_eq!(errors.0, 3);
    }
}

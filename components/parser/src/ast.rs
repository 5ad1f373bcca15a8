//! Abstract Syntax Tree node definitions
//!
//! Every node owns its children and carries the byte [`Span`] it was parsed
//! from. Spans of composite expressions are the union of their children's.

use core_types::Span;
use serde::Serialize;

/// Root of a parsed source unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    /// Top-level statements in source order
    pub body: Vec<Statement>,
    /// Comment extras, in source order
    pub comments: Vec<Comment>,
    /// Whole input
    pub span: Span,
}

impl Program {
    /// An empty program over `span`
    pub fn empty(span: Span) -> Self {
        Self {
            body: Vec::new(),
            comments: Vec::new(),
            span,
        }
    }

    /// Byte ranges of `source` that are neither inside a top-level statement
    /// nor a comment nor whitespace. Empty for every parse with comment
    /// collection enabled: no token is silently dropped.
    pub fn uncovered_text(&self, source: &str) -> Vec<Span> {
        let mut covered: Vec<Span> = self
            .body
            .iter()
            .map(Statement::span)
            .chain(self.comments.iter().map(|c| c.span))
            .collect();
        covered.sort_by_key(|span| span.start);

        let mut uncovered = Vec::new();
        let mut cursor = 0;
        for span in covered.into_iter().chain(std::iter::once(Span::empty_at(source.len()))) {
            if span.start > cursor {
                let gap = Span::new(cursor, span.start);
                let text = gap.slice(source);
                let trimmed = text.trim_start();
                if !trimmed.trim_end().is_empty() {
                    let start = gap.start + (text.len() - trimmed.len());
                    let end = start + trimmed.trim_end().len();
                    uncovered.push(Span::new(start, end));
                }
            }
            cursor = cursor.max(span.end);
        }
        uncovered
    }
}

/// A comment extra
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    /// `//` or `/* */`
    pub kind: CommentKind,
    /// Raw text including delimiters
    pub text: String,
    /// Source range
    pub span: Span,
}

/// Comment style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
}

/// Tokens skipped during recovery
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorNode {
    /// Raw text of the skipped tokens
    pub text: String,
    /// Non-empty source range
    pub span: Span,
}

/// Identifier reference or binding
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifier {
    /// Name as written
    pub name: String,
    /// Source location
    pub span: Span,
}

/// JavaScript statements
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    /// Expression statement
    ExpressionStatement {
        /// The expression
        expression: Expression,
        /// Source location
        span: Span,
    },

    /// Variable declaration (var, let, const)
    VarDeclaration(VariableDeclaration),

    /// If statement
    IfStatement {
        /// Condition
        test: Expression,
        /// Consequent statement
        consequent: Box<Statement>,
        /// Alternate statement
        alternate: Option<Box<Statement>>,
        /// Source location
        span: Span,
    },

    /// Switch statement
    SwitchStatement {
        /// Expression being switched on
        discriminant: Expression,
        /// `case` and `default` clauses in source order
        cases: Vec<SwitchCase>,
        /// Source location
        span: Span,
    },

    /// C-style for loop
    ForStatement {
        /// Initialization
        init: Option<ForInit>,
        /// Condition
        test: Option<Expression>,
        /// Update expression
        update: Option<Expression>,
        /// Loop body
        body: Box<Statement>,
        /// Source location
        span: Span,
    },

    /// For...in loop
    ForInStatement {
        /// Declaration keyword before the loop variable
        kind: Option<VarKind>,
        /// Loop variable expression
        left: Expression,
        /// Object to iterate over
        right: Expression,
        /// Loop body
        body: Box<Statement>,
        /// Source location
        span: Span,
    },

    /// For...of loop
    ForOfStatement {
        /// Declaration keyword before the loop variable
        kind: Option<VarKind>,
        /// Loop variable expression
        left: Expression,
        /// Iterable
        right: Expression,
        /// Loop body
        body: Box<Statement>,
        /// Source location
        span: Span,
    },

    /// While loop
    WhileStatement {
        /// Loop condition
        test: Expression,
        /// Loop body
        body: Box<Statement>,
        /// Source location
        span: Span,
    },

    /// Do...while loop; the body is always a block
    DoStatement {
        /// Loop body
        body: Block,
        /// Loop condition
        test: Expression,
        /// Source location
        span: Span,
    },

    /// Try statement
    TryStatement {
        /// Protected block
        block: Block,
        /// Catch clause
        handler: Option<CatchClause>,
        /// Finally block
        finalizer: Option<Block>,
        /// Source location
        span: Span,
    },

    /// Break statement
    BreakStatement {
        /// Source location
        span: Span,
    },

    /// Continue statement
    ContinueStatement {
        /// Source location
        span: Span,
    },

    /// Return statement
    ReturnStatement {
        /// Return value
        argument: Option<Expression>,
        /// Source location
        span: Span,
    },

    /// Yield statement
    YieldStatement {
        /// Yielded value
        argument: Option<Expression>,
        /// Source location
        span: Span,
    },

    /// Throw statement
    ThrowStatement {
        /// Thrown value
        argument: Expression,
        /// Source location
        span: Span,
    },

    /// Empty statement (`;`)
    EmptyStatement {
        /// Source location
        span: Span,
    },

    /// Block statement
    Block(Block),

    /// Import statement
    ImportStatement {
        /// Bindings; `None` for a bare `import "module"`
        clause: Option<ImportClause>,
        /// Module specifier string
        source: Literal,
        /// Source location
        span: Span,
    },

    /// Export statement
    ExportStatement {
        /// What is exported
        export: Export,
        /// Source location
        span: Span,
    },

    /// Statement-level recovery
    Error(ErrorNode),
}

impl Statement {
    /// Source range of the statement
    pub fn span(&self) -> Span {
        match self {
            Statement::ExpressionStatement { span, .. }
            | Statement::IfStatement { span, .. }
            | Statement::SwitchStatement { span, .. }
            | Statement::ForStatement { span, .. }
            | Statement::ForInStatement { span, .. }
            | Statement::ForOfStatement { span, .. }
            | Statement::WhileStatement { span, .. }
            | Statement::DoStatement { span, .. }
            | Statement::TryStatement { span, .. }
            | Statement::BreakStatement { span }
            | Statement::ContinueStatement { span }
            | Statement::ReturnStatement { span, .. }
            | Statement::YieldStatement { span, .. }
            | Statement::ThrowStatement { span, .. }
            | Statement::EmptyStatement { span }
            | Statement::ImportStatement { span, .. }
            | Statement::ExportStatement { span, .. } => *span,
            Statement::VarDeclaration(decl) => decl.span,
            Statement::Block(block) => block.span,
            Statement::Error(error) => error.span,
        }
    }
}

/// `{ ... }` statement list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    /// Statements
    pub body: Vec<Statement>,
    /// Source location including braces
    pub span: Span,
}

/// Variable declaration kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VarKind {
    /// var
    Var,
    /// let
    Let,
    /// const
    Const,
}

impl VarKind {
    /// Keyword text
    pub fn as_str(self) -> &'static str {
        match self {
            VarKind::Var => "var",
            VarKind::Let => "let",
            VarKind::Const => "const",
        }
    }
}

/// `var`/`let`/`const` with one or more bindings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDeclaration {
    /// Declaration kind
    pub kind: VarKind,
    /// Bindings
    pub declarations: Vec<VariableDeclarator>,
    /// Source location
    pub span: Span,
}

/// A single binding in a variable declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum VariableDeclarator {
    /// `name` or `name = init`
    Binding {
        /// Bound name
        id: Identifier,
        /// Initializer
        init: Option<Expression>,
        /// Source location
        span: Span,
    },
    /// Malformed binding
    Error(ErrorNode),
}

impl VariableDeclarator {
    /// Source range of the binding
    pub fn span(&self) -> Span {
        match self {
            VariableDeclarator::Binding { span, .. } => *span,
            VariableDeclarator::Error(error) => error.span,
        }
    }
}

/// `case test:` or `default:` clause
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwitchCase {
    /// `None` for `default`
    pub test: Option<Expression>,
    /// Statements up to the next clause
    pub consequent: Vec<Statement>,
    /// Source location
    pub span: Span,
}

/// Initializer of a C-style for loop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ForInit {
    /// `for (let i = 0; ...)`
    Variable(VariableDeclaration),
    /// `for (i = 0, j = 1; ...)`
    Expression(Expression),
}

/// `catch (param) { ... }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatchClause {
    /// Caught value binding, may be omitted
    pub param: Option<Identifier>,
    /// Handler body
    pub body: Block,
    /// Source location
    pub span: Span,
}

/// Bindings of an import statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportClause {
    /// `import name from ...`
    pub default: Option<Identifier>,
    /// `import * as name from ...`
    pub namespace: Option<Identifier>,
    /// `import { a, b as c } from ...`
    pub named: Option<Vec<ImportSpecifier>>,
    /// Source location
    pub span: Span,
}

/// `name` or `name as local` inside `import { }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportSpecifier {
    /// Exported name in the source module
    pub imported: Identifier,
    /// Local alias
    pub local: Option<Identifier>,
    /// Source location
    pub span: Span,
}

/// `name` or `name as exported` inside `export { }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSpecifier {
    /// Local name
    pub local: Identifier,
    /// Exported alias
    pub exported: Option<Identifier>,
    /// Source location
    pub span: Span,
}

/// Forms of the export statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Export {
    /// `export * from "m"`
    All {
        /// Module specifier
        source: Literal,
    },
    /// `export { a, b as c }` with an optional `from "m"`
    Named {
        /// Specifiers
        specifiers: Vec<ExportSpecifier>,
        /// Re-export source
        source: Option<Literal>,
    },
    /// `export function ...`, `export function* ...`, `export class ...`
    Declaration(Expression),
    /// `export let ...`
    Variable(VariableDeclaration),
    /// `export default <expression>` or `export default class { }`
    Default(Expression),
}

/// Literal value kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LiteralKind {
    /// Number literal, decimal or hexadecimal
    Number,
    /// Quoted string, escapes not decoded
    String,
    /// Back-tick template, raw
    Template,
    /// Regular expression literal
    Regex {
        /// Text between the slashes
        pattern: String,
        /// Trailing flags
        flags: String,
    },
    /// true or false
    Boolean(bool),
    /// null
    Null,
    /// undefined
    Undefined,
}

/// Literal with its raw text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Literal {
    /// Kind
    pub kind: LiteralKind,
    /// Raw source text
    pub raw: String,
    /// Source location
    pub span: Span,
}

/// Shared shape of function and generator expressions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Function {
    /// Optional name
    pub id: Option<Identifier>,
    /// Parameter names
    pub params: Vec<Identifier>,
    /// Body
    pub body: Block,
    /// Declared `async`
    pub is_async: bool,
    /// Source location
    pub span: Span,
}

/// Class expression or declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Class {
    /// Class name; only anonymous under `export default`
    pub id: Option<Identifier>,
    /// `extends` clause
    pub super_class: Option<Box<Expression>>,
    /// Methods in source order
    pub body: Vec<MethodDefinition>,
    /// Source location
    pub span: Span,
}

/// Method flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MethodKind {
    /// Plain method
    Method,
    /// `get name()`
    Get,
    /// `set name(v)`
    Set,
    /// `*name()`
    Generator,
}

/// Method in a class body or object literal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodDefinition {
    /// `static` prefix (class bodies only)
    pub is_static: bool,
    /// `async` prefix
    pub is_async: bool,
    /// Getter, setter, generator or plain
    pub kind: MethodKind,
    /// Method name
    pub key: Identifier,
    /// Parameter names
    pub params: Vec<Identifier>,
    /// Body
    pub body: Block,
    /// Source location
    pub span: Span,
}

/// Key of an object literal pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PropertyKey {
    /// Identifier or reserved word
    Identifier(Identifier),
    /// String literal
    String(Literal),
    /// Number literal
    Number(Literal),
}

impl PropertyKey {
    /// Source range of the key
    pub fn span(&self) -> Span {
        match self {
            PropertyKey::Identifier(id) => id.span,
            PropertyKey::String(lit) | PropertyKey::Number(lit) => lit.span,
        }
    }
}

/// Element of an object literal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ObjectMember {
    /// `key: value`
    Pair {
        /// Key
        key: PropertyKey,
        /// Value
        value: Expression,
        /// Source location
        span: Span,
    },
    /// `name() { }`, `get name() { }`, ...
    Method(MethodDefinition),
    /// Malformed member
    Error(ErrorNode),
}

impl ObjectMember {
    /// Source range of the member
    pub fn span(&self) -> Span {
        match self {
            ObjectMember::Pair { span, .. } => *span,
            ObjectMember::Method(method) => method.span,
            ObjectMember::Error(error) => error.span,
        }
    }
}

/// Body of an arrow function
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ArrowBody {
    /// `x => x + 1`
    Expression(Box<Expression>),
    /// `x => { ... }`
    Block(Block),
}

/// Category of a binary operator, as tools group them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryCategory {
    /// `&&`, `||`
    Boolean,
    /// `+ - * / %`
    Math,
    /// `& | ^ << >>`
    Bitwise,
    /// Comparisons and equality
    Relational,
    /// `instanceof`, `in`
    Type,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    /// `&&`
    And,
    /// `||`
    Or,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `<<`
    LeftShift,
    /// `>>`
    RightShift,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `==`
    Eq,
    /// `===`
    StrictEq,
    /// `!=`
    NotEq,
    /// `!==`
    StrictNotEq,
    /// `instanceof`
    Instanceof,
    /// `in`
    In,
}

impl BinaryOperator {
    /// Operator text
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitXor => "^",
            BinaryOperator::LeftShift => "<<",
            BinaryOperator::RightShift => ">>",
            BinaryOperator::Lt => "<",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::GtEq => ">=",
            BinaryOperator::Eq => "==",
            BinaryOperator::StrictEq => "===",
            BinaryOperator::NotEq => "!=",
            BinaryOperator::StrictNotEq => "!==",
            BinaryOperator::Instanceof => "instanceof",
            BinaryOperator::In => "in",
        }
    }

    /// Operator family
    pub fn category(self) -> BinaryCategory {
        match self {
            BinaryOperator::And | BinaryOperator::Or => BinaryCategory::Boolean,
            BinaryOperator::Add
            | BinaryOperator::Sub
            | BinaryOperator::Mul
            | BinaryOperator::Div
            | BinaryOperator::Mod => BinaryCategory::Math,
            BinaryOperator::BitAnd
            | BinaryOperator::BitOr
            | BinaryOperator::BitXor
            | BinaryOperator::LeftShift
            | BinaryOperator::RightShift => BinaryCategory::Bitwise,
            BinaryOperator::Instanceof | BinaryOperator::In => BinaryCategory::Type,
            _ => BinaryCategory::Relational,
        }
    }
}

/// Unary prefix operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOperator {
    /// `!`
    Not,
    /// `~`
    BitwiseNot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `delete`
    Delete,
    /// `void`
    Void,
    /// `typeof`
    Typeof,
}

impl UnaryOperator {
    /// Operator text
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOperator::Not => "!",
            UnaryOperator::BitwiseNot => "~",
            UnaryOperator::Minus => "-",
            UnaryOperator::Plus => "+",
            UnaryOperator::Delete => "delete",
            UnaryOperator::Void => "void",
            UnaryOperator::Typeof => "typeof",
        }
    }
}

/// `++` or `--`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UpdateOperator {
    /// `++`
    Increment,
    /// `--`
    Decrement,
}

impl UpdateOperator {
    /// Operator text
    pub fn as_str(self) -> &'static str {
        match self {
            UpdateOperator::Increment => "++",
            UpdateOperator::Decrement => "--",
        }
    }
}

/// Compound assignment operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CompoundOperator {
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
}

impl CompoundOperator {
    /// Operator text
    pub fn as_str(self) -> &'static str {
        match self {
            CompoundOperator::AddAssign => "+=",
            CompoundOperator::SubAssign => "-=",
            CompoundOperator::MulAssign => "*=",
            CompoundOperator::DivAssign => "/=",
        }
    }
}

/// JavaScript expressions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression {
    /// Identifier reference
    Identifier(Identifier),

    /// Literal value
    Literal(Literal),

    /// This expression
    ThisExpression {
        /// Source location
        span: Span,
    },

    /// Super reference (called or accessed)
    SuperExpression {
        /// Source location
        span: Span,
    },

    /// Object literal
    ObjectExpression {
        /// Pairs and methods
        members: Vec<ObjectMember>,
        /// Source location
        span: Span,
    },

    /// Array literal
    ArrayExpression {
        /// Elements
        elements: Vec<Expression>,
        /// Source location
        span: Span,
    },

    /// Function expression
    FunctionExpression(Function),

    /// Arrow function
    ArrowFunctionExpression {
        /// `async` prefix
        is_async: bool,
        /// Parameter names
        params: Vec<Identifier>,
        /// Body
        body: ArrowBody,
        /// Source location
        span: Span,
    },

    /// `function*` expression
    GeneratorFunctionExpression(Function),

    /// Class expression
    ClassExpression(Class),

    /// Function call
    CallExpression {
        /// Callee
        callee: Box<Expression>,
        /// Arguments
        arguments: Vec<Expression>,
        /// Source location
        span: Span,
    },

    /// `new` over the following expression
    NewExpression {
        /// Constructed expression (a call when arguments are given)
        callee: Box<Expression>,
        /// Source location
        span: Span,
    },

    /// Await expression
    AwaitExpression {
        /// Awaited value
        argument: Box<Expression>,
        /// Source location
        span: Span,
    },

    /// `object.property`
    MemberExpression {
        /// Object
        object: Box<Expression>,
        /// Property name
        property: Identifier,
        /// Source location
        span: Span,
    },

    /// `object[index]`
    SubscriptExpression {
        /// Object
        object: Box<Expression>,
        /// Index
        index: Box<Expression>,
        /// Source location
        span: Span,
    },

    /// `target = value`
    AssignmentExpression {
        /// Identifier, member or subscript expression
        target: Box<Expression>,
        /// Assigned value
        value: Box<Expression>,
        /// Source location
        span: Span,
    },

    /// `target op= value`
    CompoundAssignmentExpression {
        /// Operator
        operator: CompoundOperator,
        /// Identifier, member or subscript expression
        target: Box<Expression>,
        /// Operand
        value: Box<Expression>,
        /// Source location
        span: Span,
    },

    /// `test ? consequent : alternate`
    ConditionalExpression {
        /// Condition
        test: Box<Expression>,
        /// Value if true
        consequent: Box<Expression>,
        /// Value if false
        alternate: Box<Expression>,
        /// Source location
        span: Span,
    },

    /// Binary operation
    BinaryExpression {
        /// Operator
        operator: BinaryOperator,
        /// Left operand
        left: Box<Expression>,
        /// Right operand
        right: Box<Expression>,
        /// Source location
        span: Span,
    },

    /// Unary prefix operation
    UnaryExpression {
        /// Operator
        operator: UnaryOperator,
        /// Operand
        argument: Box<Expression>,
        /// Source location
        span: Span,
    },

    /// `++`/`--`, prefix or postfix
    UpdateExpression {
        /// Operator
        operator: UpdateOperator,
        /// Prefix form
        prefix: bool,
        /// Operand
        argument: Box<Expression>,
        /// Source location
        span: Span,
    },

    /// `left, right`; `a, b, c` nests as `a, (b, c)`
    SequenceExpression {
        /// First operand
        left: Box<Expression>,
        /// Remaining operands
        right: Box<Expression>,
        /// Source location
        span: Span,
    },

    /// `( expression )`
    ParenthesizedExpression {
        /// Inner expression
        expression: Box<Expression>,
        /// Source location including parentheses
        span: Span,
    },

    /// Expression-level recovery
    Error(ErrorNode),
}

impl Expression {
    /// Source range of the expression
    pub fn span(&self) -> Span {
        match self {
            Expression::Identifier(id) => id.span,
            Expression::Literal(lit) => lit.span,
            Expression::FunctionExpression(func)
            | Expression::GeneratorFunctionExpression(func) => func.span,
            Expression::ClassExpression(class) => class.span,
            Expression::Error(error) => error.span,
            Expression::ThisExpression { span }
            | Expression::SuperExpression { span }
            | Expression::ObjectExpression { span, .. }
            | Expression::ArrayExpression { span, .. }
            | Expression::ArrowFunctionExpression { span, .. }
            | Expression::CallExpression { span, .. }
            | Expression::NewExpression { span, .. }
            | Expression::AwaitExpression { span, .. }
            | Expression::MemberExpression { span, .. }
            | Expression::SubscriptExpression { span, .. }
            | Expression::AssignmentExpression { span, .. }
            | Expression::CompoundAssignmentExpression { span, .. }
            | Expression::ConditionalExpression { span, .. }
            | Expression::BinaryExpression { span, .. }
            | Expression::UnaryExpression { span, .. }
            | Expression::UpdateExpression { span, .. }
            | Expression::SequenceExpression { span, .. }
            | Expression::ParenthesizedExpression { span, .. } => *span,
        }
    }

    /// True for expressions that may appear left of `=`
    pub fn is_assignment_target(&self) -> bool {
        matches!(
            self,
            Expression::Identifier(_)
                | Expression::MemberExpression { .. }
                | Expression::SubscriptExpression { .. }
        )
    }

    /// Function, generator and class expressions end with a `}` and need
    /// no terminator when used as statements
    pub fn is_declaration_like(&self) -> bool {
        matches!(
            self,
            Expression::FunctionExpression(_)
                | Expression::GeneratorFunctionExpression(_)
                | Expression::ClassExpression(_)
        )
    }
}

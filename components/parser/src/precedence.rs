//! Operator precedence table consumed by the expression parser
//!
//! Levels, lowest to highest: comma, assignment, object/ternary, logical-or,
//! logical-and, additive, relational, multiplicative, typeof/delete/void,
//! not, negation, increment, `new`, call, member.

use crate::lexer::{Keyword, Punctuator, TokenKind};
use serde::Serialize;

/// Binding strength of an operator. Higher binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Precedence(pub i8);

impl Precedence {
    /// Comma / sequence operator
    pub const COMMA: Precedence = Precedence(-1);
    /// `=` and compound assignment
    pub const ASSIGN: Precedence = Precedence(0);
    /// Object literal start
    pub const OBJECT: Precedence = Precedence(1);
    /// `? :`
    pub const TERNARY: Precedence = Precedence(1);
    /// `||`, `|`, `^`
    pub const OR: Precedence = Precedence(2);
    /// `&&`, `&`
    pub const AND: Precedence = Precedence(3);
    /// `+`, `-`
    pub const PLUS: Precedence = Precedence(4);
    /// Comparison, equality, `instanceof`, `in`
    pub const REL: Precedence = Precedence(5);
    /// `*`, `/`, `%`, `<<`, `>>`
    pub const TIMES: Precedence = Precedence(6);
    /// `typeof`, `delete`, `void`, `await`
    pub const TYPEOF: Precedence = Precedence(7);
    /// `!`, `~`
    pub const NOT: Precedence = Precedence(8);
    /// Unary `-`, `+`
    pub const NEG: Precedence = Precedence(9);
    /// `++`, `--`
    pub const INC: Precedence = Precedence(10);
    /// `new`
    pub const NEW: Precedence = Precedence(11);
    /// Call `( )`
    pub const CALL: Precedence = Precedence(12);
    /// `.` and `[ ]`
    pub const MEMBER: Precedence = Precedence(13);

    /// Loosest binding; every operator qualifies
    pub const LOWEST: Precedence = Precedence::COMMA;

    /// The next tighter level, used for the right operand of left-associative
    /// operators
    pub fn tighter(self) -> Precedence {
        Precedence(self.0.saturating_add(1))
    }
}

/// Grouping of repeated applications of a binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`
    Left,
    /// `a = b = c` is `a = (b = c)`
    Right,
}

/// Where an operator sits relative to its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Fixity {
    /// Before its operand
    Prefix,
    /// Between two operands
    Infix,
    /// After its operand (postfix `++`, call, member access)
    Postfix,
}

/// One table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperatorInfo {
    /// Binding strength
    pub precedence: Precedence,
    /// Grouping
    pub assoc: Associativity,
    /// Position relative to operands
    pub fixity: Fixity,
}

impl OperatorInfo {
    /// Entry with the given binding, grouping and position
    pub const fn new(precedence: Precedence, assoc: Associativity, fixity: Fixity) -> Self {
        Self {
            precedence,
            assoc,
            fixity,
        }
    }

    /// Minimum precedence for parsing the right operand
    pub fn right_operand_precedence(&self) -> Precedence {
        match self.assoc {
            Associativity::Left => self.precedence.tighter(),
            Associativity::Right => self.precedence,
        }
    }
}

/// Operators that can appear in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    /// A punctuator in the given fixity
    Punctuator(Punctuator, Fixity),
    /// A keyword operator (`typeof`, `instanceof`, `new`, ...)
    Keyword(Keyword, Fixity),
}

/// Static map from operator to precedence, associativity and fixity.
///
/// # Examples
///
/// ```
/// use js_frontend::lexer::Punctuator;
/// use js_frontend::precedence::{Fixity, Operator, Precedence, PrecedenceTable};
///
/// let table = &PrecedenceTable::STANDARD;
/// let star = table.lookup(Operator::Punctuator(Punctuator::Star, Fixity::Infix)).unwrap();
/// assert_eq!(star.precedence, Precedence::TIMES);
/// ```
#[derive(Debug)]
pub struct PrecedenceTable {
    entries: &'static [(Operator, OperatorInfo)],
}

use Associativity::{Left, Right};
use Fixity::{Infix, Postfix, Prefix};

const fn p(punct: Punctuator, fixity: Fixity, prec: Precedence, assoc: Associativity) -> (Operator, OperatorInfo) {
    (Operator::Punctuator(punct, fixity), OperatorInfo::new(prec, assoc, fixity))
}

const fn k(keyword: Keyword, fixity: Fixity, prec: Precedence, assoc: Associativity) -> (Operator, OperatorInfo) {
    (Operator::Keyword(keyword, fixity), OperatorInfo::new(prec, assoc, fixity))
}

static STANDARD_ENTRIES: &[(Operator, OperatorInfo)] = &[
    // comma and assignment
    p(Punctuator::Comma, Infix, Precedence::COMMA, Right),
    p(Punctuator::Assign, Infix, Precedence::ASSIGN, Right),
    p(Punctuator::PlusEq, Infix, Precedence::ASSIGN, Right),
    p(Punctuator::MinusEq, Infix, Precedence::ASSIGN, Right),
    p(Punctuator::StarEq, Infix, Precedence::ASSIGN, Right),
    p(Punctuator::SlashEq, Infix, Precedence::ASSIGN, Right),
    p(Punctuator::Question, Infix, Precedence::TERNARY, Right),
    // logical and bitwise
    p(Punctuator::OrOr, Infix, Precedence::OR, Left),
    p(Punctuator::Or, Infix, Precedence::OR, Left),
    p(Punctuator::Xor, Infix, Precedence::OR, Left),
    p(Punctuator::AndAnd, Infix, Precedence::AND, Left),
    p(Punctuator::And, Infix, Precedence::AND, Left),
    // additive
    p(Punctuator::Plus, Infix, Precedence::PLUS, Left),
    p(Punctuator::Minus, Infix, Precedence::PLUS, Left),
    // relational and equality
    p(Punctuator::Lt, Infix, Precedence::REL, Left),
    p(Punctuator::LtEq, Infix, Precedence::REL, Left),
    p(Punctuator::Gt, Infix, Precedence::REL, Left),
    p(Punctuator::GtEq, Infix, Precedence::REL, Left),
    p(Punctuator::EqEq, Infix, Precedence::REL, Left),
    p(Punctuator::EqEqEq, Infix, Precedence::REL, Left),
    p(Punctuator::NotEq, Infix, Precedence::REL, Left),
    p(Punctuator::NotEqEq, Infix, Precedence::REL, Left),
    k(Keyword::Instanceof, Infix, Precedence::REL, Left),
    k(Keyword::In, Infix, Precedence::REL, Left),
    // multiplicative and shifts
    p(Punctuator::Star, Infix, Precedence::TIMES, Left),
    p(Punctuator::Slash, Infix, Precedence::TIMES, Left),
    p(Punctuator::Percent, Infix, Precedence::TIMES, Left),
    p(Punctuator::LtLt, Infix, Precedence::TIMES, Left),
    p(Punctuator::GtGt, Infix, Precedence::TIMES, Left),
    // unary prefix
    k(Keyword::Typeof, Prefix, Precedence::TYPEOF, Right),
    k(Keyword::Delete, Prefix, Precedence::TYPEOF, Right),
    k(Keyword::Void, Prefix, Precedence::TYPEOF, Right),
    k(Keyword::Await, Prefix, Precedence::TYPEOF, Right),
    p(Punctuator::Not, Prefix, Precedence::NOT, Right),
    p(Punctuator::Tilde, Prefix, Precedence::NOT, Right),
    p(Punctuator::Minus, Prefix, Precedence::NEG, Right),
    p(Punctuator::Plus, Prefix, Precedence::NEG, Right),
    p(Punctuator::PlusPlus, Prefix, Precedence::INC, Right),
    p(Punctuator::MinusMinus, Prefix, Precedence::INC, Right),
    p(Punctuator::PlusPlus, Postfix, Precedence::INC, Left),
    p(Punctuator::MinusMinus, Postfix, Precedence::INC, Left),
    // new, call, member
    k(Keyword::New, Prefix, Precedence::NEW, Right),
    p(Punctuator::LParen, Postfix, Precedence::CALL, Left),
    p(Punctuator::Dot, Postfix, Precedence::MEMBER, Left),
    p(Punctuator::LBracket, Postfix, Precedence::MEMBER, Right),
];

impl PrecedenceTable {
    /// The standard JavaScript-subset table
    pub const STANDARD: PrecedenceTable = PrecedenceTable {
        entries: STANDARD_ENTRIES,
    };

    /// Build a table from a custom entry list
    pub const fn from_entries(entries: &'static [(Operator, OperatorInfo)]) -> Self {
        Self { entries }
    }

    /// Every entry, in table order
    pub fn entries(&self) -> &'static [(Operator, OperatorInfo)] {
        self.entries
    }

    /// Look up an operator
    pub fn lookup(&self, op: Operator) -> Option<OperatorInfo> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == op)
            .map(|(_, info)| *info)
    }

    /// Entry for `kind` used as an infix or postfix operator
    pub fn infix(&self, kind: TokenKind) -> Option<OperatorInfo> {
        let op = |fixity| match kind {
            TokenKind::Punctuator(punct) => Some(Operator::Punctuator(punct, fixity)),
            TokenKind::Keyword(keyword) => Some(Operator::Keyword(keyword, fixity)),
            _ => None,
        };
        op(Infix)
            .and_then(|o| self.lookup(o))
            .or_else(|| op(Postfix).and_then(|o| self.lookup(o)))
    }

    /// Entry for `kind` used as a prefix operator
    pub fn prefix(&self, kind: TokenKind) -> Option<OperatorInfo> {
        match kind {
            TokenKind::Punctuator(punct) => self.lookup(Operator::Punctuator(punct, Prefix)),
            TokenKind::Keyword(keyword) => self.lookup(Operator::Keyword(keyword, Prefix)),
            _ => None,
        }
    }
}

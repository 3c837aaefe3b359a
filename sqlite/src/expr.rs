//! Expression nodes: operators, predicates, ordering terms.

use sqlweave_core::{
    Result, SQL, SerializerContext, ToSQL, ToSQLList, Token, traits::bindable,
};

/// Context for operands: below top level, parenthesised.
#[inline]
fn operand_context<'a>(ctx: &SerializerContext<'a>) -> SerializerContext<'a> {
    ctx.nested().use_parentheses(true)
}

//------------------------------------------------------------------------------
// Binary operators
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
    Add,
    Sub,
    Mul,
    Div,
    Concat,
}

impl BinaryOperator {
    pub const fn token(self) -> Token {
        match self {
            BinaryOperator::Eq => Token::EQ,
            BinaryOperator::Ne => Token::NE,
            BinaryOperator::Lt => Token::LT,
            BinaryOperator::Le => Token::LE,
            BinaryOperator::Gt => Token::GT,
            BinaryOperator::Ge => Token::GE,
            BinaryOperator::And => Token::AND,
            BinaryOperator::Or => Token::OR,
            BinaryOperator::Add => Token::PLUS,
            BinaryOperator::Sub => Token::MINUS,
            BinaryOperator::Mul => Token::STAR,
            BinaryOperator::Div => Token::SLASH,
            BinaryOperator::Concat => Token::CONCAT,
        }
    }
}

/// `lhs op rhs`, wrapped in parentheses when the context asks for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binary<L, R> {
    pub lhs: L,
    pub op: BinaryOperator,
    pub rhs: R,
}

impl<L: ToSQL, R: ToSQL> ToSQL for Binary<L, R> {
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let operands = operand_context(ctx);
        let sql = self
            .lhs
            .to_sql(&operands)?
            .push(self.op.token())
            .append(self.rhs.to_sql(&operands)?);
        Ok(sql.parens_if(ctx.flags().use_parentheses))
    }
}

macro_rules! binary_fns {
    ($($(#[$meta:meta])* $name:ident => $op:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub const fn $name<L: ToSQL, R: ToSQL>(lhs: L, rhs: R) -> Binary<L, R> {
                Binary { lhs, op: BinaryOperator::$op, rhs }
            }
        )+
    };
}

binary_fns!(
    /// `lhs = rhs`
    eq => Eq,
    /// `lhs <> rhs`
    ne => Ne,
    /// `lhs < rhs`
    lt => Lt,
    /// `lhs <= rhs`
    le => Le,
    /// `lhs > rhs`
    gt => Gt,
    /// `lhs >= rhs`
    ge => Ge,
    /// `lhs AND rhs`
    and => And,
    /// `lhs OR rhs`
    or => Or,
    add => Add,
    sub => Sub,
    mul => Mul,
    div => Div,
    /// `lhs || rhs`
    concat => Concat,
);

//------------------------------------------------------------------------------
// Unary predicates
//------------------------------------------------------------------------------

/// `NOT (expr)`
///
/// The operand is always parenthesised so it binds tighter than `NOT`, and
/// the node itself is wrapped like a binary expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Not<E>(pub E);

pub const fn not<E: ToSQL>(expr: E) -> Not<E> {
    Not(expr)
}

impl<E: ToSQL> ToSQL for Not<E> {
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let inner = self.0.to_sql(&ctx.nested().use_parentheses(false))?;
        Ok(SQL::token(Token::NOT)
            .append(inner.parens())
            .parens_if(ctx.flags().use_parentheses))
    }
}

/// `expr IS [NOT] NULL`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsNull<E> {
    expr: E,
    negated: bool,
}

pub const fn is_null<E: ToSQL>(expr: E) -> IsNull<E> {
    IsNull {
        expr,
        negated: false,
    }
}

pub const fn is_not_null<E: ToSQL>(expr: E) -> IsNull<E> {
    IsNull {
        expr,
        negated: true,
    }
}

impl<E: ToSQL> ToSQL for IsNull<E> {
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let mut sql = self.expr.to_sql(&operand_context(ctx))?.push(Token::IS);
        if self.negated {
            sql.push_mut(Token::NOT);
        }
        Ok(sql.push(Token::NULL))
    }
}

//------------------------------------------------------------------------------
// IN / LIKE / BETWEEN / EXISTS
//------------------------------------------------------------------------------

/// `expr [NOT] IN (a, b, ..)`
#[derive(Debug, Clone, PartialEq)]
pub struct In<E, L> {
    expr: E,
    list: L,
    negated: bool,
}

pub fn in_<E: ToSQL, L: ToSQLList>(expr: E, list: L) -> In<E, L> {
    In {
        expr,
        list,
        negated: false,
    }
}

pub fn not_in<E: ToSQL, L: ToSQLList>(expr: E, list: L) -> In<E, L> {
    In {
        expr,
        list,
        negated: true,
    }
}

impl<E: ToSQL, L: ToSQLList> ToSQL for In<E, L> {
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let operands = operand_context(ctx);
        let mut sql = self.expr.to_sql(&operands)?;
        if self.negated {
            sql.push_mut(Token::NOT);
        }
        sql.push_mut(Token::IN);
        Ok(sql.append(self.list.to_sql_list(&operands)?.parens()))
    }
}

/// `expr LIKE pattern [ESCAPE 'c']`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Like<E, P> {
    expr: E,
    pattern: P,
    escape: Option<char>,
}

pub const fn like<E: ToSQL, P: ToSQL>(expr: E, pattern: P) -> Like<E, P> {
    Like {
        expr,
        pattern,
        escape: None,
    }
}

impl<E, P> Like<E, P> {
    /// Sets the escape character of the pattern.
    pub const fn escape(mut self, escape: char) -> Self {
        self.escape = Some(escape);
        self
    }
}

impl<E: ToSQL, P: ToSQL> ToSQL for Like<E, P> {
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let operands = operand_context(ctx);
        let mut sql = self
            .expr
            .to_sql(&operands)?
            .push(Token::LIKE)
            .append(self.pattern.to_sql(&operands)?);
        if let Some(escape) = self.escape {
            let mut buf = [0; 4];
            sql.push_mut(Token::ESCAPE);
            sql.append_mut(bindable(&operands, &*escape.encode_utf8(&mut buf)));
        }
        Ok(sql)
    }
}

/// `expr BETWEEN low AND high`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Between<E, Lo, Hi> {
    expr: E,
    low: Lo,
    high: Hi,
}

pub const fn between<E: ToSQL, Lo: ToSQL, Hi: ToSQL>(
    expr: E,
    low: Lo,
    high: Hi,
) -> Between<E, Lo, Hi> {
    Between { expr, low, high }
}

impl<E: ToSQL, Lo: ToSQL, Hi: ToSQL> ToSQL for Between<E, Lo, Hi> {
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        let operands = operand_context(ctx);
        Ok(self
            .expr
            .to_sql(&operands)?
            .push(Token::BETWEEN)
            .append(self.low.to_sql(&operands)?)
            .push(Token::AND)
            .append(self.high.to_sql(&operands)?))
    }
}

/// `EXISTS (subquery)`
#[derive(Debug, Clone, PartialEq)]
pub struct Exists<S>(pub S);

pub const fn exists<S: ToSQL>(subquery: S) -> Exists<S> {
    Exists(subquery)
}

impl<S: ToSQL> ToSQL for Exists<S> {
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        Ok(SQL::token(Token::EXISTS).append(self.0.to_sql(&operand_context(ctx))?))
    }
}

//------------------------------------------------------------------------------
// Aggregates
//------------------------------------------------------------------------------

/// `COUNT(*)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountAll;

pub const fn count_all() -> CountAll {
    CountAll
}

impl ToSQL for CountAll {
    fn to_sql<'a>(&'a self, _ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        Ok(SQL::func("COUNT", SQL::token(Token::STAR)))
    }
}

//------------------------------------------------------------------------------
// Ordering
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub const fn token(self) -> Token {
        match self {
            Order::Asc => Token::ASC,
            Order::Desc => Token::DESC,
        }
    }
}

/// An `ORDER BY` term: `expr ASC` or `expr DESC`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ordered<E> {
    expr: E,
    order: Order,
}

pub const fn asc<E: ToSQL>(expr: E) -> Ordered<E> {
    Ordered {
        expr,
        order: Order::Asc,
    }
}

pub const fn desc<E: ToSQL>(expr: E) -> Ordered<E> {
    Ordered {
        expr,
        order: Order::Desc,
    }
}

impl<E: ToSQL> ToSQL for Ordered<E> {
    fn to_sql<'a>(&'a self, ctx: &SerializerContext<'a>) -> Result<SQL<'a>> {
        Ok(self.expr.to_sql(&ctx.nested())?.push(self.order.token()))
    }
}

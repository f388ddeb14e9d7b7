use std::cmp::Ordering;
use std::fmt;

/// The six comparison operators of the rule language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Eq,
        Operator::Neq,
        Operator::Gt,
        Operator::Gte,
        Operator::Lt,
        Operator::Lte,
    ];

    /// Resolve a raw operator token. Only exact tokens are accepted, so `==`,
    /// `=>` or `<>` return `None`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == token)
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Neq => "!=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
        }
    }

    /// Whether a single attribute value that orders as `ord` against the rule
    /// value satisfies this operator.
    ///
    /// List and missing attributes are handled by
    /// [`Clause::holds`](crate::Clause::holds), which evaluates `!=` as "no
    /// value is equal" rather than "some value differs", so it never calls
    /// this with `Neq`.
    #[must_use]
    pub fn holds(self, ord: Ordering) -> bool {
        match self {
            Operator::Eq => ord == Ordering::Equal,
            Operator::Neq => ord != Ordering::Equal,
            Operator::Gt => ord == Ordering::Greater,
            Operator::Gte => ord != Ordering::Less,
            Operator::Lt => ord == Ordering::Less,
            Operator::Lte => ord != Ordering::Greater,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The closed set of binary arithmetic operators.
///
/// Each operator has a fixed one-character spelling and applies to two
/// `f64` operands. Division and modulo follow IEEE-754 semantics, so dividing
/// by zero produces an infinity or NaN rather than an error, and `^` uses the
/// general real power function, which may likewise produce NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
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
    /// `^`
    Pow,
}

impl Operator {
    /// Resolves an operator from its spelling.
    ///
    /// # Returns
    /// - `Some(Operator)` if the word is one of the six operator symbols.
    /// - `None` for any other word.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "%" => Some(Self::Mod),
            "^" => Some(Self::Pow),
            _ => None,
        }
    }

    /// Returns the spelling of this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        }
    }

    /// Applies the operator to its two operands, left operand first.
    #[must_use]
    pub fn evaluate(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Mod => lhs % rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

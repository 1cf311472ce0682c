/// Operator tokens
///
/// Token identity attached to binary, assignment, prefix and postfix nodes.
/// Equivalence always requires the exact same token.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    // Arithmetic
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "*")]
    Asterisk,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "%")]
    Percent,

    // Bitwise and shifts
    #[serde(rename = "&")]
    And,
    #[serde(rename = "|")]
    Or,
    #[serde(rename = "^")]
    Xor,
    #[serde(rename = "<<")]
    Shl,
    #[serde(rename = ">>")]
    Shr,
    #[serde(rename = ">>>")]
    UShr,

    // Logical
    #[serde(rename = "&&")]
    AndAnd,
    #[serde(rename = "||")]
    OrOr,
    #[serde(rename = "!")]
    Not,
    #[serde(rename = "~")]
    Tilde,

    // Relational
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,

    // Increment / decrement
    #[serde(rename = "++")]
    PlusPlus,
    #[serde(rename = "--")]
    MinusMinus,

    // Assignment
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "+=")]
    PlusAssign,
    #[serde(rename = "-=")]
    MinusAssign,
    #[serde(rename = "*=")]
    AsteriskAssign,
    #[serde(rename = "/=")]
    DivAssign,
    #[serde(rename = "%=")]
    PercentAssign,
    #[serde(rename = "&=")]
    AndAssign,
    #[serde(rename = "|=")]
    OrAssign,
    #[serde(rename = "^=")]
    XorAssign,
    #[serde(rename = "<<=")]
    ShlAssign,
    #[serde(rename = ">>=")]
    ShrAssign,
    #[serde(rename = ">>>=")]
    UShrAssign,
}

impl Operator {
    #[cfg(test)]
    const ALL: [Operator; 35] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Asterisk,
        Operator::Div,
        Operator::Percent,
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::Shl,
        Operator::Shr,
        Operator::UShr,
        Operator::AndAnd,
        Operator::OrOr,
        Operator::Not,
        Operator::Tilde,
        Operator::Eq,
        Operator::Ne,
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
        Operator::Ge,
        Operator::PlusPlus,
        Operator::MinusMinus,
        Operator::Assign,
        Operator::PlusAssign,
        Operator::MinusAssign,
        Operator::AsteriskAssign,
        Operator::DivAssign,
        Operator::PercentAssign,
        Operator::AndAssign,
        Operator::OrAssign,
        Operator::XorAssign,
        Operator::ShlAssign,
        Operator::ShrAssign,
        Operator::UShrAssign,
    ];

    /// The token as it appears in source.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Asterisk => "*",
            Operator::Div => "/",
            Operator::Percent => "%",
            Operator::And => "&",
            Operator::Or => "|",
            Operator::Xor => "^",
            Operator::Shl => "<<",
            Operator::Shr => ">>",
            Operator::UShr => ">>>",
            Operator::AndAnd => "&&",
            Operator::OrOr => "||",
            Operator::Not => "!",
            Operator::Tilde => "~",
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::PlusPlus => "++",
            Operator::MinusMinus => "--",
            Operator::Assign => "=",
            Operator::PlusAssign => "+=",
            Operator::MinusAssign => "-=",
            Operator::AsteriskAssign => "*=",
            Operator::DivAssign => "/=",
            Operator::PercentAssign => "%=",
            Operator::AndAssign => "&=",
            Operator::OrAssign => "|=",
            Operator::XorAssign => "^=",
            Operator::ShlAssign => "<<=",
            Operator::ShrAssign => ">>=",
            Operator::UShrAssign => ">>>=",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

use phf::phf_map;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Rem => "%",
            BinOp::Pow => "^",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Operator {
    pub sym: &'static str,
    pub op: BinOp,
    pub prec: u8,
}

impl Operator {
    pub fn lookup(sym: &str) -> Option<&'static Operator> {
        BINARY_OPERATOR_TABLE.get(sym)
    }
}

/// Priority of a symbol, 0 for anything that is not a binary operator.
pub fn priority(sym: &str) -> u8 {
    Operator::lookup(sym).map_or(0, |op| op.prec)
}

pub static BINARY_OPERATOR_TABLE: phf::Map<&'static str, Operator> = phf_map! {
    "+" => Operator {
        prec: 1,
        op: BinOp::Add,
        sym: "+",
    },
    "-" => Operator {
        prec: 1,
        op: BinOp::Sub,
        sym: "-",
    },
    "*" => Operator {
        prec: 2,
        op: BinOp::Mul,
        sym: "*",
    },
    "/" => Operator {
        prec: 2,
        op: BinOp::Div,
        sym: "/",
    },
    "%" => Operator {
        prec: 2,
        op: BinOp::Rem,
        sym: "%",
    },
    "^" => Operator {
        prec: 3,
        op: BinOp::Pow,
        sym: "^",
    },
};

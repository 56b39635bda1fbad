use crate::{
    errors::err::{Error, ErrorInfo},
    syntax::ast::{BinOp, Node},
};

pub type EvalResult<'a> = Result<i64, ErrorInfo<'a>>;

impl<'a> Node<'a> {
    /// Computes the value of the tree with `x` bound to `x`.
    pub fn eval(&self, x: i64) -> EvalResult<'a> {
        match self {
            // digits only, so the parse can only fail on overflow
            Node::Num(n) => n.parse::<i64>().map_err(|_| Error::Overflow.into()),
            Node::Var => Ok(x),
            Node::Binary(op, left, right) => {
                let left = left.eval(x)?;
                let right = right.eval(x)?;
                op.apply(left, right).map_err(ErrorInfo::from)
            }
        }
    }
}

impl BinOp {
    pub fn apply(self, left: i64, right: i64) -> Result<i64, Error<'static>> {
        let result = match self {
            BinOp::Add => left.checked_add(right),
            BinOp::Sub => left.checked_sub(right),
            BinOp::Mul => left.checked_mul(right),
            BinOp::Div | BinOp::Rem if right == 0 => return Err(Error::DivisionByZero),
            BinOp::Div => left.checked_div(right),
            BinOp::Rem => left.checked_rem(right),
            BinOp::Pow => return pow(left, right),
        };
        result.ok_or(Error::Overflow)
    }
}

/// Power through `f64`, truncated toward zero. Exact only while the result fits
/// the 53 bit mantissa.
fn pow(base: i64, exp: i64) -> Result<i64, Error<'static>> {
    if base == 0 && exp < 0 {
        return Err(Error::DivisionByZero);
    }
    let value = (base as f64).powf(exp as f64).trunc();
    // i64::MAX as f64 rounds up to 2^63
    if !value.is_finite() || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(Error::Overflow);
    }
    Ok(value as i64)
}

use std::fmt;

use crate::source_pos::Span;

pub type ParseResult<'a, T> = Result<T, ErrorInfo<'a>>;

#[derive(Debug, PartialEq)]
pub struct ErrorInfo<'a> {
    pub expected: Option<Expected>,
    pub error: Error<'a>,
    /// Evaluation errors have no source position.
    pub span: Option<Span>,
}

#[derive(Debug, PartialEq)]
pub enum Error<'a> {
    MalformedExpression(&'static str),
    UnknownOperator(&'a str),
    DivisionByZero,
    Overflow,
}

#[derive(Debug, PartialEq)]
pub enum Expected {
    Named(&'static str),
}

impl<'a> ErrorInfo<'a> {
    pub fn new(error: Error<'a>, span: Span) -> Self {
        Self {
            expected: None,
            error,
            span: Some(span),
        }
    }

    pub fn malformed(reason: &'static str, span: Span) -> Self {
        Self::new(Error::MalformedExpression(reason), span)
    }

    pub fn expected(mut self, what: &'static str) -> Self {
        self.expected = Some(Expected::Named(what));
        self
    }
}

impl<'a> From<Error<'a>> for ErrorInfo<'a> {
    fn from(error: Error<'a>) -> Self {
        Self {
            expected: None,
            error,
            span: None,
        }
    }
}

impl fmt::Display for Error<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedExpression(reason) => write!(f, "malformed expression: {}", reason),
            Error::UnknownOperator(sym) => write!(f, "unknown operator `{}`", sym),
            Error::DivisionByZero => f.write_str("division by zero"),
            Error::Overflow => f.write_str("integer overflow"),
        }
    }
}

impl fmt::Display for ErrorInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(span) = &self.span {
            write!(f, " at {}..{}", span.start, span.end)?;
        }
        if let Some(Expected::Named(what)) = &self.expected {
            write!(f, ", expected {}", what)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorInfo<'_> {}

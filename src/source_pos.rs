use std::ops::Range;

pub type Span = Range<usize>;

#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub elem: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(elem: T, span: Span) -> Self {
        Self { elem, span }
    }
}

/// The smallest span covering both `a` and `b`.
pub fn join(a: &Span, b: &Span) -> Span {
    a.start.min(b.start)..a.end.max(b.end)
}

/// A maximal run of identical tokens: ticks `start..start + length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<T> {
    pub token: T,
    pub start: usize,
    pub length: usize,
}

impl<T> Span<T> {
    pub fn new(token: T, start: usize, length: usize) -> Self {
        Self {
            token,
            start,
            length,
        }
    }

    /// Exclusive end tick.
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Compress a per-tick sequence into contiguous runs.
///
/// `[T1, T1, T2, T2, T2]` becomes `[(T1, 0, 2), (T2, 2, 3)]`. The spans cover
/// every tick exactly once, in order.
pub fn compress_runs<T: PartialEq>(seq: &[T]) -> Vec<Span<&T>> {
    let Some(first) = seq.first() else {
        return Vec::new();
    };

    let mut spans = Vec::new();
    let mut cur = first;
    let mut start = 0;
    let mut length = 1;
    for (i, tok) in seq.iter().enumerate().skip(1) {
        if tok == cur {
            length += 1;
        } else {
            spans.push(Span::new(cur, start, length));
            cur = tok;
            start = i;
            length = 1;
        }
    }
    spans.push(Span::new(cur, start, length));
    spans
}

/// Inverse of [`compress_runs`].
pub fn expand_runs<T: Clone>(spans: &[Span<T>]) -> Vec<T> {
    spans
        .iter()
        .flat_map(|span| std::iter::repeat_n(span.token.clone(), span.length))
        .collect()
}

//! Typo-tolerant name search.
//!
//! Distances are bounded Levenshtein over bytes: both operands are cut to the
//! matcher's `max_length` before comparison, so overly long input degrades
//! the result instead of failing.

/// Smallest `2^k - 1` that is `>= n`. Zero maps to zero.
pub const fn next_pow2_minus_1(n: usize) -> usize {
    if n == 0 { 0 } else { usize::MAX >> n.leading_zeros() }
}

/// Levenshtein distance between the first `max_len` bytes of `a` and `b`.
pub fn levenshtein(a: &str, b: &str, max_len: usize) -> usize {
    distance_by(truncate(a, max_len), truncate(b, max_len), |x, y| x == y)
}

/// Same as [`levenshtein`], with ASCII letters compared case-insensitively.
pub fn caseless_levenshtein(a: &str, b: &str, max_len: usize) -> usize {
    distance_by(truncate(a, max_len), truncate(b, max_len), |x, y| {
        x.eq_ignore_ascii_case(&y)
    })
}

fn truncate(s: &str, max_len: usize) -> &[u8] {
    let bytes = s.as_bytes();
    &bytes[..bytes.len().min(max_len)]
}

fn distance_by(a: &[u8], b: &[u8], eq: impl Fn(u8, u8) -> bool) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(!eq(ca, cb));
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Index of the candidate closest to `query` under `distance`.
///
/// Ties go to the lowest index. `None` only when there are no candidates.
pub fn fuzzy_search<'a, I, F>(candidates: I, query: &str, mut distance: F) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
    F: FnMut(&str, &str) -> usize,
{
    candidates
        .into_iter()
        .enumerate()
        .map(|(idx, name)| (idx, distance(name, query)))
        .min_by_key(|&(_, d)| d)
        .map(|(idx, _)| idx)
}

/// Nearest-name search with a fixed comparison bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FuzzyMatcher {
    max_length: usize,
}

impl FuzzyMatcher {
    pub const fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Bound sized for `names`: `next_pow2_minus_1(2 * longest)`.
    pub fn for_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let longest = names
            .into_iter()
            .map(|name| name.as_ref().len())
            .max()
            .unwrap_or(0);
        Self::new(next_pow2_minus_1(2 * longest))
    }

    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein(a, b, self.max_length)
    }

    pub fn caseless_distance(&self, a: &str, b: &str) -> usize {
        caseless_levenshtein(a, b, self.max_length)
    }

    pub fn find<'a, I>(&self, candidates: I, query: &str) -> Option<usize>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let found = fuzzy_search(candidates, query, |a, b| self.distance(a, b));
        tracing::trace!(query, ?found, "fuzzy search");
        found
    }

    pub fn find_caseless<'a, I>(&self, candidates: I, query: &str) -> Option<usize>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let found = fuzzy_search(candidates, query, |a, b| self.caseless_distance(a, b));
        tracing::trace!(query, ?found, "caseless fuzzy search");
        found
    }
}

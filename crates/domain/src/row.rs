// crates/domain/src/row.rs
use num_bigint::BigUint;
use num_traits::One;
use pascal_shared_kernel::{DomainResult, RowIndex};

use crate::binomial::generate_row;

/// Produces the entries `C(n, 0) ..= C(n, n)` of a row.
pub trait RowSource {
    fn name(&self) -> &'static str;

    /// Entries of row `index`, in increasing `k`, computed lazily where the
    /// source allows it.
    fn entries<'a>(
        &'a mut self,
        index: RowIndex,
    ) -> Box<dyn Iterator<Item = DomainResult<BigUint>> + 'a>;

    /// Collects a whole row.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by [`RowSource::entries`].
    fn row(&mut self, index: RowIndex) -> DomainResult<Vec<BigUint>> {
        self.entries(index).collect()
    }
}

/// Computes every entry independently through [`generate_row`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FactorialRows;

impl RowSource for FactorialRows {
    fn name(&self) -> &'static str {
        "factorial"
    }

    fn entries<'a>(
        &'a mut self,
        index: RowIndex,
    ) -> Box<dyn Iterator<Item = DomainResult<BigUint>> + 'a> {
        let n = index.value();
        Box::new((0..=n).map(move |k| generate_row(n, k)))
    }
}

/// Builds each row from the previous one with Pascal's identity.
///
/// Rows are cached one at a time; asking for an earlier row than the cached
/// one restarts from the apex.
#[derive(Debug, Clone)]
pub struct AdditiveRows {
    index: RowIndex,
    current: Vec<BigUint>,
}

impl AdditiveRows {
    pub fn new() -> Self {
        Self { index: RowIndex::first(), current: vec![BigUint::one()] }
    }

    fn advance_to(&mut self, target: RowIndex) {
        if target < self.index {
            log::debug!("additive rows: restarting from apex for row {target}");
            *self = Self::new();
        }
        while self.index < target {
            self.current = next_row(&self.current);
            self.index = self.index.next();
        }
    }
}

impl Default for AdditiveRows {
    fn default() -> Self {
        Self::new()
    }
}

impl RowSource for AdditiveRows {
    fn name(&self) -> &'static str {
        "additive"
    }

    fn entries<'a>(
        &'a mut self,
        index: RowIndex,
    ) -> Box<dyn Iterator<Item = DomainResult<BigUint>> + 'a> {
        self.advance_to(index);
        Box::new(self.current.iter().cloned().map(Ok))
    }
}

fn next_row(prev: &[BigUint]) -> Vec<BigUint> {
    let mut next = Vec::with_capacity(prev.len() + 1);
    next.push(BigUint::one());
    next.extend(prev.windows(2).map(|pair| &pair[0] + &pair[1]));
    next.push(BigUint::one());
    next
}

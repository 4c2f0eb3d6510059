use std::collections::BTreeMap;

use spool_ir::expr::Expr;

/// Boolean obligations keyed by the timeframe at which they must hold.
///
/// Iteration follows timeframe order. Obligations stored at the same
/// timeframe are combined by conjunction when the map is read back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Obligations {
    pub map: BTreeMap<usize, Vec<Expr>>,
}

impl Obligations {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single obligation at one timeframe.
    pub fn single(timeframe: usize, expr: Expr) -> Self {
        let mut obligations = Self::new();
        obligations.add(timeframe, expr);
        obligations
    }

    pub fn add(&mut self, timeframe: usize, expr: Expr) {
        self.map.entry(timeframe).or_default().push(expr);
    }

    /// Union with another obligation map.
    pub fn merge(&mut self, other: Obligations) {
        for (timeframe, mut exprs) in other.map {
            self.map.entry(timeframe).or_default().append(&mut exprs);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spool_ir::expr::Type;

    fn p() -> Expr {
        Expr::symbol("p", Type::Bool)
    }

    fn q() -> Expr {
        Expr::symbol("q", Type::Bool)
    }

    #[test]
    fn single_stores_one_obligation_at_the_given_timeframe() {
        let obligations = Obligations::single(2, p());
        assert_eq!(obligations.map.len(), 1);
        assert_eq!(obligations.map[&2], vec![p()]);
    }

    #[test]
    fn add_accumulates_at_the_same_timeframe() {
        let mut obligations = Obligations::new();
        obligations.add(1, p());
        obligations.add(1, q());
        assert_eq!(obligations.map[&1], vec![p(), q()]);
    }

    #[test]
    fn merge_unions_per_timeframe_preserving_order() {
        let mut left = Obligations::single(0, p());
        let mut right = Obligations::single(0, q());
        right.add(3, p());
        left.merge(right);

        assert_eq!(left.map[&0], vec![p(), q()]);
        assert_eq!(left.map[&3], vec![p()]);
    }

    #[test]
    fn iteration_follows_timeframe_order() {
        let mut obligations = Obligations::new();
        obligations.add(4, p());
        obligations.add(0, q());
        obligations.add(2, p());
        let timeframes: Vec<usize> = obligations.map.keys().copied().collect();
        assert_eq!(timeframes, vec![0, 2, 4]);
    }

    #[test]
    fn new_map_is_empty() {
        assert!(Obligations::new().is_empty());
        assert!(!Obligations::single(0, p()).is_empty());
    }
}

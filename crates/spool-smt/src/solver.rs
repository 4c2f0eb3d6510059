use spool_ir::expr::Expr;

/// Decision-procedure collaborator of the unwinding passes.
///
/// The passes only ever add hard constraints and register expressions for
/// later reference; satisfiability checking and model extraction stay with
/// the host driving the solver.
pub trait Solver {
    /// Add `expr` as a hard constraint.
    ///
    /// `expr` is boolean-typed over timeframed symbols and lasso symbols.
    fn assert(&mut self, expr: Expr);

    /// Register `expr` and return an equivalent expression usable in later
    /// constraints. Handles of equal expressions may be compared by
    /// identity downstream.
    fn handle(&mut self, expr: Expr) -> Expr;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingSolver {
        asserted: usize,
    }

    impl Solver for CountingSolver {
        fn assert(&mut self, _expr: Expr) {
            self.asserted += 1;
        }

        fn handle(&mut self, expr: Expr) -> Expr {
            expr
        }
    }

    #[test]
    fn trait_objects_dispatch_assert_and_handle() {
        let mut solver = CountingSolver { asserted: 0 };
        let dynamic: &mut dyn Solver = &mut solver;
        dynamic.assert(Expr::True);
        let handle = dynamic.handle(Expr::False);
        assert_eq!(handle, Expr::False);
        assert_eq!(solver.asserted, 1);
    }
}

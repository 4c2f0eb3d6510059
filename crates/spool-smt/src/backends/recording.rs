use spool_ir::expr::{Expr, Type};
use tracing::trace;

use crate::solver::Solver;

const HANDLE_PREFIX: &str = "spool::handle";

/// Backend that records constraints instead of solving.
///
/// Asserted expressions are kept in assertion order; `handle` registers the
/// expression and returns a fresh boolean symbol `spool::handle<n>` standing
/// for it. A host can replay the recorded constraints into a real decision
/// procedure, and tests inspect them directly.
#[derive(Debug, Default)]
pub struct RecordingSolver {
    assertions: Vec<Expr>,
    handles: Vec<Expr>,
}

impl RecordingSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// All constraints asserted so far, in assertion order.
    pub fn assertions(&self) -> &[Expr] {
        &self.assertions
    }

    /// The expression a handle returned by `handle` stands for.
    pub fn resolve(&self, handle: &Expr) -> Option<&Expr> {
        let Expr::Symbol { identifier, .. } = handle else {
            return None;
        };
        let index: usize = identifier.strip_prefix(HANDLE_PREFIX)?.parse().ok()?;
        self.handles.get(index)
    }

    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }
}

impl Solver for RecordingSolver {
    fn assert(&mut self, expr: Expr) {
        trace!(constraint = %expr, "recording assertion");
        self.assertions.push(expr);
    }

    fn handle(&mut self, expr: Expr) -> Expr {
        let reference = Expr::symbol(format!("{HANDLE_PREFIX}{}", self.handles.len()), Type::Bool);
        self.handles.push(expr);
        reference
    }
}

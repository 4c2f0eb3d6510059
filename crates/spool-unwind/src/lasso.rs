//! Lasso constraints: boolean symbols pinned to state-equality between two
//! timeframes, letting liveness properties be refuted by cycles inside the
//! bounded unrolling.

use spool_ir::expr::{conjunction, Expr, Type};
use spool_ir::transition::Namespace;
use spool_smt::solver::Solver;
use tracing::debug;

use crate::errors::UnwindError;
use crate::instantiate::timeframe_symbol;

/// Boolean symbol that is true when states `i` and `k` are equal.
///
/// We require `k < i` to avoid the symmetric constraints. The
/// `lasso::<i>-back-to-<k>` identifier is a contract: the unwinding
/// references these symbols as free variables and the emitter pins them.
pub fn lasso_symbol(k: usize, i: usize) -> Expr {
    assert!(k < i, "lasso loops from a later timeframe to an earlier one");
    Expr::symbol(format!("lasso::{i}-back-to-{k}"), Type::Bool)
}

/// Conjunction of equalities between the comparison variables at
/// timeframes `i` and `k`.
pub fn states_equal(k: usize, i: usize, variables_to_compare: &[(String, Type)]) -> Expr {
    assert!(k < i, "lasso loops from a later timeframe to an earlier one");

    let mut conjuncts = Vec::with_capacity(variables_to_compare.len());
    for (identifier, ty) in variables_to_compare {
        let i_var = timeframe_symbol(i, identifier, *ty);
        let k_var = timeframe_symbol(k, identifier, *ty);
        conjuncts.push(i_var.eq(k_var));
    }
    conjunction(conjuncts)
}

/// Assert `lasso(k, i) = states_equal(k, i)` for every pair `k < i` within
/// the bound.
///
/// The definition of a lasso to state `s_i` is that there is an identical
/// earlier state `s_k` with `k < i`; "identical" means the state variables
/// and the top-level inputs match. Must run before (or interleaved in call
/// order with) handing obligations to the solver, since obligations may
/// reference the lasso symbols.
pub fn lasso_constraints<S: Solver>(
    solver: &mut S,
    no_timeframes: usize,
    ns: &Namespace,
    module_identifier: &str,
) -> Result<(), UnwindError> {
    let mut variables_to_compare: Vec<(String, Type)> = Vec::new();

    // Gather the state variables.
    for symbol in ns.symbols_of_module(module_identifier) {
        if symbol.is_state_var {
            variables_to_compare.push((symbol.identifier.clone(), symbol.ty));
        }
    }

    // Gather the top-level inputs.
    let module =
        ns.lookup_module(module_identifier)
            .ok_or_else(|| UnwindError::UnknownModule {
                module: module_identifier.to_string(),
            })?;
    for port in &module.ports {
        if port.input && !port.output {
            variables_to_compare.push((port.identifier.clone(), port.ty));
        }
    }

    debug!(
        no_timeframes,
        variables = variables_to_compare.len(),
        "emitting lasso constraints"
    );

    for i in 1..no_timeframes {
        for k in 0..i {
            // Is there a loop from timeframe i back to timeframe k?
            let lasso = lasso_symbol(k, i);
            let equal = states_equal(k, i, &variables_to_compare);
            solver.assert(lasso.eq(equal));
        }
    }

    Ok(())
}

/// True when unwinding `expr` will reference lasso symbols.
pub fn requires_lasso_constraints(expr: &Expr) -> bool {
    expr.has_subexpr(|e| {
        matches!(
            e,
            Expr::SvaUntil(..)
                | Expr::SvaSUntil(..)
                | Expr::SvaEventually(_)
                | Expr::SvaSEventually(_)
                | Expr::AF(_)
                | Expr::F(_)
        )
    })
}

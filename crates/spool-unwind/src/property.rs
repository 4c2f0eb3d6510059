//! Unwinding a property into per-timeframe obligations.

use spool_ir::expr::{conjunction, disjunction, Expr};
use spool_smt::solver::Solver;
use tracing::debug;

use crate::errors::UnwindError;
use crate::instantiate::{instantiate, ranged_always_interval};
use crate::lasso::lasso_symbol;
use crate::obligations::Obligations;

fn property_obligations_rec(
    property_expr: &Expr,
    current: usize,
    no_timeframes: usize,
) -> Result<Obligations, UnwindError> {
    if current >= no_timeframes {
        return Err(UnwindError::InvariantViolation {
            timeframe: current,
            bound: no_timeframes,
        });
    }

    match property_expr {
        Expr::AG(op) | Expr::G(op) | Expr::SvaAlways(op) => {
            let mut obligations = Obligations::new();
            for timeframe in current..no_timeframes {
                obligations.merge(property_obligations_rec(op, timeframe, no_timeframes)?);
            }
            Ok(obligations)
        }

        Expr::AF(op) | Expr::F(op) | Expr::SvaSEventually(op) => {
            // Counterexamples to F φ must have a loop; we consider l-k
            // loops with l < k. A counterexample looping back in
            // timeframe k satisfies:
            // (1) There is a loop from timeframe k back to some earlier
            //     state l with current <= l < k.
            // (2) No state j with current <= j <= k to the end of the
            //     lasso satisfies φ.
            let mut obligations = Obligations::new();
            for k in current + 1..no_timeframes {
                for l in current..k {
                    let mut disjuncts = vec![lasso_symbol(l, k).not()];
                    for j in current..=k {
                        disjuncts.push(instantiate(op, j, no_timeframes)?);
                    }
                    obligations.add(k, disjunction(disjuncts));
                }
            }
            Ok(obligations)
        }

        Expr::SvaRangedAlways { lower, upper, op } | Expr::SvaSAlways { lower, upper, op } => {
            let mut obligations = Obligations::new();
            if let Some(range) = ranged_always_interval(lower, upper, no_timeframes)? {
                for timeframe in range {
                    obligations.merge(property_obligations_rec(op, timeframe, no_timeframes)?);
                }
            }
            Ok(obligations)
        }

        // separate obligations for each conjunct
        Expr::And(ops) => {
            let mut obligations = Obligations::new();
            for op in ops {
                obligations.merge(property_obligations_rec(op, current, no_timeframes)?);
            }
            Ok(obligations)
        }

        _ => Ok(Obligations::single(
            current,
            instantiate(property_expr, current, no_timeframes)?,
        )),
    }
}

/// Obligations whose conjunction must hold for `property_expr` to hold
/// along the unrolled trace of `no_timeframes` timeframes.
pub fn property_obligations(
    property_expr: &Expr,
    no_timeframes: usize,
) -> Result<Obligations, UnwindError> {
    property_obligations_rec(property_expr, 0, no_timeframes)
}

/// Map `property_expr` onto a dense vector of per-timeframe handles.
///
/// `result[t]` is `true` where no obligation falls on timeframe `t`, and
/// otherwise the solver handle of the conjunction of the obligations at
/// `t`. The property holds in the model iff all entries hold
/// simultaneously, subject to the lasso constraints.
pub fn property<S: Solver>(
    property_expr: &Expr,
    solver: &mut S,
    no_timeframes: usize,
) -> Result<Vec<Expr>, UnwindError> {
    let obligations = property_obligations(property_expr, no_timeframes)?;

    debug!(
        no_timeframes,
        obligation_timeframes = obligations.map.len(),
        "mapping obligations onto timeframes"
    );

    let mut prop_handles = vec![Expr::True; no_timeframes];
    for (timeframe, exprs) in obligations.map {
        // obligation must have a valid timeframe
        if timeframe >= no_timeframes {
            return Err(UnwindError::InvariantViolation {
                timeframe,
                bound: no_timeframes,
            });
        }
        prop_handles[timeframe] = solver.handle(conjunction(exprs));
    }

    Ok(prop_handles)
}

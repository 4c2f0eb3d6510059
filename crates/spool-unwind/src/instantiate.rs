//! Word-level instantiation: temporal symbols become timeframed symbols
//! `s@t`, and temporal operators unwind into boolean expansions across
//! timeframes.

use spool_ir::expr::{conjunction, disjunction, Expr, Type};

use crate::errors::UnwindError;
use crate::lasso::lasso_symbol;

/// Identifier of `identifier` copied into timeframe `timeframe`.
///
/// The `<id>@<t>` syntax is a contract: downstream tooling parses it.
pub fn timeframe_identifier(timeframe: usize, identifier: &str) -> String {
    format!("{identifier}@{timeframe}")
}

/// Symbol named `identifier` copied into timeframe `timeframe`.
pub fn timeframe_symbol(timeframe: usize, identifier: &str, ty: Type) -> Expr {
    Expr::symbol(timeframe_identifier(timeframe, identifier), ty)
}

fn timeframe_offset(expr: &Expr, context: &'static str) -> Result<usize, UnwindError> {
    expr.as_constant()
        .and_then(|value| usize::try_from(value).ok())
        .ok_or(UnwindError::BoundConversion { context })
}

/// Absolute timeframes `[max(0, lower), min(upper, N-1)]` covered by a
/// ranged always; `None` when the interval is empty.
pub(crate) fn ranged_always_interval(
    lower: &Expr,
    upper: &Expr,
    no_timeframes: usize,
) -> Result<Option<std::ops::RangeInclusive<usize>>, UnwindError> {
    if no_timeframes == 0 {
        return Ok(None);
    }
    let lower = lower.as_constant().ok_or(UnwindError::BoundConversion {
        context: "sva_always from index",
    })?;
    let from = lower.max(0) as usize;
    let last = no_timeframes - 1;
    let to = match upper {
        Expr::Infinity => last as i64,
        upper => {
            let upper = upper.as_constant().ok_or(UnwindError::BoundConversion {
                context: "sva_always to index",
            })?;
            upper.min(last as i64)
        }
    };
    if to < from as i64 {
        Ok(None)
    } else {
        Ok(Some(from..=to as usize))
    }
}

/// Instantiate `expr` at timeframe `current` within the bound
/// `no_timeframes`.
///
/// The result is a boolean expression over timeframed symbols with no
/// remaining temporal operator. Where an expansion would cross the bound,
/// the out-of-range part becomes `true` — sound on negation normal form
/// only. The liveness expansions reference lasso symbols; those are free
/// variables here, defined separately by the lasso-constraint emitter.
pub fn instantiate(
    expr: &Expr,
    current: usize,
    no_timeframes: usize,
) -> Result<Expr, UnwindError> {
    match expr {
        Expr::Symbol { identifier, ty } => Ok(timeframe_symbol(current, identifier, *ty)),

        Expr::NextSymbol { identifier, ty } => {
            if current + 1 >= no_timeframes {
                Err(UnwindError::MalformedExpression {
                    reason: format!(
                        "next({identifier}) has no following timeframe at {current}"
                    ),
                })
            } else {
                Ok(timeframe_symbol(current + 1, identifier, *ty))
            }
        }

        // same as regular implication
        Expr::SvaOverlappedImplication(lhs, rhs) => Ok(Expr::Implies(
            Box::new(instantiate(lhs, current, no_timeframes)?),
            Box::new(instantiate(rhs, current, no_timeframes)?),
        )),

        // right-hand side is shifted by one tick
        Expr::SvaNonOverlappedImplication(lhs, rhs) => {
            let lhs = instantiate(lhs, current, no_timeframes)?;
            let rhs = if current + 1 >= no_timeframes {
                Expr::True // bound exceeded, works on NNF only
            } else {
                instantiate(rhs, current + 1, no_timeframes)?
            };
            Ok(Expr::Implies(Box::new(lhs), Box::new(rhs)))
        }

        // ##n something, or ##[from:to] something
        Expr::SvaCycleDelay { from, to, op } => {
            let from = timeframe_offset(from, "sva_cycle_delay offset")?;
            match to {
                None => {
                    let target = current + from;
                    if target >= no_timeframes {
                        Ok(Expr::True)
                    } else {
                        instantiate(op, target, no_timeframes)
                    }
                }
                Some(to) => {
                    let to = match to.as_ref() {
                        Expr::Infinity => no_timeframes.saturating_sub(1),
                        to => timeframe_offset(to, "sva_cycle_delay offset")?,
                    };
                    // This is an 'or', and we let it fail if the bound is
                    // too small.
                    let mut disjuncts = Vec::new();
                    for offset in from..to {
                        let target = current + offset;
                        if target < no_timeframes {
                            disjuncts.push(instantiate(op, target, no_timeframes)?);
                        }
                    }
                    Ok(disjunction(disjuncts))
                }
            }
        }

        // much like regular 'and'
        Expr::SvaSequenceConcatenation(ops) => {
            let ops = ops
                .iter()
                .map(|op| instantiate(op, current, no_timeframes))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Expr::And(ops))
        }

        Expr::G(op) | Expr::AG(op) | Expr::SvaAlways(op) => {
            let mut conjuncts = Vec::new();
            for timeframe in current..no_timeframes {
                conjuncts.push(instantiate(op, timeframe, no_timeframes)?);
            }
            Ok(conjunction(conjuncts))
        }

        Expr::SvaRangedAlways { lower, upper, op } | Expr::SvaSAlways { lower, upper, op } => {
            let mut conjuncts = Vec::new();
            if let Some(range) = ranged_always_interval(lower, upper, no_timeframes)? {
                for timeframe in range {
                    conjuncts.push(instantiate(op, timeframe, no_timeframes)?);
                }
            }
            Ok(conjunction(conjuncts))
        }

        Expr::X(op) | Expr::AX(op) | Expr::SvaNexttime(op) | Expr::SvaSNexttime(op) => {
            if current + 1 < no_timeframes {
                instantiate(op, current + 1, no_timeframes)
            } else {
                Ok(Expr::True) // works on NNF only
            }
        }

        Expr::F(op) | Expr::AF(op) | Expr::SvaEventually(op) | Expr::SvaSEventually(op) => {
            // The following needs to be satisfied for a counterexample
            // to F φ:
            // (1) There is a loop from the current state i back to some
            //     earlier state k < i.
            // (2) No state j with k <= j <= i on the lasso satisfies φ.
            //
            // We look backwards instead of forwards so that `current` is
            // the last state of the counterexample trace. Trivially true
            // when `current` is zero: a single state cannot show the loop.
            let i = current;
            let mut conjuncts = Vec::new();
            for k in 0..i {
                let mut disjuncts = vec![lasso_symbol(k, i).not()];
                for j in k..=i {
                    disjuncts.push(instantiate(op, j, no_timeframes)?);
                }
                conjuncts.push(disjunction(disjuncts));
            }
            Ok(conjunction(conjuncts))
        }

        // non-overlapping until; a lasso is needed to refute these
        Expr::U(lhs, rhs)
        | Expr::WeakU(lhs, rhs)
        | Expr::SvaUntil(lhs, rhs)
        | Expr::SvaSUntil(lhs, rhs) => {
            // we expand: p U q <=> q || (p && X(p U q))
            let rhs_now = instantiate(rhs, current, no_timeframes)?;
            let mut expansion = instantiate(lhs, current, no_timeframes)?;
            if current + 1 < no_timeframes {
                let unfolded = instantiate(expr, current + 1, no_timeframes)?;
                expansion = Expr::And(vec![expansion, unfolded]);
            }
            Ok(Expr::Or(vec![rhs_now, expansion]))
        }

        Expr::R(lhs, rhs) | Expr::StrongR(lhs, rhs) => {
            // we expand: p R q <=> q && (p || X(p R q))
            let rhs_now = instantiate(rhs, current, no_timeframes)?;
            if current + 1 < no_timeframes {
                let lhs_now = instantiate(lhs, current, no_timeframes)?;
                let unfolded = instantiate(expr, current + 1, no_timeframes)?;
                Ok(Expr::And(vec![
                    rhs_now,
                    Expr::Or(vec![lhs_now, unfolded]),
                ]))
            } else {
                // the next-step disjunct is true at the bound, NNF only
                Ok(rhs_now)
            }
        }

        // overlapping until, rewritten using 'nexttime'
        Expr::SvaUntilWith(lhs, rhs) => {
            let rewritten = Expr::SvaUntil(
                lhs.clone(),
                Box::new(Expr::SvaNexttime(rhs.clone())),
            );
            instantiate(&rewritten, current, no_timeframes)
        }
        Expr::SvaSUntilWith(lhs, rhs) => {
            let rewritten = Expr::SvaSUntil(
                lhs.clone(),
                Box::new(Expr::SvaNexttime(rhs.clone())),
            );
            instantiate(&rewritten, current, no_timeframes)
        }

        Expr::EX(_) | Expr::EF(_) | Expr::EG(_) => Err(UnwindError::UnsupportedProperty),

        other => other.try_map_children(|child| instantiate(child, current, no_timeframes)),
    }
}

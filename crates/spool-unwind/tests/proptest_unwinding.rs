mod common;

use std::collections::BTreeSet;

use common::{module_namespace, MODULE};
use proptest::prelude::*;

use spool_ir::expr::Expr;
use spool_ir::proptest_generators::{
    arb_nnf_input, arb_state_predicate, arb_supported_ctl, arb_supported_ltl, arb_supported_sva,
};
use spool_ir::temporal::{has_temporal_operator, is_temporal_operator};
use spool_smt::backends::recording::RecordingSolver;
use spool_unwind::instantiate::instantiate;
use spool_unwind::lasso::lasso_constraints;
use spool_unwind::nnf::property_nnf;
use spool_unwind::obligations::Obligations;
use spool_unwind::property::property_obligations;

fn arb_supported_property() -> impl Strategy<Value = Expr> {
    prop_oneof![
        arb_supported_ltl(),
        arb_supported_ctl(),
        arb_supported_sva(),
    ]
}

fn negation_sits_only_at_atoms(expr: &Expr) -> bool {
    match expr {
        Expr::Not(op) => {
            !is_temporal_operator(op)
                && !matches!(
                    op.as_ref(),
                    Expr::And(_) | Expr::Or(_) | Expr::Implies(..) | Expr::Not(_)
                )
        }
        other => other
            .children()
            .into_iter()
            .all(negation_sits_only_at_atoms),
    }
}

fn collect_lasso_references(expr: &Expr, into: &mut BTreeSet<String>) {
    if let Expr::Symbol { identifier, .. } = expr {
        if identifier.starts_with("lasso::") {
            into.insert(identifier.clone());
        }
    }
    for child in expr.children() {
        collect_lasso_references(child, into);
    }
}

proptest! {
    // Unwinding a supported property leaves no temporal operator and no
    // next-symbol behind, and every obligation lands inside the bound.
    #[test]
    fn unwound_obligations_are_boolean_and_in_bound(
        phi in arb_supported_property(),
        no_timeframes in 1..=4usize,
    ) {
        let normalized = property_nnf(&phi);
        let obligations = property_obligations(&normalized, no_timeframes)
            .expect("supported properties unwind");

        for (timeframe, exprs) in &obligations.map {
            prop_assert!(*timeframe < no_timeframes);
            for expr in exprs {
                prop_assert!(!has_temporal_operator(expr), "temporal residue in {expr}");
                prop_assert!(
                    !expr.has_subexpr(|e| matches!(e, Expr::NextSymbol { .. })),
                    "next-symbol residue in {expr}"
                );
            }
        }
    }

    // After the rewrite, negation appears only immediately around atoms.
    #[test]
    fn nnf_pushes_every_negation_to_an_atom(phi in arb_nnf_input()) {
        let normalized = property_nnf(&phi);
        prop_assert!(negation_sits_only_at_atoms(&normalized), "stuck negation in {normalized}");
    }

    #[test]
    fn nnf_is_idempotent(phi in arb_nnf_input()) {
        let once = property_nnf(&phi);
        prop_assert_eq!(property_nnf(&once), once);
    }

    #[test]
    fn double_negation_vanishes_under_nnf(phi in arb_nnf_input()) {
        let doubled = phi.clone().not().not();
        prop_assert_eq!(property_nnf(&doubled), property_nnf(&phi));
    }

    // Every lasso symbol an eventuality obligation references is pinned by
    // the lasso-constraint emitter.
    #[test]
    fn referenced_lassos_are_always_defined(
        phi in arb_state_predicate(),
        no_timeframes in 2..=4usize,
        flavor in 0..3usize,
    ) {
        let liveness = match flavor {
            0 => phi.eventually(),
            1 => phi.af(),
            _ => phi.sva_s_eventually().sva_always(),
        };
        let obligations = property_obligations(&liveness, no_timeframes)
            .expect("liveness properties unwind");

        let mut referenced = BTreeSet::new();
        for exprs in obligations.map.values() {
            for expr in exprs {
                collect_lasso_references(expr, &mut referenced);
            }
        }

        let mut solver = RecordingSolver::new();
        lasso_constraints(&mut solver, no_timeframes, &module_namespace(), MODULE)
            .expect("module m is declared");
        let mut defined = BTreeSet::new();
        for assertion in solver.assertions() {
            if let Expr::Equal(lhs, _) = assertion {
                collect_lasso_references(lhs, &mut defined);
            }
        }

        prop_assert!(referenced.is_subset(&defined));
    }

    // A property without temporal operators is exactly one obligation at
    // timeframe zero.
    #[test]
    fn state_predicates_obligate_timeframe_zero_only(
        phi in arb_state_predicate(),
        no_timeframes in 1..=4usize,
    ) {
        let obligations = property_obligations(&phi, no_timeframes)
            .expect("state predicates unwind");
        let instantiated = instantiate(&phi, 0, no_timeframes)
            .expect("state predicates instantiate");
        prop_assert_eq!(obligations, Obligations::single(0, instantiated));
    }
}

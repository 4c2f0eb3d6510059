//! Proptest strategies for generating well-formed property expressions.

use proptest::prelude::*;

use crate::expr::{Expr, Type};

/// Strategy for a boolean state predicate over the variables `p`, `q`, `r`.
///
/// Generated predicates contain no temporal operator: leaves are symbols
/// and boolean literals, inner nodes are `not`, `and`, `or`, `implies`.
pub fn arb_state_predicate() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        Just(Expr::symbol("p", Type::Bool)),
        Just(Expr::symbol("q", Type::Bool)),
        Just(Expr::symbol("r", Type::Bool)),
        Just(Expr::True),
        Just(Expr::False),
    ];
    leaf.prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::and(vec![a, b])),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::or(vec![a, b])),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.implies(b)),
            inner.prop_map(|e| e.not()),
        ]
    })
}

/// Strategy for an LTL property the bounded model checker supports:
/// `X`-nestings of state predicates, `F`, `G`, and `G F` over those, and
/// conjunctions of such properties.
pub fn arb_supported_ltl() -> impl Strategy<Value = Expr> {
    let x_nested = (arb_state_predicate(), 0..3usize)
        .prop_map(|(e, depth)| (0..depth).fold(e, |acc, _| acc.next()))
        .boxed();
    let single = prop_oneof![
        x_nested.clone(),
        x_nested.clone().prop_map(|e| e.eventually()),
        x_nested.clone().prop_map(|e| e.globally()),
        x_nested.prop_map(|e| e.eventually().globally()),
    ];
    prop_oneof![
        single.clone(),
        (single.clone(), single).prop_map(|(a, b)| Expr::and(vec![a, b])),
    ]
}

/// Strategy for a CTL property in the supported ACTL fragment.
pub fn arb_supported_ctl() -> impl Strategy<Value = Expr> {
    arb_state_predicate().prop_recursive(3, 8, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| e.ax()),
            inner.clone().prop_map(|e| e.af()),
            inner.clone().prop_map(|e| e.ag()),
            (inner.clone(), inner).prop_map(|(a, b)| Expr::and(vec![a, b])),
        ]
    })
}

/// Strategy for an SVA property the bounded model checker supports.
///
/// Includes `always` over richer temporal bodies (untils, eventually,
/// cycle delays), which the classifier accepts unconditionally.
pub fn arb_supported_sva() -> impl Strategy<Value = Expr> {
    let state = arb_state_predicate().boxed();
    let body = prop_oneof![
        state.clone(),
        (state.clone(), state.clone()).prop_map(|(a, b)| a.sva_until(b)),
        (state.clone(), state.clone()).prop_map(|(a, b)| a.sva_s_until(b)),
        state.clone().prop_map(|e| e.sva_s_eventually()),
        state.clone().prop_map(|e| e.sva_nexttime()),
        (0..3i64, state.clone()).prop_map(|(from, e)| {
            Expr::sva_cycle_delay(Expr::constant(from, Type::Integer), None, e)
        }),
        (0..2i64, 2..4i64, state.clone()).prop_map(|(from, to, e)| {
            Expr::sva_cycle_delay(
                Expr::constant(from, Type::Integer),
                Some(Expr::constant(to, Type::Integer)),
                e,
            )
        }),
        (state.clone(), state.clone())
            .prop_map(|(a, b)| a.sva_overlapped_implication(b)),
        (state.clone(), state.clone())
            .prop_map(|(a, b)| a.sva_non_overlapped_implication(b)),
    ];
    prop_oneof![
        state.clone(),
        body.clone().prop_map(|e| e.sva_always()),
        (0..2i64, body.clone()).prop_map(|(lower, e)| {
            Expr::sva_ranged_always(Expr::constant(lower, Type::Integer), Expr::Infinity, e)
        }),
        (0..2i64, 2..4i64, body).prop_map(|(lower, upper, e)| {
            Expr::sva_ranged_always(
                Expr::constant(lower, Type::Integer),
                Expr::constant(upper, Type::Integer),
                e,
            )
        }),
        state.clone().prop_map(|e| e.sva_nexttime()),
        state.prop_map(|e| e.sva_s_nexttime()),
    ]
}

/// Strategy for negation-normal-form input: arbitrary temporal structure
/// with negations sprinkled throughout, suitable for exercising the
/// rewriter's duals and idempotence.
pub fn arb_nnf_input() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        Just(Expr::symbol("p", Type::Bool)),
        Just(Expr::symbol("q", Type::Bool)),
        Just(Expr::True),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| e.not()),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::and(vec![a, b])),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::or(vec![a, b])),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.implies(b)),
            inner.clone().prop_map(|e| e.next()),
            inner.clone().prop_map(|e| e.eventually()),
            inner.clone().prop_map(|e| e.globally()),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.until(b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.release(b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.sva_until(b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.sva_s_until(b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.sva_until_with(b)),
            (inner.clone(), inner).prop_map(|(a, b)| a.sva_s_until_with(b)),
        ]
    })
}

//! Negation normal form for temporal logic.
//!
//! The unwinding is only sound on negation normal form for the unbounded
//! operators, so negations are pushed inward through operator duals until
//! they sit immediately around atoms.

use spool_ir::expr::Expr;

/// Push one negation over `expr` inward, if a rewrite applies.
///
/// Returns the negation-normal form of `¬expr`, or `None` when no rule
/// applies and the negation stays where it is (atomic case).
pub fn negate_property_node(expr: &Expr) -> Option<Expr> {
    match expr {
        // ¬(φ U ψ) ≡ (¬φ R ¬ψ)
        Expr::U(lhs, rhs) => Some(Expr::R(
            Box::new(lhs.as_ref().clone().not()),
            Box::new(rhs.as_ref().clone().not()),
        )),
        // ¬(φ R ψ) ≡ (¬φ U ¬ψ)
        Expr::R(lhs, rhs) => Some(Expr::U(
            Box::new(lhs.as_ref().clone().not()),
            Box::new(rhs.as_ref().clone().not()),
        )),
        // ¬G φ ≡ F ¬φ
        Expr::G(op) => Some(Expr::F(Box::new(op.as_ref().clone().not()))),
        // ¬F φ ≡ G ¬φ
        Expr::F(op) => Some(Expr::G(Box::new(op.as_ref().clone().not()))),
        // ¬X φ ≡ X ¬φ
        Expr::X(op) => Some(Expr::X(Box::new(op.as_ref().clone().not()))),
        // ¬(a -> b) ≡ a && ¬b
        Expr::Implies(lhs, rhs) => Some(Expr::And(vec![
            lhs.as_ref().clone(),
            rhs.as_ref().clone().not(),
        ])),
        Expr::And(ops) => Some(Expr::Or(ops.iter().map(|op| op.clone().not()).collect())),
        Expr::Or(ops) => Some(Expr::And(ops.iter().map(|op| op.clone().not()).collect())),
        Expr::Not(op) => Some(op.as_ref().clone()),
        // ¬(φ W ψ) ≡ (¬φ strongR ¬ψ)
        Expr::SvaUntil(lhs, rhs) => Some(Expr::StrongR(
            Box::new(lhs.as_ref().clone().not()),
            Box::new(rhs.as_ref().clone().not()),
        )),
        // ¬(φ U ψ) ≡ (¬φ R ¬ψ)
        Expr::SvaSUntil(lhs, rhs) => Some(Expr::R(
            Box::new(lhs.as_ref().clone().not()),
            Box::new(rhs.as_ref().clone().not()),
        )),
        // LHS and RHS swap.
        Expr::SvaUntilWith(lhs, rhs) => Some(Expr::U(
            Box::new(rhs.as_ref().clone().not()),
            Box::new(lhs.as_ref().clone().not()),
        )),
        // LHS and RHS swap.
        Expr::SvaSUntilWith(lhs, rhs) => Some(Expr::WeakU(
            Box::new(rhs.as_ref().clone().not()),
            Box::new(lhs.as_ref().clone().not()),
        )),
        _ => None,
    }
}

/// Rewrite `expr` into negation normal form.
///
/// Negations remain only immediately around atoms. Idempotent; never fails
/// on well-formed input.
pub fn property_nnf(expr: &Expr) -> Expr {
    match expr {
        Expr::Not(op) => match negate_property_node(op) {
            Some(rewritten) => property_nnf(&rewritten),
            None => expr.clone(),
        },
        other => other.map_children(property_nnf),
    }
}

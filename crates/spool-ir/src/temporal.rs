//! Operator and dialect classification over property expressions.

use crate::expr::Expr;

/// True for the LTL temporal operators, including the release/until forms
/// negation normal form introduces.
pub fn is_ltl_operator(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::X(_)
            | Expr::F(_)
            | Expr::G(_)
            | Expr::U(..)
            | Expr::R(..)
            | Expr::StrongR(..)
            | Expr::WeakU(..)
    )
}

/// True for the CTL temporal operators, universal and existential.
pub fn is_ctl_operator(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::AX(_) | Expr::AF(_) | Expr::AG(_) | Expr::EX(_) | Expr::EF(_) | Expr::EG(_)
    )
}

/// True for the SVA temporal operators.
pub fn is_sva_operator(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::SvaAlways(_)
            | Expr::SvaRangedAlways { .. }
            | Expr::SvaSAlways { .. }
            | Expr::SvaNexttime(_)
            | Expr::SvaSNexttime(_)
            | Expr::SvaEventually(_)
            | Expr::SvaSEventually(_)
            | Expr::SvaUntil(..)
            | Expr::SvaSUntil(..)
            | Expr::SvaUntilWith(..)
            | Expr::SvaSUntilWith(..)
            | Expr::SvaCycleDelay { .. }
            | Expr::SvaSequenceConcatenation(_)
            | Expr::SvaOverlappedImplication(..)
            | Expr::SvaNonOverlappedImplication(..)
    )
}

pub fn is_temporal_operator(expr: &Expr) -> bool {
    is_ltl_operator(expr) || is_ctl_operator(expr) || is_sva_operator(expr)
}

pub fn has_temporal_operator(expr: &Expr) -> bool {
    expr.has_subexpr(is_temporal_operator)
}

pub fn has_ctl_operator(expr: &Expr) -> bool {
    expr.has_subexpr(is_ctl_operator)
}

/// True when every temporal operator in the tree is an LTL operator.
/// Vacuously true for state predicates.
pub fn is_ltl(expr: &Expr) -> bool {
    !expr.has_subexpr(|e| is_ctl_operator(e) || is_sva_operator(e))
}

/// True when the tree contains a CTL operator and every temporal operator
/// in it is a CTL operator.
pub fn is_ctl(expr: &Expr) -> bool {
    has_ctl_operator(expr) && !expr.has_subexpr(|e| is_ltl_operator(e) || is_sva_operator(e))
}

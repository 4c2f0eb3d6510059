//! Support predicate: which properties the bounded model checker can
//! soundly unwind.

use spool_ir::expr::Expr;
use spool_ir::temporal::{
    has_ctl_operator, has_temporal_operator, is_ctl, is_ltl, is_ltl_operator, is_temporal_operator,
};

/// True when bounded model checking can soundly handle `expr`.
///
/// Dispatches on the dialect the property is written in, determined by
/// which operator kinds appear.
pub fn supports_property(expr: &Expr) -> bool {
    if is_ltl(expr) {
        supports_ltl_property(expr)
    } else if is_ctl(expr) {
        supports_ctl_property(expr)
    } else {
        supports_sva_property(expr)
    }
}

/// We support
/// * formulas that contain no temporal operator besides `X`
/// * `F φ`, where φ contains no temporal operator besides `X`
/// * `G φ`, where φ contains no temporal operator besides `X`
/// * `G F φ`, where φ contains no temporal operator besides `X`
/// * conjunctions of supported LTL properties
fn supports_ltl_property(expr: &Expr) -> bool {
    let non_x_ltl_operator = |e: &Expr| is_ltl_operator(e) && !matches!(e, Expr::X(_));

    if !expr.has_subexpr(non_x_ltl_operator) {
        true
    } else {
        match expr {
            Expr::F(op) => !op.has_subexpr(non_x_ltl_operator),
            Expr::G(op) => match op.as_ref() {
                Expr::F(inner) => !inner.has_subexpr(non_x_ltl_operator),
                other => !other.has_subexpr(non_x_ltl_operator),
            },
            Expr::And(ops) => ops.iter().all(supports_ltl_property),
            _ => false,
        }
    }
}

/// We map a subset of ACTL to LTL, following
/// Monika Maidl, "The common fragment of CTL and LTL".
///
/// Allowed are state predicates, conjunctions of allowed formulas, and
/// `AX φ` / `AF φ` / `AG φ` where φ is allowed.
fn supports_ctl_property(expr: &Expr) -> bool {
    if !has_ctl_operator(expr) {
        return true;
    }
    match expr {
        Expr::And(ops) => ops.iter().all(supports_ctl_property),
        Expr::AX(op) | Expr::AF(op) | Expr::AG(op) => supports_ctl_property(op),
        _ => false,
    }
}

fn supports_sva_property(expr: &Expr) -> bool {
    if !is_temporal_operator(expr) {
        if !has_temporal_operator(expr) {
            // initial state only
            return true;
        }
        return match expr {
            Expr::And(ops) | Expr::Or(ops) => ops.iter().all(supports_property),
            Expr::Implies(lhs, rhs) => supports_property(lhs) && supports_property(rhs),
            _ => false,
        };
    }
    match expr {
        Expr::SvaCycleDelay { op, .. } => !has_temporal_operator(op),
        Expr::SvaNexttime(op) | Expr::SvaSNexttime(op) => !has_temporal_operator(op),
        Expr::SvaAlways(_) | Expr::SvaRangedAlways { .. } => true,
        _ => false,
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
    fn state_predicates_are_supported() {
        assert!(supports_property(&p()));
        assert!(supports_property(&p().implies(q().not())));
    }

    #[test]
    fn nested_next_is_supported() {
        assert!(supports_property(&p().next().next().next()));
    }

    #[test]
    fn eventually_and_globally_over_next_are_supported() {
        assert!(supports_property(&p().next().eventually()));
        assert!(supports_property(&p().next().globally()));
        assert!(supports_property(&p().eventually().globally()));
    }

    #[test]
    fn globally_over_until_is_rejected() {
        assert!(!supports_property(&p().until(q()).globally()));
        assert!(!supports_property(&p().until(q())));
        assert!(!supports_property(&p().release(q())));
    }

    #[test]
    fn eventually_under_eventually_is_rejected() {
        assert!(!supports_property(&p().eventually().eventually()));
    }

    #[test]
    fn conjunction_of_supported_ltl_is_supported() {
        let phi = Expr::and(vec![p().globally(), q().eventually()]);
        assert!(supports_property(&phi));
        let psi = Expr::and(vec![p().globally(), q().until(p())]);
        assert!(!supports_property(&psi));
    }

    #[test]
    fn actl_fragment_is_supported() {
        assert!(supports_property(&p().ag()));
        assert!(supports_property(&p().af().ax()));
        assert!(supports_property(&Expr::and(vec![p().ag(), q().af()])));
    }

    #[test]
    fn existential_ctl_is_rejected() {
        assert!(!supports_property(&Expr::EF(Box::new(p()))));
        assert!(!supports_property(&Expr::AG(Box::new(Expr::EX(Box::new(
            p()
        ))))));
    }

    #[test]
    fn sva_always_is_supported_regardless_of_body() {
        assert!(supports_property(&p().sva_always()));
        assert!(supports_property(&p().sva_until(q()).sva_always()));
        assert!(supports_property(&Expr::sva_ranged_always(
            Expr::constant(2, Type::Integer),
            Expr::Infinity,
            p().sva_s_eventually(),
        )));
    }

    #[test]
    fn sva_s_always_is_rejected_at_top_level() {
        let phi = Expr::sva_s_always(
            Expr::constant(0, Type::Integer),
            Expr::constant(3, Type::Integer),
            p(),
        );
        assert!(!supports_property(&phi));
    }

    #[test]
    fn sva_nexttime_requires_a_propositional_operand() {
        assert!(supports_property(&p().sva_nexttime()));
        assert!(supports_property(&p().sva_s_nexttime()));
        assert!(!supports_property(&p().sva_nexttime().sva_nexttime()));
    }

    #[test]
    fn cycle_delay_requires_a_propositional_body() {
        let ok = Expr::sva_cycle_delay(Expr::constant(2, Type::Integer), None, p());
        assert!(supports_property(&ok));
        let nested = Expr::sva_cycle_delay(
            Expr::constant(2, Type::Integer),
            None,
            p().sva_nexttime(),
        );
        assert!(!supports_property(&nested));
    }

    #[test]
    fn boolean_connectives_recurse_through_the_dispatcher() {
        // implies over one SVA side and one propositional side
        let phi = p().implies(q().sva_nexttime());
        assert!(supports_property(&phi));
        let bad = p().implies(q().sva_until(p()));
        assert!(!supports_property(&bad));
    }

    #[test]
    fn bare_sva_until_is_rejected() {
        assert!(!supports_property(&p().sva_until(q())));
        assert!(!supports_property(&p().sva_s_eventually()));
    }
}

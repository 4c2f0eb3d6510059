use std::fmt;

/// Type carried by symbols and constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    /// Bit-vector of the given width.
    BitVector(u32),
    /// Unbounded integer, used for range bounds.
    Integer,
}

/// Property expression tree.
///
/// One variant per operator kind; each variant carries its fixed children.
/// Trees are immutable values: the unwinding passes consume their input and
/// return freshly constructed trees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    True,
    False,
    /// Named variable of the transition system.
    Symbol { identifier: String, ty: Type },
    /// Value of a variable one tick later. Only legal as instantiator input;
    /// the instantiator eliminates it.
    NextSymbol { identifier: String, ty: Type },
    Constant { value: i64, ty: Type },
    /// Unbounded upper end of an SVA range.
    Infinity,

    // Boolean connectives
    Not(Box<Expr>),
    And(Vec<Expr>),
    Or(Vec<Expr>),
    Implies(Box<Expr>, Box<Expr>),
    Equal(Box<Expr>, Box<Expr>),

    // LTL
    X(Box<Expr>),
    F(Box<Expr>),
    G(Box<Expr>),
    U(Box<Expr>, Box<Expr>),
    R(Box<Expr>, Box<Expr>),
    /// Strong release, introduced by negation normal form.
    StrongR(Box<Expr>, Box<Expr>),
    /// Weak until, introduced by negation normal form.
    WeakU(Box<Expr>, Box<Expr>),

    // CTL universal fragment
    AX(Box<Expr>),
    AF(Box<Expr>),
    AG(Box<Expr>),
    // CTL existential forms, never supported by the unwinder
    EX(Box<Expr>),
    EF(Box<Expr>),
    EG(Box<Expr>),

    // SVA temporal operators
    SvaAlways(Box<Expr>),
    SvaRangedAlways {
        lower: Box<Expr>,
        upper: Box<Expr>,
        op: Box<Expr>,
    },
    SvaSAlways {
        lower: Box<Expr>,
        upper: Box<Expr>,
        op: Box<Expr>,
    },
    SvaNexttime(Box<Expr>),
    SvaSNexttime(Box<Expr>),
    SvaEventually(Box<Expr>),
    SvaSEventually(Box<Expr>),
    /// Weak until, non-overlapping.
    SvaUntil(Box<Expr>, Box<Expr>),
    /// Strong until, non-overlapping.
    SvaSUntil(Box<Expr>, Box<Expr>),
    /// Weak until, overlapping.
    SvaUntilWith(Box<Expr>, Box<Expr>),
    /// Strong until, overlapping.
    SvaSUntilWith(Box<Expr>, Box<Expr>),
    /// `##from body` when `to` is absent, `##[from:to] body` otherwise.
    SvaCycleDelay {
        from: Box<Expr>,
        to: Option<Box<Expr>>,
        op: Box<Expr>,
    },
    SvaSequenceConcatenation(Vec<Expr>),
    SvaOverlappedImplication(Box<Expr>, Box<Expr>),
    SvaNonOverlappedImplication(Box<Expr>, Box<Expr>),
}

#[allow(clippy::should_implement_trait)]
impl Expr {
    pub fn symbol(identifier: impl Into<String>, ty: Type) -> Self {
        Expr::Symbol {
            identifier: identifier.into(),
            ty,
        }
    }

    pub fn next_symbol(identifier: impl Into<String>, ty: Type) -> Self {
        Expr::NextSymbol {
            identifier: identifier.into(),
            ty,
        }
    }

    pub fn constant(value: i64, ty: Type) -> Self {
        Expr::Constant { value, ty }
    }

    pub fn not(self) -> Self {
        Expr::Not(Box::new(self))
    }

    pub fn and(operands: Vec<Expr>) -> Self {
        Expr::And(operands)
    }

    pub fn or(operands: Vec<Expr>) -> Self {
        Expr::Or(operands)
    }

    pub fn implies(self, other: Expr) -> Self {
        Expr::Implies(Box::new(self), Box::new(other))
    }

    pub fn eq(self, other: Expr) -> Self {
        Expr::Equal(Box::new(self), Box::new(other))
    }

    pub fn next(self) -> Self {
        Expr::X(Box::new(self))
    }

    pub fn eventually(self) -> Self {
        Expr::F(Box::new(self))
    }

    pub fn globally(self) -> Self {
        Expr::G(Box::new(self))
    }

    pub fn until(self, other: Expr) -> Self {
        Expr::U(Box::new(self), Box::new(other))
    }

    pub fn release(self, other: Expr) -> Self {
        Expr::R(Box::new(self), Box::new(other))
    }

    pub fn ax(self) -> Self {
        Expr::AX(Box::new(self))
    }

    pub fn af(self) -> Self {
        Expr::AF(Box::new(self))
    }

    pub fn ag(self) -> Self {
        Expr::AG(Box::new(self))
    }

    pub fn sva_always(self) -> Self {
        Expr::SvaAlways(Box::new(self))
    }

    pub fn sva_ranged_always(lower: Expr, upper: Expr, op: Expr) -> Self {
        Expr::SvaRangedAlways {
            lower: Box::new(lower),
            upper: Box::new(upper),
            op: Box::new(op),
        }
    }

    pub fn sva_s_always(lower: Expr, upper: Expr, op: Expr) -> Self {
        Expr::SvaSAlways {
            lower: Box::new(lower),
            upper: Box::new(upper),
            op: Box::new(op),
        }
    }

    pub fn sva_nexttime(self) -> Self {
        Expr::SvaNexttime(Box::new(self))
    }

    pub fn sva_s_nexttime(self) -> Self {
        Expr::SvaSNexttime(Box::new(self))
    }

    pub fn sva_eventually(self) -> Self {
        Expr::SvaEventually(Box::new(self))
    }

    pub fn sva_s_eventually(self) -> Self {
        Expr::SvaSEventually(Box::new(self))
    }

    pub fn sva_until(self, other: Expr) -> Self {
        Expr::SvaUntil(Box::new(self), Box::new(other))
    }

    pub fn sva_s_until(self, other: Expr) -> Self {
        Expr::SvaSUntil(Box::new(self), Box::new(other))
    }

    pub fn sva_until_with(self, other: Expr) -> Self {
        Expr::SvaUntilWith(Box::new(self), Box::new(other))
    }

    pub fn sva_s_until_with(self, other: Expr) -> Self {
        Expr::SvaSUntilWith(Box::new(self), Box::new(other))
    }

    pub fn sva_cycle_delay(from: Expr, to: Option<Expr>, op: Expr) -> Self {
        Expr::SvaCycleDelay {
            from: Box::new(from),
            to: to.map(Box::new),
            op: Box::new(op),
        }
    }

    pub fn sva_overlapped_implication(self, other: Expr) -> Self {
        Expr::SvaOverlappedImplication(Box::new(self), Box::new(other))
    }

    pub fn sva_non_overlapped_implication(self, other: Expr) -> Self {
        Expr::SvaNonOverlappedImplication(Box::new(self), Box::new(other))
    }

    /// Numeric value of this expression, when it is a constant.
    pub fn as_constant(&self) -> Option<i64> {
        match self {
            Expr::Constant { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Direct children in operand order, range bounds included.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::True
            | Expr::False
            | Expr::Symbol { .. }
            | Expr::NextSymbol { .. }
            | Expr::Constant { .. }
            | Expr::Infinity => Vec::new(),

            Expr::Not(op)
            | Expr::X(op)
            | Expr::F(op)
            | Expr::G(op)
            | Expr::AX(op)
            | Expr::AF(op)
            | Expr::AG(op)
            | Expr::EX(op)
            | Expr::EF(op)
            | Expr::EG(op)
            | Expr::SvaAlways(op)
            | Expr::SvaNexttime(op)
            | Expr::SvaSNexttime(op)
            | Expr::SvaEventually(op)
            | Expr::SvaSEventually(op) => vec![op],

            Expr::Implies(lhs, rhs)
            | Expr::Equal(lhs, rhs)
            | Expr::U(lhs, rhs)
            | Expr::R(lhs, rhs)
            | Expr::StrongR(lhs, rhs)
            | Expr::WeakU(lhs, rhs)
            | Expr::SvaUntil(lhs, rhs)
            | Expr::SvaSUntil(lhs, rhs)
            | Expr::SvaUntilWith(lhs, rhs)
            | Expr::SvaSUntilWith(lhs, rhs)
            | Expr::SvaOverlappedImplication(lhs, rhs)
            | Expr::SvaNonOverlappedImplication(lhs, rhs) => vec![lhs, rhs],

            Expr::And(ops) | Expr::Or(ops) | Expr::SvaSequenceConcatenation(ops) => {
                ops.iter().collect()
            }

            Expr::SvaRangedAlways { lower, upper, op } | Expr::SvaSAlways { lower, upper, op } => {
                vec![lower, upper, op]
            }

            Expr::SvaCycleDelay { from, to, op } => match to {
                Some(to) => vec![from, to, op],
                None => vec![from, op],
            },
        }
    }

    /// True when `pred` holds for this expression or any subexpression.
    pub fn has_subexpr(&self, pred: impl Fn(&Expr) -> bool + Copy) -> bool {
        pred(self) || self.children().into_iter().any(|c| c.has_subexpr(pred))
    }

    /// Rebuild this node with `f` applied to every direct child.
    pub fn map_children(&self, mut f: impl FnMut(&Expr) -> Expr) -> Expr {
        let rebuilt: Result<Expr, std::convert::Infallible> =
            self.try_map_children(|e| Ok(f(e)));
        match rebuilt {
            Ok(expr) => expr,
            Err(never) => match never {},
        }
    }

    /// Rebuild this node with `f` applied to every direct child, stopping at
    /// the first error.
    pub fn try_map_children<E>(
        &self,
        mut f: impl FnMut(&Expr) -> Result<Expr, E>,
    ) -> Result<Expr, E> {
        let unary = |op: Result<Expr, E>| op.map(Box::new);

        Ok(match self {
            Expr::True
            | Expr::False
            | Expr::Symbol { .. }
            | Expr::NextSymbol { .. }
            | Expr::Constant { .. }
            | Expr::Infinity => self.clone(),

            Expr::Not(op) => Expr::Not(unary(f(op))?),
            Expr::And(ops) => Expr::And(ops.iter().map(&mut f).collect::<Result<_, E>>()?),
            Expr::Or(ops) => Expr::Or(ops.iter().map(&mut f).collect::<Result<_, E>>()?),
            Expr::Implies(lhs, rhs) => Expr::Implies(unary(f(lhs))?, unary(f(rhs))?),
            Expr::Equal(lhs, rhs) => Expr::Equal(unary(f(lhs))?, unary(f(rhs))?),

            Expr::X(op) => Expr::X(unary(f(op))?),
            Expr::F(op) => Expr::F(unary(f(op))?),
            Expr::G(op) => Expr::G(unary(f(op))?),
            Expr::U(lhs, rhs) => Expr::U(unary(f(lhs))?, unary(f(rhs))?),
            Expr::R(lhs, rhs) => Expr::R(unary(f(lhs))?, unary(f(rhs))?),
            Expr::StrongR(lhs, rhs) => Expr::StrongR(unary(f(lhs))?, unary(f(rhs))?),
            Expr::WeakU(lhs, rhs) => Expr::WeakU(unary(f(lhs))?, unary(f(rhs))?),

            Expr::AX(op) => Expr::AX(unary(f(op))?),
            Expr::AF(op) => Expr::AF(unary(f(op))?),
            Expr::AG(op) => Expr::AG(unary(f(op))?),
            Expr::EX(op) => Expr::EX(unary(f(op))?),
            Expr::EF(op) => Expr::EF(unary(f(op))?),
            Expr::EG(op) => Expr::EG(unary(f(op))?),

            Expr::SvaAlways(op) => Expr::SvaAlways(unary(f(op))?),
            Expr::SvaRangedAlways { lower, upper, op } => Expr::SvaRangedAlways {
                lower: unary(f(lower))?,
                upper: unary(f(upper))?,
                op: unary(f(op))?,
            },
            Expr::SvaSAlways { lower, upper, op } => Expr::SvaSAlways {
                lower: unary(f(lower))?,
                upper: unary(f(upper))?,
                op: unary(f(op))?,
            },
            Expr::SvaNexttime(op) => Expr::SvaNexttime(unary(f(op))?),
            Expr::SvaSNexttime(op) => Expr::SvaSNexttime(unary(f(op))?),
            Expr::SvaEventually(op) => Expr::SvaEventually(unary(f(op))?),
            Expr::SvaSEventually(op) => Expr::SvaSEventually(unary(f(op))?),
            Expr::SvaUntil(lhs, rhs) => Expr::SvaUntil(unary(f(lhs))?, unary(f(rhs))?),
            Expr::SvaSUntil(lhs, rhs) => Expr::SvaSUntil(unary(f(lhs))?, unary(f(rhs))?),
            Expr::SvaUntilWith(lhs, rhs) => Expr::SvaUntilWith(unary(f(lhs))?, unary(f(rhs))?),
            Expr::SvaSUntilWith(lhs, rhs) => Expr::SvaSUntilWith(unary(f(lhs))?, unary(f(rhs))?),
            Expr::SvaCycleDelay { from, to, op } => Expr::SvaCycleDelay {
                from: unary(f(from))?,
                to: match to {
                    Some(to) => Some(unary(f(to))?),
                    None => None,
                },
                op: unary(f(op))?,
            },
            Expr::SvaSequenceConcatenation(ops) => {
                Expr::SvaSequenceConcatenation(ops.iter().map(&mut f).collect::<Result<_, E>>()?)
            }
            Expr::SvaOverlappedImplication(lhs, rhs) => {
                Expr::SvaOverlappedImplication(unary(f(lhs))?, unary(f(rhs))?)
            }
            Expr::SvaNonOverlappedImplication(lhs, rhs) => {
                Expr::SvaNonOverlappedImplication(unary(f(lhs))?, unary(f(rhs))?)
            }
        })
    }
}

/// Conjunction of `operands`: `true` when empty, the sole operand when
/// singleton, `and` otherwise.
pub fn conjunction(mut operands: Vec<Expr>) -> Expr {
    match operands.len() {
        0 => Expr::True,
        1 => operands.remove(0),
        _ => Expr::And(operands),
    }
}

/// Disjunction of `operands`: `false` when empty, the sole operand when
/// singleton, `or` otherwise.
pub fn disjunction(mut operands: Vec<Expr>) -> Expr {
    match operands.len() {
        0 => Expr::False,
        1 => operands.remove(0),
        _ => Expr::Or(operands),
    }
}

/// Wraps composite operands in parentheses when rendered.
struct Operand<'a>(&'a Expr);

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let atomic = match self.0 {
            Expr::Not(op) => op.children().is_empty(),
            other => other.children().is_empty(),
        };
        if atomic {
            write!(f, "{}", self.0)
        } else {
            write!(f, "({})", self.0)
        }
    }
}

fn join(f: &mut fmt::Formatter<'_>, ops: &[Expr], separator: &str) -> fmt::Result {
    for (idx, op) in ops.iter().enumerate() {
        if idx > 0 {
            write!(f, "{separator}")?;
        }
        write!(f, "{}", Operand(op))?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::True => write!(f, "true"),
            Expr::False => write!(f, "false"),
            Expr::Symbol { identifier, .. } => write!(f, "{identifier}"),
            Expr::NextSymbol { identifier, .. } => write!(f, "next({identifier})"),
            Expr::Constant { value, .. } => write!(f, "{value}"),
            Expr::Infinity => write!(f, "$"),

            Expr::Not(op) => write!(f, "!{}", Operand(op)),
            Expr::And(ops) => join(f, ops, " && "),
            Expr::Or(ops) => join(f, ops, " || "),
            Expr::Implies(lhs, rhs) => write!(f, "{} -> {}", Operand(lhs), Operand(rhs)),
            Expr::Equal(lhs, rhs) => write!(f, "{} == {}", Operand(lhs), Operand(rhs)),

            Expr::X(op) => write!(f, "X {}", Operand(op)),
            Expr::F(op) => write!(f, "F {}", Operand(op)),
            Expr::G(op) => write!(f, "G {}", Operand(op)),
            Expr::U(lhs, rhs) => write!(f, "{} U {}", Operand(lhs), Operand(rhs)),
            Expr::R(lhs, rhs) => write!(f, "{} R {}", Operand(lhs), Operand(rhs)),
            Expr::StrongR(lhs, rhs) => write!(f, "{} strong_R {}", Operand(lhs), Operand(rhs)),
            Expr::WeakU(lhs, rhs) => write!(f, "{} W {}", Operand(lhs), Operand(rhs)),

            Expr::AX(op) => write!(f, "AX {}", Operand(op)),
            Expr::AF(op) => write!(f, "AF {}", Operand(op)),
            Expr::AG(op) => write!(f, "AG {}", Operand(op)),
            Expr::EX(op) => write!(f, "EX {}", Operand(op)),
            Expr::EF(op) => write!(f, "EF {}", Operand(op)),
            Expr::EG(op) => write!(f, "EG {}", Operand(op)),

            Expr::SvaAlways(op) => write!(f, "always {}", Operand(op)),
            Expr::SvaRangedAlways { lower, upper, op } => {
                write!(f, "always [{lower}:{upper}] {}", Operand(op))
            }
            Expr::SvaSAlways { lower, upper, op } => {
                write!(f, "s_always [{lower}:{upper}] {}", Operand(op))
            }
            Expr::SvaNexttime(op) => write!(f, "nexttime {}", Operand(op)),
            Expr::SvaSNexttime(op) => write!(f, "s_nexttime {}", Operand(op)),
            Expr::SvaEventually(op) => write!(f, "eventually {}", Operand(op)),
            Expr::SvaSEventually(op) => write!(f, "s_eventually {}", Operand(op)),
            Expr::SvaUntil(lhs, rhs) => write!(f, "{} until {}", Operand(lhs), Operand(rhs)),
            Expr::SvaSUntil(lhs, rhs) => write!(f, "{} s_until {}", Operand(lhs), Operand(rhs)),
            Expr::SvaUntilWith(lhs, rhs) => {
                write!(f, "{} until_with {}", Operand(lhs), Operand(rhs))
            }
            Expr::SvaSUntilWith(lhs, rhs) => {
                write!(f, "{} s_until_with {}", Operand(lhs), Operand(rhs))
            }
            Expr::SvaCycleDelay { from, to, op } => match to {
                None => write!(f, "##{from} {}", Operand(op)),
                Some(to) => write!(f, "##[{from}:{to}] {}", Operand(op)),
            },
            Expr::SvaSequenceConcatenation(ops) => join(f, ops, " ## "),
            Expr::SvaOverlappedImplication(lhs, rhs) => {
                write!(f, "{} |-> {}", Operand(lhs), Operand(rhs))
            }
            Expr::SvaNonOverlappedImplication(lhs, rhs) => {
                write!(f, "{} |=> {}", Operand(lhs), Operand(rhs))
            }
        }
    }
}

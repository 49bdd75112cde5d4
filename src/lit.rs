use std::{fmt, num::NonZeroI32, ops::Not};

/// A variable, identified by the absolute value of its literals. Always
/// positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(NonZeroI32);

impl Var {
    pub fn id(self) -> u32 {
        self.0.get().unsigned_abs()
    }

    pub fn lit(self, positive: bool) -> Lit {
        if positive {
            Lit(self.0)
        } else {
            Lit(-self.0)
        }
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// A signed literal in dimacs convention: `3` is `x3`, `-3` is `¬x3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Lit(NonZeroI32);

impl Lit {
    /// Returns `None` for `0` and for `i32::MIN`, which has no negation.
    pub fn from_dimacs(lit: i32) -> Option<Lit> {
        if lit == i32::MIN {
            return None;
        }
        NonZeroI32::new(lit).map(Lit)
    }

    pub fn to_dimacs(self) -> i32 {
        self.0.get()
    }

    pub fn var(self) -> Var {
        // i32::MIN is rejected in from_dimacs, so abs cannot overflow
        Var(self.0.abs())
    }

    pub fn is_positive(self) -> bool {
        self.0.get() > 0
    }

    /// `+1` for a positive literal, `-1` for a negative one.
    pub fn sign(self) -> i8 {
        if self.is_positive() {
            1
        } else {
            -1
        }
    }
}

impl Not for Lit {
    type Output = Lit;

    fn not(self) -> Self::Output {
        Lit(-self.0)
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_positive() {
            write!(f, "{}", self.var())
        } else {
            write!(f, "¬{}", self.var())
        }
    }
}

/// Curve mechanics: budget multiplier as a function of level.
use std::fmt;

/// Default exponential coefficients `(k, a, l)`, normalized so the curve
/// reaches ~1.0 at level 60.
pub const DEFAULT_EXP: (f64, f64, f64) = (-0.881406, 0.868759, 0.0128872);

/// Budget curve: level → multiplier of the end-level budget.
#[derive(Clone, Debug, PartialEq)]
pub enum CurveSpec {
    /// Coefficients highest degree first; at least one.
    Polynomial(Vec<f64>),
    /// `y = k + a * exp(l * x)`.
    Exponential { k: f64, a: f64, l: f64 },
}

impl Default for CurveSpec {
    fn default() -> Self {
        let (k, a, l) = DEFAULT_EXP;
        CurveSpec::Exponential { k, a, l }
    }
}

impl CurveSpec {
    pub fn exponential(k: f64, a: f64, l: f64) -> Self {
        CurveSpec::Exponential { k, a, l }
    }

    pub fn polynomial(coefs: impl Into<Vec<f64>>) -> Self {
        CurveSpec::Polynomial(coefs.into())
    }

    pub fn is_default(&self) -> bool {
        *self == CurveSpec::default()
    }

    /// Short name of the active curve, for diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            CurveSpec::Polynomial(_) => "polynomial",
            CurveSpec::Exponential { .. } if self.is_default() => "exponential (default)",
            CurveSpec::Exponential { .. } => "exponential",
        }
    }

    /// All coefficients, in declaration order.
    pub fn coefficients(&self) -> Vec<f64> {
        match self {
            CurveSpec::Polynomial(coefs) => coefs.clone(),
            CurveSpec::Exponential { k, a, l } => vec![*k, *a, *l],
        }
    }

    /// Curve value at `level`.
    #[inline]
    pub fn eval(&self, level: u32) -> f64 {
        let x = f64::from(level);
        match self {
            CurveSpec::Polynomial(coefs) => horner(coefs, x),
            CurveSpec::Exponential { k, a, l } => exp_curve(*k, *a, *l, x),
        }
    }
}

impl fmt::Display for CurveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveSpec::Polynomial(coefs) => write!(f, "{} {:?}", self.label(), coefs),
            CurveSpec::Exponential { k, a, l } => {
                write!(f, "{} y = {k} + {a}*exp({l}*x)", self.label())
            }
        }
    }
}

/// Horner evaluation, coefficients highest degree first. Empty → 0.
#[inline]
pub fn horner(coefs: &[f64], x: f64) -> f64 {
    coefs.iter().fold(0.0, |acc, c| acc * x + c)
}

/// Exponential form: k + a * exp(l * x).
#[inline]
pub fn exp_curve(k: f64, a: f64, l: f64, x: f64) -> f64 {
    k + a * (l * x).exp()
}

use std::fmt;
use std::ops::{Add, AddAssign};
use tracing::debug;

/// Absolute tolerance used by `==`, covers comparisons near zero.
pub const ABS_TOLERANCE: f64 = 1e-12;
/// Relative tolerance used by `==`, scaled by the larger magnitude.
pub const REL_TOLERANCE: f64 = 1e-8;

/// Hybrid absolute/relative comparison of two components.
///
/// Any comparison involving NaN is false.
pub fn approx_eq(a: f64, b: f64) -> bool {
    let diff = (a - b).abs();
    diff <= ABS_TOLERANCE || diff <= a.abs().max(b.abs()) * REL_TOLERANCE
}

/// A point or displacement in the plane.
///
/// Plain `Copy` value: no invariant is enforced on the components, NaN and
/// infinities flow through every operation following IEEE-754 rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn length(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    /// Scales this vector to unit length in place.
    ///
    /// The length must be non-zero. A zero vector ends up with NaN
    /// components (0 / 0); this is not reported as an error.
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        if length == 0. || !length.is_finite() {
            debug!("normalizing degenerate vector {} (length {})", self, length);
        }
        self.x /= length;
        self.y /= length;
        self
    }

    /// Unit vector with the same direction, `self` is left untouched.
    pub fn normalized(&self) -> Self {
        let mut v = *self;
        *v.normalize()
    }

    /// Same as `+=` but hands the receiver back so calls can be chained.
    pub fn add_in_place(&mut self, rhs: Vector2) -> &mut Self {
        *self += rhs;
        self
    }
}

/// Each component must pass [`approx_eq`] on its own. Not transitive, so
/// there is no `Eq` nor `Hash`.
impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add<&Vector2> for &Vector2 {
    type Output = Vector2;

    fn add(self, rhs: &Vector2) -> Self::Output {
        *self + *rhs
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
#[cfg(any(feature = "std", feature = "libm"))]
use num_traits::Float;

/// A two-component vector.
///
/// Comparisons are member-wise in field order (`x` before `y`), so the
/// ordering is lexicographic and carries no geometric meaning.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Copies every component of `other` into `self`.
    pub fn set(&mut self, other: Self) -> &mut Self {
        *self = other;
        self
    }
}

impl<T: Copy> Vector2<T> {
    pub fn filled(v: T) -> Self {
        Self::new(v, v)
    }

    /// Unary plus.
    pub fn plus(self) -> Self {
        self
    }
}

impl<T> Vector2<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    /// Squared Euclidean norm. Cheaper than [`Vector2::length`] when only
    /// relative magnitudes matter.
    pub fn square_length(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }
}

impl<T> Vector2<T>
where
    T: Copy + Sub<Output = T> + Mul<Output = T>,
{
    /// Scalar cross product, the signed area of the parallelogram spanned by
    /// `self` and `other`. Positive when `other` lies counterclockwise.
    pub fn cross(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }
}

#[cfg(any(feature = "std", feature = "libm"))]
impl<T: Float> Vector2<T> {
    /// Unit vector pointing `angle` radians counterclockwise from +X.
    pub fn from_angle(angle: T) -> Self {
        crate::angle::vector2_from_angle(angle)
    }

    pub fn length(&self) -> T {
        self.square_length().sqrt()
    }

    /// Returns `self / self.length()`.
    ///
    /// The zero vector has no direction and yields NaN components. Use
    /// [`Vector2::try_normalized`] when the input may be degenerate.
    pub fn normalized(&self) -> Self {
        *self / self.length()
    }

    /// In-place [`Vector2::normalized`].
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Like [`Vector2::normalized`], but `None` when the length is zero or
    /// not finite.
    pub fn try_normalized(&self) -> Option<Self> {
        let len = self.length();
        if len.is_finite() && len > T::zero() {
            Some(*self / len)
        } else {
            None
        }
    }

    /// Signed angle from the positive X axis, in (-π, π].
    pub fn angle(&self) -> T {
        self.y.atan2(self.x)
    }
}

impl<T> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<[T; 2]> for Vector2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Vector2<T>> for (T, T) {
    fn from(v: Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T> From<Vector2<T>> for [T; 2] {
    fn from(v: Vector2<T>) -> Self {
        [v.x, v.y]
    }
}

impl<T: fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T> Neg for Vector2<T>
where
    T: Neg<Output = T>,
{
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T> Mul<T> for Vector2<T>
where
    T: Copy + Mul<T, Output = T>,
{
    type Output = Self;
    fn mul(self, o: T) -> Self::Output {
        Self {
            x: self.x * o,
            y: self.y * o,
        }
    }
}

impl<T> Div<T> for Vector2<T>
where
    T: Copy + Div<T, Output = T>,
{
    type Output = Self;
    fn div(self, o: T) -> Self::Output {
        Self {
            x: self.x / o,
            y: self.y / o,
        }
    }
}

impl<T> MulAssign<T> for Vector2<T>
where
    T: Copy + MulAssign<T>,
{
    fn mul_assign(&mut self, o: T) {
        self.x *= o;
        self.y *= o;
    }
}

impl<T> DivAssign<T> for Vector2<T>
where
    T: Copy + DivAssign<T>,
{
    fn div_assign(&mut self, o: T) {
        self.x /= o;
        self.y /= o;
    }
}

impl<T> Add for Vector2<T>
where
    T: Add<T, Output = T>,
{
    type Output = Self;
    fn add(self, other: Self) -> Self::Output {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Vector2<T>
where
    T: Sub<T, Output = T>,
{
    type Output = Self;
    fn sub(self, other: Self) -> Self::Output {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Mul for Vector2<T>
where
    T: Mul<T, Output = T>,
{
    type Output = Self;
    fn mul(self, other: Self) -> Self::Output {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }
}

impl<T> Div for Vector2<T>
where
    T: Div<T, Output = T>,
{
    type Output = Self;
    fn div(self, other: Self) -> Self::Output {
        Self {
            x: self.x / other.x,
            y: self.y / other.y,
        }
    }
}

impl<T> Rem for Vector2<T>
where
    T: Rem<T, Output = T>,
{
    type Output = Self;
    fn rem(self, other: Self) -> Self::Output {
        Self {
            x: self.x % other.x,
            y: self.y % other.y,
        }
    }
}

impl<T> AddAssign for Vector2<T>
where
    T: AddAssign<T>,
{
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl<T> SubAssign for Vector2<T>
where
    T: SubAssign<T>,
{
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl<T> MulAssign for Vector2<T>
where
    T: MulAssign<T>,
{
    fn mul_assign(&mut self, other: Self) {
        self.x *= other.x;
        self.y *= other.y;
    }
}

impl<T> DivAssign for Vector2<T>
where
    T: DivAssign<T>,
{
    fn div_assign(&mut self, other: Self) {
        self.x /= other.x;
        self.y /= other.y;
    }
}

impl<T> RemAssign for Vector2<T>
where
    T: RemAssign<T>,
{
    fn rem_assign(&mut self, other: Self) {
        self.x %= other.x;
        self.y %= other.y;
    }
}

#[cfg(test)]
mod tests {
    #[cfg(any(feature = "std", feature = "libm"))]
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    #[cfg(any(feature = "std", feature = "libm"))]
    use core::f64::consts::{FRAC_PI_2, PI};
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_square_length() {
        assert_eq!(Vector2::new(3, 4).square_length(), 25);
        assert_eq!(Vector2::new(-3.0, 4.0).square_length(), 25.0);
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    #[test]
    fn test_length() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.square_length(), 25.0);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Vector2::<f32>::default(), Vector2::new(0.0, 0.0));
        assert_eq!(Vector2::<i32>::default(), Vector2::filled(0));
    }

    #[test]
    fn test_lexicographic_order() {
        assert_eq!(Vector2::new(1, 2), Vector2::new(1, 2));
        assert!(Vector2::new(1, 2) < Vector2::new(1, 3));
        // x dominates regardless of magnitude
        assert!(Vector2::new(2, 0) > Vector2::new(1, 100));
        assert!(Vector2::new(0.5, 9.0) < Vector2::new(1.0, -9.0));

        let set: BTreeSet<_> = [Vector2::new(1, 1), Vector2::new(0, 5), Vector2::new(1, 0)]
            .into_iter()
            .collect();
        let sorted: Vec<_> = set.into_iter().collect();
        assert_eq!(
            sorted,
            [Vector2::new(0, 5), Vector2::new(1, 0), Vector2::new(1, 1)]
        );
    }

    #[test]
    fn test_binary_ops() {
        let a = Vector2::new(6, 9);
        let b = Vector2::new(4, 2);
        assert_eq!(a + b, Vector2::new(10, 11));
        assert_eq!(a - b, Vector2::new(2, 7));
        assert_eq!(a * b, Vector2::new(24, 18));
        assert_eq!(a / b, Vector2::new(1, 4));
        assert_eq!(a % b, Vector2::new(2, 1));
        assert_eq!(a * 2, Vector2::new(12, 18));
        assert_eq!(a / 3, Vector2::new(2, 3));
        assert_eq!(-a, Vector2::new(-6, -9));
        assert_eq!(a.plus(), a);
        // operands are untouched
        assert_eq!(a, Vector2::new(6, 9));
        assert_eq!(b, Vector2::new(4, 2));
    }

    #[test]
    fn test_compound_ops() {
        let mut v = Vector2::new(6, 9);
        v += Vector2::new(1, 1);
        assert_eq!(v, Vector2::new(7, 10));
        v -= Vector2::new(2, 3);
        assert_eq!(v, Vector2::new(5, 7));
        v *= Vector2::new(2, 3);
        assert_eq!(v, Vector2::new(10, 21));
        v /= Vector2::new(5, 7);
        assert_eq!(v, Vector2::new(2, 3));
        v *= 4;
        assert_eq!(v, Vector2::new(8, 12));
        v /= 2;
        assert_eq!(v, Vector2::new(4, 6));
        v %= Vector2::new(3, 4);
        assert_eq!(v, Vector2::new(1, 2));
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    #[test]
    fn test_set_chains() {
        let mut v = Vector2::new(1.0, 2.0);
        v.set(Vector2::new(0.0, 3.0)).normalize();
        assert_eq!(v, Vector2::new(0.0, 1.0));
    }

    #[test]
    fn test_float_remainder() {
        let v = Vector2::new(5.5, -7.0) % Vector2::new(2.0, 3.0);
        assert_eq!(v, Vector2::new(1.5, -1.0));
    }

    #[test]
    #[should_panic]
    fn test_integer_division_by_zero_panics() {
        let _ = Vector2::new(1, 1) / Vector2::new(0, 1);
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    #[test]
    fn test_normalize() {
        let v = Vector2::new(3.0f64, 4.0);
        let n = v.normalized();
        assert_relative_eq!(n.x, 0.6);
        assert_relative_eq!(n.y, 0.8);
        assert_eq!(v, Vector2::new(3.0, 4.0));

        let mut m = v;
        m.normalize();
        assert_eq!(m, n);
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    #[test]
    fn test_normalize_zero() {
        let zero = Vector2::<f64>::default();
        let n = zero.normalized();
        assert!(n.x.is_nan() && n.y.is_nan());
        assert_eq!(zero.try_normalized(), None);
        assert_eq!(Vector2::new(f64::INFINITY, 0.0).try_normalized(), None);
        assert_eq!(
            Vector2::new(0.0, -2.0f64).try_normalized(),
            Some(Vector2::new(0.0, -1.0))
        );
    }

    #[test]
    fn test_dot_cross() {
        let a = Vector2::new(1, 2);
        let b = Vector2::new(3, 4);
        assert_eq!(a.dot(&b), 11);
        assert_eq!(a.cross(&b), -2);
        assert_eq!(b.cross(&a), 2);
        assert_eq!(Vector2::new(1, 0).cross(&Vector2::new(0, 1)), 1);
        assert_eq!(Vector2::new(2, 4).cross(&Vector2::new(1, 2)), 0);
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    #[test]
    fn test_angle() {
        assert_abs_diff_eq!(Vector2::new(1.0, 0.0).angle(), 0.0);
        assert_abs_diff_eq!(Vector2::new(0.0, 2.0).angle(), FRAC_PI_2);
        assert_abs_diff_eq!(Vector2::new(-1.0, 0.0).angle(), PI);
        assert_abs_diff_eq!(Vector2::new(0.0, -1.0).angle(), -FRAC_PI_2);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Vector2::from((1, 2)), Vector2::new(1, 2));
        assert_eq!(Vector2::from([1, 2]), Vector2::new(1, 2));
        let t: (i32, i32) = Vector2::new(3, 4).into();
        assert_eq!(t, (3, 4));
        let a: [i32; 2] = Vector2::new(3, 4).into();
        assert_eq!(a, [3, 4]);
        assert_eq!(format!("{}", Vector2::new(1.5, -2.0)), "(1.5, -2)");
    }
}

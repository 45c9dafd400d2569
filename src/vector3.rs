use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
#[cfg(any(feature = "std", feature = "libm"))]
use num_traits::Float;

/// A three-component vector. `y` is the vertical axis and `z` is depth.
///
/// Ordering is lexicographic over `x`, `y`, `z`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vector3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn set(&mut self, other: Self) -> &mut Self {
        *self = other;
        self
    }
}

impl<T: Copy> Vector3<T> {
    pub fn filled(v: T) -> Self {
        Self::new(v, v, v)
    }

    pub fn plus(self) -> Self {
        self
    }
}

impl<T> Vector3<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    pub fn square_length(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl<T> Vector3<T>
where
    T: Copy + Sub<Output = T> + Mul<Output = T>,
{
    /// Right-handed cross product: `x × y == z`.
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

#[cfg(any(feature = "std", feature = "libm"))]
impl<T: Float> Vector3<T> {
    pub fn length(&self) -> T {
        self.square_length().sqrt()
    }

    /// Returns `self / self.length()`. NaN for the zero vector.
    pub fn normalized(&self) -> Self {
        *self / self.length()
    }

    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// `None` when the vector has no usable direction.
    pub fn try_normalized(&self) -> Option<Self> {
        let len = self.length();
        if len.is_finite() && len > T::zero() {
            Some(*self / len)
        } else {
            None
        }
    }
}

impl<T> From<(T, T, T)> for Vector3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<[T; 3]> for Vector3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

impl<T> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl<T> Neg for Vector3<T>
where
    T: Neg<Output = T>,
{
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T> Mul<T> for Vector3<T>
where
    T: Copy + Mul<T, Output = T>,
{
    type Output = Self;
    fn mul(self, o: T) -> Self::Output {
        Self {
            x: self.x * o,
            y: self.y * o,
            z: self.z * o,
        }
    }
}

impl<T> Div<T> for Vector3<T>
where
    T: Copy + Div<T, Output = T>,
{
    type Output = Self;
    fn div(self, o: T) -> Self::Output {
        Self {
            x: self.x / o,
            y: self.y / o,
            z: self.z / o,
        }
    }
}

impl<T> MulAssign<T> for Vector3<T>
where
    T: Copy + MulAssign<T>,
{
    fn mul_assign(&mut self, o: T) {
        self.x *= o;
        self.y *= o;
        self.z *= o;
    }
}

impl<T> DivAssign<T> for Vector3<T>
where
    T: Copy + DivAssign<T>,
{
    fn div_assign(&mut self, o: T) {
        self.x /= o;
        self.y /= o;
        self.z /= o;
    }
}

impl<T> Add for Vector3<T>
where
    T: Add<T, Output = T>,
{
    type Output = Self;
    fn add(self, other: Self) -> Self::Output {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T> Sub for Vector3<T>
where
    T: Sub<T, Output = T>,
{
    type Output = Self;
    fn sub(self, other: Self) -> Self::Output {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T> Mul for Vector3<T>
where
    T: Mul<T, Output = T>,
{
    type Output = Self;
    fn mul(self, other: Self) -> Self::Output {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }
}

impl<T> Div for Vector3<T>
where
    T: Div<T, Output = T>,
{
    type Output = Self;
    fn div(self, other: Self) -> Self::Output {
        Self {
            x: self.x / other.x,
            y: self.y / other.y,
            z: self.z / other.z,
        }
    }
}

impl<T> Rem for Vector3<T>
where
    T: Rem<T, Output = T>,
{
    type Output = Self;
    fn rem(self, other: Self) -> Self::Output {
        Self {
            x: self.x % other.x,
            y: self.y % other.y,
            z: self.z % other.z,
        }
    }
}

impl<T> AddAssign for Vector3<T>
where
    T: AddAssign<T>,
{
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl<T> SubAssign for Vector3<T>
where
    T: SubAssign<T>,
{
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl<T> MulAssign for Vector3<T>
where
    T: MulAssign<T>,
{
    fn mul_assign(&mut self, other: Self) {
        self.x *= other.x;
        self.y *= other.y;
        self.z *= other.z;
    }
}

impl<T> DivAssign for Vector3<T>
where
    T: DivAssign<T>,
{
    fn div_assign(&mut self, other: Self) {
        self.x /= other.x;
        self.y /= other.y;
        self.z /= other.z;
    }
}

impl<T> RemAssign for Vector3<T>
where
    T: RemAssign<T>,
{
    fn rem_assign(&mut self, other: Self) {
        self.x %= other.x;
        self.y %= other.y;
        self.z %= other.z;
    }
}

use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Neg,
    Index, IndexMut,
};
use std::fmt;
use serde::{Serialize, Deserialize};

mod axis;
mod proc_errors;

pub use axis::Axis;
pub use proc_errors::{
    GeometryError,
    ProcResult,
};

/// Raw vertex coordinates, as stored by mesh code.
pub type Vertex = [f64; 3];
/// A face as an ordered list of vertex indices.
pub type Face = Vec<usize>;
/// Row-major 4x4 matrix, used for affine transforms.
pub type Matrix4d = [[f64; 4]; 4];

/// The 4x4 identity matrix.
pub const IDENTITY: Matrix4d = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// A point in 3D space.
/// The same type is used for displacement vectors: the difference of two
/// points is a `Point` holding the vector between them.
/// Serializes as a plain `[x, y, z]` array.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point {
    xyz: [f64; 3],
}
impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point{xyz: [x, y, z]}
    }

    /// Create a new zero point.
    pub fn zero() -> Self {
        Point{xyz: [0.0; 3]}
    }

    /// Create the vector going from `a` to `b`, i.e. `b - a`.
    pub fn between(a: &Point, b: &Point) -> Self {
        Point{xyz: [
            b.xyz[0] - a.xyz[0],
            b.xyz[1] - a.xyz[1],
            b.xyz[2] - a.xyz[2],
        ]}
    }

    /// Borrow the coordinates as an array.
    pub fn as_array(&self) -> &[f64; 3] {
        &self.xyz
    }

    /// Copy of the x coordinate.
    pub fn x(&self) -> f64 {
        self.xyz[0]
    }

    /// Copy of the y coordinate.
    pub fn y(&self) -> f64 {
        self.xyz[1]
    }

    /// Copy of the z coordinate.
    pub fn z(&self) -> f64 {
        self.xyz[2]
    }

    /// Mutable reference to the x coordinate, for writing it in place.
    pub fn x_mut(&mut self) -> &mut f64 {
        &mut self.xyz[0]
    }

    /// Mutable reference to the y coordinate, for writing it in place.
    pub fn y_mut(&mut self) -> &mut f64 {
        &mut self.xyz[1]
    }

    /// Mutable reference to the z coordinate, for writing it in place.
    pub fn z_mut(&mut self) -> &mut f64 {
        &mut self.xyz[2]
    }

    /// Check that no coordinate is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        self.xyz.iter().all(|coord| coord.is_finite())
    }

    /// Get the coordinate along an axis.
    pub fn axis(&self, axis: Axis) -> f64 {
        self.xyz[axis.index()]
    }

    /// Get a mutable reference to the coordinate along an axis.
    pub fn axis_mut(&mut self, axis: Axis) -> &mut f64 {
        &mut self.xyz[axis.index()]
    }

    /// Get a coordinate by position.
    /// Returns `GeometryError::IndexOutOfRange` for anything but 0, 1 or 2.
    pub fn get(&self, index: usize) -> ProcResult<f64> {
        Ok(self.axis(Axis::try_from(index)?))
    }

    /// Get a mutable reference to a coordinate by position.
    /// Returns `GeometryError::IndexOutOfRange` for anything but 0, 1 or 2.
    pub fn get_mut(&mut self, index: usize) -> ProcResult<&mut f64> {
        Ok(self.axis_mut(Axis::try_from(index)?))
    }

    /// Get a coordinate by position, without bounds checking.
    ///
    /// # Safety
    /// `index` must be 0, 1 or 2. Any other value is undefined behavior.
    pub unsafe fn get_unchecked(&self, index: usize) -> f64 {
        *self.xyz.get_unchecked(index)
    }

    /// Get a mutable reference to a coordinate by position, without bounds checking.
    ///
    /// # Safety
    /// `index` must be 0, 1 or 2. Any other value is undefined behavior.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut f64 {
        self.xyz.get_unchecked_mut(index)
    }

    /// Add another point to this one in place.
    /// Returns `self` so calls can be chained.
    pub fn add_mut(&mut self, other: &Point) -> &mut Self {
        self.xyz[0] += other.xyz[0];
        self.xyz[1] += other.xyz[1];
        self.xyz[2] += other.xyz[2];
        self
    }

    /// Subtract another point from this one in place.
    /// Returns `self` so calls can be chained.
    pub fn sub_mut(&mut self, other: &Point) -> &mut Self {
        self.xyz[0] -= other.xyz[0];
        self.xyz[1] -= other.xyz[1];
        self.xyz[2] -= other.xyz[2];
        self
    }

    /// Scale this point in place.
    /// Returns `self` so calls can be chained.
    pub fn mul_mut(&mut self, d: f64) -> &mut Self {
        self.xyz[0] *= d;
        self.xyz[1] *= d;
        self.xyz[2] *= d;
        self
    }

    /// Inverse scale this point in place. Division by zero is not checked.
    /// Returns `self` so calls can be chained.
    pub fn div_mut(&mut self, d: f64) -> &mut Self {
        self.xyz[0] /= d;
        self.xyz[1] /= d;
        self.xyz[2] /= d;
        self
    }

    /// Get the dot product of two vectors.
    pub fn dot(&self, other: &Point) -> f64 {
        self.xyz[0] * other.xyz[0] + self.xyz[1] * other.xyz[1] + self.xyz[2] * other.xyz[2]
    }

    /// Get the (right-handed) cross product of two vectors.
    pub fn cross(&self, other: &Point) -> Point {
        Point::new(
            self.xyz[1] * other.xyz[2] - other.xyz[1] * self.xyz[2],
            self.xyz[2] * other.xyz[0] - other.xyz[2] * self.xyz[0],
            self.xyz[0] * other.xyz[1] - other.xyz[0] * self.xyz[1],
        )
    }

    /// Manhattan (L1) norm.
    pub fn norm1(&self) -> f64 {
        self.xyz[0].abs() + self.xyz[1].abs() + self.xyz[2].abs()
    }

    /// Euclidean (L2) norm.
    pub fn norm2(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Maximum (L-infinity) norm.
    pub fn norm_inf(&self) -> f64 {
        self.xyz[0].abs().max(self.xyz[1].abs()).max(self.xyz[2].abs())
    }

    /// Get the distance between two points.
    pub fn distance(&self, other: &Point) -> f64 {
        Point::between(self, other).norm2()
    }

    /// Apply a 4x4 affine transformation matrix to this point, in place.
    ///
    /// The point is treated as the homogeneous vector `(x, y, z, 1)`.
    /// **Only the top three rows of `m` are read.** The bottom row is ignored
    /// and no perspective divide is done, so `m` must be a pure affine
    /// transform: any projective matrix gives a silently wrong result.
    ///
    /// Returns `self` so calls can be chained.
    pub fn transform(&mut self, m: &Matrix4d) -> &mut Self {
        let [x, y, z] = self.xyz;
        for (coord, row) in self.xyz.iter_mut().zip(m.iter()) {
            *coord = x * row[0] + y * row[1] + z * row[2] + row[3];
        }
        self
    }

    /// Return a transformed copy of this point. See `transform`.
    pub fn transformed(&self, m: &Matrix4d) -> Point {
        let mut point = *self;
        point.transform(m);
        point
    }
}
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "({:.*}, {:.*}, {:.*})", precision, self.xyz[0], precision, self.xyz[1], precision, self.xyz[2]),
            None => write!(f, "({}, {}, {})", self.xyz[0], self.xyz[1], self.xyz[2]),
        }
    }
}
impl From<Vertex> for Point {
    fn from(xyz: Vertex) -> Self {
        Point{xyz}
    }
}
impl From<Point> for Vertex {
    fn from(point: Point) -> Self {
        point.xyz
    }
}
impl Index<usize> for Point {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.xyz[index]
    }
}
impl IndexMut<usize> for Point {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.xyz[index]
    }
}
impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Point::new(
            self.xyz[0] + other.xyz[0],
            self.xyz[1] + other.xyz[1],
            self.xyz[2] + other.xyz[2],
        )
    }
}
impl AddAssign for Point {
    fn add_assign(&mut self, other: Self) {
        self.add_mut(&other);
    }
}
impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Point::new(
            self.xyz[0] - other.xyz[0],
            self.xyz[1] - other.xyz[1],
            self.xyz[2] - other.xyz[2],
        )
    }
}
impl Sub<&Point> for &Point {
    type Output = Point;

    fn sub(self, other: &Point) -> Point {
        *self - *other
    }
}
impl SubAssign for Point {
    fn sub_assign(&mut self, other: Self) {
        self.sub_mut(&other);
    }
}
impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, d: f64) -> Point {
        Point::new(self.xyz[0] * d, self.xyz[1] * d, self.xyz[2] * d)
    }
}
impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, point: Point) -> Point {
        point * self
    }
}
impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, d: f64) {
        self.mul_mut(d);
    }
}
impl Div<f64> for Point {
    type Output = Point;

    fn div(self, d: f64) -> Point {
        Point::new(self.xyz[0] / d, self.xyz[1] / d, self.xyz[2] / d)
    }
}
impl DivAssign<f64> for Point {
    fn div_assign(&mut self, d: f64) {
        self.div_mut(d);
    }
}
impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.xyz[0], -self.xyz[1], -self.xyz[2])
    }
}

use super::{Modulus, Scalar};

/// A point (x,y) on a univariate polynomial f(x), where y = f(x).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point<M: Modulus> {
    /// The x-coordinate of the point.
    pub(crate) x: Scalar<M>,
    /// The y-coordinate of the point.
    pub(crate) y: Scalar<M>,
}

impl<M> Point<M>
where
    M: Modulus,
{
    /// Creates a new point.
    pub fn new(x: Scalar<M>, y: Scalar<M>) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point.
    pub fn x(&self) -> &Scalar<M> {
        &self.x
    }

    /// Returns the y-coordinate of the point.
    pub fn y(&self) -> &Scalar<M> {
        &self.y
    }
}

//! Conversion functions between reference systems

use std::fmt;
use std::sync::Arc;

use crate::coordinate::Point;

type ConversionFn = dyn Fn(Point) -> Point + Send + Sync;

/// A pure function mapping a point in one reference system to another
///
/// Conversions are cheap to clone: clones share the same underlying
/// function.
#[derive(Clone)]
pub struct Conversion {
    func: Arc<ConversionFn>,
}

impl Conversion {
    /// Wrap a closure as a conversion
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(Point) -> Point + Send + Sync + 'static,
    {
        Conversion { func: Arc::new(func) }
    }

    /// The no-op conversion used between equal systems
    pub fn identity() -> Self {
        Conversion::new(|point| point)
    }

    /// Convert a point
    pub fn apply(&self, point: Point) -> Point {
        (self.func)(point)
    }

    /// Convert a raw coordinate pair
    pub fn apply_xy(&self, x: f64, y: f64) -> (f64, f64) {
        let converted = self.apply(Point::new(x, y));
        (converted.x, converted.y)
    }

    /// Compose two conversions: `self` runs first, then `next`
    pub fn then(&self, next: &Conversion) -> Conversion {
        let first = self.clone();
        let second = next.clone();
        Conversion::new(move |point| second.apply(first.apply(point)))
    }
}

impl fmt::Debug for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conversion")
            .field("func", &Arc::as_ptr(&self.func))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_keeps_point() {
        let point = Point::new(12.5, -3.25);
        assert_eq!(Conversion::identity().apply(point), point);
    }

    #[test]
    fn test_then_applies_in_order() {
        let shift = Conversion::new(|p: Point| Point::new(p.x + 1.0, p.y));
        let scale = Conversion::new(|p: Point| Point::new(p.x * 10.0, p.y * 10.0));

        assert_eq!(shift.then(&scale).apply_xy(1.0, 2.0), (20.0, 20.0));
        assert_eq!(scale.then(&shift).apply_xy(1.0, 2.0), (11.0, 20.0));
    }
}

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Point or vector in the scan plane
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Rotate about the origin by `angle` radians (counter-clockwise)
    pub fn rotated(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        self.rotated_by(sin, cos)
    }

    #[inline(always)]
    pub(crate) fn rotated_by(&self, sin: f64, cos: f64) -> Self {
        Self {
            x: cos * self.x - sin * self.y,
            y: sin * self.x + cos * self.y,
        }
    }

    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for (f64, f64) {
    fn from(value: Vec2) -> Self {
        (value.x, value.y)
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// One ray of the scan: where it starts and which way it points.
///
/// `direction` is not normalized here; its magnitude is whatever the
/// geometry put into the baseline.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Beam {
    pub source: Vec2,
    pub direction: Vec2,
}

impl Beam {
    pub fn new(source: impl Into<Vec2>, direction: impl Into<Vec2>) -> Self {
        Self {
            source: source.into(),
            direction: direction.into(),
        }
    }

    pub fn rotated(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        self.rotated_by(sin, cos)
    }

    #[inline(always)]
    pub(crate) fn rotated_by(&self, sin: f64, cos: f64) -> Self {
        Self {
            source: self.source.rotated_by(sin, cos),
            direction: self.direction.rotated_by(sin, cos),
        }
    }
}

/// View beams as `[sx, sy, dx, dy, sx, sy, ...]` without copying
pub fn beams_as_flat(beams: &[Beam]) -> &[f64] {
    bytemuck::cast_slice(beams)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use float_eq::assert_float_eq;

    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn fields_are_mutable() {
        let mut beam = Beam::new((1., 2.), (3., 4.));
        beam.source = Vec2::new(-1., 0.5);
        beam.direction.y = 7.;
        assert_eq!(Beam::new((-1., 0.5), (3., 7.)), beam);
    }

    #[test]
    fn direction_is_not_normalized() {
        let beam = Beam::new((0., 0.), (3., 4.));
        assert_eq!(5., beam.direction.norm());
    }

    #[test]
    fn rotate_quarter_turn() {
        let beam = Beam::new((0., -1.), (0., 1.)).rotated(FRAC_PI_2);
        assert_float_eq!(beam.source.to_array(), [1., 0.], abs_all <= EPS);
        assert_float_eq!(beam.direction.to_array(), [-1., 0.], abs_all <= EPS);
    }

    #[test]
    fn flat_view_layout() {
        let beams = [Beam::new((1., 2.), (3., 4.)), Beam::new((5., 6.), (7., 8.))];
        assert_eq!(
            &[1., 2., 3., 4., 5., 6., 7., 8.],
            beams_as_flat(&beams)
        );
    }
}

use crate::{Beam, InvalidConfiguration};

/// Source positions and directions at rotation angle zero
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Baseline(Vec<Beam>);

impl Baseline {
    pub fn new(beams: Vec<Beam>) -> Self {
        Self(beams)
    }

    /// Zip four parallel arrays into a baseline. They must all have the same length.
    pub fn from_components(
        x_positions: &[f64],
        y_positions: &[f64],
        x_directions: &[f64],
        y_directions: &[f64],
    ) -> Result<Self, InvalidConfiguration> {
        let n = x_positions.len();
        if y_positions.len() != n || x_directions.len() != n || y_directions.len() != n {
            return Err(InvalidConfiguration::new(format!(
                "Baseline arrays must have equal lengths, got {}, {}, {}, {}",
                n,
                y_positions.len(),
                x_directions.len(),
                y_directions.len()
            )));
        }
        Ok(Self(
            x_positions
                .iter()
                .zip(y_positions)
                .zip(x_directions.iter().zip(y_directions))
                .map(|((&x, &y), (&dx, &dy))| Beam::new((x, y), (dx, dy)))
                .collect(),
        ))
    }
}

impl std::ops::Deref for Baseline {
    type Target = [Beam];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[Beam]> for Baseline {
    fn as_ref(&self) -> &[Beam] {
        &self.0
    }
}

impl FromIterator<Beam> for Baseline {
    fn from_iter<T: IntoIterator<Item = Beam>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Sweeps a baseline through a list of angles.
///
/// Yields every baseline beam for the first angle, then every baseline beam
/// for the second angle and so on: item `a * n + i` is beam `i` rotated by
/// `angles[a]`.
#[derive(Clone)]
pub struct RotatedBeams<TBaseline, TAngles> {
    baseline: TBaseline,
    angles: TAngles,
    angle_pos: usize,
    beam_pos: usize,
    sin_cos: (f64, f64),
}

impl<TBaseline, TAngles> RotatedBeams<TBaseline, TAngles>
where
    TBaseline: AsRef<[Beam]>,
    TAngles: AsRef<[f64]>,
{
    pub fn new(baseline: TBaseline, angles: TAngles) -> Self {
        let sin_cos = angles
            .as_ref()
            .first()
            .map_or((0., 1.), |angle| angle.sin_cos());
        Self {
            baseline,
            angles,
            angle_pos: 0,
            beam_pos: 0,
            sin_cos,
        }
    }
}

impl<TBaseline, TAngles> Iterator for RotatedBeams<TBaseline, TAngles>
where
    TBaseline: AsRef<[Beam]>,
    TAngles: AsRef<[f64]>,
{
    type Item = Beam;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let baseline = self.baseline.as_ref();
        let angles = self.angles.as_ref();

        if baseline.is_empty() || self.angle_pos >= angles.len() {
            None
        } else if self.beam_pos < baseline.len() {
            let before = self.beam_pos;
            self.beam_pos += 1;
            let (sin, cos) = self.sin_cos;
            Some(baseline[before].rotated_by(sin, cos))
        } else if self.angle_pos + 1 < angles.len() {
            self.angle_pos += 1;
            self.sin_cos = angles[self.angle_pos].sin_cos();
            self.beam_pos = 1;
            let (sin, cos) = self.sin_cos;
            Some(baseline[0].rotated_by(sin, cos))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.baseline.as_ref().len();
        let m = self.angles.as_ref().len();
        let remaining = if n == 0 || self.angle_pos >= m {
            0
        } else {
            (m - self.angle_pos - 1) * n + (n - self.beam_pos)
        };
        (remaining, Some(remaining))
    }
}

impl<TBaseline, TAngles> ExactSizeIterator for RotatedBeams<TBaseline, TAngles>
where
    TBaseline: AsRef<[Beam]>,
    TAngles: AsRef<[f64]>,
{
}

impl<TBaseline, TAngles> std::iter::FusedIterator for RotatedBeams<TBaseline, TAngles>
where
    TBaseline: AsRef<[Beam]>,
    TAngles: AsRef<[f64]>,
{
}

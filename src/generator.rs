use std::f64::consts::{FRAC_PI_2, PI};

use crate::{
    config::check_radius, Baseline, Beam, FanBeam, InvalidConfiguration, ParallelBeam,
    RotatedBeams, ScanGeometry, Vec2,
};

/// Angles `0, step, 2 * step, ...` strictly below pi.
///
/// Each angle is computed as `k * step` so rounding does not accumulate.
/// Pi itself is left out: a half turn brings these symmetric layouts back
/// onto the chords they started from.
pub fn rotation_angles(step: f64) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 {
        return Vec::new();
    }
    (0u64..)
        .map(|k| k as f64 * step)
        .take_while(|&angle| angle < PI)
        .collect()
}

/// `n` evenly spaced values over `[start, stop]`, both ends included
fn linspace(start: f64, stop: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (stop - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| {
        if n > 1 && i == n - 1 {
            stop
        } else {
            start + i as f64 * step
        }
    })
}

/// Something that can lay out a baseline on a circle and sweep it
pub trait Generate {
    /// Beams at rotation angle zero for sources on a circle of `radius`
    fn baseline(&self, radius: f64) -> Baseline;
    fn rotation_step(&self) -> f64;
    fn num_sources(&self) -> usize;

    /// Length of what [`Generate::generate`] returns
    fn beam_count(&self) -> usize {
        self.num_sources() * rotation_angles(self.rotation_step()).len()
    }

    fn iter_beams(
        &self,
        radius: f64,
    ) -> Result<RotatedBeams<Baseline, Vec<f64>>, InvalidConfiguration> {
        check_radius(radius)?;
        Ok(RotatedBeams::new(
            self.baseline(radius),
            rotation_angles(self.rotation_step()),
        ))
    }

    fn generate(&self, radius: f64) -> Result<Vec<Beam>, InvalidConfiguration> {
        check_radius(radius)?;
        let baseline = self.baseline(radius);
        let angles = rotation_angles(self.rotation_step());
        let beams = RotatedBeams::new(baseline, angles).collect::<Vec<_>>();
        log::debug!(
            "Generated {} beams ({} sources) on radius {radius}",
            beams.len(),
            self.num_sources()
        );
        Ok(beams)
    }
}

/// Sweep `geometry` around a circle of `radius`
pub fn generate(
    geometry: &impl Generate,
    radius: f64,
) -> Result<Vec<Beam>, InvalidConfiguration> {
    geometry.generate(radius)
}

impl Generate for ParallelBeam {
    /// Sources spread along a chord at the bottom of the circle, all
    /// pointing up across it.
    fn baseline(&self, radius: f64) -> Baseline {
        let half_width = radius * self.width_ratio;
        linspace(-half_width, half_width, self.num_sources)
            .map(|x| {
                let y = -(radius * radius - x * x).max(0.0).sqrt();
                Beam::new((x, y), (0.0, 1.0))
            })
            .collect()
    }

    fn rotation_step(&self) -> f64 {
        self.rotation_step
    }

    fn num_sources(&self) -> usize {
        self.num_sources
    }
}

impl Generate for FanBeam {
    /// All sources at the bottom of the circle, fanned symmetrically about
    /// the upward radial direction.
    fn baseline(&self, radius: f64) -> Baseline {
        let apex = Vec2::new(0.0, -radius);
        let half_angle = self.angle / 2.0;
        linspace(-half_angle, half_angle, self.num_sources)
            .map(|offset| {
                let (sin, cos) = (offset + FRAC_PI_2).sin_cos();
                Beam::new(apex, (cos, sin))
            })
            .collect()
    }

    fn rotation_step(&self) -> f64 {
        self.rotation_step
    }

    fn num_sources(&self) -> usize {
        self.num_sources
    }
}

impl Generate for ScanGeometry {
    fn baseline(&self, radius: f64) -> Baseline {
        match self {
            ScanGeometry::Parallel(geometry) => geometry.baseline(radius),
            ScanGeometry::Fan(geometry) => geometry.baseline(radius),
        }
    }

    fn rotation_step(&self) -> f64 {
        match self {
            ScanGeometry::Parallel(geometry) => geometry.rotation_step,
            ScanGeometry::Fan(geometry) => geometry.rotation_step,
        }
    }

    fn num_sources(&self) -> usize {
        match self {
            ScanGeometry::Parallel(geometry) => geometry.num_sources,
            ScanGeometry::Fan(geometry) => geometry.num_sources,
        }
    }
}

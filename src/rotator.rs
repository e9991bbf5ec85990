use crate::{Baseline, Beam, InvalidConfiguration, RotatedBeams};

/// Rotate a baseline, given as four parallel arrays, through every angle in
/// `angles` (radians).
///
/// The result holds `angles.len() * x_positions.len()` beams, grouped by
/// angle: index `a * n + i` is baseline beam `i` at `angles[a]`.
pub fn generate_from_baseline(
    x_positions: &[f64],
    y_positions: &[f64],
    x_directions: &[f64],
    y_directions: &[f64],
    angles: &[f64],
) -> Result<Vec<Beam>, InvalidConfiguration> {
    let baseline =
        Baseline::from_components(x_positions, y_positions, x_directions, y_directions)?;
    Ok(RotatedBeams::new(baseline, angles).collect())
}

/// Same output as [`generate_from_baseline`], with one rayon task per angle
#[cfg(feature = "rayon")]
pub fn par_generate_from_baseline(
    x_positions: &[f64],
    y_positions: &[f64],
    x_directions: &[f64],
    y_directions: &[f64],
    angles: &[f64],
) -> Result<Vec<Beam>, InvalidConfiguration> {
    use rayon::prelude::*;

    let baseline =
        Baseline::from_components(x_positions, y_positions, x_directions, y_directions)?;
    let baseline = &baseline;
    Ok(angles
        .par_iter()
        .flat_map_iter(move |angle| {
            let (sin, cos) = angle.sin_cos();
            baseline.iter().map(move |beam| beam.rotated_by(sin, cos))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use float_eq::assert_float_eq;

    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn quarter_turn_of_two_sources() {
        let beams =
            generate_from_baseline(&[0., 1.], &[-1., 0.], &[-1., 0.], &[0., 1.], &[FRAC_PI_2])
                .unwrap();
        assert_eq!(2, beams.len());
        assert_float_eq!(beams[0].source.to_array(), [1., 0.], abs_all <= EPS);
        assert_float_eq!(beams[0].direction.to_array(), [0., -1.], abs_all <= EPS);
        assert_float_eq!(beams[1].source.to_array(), [0., 1.], abs_all <= EPS);
        assert_float_eq!(beams[1].direction.to_array(), [-1., 0.], abs_all <= EPS);
    }

    #[test]
    fn unequal_lengths_fail() {
        for (xs, ys, dxs, dys) in [
            (&[0., 1., 2.][..], &[0., 1.][..], &[0., 1.][..], &[0., 1.][..]),
            (&[0., 1.][..], &[0.][..], &[0., 1.][..], &[0., 1.][..]),
            (&[0., 1.][..], &[0., 1.][..], &[0.; 0][..], &[0., 1.][..]),
            (&[0., 1.][..], &[0., 1.][..], &[0., 1.][..], &[0., 1., 2.][..]),
        ] {
            assert!(generate_from_baseline(xs, ys, dxs, dys, &[0.]).is_err());
        }
    }

    #[test]
    fn no_angles_no_beams() {
        let beams = generate_from_baseline(&[0.], &[-1.], &[0.], &[1.], &[]).unwrap();
        assert!(beams.is_empty());
    }

    #[test]
    fn angle_major_order() {
        let xs = [1., 2., 3.];
        let zeros = [0.; 3];
        let angles = [0., FRAC_PI_2, PI];
        let beams = generate_from_baseline(&xs, &zeros, &zeros, &zeros, &angles).unwrap();
        assert_eq!(9, beams.len());
        for (a, &angle) in angles.iter().enumerate() {
            for (i, &x) in xs.iter().enumerate() {
                let expected = [x * angle.cos(), x * angle.sin()];
                assert_float_eq!(beams[a * 3 + i].source.to_array(), expected, abs_all <= EPS);
            }
        }
    }

    #[test]
    fn magnitudes_are_preserved() {
        let beams =
            generate_from_baseline(&[3.], &[4.], &[0.], &[2.], &[0.3, 1.7, 2.9]).unwrap();
        for beam in beams {
            assert_float_eq!(beam.source.norm(), 5., abs <= EPS);
            assert_float_eq!(beam.direction.norm(), 2., abs <= EPS);
        }
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_matches_sequential() {
        let xs = [-1., 0., 1., 0.5];
        let ys = [0., -1., 0., 0.25];
        let dxs = [0., 1., 0., -1.];
        let dys = [1., 0., -1., 0.];
        let angles = (0..50).map(|k| k as f64 * 0.06).collect::<Vec<_>>();
        assert_eq!(
            generate_from_baseline(&xs, &ys, &dxs, &dys, &angles).unwrap(),
            par_generate_from_baseline(&xs, &ys, &dxs, &dys, &angles).unwrap()
        );
    }
}

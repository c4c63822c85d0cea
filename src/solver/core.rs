use glam::DVec2;

use crate::state::{cell_center, cell_index, idx_inner, N};

/// Semi-Lagrangian advection: traces each cell centre backwards through `velocity`
/// and copies the value of the cell it lands in. Nearest-cell sampling, no
/// interpolation; the source index is clamped to the grid on both axes.
///
/// Generic over the cell value so the same pass advects vectors and scalars.
pub fn advect<T: Copy>(d: &mut [T], d0: &[T], velocity: &[DVec2], dt: f64) {
    for y in 0..N {
        for x in 0..N {
            let ii = idx_inner(x, y);
            let source = cell_center(x, y) - velocity[ii] * dt;
            d[ii] = d0[cell_index(source)];
        }
    }
}

/// Self-advect velocity: both the back-trace and the sampled value come from the
/// pre-advection copy in `velocity0`.
pub fn advect_velocity(velocity: &mut [DVec2], velocity0: &mut [DVec2], dt: f64) {
    velocity0.copy_from_slice(velocity);
    let velocity0: &[DVec2] = velocity0;
    advect(velocity, velocity0, velocity0, dt);
}

/// Advect a scalar through an already-advected velocity field.
/// `scratch` receives the pre-advection copy of `field`.
pub fn advect_scalar(field: &mut [f64], scratch: &mut [f64], velocity: &[DVec2], dt: f64) {
    scratch.copy_from_slice(field);
    advect(field, scratch, velocity, dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{idx, N};

    #[test]
    fn test_advect_uniform_field_unchanged() {
        let d0 = vec![5.0; N * N];
        let mut d = vec![0.0; N * N];
        // Deliberately wild velocities, including ones that trace far outside the domain
        let velocity: Vec<DVec2> = (0..N * N)
            .map(|i| DVec2::new((i % 7) as f64 * 3.0 - 9.0, (i % 5) as f64 * -40.0 + 11.0))
            .collect();

        advect(&mut d, &d0, &velocity, 0.1);

        for (i, &val) in d.iter().enumerate() {
            assert_eq!(val, 5.0, "Uniform field should stay uniform at cell {}", i);
        }
    }

    #[test]
    fn test_advect_zero_velocity_preserves() {
        let mut d0 = vec![0.0; N * N];
        for y in 0..N {
            for x in 0..N {
                d0[idx_inner(x, y)] = (x * 1000 + y) as f64;
            }
        }
        let mut d = vec![0.0; N * N];
        let velocity = vec![DVec2::ZERO; N * N];

        advect(&mut d, &d0, &velocity, 0.25);

        assert_eq!(d, d0, "Zero velocity should reproduce the source field exactly");
    }

    #[test]
    fn test_advect_shifts_by_whole_cells() {
        // u = 1 with dt = 0.03 traces back exactly three cells to the left
        let mut d0 = vec![0.0; N * N];
        for y in 0..N {
            for x in 0..N {
                d0[idx_inner(x, y)] = x as f64;
            }
        }
        let mut d = vec![0.0; N * N];
        let velocity = vec![DVec2::new(1.0, 0.0); N * N];

        advect(&mut d, &d0, &velocity, 0.03);

        let mid = (N / 2) as i32;
        assert_eq!(d[idx(mid, mid)], (mid - 3) as f64);
        // Left edge clamps to column 0
        assert_eq!(d[idx(1, mid)], 0.0);
        assert_eq!(d[idx(0, mid)], 0.0);
    }

    #[test]
    fn test_advect_clamps_large_timestep() {
        let mut d0 = vec![0.0; N * N];
        for y in 0..N {
            for x in 0..N {
                d0[idx_inner(x, y)] = y as f64;
            }
        }
        let mut d = vec![-1.0; N * N];
        let velocity = vec![DVec2::new(0.0, 1.0); N * N];

        // Back-trace lands far below the floor for every cell
        advect(&mut d, &d0, &velocity, 1000.0);

        assert!(d.iter().all(|&v| v == 0.0), "Every cell should sample the floor row");
    }

    #[test]
    fn test_advect_velocity_uses_old_field() {
        let mut velocity = vec![DVec2::ZERO; N * N];
        let mut velocity0 = vec![DVec2::ZERO; N * N];
        // Single moving cell: it moves itself out, neighbours with zero velocity keep their values
        let mid = (N / 2) as i32;
        velocity[idx(mid, mid)] = DVec2::new(0.02, 0.0);

        advect_velocity(&mut velocity, &mut velocity0, 1.0);

        // The moving cell back-traces two cells left and samples zero there
        assert_eq!(velocity[idx(mid, mid)], DVec2::ZERO);
        assert_eq!(velocity0[idx(mid, mid)], DVec2::new(0.02, 0.0), "Old copy should be kept");
    }

    #[test]
    fn test_advect_scalar_reads_pre_advection_copy() {
        let mut field = vec![0.0; N * N];
        for y in 0..N {
            for x in 0..N {
                field[idx_inner(x, y)] = (y * N + x) as f64;
            }
        }
        let original = field.clone();
        let mut scratch = vec![0.0; N * N];
        let velocity = vec![DVec2::new(0.0, 0.01); N * N];

        advect_scalar(&mut field, &mut scratch, &velocity, 1.0);

        assert_eq!(scratch, original);
        let mid = N / 2;
        // One row up samples one row down, and row 0 clamps onto itself
        assert_eq!(field[idx_inner(mid, mid)], original[idx_inner(mid, mid - 1)]);
        assert_eq!(field[idx_inner(mid, 0)], original[idx_inner(mid, 0)]);
    }
}

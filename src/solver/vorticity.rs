use glam::DVec2;

use crate::state::{idx_inner, DX, DY, N};

/// Gradient magnitudes below this are treated as zero instead of normalized.
const GRADIENT_EPSILON: f64 = 1e-6;

/// Discrete vorticity on interior cells via central differences over two cells:
/// omega = du/dx - dv/dy.
/// Border rows and columns copy the nearest interior value.
pub fn compute_vorticity(velocity: &[DVec2], vorticity: &mut [f64]) {
    let two_dx = 2.0 * DX;
    let two_dy = 2.0 * DY;
    for y in 1..(N - 1) {
        for x in 1..(N - 1) {
            let dudx = (velocity[idx_inner(x + 1, y)].x - velocity[idx_inner(x - 1, y)].x) / two_dx;
            let dvdy = (velocity[idx_inner(x, y + 1)].y - velocity[idx_inner(x, y - 1)].y) / two_dy;
            vorticity[idx_inner(x, y)] = dudx - dvdy;
        }
    }

    // One-sided extension onto the border
    for y in 0..N {
        for x in 0..N {
            if x == 0 || y == 0 || x == N - 1 || y == N - 1 {
                let ix = x.clamp(1, N - 2);
                let iy = y.clamp(1, N - 2);
                vorticity[idx_inner(x, y)] = vorticity[idx_inner(ix, iy)];
            }
        }
    }
}

/// Unit-length forward-difference gradient of |omega| at an interior cell.
/// Returns zero when the gradient is too small to normalize.
pub fn normalized_gradient(vorticity_abs: &[f64], x: usize, y: usize) -> DVec2 {
    let here = vorticity_abs[idx_inner(x, y)];
    let grad = DVec2::new(
        (vorticity_abs[idx_inner(x + 1, y)] - here) / DX,
        (vorticity_abs[idx_inner(x, y + 1)] - here) / DY,
    );
    let len = grad.length();
    if len < GRADIENT_EPSILON {
        DVec2::ZERO
    } else {
        grad / len
    }
}

/// Confinement force at an interior cell: the normalized gradient rotated by 90
/// degrees, scaled by the local vorticity and epsilon.
pub fn confinement_force(vorticity: &[f64], vorticity_abs: &[f64], x: usize, y: usize, epsilon: f64) -> DVec2 {
    let n = normalized_gradient(vorticity_abs, x, y);
    DVec2::new(-n.y, n.x) * vorticity[idx_inner(x, y)] * epsilon
}

/// Vorticity confinement: re-injects rotation lost to numerical dissipation in
/// the nearest-cell advection. Interior cells only.
///
/// `vorticity` and `vorticity_abs` are scratch buffers and are fully overwritten.
pub(super) fn vorticity_confinement(
    velocity: &mut [DVec2],
    vorticity: &mut [f64],
    vorticity_abs: &mut [f64],
    epsilon: f64,
    dt: f64,
) {
    compute_vorticity(velocity, vorticity);
    for (a, w) in vorticity_abs.iter_mut().zip(vorticity.iter()) {
        *a = w.abs();
    }

    for y in 1..(N - 1) {
        for x in 1..(N - 1) {
            let force = confinement_force(vorticity, vorticity_abs, x, y, epsilon);
            velocity[idx_inner(x, y)] += force * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::idx;

    #[test]
    fn test_uniform_velocity_zero_vorticity() {
        let velocity = vec![DVec2::new(0.3, -0.7); N * N];
        let mut vorticity = vec![1.0; N * N];
        compute_vorticity(&velocity, &mut vorticity);
        assert!(vorticity.iter().all(|&w| w == 0.0), "Uniform flow should have zero vorticity everywhere");
    }

    #[test]
    fn test_uniform_velocity_zero_force() {
        let original = vec![DVec2::new(0.3, -0.7); N * N];
        let mut velocity = original.clone();
        let mut vorticity = vec![0.0; N * N];
        let mut vorticity_abs = vec![0.0; N * N];

        vorticity_confinement(&mut velocity, &mut vorticity, &mut vorticity_abs, 0.05, 0.016);

        for y in 1..(N - 1) {
            for x in 1..(N - 1) {
                let f = confinement_force(&vorticity, &vorticity_abs, x, y, 0.05);
                assert_eq!(f, DVec2::ZERO, "Force should vanish at ({}, {})", x, y);
            }
        }
        assert_eq!(velocity, original, "Uniform flow should be untouched");
    }

    #[test]
    fn test_vorticity_central_difference() {
        // u = x_pos, v = 0  =>  du/dx = 1 everywhere
        let mut velocity = vec![DVec2::ZERO; N * N];
        for y in 0..N {
            for x in 0..N {
                velocity[idx_inner(x, y)] = DVec2::new(x as f64 * DX, 0.0);
            }
        }
        let mut vorticity = vec![0.0; N * N];
        compute_vorticity(&velocity, &mut vorticity);
        let mid = (N / 2) as i32;
        assert!((vorticity[idx(mid, mid)] - 1.0).abs() < 1e-9, "Got {}", vorticity[idx(mid, mid)]);
    }

    #[test]
    fn test_vorticity_border_extends_interior() {
        let mut velocity = vec![DVec2::ZERO; N * N];
        for y in 0..N {
            for x in 0..N {
                let xf = x as f64 * DX;
                let yf = y as f64 * DY;
                velocity[idx_inner(x, y)] = DVec2::new(xf * xf, -yf * xf);
            }
        }
        let mut vorticity = vec![0.0; N * N];
        compute_vorticity(&velocity, &mut vorticity);
        for k in 1..(N - 1) {
            assert_eq!(vorticity[idx_inner(0, k)], vorticity[idx_inner(1, k)]);
            assert_eq!(vorticity[idx_inner(N - 1, k)], vorticity[idx_inner(N - 2, k)]);
            assert_eq!(vorticity[idx_inner(k, 0)], vorticity[idx_inner(k, 1)]);
            assert_eq!(vorticity[idx_inner(k, N - 1)], vorticity[idx_inner(k, N - 2)]);
        }
        assert_eq!(vorticity[idx_inner(0, 0)], vorticity[idx_inner(1, 1)]);
        assert_eq!(vorticity[idx_inner(N - 1, N - 1)], vorticity[idx_inner(N - 2, N - 2)]);
        assert_ne!(vorticity[idx_inner(0, 10)], 0.0, "Border should not be zeroed");
    }

    #[test]
    fn test_normalized_gradient_unit_length() {
        let mut vorticity_abs = vec![0.0; N * N];
        for y in 0..N {
            for x in 0..N {
                vorticity_abs[idx_inner(x, y)] = 3.0 * x as f64 + 4.0 * y as f64;
            }
        }
        let n = normalized_gradient(&vorticity_abs, 10, 10);
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!((n.x - 0.6).abs() < 1e-12 && (n.y - 0.8).abs() < 1e-12, "Got {:?}", n);
    }

    #[test]
    fn test_normalized_gradient_tiny_is_zero() {
        let mut vorticity_abs = vec![0.0; N * N];
        // Gradient magnitude 1e-9 / DX = 1e-7 < 1e-6
        vorticity_abs[idx_inner(11, 10)] = 1e-9;
        assert_eq!(normalized_gradient(&vorticity_abs, 10, 10), DVec2::ZERO);
    }

    #[test]
    fn test_confinement_force_is_rotated_gradient() {
        let mut vorticity_abs = vec![0.0; N * N];
        vorticity_abs[idx_inner(11, 10)] = 1.0; // gradient points +x
        let mut vorticity = vec![0.0; N * N];
        vorticity[idx_inner(10, 10)] = 2.0;
        let f = confinement_force(&vorticity, &vorticity_abs, 10, 10, 0.5);
        // (-n.y, n.x) = (0, 1), scaled by omega * epsilon = 1.0
        assert!((f - DVec2::new(0.0, 1.0)).length() < 1e-12, "Got {:?}", f);
    }

    #[test]
    fn test_confinement_leaves_border_velocity() {
        let mut velocity = vec![DVec2::ZERO; N * N];
        for y in 0..N {
            for x in 0..N {
                let xf = x as f64 * DX;
                velocity[idx_inner(x, y)] = DVec2::new((xf * 20.0).sin(), (y as f64 * 0.3).cos());
            }
        }
        let original = velocity.clone();
        let mut vorticity = vec![0.0; N * N];
        let mut vorticity_abs = vec![0.0; N * N];
        vorticity_confinement(&mut velocity, &mut vorticity, &mut vorticity_abs, 0.05, 0.1);
        for k in 0..N {
            assert_eq!(velocity[idx_inner(0, k)], original[idx_inner(0, k)]);
            assert_eq!(velocity[idx_inner(N - 1, k)], original[idx_inner(N - 1, k)]);
            assert_eq!(velocity[idx_inner(k, 0)], original[idx_inner(k, 0)]);
            assert_eq!(velocity[idx_inner(k, N - 1)], original[idx_inner(k, N - 1)]);
        }
        assert_ne!(velocity, original, "Interior should receive a confinement force");
    }
}

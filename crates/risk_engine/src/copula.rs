//! Equicorrelation matrices and their Cholesky factors.
//!
//! The correlated aggregation mode needs one specific correlation
//! structure: `dim x dim` with a single coefficient `rho` off-diagonal and
//! ones on the diagonal. Independent standard normals are transformed
//! through the lower-triangular Cholesky factor `L` (where `C = L * L^T`)
//! to obtain correlated normals, which the aggregator then maps to
//! uniforms and through each scenario's empirical inverse CDF — a Gaussian
//! copula that preserves every marginal while inducing the target rank
//! correlation.
//!
//! At `rho = 1` the matrix is only positive *semi*-definite, so the
//! factorisation tolerates zero pivots (zero diagonal entry, zeros below)
//! instead of failing: every scenario then shares a single normal driver,
//! which is exactly the comonotone limit.

use crate::error::EngineError;

/// An equicorrelation matrix: ones on the diagonal, `rho` elsewhere.
#[derive(Clone, Debug, PartialEq)]
pub struct CorrelationMatrix {
    data: Vec<f64>,
    dim: usize,
}

impl CorrelationMatrix {
    /// Builds the `dim x dim` equicorrelation matrix for `rho in [0, 1]`.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidCorrelation`] if `rho` leaves `[0, 1]`.
    pub fn equicorrelated(dim: usize, rho: f64) -> Result<Self, EngineError> {
        if !(0.0..=1.0).contains(&rho) {
            return Err(EngineError::InvalidCorrelation(rho));
        }

        let mut data = vec![rho; dim * dim];
        for i in 0..dim {
            data[i * dim + i] = 1.0;
        }
        Ok(Self { data, dim })
    }

    /// Matrix dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Element at `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.dim + j]
    }

    /// Computes the lower-triangular Cholesky factor.
    ///
    /// Tolerates positive semi-definite input: a pivot at or below zero
    /// becomes a zero row pivot with zeros beneath it. For equicorrelation
    /// with `rho in [0, 1]` this happens only at `rho = 1`, where the
    /// factor collapses every driver onto the first.
    pub fn cholesky(&self) -> CholeskyFactor {
        let n = self.dim;
        let mut lower = vec![0.0; n * n];

        for i in 0..n {
            for j in 0..=i {
                let mut sum = 0.0;
                if j == i {
                    for k in 0..j {
                        let l_jk = lower[j * n + k];
                        sum += l_jk * l_jk;
                    }
                    let pivot = self.get(j, j) - sum;
                    lower[j * n + j] = if pivot > 0.0 { pivot.sqrt() } else { 0.0 };
                } else {
                    for k in 0..j {
                        sum += lower[i * n + k] * lower[j * n + k];
                    }
                    let l_jj = lower[j * n + j];
                    lower[i * n + j] = if l_jj > 0.0 {
                        (self.get(i, j) - sum) / l_jj
                    } else {
                        0.0
                    };
                }
            }
        }

        CholeskyFactor { data: lower, dim: n }
    }
}

/// Lower-triangular Cholesky factor of a correlation matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct CholeskyFactor {
    data: Vec<f64>,
    dim: usize,
}

impl CholeskyFactor {
    /// Matrix dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Element at `(i, j)`; zero above the diagonal.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        if j > i {
            0.0
        } else {
            self.data[i * self.dim + j]
        }
    }

    /// Transforms independent standard normals into correlated normals,
    /// in place: `w = L * z`.
    ///
    /// # Panics
    ///
    /// Panics if `z.len() < self.dim()`.
    pub fn transform_inplace(&self, z: &mut [f64]) {
        assert!(
            z.len() >= self.dim,
            "input length {} below matrix dimension {}",
            z.len(),
            self.dim
        );

        let n = self.dim;
        // Rows are processed bottom-up so each w_i only reads z_j with
        // j <= i that have not been overwritten yet.
        for i in (0..n).rev() {
            let mut sum = 0.0;
            for j in 0..=i {
                sum += self.get(i, j) * z[j];
            }
            z[i] = sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_equicorrelated_layout() {
        let m = CorrelationMatrix::equicorrelated(3, 0.4).unwrap();
        assert_eq!(m.dim(), 3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.4 };
                assert_eq!(m.get(i, j), expected);
            }
        }
    }

    #[test]
    fn test_rho_out_of_range_rejected() {
        assert!(matches!(
            CorrelationMatrix::equicorrelated(2, -0.1),
            Err(EngineError::InvalidCorrelation(_))
        ));
        assert!(matches!(
            CorrelationMatrix::equicorrelated(2, 1.5),
            Err(EngineError::InvalidCorrelation(_))
        ));
    }

    #[test]
    fn test_cholesky_identity_at_rho_zero() {
        let l = CorrelationMatrix::equicorrelated(3, 0.0).unwrap().cholesky();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(l.get(i, j), expected);
            }
        }
    }

    #[test]
    fn test_cholesky_2x2_known_factor() {
        let l = CorrelationMatrix::equicorrelated(2, 0.5).unwrap().cholesky();
        // L = [[1, 0], [0.5, sqrt(0.75)]]
        assert_relative_eq!(l.get(0, 0), 1.0);
        assert_relative_eq!(l.get(1, 0), 0.5);
        assert_relative_eq!(l.get(1, 1), 0.75_f64.sqrt());
        assert_eq!(l.get(0, 1), 0.0);
    }

    #[test]
    fn test_cholesky_reconstructs_matrix() {
        let m = CorrelationMatrix::equicorrelated(4, 0.3).unwrap();
        let l = m.cholesky();
        for i in 0..4 {
            for j in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += l.get(i, k) * l.get(j, k);
                }
                assert_relative_eq!(sum, m.get(i, j), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_cholesky_comonotone_limit() {
        // rho = 1 is PSD, not PD: all drivers collapse onto the first
        let l = CorrelationMatrix::equicorrelated(3, 1.0).unwrap().cholesky();
        for i in 0..3 {
            assert_relative_eq!(l.get(i, 0), 1.0);
            for j in 1..3 {
                assert_eq!(l.get(i, j), 0.0);
            }
        }

        let mut z = [0.7, -1.2, 0.4];
        l.transform_inplace(&mut z);
        assert_eq!(z, [0.7, 0.7, 0.7]);
    }

    #[test]
    fn test_transform_inplace_matches_manual_product() {
        let l = CorrelationMatrix::equicorrelated(3, 0.6).unwrap().cholesky();
        let z = [0.3, -0.8, 1.5];

        let mut expected = [0.0; 3];
        for i in 0..3 {
            for j in 0..3 {
                expected[i] += l.get(i, j) * z[j];
            }
        }

        let mut w = z;
        l.transform_inplace(&mut w);
        for i in 0..3 {
            assert_relative_eq!(w[i], expected[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_induced_correlation_is_close_to_target() {
        // Transform a batch of independent normals and measure the sample
        // correlation between the first two coordinates
        use risk_models::SimRng;

        let rho = 0.7;
        let l = CorrelationMatrix::equicorrelated(2, rho).unwrap().cholesky();
        let mut rng = SimRng::from_seed(42);

        let n = 200_000;
        let mut xs = Vec::with_capacity(n);
        let mut ys = Vec::with_capacity(n);
        let mut z = [0.0; 2];
        for _ in 0..n {
            rng.fill_standard_normal(&mut z);
            l.transform_inplace(&mut z);
            xs.push(z[0]);
            ys.push(z[1]);
        }

        let mean_x: f64 = xs.iter().sum::<f64>() / n as f64;
        let mean_y: f64 = ys.iter().sum::<f64>() / n as f64;
        let mut cov = 0.0;
        let mut var_x = 0.0;
        let mut var_y = 0.0;
        for i in 0..n {
            let dx = xs[i] - mean_x;
            let dy = ys[i] - mean_y;
            cov += dx * dy;
            var_x += dx * dx;
            var_y += dy * dy;
        }
        let sample_rho = cov / (var_x.sqrt() * var_y.sqrt());
        assert!((sample_rho - rho).abs() < 0.01, "rho = {}", sample_rho);
    }
}

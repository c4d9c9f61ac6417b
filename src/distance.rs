//! Dense distance matrix.

use crate::model::City;

/// A dense n×n Euclidean distance matrix stored in row-major order.
///
/// Built once from a city list and read-only thereafter. Symmetry and a
/// zero diagonal hold by construction: each pairwise distance is computed
/// once and written to both `(i, j)` and `(j, i)`, and the diagonal is
/// never touched.
///
/// # Examples
///
/// ```
/// use tsp_evo::model::City;
/// use tsp_evo::distance::DistanceMatrix;
///
/// let cities = vec![
///     City::new("A", 0.0, 0.0),
///     City::new("B", 3.0, 4.0),
///     City::new("C", 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert_eq!(dm.size(), 3);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!((dm.get(1, 0) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the Euclidean distance matrix for the given cities.
    ///
    /// An empty city list yields an empty matrix.
    pub fn from_cities(cities: &[City]) -> Self {
        let n = cities.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

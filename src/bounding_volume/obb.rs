//! Oriented Bounding Box.

use crate::math::{Matrix, Point, Real, Rotation, Vector, DEFAULT_EPSILON, DIM};
use num::Bounded;

/// An Oriented Bounding Box.
///
/// A box centered at `center`, aligned to the orthonormal axes stored as the
/// **columns** of `rotation` and extending by `half_extents` along each of
/// them. The first column of `rotation` is, by construction of
/// [`Obb::from_points`], the axis of largest variance of the enclosed point
/// cloud.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Obb {
    /// The center of the box.
    pub center: Point<Real>,
    /// The orientation of the box. Its columns are the box axes in world space.
    pub rotation: Rotation<Real>,
    /// The half-lengths of the box along each of its local axes.
    pub half_extents: Vector<Real>,
}

impl Obb {
    /// Creates a new Obb from its center, orientation, and half-extents.
    #[inline]
    pub fn new(center: Point<Real>, rotation: Rotation<Real>, half_extents: Vector<Real>) -> Obb {
        Obb {
            center,
            rotation,
            half_extents,
        }
    }

    /// Creates an axis-aligned Obb from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Obb {
        Obb::new(center, Rotation::identity(), half_extents)
    }

    /// Computes a covariance-aligned Obb enclosing the given set of points.
    ///
    /// The box axes are the eigenvectors of the covariance matrix of `pts`,
    /// ordered by decreasing eigenvalue, so the local x axis always carries
    /// the direction of largest variance of the cloud. The half-extents are
    /// inflated by `inflation_radius` along each axis.
    ///
    /// The returned Obb is not guaranteed to be the smallest enclosing Obb.
    /// Though it should be a pretty good one for most purposes.
    ///
    /// # Panics
    ///
    /// Panics if `pts` is empty.
    pub fn from_points(pts: &[Point<Real>], inflation_radius: Real) -> Obb {
        assert!(
            !pts.is_empty(),
            "Cannot compute the Obb of an empty set of points."
        );

        let cov = crate::utils::cov(pts);
        let eig = cov.symmetric_eigen();

        let mut order = [0usize, 1, 2];
        order.sort_by(|&i, &j| eig.eigenvalues[j].total_cmp(&eig.eigenvalues[i]));

        let mut axes = Matrix::from_columns(&[
            eig.eigenvectors.column(order[0]).into_owned(),
            eig.eigenvectors.column(order[1]).into_owned(),
            eig.eigenvectors.column(order[2]).into_owned(),
        ]);

        if axes.determinant() < 0.0 {
            axes = -axes;
        }

        let mut mins = Vector::repeat(Real::max_value());
        let mut maxs = Vector::repeat(-Real::max_value());

        for pt in pts {
            for i in 0..DIM {
                let dot = axes.column(i).dot(&pt.coords);
                mins[i] = mins[i].min(dot);
                maxs[i] = maxs[i].max(dot);
            }
        }

        let rotation = Rotation::from_matrix_unchecked(axes);
        let local_center = (mins + maxs) / 2.0;

        Obb {
            center: Point::from(rotation * local_center),
            rotation,
            half_extents: (maxs - mins) / 2.0 + Vector::repeat(inflation_radius),
        }
    }

    /// The axis of largest variance of the point cloud this box was fitted on.
    ///
    /// This is the first column of [`Self::rotation`] (the local x axis in
    /// world space).
    #[inline]
    pub fn principal_axis(&self) -> Vector<Real> {
        self.rotation.matrix().column(0).into_owned()
    }

    /// The eight corners of this box.
    pub fn corners(&self) -> [Point<Real>; 8] {
        let x = self.rotation * (Vector::x() * self.half_extents.x);
        let y = self.rotation * (Vector::y() * self.half_extents.y);
        let z = self.rotation * (Vector::z() * self.half_extents.z);

        [
            self.center - x - y - z,
            self.center + x - y - z,
            self.center + x + y - z,
            self.center - x + y - z,
            self.center - x - y + z,
            self.center + x - y + z,
            self.center + x + y + z,
            self.center - x + y + z,
        ]
    }

    /// Tests whether a point lies inside this box (boundary included).
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        let local = self.rotation.inverse_transform_vector(&(pt - self.center));

        local.x.abs() <= self.half_extents.x
            && local.y.abs() <= self.half_extents.y
            && local.z.abs() <= self.half_extents.z
    }

    /// Tests whether this box overlaps `other`.
    ///
    /// This is a separating-axis test over the 15 candidate axes of the box
    /// pair (the three face axes of each box and the nine pairwise edge cross
    /// products). Touching boxes count as overlapping. The test is
    /// conservative: an epsilon cushions the projected radii so nearly
    /// parallel edge pairs cannot produce a spurious separating axis.
    pub fn intersects(&self, other: &Obb) -> bool {
        let ra = self.rotation.matrix();
        let rb = other.rotation.matrix();

        // Frame and position of `other` expressed in the local frame of `self`.
        let r = ra.transpose() * rb;
        let t = ra.transpose() * (other.center - self.center);

        let mut abs_r = Matrix::zeros();
        for i in 0..DIM {
            for j in 0..DIM {
                abs_r[(i, j)] = r[(i, j)].abs() + DEFAULT_EPSILON;
            }
        }

        let ae = &self.half_extents;
        let be = &other.half_extents;

        // Face axes of `self`.
        for i in 0..DIM {
            let rb_proj = be.x * abs_r[(i, 0)] + be.y * abs_r[(i, 1)] + be.z * abs_r[(i, 2)];
            if t[i].abs() > ae[i] + rb_proj {
                return false;
            }
        }

        // Face axes of `other`.
        for j in 0..DIM {
            let ra_proj = ae.x * abs_r[(0, j)] + ae.y * abs_r[(1, j)] + ae.z * abs_r[(2, j)];
            if t.dot(&r.column(j)).abs() > ra_proj + be[j] {
                return false;
            }
        }

        // Edge cross products of both boxes.
        for i in 0..DIM {
            let i1 = (i + 1) % 3;
            let i2 = (i + 2) % 3;

            for j in 0..DIM {
                let j1 = (j + 1) % 3;
                let j2 = (j + 2) % 3;

                let ra_proj = ae[i1] * abs_r[(i2, j)] + ae[i2] * abs_r[(i1, j)];
                let rb_proj = be[j1] * abs_r[(i, j2)] + be[j2] * abs_r[(i, j1)];

                if (t[i2] * r[(i1, j)] - t[i1] * r[(i2, j)]).abs() > ra_proj + rb_proj {
                    return false;
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::Obb;
    use crate::math::{Point, Real, Rotation, Vector};

    fn unit_cube(center: Point<Real>) -> Obb {
        Obb::from_half_extents(center, Vector::repeat(0.5))
    }

    #[test]
    fn fit_contains_its_points() {
        let pts = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(4.0, 1.0, 0.5),
            Point::new(-2.0, 3.0, 1.0),
            Point::new(1.0, -1.0, -2.0),
            Point::new(2.5, 2.5, 0.0),
        ];

        let obb = Obb::from_points(&pts, 0.0);
        let tol = Obb {
            half_extents: obb.half_extents + Vector::repeat(1.0e-4),
            ..obb
        };

        for pt in &pts {
            assert!(tol.contains_point(pt));
        }
    }

    #[test]
    fn fit_dominant_axis_of_elongated_cloud() {
        let dir = Vector::new(1.0, 2.0, -0.5).normalize();
        let pts: Vec<_> = (0..20)
            .map(|i| {
                let s = i as Real - 10.0;
                Point::from(dir * s) + Vector::new(0.01, -0.02, 0.01) * (i % 3) as Real
            })
            .collect();

        let obb = Obb::from_points(&pts, 0.0);
        let axis = obb.principal_axis();
        assert!(relative_eq!(axis.dot(&dir).abs(), 1.0, epsilon = 1.0e-3));
    }

    #[test]
    fn fit_applies_inflation_radius() {
        let pts = vec![Point::new(1.0, 2.0, 3.0)];
        let obb = Obb::from_points(&pts, 0.25);

        assert!(relative_eq!(obb.half_extents.x, 0.25, epsilon = 1.0e-6));
        assert!(relative_eq!(obb.half_extents.y, 0.25, epsilon = 1.0e-6));
        assert!(relative_eq!(obb.half_extents.z, 0.25, epsilon = 1.0e-6));
        assert!(relative_eq!((obb.center - pts[0]).norm(), 0.0, epsilon = 1.0e-5));
    }

    #[test]
    fn corners_lie_on_the_boundary() {
        let obb = Obb::new(
            Point::new(1.0, -2.0, 0.5),
            Rotation::from_euler_angles(0.3, -0.7, 1.1),
            Vector::new(1.0, 2.0, 3.0),
        );

        let tol = Obb {
            half_extents: obb.half_extents + Vector::repeat(1.0e-4),
            ..obb
        };

        for corner in obb.corners() {
            assert!(tol.contains_point(&corner));
            // Corners are extremal: shrinking the box must exclude all of them.
            let shrunk = Obb {
                half_extents: obb.half_extents - Vector::repeat(1.0e-3),
                ..obb
            };
            assert!(!shrunk.contains_point(&corner));
        }
    }

    #[test]
    fn intersects_axis_aligned() {
        let a = unit_cube(Point::origin());
        assert!(a.intersects(&unit_cube(Point::new(0.9, 0.0, 0.0))));
        assert!(!a.intersects(&unit_cube(Point::new(1.1, 0.0, 0.0))));
        // Touching faces count as overlapping.
        assert!(a.intersects(&unit_cube(Point::new(1.0, 0.0, 0.0))));
    }

    #[test]
    fn intersects_rotated() {
        let a = unit_cube(Point::origin());
        let rot = Rotation::from_axis_angle(&Vector::z_axis(), std::f64::consts::FRAC_PI_4 as Real);

        let diag = |d: Real| Obb::new(Point::new(d, d, 0.0), rot, Vector::repeat(0.5));

        assert!(a.intersects(&diag(0.7)));
        // Separated by a face axis of the rotated box even though the
        // axis-aligned projections still overlap.
        assert!(!a.intersects(&diag(0.9)));
        assert!(!a.intersects(&diag(1.2)));
    }

    #[test]
    fn intersects_is_symmetric() {
        let a = unit_cube(Point::origin());
        let rot = Rotation::from_euler_angles(0.5, 0.2, -0.4);
        let b = Obb::new(Point::new(0.8, 0.3, -0.2), rot, Vector::new(0.4, 0.6, 0.2));

        assert_eq!(a.intersects(&b), b.intersects(&a));
        assert!(a.intersects(&b));
    }
}

use super::{Point3, Vector3, TOLERANCE};

/// Unnormalized normal of a triangle, following its winding.
///
/// The length equals twice the triangle's area.
#[must_use]
pub fn triangle_normal(a: &Point3, b: &Point3, c: &Point3) -> Vector3 {
    (b - a).cross(&(c - a))
}

/// Unnormalized normal of a 3D polygon, following its winding.
///
/// Sums the cross products of the fan from the first point, so the
/// length equals twice the polygon's area. Returns the zero vector for
/// fewer than 3 points.
#[must_use]
pub fn polygon_normal(points: &[Point3]) -> Vector3 {
    if points.len() < 3 {
        return Vector3::zeros();
    }
    let n = points.len();
    let mut cross_sum = Vector3::zeros();
    let o = &points[0];
    for i in 1..n {
        let a = points[i] - o;
        let b = points[(i + 1) % n] - o;
        cross_sum += a.cross(&b);
    }
    cross_sum
}

/// Arithmetic mean of a point set, or `None` if it is empty.
#[must_use]
pub fn centroid(points: &[Point3]) -> Option<Point3> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    #[allow(clippy::cast_precision_loss)]
    let count = points.len() as f64;
    Some(Point3::from(sum / count))
}

/// Largest distance of any point from the plane through the polygon's
/// centroid along its normal.
///
/// Returns `None` if the polygon is degenerate.
#[must_use]
pub fn plane_deviation(points: &[Point3]) -> Option<f64> {
    let normal = polygon_normal(points);
    let len = normal.norm();
    if len < TOLERANCE {
        return None;
    }
    let normal = normal / len;
    let center = centroid(points)?;
    Some(
        points
            .iter()
            .map(|p| (p - center).dot(&normal).abs())
            .fold(0.0, f64::max),
    )
}

use glam::Vec3;

/// Number of points in every generated polyline. Fixed after construction.
pub const POINT_COUNT: usize = 100;

/// Ordered sequence of connected 3D points rendered as a continuous line.
/// Points are mutated in place every frame; the sequence is never resized.
#[derive(Debug, Clone)]
pub struct Polyline {
    points: Vec<Vec3>,
}

impl Polyline {
    pub fn from_points(points: Vec<Vec3>) -> Self {
        debug_assert_eq!(points.len(), POINT_COUNT);
        Self { points }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [Vec3] {
        &mut self.points
    }

    /// The point the chain camera tracks
    pub fn last_point(&self) -> Vec3 {
        self.points[self.points.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_keeps_point_order() {
        let points: Vec<Vec3> = (0..POINT_COUNT).map(|i| Vec3::splat(i as f32)).collect();
        let line = Polyline::from_points(points);

        assert_eq!(line.len(), POINT_COUNT);
        assert_eq!(line.points()[0], Vec3::ZERO);
        assert_eq!(line.last_point(), Vec3::splat((POINT_COUNT - 1) as f32));
    }

    #[test]
    fn points_mut_mutates_in_place() {
        let points: Vec<Vec3> = vec![Vec3::ZERO; POINT_COUNT];
        let mut line = Polyline::from_points(points);

        line.points_mut()[42] = Vec3::new(1.0, 2.0, 3.0);

        assert_eq!(line.len(), POINT_COUNT);
        assert_eq!(line.points()[42], Vec3::new(1.0, 2.0, 3.0));
    }
}

use crate::boundary::*;
use crate::stencil::*;
use crate::util::*;

/// Region stencils for every region of an `n x n x n` grid,
/// along with the squared grid spacing used for the source term.
#[derive(Debug, Clone)]
pub struct NeumannStencil {
    grid: AABB<3>,
    delta_sq: f32,
    stencils: [RegionStencil; Region::COUNT],
}

impl NeumannStencil {
    pub fn new(n: usize, delta: f32) -> Self {
        debug_assert!(n >= 3);
        let grid = AABB::cube(n);
        let mut stencils = [RegionStencil::new(
            Region::new([Extent::Interior; 3]),
            &grid,
        ); Region::COUNT];
        for region in Region::all() {
            stencils[region.index()] = RegionStencil::new(region, &grid);
        }
        NeumannStencil {
            grid,
            delta_sq: delta * delta,
            stencils,
        }
    }

    pub fn grid(&self) -> &AABB<3> {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.exclusive_bounds()[0] as usize
    }

    pub fn delta_sq(&self) -> f32 {
        self.delta_sq
    }

    pub fn region_stencil(&self, region: &Region) -> &RegionStencil {
        &self.stencils[region.index()]
    }

    /// Updated value for a single coordinate,
    /// classifying it on the fly.
    pub fn evaluate(
        &self,
        coord: &Coord<3>,
        current: &[f32],
        source: &[f32],
    ) -> f32 {
        debug_assert!(self.grid.contains(coord));
        let region = Region::classify(coord, self.size());
        let linear = self.grid.coord_to_linear(coord);
        self.region_stencil(&region)
            .apply(current, source, linear, self.delta_sq)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn stencils_indexed_by_region() {
        let s = NeumannStencil::new(7, 1.0);
        assert_eq!(s.size(), 7);
        for region in Region::all() {
            assert_eq!(s.region_stencil(&region).region(), region);
            assert_eq!(s.region_stencil(&region).weight_sum(), 6.0);
        }
    }

    #[test]
    fn delta_squared() {
        let s = NeumannStencil::new(3, 0.5);
        assert_approx_eq!(f32, s.delta_sq(), 0.25);
    }

    #[test]
    fn evaluate_face_and_corner() {
        let n = 3;
        let s = NeumannStencil::new(n, 1.0);
        let grid = *s.grid();
        let mut current = vec![0.0; grid.buffer_size()];
        let source = vec![0.0; grid.buffer_size()];
        current[grid.coord_to_linear(&vector![1, 1, 1])] = -1.0 / 6.0;

        // Face center mirrors the center cell with weight two.
        let face = s.evaluate(&vector![0, 1, 1], &current, &source);
        assert_approx_eq!(f32, face, -1.0 / 18.0);

        let corner = s.evaluate(&vector![2, 2, 2], &current, &source);
        assert_eq!(corner, 0.0);

        let edge = s.evaluate(&vector![0, 0, 1], &current, &source);
        assert_eq!(edge, 0.0);

        let center = s.evaluate(&vector![1, 1, 1], &current, &source);
        assert_eq!(center, 0.0);
    }

    #[test]
    fn corner_reads_three_mirrors() {
        let n = 4;
        let s = NeumannStencil::new(n, 1.0);
        let grid = *s.grid();
        let mut current = vec![0.0; grid.buffer_size()];
        let source = vec![0.0; grid.buffer_size()];
        current[grid.coord_to_linear(&vector![1, 0, 0])] = 1.0;
        current[grid.coord_to_linear(&vector![0, 1, 0])] = 2.0;
        current[grid.coord_to_linear(&vector![0, 0, 1])] = 3.0;
        let v = s.evaluate(&vector![0, 0, 0], &current, &source);
        assert_approx_eq!(f32, v, 2.0 * (1.0 + 2.0 + 3.0) / 6.0);
    }
}

use crate::boundary::*;
use crate::domain::*;
use crate::stencil::*;
use crate::util::*;
use rayon::prelude::*;

/// One Jacobi sweep, `output` is fully rewritten from `input`.
///
/// Each of the 27 regions is spawned as its own task on the
/// current rayon pool, and each task splits its region into rows
/// along the fastest axis. Tasks read only `input` and `source`,
/// and write disjoint cells of `output`.
/// Returns once every region has finished.
pub fn apply<SourceType, DomainType>(
    stencil: &NeumannStencil,
    source: &SourceType,
    input: &DomainType,
    output: &mut DomainType,
) where
    SourceType: DomainView<3>,
    DomainType: DomainView<3>,
{
    profiling::scope!("par_stencil::apply");
    debug_assert_eq!(input.aabb(), stencil.grid());
    debug_assert_eq!(output.aabb(), stencil.grid());
    debug_assert_eq!(source.aabb(), stencil.grid());

    let n = stencil.size();
    let grid = stencil.grid();
    let delta_sq = stencil.delta_sq();
    let current = input.buffer();
    let source = source.buffer();
    let writer = RegionWriter::new(output.buffer_mut());
    let writer = &writer;

    rayon::scope(|s| {
        for region in Region::all() {
            let region_stencil = stencil.region_stencil(&region);
            s.spawn(move |_| {
                profiling::scope!("par_stencil: region task");
                apply_region(
                    region_stencil,
                    grid,
                    &region.aabb(n),
                    current,
                    source,
                    delta_sq,
                    writer,
                );
            });
        }
    });
}

fn apply_region(
    region_stencil: &RegionStencil,
    grid: &AABB<3>,
    region_box: &AABB<3>,
    current: &[f32],
    source: &[f32],
    delta_sq: f32,
    writer: &RegionWriter<'_>,
) {
    let extent = region_box.exclusive_bounds();
    let rows = (extent[0] * extent[1]) as usize;
    let row_len = extent[2] as usize;
    let min = region_box.min();

    (0..rows).into_par_iter().for_each(|r| {
        let i = min[0] + (r / extent[1] as usize) as i32;
        let j = min[1] + (r % extent[1] as usize) as i32;
        let row_start = grid.coord_to_linear(&vector![i, j, min[2]]);
        for linear in row_start..row_start + row_len {
            let v = region_stencil.apply(current, source, linear, delta_sq);
            // Safety: regions are disjoint and rows within a region are
            // disjoint, so no other task writes `linear`.
            unsafe { writer.write(linear, v) };
        }
    });
}

//! Text output of a solved field.

use crate::domain::*;
use crate::util::*;

/// Middle cross section, the plane `i = n / 2`.
/// Each line holds a fixed `k`, running over `j`.
/// Values have 5 fractional digits and are each followed by a space.
pub fn format_mid_slice<DomainType: DomainView<3>>(domain: &DomainType) -> String {
    let n = domain.aabb().exclusive_bounds()[0];
    let mid = n / 2;
    let mut result = String::new();
    for k in 0..n {
        for j in 0..n {
            let v = domain.view(&vector![mid, j, k]);
            result.push_str(&format!("{:.5} ", v));
        }
        result.push('\n');
    }
    result
}

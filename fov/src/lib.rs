//! Generic symmetric field-of-view computation.
//!
//! Visibility is decided with sightlines: a cell is visible when the
//! straight segment between the cell centers only crosses transparent
//! cells. The set of cells a segment crosses is the same in both
//! directions, so the visibility relation is exactly symmetric: if A sees
//! B, then B sees A at the same radius and transparency.
//!
//! The crate is geometry-library agnostic and works on plain `[i32; 2]`
//! cell coordinates.

/// Compute the visible cell set around an origin point.
///
/// Cells are visible up to the given Chebyshev radius. The origin cell is
/// always visible. The `transparent` predicate is queried for cells
/// strictly between the origin and a candidate cell, never for the
/// endpoints, so opaque cells themselves show up in the result when their
/// near face is in view.
pub fn compute(
    origin: [i32; 2],
    radius: i32,
    transparent: impl Fn([i32; 2]) -> bool,
) -> Vec<[i32; 2]> {
    let mut ret = Vec::new();

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let p = [origin[0] + dx, origin[1] + dy];
            if sees(origin, p, &transparent) {
                ret.push(p);
            }
        }
    }

    ret
}

/// Return whether two cells have an unobstructed sightline between them.
///
/// Every cell the connecting segment crosses, endpoints excluded, must be
/// transparent. Segments that pass exactly through a cell corner cross
/// both cells adjacent to the corner, so a diagonal gap between two opaque
/// cells does not leak vision.
pub fn sees(
    a: [i32; 2],
    b: [i32; 2],
    transparent: impl Fn([i32; 2]) -> bool,
) -> bool {
    sightline(a, b)
        .into_iter()
        .filter(|&c| c != b)
        .all(transparent)
}

/// List the cells crossed by the segment between two cell centers.
///
/// This is the grid supercover of the segment: every cell the ideal line
/// touches, including both side cells when the line passes exactly through
/// a corner. The start cell is excluded, the end cell is included. As a
/// set the result is independent of traversal direction.
pub fn sightline(a: [i32; 2], b: [i32; 2]) -> Vec<[i32; 2]> {
    let (nx, ny) = ((b[0] - a[0]).abs(), (b[1] - a[1]).abs());
    let (sx, sy) = ((b[0] - a[0]).signum(), (b[1] - a[1]).signum());

    let (mut x, mut y) = (a[0], a[1]);
    let (mut ix, mut iy) = (0, 0);
    let mut ret = Vec::with_capacity((nx + ny) as usize);

    while ix < nx || iy < ny {
        // Compare fractional progress along both axes without floats:
        // (ix + ½) / nx versus (iy + ½) / ny.
        match ((1 + 2 * ix) * ny).cmp(&((1 + 2 * iy) * nx)) {
            std::cmp::Ordering::Less => {
                x += sx;
                ix += 1;
            }
            std::cmp::Ordering::Greater => {
                y += sy;
                iy += 1;
            }
            std::cmp::Ordering::Equal => {
                // Exact corner crossing, the segment grazes the two cells
                // on either side of the corner as well.
                ret.push([x + sx, y]);
                ret.push([x, y + sy]);
                x += sx;
                y += sy;
                ix += 1;
                iy += 1;
            }
        }
        ret.push([x, y]);
    }

    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(_: [i32; 2]) -> bool {
        true
    }

    #[test]
    fn origin_is_visible() {
        let fov = compute([3, 3], 0, |_| false);
        assert_eq!(fov, vec![[3, 3]]);
    }

    #[test]
    fn open_field_is_fully_visible() {
        let fov = compute([0, 0], 2, open);
        assert_eq!(fov.len(), 25);
    }

    #[test]
    fn sightline_covers_segment() {
        assert_eq!(sightline([0, 0], [3, 0]), vec![[1, 0], [2, 0], [3, 0]]);
        assert_eq!(sightline([0, 0], [0, 0]), Vec::<[i32; 2]>::new());
        // Exact diagonal crosses corners, both side cells are grazed.
        assert_eq!(
            sightline([0, 0], [2, 2]),
            vec![[1, 0], [0, 1], [1, 1], [2, 1], [1, 2], [2, 2]]
        );
    }

    #[test]
    fn pillar_blocks_sight() {
        let pillar = |c: [i32; 2]| c != [1, 0];
        assert!(!sees([0, 0], [2, 0], pillar));
        assert!(!sees([2, 0], [0, 0], pillar));
        // The pillar itself stays visible from either side.
        assert!(sees([0, 0], [1, 0], pillar));
        assert!(sees([2, 0], [1, 0], pillar));
    }

    #[test]
    fn diagonal_gap_does_not_leak() {
        // Two opaque cells sharing only a corner block the diagonal
        // between them.
        let wall = |c: [i32; 2]| c != [1, 0] && c != [0, 1];
        assert!(!sees([0, 0], [1, 1], wall));
        assert!(!sees([1, 1], [0, 0], wall));
    }

    #[test]
    fn sees_is_symmetric_around_obstacles() {
        let blocked = |c: [i32; 2]| c[0] != 2 || c[1] == 3;
        for y in 0..6 {
            for x in 0..6 {
                assert_eq!(
                    sees([0, 0], [x, y], blocked),
                    sees([x, y], [0, 0], blocked),
                    "asymmetry at ({x}, {y})"
                );
            }
        }
    }
}

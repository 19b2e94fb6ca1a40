//! Slab-method interval intersection shared by the box raycasts.

/// Ray parameter interval where the ray is inside every slab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SlabInterval {
    pub enter: f32,
    pub exit: f32,
    /// Axis whose entry produced `enter`. On ties the lowest axis wins.
    pub entry_axis: usize,
}

/// Intersect the ray with the axis slabs `[mins[a], maxs[a]]`.
///
/// A zero direction component makes that slab unbounded when the origin
/// lies within it and a miss otherwise. Returns `None` when the slab
/// intervals do not intersect or every direction component is zero.
pub(crate) fn intersect_slabs<const N: usize>(
    origin: [f32; N],
    direction: [f32; N],
    mins: [f32; N],
    maxs: [f32; N],
) -> Option<SlabInterval> {
    let mut enter = f32::NEG_INFINITY;
    let mut exit = f32::INFINITY;
    let mut entry_axis = None;

    for axis in 0..N {
        let (o, d) = (origin[axis], direction[axis]);
        if d == 0.0 {
            if o < mins[axis] || o > maxs[axis] {
                return None;
            }
            continue;
        }

        let t_min = (mins[axis] - o) / d;
        let t_max = (maxs[axis] - o) / d;
        let (near, far) = if t_min <= t_max {
            (t_min, t_max)
        } else {
            (t_max, t_min)
        };

        if near > enter {
            enter = near;
            entry_axis = Some(axis);
        }
        exit = exit.min(far);
    }

    if enter > exit {
        return None;
    }
    entry_axis.map(|entry_axis| SlabInterval {
        enter,
        exit,
        entry_axis,
    })
}

/// Outward face sign on the entry axis: the face the ray crosses points against it.
#[inline]
pub(crate) fn entry_face_sign(direction_on_axis: f32) -> f32 {
    if direction_on_axis > 0.0 {
        -1.0
    } else {
        1.0
    }
}

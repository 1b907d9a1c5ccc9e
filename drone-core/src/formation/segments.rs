//! Partitioning of the drone index range into named sub-shapes.
//!
//! A segmented formation lists the upper bound of each part as a fraction of the
//! swarm. Index `i` belongs to the first part whose bound exceeds `i / count`, so
//! parts are half-open, contiguous and never overlap. Bounds are compared in
//! `f64` so fractions like `0.35` split a swarm of 20 at exactly index 7.

/// Three equal bands, shared by the tricolor flag and its color mode.
pub const THIRDS: [f64; 3] = [1.0 / 3.0, 2.0 / 3.0, 1.0];

/// Where one index landed inside a segmented formation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Part {
    /// Which sub-shape, in the order the bounds were listed.
    pub segment: usize,
    /// Position of the index within its sub-shape.
    pub local: usize,
    /// Number of indices that fell into the sub-shape.
    pub len: usize,
}

impl Part {
    /// Local progress `(i - start) / len`, in `[0, 1)`.
    pub fn progress(&self) -> f32 {
        self.local as f32 / self.len.max(1) as f32
    }

    /// Local progress with both ends included, in `[0, 1]`.
    pub fn inclusive(&self) -> f32 {
        super::geometry::inclusive(self.local, self.len)
    }

    /// Deal the part's indices round-robin into `groups` strands (legs, spokes,
    /// rings...) and return the strand plus progress along it, ends included.
    pub fn strand(&self, groups: usize) -> (usize, f32) {
        let groups = groups.max(1);
        let which = self.local % groups;
        let members = (self.len + groups - 1 - which) / groups;
        (which, super::geometry::inclusive(self.local / groups, members))
    }

    /// Like [`Part::strand`] but with progress in `[0, 1)`, for closed loops.
    pub fn loop_strand(&self, groups: usize) -> (usize, f32) {
        let groups = groups.max(1);
        let which = self.local % groups;
        let members = (self.len + groups - 1 - which) / groups;
        (which, super::geometry::progress(self.local / groups, members))
    }
}

/// Locate `index` among the parts described by `bounds`.
///
/// `bounds` must be ascending and end at `1.0`. Indices past the last bound (only
/// possible with a malformed table) fall into the final part.
pub fn split(index: usize, count: usize, bounds: &[f64]) -> Part {
    if bounds.is_empty() || count == 0 {
        return Part {
            segment: 0,
            local: index,
            len: count.max(index + 1),
        };
    }

    let fraction = index as f64 / count as f64;
    let segment = bounds
        .iter()
        .position(|&bound| fraction < bound)
        .unwrap_or(bounds.len() - 1);

    let lower = if segment == 0 { 0.0 } else { bounds[segment - 1] };
    let start = first_at_or_above(lower, count).min(index);
    let end = if segment == bounds.len() - 1 {
        count
    } else {
        first_at_or_above(bounds[segment], count)
    }
    .max(index + 1);

    Part {
        segment,
        local: index - start,
        len: end - start,
    }
}

/// Smallest index `i` with `i / count >= bound`.
fn first_at_or_above(bound: f64, count: usize) -> usize {
    let mut i = ((bound * count as f64).ceil().max(0.0) as usize).min(count);
    while i > 0 && (i - 1) as f64 / count as f64 >= bound {
        i -= 1;
    }
    while i < count && (i as f64 / count as f64) < bound {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    const AIRPLANE: [f64; 5] = [0.35, 0.55, 0.70, 0.85, 1.0];

    #[test]
    fn test_boundary_index_goes_to_next_part() {
        // 7 / 20 == 0.35 exactly, which is not below the first bound.
        assert_eq!(split(6, 20, &AIRPLANE).segment, 0);
        assert_eq!(split(7, 20, &AIRPLANE).segment, 1);
        assert_eq!(split(7, 20, &AIRPLANE).local, 0);
    }

    #[test]
    fn test_parts_cover_every_index_once() {
        for count in 1..120 {
            let mut seen = vec![0usize; AIRPLANE.len()];
            let mut last_segment = 0;
            for index in 0..count {
                let part = split(index, count, &AIRPLANE);
                assert!(part.segment >= last_segment, "segments must be contiguous");
                assert!(part.local < part.len);
                if part.segment != last_segment {
                    assert_eq!(part.local, 0);
                }
                last_segment = part.segment;
                seen[part.segment] += 1;
            }
            for index in 0..count {
                let part = split(index, count, &AIRPLANE);
                assert_eq!(part.len, seen[part.segment]);
            }
            assert_eq!(seen.iter().sum::<usize>(), count);
        }
    }

    #[test]
    fn test_thirds() {
        let segments: Vec<usize> = (0..9).map(|i| split(i, 9, &THIRDS).segment).collect();
        assert_eq!(segments, vec![0, 0, 0, 1, 1, 1, 2, 2, 2]);
    }

    #[test]
    fn test_single_drone_is_first_part() {
        let part = split(0, 1, &AIRPLANE);
        assert_eq!(part.segment, 0);
        assert_eq!(part.len, 1);
        assert_eq!(part.progress(), 0.0);
    }

    #[test]
    fn test_strand_round_robin() {
        let part = Part {
            segment: 0,
            local: 5,
            len: 8,
        };
        // Strand 1 holds locals 1 and 5.
        assert_eq!(part.strand(4), (1, 1.0));
        let first = Part { local: 1, ..part };
        assert_eq!(first.strand(4), (1, 0.0));
    }
}

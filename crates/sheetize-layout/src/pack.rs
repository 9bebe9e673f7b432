//! Clip packing: groups animation clips into sheet rows.
//!
//! Two strategies are available, selected by [`PackingStrategy`]:
//!
//! - **Best-fit-decreasing** (default): row capacity is the longest clip's
//!   length. Each row is filled by repeatedly taking the longest remaining
//!   clip that still fits (earliest input position wins ties). When nothing
//!   fits, the row is closed and a new one is opened.
//! - **Sqrt wrap**: the older heuristic. Clips are stably sorted by length
//!   (descending) and laid out next-fit, wrapping at
//!   `max(longest, floor(sqrt(total frames)))`.
//!
//! Both strategies are deterministic for a given input order.

use serde::Serialize;
use sheetize_spec::validation::validate_clips;
use sheetize_spec::{Clip, LayoutError, PackingStrategy};

/// A clip assigned to a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackedClip {
    /// Position of the clip in the caller's input list.
    pub source_index: usize,
    /// Clip name.
    pub name: String,
    /// Number of frames.
    pub length: u32,
}

/// Clips sharing one visual row, in placement order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackedRow {
    /// Clips left to right.
    pub clips: Vec<PackedClip>,
}

impl PackedRow {
    /// Total frame count of the row.
    pub fn used(&self) -> u32 {
        self.clips.iter().map(|c| c.length).sum()
    }
}

/// Result of packing: the row capacity and every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackedLayout {
    /// Maximum total clip length per row; also the sheet's column count.
    pub capacity: u32,
    /// Rows top to bottom.
    pub rows: Vec<PackedRow>,
}

impl PackedLayout {
    /// Number of frame columns on the sheet.
    pub fn columns(&self) -> u32 {
        self.capacity
    }

    /// Number of rows on the sheet.
    pub fn row_count(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Iterates clips in row-major, then column order.
    pub fn clips(&self) -> impl Iterator<Item = &PackedClip> {
        self.rows.iter().flat_map(|row| row.clips.iter())
    }
}

/// Pack clips into rows with the given strategy.
///
/// # Errors
/// * [`LayoutError::EmptyInput`] if `clips` is empty
/// * [`LayoutError::InvalidDimension`] if a clip has no frames
/// * [`LayoutError::DuplicateName`] if two clips share a name
pub fn pack_clips(
    clips: &[Clip],
    strategy: PackingStrategy,
) -> Result<PackedLayout, LayoutError> {
    validate_clips(clips)?;

    let items: Vec<PackedClip> = clips
        .iter()
        .enumerate()
        .map(|(source_index, clip)| PackedClip {
            source_index,
            name: clip.name.clone(),
            length: clip.length(),
        })
        .collect();

    let layout = match strategy {
        PackingStrategy::BestFitDecreasing => best_fit_decreasing(items),
        PackingStrategy::SqrtWrap => sqrt_wrap(items),
    };

    log::debug!(
        "packed {} clips into {} rows of capacity {} ({})",
        clips.len(),
        layout.rows.len(),
        layout.capacity,
        strategy
    );
    Ok(layout)
}

/// Best-fit-decreasing with capacity equal to the longest clip.
fn best_fit_decreasing(items: Vec<PackedClip>) -> PackedLayout {
    let capacity = items.iter().map(|c| c.length).max().unwrap_or(0);

    // The pool stays in input order so that the first maximum found is the
    // earliest clip among equals.
    let mut pool = items;
    let mut rows = Vec::new();
    let mut row = PackedRow::default();
    let mut used = 0u32;

    while !pool.is_empty() {
        let remaining = capacity - used;
        let mut best: Option<usize> = None;
        for (i, clip) in pool.iter().enumerate() {
            if clip.length > remaining {
                continue;
            }
            match best {
                Some(b) if pool[b].length >= clip.length => {}
                _ => best = Some(i),
            }
        }

        match best {
            Some(i) => {
                let clip = pool.remove(i);
                log::debug!(
                    "row {}: placing '{}' (length {}) at column {}",
                    rows.len(),
                    clip.name,
                    clip.length,
                    used
                );
                used += clip.length;
                row.clips.push(clip);
            }
            None => {
                // An empty row always fits the longest remaining clip, so a
                // closed row is never empty.
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
        }
    }
    if !row.clips.is_empty() {
        rows.push(row);
    }

    PackedLayout { capacity, rows }
}

/// Legacy next-fit packing with a square-root derived wrap width.
fn sqrt_wrap(mut items: Vec<PackedClip>) -> PackedLayout {
    // Stable: equal lengths keep their input order.
    items.sort_by(|a, b| b.length.cmp(&a.length));

    let total: u64 = items.iter().map(|c| c.length as u64).sum();
    let longest = items.first().map_or(0, |c| c.length);
    let wrap = (total as f64).sqrt().floor() as u32;
    let capacity = longest.max(wrap);

    let mut rows: Vec<PackedRow> = Vec::new();
    let mut used = 0u32;
    for clip in items {
        match rows.last_mut() {
            Some(row) if used + clip.length <= capacity => {
                used += clip.length;
                row.clips.push(clip);
            }
            _ => {
                used = clip.length;
                rows.push(PackedRow { clips: vec![clip] });
            }
        }
    }

    PackedLayout { capacity, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn clips(lengths: &[u32]) -> Vec<Clip> {
        lengths
            .iter()
            .enumerate()
            .map(|(i, &len)| Clip::new(format!("clip{}", i), len))
            .collect()
    }

    fn row_lengths(layout: &PackedLayout) -> Vec<Vec<u32>> {
        layout
            .rows
            .iter()
            .map(|r| r.clips.iter().map(|c| c.length).collect())
            .collect()
    }

    fn row_indices(layout: &PackedLayout) -> Vec<Vec<usize>> {
        layout
            .rows
            .iter()
            .map(|r| r.clips.iter().map(|c| c.source_index).collect())
            .collect()
    }

    #[test]
    fn test_greedy_trace() {
        let layout = pack_clips(&clips(&[4, 3, 3, 2, 1]), PackingStrategy::default()).unwrap();
        assert_eq!(layout.capacity, 4);
        // [4] fills row 0. Row 1 takes the first 3 and then the 1.
        // The second 3 and the 2 cannot share a row of capacity 4.
        assert_eq!(row_lengths(&layout), vec![vec![4], vec![3, 1], vec![3], vec![2]]);
        assert_eq!(row_indices(&layout), vec![vec![0], vec![1, 4], vec![2], vec![3]]);
    }

    #[test]
    fn test_longest_clip_opens_row_zero() {
        let layout = pack_clips(&clips(&[1, 2, 6, 3]), PackingStrategy::default()).unwrap();
        assert_eq!(layout.capacity, 6);
        assert_eq!(layout.rows[0].clips[0].length, 6);
        assert_eq!(layout.rows[0].clips[0].source_index, 2);
        assert_eq!(row_lengths(&layout), vec![vec![6], vec![3, 2, 1]]);
    }

    #[test]
    fn test_ties_break_by_input_order() {
        let layout = pack_clips(&clips(&[2, 2, 2, 2]), PackingStrategy::default()).unwrap();
        assert_eq!(row_indices(&layout), vec![vec![0], vec![1], vec![2], vec![3]]);

        let layout = pack_clips(&clips(&[4, 2, 2, 2, 2]), PackingStrategy::default()).unwrap();
        assert_eq!(row_indices(&layout), vec![vec![0], vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_best_fit_fills_gaps() {
        let layout = pack_clips(&clips(&[5, 1, 3, 2]), PackingStrategy::default()).unwrap();
        assert_eq!(row_lengths(&layout), vec![vec![5], vec![3, 2], vec![1]]);
    }

    #[test]
    fn test_single_clip() {
        let layout = pack_clips(&clips(&[7]), PackingStrategy::default()).unwrap();
        assert_eq!(layout.capacity, 7);
        assert_eq!(layout.columns(), 7);
        assert_eq!(layout.row_count(), 1);
    }

    #[test]
    fn test_empty_and_invalid() {
        assert_eq!(
            pack_clips(&[], PackingStrategy::default()),
            Err(LayoutError::EmptyInput)
        );
        assert!(matches!(
            pack_clips(&clips(&[3, 0]), PackingStrategy::default()),
            Err(LayoutError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_sqrt_wrap() {
        // total 16 -> wrap 4, longest 4 -> capacity 4
        let layout = pack_clips(&clips(&[1, 4, 3, 2, 3, 3]), PackingStrategy::SqrtWrap).unwrap();
        assert_eq!(layout.capacity, 4);
        assert_eq!(row_lengths(&layout), vec![vec![4], vec![3], vec![3], vec![3], vec![2, 1]]);
    }

    #[test]
    fn test_sqrt_wrap_uses_sqrt_when_wider() {
        // total 36 -> wrap 6 > longest 3
        let lengths = [3u32; 12];
        let layout = pack_clips(&clips(&lengths), PackingStrategy::SqrtWrap).unwrap();
        assert_eq!(layout.capacity, 6);
        assert_eq!(layout.row_count(), 6);
        assert!(layout.rows.iter().all(|r| r.used() == 6));
    }

    #[test]
    fn test_clips_iterates_row_major() {
        let layout = pack_clips(&clips(&[4, 3, 3, 2, 1]), PackingStrategy::default()).unwrap();
        let order: Vec<_> = layout.clips().map(|c| c.source_index).collect();
        assert_eq!(order, vec![0, 1, 4, 2, 3]);
    }
}

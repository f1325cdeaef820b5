/// Bounded, mergeable summary of a scanned subtree.
///
/// A `PathScan` holds at most `top_n` of the largest files seen so far plus
/// exact totals for every file visited. Totals never depend on truncation:
/// a file that falls out of the ranked set is still counted.
///
/// # Merge rule
///
/// [`PathScan::merge`] unions the two ranked sets, keeps the first `limit`
/// entries by descending size, and sums the totals. The empty scan is the
/// identity. Totals are associative and commutative. The ranked set is too,
/// except under size collisions: equal sizes collapse to one entry (see
/// [`FileSize`]) and the left operand's entry is the one kept.
use super::file_size::FileSize;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathScan {
    largest_files: BTreeSet<FileSize>,
    total_size: u64,
    total_count: u64,
}

impl PathScan {
    /// The scan of a subtree with no files.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The scan of a single file.
    pub fn of_file(file: FileSize) -> Self {
        let total_size = file.size;
        let mut largest_files = BTreeSet::new();
        largest_files.insert(file);
        Self {
            largest_files,
            total_size,
            total_count: 1,
        }
    }

    /// Build a scan from individual files, retaining at most `limit` of them.
    pub fn from_files<I>(files: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = FileSize>,
    {
        files
            .into_iter()
            .fold(Self::empty(), |acc, f| acc.merge(Self::of_file(f), limit))
    }

    /// Combine two scans under the bounded-rank rule.
    pub fn merge(mut self, other: PathScan, limit: usize) -> Self {
        self.truncate(limit);

        // `other` iterates largest-first, so once the set is full and an entry
        // cannot displace the current smallest, none of the rest can either.
        for file in other.largest_files {
            if self.largest_files.len() >= limit {
                match self.largest_files.last() {
                    Some(smallest) if file >= *smallest => break,
                    None => break,
                    Some(_) => {}
                }
            }
            self.largest_files.insert(file);
            self.truncate(limit);
        }

        // Sizes come from the filesystem capability; clamp rather than wrap.
        self.total_size = self.total_size.saturating_add(other.total_size);
        self.total_count = self.total_count.saturating_add(other.total_count);
        self
    }

    fn truncate(&mut self, limit: usize) {
        while self.largest_files.len() > limit {
            self.largest_files.pop_last();
        }
    }

    /// Retained files, largest first.
    pub fn largest_files(&self) -> impl ExactSizeIterator<Item = &FileSize> + '_ {
        self.largest_files.iter()
    }

    /// Sum of the lengths of every file in the subtree.
    #[inline]
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Number of regular files in the subtree.
    #[inline]
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn sizes(scan: &PathScan) -> Vec<u64> {
        scan.largest_files().map(|f| f.size).collect()
    }

    #[test]
    fn test_single_file_scan() {
        let scan = PathScan::of_file(FileSize::new("a", 42));
        assert_eq!(sizes(&scan), vec![42]);
        assert_eq!(scan.total_size(), 42);
        assert_eq!(scan.total_count(), 1);
    }

    #[test]
    fn test_empty_is_identity() {
        let scan = PathScan::from_files(
            [FileSize::new("a", 3), FileSize::new("b", 9), FileSize::new("c", 1)],
            2,
        );
        assert_eq!(scan.clone().merge(PathScan::empty(), 2), scan);
        assert_eq!(PathScan::empty().merge(scan.clone(), 2), scan);
    }

    #[test]
    fn test_merge_truncates_to_limit() {
        let left = PathScan::from_files([FileSize::new("a", 500), FileSize::new("c", 100)], 2);
        let right = PathScan::from_files([FileSize::new("b", 1_000), FileSize::new("e", 2_000)], 2);

        let merged = left.merge(right, 2);
        assert_eq!(sizes(&merged), vec![2_000, 1_000]);
        assert_eq!(merged.total_size(), 3_600);
        assert_eq!(merged.total_count(), 4);
    }

    #[test]
    fn test_totals_ignore_truncation() {
        let scan = PathScan::from_files((1..=100).map(|i| FileSize::new(format!("f{i}"), i)), 3);
        assert_eq!(sizes(&scan), vec![100, 99, 98]);
        assert_eq!(scan.total_count(), 100);
        assert_eq!(scan.total_size(), 5_050);
    }

    #[test]
    fn test_size_collision_collapses_and_left_wins() {
        let left = PathScan::of_file(FileSize::new("left", 500));
        let right = PathScan::of_file(FileSize::new("right", 500));

        let merged = left.merge(right, 5);
        assert_eq!(sizes(&merged), vec![500]);
        assert_eq!(merged.total_count(), 2);
        assert_eq!(merged.total_size(), 1_000);
        let kept = merged.largest_files().next().map(|f| f.path.as_path());
        assert_eq!(kept, Some(Path::new("left")));
    }

    #[test]
    fn test_totals_are_grouping_independent() {
        let files: Vec<FileSize> = [7u64, 3, 7, 12, 1, 40, 3]
            .iter()
            .enumerate()
            .map(|(i, &s)| FileSize::new(format!("f{i}"), s))
            .collect();

        let all = PathScan::from_files(files.clone(), 3);
        let (head, tail) = files.split_at(4);
        let split = PathScan::from_files(tail.to_vec(), 3)
            .merge(PathScan::from_files(head.to_vec(), 3), 3);

        assert_eq!(all.total_size(), split.total_size());
        assert_eq!(all.total_count(), split.total_count());
        assert_eq!(sizes(&all), sizes(&split));
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let half = u64::MAX / 2 + 1;
        let merged = PathScan::of_file(FileSize::new("a", half))
            .merge(PathScan::of_file(FileSize::new("b", half - 1)), 3)
            .merge(PathScan::of_file(FileSize::new("c", 7)), 3);
        assert_eq!(merged.total_size(), u64::MAX);
        assert_eq!(merged.total_count(), 3);
        assert_eq!(merged.largest_files().len(), 3);
    }

    #[test]
    fn test_remerge_reapplies_smaller_limit() {
        let wide = PathScan::from_files((1..=5).map(|i| FileSize::new(format!("f{i}"), i)), 5);
        let narrowed = wide.merge(PathScan::empty(), 2);
        assert_eq!(sizes(&narrowed), vec![5, 4]);
        assert_eq!(narrowed.total_count(), 5);
    }
}

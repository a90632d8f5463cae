//! Row clustering for grid layouts

use automotion_common::Rect;
use std::collections::BTreeMap;

/// Group rectangles into rows keyed by their exact top coordinate.
///
/// Keys iterate top row first. Tops differing by a single pixel form
/// separate rows.
pub fn cluster_rows(rects: &[Rect]) -> BTreeMap<i32, usize> {
    let mut rows = BTreeMap::new();
    for rect in rects {
        *rows.entry(rect.y).or_insert(0) += 1;
    }
    rows
}

/// Check a grid against an expected shape, returning one message per problem.
///
/// Zero `columns` or `rows` skips that dimension. The first row whose size
/// differs from `columns` is tolerated so that a short last row passes; every
/// further mismatching row is reported.
pub fn check_grid(rects: &[Rect], columns: usize, rows: usize) -> Vec<String> {
    let clustered = cluster_rows(rects);
    let mut problems = Vec::new();

    if rows > 0 && clustered.len() != rows {
        problems.push(format!(
            "Elements in a grid are not aligned properly. Looks like grid has wrong amount of rows. Expected is {}. Actual is {}",
            rows,
            clustered.len()
        ));
    }

    if columns > 0 {
        let mut mismatches = 0;
        for (index, count) in clustered.values().enumerate() {
            if *count != columns {
                mismatches += 1;
                if mismatches > 1 {
                    problems.push(format!(
                        "Elements in a grid are not aligned properly in row #{}. Expected {} elements in a row. Actually it's {}",
                        index + 1,
                        columns,
                        count
                    ));
                }
            }
        }
    }

    problems
}

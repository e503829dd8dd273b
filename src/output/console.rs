/// Console sink: right-aligned fixed-width columns.
use crate::mechanics::STAT_NAMES;
use crate::systems::ProgressionTable;

/// Width of every console column.
pub const COLUMN_WIDTH: usize = 15;

/// Header row plus one row per level, each line newline-terminated.
pub fn render_table(table: &ProgressionTable) -> String {
    let mut out = String::new();
    push_row(&mut out, STAT_NAMES.iter());
    for row in table.rows() {
        push_row(&mut out, row.stats.truncated().iter());
    }
    out
}

fn push_row<T: std::fmt::Display>(out: &mut String, cells: impl Iterator<Item = T>) {
    for cell in cells {
        out.push_str(&format!("{cell:>width$}", width = COLUMN_WIDTH));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanics::{CurveSpec, StatVector};
    use crate::systems::compute_progression;

    #[test]
    fn columns_are_fifteen_wide_and_right_aligned() {
        let table = compute_progression(
            &CurveSpec::polynomial([1.0]),
            &StatVector::ZERO,
            &StatVector::new(1.0, 2.0, 3.0, 4.0, 100.0),
        )
        .unwrap();
        let text = render_table(&table);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 61);
        assert_eq!(lines[0].len(), 5 * COLUMN_WIDTH);
        assert_eq!(&lines[0][..COLUMN_WIDTH], "            agi");
        assert_eq!(&lines[1][4 * COLUMN_WIDTH..], "            100");
    }
}

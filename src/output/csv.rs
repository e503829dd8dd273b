/// CSV sink: header of stat names, then one row of five integers per level.
use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, StatTableError};
use crate::mechanics::{STAT_COUNT, STAT_NAMES};
use crate::systems::ProgressionTable;

/// Header line, without terminator.
pub fn csv_header() -> String {
    STAT_NAMES.join(",")
}

/// Write the table as CSV. Values are truncated to integers.
pub fn write_stats_csv<W: Write>(table: &ProgressionTable, mut w: W) -> io::Result<()> {
    writeln!(w, "{}", csv_header())?;
    for row in table.rows() {
        let cells: Vec<String> = row.stats.truncated().iter().map(i64::to_string).collect();
        writeln!(w, "{}", cells.join(","))?;
    }
    w.flush()
}

/// Write the table to `path`, creating missing parent directories.
pub fn save_stats_csv(table: &ProgressionTable, path: &Path) -> Result<PathBuf> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let file = fs::File::create(path)?;
    write_stats_csv(table, BufWriter::new(file))?;
    info!(path = %path.display(), rows = table.rows().len(), "stats table written");
    Ok(path.to_path_buf())
}

/// Read a stats CSV back into integer rows.
pub fn read_stats_csv(path: &Path) -> Result<Vec<[i64; STAT_COUNT]>> {
    let malformed = |line: usize, reason: String| StatTableError::MalformedCsv {
        path: path.to_path_buf(),
        line,
        reason,
    };

    let reader = BufReader::new(fs::File::open(path)?);
    let mut lines = reader.lines().enumerate();

    match lines.next() {
        Some((_, header)) => {
            let header = header?;
            if header.trim_end() != csv_header() {
                return Err(malformed(1, format!("unexpected header {header:?}")));
            }
        }
        None => return Err(malformed(1, "missing header".into())),
    }

    let mut rows = Vec::new();
    for (idx, line) in lines {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let cells: Vec<&str> = line.trim_end().split(',').collect();
        if cells.len() != STAT_COUNT {
            return Err(malformed(
                line_no,
                format!("expected {STAT_COUNT} columns, found {}", cells.len()),
            ));
        }
        let mut row = [0i64; STAT_COUNT];
        for (slot, cell) in row.iter_mut().zip(cells) {
            *slot = cell
                .trim()
                .parse()
                .map_err(|e| malformed(line_no, format!("{cell:?}: {e}")))?;
        }
        rows.push(row);
    }
    Ok(rows)
}

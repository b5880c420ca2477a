/// Text report of a finished scan.
///
/// Layout:
///
/// ```text
///
///          Total Space: 931.5 GB
///           Used Space: 612.03 GB
/// Available Free Space: 319.47 GB
///
/// Hogwarts Legacy (Epic Games): 78 GB   [8%]
///  Cyberpunk 2077 (     Steam): 65.2 GB [7%]
///
/// Access to the path 'D:\XboxGames' is denied.
///
/// ```
///
/// Column widths come from the data: names and platforms are right-aligned,
/// sizes left-aligned, so every bracketed percentage lines up. The platform
/// column is as wide as the longest configured label, shown or not.
use crate::model::size::{format_percentage, format_size};
use crate::model::{GameEntry, GameRoots, ScanResult};
use crate::platform::VolumeSpace;
use std::io::{self, Write};

/// Printed in place of the table when no game directories were found.
pub const NO_GAMES: &str = "No games found.";

/// One formatted table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub platform: String,
    pub size: String,
    pub percent: String,
}

impl ReportRow {
    fn new(entry: &GameEntry, volume_total: u64) -> Self {
        Self {
            name: entry.name.to_string(),
            platform: entry.platform.to_string(),
            size: entry.size_display(),
            percent: format_percentage(entry.size, volume_total),
        }
    }
}

/// Widths of the aligned columns, in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Columns {
    name: usize,
    platform: usize,
    size: usize,
}

impl Columns {
    fn measure(rows: &[ReportRow], roots: &GameRoots) -> Self {
        let platform = roots
            .iter()
            .map(|root| root.label.chars().count())
            .max()
            .unwrap_or(0);
        let start = Self {
            platform,
            ..Self::default()
        };
        rows.iter().fold(start, |acc, row| Self {
            name: acc.name.max(row.name.chars().count()),
            platform: acc.platform.max(row.platform.chars().count()),
            size: acc.size.max(row.size.chars().count()),
        })
    }
}

/// Build table rows, largest game first.
pub fn build_rows(result: &ScanResult, volume: VolumeSpace) -> Vec<ReportRow> {
    result
        .sorted_by_size()
        .into_iter()
        .map(|entry| ReportRow::new(entry, volume.total_bytes))
        .collect()
}

/// Write the full report: volume header, game table, then warnings.
pub fn write_report<W: Write>(
    out: &mut W,
    result: &ScanResult,
    roots: &GameRoots,
    volume: VolumeSpace,
) -> io::Result<()> {
    writeln!(out)?;
    write_header(out, volume)?;
    writeln!(out)?;

    let rows = build_rows(result, volume);
    if rows.is_empty() {
        writeln!(out, "{NO_GAMES}")?;
    } else {
        write_table(out, &rows, roots)?;
    }

    if !result.warnings.is_empty() {
        writeln!(out)?;
        for warning in &result.warnings {
            writeln!(out, "{warning}")?;
        }
    }

    writeln!(out)?;
    Ok(())
}

/// Write the three volume lines with their labels right-aligned on the colon.
pub fn write_header<W: Write>(out: &mut W, volume: VolumeSpace) -> io::Result<()> {
    writeln!(out, "{:>20}: {}", "Total Space", format_size(volume.total_bytes))?;
    writeln!(out, "{:>20}: {}", "Used Space", format_size(volume.used_bytes()))?;
    writeln!(
        out,
        "{:>20}: {}",
        "Available Free Space",
        format_size(volume.available_bytes)
    )
}

/// Write pre-built rows with aligned columns.
pub fn write_table<W: Write>(
    out: &mut W,
    rows: &[ReportRow],
    roots: &GameRoots,
) -> io::Result<()> {
    let cols = Columns::measure(rows, roots);
    for row in rows {
        writeln!(
            out,
            "{:>name_w$} ({:>plat_w$}): {:<size_w$} [{}]",
            row.name,
            row.platform,
            row.size,
            row.percent,
            name_w = cols.name,
            plat_w = cols.platform,
            size_w = cols.size,
        )?;
    }
    Ok(())
}

/// Render the report into a `String`.
pub fn render_report(result: &ScanResult, roots: &GameRoots, volume: VolumeSpace) -> String {
    let mut buf = Vec::new();
    write_report(&mut buf, result, roots, volume).expect("writing into a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

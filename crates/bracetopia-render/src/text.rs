//! Plain-text snapshot formatting shared by every renderer.

use bracetopia_sim::CycleFrame;

/// Format one frame as its display lines, without trailing newlines.
///
/// The layout is fixed: the board's glyph rows, then
///
/// ```text
/// cycle: 3
/// moves this cycle: 7
/// teams' "happiness": 0.812500
/// dim: 15, %strength of preference:  50%, %vacancy:  20%, %end:  60%
/// ```
///
/// Happiness always prints with six decimal places; the three percentages
/// are right-aligned in a three-character field.
pub fn snapshot_lines(frame: &CycleFrame<'_>) -> Vec<String> {
    let mut lines = Vec::with_capacity(frame.grid.dim() + 4);

    for row in frame.grid.rows() {
        lines.push(row.iter().map(|cell| cell.glyph()).collect());
    }

    lines.push(format!("cycle: {}", frame.stats.cycle));
    lines.push(format!("moves this cycle: {}", frame.stats.moves));
    lines.push(format!(
        "teams' \"happiness\": {:.6}",
        frame.stats.mean_happiness
    ));
    lines.push(format!(
        "dim: {}, %strength of preference: {:3}%, %vacancy: {:3}%, %end: {:3}%",
        frame.config.dim,
        frame.config.strength_pct,
        frame.config.vacancy_pct,
        frame.config.endline_pct
    ));

    lines
}

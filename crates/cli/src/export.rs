use tinge_core::format;
use tinge_core::palette::PaletteSnapshot;

/// Assemble the palette as a block of CSS custom properties, one
/// `--color-{col}-{row}` per cell (1-based, matching how designers count
/// columns) plus the shared `--background`.
///
/// Pure string assembly: the caller decides whether this lands on stdout,
/// a file, or a clipboard.
pub fn css_block(snapshot: &PaletteSnapshot) -> String {
    let kind = snapshot.state.format;
    let mut block = String::new();
    for (col, column) in snapshot.table.columns().iter().enumerate() {
        for (row, cell) in column.cells.iter().enumerate() {
            block.push_str(&format!(
                "--color-{}-{}: {};\n",
                col + 1,
                row + 1,
                format::render(cell, kind)
            ));
        }
    }
    block.push_str(&format!(
        "--background: {};\n",
        format::render(&snapshot.background, kind)
    ));
    block
}

use ratatui::text::{Line, Span};

/// Lays out equally wide cells in rows of `columns`.
///
/// Cells are built by the caller at [`Grid::cell_width`] columns. Shorter
/// cells in a row are padded with blank lines so rows stay aligned.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    pub cells: Vec<Vec<Line<'static>>>,
    pub columns: usize,
    pub gap: u16,
}

impl Grid {
    pub fn new(columns: usize, gap: u16) -> Self {
        Self {
            cells: vec![],
            columns: columns.max(1),
            gap,
        }
    }

    /// Column count that keeps every cell at least `min_cell` wide.
    pub fn fit_columns(width: u16, min_cell: u16, gap: u16, max_columns: usize) -> usize {
        let mut columns = max_columns.max(1);
        while columns > 1 && Self::cell_width_for(width, columns, gap) < min_cell {
            columns -= 1;
        }
        columns
    }

    fn cell_width_for(width: u16, columns: usize, gap: u16) -> u16 {
        let columns = u16::try_from(columns).unwrap_or(u16::MAX).max(1);
        let gaps = gap.saturating_mul(columns - 1);
        width.saturating_sub(gaps) / columns
    }

    pub fn cell_width(&self, width: u16) -> u16 {
        Self::cell_width_for(width, self.columns, self.gap)
    }

    pub fn push(&mut self, cell: Vec<Line<'static>>) {
        self.cells.push(cell);
    }

    pub fn lines(self, width: u16) -> Vec<Line<'static>> {
        let cell_width = usize::from(self.cell_width(width));
        let gap = " ".repeat(usize::from(self.gap));
        let mut lines = vec![];

        for row in self.cells.chunks(self.columns) {
            let height = row.iter().map(Vec::len).max().unwrap_or(0);
            for i in 0..height {
                let mut spans: Vec<Span<'static>> = vec![];
                for (col, cell) in row.iter().enumerate() {
                    if col > 0 {
                        spans.push(Span::raw(gap.clone()));
                    }
                    let used = match cell.get(i) {
                        Some(line) => {
                            spans.extend(line.spans.iter().cloned());
                            line.width()
                        }
                        None => 0,
                    };
                    // last column needs no trailing fill
                    if col + 1 < row.len() && used < cell_width {
                        spans.push(Span::raw(" ".repeat(cell_width - used)));
                    }
                }
                lines.push(Line::from(spans));
            }
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::presentation::widgets::test_support::plain;

    #[rstest]
    #[case(80, 30, 2, 2)]
    #[case(50, 30, 2, 1)]
    #[case(100, 30, 3, 3)]
    #[case(90, 30, 3, 2)]
    #[case(10, 30, 3, 1)]
    fn test_fit_columns(
        #[case] width: u16,
        #[case] min_cell: u16,
        #[case] max_columns: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(Grid::fit_columns(width, min_cell, 2, max_columns), expected);
    }

    #[test]
    fn test_rows_are_padded() {
        let mut grid = Grid::new(2, 1);
        assert_eq!(grid.cell_width(9), 4);
        grid.push(vec![Line::raw("ab"), Line::raw("cd")]);
        grid.push(vec![Line::raw("wxyz")]);
        grid.push(vec![Line::raw("e")]);
        assert_eq!(
            plain(&grid.lines(9)),
            vec!["ab   wxyz", "cd   ", "e"]
        );
    }
}

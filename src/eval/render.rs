// ============================================================
// Confusion Matrix Rendering
// ============================================================
// Formats one or more row-normalised confusion matrices as a
// text grid, so the matrices of several training runs can be
// compared side by side in a terminal or a log file.
//
// Example output for two panels in one grid row:
//
//   lr=0.01            lr=0.1
//   true\pred   Bad  Good   true\pred   Bad  Good
//   Bad        0.90  0.10   Bad        0.95  0.05
//   Good       0.25  0.75   Good       0.40  0.60
//
//   rows: true label, columns: predicted label
//
// Cells show the row-normalised values (2 decimals), the same
// view a heatmap of the matrix would colour.

use crate::eval::confusion::ConfusionMatrix;

/// One titled matrix in a render grid.
#[derive(Debug, Clone)]
pub struct MatrixPanel {
    pub title:  String,
    pub matrix: ConfusionMatrix,
}

impl MatrixPanel {
    pub fn new(title: impl Into<String>, matrix: ConfusionMatrix) -> Self {
        Self { title: title.into(), matrix }
    }
}

/// Render `panels` as a text grid with `columns` panels per
/// grid row. Class names come from `labels`; classes beyond
/// the provided labels fall back to `class N`.
pub fn render_grid(panels: &[MatrixPanel], labels: &[&str], columns: usize) -> String {
    if panels.is_empty() {
        return String::new();
    }
    let columns = columns.max(1);

    let rendered: Vec<Vec<String>> = panels
        .iter()
        .map(|p| panel_lines(p, labels))
        .collect();

    let mut out = String::new();
    for chunk in rendered.chunks(columns) {
        // Pad every panel in this grid row to a common height
        // and width so the columns line up
        let height = chunk.iter().map(|lines| lines.len()).max().unwrap_or(0);
        let widths: Vec<usize> = chunk
            .iter()
            .map(|lines| lines.iter().map(|l| l.chars().count()).max().unwrap_or(0))
            .collect();

        for line_idx in 0..height {
            let row_line = chunk
                .iter()
                .enumerate()
                .map(|(i, lines)| {
                    let cell = lines.get(line_idx).map(String::as_str).unwrap_or("");
                    format!("{cell:<width$}", width = widths[i])
                })
                .collect::<Vec<_>>()
                .join("   ");
            out.push_str(row_line.trim_end());
            out.push('\n');
        }
        out.push('\n');
    }

    out.push_str("rows: true label, columns: predicted label\n");
    out
}

/// Render a single panel: title, predicted-class header, then
/// one row of normalised cells per true class.
fn panel_lines(panel: &MatrixPanel, labels: &[&str]) -> Vec<String> {
    let norm        = panel.matrix.row_normalized();
    let num_classes = panel.matrix.num_classes();

    let label_for = |class: usize| -> String {
        labels
            .get(class)
            .map(|l| l.to_string())
            .unwrap_or_else(|| format!("class {class}"))
    };

    // Column widths: the row-label gutter fits every class name
    // plus the corner header; value cells fit the widest name
    let corner = "true\\pred";
    let gutter = (0..num_classes)
        .map(|c| label_for(c).chars().count())
        .chain([corner.chars().count()])
        .max()
        .unwrap_or(0);
    let cell = (0..num_classes)
        .map(|c| label_for(c).chars().count())
        .chain([5])
        .max()
        .unwrap_or(5);

    let mut lines = Vec::with_capacity(num_classes + 2);
    if !panel.title.is_empty() {
        lines.push(panel.title.clone());
    }

    let mut header = format!("{corner:<gutter$}");
    for c in 0..num_classes {
        header.push_str(&format!("  {:>cell$}", label_for(c)));
    }
    lines.push(header);

    for (c, row) in norm.iter().enumerate() {
        let mut line = format!("{:<gutter$}", label_for(c));
        for v in row {
            line.push_str(&format!("  {v:>cell$.2}"));
        }
        lines.push(line);
    }

    lines
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_matrix() -> ConfusionMatrix {
        // Row 0: 9 right, 1 wrong. Row 1: 1 wrong, 3 right.
        let truth: Vec<usize> = [vec![0; 10], vec![1; 4]].concat();
        let pred:  Vec<usize> = [vec![0; 9], vec![1; 1], vec![0; 1], vec![1; 3]].concat();
        ConfusionMatrix::from_labels(&truth, &pred)
    }

    #[test]
    fn test_single_panel_contents() {
        let panel = MatrixPanel::new("baseline", sample_matrix());
        let text  = render_grid(&[panel], &["Bad", "Good"], 1);

        assert!(text.contains("baseline"));
        assert!(text.contains("Bad"));
        assert!(text.contains("Good"));
        // 9/10 and 3/4, row-normalised and rounded
        assert!(text.contains("0.90"));
        assert!(text.contains("0.75"));
        assert!(text.contains("rows: true label"));
    }

    #[test]
    fn test_grid_wraps_after_column_limit() {
        let panels: Vec<MatrixPanel> = (0..3)
            .map(|i| MatrixPanel::new(format!("run {i}"), sample_matrix()))
            .collect();
        let text = render_grid(&panels, &["Bad", "Good"], 2);

        // First two titles share a line, the third starts a new grid row
        let title_line = text
            .lines()
            .find(|l| l.contains("run 0"))
            .expect("missing first title line");
        assert!(title_line.contains("run 1"));
        assert!(!title_line.contains("run 2"));
        assert!(text.contains("run 2"));
    }

    #[test]
    fn test_missing_labels_fall_back_to_class_index() {
        let m = ConfusionMatrix::from_labels(&[0, 1, 2], &[0, 1, 2]);
        let text = render_grid(&[MatrixPanel::new("", m)], &["Bad", "Good"], 1);
        assert!(text.contains("class 2"));
    }

    #[test]
    fn test_no_panels_renders_nothing() {
        assert_eq!(render_grid(&[], &[], 2), "");
    }
}

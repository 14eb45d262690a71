//! Text table rendering from column descriptors.

/// One table column: a header label and a render function producing the
/// cell text for a row.
pub struct Column<T> {
    label: String,
    render: Box<dyn Fn(&T) -> String>,
}

impl<T> Column<T> {
    pub fn new(label: impl Into<String>, render: impl Fn(&T) -> String + 'static) -> Self {
        Self {
            label: label.into(),
            render: Box::new(render),
        }
    }
}

/// Render `rows` under a header line, each column sized to its widest cell.
/// With no rows, `empty_message` is returned instead (the page's
/// "Aucun ... trouvé" placeholder).
pub fn render_table<T>(columns: &[Column<T>], rows: &[&T], empty_message: &str) -> String {
    if rows.is_empty() {
        return format!("{empty_message}\n");
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|col| (col.render)(row)).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(col.label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(col, w)| pad(&col.label, *w))
        .collect();
    out.push_str(header.join(" | ").trim_end());
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');

    for row in &cells {
        let line: Vec<String> = row.iter().zip(&widths).map(|(c, w)| pad(c, *w)).collect();
        out.push_str(line.join(" | ").trim_end());
        out.push('\n');
    }

    out
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        id: i64,
        nom: &'static str,
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("ID", |r: &Row| format!("#{}", r.id)),
            Column::new("Nom", |r: &Row| r.nom.to_string()),
        ]
    }

    #[test]
    fn renders_header_and_rows() {
        let rows = [
            Row {
                id: 1,
                nom: "Lunettes Aviator",
            },
            Row {
                id: 2,
                nom: "Étui",
            },
        ];
        let refs: Vec<&Row> = rows.iter().collect();
        let out = render_table(&columns(), &refs, "Aucun produit disponible");

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ID | Nom");
        assert!(lines[1].starts_with("---"));
        assert_eq!(lines[2], "#1 | Lunettes Aviator");
        assert_eq!(lines[3], "#2 | Étui");
    }

    #[test]
    fn empty_rows_render_placeholder() {
        let out = render_table(&columns(), &[], "Aucun produit disponible");
        assert_eq!(out, "Aucun produit disponible\n");
    }
}

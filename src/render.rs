use crate::store::row::Row;

/// Formats rows into an aligned textual grid.
///
/// Column count is taken from the first row. Each column is padded to the
/// widest field it holds across all rows, fields are joined with `" | "`,
/// and when `header_included` is set a dash rule of matching width is
/// inserted after the first row. Rows with fewer fields than the first row
/// render their missing fields as empty cells; extra fields are ignored.
///
/// Zero rows renders an empty string.
pub fn render_table(rows: &[Row], header_included: bool) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };
    let columns = first.fields.len();

    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            rows.iter()
                .map(|row| row.fields.get(col).map_or(0, |field| field.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines: Vec<String> = rows
        .iter()
        .map(|row| {
            (0..columns)
                .map(|col| {
                    let field = row.fields.get(col).map_or("", String::as_str);
                    let width = widths[col];
                    format!("{field:<width$}")
                })
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect();

    if header_included {
        let separator = widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-");
        lines.insert(1, separator);
    }

    lines.join("\n")
}

//! Plain-text table rendering for query results.

use vitrine_model::{MenuItem, Policy, Product, Property};

/// One line of a results table
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl TableRow for Product {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "CATEGORY", "PRICE", "RATING"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.category.to_string(),
            self.price.to_string(),
            format!("{:.1}", self.rating),
        ]
    }
}

impl TableRow for Property {
    fn headers() -> &'static [&'static str] {
        &["ID", "TITLE", "TYPE", "PRICE", "BEDS", "BATHS", "SQFT", "LISTED"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.kind.to_string(),
            self.price.to_string(),
            self.specs.bedrooms.to_string(),
            self.specs.bathrooms.to_string(),
            self.specs.sqft.value().to_string(),
            self.listed_on.to_string(),
        ]
    }
}

impl TableRow for Policy {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "TYPE", "AGES", "COVERAGE"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.kind.to_string(),
            self.age_range.to_string(),
            format!("{} - {}", self.coverage_min, self.coverage_max),
        ]
    }
}

impl TableRow for MenuItem {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "COURSE", "PRICE", "DIETARY"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.category.to_string(),
            self.price.to_string(),
            self.dietary.join(", "),
        ]
    }
}

/// Left-aligned columns separated by two spaces
pub fn render_table<R: TableRow>(rows: &[&R]) -> String {
    if rows.is_empty() {
        return "No matching entries".to_string();
    }

    let headers = R::headers();
    let body: Vec<Vec<String>> = rows.iter().map(|row| row.cells()).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    std::iter::once(&header_cells)
        .chain(body.iter())
        .map(|cells| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::fixtures;

    #[test]
    fn table_has_header_and_one_line_per_row() {
        let catalog = fixtures::policies();
        let rows: Vec<&Policy> = catalog.entries().iter().collect();
        let table = render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].contains("Term Life Insurance"));
        assert!(lines[1].contains("$50,000 - $10,000,000"));
    }

    #[test]
    fn empty_results_render_a_notice() {
        let rows: Vec<&MenuItem> = Vec::new();
        assert_eq!(render_table(&rows), "No matching entries");
    }
}

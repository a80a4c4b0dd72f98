use crate::domain::model::SourceReport;

const HEADERS: [&str; 4] = [
    "Language",
    "Vacancies Found",
    "Vacancies Processed",
    "Average Salary",
];

/// Format a source report as an aligned console table. The first column is
/// left-aligned, numeric columns right-aligned; a missing average prints "-".
pub fn render_table(report: &SourceReport) -> String {
    let rows: Vec<[String; 4]> = report
        .stats
        .iter()
        .map(|stat| {
            [
                stat.language.clone(),
                stat.vacancies_found.to_string(),
                stat.vacancies_processed.to_string(),
                stat.average_salary
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();

    let mut widths: [usize; 4] = [0; 4];
    for (i, header) in HEADERS.iter().enumerate() {
        widths[i] = header.len();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    out.push_str(&report.title);
    out.push('\n');
    out.push_str(&format_row(&HEADERS.map(String::from), &widths));
    out.push('\n');
    out.push_str(&separator(&widths));
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }
    out
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    format!(
        "{:<w0$} | {:>w1$} | {:>w2$} | {:>w3$}",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    )
}

fn separator(widths: &[usize; 4]) -> String {
    widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LanguageStat;

    fn stat(language: &str, found: u64, processed: u64, average: Option<u64>) -> LanguageStat {
        LanguageStat {
            language: language.to_string(),
            vacancies_found: found,
            vacancies_processed: processed,
            average_salary: average,
        }
    }

    #[test]
    fn test_render_table_alignment() {
        let report = SourceReport {
            title: "HeadHunter".to_string(),
            stats: vec![
                stat("Python", 1200, 800, Some(150_000)),
                stat("Go", 300, 120, Some(180_500)),
            ],
        };

        let table = render_table(&report);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "HeadHunter");
        assert_eq!(
            lines[1],
            "Language | Vacancies Found | Vacancies Processed | Average Salary"
        );
        assert_eq!(
            lines[2],
            "---------+-----------------+---------------------+---------------"
        );
        assert_eq!(
            lines[3],
            "Python   |            1200 |                 800 |         150000"
        );
        assert_eq!(
            lines[4],
            "Go       |             300 |                 120 |         180500"
        );
    }

    #[test]
    fn test_render_table_missing_average() {
        let report = SourceReport {
            title: "SuperJob".to_string(),
            stats: vec![stat("Scala", 40, 0, None)],
        };

        let table = render_table(&report);
        let row = table.lines().last().unwrap();
        assert!(row.starts_with("Scala"));
        assert!(row.ends_with(" -"));
        // "-" is right-aligned under the 14-char "Average Salary" column.
        assert_eq!(row.len(), table.lines().nth(1).unwrap().len());
    }

    #[test]
    fn test_render_empty_report_has_only_header() {
        let report = SourceReport {
            title: "SuperJob".to_string(),
            stats: vec![],
        };

        let table = render_table(&report);
        assert_eq!(table.lines().count(), 3); // title, header, separator
    }
}

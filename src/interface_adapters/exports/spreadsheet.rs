use crate::use_cases::event_report::EventReport;

const NO_COMPANIONS: &str = "—";

// Render the report as CSV bytes: header, one row per confirmed guest,
// then a total row.
pub fn render(report: &EventReport) -> Result<Vec<u8>, String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["Convidado", "Acompanhantes", "Qtd. Acompanhantes"])
        .map_err(|err| err.to_string())?;

    for row in &report.rows {
        let companions = if row.companions.is_empty() {
            NO_COMPANIONS.to_string()
        } else {
            row.companions.join(", ")
        };
        let count = row.companions.len().to_string();
        writer
            .write_record([row.name.as_str(), companions.as_str(), count.as_str()])
            .map_err(|err| err.to_string())?;
    }

    let total = report.total_people.to_string();
    writer
        .write_record(["Total de pessoas no evento:", "", total.as_str()])
        .map_err(|err| err.to_string())?;

    writer.into_inner().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::event_report::ReportRow;

    fn report(rows: Vec<ReportRow>, total_people: usize) -> EventReport {
        EventReport { rows, total_people }
    }

    #[test]
    fn when_report_has_guests_then_csv_lists_one_row_per_guest() {
        let report = report(
            vec![
                ReportRow {
                    name: "João Silva".to_string(),
                    companions: Vec::new(),
                },
                ReportRow {
                    name: "Maria Santos".to_string(),
                    companions: vec!["Ana Costa".to_string(), "Pedro Costa".to_string()],
                },
            ],
            4,
        );

        let bytes = render(&report).expect("expected csv rendering to succeed");
        let text = String::from_utf8(bytes).expect("expected utf-8 csv");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Convidado,Acompanhantes,Qtd. Acompanhantes");
        assert_eq!(lines[1], "João Silva,—,0");
        assert_eq!(lines[2], "Maria Santos,\"Ana Costa, Pedro Costa\",2");
        assert_eq!(lines[3], "Total de pessoas no evento:,,4");
    }

    #[test]
    fn when_report_is_empty_then_csv_has_header_and_zero_total() {
        let bytes = render(&report(Vec::new(), 0)).expect("expected csv rendering to succeed");
        let text = String::from_utf8(bytes).expect("expected utf-8 csv");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Convidado,Acompanhantes,Qtd. Acompanhantes");
        assert_eq!(lines[1], "Total de pessoas no evento:,,0");
    }
}

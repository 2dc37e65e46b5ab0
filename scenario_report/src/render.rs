use crate::error::ReportError;
use crate::model::Report;
use std::io::Write;

/// Width of the dashed line printed above and below the scenario table
pub const SEPARATOR_WIDTH: usize = 56;

/// Minimum width of the scenario name column. Longer names are not truncated.
const NAME_WIDTH: usize = 32;
const COUNT_WIDTH: usize = 3;

/// Write the human readable report followed by the JSON totals.
///
/// An empty report writes a single line naming the root and no JSON block.
pub fn render_report<W: Write>(report: &Report, out: &mut W) -> Result<(), ReportError> {
    if report.is_empty() {
        writeln!(
            out,
            "No scenario directories found in: {}",
            report.root().display()
        )?;
        return Ok(());
    }

    let separator = "-".repeat(SEPARATOR_WIDTH);

    writeln!(out, "Scenario report for: {}", report.root().display())?;
    writeln!(out, "{separator}")?;
    for scenario in report.scenarios() {
        writeln!(
            out,
            "{:<name_width$} states={:<count_width$} errors={:<count_width$}",
            scenario.name,
            scenario.states,
            scenario.errors,
            name_width = NAME_WIDTH,
            count_width = COUNT_WIDTH,
        )?;
    }
    writeln!(out, "{separator}")?;

    serde_json::to_writer_pretty(&mut *out, &report.totals())?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScenarioRecord;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn render(report: &Report) -> String {
        let mut out = Vec::new();
        render_report(report, &mut out).expect("failed to render report");
        String::from_utf8(out).expect("report is not utf-8")
    }

    #[test]
    fn render_empty_report() {
        let report = Report::new(PathBuf::from("/data/output"), vec![]);

        assert_eq!(
            "No scenario directories found in: /data/output\n",
            render(&report)
        );
    }

    #[test]
    fn render_table_and_totals() {
        let report = Report::new(
            PathBuf::from("/data/output"),
            vec![
                ScenarioRecord {
                    name: "alpha".to_string(),
                    states: 2,
                    errors: 1,
                },
                ScenarioRecord {
                    name: "beta".to_string(),
                    states: 1,
                    errors: 0,
                },
            ],
        );

        let expected = concat!(
            "Scenario report for: /data/output\n",
            "--------------------------------------------------------\n",
            "alpha                            states=2   errors=1  \n",
            "beta                             states=1   errors=0  \n",
            "--------------------------------------------------------\n",
            "{\n",
            "  \"scenario_count\": 2,\n",
            "  \"total_states\": 3,\n",
            "  \"total_errors\": 1\n",
            "}\n",
        );

        assert_eq!(expected, render(&report));
    }

    #[test]
    fn long_names_and_counts_widen_columns() {
        let name = "a_scenario_with_a_name_longer_than_the_column";
        let report = Report::new(
            PathBuf::from("/data/output"),
            vec![ScenarioRecord {
                name: name.to_string(),
                states: 12345,
                errors: 7,
            }],
        );

        let rendered = render(&report);
        let row = rendered.lines().nth(2).expect("missing scenario row");

        assert_eq!(format!("{name} states=12345 errors=7  "), row);
    }

    #[test]
    fn separator_is_fixed_width() {
        let report = Report::new(
            PathBuf::from("/data/output"),
            vec![ScenarioRecord {
                name: "alpha".to_string(),
                states: 0,
                errors: 0,
            }],
        );

        let rendered = render(&report);
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!("-".repeat(SEPARATOR_WIDTH), lines[1]);
        assert_eq!(lines[1], lines[3]);
    }
}

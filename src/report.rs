/*!
 * Run summary for dirextract
 *
 * Printed after the report has been saved to a file, using the tabled
 * library for table rendering. Never printed when the report itself goes
 * to stdout.
 */

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Local};
use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::ExtractStatistics;
use crate::utils::format_number;

/// Unreadable files listed individually up to this many
const MAX_LISTED_FILES: usize = 10;

/// Everything shown in the summary
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Where the report was saved
    pub output_file: PathBuf,
    /// Time taken to extract and write
    pub duration: Duration,
    /// When the run finished
    pub finished_at: DateTime<Local>,
    /// Counters from the extraction
    pub statistics: ExtractStatistics,
}

/// Renders a run summary as console tables
pub struct Reporter;

impl Reporter {
    /// Render the summary to a string
    pub fn generate(&self, summary: &RunSummary) -> String {
        let mut out = format!(
            "Output saved to {}\n\n✅  EXTRACTION COMPLETE\n{}",
            summary.output_file.display(),
            self.summary_table(summary)
        );

        if !summary.statistics.unreadable_files.is_empty() {
            out.push_str("\n\n⚠️  UNREADABLE FILES\n");
            out.push_str(&self.unreadable_table(&summary.statistics));
        }

        out
    }

    /// Print the summary to stdout
    pub fn print(&self, summary: &RunSummary) {
        println!("{}", self.generate(summary));
    }

    fn summary_table(&self, summary: &RunSummary) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: &'static str,

            #[tabled(rename = "Value")]
            value: String,
        }

        let stats = &summary.statistics;
        let rows = vec![
            SummaryRow {
                key: "📂 Output File",
                value: summary.output_file.display().to_string(),
            },
            SummaryRow {
                key: "⏱️ Process Time",
                value: format!("{:.4?}", summary.duration),
            },
            SummaryRow {
                key: "🕒 Finished",
                value: summary.finished_at.to_rfc3339(),
            },
            SummaryRow {
                key: "📄 Files Read",
                value: format_number(stats.files_read),
            },
            SummaryRow {
                key: "🚫 Unreadable Files",
                value: format_number(stats.unreadable_files.len()),
            },
            SummaryRow {
                key: "🔒 Denied Directories",
                value: format_number(stats.directories_denied),
            },
            SummaryRow {
                key: "📝 Total Lines",
                value: format_number(stats.total_lines),
            },
            SummaryRow {
                key: "📦 LLM Tokens",
                value: format!("{} tokens (estimated)", format_number(stats.total_chars / 4)),
            },
        ];

        styled(Table::new(rows))
    }

    fn unreadable_table(&self, stats: &ExtractStatistics) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,
        }

        let mut rows: Vec<FileRow> = stats
            .unreadable_files
            .iter()
            .take(MAX_LISTED_FILES)
            .map(|p| FileRow {
                path: p.display().to_string(),
            })
            .collect();

        let hidden = stats.unreadable_files.len().saturating_sub(MAX_LISTED_FILES);
        if hidden > 0 {
            rows.push(FileRow {
                path: format!("... and {} more", hidden),
            });
        }

        styled(Table::new(rows))
    }
}

fn styled(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Padding::new(1, 1, 0, 0))
        .with(Modify::new(Columns::new(..)).with(Alignment::left()));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(unreadable: usize) -> RunSummary {
        RunSummary {
            output_file: PathBuf::from("out.txt"),
            duration: Duration::from_millis(12),
            finished_at: Local::now(),
            statistics: ExtractStatistics {
                files_read: 3,
                unreadable_files: (0..unreadable)
                    .map(|i| PathBuf::from(format!("bin/{}.dat", i)))
                    .collect(),
                directories_denied: 1,
                total_lines: 42,
                total_chars: 4_000,
            },
        }
    }

    #[test]
    fn test_summary_contains_counters() {
        let text = Reporter.generate(&summary(0));

        assert!(text.starts_with("Output saved to out.txt"));
        assert!(text.contains("Files Read"));
        assert!(text.contains("42"));
        assert!(text.contains("1.0K tokens (estimated)"));
        assert!(!text.contains("UNREADABLE FILES"));
    }

    #[test]
    fn test_unreadable_files_are_capped() {
        let text = Reporter.generate(&summary(12));

        assert!(text.contains("UNREADABLE FILES"));
        assert!(text.contains("bin/0.dat"));
        assert!(text.contains("bin/9.dat"));
        assert!(!text.contains("bin/10.dat"));
        assert!(text.contains("... and 2 more"));
    }
}

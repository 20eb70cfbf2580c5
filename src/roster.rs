use log::{info, warn};

use name_tally::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;

pub mod io_csv;

/// The roster file loaded automatically when no --input is given.
pub const DEFAULT_INPUT: &str = "nome_aluno.csv";
/// The expected header of the name column.
pub const DEFAULT_COLUMN: &str = "nome_aluno";

const DEFAULT_TOP: usize = 10;
const DOUGHNUT_TOP: usize = 5;

#[derive(Debug, Snafu)]
pub enum RosterError {
    #[snafu(display(
        "No input given and the default roster {path} was not found. Select a CSV file with --input."
    ))]
    InputUnavailable { path: String },
    #[snafu(display("Error opening CSV file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error reading a CSV row in {path}"))]
    CsvLineParse { source: csv::Error, path: String },
    #[snafu(display("Column {column} not found in the header of {path}"))]
    MissingNameColumn { column: String, path: String },
    #[snafu(display(
        "No valid student name found in {path}. Check that the name column is called {column}."
    ))]
    EmptyDataset { path: String, column: String },
    #[snafu(display("The search term is empty. Type a name to search for."))]
    EmptySearchTerm {},
    #[snafu(display("Error opening summary file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error assembling the summary JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Error writing the summary to {path}"))]
    WritingSummary {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("The tabulated summary differs from the reference summary"))]
    SummaryMismatch {},
    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    pub source: String,
    pub column: String,
}

pub fn run_tabulation(args: &Args) -> RosterResult<()> {
    let input_path = resolve_input(args)?;
    let column = args
        .column
        .clone()
        .unwrap_or_else(|| DEFAULT_COLUMN.to_string());
    let top = args.top.unwrap_or(DEFAULT_TOP);

    let builder = io_csv::read_roster(&input_path, &column)?;
    if builder.dropped() > 0 {
        info!("Dropped {} rows with a blank name", builder.dropped());
    }
    let analysis = builder.build();
    ensure!(
        !analysis.is_empty(),
        EmptyDatasetSnafu {
            path: input_path.clone(),
            column: column.clone()
        }
    );
    info!(
        "Tabulated {} students, {} distinct first names",
        analysis.total,
        analysis.distinct_first_names()
    );

    let config = SummaryConfig {
        source: simplify_file_name(&input_path),
        column,
    };
    let mut summary = build_summary_js(&config, &analysis, top);
    if let Some(raw_term) = &args.search {
        summary["search"] = build_search_js(&analysis, raw_term)?;
    }

    let pretty_js_stats = serde_json::to_string_pretty(&summary).context(ParsingJsonSnafu {})?;
    match args.out.as_deref() {
        None | Some("stdout") => println!("{}", pretty_js_stats),
        Some(path) => fs::write(path, &pretty_js_stats).context(WritingSummarySnafu { path })?,
    }

    // The reference summary, if provided for comparison
    if let Some(summary_p) = &args.reference {
        let summary_ref = read_summary(summary_p.clone())?;
        let pretty_js_summary_ref =
            serde_json::to_string_pretty(&summary_ref).context(ParsingJsonSnafu {})?;
        if pretty_js_summary_ref != pretty_js_stats {
            warn!("Found differences with the reference summary");
            print_diff(
                pretty_js_summary_ref.as_str(),
                pretty_js_stats.as_ref(),
                "\n",
            );
            return SummaryMismatchSnafu {}.fail();
        }
    }

    Ok(())
}

fn resolve_input(args: &Args) -> RosterResult<String> {
    match &args.input {
        Some(path) => Ok(path.clone()),
        None if Path::new(DEFAULT_INPUT).exists() => {
            info!("No input given, reading {}", DEFAULT_INPUT);
            Ok(DEFAULT_INPUT.to_string())
        }
        None => InputUnavailableSnafu {
            path: DEFAULT_INPUT,
        }
        .fail(),
    }
}

fn build_summary_js(config: &SummaryConfig, analysis: &NameAnalysis, top: usize) -> JSValue {
    let ranking = top_entries(analysis, top);
    // The doughnut series is always the top 5, regardless of --top.
    let doughnut = top_entries(analysis, DOUGHNUT_TOP);
    json!({
        "config": config,
        "stats": {
            "total": analysis.total,
            "uniqueFirstNames": analysis.distinct_first_names(),
            "mostCommon": analysis.most_common().map(|(name, entry)| json!({
                "firstName": name,
                "count": entry.count,
            })),
        },
        "charts": {
            "bar": chart_series(&ranking),
            "doughnut": chart_series(&doughnut),
        },
    })
}

fn chart_series(entries: &[(&str, &FirstNameEntry)]) -> JSValue {
    let labels: Vec<&str> = entries.iter().map(|(name, _)| *name).collect();
    let values: Vec<u64> = entries.iter().map(|(_, entry)| entry.count).collect();
    json!({ "labels": labels, "values": values })
}

fn build_search_js(analysis: &NameAnalysis, raw_term: &str) -> RosterResult<JSValue> {
    let term = raw_term.trim().to_uppercase();
    // The dataset is not consulted for a blank term.
    ensure!(!term.is_empty(), EmptySearchTermSnafu {});
    let matches = search(analysis, &term);
    if matches.is_empty() {
        info!("No result found for {:?}", term);
    }
    Ok(json!({
        "term": term,
        "count": matches.len(),
        "matches": matches,
    }))
}

fn read_summary(path: String) -> RosterResult<JSValue> {
    let contents = fs::read_to_string(path.clone()).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}

fn simplify_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_args(dataset: &str) -> Args {
        let test_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/test_data");
        Args {
            input: Some(format!("{}/{}/{}.csv", test_dir, dataset, dataset)),
            column: None,
            top: None,
            search: None,
            out: None,
            reference: None,
            verbose: false,
        }
    }

    fn with_reference(mut args: Args, dataset: &str) -> Args {
        let test_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/test_data");
        args.reference = Some(format!(
            "{}/{}/{}_expected_summary.json",
            test_dir, dataset, dataset
        ));
        args
    }

    #[test]
    fn roster_small() {
        let mut args = with_reference(test_args("roster_small"), "roster_small");
        args.search = Some("ana".to_string());
        run_tabulation(&args).unwrap();
    }

    #[test]
    fn roster_duplicates() {
        let mut args = with_reference(test_args("roster_duplicates"), "roster_duplicates");
        args.top = Some(2);
        run_tabulation(&args).unwrap();
    }

    #[test]
    fn doughnut_stays_top_five_with_a_smaller_top() {
        let mut builder = Builder::new();
        for name in ["Ana Silva", "Ana Costa", "Beto Dias", "Beto Nunes", "Carla Reis"] {
            builder.add_name(name);
        }
        let analysis = builder.build();
        let config = SummaryConfig {
            source: "roster.csv".to_string(),
            column: DEFAULT_COLUMN.to_string(),
        };
        let summary = build_summary_js(&config, &analysis, 2);
        let bar_labels = summary["charts"]["bar"]["labels"].as_array().unwrap();
        assert_eq!(bar_labels.len(), 2);
        let doughnut_labels = summary["charts"]["doughnut"]["labels"].as_array().unwrap();
        assert_eq!(doughnut_labels.len(), 3);
        assert_eq!(summary["charts"]["doughnut"]["values"][2], 1);
    }

    #[test]
    fn all_blank_roster_is_rejected() {
        let res = run_tabulation(&test_args("roster_blank"));
        assert!(matches!(res, Err(RosterError::EmptyDataset { .. })));
    }

    #[test]
    fn misnamed_column_is_rejected() {
        let mut args = test_args("roster_small");
        args.column = Some("student_name".to_string());
        let res = run_tabulation(&args);
        assert!(matches!(res, Err(RosterError::MissingNameColumn { .. })));
    }

    #[test]
    fn blank_search_term_is_rejected() {
        let mut args = test_args("roster_small");
        args.search = Some("   ".to_string());
        let res = run_tabulation(&args);
        assert!(matches!(res, Err(RosterError::EmptySearchTerm { .. })));
    }

    #[test]
    fn missing_input_file() {
        let mut args = test_args("roster_small");
        args.input = Some("does_not_exist.csv".to_string());
        let res = run_tabulation(&args);
        assert!(matches!(res, Err(RosterError::CsvOpen { .. })));
    }

    #[test]
    fn no_input_and_no_default_file() {
        let mut args = test_args("roster_small");
        args.input = None;
        let res = run_tabulation(&args);
        assert!(matches!(res, Err(RosterError::InputUnavailable { .. })));
    }
}

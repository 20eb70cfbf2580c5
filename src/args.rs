use clap::Parser;

/// This is a student roster name tabulation program.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) The CSV roster to tabulate. The first row is the header and it
    /// must contain the name column (see --column). When not specified, the program attempts
    /// to read 'nome_aluno.csv' from the current directory.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (default nome_aluno) The header of the column containing the student names.
    #[clap(long, value_parser)]
    pub column: Option<String>,

    /// (default 10) The number of entries to keep in the frequency ranking.
    #[clap(long, value_parser)]
    pub top: Option<usize>,

    /// (optional) A term to search for across the full names. The match is case-insensitive,
    /// on any contiguous part of the name, not just the first name.
    #[clap(short, long, value_parser)]
    pub search: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the summary of the tabulation will be
    /// written in JSON format to the given location.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference file containing a tabulation summary in JSON format. If
    /// provided, rosterstat will check that the produced summary matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "tabconv",
    version,
    about = "Convert XLSX workbooks to delimited text and delimited text to XLSX"
)]
pub struct CliArgs {
    /// Glob patterns of the files to convert
    #[arg(required = true, value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Output directory (must exist; a leading '~' is expanded). Defaults to the current directory
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Field delimiter, exactly one byte
    #[arg(short = 'd', long, default_value = "\t")]
    pub delimiter: String,

    /// chrono format used for date cells (default: ISO 8601)
    #[arg(long, value_name = "FORMAT")]
    pub date_format: Option<String>,

    /// Fail a workbook whose sheet names map to the same file instead of overwriting
    #[arg(long, default_value_t = false)]
    pub no_clobber: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

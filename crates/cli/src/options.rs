use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `--reserve-*-table-capacity=N` lines only
    #[default]
    Flags,
    /// Version banner, extracted metrics, then the flag lines
    Report,
    Json,
    Yaml,
}

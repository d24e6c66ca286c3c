#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `<flag-name>=<capacity>` line per table
    #[default]
    Flags,
    /// Banner, extracted metrics and flag lines
    Report,
    Json,
    Yaml,
}

/// Where counter text comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    /// Read standard input to the end.
    #[default]
    Stdin,
    /// Concatenate the given files in order; `-` stands for stdin.
    Files(Vec<std::path::PathBuf>),
    /// Spawn the checker and scan both of its output streams.
    Command { program: String, args: Vec<String> },
}

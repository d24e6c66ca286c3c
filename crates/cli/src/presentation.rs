// crates/cli/src/presentation.rs
use crate::error::Result;
use reserve_sizer_core::MetricSnapshot;
use reserve_sizer_engine::options::OutputFormat;
use reserve_sizer_engine::stats::RunResult;
use serde::Serialize;

/// Renders a run in the requested format, always newline-terminated.
///
/// # Errors
/// Returns an error if JSON or YAML serialization fails.
pub fn render(result: &RunResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Flags => Ok(render_flags(result)),
        OutputFormat::Report => Ok(render_report(result)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&StructuredReport::new(result))?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&StructuredReport::new(result))?),
    }
}

fn render_flags(result: &RunResult) -> String {
    result.recommendations.flag_lines().fold(String::new(), |mut out, line| {
        out.push_str(&line);
        out.push('\n');
        out
    })
}

fn render_report(result: &RunResult) -> String {
    let snapshot = &result.snapshot;
    let mut out = format!("reserve-sizer v{}\n\n", crate::VERSION);
    out.push_str(&format!("    {:<20}{:>12}\n", "METRIC", "COUNT"));
    out.push_str("----------------------------------------\n");
    for (label, metric) in [
        ("files", snapshot.file_count()),
        ("classes+modules", snapshot.class_module_count()),
        ("methods", snapshot.method_count()),
    ] {
        out.push_str(&format!("    {label:<20}{:>12}\n", metric.to_string()));
    }
    out.push_str("---\n");

    out.push_str(&render_flags(result));
    for (kind, err) in &result.recommendations.failures {
        out.push_str(&format!("# {}: {err}\n", kind.flag_name()));
    }

    let sized = result.recommendations.recommendations.len();
    out.push_str(&format!(
        "\n[reserve-sizer] Completed: {sized} table(s) sized from {} counter line(s).\n",
        result.counter_lines
    ));
    out
}

#[derive(Serialize)]
struct StructuredReport<'a> {
    version: &'static str,
    generated_at: String,
    counter_lines: usize,
    metrics: &'a MetricSnapshot,
    recommendations: Vec<RecommendationEntry>,
    failures: Vec<FailureEntry>,
}

#[derive(Serialize)]
struct RecommendationEntry {
    table: &'static str,
    flag: &'static str,
    capacity: u64,
}

#[derive(Serialize)]
struct FailureEntry {
    table: &'static str,
    error: String,
}

impl<'a> StructuredReport<'a> {
    fn new(result: &'a RunResult) -> Self {
        let set = &result.recommendations;
        Self {
            version: crate::VERSION,
            generated_at: chrono::Local::now().to_rfc3339(),
            counter_lines: result.counter_lines,
            metrics: &result.snapshot,
            recommendations: set
                .recommendations
                .iter()
                .map(|r| RecommendationEntry {
                    table: r.kind.identifier(),
                    flag: r.flag_name(),
                    capacity: r.capacity,
                })
                .collect(),
            failures: set
                .failures
                .iter()
                .map(|(kind, err)| FailureEntry { table: kind.identifier(), error: err.to_string() })
                .collect(),
        }
    }
}

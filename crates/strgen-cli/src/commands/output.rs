//! Output formats shared by `process` and `batch`.

use strgen_core::DocumentOutcome;
use strgen_core::report::render_document;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary block
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn format_outcome(outcome: &DocumentOutcome, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
        OutputFormat::Csv => format_csv(outcome),
        OutputFormat::Text => {
            let mut output = String::new();
            render_document(&mut output, outcome);
            Ok(output)
        }
    }
}

/// One header row and one value row; field columns follow the category's
/// rule order.
fn format_csv(outcome: &DocumentOutcome) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = vec!["document".to_string(), "document_type".to_string()];
    let mut row = vec![outcome.document.clone()];

    match &outcome.analysis {
        Some(analysis) => {
            row.push(analysis.document_type.label().to_string());
            for (label, value) in analysis.fields.iter() {
                header.push(label.to_string());
                row.push(value.as_str().to_string());
            }
            header.push("property_description".to_string());
            row.push(analysis.property_description.as_str().to_string());
        }
        None => {
            row.push("Error".to_string());
            header.push("error".to_string());
            row.push(outcome.error.clone().unwrap_or_default());
        }
    }

    wtr.write_record(&header)?;
    wtr.write_record(&row)?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

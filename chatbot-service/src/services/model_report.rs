//! Model capability report printed by `check-models`.

use super::providers::{GenerativeProvider, ProviderError};
use crate::models::ModelDescriptor;
use std::io::{self, Write};

/// Descriptions longer than this are cut in the report.
const DESCRIPTION_PREVIEW_CHARS: usize = 100;

const TROUBLESHOOTING: [&str; 3] = [
    "API key is invalid or expired",
    "Gemini API is not enabled for your account",
    "You need to create a new API key",
];

/// What the report concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// At least one model supports `generateContent`.
    Available { count: usize, suggested: String },
    /// The key sees models, but none can generate content.
    NoneAvailable { total: usize },
    /// Listing failed.
    Failed(ProviderError),
}

/// List models through `provider` and write the report to `out`.
///
/// Provider failures are reported, not returned; only write errors on `out`
/// surface as `Err`.
pub async fn run_report<W: Write>(
    provider: &dyn GenerativeProvider,
    out: &mut W,
) -> io::Result<ReportOutcome> {
    writeln!(out, "🔍 Checking available models for your API key...\n")?;

    match provider.list_models().await {
        Ok(models) => write_model_report(&models, out),
        Err(e) => {
            tracing::error!(error = %e, "Model listing failed");
            write_failure(&e, out)?;
            Ok(ReportOutcome::Failed(e))
        }
    }
}

/// Write the report for an already fetched model list.
pub fn write_model_report<W: Write>(
    models: &[ModelDescriptor],
    out: &mut W,
) -> io::Result<ReportOutcome> {
    let generating: Vec<&ModelDescriptor> =
        models.iter().filter(|m| m.supports_generation()).collect();

    for model in &generating {
        writeln!(out, "✅ {}", model.name)?;
        writeln!(out, "   Display Name: {}", model.display_name)?;
        writeln!(
            out,
            "   Description: {}...",
            truncate_chars(&model.description, DESCRIPTION_PREVIEW_CHARS)
        )?;
        writeln!(
            out,
            "   Methods: {}\n",
            format_methods(&model.supported_generation_methods)
        )?;
    }

    let Some(first) = generating.first() else {
        writeln!(out, "❌ No models with generateContent support found!")?;
        writeln!(out, "\n📋 All available models:")?;
        for model in models {
            writeln!(
                out,
                "   - {} (Methods: {})",
                model.name,
                format_methods(&model.supported_generation_methods)
            )?;
        }
        return Ok(ReportOutcome::NoneAvailable {
            total: models.len(),
        });
    };

    writeln!(out, "\n✅ Total models available: {}", generating.len())?;
    writeln!(out, "\n💡 Use this in your configuration:")?;
    writeln!(out, "   GEMINI_MODEL={}", first.name)?;

    Ok(ReportOutcome::Available {
        count: generating.len(),
        suggested: first.name.clone(),
    })
}

/// Write the listing error and the troubleshooting checklist.
pub fn write_failure<W: Write>(error: &ProviderError, out: &mut W) -> io::Result<()> {
    writeln!(out, "❌ Error accessing API: {}", error)?;
    writeln!(out, "\n🔧 Possible issues:")?;
    for (i, issue) in TROUBLESHOOTING.iter().enumerate() {
        writeln!(out, "   {}. {}", i + 1, issue)?;
    }
    Ok(())
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn format_methods(methods: &[String]) -> String {
    format!("[{}]", methods.join(", "))
}

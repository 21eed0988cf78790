//! Lists the Gemini models available to `GEMINI_API_KEY` and reports which
//! of them can answer chat questions.

use chatbot_service::config::GeminiSettings;
use chatbot_service::services::model_report::{run_report, ReportOutcome};
use chatbot_service::services::providers::gemini::{GeminiConfig, GeminiProvider};
use service_core::observability::init_cli_tracing;
use std::io::Write;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    init_cli_tracing("warn");

    let settings = match GeminiSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    if writeln!(stdout, "API Key loaded: {}\n", settings.key_preview()).is_err() {
        return ExitCode::FAILURE;
    }

    let provider = match GeminiProvider::new(GeminiConfig::from(&settings)) {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run_report(&provider, &mut stdout).await {
        Ok(ReportOutcome::Failed(_)) => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed to write report: {}", e);
            ExitCode::FAILURE
        }
    }
}

//! Console output formatter

use colored::Colorize;
use consent_application::{ClientState, InjectionOutcome, SetupStatus, UninstallReport};
use consent_domain::{ConsentDecision, ConsentStatus, DetectionResult, SetupState};
use serde::Serialize;

/// What happened when the consent client ran against a simulated page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationSummary {
    pub state: ClientState,
    /// Availability checks made on the page
    pub checks: u32,
    /// `window.clarity` calls made
    pub invocations: usize,
    /// Completion events dispatched
    pub events: usize,
}

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn colored output on or off for the whole process
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Format a detection result
    pub fn format_detection(result: &DetectionResult) -> String {
        let mut output = Self::header("Project ID Detection");

        match result.project_id() {
            Some(id) => output.push_str(&format!(
                "{} {}\n",
                "Project ID:".cyan().bold(),
                id.as_str().green().bold()
            )),
            None => output.push_str(&format!(
                "{} {}\n",
                "Project ID:".cyan().bold(),
                "not detected".yellow()
            )),
        }

        if let Some(provenance) = result.provenance() {
            output.push_str(&format!("{} {}\n", "Source:".cyan().bold(), provenance));
        }

        if result.needs_configuration_notice() {
            output.push_str(&format!(
                "\n{}\n",
                "The Microsoft Clarity plugin is active but keeps its project ID private. \
                 Save the ID in the plugin settings to enable consent propagation."
                    .yellow()
            ));
        }

        output
    }

    /// Format the settings page status
    pub fn format_status(status: &SetupStatus) -> String {
        let mut output = Self::header("Setup Status");

        let state = match &status.state {
            SetupState::Active { .. } => status.state.description().green().bold(),
            SetupState::ConfigurationNeeded => status.state.description().yellow().bold(),
            SetupState::CompanionMissing => status.state.description().red().bold(),
        };
        output.push_str(&format!("{} {}\n", "State:".cyan().bold(), state));

        output.push_str(&format!(
            "{} {}\n",
            "Clarity plugin:".cyan().bold(),
            if status.companion_active {
                "active".green()
            } else {
                "inactive".red()
            }
        ));

        if let Some(id) = status.detection.project_id() {
            output.push_str(&format!("{} {}\n", "Project ID:".cyan().bold(), id));
        }
        if let Some(provenance) = status.detection.provenance() {
            output.push_str(&format!("{} {}\n", "Source:".cyan().bold(), provenance));
        }

        if status.state.shows_consent_form() {
            output.push_str(&Self::section_header("Consent"));
            output.push_str(&Self::decision_lines(&status.consent));
        }

        if status.show_notice {
            output.push_str(&format!(
                "\n{} {}\n",
                "Notice:".yellow().bold(),
                "complete the Microsoft Clarity setup to activate the consent layer"
            ));
        }

        output
    }

    /// Format a render-time injection, followed by the rendered HTML
    pub fn format_injection(outcome: &InjectionOutcome, html: &str) -> String {
        match outcome {
            InjectionOutcome::Skipped { .. } => format!(
                "{}\n",
                "No project ID detected; the consent script is not enqueued.".yellow()
            ),
            InjectionOutcome::Enqueued { project_id, .. } => format!(
                "{} {}\n\n{}",
                "Consent script enqueued for project".green(),
                project_id.as_str().bold(),
                html
            ),
        }
    }

    /// Format the current consent settings
    pub fn format_decision(decision: &ConsentDecision) -> String {
        let mut output = Self::header("Consent Settings");
        output.push_str(&Self::decision_lines(decision));
        output
    }

    /// Format an uninstall report
    pub fn format_uninstall(report: &UninstallReport) -> String {
        let mut output = Self::header("Uninstall");

        if report.removed.is_empty() {
            output.push_str(&format!("{}\n", "Nothing to remove.".dimmed()));
        } else {
            for key in &report.removed {
                output.push_str(&format!("  {} {}\n", "removed".red(), key));
            }
        }

        output.push_str(&format!(
            "\n{} {} of {} entries\n",
            "Removed:".cyan().bold(),
            report.removed.len(),
            report.attempted
        ));
        output
    }

    /// Format the outcome of a simulated client run
    pub fn format_simulation(summary: &SimulationSummary) -> String {
        let mut output = Self::header("Consent Client Simulation");

        let state = format!("{:?}", summary.state);
        let state = match summary.state {
            ClientState::Applied => state.green().bold(),
            s if s.is_terminal() => state.red().bold(),
            _ => state.yellow().bold(),
        };

        output.push_str(&format!("{} {}\n", "State:".cyan().bold(), state));
        output.push_str(&format!("{} {}\n", "Checks:".cyan().bold(), summary.checks));
        output.push_str(&format!(
            "{} {}\n",
            "Clarity calls:".cyan().bold(),
            summary.invocations
        ));
        output.push_str(&format!("{} {}\n", "Events:".cyan().bold(), summary.events));
        output
    }

    /// Format any result as pretty JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn decision_lines(decision: &ConsentDecision) -> String {
        format!(
            "  {:<18} {}\n  {:<18} {}\n",
            "ad_storage",
            Self::status(decision.ad_storage),
            "analytics_storage",
            Self::status(decision.analytics_storage)
        )
    }

    fn status(status: ConsentStatus) -> colored::ColoredString {
        match status {
            ConsentStatus::Granted => status.as_str().green(),
            ConsentStatus::Denied => status.as_str().red(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consent_domain::{ProjectId, Provenance};

    fn plain() {
        ConsoleFormatter::set_color(false);
    }

    #[test]
    fn test_format_detection_found() {
        plain();
        let result = DetectionResult::found(
            ProjectId::parse("aq9itx5whc").unwrap(),
            Provenance::DetectedFrom("clarity_settings".into()),
        );
        let output = ConsoleFormatter::format_detection(&result);
        assert!(output.contains("Project ID: aq9itx5whc"));
        assert!(output.contains("Source: Detected from: clarity_settings"));
    }

    #[test]
    fn test_format_detection_companion_notice() {
        plain();
        let output = ConsoleFormatter::format_detection(&DetectionResult::companion_active());
        assert!(output.contains("not detected"));
        assert!(output.contains("Microsoft Clarity Plugin (active)"));
        assert!(output.contains("keeps its project ID private"));
    }

    #[test]
    fn test_format_decision() {
        plain();
        let output = ConsoleFormatter::format_decision(&ConsentDecision::new(
            ConsentStatus::Denied,
            ConsentStatus::Granted,
        ));
        assert!(output.contains("ad_storage         denied"));
        assert!(output.contains("analytics_storage  granted"));
    }

    #[test]
    fn test_format_uninstall_counts() {
        plain();
        let report = UninstallReport {
            removed: vec!["site:clarity_ad_storage".into()],
            attempted: 22,
        };
        let output = ConsoleFormatter::format_uninstall(&report);
        assert!(output.contains("removed site:clarity_ad_storage"));
        assert!(output.contains("Removed: 1 of 22 entries"));
    }

    #[test]
    fn test_format_injection_skipped() {
        plain();
        let outcome = InjectionOutcome::Skipped {
            detection: DetectionResult::undetected(),
        };
        let output = ConsoleFormatter::format_injection(&outcome, "");
        assert!(output.contains("not enqueued"));
    }

    #[test]
    fn test_format_json_simulation() {
        let summary = SimulationSummary {
            state: ClientState::TimedOut,
            checks: 101,
            invocations: 0,
            events: 0,
        };
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&summary)).unwrap();
        assert_eq!(json["state"], "timed_out");
        assert_eq!(json["checks"], 101);
    }
}

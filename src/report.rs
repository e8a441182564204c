//! User-facing rendering of provisioning outcomes

use crate::commands::initialize::Outcome;
use crate::error::DevhelperError;

pub struct OutcomeReporter;

impl OutcomeReporter {
    /// Format an outcome as the final banner shown to the user.
    pub fn format(outcome: &Outcome) -> String {
        match outcome {
            Outcome::Success {
                message,
                target_dir,
                next_steps,
                warnings,
            } => {
                let mut output = vec![
                    format!("✅ {message}"),
                    String::new(),
                    format!("📁 Location: {}", target_dir.display()),
                ];

                if !warnings.is_empty() {
                    output.push(String::new());
                    for warning in warnings {
                        output.push(format!("⚠️  {warning}"));
                        if let Some(hint) = warning.user_hint() {
                            output.push(format!("   {hint}"));
                        }
                    }
                }

                if !next_steps.is_empty() {
                    output.push(String::new());
                    output.push("➡️  Next steps:".to_string());
                    for step in next_steps {
                        output.push(format!("  {step}"));
                    }
                }

                output.join("\n")
            }
            Outcome::Failure(error) => Self::format_error(error),
        }
    }

    pub fn format_error(error: &DevhelperError) -> String {
        let mut output = vec![format!("❌ {error}")];
        if let Some(hint) = error.user_hint() {
            output.push(hint.to_string());
        }
        if error.is_preflight() {
            output.push("Nothing was created.".to_string());
        }
        output.join("\n")
    }

    /// Print to stdout on success and stderr on failure.
    pub fn print(outcome: &Outcome) {
        let text = Self::format(outcome);
        if outcome.is_success() {
            println!("{text}");
        } else {
            eprintln!("{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExitInfo;
    use std::path::PathBuf;

    fn success() -> Outcome {
        Outcome::Success {
            message: "Project 'demo' created successfully!".into(),
            target_dir: PathBuf::from("/work/demo"),
            next_steps: vec!["cd demo".into(), "open index.html in a browser".into()],
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_success_banner_lists_steps_in_order() {
        let text = OutcomeReporter::format(&success());
        assert!(text.starts_with("✅ Project 'demo' created successfully!"));
        assert!(text.contains("📁 Location: /work/demo"));
        let cd = text.find("  cd demo").unwrap();
        let open = text.find("  open index.html in a browser").unwrap();
        assert!(cd < open);
        assert!(!text.contains("⚠️"));
    }

    #[test]
    fn test_warnings_are_rendered() {
        let outcome = success().with_warning(DevhelperError::SecondaryStepFailed {
            command: "npm install".into(),
            status: ExitInfo::Code(1),
        });
        let text = OutcomeReporter::format(&outcome);
        assert!(text.contains("⚠️  Optional step 'npm install' exited with code 1"));
    }

    #[test]
    fn test_failure_banner() {
        let outcome = Outcome::Failure(DevhelperError::TargetExists {
            path: PathBuf::from("/work/demo"),
        });
        let text = OutcomeReporter::format(&outcome);
        assert!(text.starts_with("❌ Target directory already exists: /work/demo"));
        assert!(text.contains("Choose a different project name"));
        assert!(text.ends_with("Nothing was created."));
    }
}

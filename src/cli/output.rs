//! Output formatting for the interactive shell

use crate::domain::CommandResult;

const DIVIDER: &str = "____________________________________________________________";

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints the welcome banner (text only)
    pub fn banner(&self) {
        if self.is_text() {
            println!("{}", framed("Hello! I'm Cow\nWhat can I do for you?"));
        }
    }

    /// Prints the result of one command
    pub fn result(&self, command: &str, result: &CommandResult) {
        match self.format {
            OutputFormat::Text => println!("{}", framed(&result.message)),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "command": command,
                        "message": result.message,
                        "exit": result.exit,
                    })
                );
            }
        }
    }

    /// Prints an error message
    pub fn error(&self, message: &str) {
        match self.format {
            OutputFormat::Text => eprintln!("Error: {}", message),
            OutputFormat::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "success": false,
                        "error": message
                    })
                );
            }
        }
    }

    /// Prints a warning (always shown, on stderr)
    pub fn warn(&self, message: &str) {
        eprintln!("Warning: {}", message);
    }

    /// Returns true if using text format
    pub fn is_text(&self) -> bool {
        self.format == OutputFormat::Text
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}

fn framed(message: &str) -> String {
    format!("{DIVIDER}\n{message}\n{DIVIDER}")
}

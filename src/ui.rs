use colored::Colorize;

/// Print a progress line for a step that is about to run.
pub fn status_message(message: &str) {
    println!("{} {}", "⏳".yellow(), message.bright_white());
}

/// Print a completion line for a finished step.
pub fn success_message(message: &str) {
    println!("{} {}", "✅".green(), message.green());
}

/// Print a non-fatal warning line.
pub fn warning_message(message: &str) {
    println!("{} {}", "⚠️ ".yellow(), message.yellow());
}

/// Print a simple informational message.
pub fn info_message(message: &str) {
    println!("{} {}", "ℹ️ ".blue(), message.blue());
}

/// Print a header separating logical sections of output.
pub fn section_header(title: &str) {
    println!("\n{}", format!("==== {} ====", title).cyan().bold());
}

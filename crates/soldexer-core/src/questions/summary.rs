//! Configuration summary shown before the final confirmation

use crate::config::ProjectConfig;

fn section_summary(count: Option<usize>, noun: &str) -> String {
    match count {
        None => "Skipped".to_string(),
        Some(1) => format!("1 {}", noun),
        Some(n) => format!("{} {}s", n, noun),
    }
}

/// One `Label: value` line per configuration field
pub fn summary_lines(config: &ProjectConfig) -> Vec<String> {
    let features: Vec<&str> = config
        .features
        .enabled()
        .iter()
        .map(|f| f.name())
        .collect();
    let features = if features.is_empty() {
        "None".to_string()
    } else {
        features.join(", ")
    };

    vec![
        format!("Project Name: {}", config.project_name),
        format!("Description: {}", config.project_description),
        format!("Author: {}", config.author),
        format!("Type: {}", config.project_type.display_name()),
        format!("Framework: {}", config.framework.display_name()),
        format!("Network: {}", config.network.display_name()),
        format!(
            "Instructions: {}",
            section_summary(config.instructions.as_ref().map(Vec::len), "request")
        ),
        format!(
            "Token Balances: {}",
            section_summary(config.token_balances.as_ref().map(Vec::len), "request")
        ),
        format!("Features: {}", features),
    ]
}

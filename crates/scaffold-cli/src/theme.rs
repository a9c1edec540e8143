use console::style;
use dialoguer::theme::ColorfulTheme;

/// Theme for confirmation prompts.
pub fn dialoguer_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_style: console::Style::new().bold(),
        prompt_prefix: style("?".to_string()).yellow().bold(),
        success_prefix: style("✔".to_string()).green().bold(),
        error_prefix: style("✖".to_string()).red().bold(),
        hint_style: console::Style::new().dim(),
        values_style: console::Style::new().cyan(),
        ..Default::default()
    }
}

use wm_domain::config::{Config, ConfigSeverity};

/// Print every validation issue in the config plus a one-line verdict.
///
/// Warnings alone still count as valid.
pub fn validate(config: &Config, config_path: &str) -> bool {
    let (errors, warnings): (Vec<_>, Vec<_>) = config
        .validate()
        .into_iter()
        .partition(|issue| issue.severity == ConfigSeverity::Error);

    for issue in errors.iter().chain(&warnings) {
        println!("{issue}");
    }

    match (errors.len(), warnings.len()) {
        (0, 0) => println!("{config_path}: ok"),
        (0, w) => println!("{config_path}: ok with {w} warning(s)"),
        (e, w) => println!("{config_path}: {e} error(s), {w} warning(s)"),
    }

    errors.is_empty()
}

/// Dump the resolved config (with all defaults filled in) as TOML.
pub fn show(config: &Config) -> anyhow::Result<()> {
    print!("{}", render(config)?);
    Ok(())
}

pub fn render(config: &Config) -> anyhow::Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

//! `show` command: print the validated configuration.

use super::ShowFormat;
use anyhow::Result;
use blogconf::{Provider, SiteConfig};

/// Print the configuration to stdout.
pub fn show_config(provider: &Provider, format: ShowFormat, active_only: bool) -> Result<()> {
    print!("{}", render(provider, format, active_only)?);
    Ok(())
}

fn render(provider: &Provider, format: ShowFormat, active_only: bool) -> Result<String> {
    let filtered;
    let config: &SiteConfig = if active_only {
        let mut view = provider.config().clone();
        view.socials.retain(|link| link.active);
        filtered = view;
        &filtered
    } else {
        provider.config()
    };

    let mut out = match format {
        ShowFormat::Toml => toml::to_string_pretty(config)?,
        ShowFormat::Json => serde_json::to_string_pretty(config)?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

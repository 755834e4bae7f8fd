//! `check` command: validate and summarize.

use anyhow::Result;
use blogconf::{Provider, log};

/// Log a short summary of a provider that passed validation.
pub fn check_config(provider: &Provider) -> Result<()> {
    let source = provider.config().config_path.display().to_string();
    let source = if source.is_empty() {
        "compiled-in config".to_string()
    } else {
        source
    };

    log!("check"; "{} is valid", source);
    for line in summarize(provider) {
        log!("check"; "{}", line);
    }
    Ok(())
}

fn summarize(provider: &Provider) -> Vec<String> {
    let site = provider.site_settings();
    let logo = provider.logo_image_settings();
    let links = provider.social_links();

    let active: Vec<_> = links
        .iter()
        .filter(|link| link.active)
        .map(|link| link.platform.name())
        .collect();

    let logo_line = if logo.enabled {
        let kind = if logo.use_vector_format { "svg" } else { "raster" };
        format!("logo: {kind} {}x{}", logo.width, logo.height)
    } else {
        "logo: disabled, text title shown".to_string()
    };

    vec![
        format!("site: '{}' by {} at {}", site.title, site.author, site.website),
        format!("{} posts per page", site.posts_per_page),
        logo_line,
        format!(
            "{} social links, {} active: {}",
            links.len(),
            active.len(),
            active.join(", ")
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_builtin() {
        let provider = Provider::builtin().unwrap();
        let lines = summarize(&provider);
        assert_eq!(
            lines[0],
            "site: 'Abdou BENTEGAR' by Bentegar Sid Ahmed Abdelillah at https://astro-paper.pages.dev/"
        );
        assert_eq!(lines[1], "3 posts per page");
        assert_eq!(lines[2], "logo: disabled, text title shown");
        assert_eq!(
            lines[3],
            "6 social links, 4 active: Github, Facebook, Instagram, LinkedIn"
        );
    }

    #[test]
    fn test_check_builtin_succeeds() {
        let provider = Provider::builtin().unwrap();
        assert!(check_config(&provider).is_ok());
    }
}

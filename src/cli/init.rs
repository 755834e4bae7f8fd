//! `init` command: write a starter `blog.toml`.

use anyhow::{Context, Result, bail};
use blogconf::{SiteConfig, config::CONFIG_FILE, log};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Write the compiled-in configuration as a commented `blog.toml`.
///
/// If `dry_run` is true, only prints the config to stdout.
pub fn new_config(dir: Option<&Path>, force: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", SiteConfig::builtin().template()?);
        return Ok(());
    }

    let root = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Failed to get current working directory")?,
    };

    let path = write_config(&root, force)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}

fn write_config(root: &Path, force: bool) -> Result<PathBuf> {
    let path = root.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!(
            "'{}' already exists, pass --force to overwrite it",
            path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, SiteConfig::builtin().template()?)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_written_config_loads() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("my-blog");

        let path = write_config(&root, false).unwrap();
        assert_eq!(path, root.join(CONFIG_FILE));

        let loaded = SiteConfig::load(&path).unwrap();
        assert_eq!(loaded.socials, SiteConfig::builtin().socials);
        assert_eq!(loaded.site, SiteConfig::builtin().site);
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "# mine\n").unwrap();

        assert!(write_config(dir.path(), false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");

        write_config(dir.path(), true).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("[[socials]]"));
    }
}

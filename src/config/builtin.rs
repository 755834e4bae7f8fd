//! Compiled-in site data.

use super::SiteConfig;
use super::section::{LogoImageSettings, Platform, SiteSettings, SocialLinkEntry};

impl SiteConfig {
    /// The configuration this blog ships with.
    pub fn builtin() -> Self {
        Self {
            site: SiteSettings {
                website: "https://astro-paper.pages.dev/".into(),
                author: "Bentegar Sid Ahmed Abdelillah".into(),
                description: "My personal blog".into(),
                title: "Abdou BENTEGAR".into(),
                og_image_filename: "astropaper-og.jpg".into(),
                light_and_dark_mode_enabled: true,
                posts_per_page: 3,
            },
            logo: LogoImageSettings {
                enabled: false,
                use_vector_format: true,
                width: 216,
                height: 46,
            },
            socials: vec![
                SocialLinkEntry::new(
                    Platform::Github,
                    "https://github.com/sidahmedabdelillah",
                    " Abdou BENTEGAR on Github",
                    true,
                ),
                SocialLinkEntry::new(
                    Platform::Facebook,
                    "https://www.facebook.com/abdou12panda/",
                    "Abdou BENTEGAR on Facebook",
                    true,
                ),
                SocialLinkEntry::new(
                    Platform::Instagram,
                    "https://www.instagram.com/abdou_bentegar/",
                    "Abdou BENTEGAR on Instagram",
                    true,
                ),
                SocialLinkEntry::new(
                    Platform::LinkedIn,
                    "https://www.linkedin.com/in/sid-ahmed-abdelillah-bentegar-0556a1173/",
                    "Abdou BENTEGAR on LinkedIn",
                    true,
                ),
                SocialLinkEntry::new(
                    Platform::Mail,
                    "mailto:abdoubentegar@gmail.com",
                    "Send an email to Abdou BENTEGAR",
                    false,
                ),
                SocialLinkEntry::new(
                    Platform::Twitter,
                    "https://twitter.com/panda_AB12",
                    "Abdou BENTEGAR on Twitter",
                    false,
                ),
            ],
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let config = SiteConfig::builtin();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builtin_active_socials() {
        let config = SiteConfig::builtin();
        let active: Vec<Platform> = config
            .socials
            .iter()
            .filter(|s| s.active)
            .map(|s| s.platform)
            .collect();
        assert_eq!(
            active,
            [
                Platform::Github,
                Platform::Facebook,
                Platform::Instagram,
                Platform::LinkedIn
            ]
        );
    }

    #[test]
    fn test_builtin_mail_href() {
        let config = SiteConfig::builtin();
        let mail = config
            .socials
            .iter()
            .find(|s| s.platform == Platform::Mail)
            .unwrap();
        assert_eq!(mail.href, "mailto:abdoubentegar@gmail.com");
        assert!(!mail.active);
    }

    #[test]
    fn test_builtin_hrefs_use_allowed_schemes() {
        for entry in SiteConfig::builtin().socials {
            let parsed = url::Url::parse(&entry.href).unwrap();
            assert!(
                matches!(parsed.scheme(), "http" | "https" | "mailto"),
                "{}",
                entry.href
            );
        }
    }
}

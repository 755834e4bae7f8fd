//! Configuration section definitions.
//!
//! Each module corresponds to a section in `blog.toml`:
//!
//! | Module   | TOML Section  | Purpose                          |
//! |----------|---------------|----------------------------------|
//! | `site`   | `[site]`      | Title, author, url, pagination   |
//! | `logo`   | `[logo]`      | Header logo image                |
//! | `social` | `[[socials]]` | Ordered social profile links     |

mod logo;
mod site;
mod social;

pub use logo::LogoImageSettings;
pub use site::SiteSettings;
pub use social::{Platform, SocialLinkEntry, validate_socials};

//! Project type value object
//!
//! Marker-file detection plus per-type deployment defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Kind of web project being deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Laravel,
    Wordpress,
    Php,
    Node,
    Static,
}

/// Exclusions shared by every project type.
const COMMON_EXCLUDES: &[&str] = &[
    ".git/",
    ".gitignore",
    ".ftpush.json",
    ".git-ftp-ignore",
    ".git-ftp-include",
    ".DS_Store",
    ".idea/",
    ".vscode/",
];

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Laravel,
        ProjectType::Wordpress,
        ProjectType::Php,
        ProjectType::Node,
        ProjectType::Static,
    ];

    /// Detect the project type from marker files in `root`.
    ///
    /// First match wins: `artisan`, `wp-config.php` / `wp-content/`,
    /// `composer.json`, `package.json`.
    pub fn detect(root: &Path) -> Self {
        if root.join("artisan").is_file() {
            ProjectType::Laravel
        } else if root.join("wp-config.php").is_file() || root.join("wp-content").is_dir() {
            ProjectType::Wordpress
        } else if root.join("composer.json").is_file() {
            ProjectType::Php
        } else if root.join("package.json").is_file() {
            ProjectType::Node
        } else {
            ProjectType::Static
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Laravel => "laravel",
            ProjectType::Wordpress => "wordpress",
            ProjectType::Php => "php",
            ProjectType::Node => "node",
            ProjectType::Static => "static",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::Laravel => "Laravel",
            ProjectType::Wordpress => "WordPress",
            ProjectType::Php => "PHP (Composer)",
            ProjectType::Node => "Node / frontend",
            ProjectType::Static => "Static site",
        }
    }

    /// Exclusions proposed when creating a profile.
    pub fn default_excludes(&self) -> Vec<String> {
        let specific: &[&str] = match self {
            ProjectType::Laravel => &[
                ".env",
                "node_modules/",
                "tests/",
                "storage/logs/",
                "storage/framework/cache/",
                "storage/framework/sessions/",
                "storage/framework/views/",
                "phpunit.xml",
            ],
            ProjectType::Wordpress => &[
                "wp-config.php",
                "node_modules/",
                "wp-content/uploads/",
                "wp-content/cache/",
            ],
            ProjectType::Php => &[".env", "node_modules/", "tests/", "phpunit.xml"],
            ProjectType::Node => &[".env", "node_modules/", "src/"],
            ProjectType::Static => &[],
        };
        COMMON_EXCLUDES
            .iter()
            .chain(specific)
            .map(|s| s.to_string())
            .collect()
    }

    /// Build outputs that do not count as local modifications.
    pub fn artifact_patterns(&self) -> &'static [&'static str] {
        match self {
            ProjectType::Laravel => &[
                "/public/build/",
                "/public/js/",
                "/public/css/",
                "/public/mix-manifest.json",
                "/public/hot",
            ],
            ProjectType::Wordpress => &["/wp-content/themes/*/dist/", "/wp-content/themes/*/build/"],
            ProjectType::Php => &["/public/build/", "/public/dist/"],
            ProjectType::Node => &["/dist/", "/build/", "/public/build/"],
            ProjectType::Static => &["/dist/"],
        }
    }

    /// Lock file whose change triggers a composer install.
    pub fn package_lock_file(&self) -> Option<&'static str> {
        match self {
            ProjectType::Laravel | ProjectType::Php | ProjectType::Wordpress => {
                Some("composer.lock")
            }
            ProjectType::Node | ProjectType::Static => None,
        }
    }

    /// Whether an `npm run build` step applies to this tree.
    pub fn has_asset_pipeline(root: &Path) -> bool {
        root.join("package.json").is_file()
    }

    /// Whether a composer install step applies to this tree.
    pub fn has_package_manifest(&self, root: &Path) -> bool {
        self.package_lock_file().is_some() && root.join("composer.json").is_file()
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "laravel" => Ok(ProjectType::Laravel),
            "wordpress" | "wp" => Ok(ProjectType::Wordpress),
            "php" | "composer" => Ok(ProjectType::Php),
            "node" | "npm" => Ok(ProjectType::Node),
            "static" | "html" => Ok(ProjectType::Static),
            other => Err(format!(
                "unknown project type '{}' (expected laravel, wordpress, php, node or static)",
                other
            )),
        }
    }
}

//! Deployment profile entity
//!
//! The persisted description of a project's FTP target, deployment
//! policy and history.

use serde::{Deserialize, Serialize};

use super::history::{DeploymentRecord, History};
use crate::domain::value_objects::ProjectType;

/// File name of the profile in the project root.
pub const PROFILE_FILE_NAME: &str = ".ftpush.json";

pub const DEFAULT_FTP_PORT: u16 = 21;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub name: String,
}

/// FTP connection settings. The password is stored in plaintext.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FtpCredentials {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_remote_path")]
    pub remote_path: String,
    /// Explicit FTPS (AUTH TLS)
    #[serde(default)]
    pub secure: bool,
}

fn default_port() -> u16 {
    DEFAULT_FTP_PORT
}

fn default_remote_path() -> String {
    "/".to_string()
}

impl FtpCredentials {
    /// Remote path normalized to start with `/` and carry no trailing slash
    /// (except for the root itself).
    pub fn normalized_remote_path(&self) -> String {
        let trimmed = self.remote_path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        }
    }

    /// Target URL without credentials, e.g. `ftpes://ftp.example.com:21/www`.
    pub fn url(&self) -> String {
        let scheme = if self.secure { "ftpes" } else { "ftp" };
        self.url_with_scheme(scheme)
    }

    /// Same as [`url`](Self::url) with an explicit scheme. curl wants plain
    /// `ftp://` plus `--ssl-reqd` where git-ftp wants `ftpes://`.
    pub fn url_with_scheme(&self, scheme: &str) -> String {
        let path = self.normalized_remote_path();
        let path = if path == "/" { String::new() } else { path };
        format!("{}://{}:{}{}", scheme, self.host, self.port, path)
    }
}

impl std::fmt::Debug for FtpCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FtpCredentials")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("remote_path", &self.remote_path)
            .field("secure", &self.secure)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployPolicy {
    #[serde(default)]
    pub build_assets: bool,
    #[serde(default)]
    pub run_package_install: bool,
    /// Gitignore-style patterns never uploaded
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl DeployPolicy {
    /// Exclusions with blanks and duplicates removed, first occurrence wins.
    pub fn normalized_excludes(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.exclude
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .filter(|p| seen.insert(p.to_string()))
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentProfile {
    pub project: ProjectDescriptor,
    pub ftp: FtpCredentials,
    #[serde(rename = "deployment")]
    pub policy: DeployPolicy,
    #[serde(default)]
    pub history: History,
}

impl DeploymentProfile {
    pub fn new(project: ProjectDescriptor, ftp: FtpCredentials, policy: DeployPolicy) -> Self {
        Self {
            project,
            ftp,
            policy,
            history: History::new(),
        }
    }

    pub fn last_record(&self) -> Option<&DeploymentRecord> {
        self.history.latest()
    }

    pub fn last_revision(&self) -> Option<&str> {
        self.history.latest_revision()
    }

    /// Target URL of the stored credentials, before any overrides.
    pub fn ftp_url(&self) -> String {
        self.ftp.url()
    }

    /// Prepare for writing: exclusions de-duplicated.
    pub fn normalize(&mut self) {
        self.policy.exclude = self.policy.normalized_excludes();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ftp(remote_path: &str, secure: bool) -> FtpCredentials {
        FtpCredentials {
            host: "ftp.example.com".to_string(),
            port: 21,
            username: "deploy".to_string(),
            password: "hunter2".to_string(),
            remote_path: remote_path.to_string(),
            secure,
        }
    }

    #[test]
    fn url_uses_ftpes_when_secure() {
        assert_eq!(ftp("/www/", true).url(), "ftpes://ftp.example.com:21/www");
        assert_eq!(ftp("www", false).url(), "ftp://ftp.example.com:21/www");
    }

    #[test]
    fn url_omits_root_path() {
        assert_eq!(ftp("/", false).url(), "ftp://ftp.example.com:21");
        assert_eq!(ftp("", false).url(), "ftp://ftp.example.com:21");
    }

    #[test]
    fn debug_masks_password() {
        let rendered = format!("{:?}", ftp("/", false));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn normalized_excludes_dedupes_in_order() {
        let policy = DeployPolicy {
            build_assets: false,
            run_package_install: false,
            exclude: vec![
                ".env".to_string(),
                " node_modules/ ".to_string(),
                "".to_string(),
                ".env".to_string(),
            ],
        };
        assert_eq!(
            policy.normalized_excludes(),
            vec![".env".to_string(), "node_modules/".to_string()]
        );
    }

    #[test]
    fn parses_minimal_profile_with_defaults() {
        let json = r#"{
            "project": {"type": "static", "name": "site"},
            "ftp": {"host": "h", "username": "u"},
            "deployment": {}
        }"#;
        let profile: DeploymentProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.ftp.port, 21);
        assert_eq!(profile.ftp.remote_path, "/");
        assert!(!profile.ftp.secure);
        assert!(profile.history.is_empty());
        assert!(profile.policy.exclude.is_empty());
    }

    #[test]
    fn serializes_project_type_under_type_key() {
        let profile = DeploymentProfile::new(
            ProjectDescriptor {
                project_type: ProjectType::Laravel,
                name: "shop".to_string(),
            },
            ftp("/", false),
            DeployPolicy {
                build_assets: true,
                run_package_install: true,
                exclude: vec![],
            },
        );
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["project"]["type"], "laravel");
        assert_eq!(value["deployment"]["build_assets"], true);
        assert_eq!(value["history"], serde_json::json!([]));
    }
}

//! Init helpers
//!
//! Defaults proposed by `ftpush init` and the pieces that turn the answers
//! into a profile. Prompting lives in the binary.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use ignore::gitignore::Gitignore;

use crate::domain::entities::{
    DeployPolicy, DeploymentProfile, FtpCredentials, ProjectDescriptor, PROFILE_FILE_NAME,
};
use crate::domain::value_objects::ProjectType;

/// Values proposed before the user answers anything
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitDefaults {
    pub project_type: ProjectType,
    pub name: String,
    pub build_assets: bool,
    pub run_package_install: bool,
    pub excludes: Vec<String>,
}

/// Detect defaults for `root`.
pub fn defaults_for(root: &Path) -> InitDefaults {
    let project_type = ProjectType::detect(root);
    defaults_for_type(root, project_type)
}

/// Defaults after the user picked `project_type` (possibly different from
/// the detected one).
pub fn defaults_for_type(root: &Path, project_type: ProjectType) -> InitDefaults {
    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "site".to_string());
    InitDefaults {
        project_type,
        name,
        build_assets: ProjectType::has_asset_pipeline(root),
        run_package_install: project_type.has_package_manifest(root),
        excludes: project_type.default_excludes(),
    }
}

/// Answers collected by the init dialog
#[derive(Debug, Clone)]
pub struct InitAnswers {
    pub project: ProjectDescriptor,
    pub ftp: FtpCredentials,
    pub policy: DeployPolicy,
}

/// Build the profile to write. History of a replaced profile is kept.
pub fn build_profile(answers: InitAnswers, previous: Option<&DeploymentProfile>) -> DeploymentProfile {
    let mut profile = DeploymentProfile::new(answers.project, answers.ftp, answers.policy);
    if let Some(previous) = previous {
        profile.history = previous.history.clone();
    }
    profile.normalize();
    profile
}

/// Split the comma-separated exclusion answer.
pub fn parse_exclude_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn format_exclude_list(patterns: &[String]) -> String {
    patterns.join(", ")
}

/// Whether the project's `.gitignore` ignores the profile file.
pub fn gitignore_covers(root: &Path) -> bool {
    let path = root.join(".gitignore");
    if !path.is_file() {
        return false;
    }
    let (gitignore, _errors) = Gitignore::new(&path);
    gitignore
        .matched(Path::new(PROFILE_FILE_NAME), false)
        .is_ignore()
}

/// Append the profile file name to `.gitignore`, creating it if needed.
pub fn append_to_gitignore(root: &Path) -> io::Result<()> {
    let path = root.join(".gitignore");
    let existing = fs::read_to_string(&path).unwrap_or_default();
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    if !existing.is_empty() && !existing.ends_with('\n') {
        writeln!(file)?;
    }
    writeln!(file, "{}", PROFILE_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DeploymentRecord;
    use crate::domain::value_objects::DeployKind;
    use chrono::Utc;
    use tempfile::tempdir;

    fn answers() -> InitAnswers {
        InitAnswers {
            project: ProjectDescriptor {
                project_type: ProjectType::Php,
                name: "blog".to_string(),
            },
            ftp: FtpCredentials {
                host: "ftp.example.com".to_string(),
                port: 21,
                username: "deploy".to_string(),
                password: "pw".to_string(),
                remote_path: "/www".to_string(),
                secure: true,
            },
            policy: DeployPolicy {
                build_assets: false,
                run_package_install: true,
                exclude: vec!["tests/".to_string(), "tests/".to_string(), " ".to_string()],
            },
        }
    }

    #[test]
    fn defaults_follow_marker_files() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("shop");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("artisan"), "").unwrap();
        fs::write(root.join("composer.json"), "{}").unwrap();

        let defaults = defaults_for(&root);

        assert_eq!(defaults.project_type, ProjectType::Laravel);
        assert_eq!(defaults.name, "shop");
        assert!(!defaults.build_assets);
        assert!(defaults.run_package_install);
        assert!(defaults.excludes.contains(&".env".to_string()));
        assert!(defaults.excludes.contains(&PROFILE_FILE_NAME.to_string()));
    }

    #[test]
    fn static_site_has_no_install_step() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("composer.json"), "{}").unwrap();

        let defaults = defaults_for_type(dir.path(), ProjectType::Static);

        assert!(!defaults.run_package_install);
    }

    #[test]
    fn build_profile_keeps_previous_history() {
        let mut previous = DeploymentProfile::new(
            answers().project,
            answers().ftp,
            answers().policy,
        );
        previous.history.push(DeploymentRecord::new(
            Utc::now(),
            "dana",
            DeployKind::Full,
            Some("abc".to_string()),
        ));

        let profile = build_profile(answers(), Some(&previous));

        assert_eq!(profile.history.len(), 1);
        assert_eq!(profile.policy.exclude, vec!["tests/".to_string()]);
        assert!(build_profile(answers(), None).history.is_empty());
    }

    #[test]
    fn exclude_list_parsing() {
        assert_eq!(
            parse_exclude_list(" .env, node_modules/ ,,tests/ "),
            vec![".env", "node_modules/", "tests/"]
        );
        assert!(parse_exclude_list("  ").is_empty());
        assert_eq!(
            format_exclude_list(&[".env".to_string(), "tests/".to_string()]),
            ".env, tests/"
        );
    }

    #[test]
    fn gitignore_detection_and_append() {
        let dir = tempdir().unwrap();
        assert!(!gitignore_covers(dir.path()));

        fs::write(dir.path().join(".gitignore"), "vendor/\n/node_modules").unwrap();
        assert!(!gitignore_covers(dir.path()));

        append_to_gitignore(dir.path()).unwrap();
        assert!(gitignore_covers(dir.path()));
        let content = fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert_eq!(content, "vendor/\n/node_modules\n.ftpush.json\n");
    }

    #[test]
    fn gitignore_glob_counts() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), ".ftpush*\n").unwrap();
        assert!(gitignore_covers(dir.path()));
    }
}

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROFILE: &str = "default";

/// Sections of an AWS shared config or credentials file.
///
/// Both files use the same INI dialect; the config file prefixes every
/// non-default section with `profile `, the credentials file does not.
#[derive(Debug, Default, Clone)]
pub struct ProfileFile {
    sections: HashMap<String, HashMap<String, String>>,
}

impl ProfileFile {
    pub fn parse(contents: &str) -> ProfileFile {
        let mut sections: HashMap<String, HashMap<String, String>> =
            HashMap::new();
        let mut current: Option<String> = None;

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';')
            {
                continue;
            }
            if line.starts_with('[') && line.ends_with(']') {
                let name = line[1..line.len() - 1].trim();
                let name = name.strip_prefix("profile ").unwrap_or(name).trim();
                sections.entry(name.to_string()).or_default();
                current = Some(name.to_string());
                continue;
            }
            let (Some(section), Some((key, value))) =
                (current.as_ref(), line.split_once('='))
            else {
                continue;
            };
            if let Some(properties) = sections.get_mut(section) {
                properties
                    .insert(key.trim().to_lowercase(), value.trim().to_string());
            }
        }
        ProfileFile { sections }
    }

    /// Reads and parses `path`. A missing file yields an empty profile set.
    pub fn load(path: &Path) -> io::Result<ProfileFile> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(ProfileFile::parse(&contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Ok(ProfileFile::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn get(&self, profile: &str, key: &str) -> Option<&str> {
        self.sections
            .get(profile)
            .and_then(|properties| properties.get(key))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Resolves a shared file path: explicit override first, then
/// `~/.aws/<file_name>`.
pub fn shared_file_path(
    override_path: Option<&str>,
    file_name: &str,
) -> Option<PathBuf> {
    match override_path.filter(|path| !path.is_empty()) {
        Some(path) => Some(PathBuf::from(path)),
        None => dirs::home_dir().map(|home| home.join(".aws").join(file_name)),
    }
}

use rust_embed::Embed;
use thiserror::Error;

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(String),
    #[error("Couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
    #[error("Skill {name} has level {level}, expected 0-100")]
    InvalidSkillLevel { name: String, level: u32 },
    #[error("Invalid link {url} in {context}")]
    InvalidLink { context: String, url: String },
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Reads an embedded content file and decodes it as JSON.
pub fn load_json<T>(name: &str) -> Result<T, ContentError>
where
    T: serde::de::DeserializeOwned,
{
    let file = Assets::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
    parse_json(name, &file.data)
}

pub(crate) fn parse_json<T>(name: &str, data: &[u8]) -> Result<T, ContentError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_slice(data).map_err(|e| ContentError::Parse {
        file: name.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Settings;

    #[test]
    fn test_embedded_files_present() {
        let names = Assets::iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert!(names.contains(&"catalog.json".to_string()));
        assert!(names.contains(&"settings.json".to_string()));
    }

    #[test]
    fn test_missing_file() {
        let res = load_json::<Settings>("nope.json");
        assert_eq!(res.err(), Some(ContentError::Missing("nope.json".to_string())));
    }

    #[test]
    fn test_parse_error_names_file() {
        let res = parse_json::<Catalog>("broken.json", b"{ not json");
        match res {
            Err(ContentError::Parse { file, .. }) => assert_eq!(file, "broken.json"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}

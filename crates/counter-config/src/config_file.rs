use std::path::PathBuf;

pub(crate) const CONFIG_FILE: &str = ".counter-lander.toml";

/// Load config file content, first match wins:
/// 1. `.counter-lander.toml` in the current working directory
/// 2. `.counter-lander.toml` in the home directory
/// 3. `config.toml` in the platform config directory
pub fn load_config_file() -> Option<String> {
    candidate_paths().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = std::env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(CONFIG_FILE));
    }
    if let Ok(path) = crate::paths::app_config_path() {
        paths.push(path);
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cwd_config_is_tried_first() {
        let paths = candidate_paths();
        assert_eq!(paths.first(), Some(&PathBuf::from(CONFIG_FILE)));
    }
}

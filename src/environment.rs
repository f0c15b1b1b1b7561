use std::collections::HashMap;
use std::env::{split_paths, vars_os};
use std::path::PathBuf;

const DEFAULT_SYSTEM_ROOT: &str = "C:\\Windows";
const DEFAULT_PATHEXT: &str = ".com;.exe;.bat;.cmd";

/*
    Read-only view of the variables a scan resolves against.
    Names are matched case-insensitively, as Windows does.
*/
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Snapshot the current process environment
    pub fn from_process() -> Environment {
        Environment::from_pairs(vars_os().map(|(key, value)| {
            (
                key.to_string_lossy().into_owned(),
                value.to_string_lossy().into_owned(),
            )
        }))
    }

    /// Build from explicit pairs; a later duplicate name wins
    pub fn from_pairs<I, K, V>(pairs: I) -> Environment
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(key, value)| (key.as_ref().to_uppercase(), value.into()))
            .collect();
        Environment { vars }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(&name.to_uppercase()).map(String::as_str)
    }

    /// `SystemRoot`, then `windir`, then the stock install location
    pub fn system_root(&self) -> String {
        ["SystemRoot", "windir"]
            .iter()
            .filter_map(|name| self.get(name))
            .find(|root| !root.is_empty())
            .unwrap_or(DEFAULT_SYSTEM_ROOT)
            .trim_end_matches('\\')
            .to_string()
    }

    pub fn search_dirs(&self) -> Vec<PathBuf> {
        match self.get("PATH") {
            Some(path) => split_paths(path)
                .filter(|dir| !dir.as_os_str().is_empty())
                .collect(),
            None => Vec::new(),
        }
    }

    // suffixes tried when a candidate has no extension of its own
    pub fn executable_extensions(&self) -> Vec<String> {
        let pathext = self
            .get("PATHEXT")
            .filter(|exts| !exts.trim().is_empty())
            .unwrap_or(DEFAULT_PATHEXT);
        pathext
            .split(';')
            .map(|ext| ext.trim().to_lowercase())
            .filter(|ext| !ext.is_empty())
            .map(|ext| if ext.starts_with('.') { ext } else { format!(".{ext}") })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Environment;
    use std::path::PathBuf;

    #[test]
    fn test_get_is_case_insensitive() {
        let env = Environment::from_pairs([("ProgramData", "C:\\ProgramData")]);
        assert_eq!(env.get("PROGRAMDATA"), Some("C:\\ProgramData"));
        assert_eq!(env.get("programdata"), Some("C:\\ProgramData"));
        assert_eq!(env.get("AppData"), None);
    }

    #[test]
    fn test_system_root() {
        let env = Environment::from_pairs([("SYSTEMROOT", "D:\\Win\\")]);
        assert_eq!(env.system_root(), "D:\\Win");

        let env = Environment::from_pairs([("windir", "E:\\Windows")]);
        assert_eq!(env.system_root(), "E:\\Windows");

        let env = Environment::from_pairs([("SystemRoot", ""), ("windir", "F:\\Windows")]);
        assert_eq!(env.system_root(), "F:\\Windows");

        let env = Environment::from_pairs([("SystemRoot", ""), ("windir", "")]);
        assert_eq!(env.system_root(), "C:\\Windows");

        let env = Environment::default();
        assert_eq!(env.system_root(), "C:\\Windows");
    }

    #[test]
    fn test_executable_extensions() {
        let env = Environment::from_pairs([("PATHEXT", ".COM;.EXE;;PS1")]);
        assert_eq!(env.executable_extensions(), vec![".com", ".exe", ".ps1"]);

        let env = Environment::default();
        assert_eq!(
            env.executable_extensions(),
            vec![".com", ".exe", ".bat", ".cmd"]
        );
    }

    #[test]
    fn test_search_dirs() {
        let dir = std::env::temp_dir();
        let env = Environment::from_pairs([("Path", dir.to_string_lossy().into_owned())]);
        assert_eq!(env.search_dirs(), vec![dir]);

        assert_eq!(Environment::default().search_dirs(), Vec::<PathBuf>::new());
    }
}

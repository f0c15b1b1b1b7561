extern crate dunce;             // strips verbatim \\?\ prefixes from Windows paths
extern crate path_abs;          // absolute, lexically cleaned paths

use crate::{error::ParseError, mutate::*};
use log::debug;
use path_abs::{PathAbs, PathInfo};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/*
    Finds a runnable file the way a command line launch would:
    the candidate itself first, then every search directory for bare names,
    appending each executable suffix when the name alone does not match.
    Results are memoized for the life of the locator, i.e. one scan.
*/
pub struct Locator {
    search_dirs: Vec<PathBuf>,
    extensions: Vec<String>,
    cache: HashMap<String, Option<PathBuf>>,
}

impl Locator {
    pub fn new(search_dirs: Vec<PathBuf>, extensions: Vec<String>) -> Locator {
        Locator {
            search_dirs,
            extensions,
            cache: HashMap::new(),
        }
    }

    pub fn locate(&mut self, candidate: &str) -> Result<PathBuf, ParseError> {
        let found = match self.cache.get(candidate) {
            Some(hit) => hit.clone(),
            None => {
                let found = self.search(candidate);
                self.cache.insert(candidate.to_string(), found.clone());
                found
            }
        };
        found.ok_or_else(|| ParseError::Resolution(candidate.to_string()))
    }

    /*
        Canonical form of an accepted executable path.
        A path the locator cannot find again is kept as given.
    */
    pub fn clean_path(&mut self, path: &str) -> String {
        let found = match self.locate(path) {
            Ok(f) => f,
            Err(e) => {
                debug!("[autorun_hunter] Keeping path as given: {e}");
                return path.to_string();
            }
        };
        let abs = match PathAbs::new(&found) {
            Ok(a) => a.as_path().to_path_buf(),
            Err(_e) => found,
        };
        dunce::simplified(&abs).to_string_lossy().into_owned()
    }

    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    fn search(&self, candidate: &str) -> Option<PathBuf> {
        if candidate.trim().is_empty() {
            return None;
        }
        if let Some(found) = self.find_executable(candidate) {
            return Some(found);
        }
        if has_separator(candidate) {
            return None;
        }
        self.search_dirs.iter().find_map(|dir| {
            self.find_executable(&dir.join(candidate).to_string_lossy())
        })
    }

    fn find_executable(&self, file: &str) -> Option<PathBuf> {
        if has_extension(file) && is_file(Path::new(file)) {
            return Some(PathBuf::from(file));
        }
        self.extensions
            .iter()
            .map(|ext| push_file_path(file, ext))
            .find(|path| is_file(path))
    }
}

fn is_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}

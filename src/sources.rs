use crate::{data_defs::*, environment::Environment};
use log::{debug, warn};
use std::{fs, path::PathBuf};

const STARTUP_SUBPATH: [&str; 5] = ["Microsoft", "Windows", "Start Menu", "Programs", "StartUp"];

/*
    Anything that can enumerate raw autorun findings.
    Sources swallow their own access errors, a missing key or folder just yields nothing.
*/
pub trait RawSource {
    fn entries(&self) -> Vec<RawEntry>;
}

// fixed findings, e.g. replayed from another collector
impl RawSource for Vec<RawEntry> {
    fn entries(&self) -> Vec<RawEntry> {
        self.clone()
    }
}

/*
    %ProgramData%\Microsoft\Windows\Start Menu\Programs\StartUp
    %AppData%\Microsoft\Windows\Start Menu\Programs\StartUp
*/
pub struct StartupFolders {
    folders: Vec<PathBuf>,
}

impl StartupFolders {
    pub fn new(folders: Vec<PathBuf>) -> StartupFolders {
        StartupFolders { folders }
    }

    // global folder first, then the user's
    pub fn from_environment(env: &Environment) -> StartupFolders {
        let folders = ["ProgramData", "AppData"]
            .iter()
            .filter_map(|var| env.get(var))
            .filter(|base| !base.is_empty())
            .map(|base| {
                STARTUP_SUBPATH
                    .iter()
                    .fold(PathBuf::from(base), |path, part| path.join(part))
            })
            .collect();
        StartupFolders::new(folders)
    }
}

impl RawSource for StartupFolders {
    fn entries(&self) -> Vec<RawEntry> {
        let mut entries = vec![];
        for folder in &self.folders {
            let listing = match fs::read_dir(folder) {
                Ok(l) => l,
                Err(e) => {
                    debug!("[autorun_hunter] Skipping startup folder {}: {e}", folder.display());
                    continue;
                }
            };

            let mut files: Vec<PathBuf> = listing
                .filter_map(|item| match item {
                    Ok(i) => Some(i.path()),
                    Err(e) => {
                        warn!("[autorun_hunter] Could not read entry in {}: {e}", folder.display());
                        None
                    }
                })
                .filter(|path| path.file_name().map_or(true, |name| name != "desktop.ini"))
                .collect();
            files.sort();

            let location = folder.to_string_lossy();
            for file in files {
                entries.push(RawEntry::new(
                    EntryType::Startup,
                    &location,
                    &file.to_string_lossy(),
                    false,
                    "",
                ));
            }
        }
        entries
    }
}

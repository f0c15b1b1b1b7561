use crate::{
    data_defs::*, environment::Environment, error::ParseError, file::hash_file,
    locate::Locator, mutate::image_name, normalize::normalize_path, resolve::split_command_line,
    sources::RawSource,
};
use log::{debug, info};

/*
    Turns raw findings into autorun records.
    Holds the read-only environment and the locator cache for one scan pass.
*/
pub struct Collector {
    env: Environment,
    locator: Locator,
}

impl Collector {
    pub fn new(env: Environment) -> Collector {
        let locator = Locator::new(env.search_dirs(), env.executable_extensions());
        Collector { env, locator }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Normalize then split a launch string into (executable, arguments)
    pub fn parse_path(&mut self, value: &str) -> Result<(String, String), ParseError> {
        let normalized = normalize_path(value, &self.env)?;
        split_command_line(&normalized, &mut self.locator)
    }

    /*
        Never fails: an unparsable value is reported with the raw value as image path
        and no arguments, an unreadable image with empty digests.
    */
    pub fn build(&mut self, raw: &RawEntry) -> Autorun {
        let mut image_path = raw.value.clone();
        let mut arguments = String::new();

        if raw.parse {
            match self.parse_path(&raw.value) {
                Ok((executable, args)) => {
                    image_path = executable;
                    arguments = args;
                }
                Err(e) => debug!("[autorun_hunter] {}: {e}", raw.location),
            }
        }

        let (md5, sha1, sha256) = hash_file(&image_path);

        Autorun {
            entry_type: raw.entry_type,
            location: raw.location.clone(),
            image_name: image_name(&image_path),
            image_path,
            arguments,
            md5,
            sha1,
            sha256,
            entry: raw.name.clone(),
            launch_string: raw.value.clone(),
        }
    }

    // one pass over the sources in the order given, records keep source order
    pub fn scan(&mut self, sources: &[Box<dyn RawSource>]) -> Vec<Autorun> {
        let mut records = vec![];
        for source in sources {
            for raw in source.entries() {
                records.push(self.build(&raw));
            }
        }
        info!(
            "[autorun_hunter] Collected {} autoruns, {} distinct lookups",
            records.len(),
            self.locator.cached()
        );
        records
    }
}

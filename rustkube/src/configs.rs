use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::{kube_dir, KUBECONFIG_SUFFIX};

/// The kubeconfig names found in `~/.kube`, sorted by byte value.
///
/// Built fresh from the filesystem every time it is asked for; nothing is
/// cached between invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSet {
    names: Vec<String>,
}

impl ConfigSet {
    /// Scans `<home>/.kube` for `*.kubeconfig` entries.
    ///
    /// A missing home, a missing directory and a bad glob pattern all give an
    /// empty set.
    pub fn discover(home: Option<&Path>) -> ConfigSet {
        let home = match home {
            Some(home) => home,
            None => {
                debug!("HOME is not set, no kubeconfigs to list");
                return ConfigSet::default();
            }
        };

        let dir = kube_dir(home);
        let pattern = format!(
            "{}/*{KUBECONFIG_SUFFIX}",
            glob::Pattern::escape(&dir.to_string_lossy())
        );

        let paths = match glob::glob(&pattern) {
            Ok(paths) => paths,
            Err(err) => {
                debug!(%pattern, %err, "bad kubeconfig pattern, treating as empty");
                return ConfigSet::default();
            }
        };

        let names = paths
            .filter_map(Result::ok)
            .filter_map(|path| path.file_name()?.to_str().map(str::to_owned));
        let set = ConfigSet::from_names(names);

        debug!(%pattern, found = set.len(), "discovered kubeconfigs");
        set
    }

    pub fn from_names<I, S>(names: I) -> ConfigSet
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        ConfigSet { names }
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl fmt::Display for ConfigSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(" "))
    }
}

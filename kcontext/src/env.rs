use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Process environment, read once at startup.
#[derive(Debug, Clone, Default)]
pub struct Env {
    pub home: Option<PathBuf>,
}

impl Env {
    pub fn from_process() -> Env {
        Env::from_home(std::env::var_os("HOME"))
    }

    fn from_home(home: Option<OsString>) -> Env {
        Env {
            home: home.filter(|h| !h.is_empty()).map(PathBuf::from),
        }
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }
}

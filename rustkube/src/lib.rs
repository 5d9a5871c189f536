pub mod configs;

use std::path::{Path, PathBuf};

pub use configs::*;

/// File extension every selectable kubeconfig carries.
pub const KUBECONFIG_SUFFIX: &str = ".kubeconfig";

pub fn kube_dir(home: &Path) -> PathBuf {
    home.join(".kube")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kube_dir_is_under_home() {
        assert_eq!(kube_dir(Path::new("/home/u")), PathBuf::from("/home/u/.kube"));
    }

    #[test]
    fn kube_dir_ignores_trailing_slash() {
        assert_eq!(kube_dir(Path::new("/home/u/")), PathBuf::from("/home/u/.kube"));
    }
}

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KcontextError {
    #[error("unsupported shell '{0}'. Supported: bash, zsh, fish")]
    UnsupportedShell(String),

    #[error("kubeconfig '{0}' not found")]
    ConfigNotFound(String),

    #[error("Shell integration not loaded. Run setup:")]
    ShellIntegrationNotLoaded,
}

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "kcontext")]
#[command(about = "Simple Kubernetes kubeconfig switcher CLI", long_about = None)]
pub struct Cli {
    /// Kubeconfig file name to switch to
    pub config: Option<String>,

    /// Show version
    #[arg(short = 'v', long)]
    pub version: bool,

    /// List available kubeconfig files
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Output shell command (for eval integration)
    #[arg(long)]
    pub shell: bool,

    /// Generate shell integration (bash, zsh, fish)
    #[arg(long, value_name = "SHELL")]
    pub init: Option<String>,
}

/// What a single run of the binary does, decided once from the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationMode {
    ShowVersion,
    InitShell(String),
    ListConfigs,
    Select { name: String, shell: bool },
    Help,
}

impl Cli {
    pub fn mode(self) -> InvocationMode {
        if self.version {
            InvocationMode::ShowVersion
        } else if let Some(shell) = self.init {
            InvocationMode::InitShell(shell)
        } else if self.list {
            InvocationMode::ListConfigs
        } else if let Some(name) = self.config {
            InvocationMode::Select {
                name,
                shell: self.shell,
            }
        } else {
            InvocationMode::Help
        }
    }
}

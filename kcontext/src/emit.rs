use std::path::Path;

use console::style;
use rustkube::{kube_dir, ConfigSet};

use crate::cli::InvocationMode;
use crate::error::KcontextError;
use crate::shell_init::ShellKind;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const SETUP: &str = r#"  Bash:  eval "$(kcontext --init bash)"
  Zsh:   eval "$(kcontext --init zsh)"
  Fish:  kcontext --init fish | source
"#;

/// Everything a run prints, and how it exits.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
}

impl Outcome {
    fn ok(stdout: impl Into<String>) -> Outcome {
        Outcome {
            stdout: stdout.into(),
            ..Outcome::default()
        }
    }

    fn fail(err: KcontextError, detail: &str) -> Outcome {
        Outcome {
            stdout: String::new(),
            stderr: format!("{} {err}\n{detail}", style("Error:").red().for_stderr()),
            code: 1,
        }
    }
}

pub fn emit(mode: InvocationMode, configs: &ConfigSet, home: Option<&Path>) -> Outcome {
    match mode {
        InvocationMode::ShowVersion => Outcome::ok(format!("kcontext version {VERSION}\n")),
        InvocationMode::InitShell(shell) => match shell.parse::<ShellKind>() {
            Ok(kind) => Outcome::ok(kind.script()),
            Err(err) => Outcome::fail(err, ""),
        },
        InvocationMode::ListConfigs => Outcome::ok(listing(configs)),
        InvocationMode::Help => Outcome::ok(help(configs)),
        InvocationMode::Select { name, shell } => match (home, configs.contains(&name)) {
            (Some(home), true) if shell => Outcome::ok(export_statement(home, &name)),
            (Some(_), true) => Outcome::fail(KcontextError::ShellIntegrationNotLoaded, SETUP),
            // Help follows the error on stderr: the shell wrapper swallows
            // stdout whenever the exit code is non-zero.
            _ => Outcome::fail(KcontextError::ConfigNotFound(name), &help(configs)),
        },
    }
}

/// `export KUBECONFIG='...'` with no trailing newline, ready for `eval`.
pub fn export_statement(home: &Path, name: &str) -> String {
    let path = kube_dir(home).join(name);
    let quoted = path.to_string_lossy().replace('\'', r"'\''");
    format!("export KUBECONFIG='{quoted}'")
}

pub fn listing(configs: &ConfigSet) -> String {
    if configs.is_empty() {
        "No kubeconfig files found in ~/.kube/*.kubeconfig\n".to_owned()
    } else {
        format!("Available kubeconfigs: {configs}\n")
    }
}

pub fn help(configs: &ConfigSet) -> String {
    format!(
        "Usage: kcontext <kubeconfig-name>\n\n\
         Setup: Add to your shell config:\n\
         {SETUP}\n\
         Options:\n\
         \x20 --init <shell>  Generate shell integration (bash, zsh, fish)\n\
         \x20 -l, --list      List available kubeconfig files\n\
         \x20 -v, --version   Show version\n\
         \x20 --shell         Output shell command (for eval integration)\n\n\
         {}",
        listing(configs)
    )
}

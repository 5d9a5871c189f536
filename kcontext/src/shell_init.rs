//! Scripts printed by `kcontext --init <shell>`.
//!
//! Each one wraps the binary in a shell function of the same name: flag-only
//! calls go straight through, anything else is run with `--shell` and the
//! printed `export` is evaluated in the calling shell.

use std::str::FromStr;

use crate::error::KcontextError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    Bash,
    Zsh,
    Fish,
}

impl ShellKind {
    pub fn script(self) -> &'static str {
        match self {
            ShellKind::Bash => BASH,
            ShellKind::Zsh => ZSH,
            ShellKind::Fish => FISH,
        }
    }
}

impl FromStr for ShellKind {
    type Err = KcontextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bash" => Ok(ShellKind::Bash),
            "zsh" => Ok(ShellKind::Zsh),
            "fish" => Ok(ShellKind::Fish),
            other => Err(KcontextError::UnsupportedShell(other.to_owned())),
        }
    }
}

const BASH: &str = r#"# kcontext shell integration for bash
kcontext() {
    case "$1" in
        ""|-l|--list|-v|--version|-h|--help|--init|--shell)
            command kcontext "$@"
            return $?
            ;;
    esac

    local out rc
    out="$(command kcontext --shell "$@")"
    rc=$?
    if [ $rc -ne 0 ]; then
        return $rc
    fi
    eval "$out"
}

_kcontext_complete() {
    local word="${COMP_WORDS[COMP_CWORD]}"
    local names
    names="$(command kcontext --list 2>/dev/null | sed -n 's/^Available kubeconfigs: //p')"
    mapfile -t COMPREPLY < <(compgen -W "$names" -- "$word")
}

complete -F _kcontext_complete kcontext
"#;

const ZSH: &str = r#"# kcontext shell integration for zsh
kcontext() {
    case "$1" in
        ""|-l|--list|-v|--version|-h|--help|--init|--shell)
            command kcontext "$@"
            return $?
            ;;
    esac

    local out rc
    out="$(command kcontext --shell "$@")"
    rc=$?
    if [[ $rc -ne 0 ]]; then
        return $rc
    fi
    eval "$out"
}

if (( $+functions[compdef] )); then
    _kcontext_complete() {
        local -a names
        names=(${(s: :)"$(command kcontext --list 2>/dev/null | sed -n 's/^Available kubeconfigs: //p')"})
        _describe 'kubeconfig' names
    }
    compdef _kcontext_complete kcontext
fi
"#;

const FISH: &str = r#"# kcontext shell integration for fish
function kcontext
    switch "$argv[1]"
        case '' -l --list -v --version -h --help --init --shell
            command kcontext $argv
            return $status
    end

    set -l out (command kcontext --shell $argv)
    set -l rc $status
    if test $rc -ne 0
        return $rc
    end
    eval $out
end

complete -c kcontext -f
complete -c kcontext -s l -l list -d "List available kubeconfig files"
complete -c kcontext -s v -l version -d "Show version"
complete -c kcontext -l init -x -a "bash zsh fish" -d "Generate shell integration"
complete -c kcontext -a "(command kcontext --list 2>/dev/null | string replace -rf '^Available kubeconfigs: ' '' | string split ' ')"
"#;

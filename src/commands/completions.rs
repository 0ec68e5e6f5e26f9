use clap::{Args, CommandFactory};
use clap_complete::Shell;
use std::io::{self, Write};

use crate::cli::Cli;

#[derive(Debug, Clone, Args)]
pub struct CompletionsCommand {
    #[arg(value_enum, help = "Target shell for completion script")]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(self) {
        self.write_to(&mut io::stdout());
    }

    fn write_to(&self, out: &mut dyn Write) {
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();
        clap_complete::generate(self.shell, &mut cmd, bin_name, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(shell: Shell) -> String {
        let mut buffer = Vec::new();
        CompletionsCommand { shell }.write_to(&mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    fn validate_shell_completion(shell: Shell, expected_patterns: &[&str]) {
        let result = generate(shell);

        assert!(!result.is_empty(), "Completion script should not be empty");

        for pattern in expected_patterns {
            assert!(
                result.contains(pattern),
                "Expected pattern '{}' not found in {} completion script",
                pattern,
                shell
            );
        }
    }

    #[test]
    fn test_bash_completion() {
        validate_shell_completion(
            Shell::Bash,
            &["_aws__blocks()", "COMPREPLY", "complete -F _aws__blocks"],
        );
    }

    #[test]
    fn test_zsh_completion() {
        validate_shell_completion(Shell::Zsh, &["#compdef aws-blocks", "_aws-blocks", "_arguments"]);
    }

    #[test]
    fn test_fish_completion() {
        validate_shell_completion(Shell::Fish, &["complete -c aws-blocks"]);
    }

    #[test]
    fn test_powershell_completion() {
        validate_shell_completion(
            Shell::PowerShell,
            &["Register-ArgumentCompleter", "-CommandName 'aws-blocks'"],
        );
    }

    #[test]
    fn test_elvish_completion() {
        validate_shell_completion(Shell::Elvish, &["edit:completion:arg-completer[aws-blocks]"]);
    }

    #[test]
    fn test_completion_contains_subcommands() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
            let result = generate(shell);

            for subcommand in ["invoke", "list", "describe", "configure", "completions"] {
                assert!(
                    result.contains(subcommand),
                    "{} command should be in {} completions",
                    subcommand,
                    shell
                );
            }
        }
    }

    #[test]
    fn test_completion_contains_global_options() {
        let result = generate(Shell::Bash);

        assert!(result.contains("--profile"), "Profile option should be in completions");
        assert!(
            result.contains("--endpoint-url"),
            "Endpoint option should be in completions"
        );
        assert!(result.contains("--help"), "Help option should be in completions");
    }
}

use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    bundlepac completions bash > ~/.bash_completion.d/bundlepac\n\n\
                  Generate zsh completions:\n    bundlepac completions zsh > ~/.zfunc/_bundlepac\n\n\
                  Generate fish completions:\n    bundlepac completions fish > ~/.config/fish/completions/bundlepac.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}

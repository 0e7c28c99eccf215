use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::io::Write;

#[derive(Debug, Parser)]
pub struct CompletionsCommand {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn print(&self) {
        self.write_to(&mut std::io::stdout());
    }

    /// Writes the completion script of every `hot-props` subcommand and flag
    fn write_to(&self, buffer: &mut dyn Write) {
        let mut command = super::Args::command();
        let name = command.get_name().to_owned();

        clap_complete::generate(self.shell, &mut command, name, buffer);
    }
}

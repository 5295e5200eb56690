// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// `clap`, builds the use case, and prints outcomes. All answering
// logic is delegated to Layer 2 (application).
//
// Commands:
//   1. `ask`         — answer one question
//   2. `batch`       — answer a file of questions
//   3. `interactive` — question/answer loop on stdin
//   4. `config init` — write a default config file

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};

use crate::application::ask_use_case::AskUseCase;
use crate::application::config::QaConfig;
use crate::infra::config_store::ConfigStore;
use commands::{AskArgs, BatchArgs, Commands, ConfigCommand, ServiceArgs};

const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

#[derive(Parser, Debug)]
#[command(
    name = "factoid-qa",
    version,
    about = "Answer short factoid questions from web snippets or a local snippet file."
)]
pub struct Cli {
    #[command(flatten)]
    pub service: ServiceArgs,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the handler for the chosen subcommand.
    pub fn run(self) -> Result<()> {
        match &self.command {
            Commands::Ask(args)    => self.run_ask(args),
            Commands::Batch(args)  => self.run_batch(args),
            Commands::Interactive  => self.run_interactive(),
            Commands::Config(ConfigCommand::Init { path }) => {
                let store = ConfigStore::new(path);
                store.save(&QaConfig::default())?;
                println!("Wrote default config to {}", store.path().display());
                Ok(())
            }
        }
    }

    fn use_case(&self) -> Result<AskUseCase> {
        let cfg = self.service.resolve()?;
        AskUseCase::from_config(&cfg, self.service.snippets.as_deref())
    }

    fn run_ask(&self, args: &AskArgs) -> Result<()> {
        let use_case = self.use_case()?;
        let result = use_case.answer(&args.question, self.service.answer_type());
        println!("\n{}", result.outcome);
        Ok(())
    }

    fn run_batch(&self, args: &BatchArgs) -> Result<()> {
        let text = std::fs::read_to_string(&args.file)
            .with_context(|| format!("Cannot read questions from '{}'", args.file.display()))?;
        let questions: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        tracing::info!("Answering {} questions from '{}'", questions.len(), args.file.display());
        let use_case = self.use_case()?;

        for (i, question) in questions.iter().enumerate() {
            println!("\n[{}/{}] Question: {}", i + 1, questions.len(), question);
            let result = use_case.answer(question, self.service.answer_type());
            println!("{}", result.outcome);
        }
        Ok(())
    }

    fn run_interactive(&self) -> Result<()> {
        let use_case = self.use_case()?;
        println!("Factoid QA. Type 'quit' to exit.");

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("\nQuestion: ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else { break };
            let question = line?;
            let question = question.trim();

            if question.is_empty() {
                continue;
            }
            if QUIT_WORDS.contains(&question.to_lowercase().as_str()) {
                break;
            }

            let result = use_case.answer(question, self.service.answer_type());
            println!("{}", result.outcome);
        }

        println!("Goodbye!");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_ask_with_global_flags() {
        let cli = Cli::try_parse_from([
            "factoid-qa", "ask", "--question", "Who wrote Hamlet?",
            "--snippets", "data/snippets.txt", "--top-paragraphs", "2",
        ])
        .unwrap();
        assert!(matches!(&cli.command, Commands::Ask(a) if a.question == "Who wrote Hamlet?"));
        assert_eq!(cli.service.snippets.as_deref(), Some("data/snippets.txt"));
        assert_eq!(cli.service.top_paragraphs, Some(2));
    }

    #[test]
    fn test_config_init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg/qa.json");
        let cli = Cli::try_parse_from([
            "factoid-qa", "config", "init", "--path", path.to_str().unwrap(),
        ])
        .unwrap();
        cli.run().unwrap();
        assert_eq!(ConfigStore::new(&path).load().unwrap(), QaConfig::default());
    }
}

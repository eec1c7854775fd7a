use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;
use rand::seq::SliceRandom;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use twentyq_application::GameUseCase;
use twentyq_core::config::RootConfig;
use twentyq_core::game::{SubmitOutcome, Submission};
use twentyq_core::session::SessionView;

const FALLBACK_WORDS: &[&str] = &["apple", "bicycle", "cloud", "dolphin", "lantern", "volcano"];

const COMMANDS: &[&str] = &["ask", "guess", "answer", "show", "help", "quit"];

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplCommand {
    Ask(String),
    Guess(String),
    Answer { index: usize, answer: bool },
    Show,
    Help,
    Quit,
}

impl ReplCommand {
    fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb {
            "ask" if !rest.is_empty() => Ok(Self::Ask(rest.to_string())),
            "guess" if !rest.is_empty() => Ok(Self::Guess(rest.to_string())),
            "ask" | "guess" => Err(anyhow!("usage: {} <text>", verb)),
            "answer" => {
                let mut parts = rest.split_whitespace();
                let (Some(index), Some(answer), None) = (parts.next(), parts.next(), parts.next())
                else {
                    return Err(anyhow!("usage: answer <index> yes|no"));
                };
                let index = index
                    .parse()
                    .with_context(|| format!("'{}' is not a question index", index))?;
                Ok(Self::Answer {
                    index,
                    answer: parse_yes_no(answer)?,
                })
            }
            "show" => Ok(Self::Show),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(anyhow!("unknown command '{}', type 'help'", other)),
        }
    }
}

fn parse_yes_no(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        other => Err(anyhow!("expected yes or no, got '{}'", other)),
    }
}

/// Picks the secret: explicit word, else a random word from the configured
/// pool, else a random built-in word.
fn choose_word(explicit: Option<String>, config: &RootConfig) -> String {
    if let Some(word) = explicit {
        return word;
    }
    let mut rng = rand::thread_rng();
    config
        .game
        .words
        .choose(&mut rng)
        .cloned()
        .or_else(|| FALLBACK_WORDS.choose(&mut rng).map(|w| w.to_string()))
        .unwrap_or_else(|| FALLBACK_WORDS[0].to_string())
}

/// rustyline helper providing command completion, highlighting and hints.
struct ReplHelper;

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.contains(' ') {
            return Ok((0, vec![]));
        }
        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        match line.split_whitespace().next() {
            Some(verb) if COMMANDS.contains(&verb) => Owned(line.bright_cyan().to_string()),
            _ => Borrowed(line),
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for ReplHelper {}

fn print_help() {
    println!("{}", "Commands:".bright_black());
    println!("{}", "  ask <question>         ask a yes/no question".bright_black());
    println!("{}", "  guess <word>           guess the secret word".bright_black());
    println!("{}", "  answer <index> yes|no  record the answer to a question".bright_black());
    println!("{}", "  show                   show the session".bright_black());
    println!("{}", "  quit                   leave the game".bright_black());
}

fn print_view(view: &SessionView) {
    println!(
        "{}",
        format!(
            "Session {} ({} questions left{})",
            view.id,
            view.questions_remaining,
            if view.answered { ", solved" } else { "" }
        )
        .bright_magenta()
    );
    for question in &view.questions {
        let answer = match question.answer {
            Some(true) => "yes".green(),
            Some(false) => "no".red(),
            None => "?".bright_black(),
        };
        println!("  [{:>2}] {} {}", question.index, question.text, answer);
    }
}

async fn handle(game: &GameUseCase, session_id: &str, command: ReplCommand) -> Result<bool> {
    match command {
        ReplCommand::Ask(text) => {
            let outcome = game.submit(session_id, Submission::Question(text)).await?;
            report(outcome);
        }
        ReplCommand::Guess(word) => {
            let outcome = game.submit(session_id, Submission::Guess(word)).await?;
            report(outcome);
        }
        ReplCommand::Answer { index, answer } => {
            game.record_answer(session_id, index, answer).await?;
            println!("{}", format!("Answer recorded for question {}", index).green());
        }
        ReplCommand::Show => print_view(&game.get_session(session_id).await?),
        ReplCommand::Help => print_help(),
        ReplCommand::Quit => return Ok(false),
    }
    Ok(true)
}

fn report(outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::QuestionRecorded { index } => {
            println!("{}", format!("Question {} recorded", index).green())
        }
        SubmitOutcome::Correct => println!("{}", "Correct! You guessed the word.".bright_green().bold()),
        SubmitOutcome::Incorrect => println!("{}", "Not quite. Keep going.".yellow()),
        SubmitOutcome::SessionClosed => {
            println!("{}", "This game is already solved.".yellow())
        }
    }
}

/// Runs an interactive game until the user quits or input ends.
pub async fn run(config: &RootConfig, word: Option<String>) -> Result<()> {
    let game = GameUseCase::in_memory();
    let secret = choose_word(word, config);
    let session = game.create_session(&secret).await?;
    tracing::debug!(session_id = %session.id, "Starting REPL");

    let mut rl: Editor<ReplHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ReplHelper));

    println!("{}", "=== 20 Questions ===".bright_magenta().bold());
    println!("{}", format!("Session {}", session.id).bright_black());
    print_help();
    println!();

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                let command = match ReplCommand::parse(trimmed) {
                    Ok(command) => command,
                    Err(e) => {
                        eprintln!("{}", e.to_string().red());
                        continue;
                    }
                };

                match handle(&game, &session.id, command).await {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    println!("{}", "Goodbye!".bright_green());
    Ok(())
}

use std::io;

use crossterm::style::Stylize as _;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use quizboard_engine::{
    Board, CluePrompt, GameEvent, Responder, ScoreLedger, Verdict, WagerKind, WagerRequest,
};

use super::{board_lines, money};

/// Plays a game on the terminal: prompts through `dialoguer`, everything
/// else is printed to stdout.
#[derive(Default)]
pub struct TerminalResponder {
    theme: ColorfulTheme,
}

impl TerminalResponder {
    fn read_line(&self, prompt: &str) -> io::Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|dialoguer::Error::IO(err)| err)
    }

    fn print_board(board: &Board) {
        println!();
        for line in board_lines(board) {
            println!("{}", line.yellow());
        }
        println!();
    }
}

impl Responder for TerminalResponder {
    fn select_clue(&mut self, board: &Board, ledger: &ScoreLedger) -> io::Result<String> {
        Self::print_board(board);
        println!(
            "Score: {}    Clues left: {}",
            money(ledger.total()).bold(),
            board.remaining()
        );
        self.read_line("Pick a clue as `category value` (Enter for next, q to quit)")
    }

    fn wager(&mut self, request: &WagerRequest<'_>) -> io::Result<String> {
        println!(
            "{} Your score is {}.",
            request.category.bold(),
            money(request.total)
        );
        let prompt = match (request.kind, request.max) {
            (WagerKind::DailyDouble, Some(max)) => format!("Wager ($0 to {})", money(max)),
            (WagerKind::DailyDouble, None) => "Wager".to_owned(),
            (WagerKind::Final, _) => "Final wager ($0 or more)".to_owned(),
        };
        self.read_line(&prompt)
    }

    fn answer(&mut self, prompt: &CluePrompt<'_>) -> io::Result<String> {
        println!();
        println!(
            "{} for {}",
            prompt.category.bold(),
            money(prompt.points).yellow()
        );
        println!("{}", prompt.text.bold());
        self.read_line("Your response (Enter to pass)")
    }

    fn confirm_override(&mut self, correct_response: &str) -> io::Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(format!("Was `{correct_response}` what you meant? Count it as correct"))
            .default(false)
            .interact()
            .map_err(|dialoguer::Error::IO(err)| err)
    }

    fn notify(&mut self, event: &GameEvent<'_>) {
        match *event {
            GameEvent::RoundStarted { round, board } => {
                println!();
                println!("{}", format!("=== {round} ===").bold().cyan());
                Self::print_board(board);
            }
            GameEvent::ClueSelected {
                category, value, ..
            } => {
                log::debug!("selected {category} for {value}");
            }
            GameEvent::DailyDouble { category } => {
                println!();
                println!("{}", "*** DAILY DOUBLE ***".bold().magenta());
                println!("Category: {category}");
            }
            GameEvent::InvalidInput(err) => {
                println!("{}", format!("Invalid input: {err}").red());
            }
            GameEvent::Judged {
                verdict,
                correct_response,
                delta,
                total,
            } => {
                let headline = match verdict {
                    Verdict::Correct => "Correct!".green().bold(),
                    Verdict::Incorrect => "Incorrect.".red().bold(),
                    Verdict::Pass => "Pass.".yellow().bold(),
                };
                println!("{headline}");
                if !verdict.is_correct() {
                    println!("Correct response: {}", correct_response.bold());
                }
                println!("{delta:+}  Score: {}", money(total).bold());
            }
            GameEvent::Overridden { delta, total } => {
                println!(
                    "{} {delta:+}  Score: {}",
                    "Override accepted.".green(),
                    money(total).bold()
                );
            }
            GameEvent::FinalRound { category } => {
                println!();
                println!("{}", "=== Final Jeopardy! ===".bold().cyan());
                println!("Category: {}", category.bold());
            }
            GameEvent::GameComplete { ledger } => {
                println!();
                println!("{}", "Game over".bold().cyan());
                println!("Final score:        {}", money(ledger.total()).bold());
                println!("Correct responses:  {}", ledger.correct_count());
                println!("Daily Doubles:      {}", ledger.correct_daily_double_count());
                println!(
                    "Final Jeopardy:     {}",
                    if ledger.final_round_correct() {
                        "correct"
                    } else {
                        "missed"
                    }
                );
            }
        }
    }
}

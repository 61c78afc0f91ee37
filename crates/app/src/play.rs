//! Terminal front end: the same quiz, driven from stdin.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use services::{QuizPhase, QuizService};

enum Reply {
    Line(String),
    Quit,
}

fn read_reply(input: &mut impl BufRead) -> io::Result<Reply> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Reply::Quit);
    }
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Ok(Reply::Quit);
    }
    Ok(Reply::Line(line.to_string()))
}

/// Plays until the player quits or declines a restart.
///
/// # Errors
///
/// Returns any I/O error from reading `input` or writing `out`.
pub fn run(
    quiz: &mut QuizService,
    mut input: impl BufRead,
    mut out: impl Write,
    reveal_delay: Duration,
) -> io::Result<()> {
    loop {
        match quiz.phase().clone() {
            QuizPhase::AwaitingGuess => {
                writeln!(
                    out,
                    "\nQuestion {}/{}   Score: {}",
                    quiz.question_number(),
                    quiz.questions_per_session(),
                    quiz.score()
                )?;
                writeln!(out, "Tap the flag of {}", quiz.prompt())?;
                for (i, country) in quiz.choices().iter().enumerate() {
                    writeln!(out, "  {}) {country}", i + 1)?;
                }
                write!(out, "> ")?;
                out.flush()?;

                let Reply::Line(line) = read_reply(&mut input)? else {
                    return Ok(());
                };
                let accepted = line
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .is_some_and(|index| quiz.submit_guess(index).is_ok());
                if !accepted {
                    writeln!(out, "Please enter 1, 2 or 3 (q to quit).")?;
                    continue;
                }
                if !reveal_delay.is_zero() {
                    thread::sleep(reveal_delay);
                }
            }
            QuizPhase::Resolved(outcome) => {
                writeln!(out, "{}: {}", outcome.title(), outcome.message())?;
                write!(out, "Press Enter to continue ")?;
                out.flush()?;
                if let Reply::Quit = read_reply(&mut input)? {
                    return Ok(());
                }
                if let Err(err) = quiz.acknowledge_result() {
                    tracing::warn!(%err, "could not continue");
                }
            }
            QuizPhase::SessionEnded(summary) => {
                writeln!(out, "\n{}: {}", summary.title(), summary.message())?;
                write!(out, "Restart? [y/N] ")?;
                out.flush()?;
                match read_reply(&mut input)? {
                    Reply::Line(line) if line.eq_ignore_ascii_case("y") => {
                        if let Err(err) = quiz.acknowledge_end() {
                            tracing::warn!(%err, "could not restart");
                        }
                    }
                    _ => return Ok(()),
                }
            }
        }
    }
}

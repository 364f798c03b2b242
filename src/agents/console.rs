//! Interactive agent driven over a text stream.
//!
//! The player toggles dice by index, can ask for the standings (`S`) or the
//! rules (`H`), and finishes with `Q` once at least one die is selected.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use super::Agent;
use crate::core::{DiceHand, Die, Game, Player, Turn};
use crate::display;
use crate::error::PlayError;

const HELP: &str = "\
*** HELP ***

The point of the game is to finish with the LOWEST score possible.

Every round you roll a handful of dice and must keep AT LEAST ONE each time
you roll (you may keep more). The dice you don't keep are rolled again, until
every die has been kept. Then the next player does the same. Scores add up
from round to round, and the lowest total at the end wins, so hang on to
low-valued dice!

Available dice are shown with brackets around their number. Type a number to
select a die; type it again to change your mind.
";

/// Agent that prompts a person.
pub struct ConsoleAgent<R, W> {
    input: R,
    output: W,
}

impl ConsoleAgent<BufReader<Stdin>, Stdout> {
    /// Console agent on the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the agent, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn print_dice(&mut self, available: &[Die], selected: &[bool]) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Here are the dice available/selected:")?;
        for (i, (die, &chosen)) in available.iter().zip(selected).enumerate() {
            if chosen {
                writeln!(self.output, " {i} \t{}\tSELECTED", die.face_value)?;
            } else {
                writeln!(self.output, "[{i}]\t{}", die.face_value)?;
            }
        }
        writeln!(self.output, "------------------------")?;
        writeln!(self.output, "[S]\tFor up-to-date game stats")?;
        writeln!(self.output, "[H]\tFor help/instructions")?;
        writeln!(self.output, "[Q]\tWhen you're done making your selection")?;
        writeln!(self.output, "------------------------")?;
        writeln!(self.output, "Please make a selection:")?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a selection was made",
            ));
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Agent for ConsoleAgent<R, W> {
    fn choose_keep(
        &mut self,
        available: &[Die],
        player: &Player,
        _turns_so_far: &[Turn],
        game: &Game,
    ) -> Result<DiceHand, PlayError> {
        writeln!(self.output, "Time to make a move, {}!", player.id)?;
        if available.is_empty() {
            writeln!(self.output, "There are no dice to choose from.")?;
            return Ok(DiceHand::new());
        }

        let mut selected = vec![false; available.len()];
        loop {
            self.print_dice(available, &selected)?;
            let line = self.read_line()?;

            match line.to_ascii_lowercase().as_str() {
                "" => writeln!(self.output, "Please make a valid selection")?,
                "q" => {
                    if selected.contains(&true) {
                        writeln!(self.output, "Halting ...")?;
                        break;
                    }
                    writeln!(self.output, "You must elect to keep AT LEAST ONE die!")?;
                }
                "s" => {
                    let status = display::status(game, player.id)?;
                    writeln!(self.output, "\nLatest game stats ...\n{status}")?;
                }
                "h" => writeln!(self.output, "\n{HELP}")?,
                other => match other.parse::<usize>() {
                    Ok(index) if index < available.len() => selected[index] = !selected[index],
                    Ok(_) => writeln!(self.output, "Please enter a valid number/selection")?,
                    Err(_) => writeln!(
                        self.output,
                        "Please enter a valid letter/number from the available options!"
                    )?,
                },
            }
        }

        Ok(available
            .iter()
            .zip(&selected)
            .filter(|(_, &chosen)| chosen)
            .map(|(die, _)| *die)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn run(script: &str, available: &[Die]) -> (Result<DiceHand, PlayError>, String) {
        let game = GameConfig::default().build(1);
        let player = game.players[0].clone();
        let mut agent = ConsoleAgent::new(script.as_bytes(), Vec::new());

        let result = agent.choose_keep(available, &player, &[], &game);
        let output = String::from_utf8(agent.into_output()).unwrap();
        (result, output)
    }

    fn hand() -> Vec<Die> {
        vec![Die::plain(6), Die::new(4, 0), Die::plain(1)]
    }

    #[test]
    fn test_select_and_quit() {
        let (result, output) = run("1\n2\nq\n", &hand());
        assert_eq!(result.unwrap().as_slice(), &[Die::new(4, 0), Die::plain(1)]);
        assert!(output.contains("[0]\t6"));
        assert!(output.contains(" 1 \t4\tSELECTED"));
    }

    #[test]
    fn test_toggle_deselects() {
        let (result, _) = run("0\n0\n2\nQ\n", &hand());
        assert_eq!(result.unwrap().as_slice(), &[Die::plain(1)]);
    }

    #[test]
    fn test_quit_requires_a_selection() {
        let (result, output) = run("q\n0\nq\n", &hand());
        assert_eq!(result.unwrap().as_slice(), &[Die::plain(6)]);
        assert!(output.contains("You must elect to keep AT LEAST ONE die!"));
    }

    #[test]
    fn test_invalid_input_is_reported() {
        let (result, output) = run("9\nx\n\n1\nq\n", &hand());
        assert_eq!(result.unwrap().as_slice(), &[Die::new(4, 0)]);
        assert!(output.contains("Please enter a valid number/selection"));
        assert!(output.contains("Please enter a valid letter/number"));
        assert!(output.contains("Please make a valid selection"));
    }

    #[test]
    fn test_status_and_help() {
        let (_, output) = run("s\nh\n0\nq\n", &hand());
        assert!(output.contains("You are currently in round 1 of 4"));
        assert!(output.contains("Player 1*: 0"));
        assert!(output.contains("*** HELP ***"));
    }

    #[test]
    fn test_eof_is_an_error() {
        let (result, _) = run("0\n", &hand());
        match result {
            Err(PlayError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected eof error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_offer() {
        let (result, _) = run("", &[]);
        assert!(result.unwrap().is_empty());
    }
}

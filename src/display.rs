//! Text rendering for the console agent and the CLI.

use std::fmt::Write;

use crate::core::{Die, Game, PlayerId};
use crate::error::GameResult;

/// Current standings, one line per player. The current player is starred.
pub fn score_table(game: &Game, current: Option<PlayerId>) -> GameResult<String> {
    let scores = game.player_scores()?;
    let mut out = String::from("Here's the current game score/standings:\n");
    for (player, score) in &scores {
        let marker = if Some(*player) == current { "*" } else { "" };
        let _ = writeln!(out, "{player}{marker}: {score}");
    }
    Ok(out)
}

/// What each face is worth.
pub fn dice_values_description(game: &Game) -> String {
    if game.dice_values.is_empty() {
        return "Dice values unavailable\n".to_string();
    }
    let mut out = String::from("Dice values for this game:\n");
    for (face, points) in &game.dice_values {
        let _ = writeln!(out, "Every {face} is worth {points} points");
    }
    out
}

/// Round progress, standings and the face table.
pub fn status(game: &Game, current: PlayerId) -> GameResult<String> {
    let mut out = format!(
        "You are currently in round {} of {} for this game\n",
        game.current_round_number()?,
        game.total_rounds
    );
    out.push_str(&score_table(game, Some(current))?);
    out.push('\n');
    out.push_str(&dice_values_description(game));
    Ok(out)
}

/// Faces of a hand, space separated.
pub fn faces(dice: &[Die]) -> String {
    dice.iter()
        .map(|d| d.face_value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Final line(s) announcing the winner or the tie.
pub fn results_summary(game: &Game) -> String {
    match game.winning_player_ids.as_deref() {
        None | Some([]) => "The winners were not recorded.\n".to_string(),
        Some([winner]) => format!("{winner} wins the game!\n"),
        Some(winners) => {
            let mut out = String::from("The following players tie for the win:\n");
            for winner in winners {
                let _ = writeln!(out, "{winner}");
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::{Round, Turn};

    fn played_game() -> Game {
        let mut game = GameConfig::default()
            .bots_only()
            .with_total_rounds(1)
            .with_dice_per_round(1)
            .build(1);
        let mut round = Round::new(1, PlayerId::new(1));
        for (id, face) in [(1, 2), (2, 4), (3, 6), (4, 5)] {
            let die = [Die::new(face, game.value_of(face))];
            round.record_turn(Turn::new(PlayerId::new(id), 1, &die, &die).unwrap());
        }
        game.record_round(round).unwrap();
        game
    }

    #[test]
    fn test_score_table_marks_current_player() {
        let game = played_game();
        let table = score_table(&game, Some(PlayerId::new(2))).unwrap();

        assert!(table.contains("Player 1: 2\n"));
        assert!(table.contains("Player 2*: 0\n"));
        assert!(table.contains("Player 3: 6\n"));
    }

    #[test]
    fn test_dice_values_description() {
        let game = played_game();
        let text = dice_values_description(&game);
        assert!(text.contains("Every 4 is worth 0 points"));

        let mut empty = game;
        empty.dice_values.clear();
        assert_eq!(dice_values_description(&empty), "Dice values unavailable\n");
    }

    #[test]
    fn test_status_reports_round() {
        let game = GameConfig::default().build(1);
        let text = status(&game, PlayerId::new(1)).unwrap();
        assert!(text.starts_with("You are currently in round 1 of 4"));
    }

    #[test]
    fn test_results_summary() {
        let mut game = played_game();
        assert_eq!(results_summary(&game), "The winners were not recorded.\n");

        game.is_game_over().unwrap();
        assert_eq!(results_summary(&game), "Player 2 wins the game!\n");

        game.winning_player_ids = Some(vec![PlayerId::new(2), PlayerId::new(4)]);
        assert!(results_summary(&game).contains("tie"));
    }

    #[test]
    fn test_faces() {
        assert_eq!(faces(&[Die::plain(3), Die::new(4, 0)]), "3 4");
        assert_eq!(faces(&[]), "");
    }
}

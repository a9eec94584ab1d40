/// Hangman-specific renderer - injected dependency
use std::io::{self, Write};

use crate::config::GALLOWS_PARTS;
use crate::core::renderer::GameRenderer;
use crate::core::terminal::TerminalContext;
use crate::hangman::HangmanState;

const BLANK: char = '_';

/// Gallows figure for `wrong_count` wrong guesses. Parts appear in a fixed
/// order (head, neck, body, left arm, right arm, left leg, right leg) and
/// counts above seven draw the full figure.
pub fn draw_gallows(wrong_count: usize) -> String {
    let n = wrong_count.min(GALLOWS_PARTS);
    let part = |threshold: usize, c: char| if n >= threshold { c } else { ' ' };

    [
        "-------".to_string(),
        "|/    |".to_string(),
        format!("|     {}", part(1, 'O')),
        format!("|     {}", part(2, '|')),
        format!("|    {}{}{}", part(4, '/'), part(3, 'O'), part(5, '\\')),
        format!("|    {} {}", part(6, '/'), part(7, '\\')),
        "|".to_string(),
        "----------------------------------".to_string(),
    ]
    .join("\n")
}

/// Reveal state as space-separated characters, blanks shown as `_`.
pub fn format_status(revealed: &[Option<char>]) -> String {
    revealed
        .iter()
        .map(|slot| slot.unwrap_or(BLANK).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The whole word spaced out like the status line.
pub fn format_word(word: &str) -> String {
    word.chars().map(String::from).collect::<Vec<_>>().join(" ")
}

pub struct HangmanRenderer;

impl GameRenderer<HangmanState> for HangmanRenderer {
    fn render<W: Write>(
        &self,
        state: &HangmanState,
        ctx: &mut TerminalContext<W>,
    ) -> io::Result<()> {
        for line in draw_gallows(state.wrong_count()).lines() {
            ctx.print_line(line)?;
        }
        ctx.print_line(&format_status(state.revealed()))?;
        ctx.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIGURE_ROWS: std::ops::Range<usize> = 2..6;

    fn body(wrong_count: usize) -> Vec<String> {
        draw_gallows(wrong_count)
            .lines()
            .skip(FIGURE_ROWS.start)
            .take(FIGURE_ROWS.len())
            .map(str::to_owned)
            .collect()
    }

    fn part_count(wrong_count: usize) -> usize {
        body(wrong_count)
            .iter()
            .map(|line| line[1..].chars().filter(|c| !c.is_whitespace()).count())
            .sum()
    }

    #[test]
    fn test_empty_gallows() {
        assert_eq!(part_count(0), 0);
        assert_eq!(draw_gallows(0).lines().count(), 8);
    }

    #[test]
    fn test_one_part_per_wrong_guess() {
        for n in 0..=GALLOWS_PARTS {
            assert_eq!(part_count(n), n, "wrong count {n}");
        }
    }

    #[test]
    fn test_parts_are_never_removed() {
        for n in 1..=GALLOWS_PARTS {
            let before = body(n - 1);
            let after = body(n);
            for (old, new) in before.iter().zip(&after) {
                for (a, b) in old.chars().zip(new.chars()) {
                    if a != ' ' {
                        assert_eq!(a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn test_full_figure() {
        let expected = "\
-------
|/    |
|     O
|     |
|    /O\\
|    / \\
|
----------------------------------";
        assert_eq!(draw_gallows(7), expected);
        assert_eq!(draw_gallows(12), expected);
    }

    #[test]
    fn test_format_status() {
        assert_eq!(format_status(&[None, None, None]), "_ _ _");
        assert_eq!(format_status(&[Some('c'), Some('a'), None]), "c a _");
        assert_eq!(format_status(&[]), "");
    }

    #[test]
    fn test_render_writes_figure_and_status() {
        let mut state = HangmanState::new("cat", 7);
        state.guess('a');
        state.guess('z');

        let mut ctx = TerminalContext::new(Vec::new());
        HangmanRenderer.render(&state, &mut ctx).unwrap();

        let out = String::from_utf8(ctx.into_inner()).unwrap();
        assert!(out.starts_with("-------\n"));
        assert!(out.contains("|     O\n"));
        assert!(out.ends_with("_ a _\n"));
    }
}

/// Hangman renderer: draws a snapshot, holds no game logic
use std::collections::BTreeSet;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::engine::{HintTier, Outcome};
use super::policy::ALPHABET;
use super::snapshot::Snapshot;

const ROW_LEN: usize = 5;

/// Everything the renderer needs for one frame
pub struct Screen<'a> {
    pub view: &'a Snapshot,
    pub disabled: &'a BTreeSet<char>,
    pub message: &'a str,
    pub hint_enabled: bool,
}

pub struct HangmanRenderer;

impl HangmanRenderer {
    pub fn render(frame: &mut Frame, screen: &Screen) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(8),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(1),
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(" HANGMAN ")
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[0],
        );
        frame.render_widget(Self::board(screen.view), chunks[1]);
        frame.render_widget(Self::letters(screen), chunks[2]);
        frame.render_widget(
            Paragraph::new(hint_text(screen.view))
                .block(Block::default().title(" HINT ").borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[3],
        );
        frame.render_widget(
            Paragraph::new(screen.message).block(Block::default().borders(Borders::ALL)),
            chunks[4],
        );
        frame.render_widget(Self::help(screen), chunks[5]);
    }

    fn board(view: &Snapshot) -> Paragraph<'static> {
        let mut lines = vec![
            Line::from(Span::styled(
                view.masked_word.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Remaining attempts: {}", view.remaining_attempts)),
        ];
        match (view.outcome, view.revealed_word.as_deref()) {
            (Outcome::Won, _) => lines.push(Line::from(Span::styled(
                "Congratulations! You won!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ))),
            (Outcome::Lost, word) => lines.push(Line::from(Span::styled(
                format!("Game Over. The word was {}", word.unwrap_or("?")),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))),
            (Outcome::Playing, _) => {}
        }
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
    }

    fn letters(screen: &Screen) -> Paragraph<'static> {
        let letters: Vec<char> = ALPHABET.collect();
        let lines: Vec<Line> = letters
            .chunks(ROW_LEN)
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|&c| Span::styled(format!(" {c} "), letter_style(screen, c)))
                    .collect();
                Line::from(spans)
            })
            .collect();
        Paragraph::new(lines)
            .block(Block::default().title(" LETTERS ").borders(Borders::ALL))
            .alignment(Alignment::Center)
    }

    fn help(screen: &Screen) -> Paragraph<'static> {
        let hint = if screen.hint_enabled { "[?] Hint  " } else { "" };
        let next = if screen.view.is_over() { "[Enter] New game  " } else { "[A-Z] Guess  " };
        Paragraph::new(format!("{next}{hint}[Ctrl-N] New  [Ctrl-S] Save  [Esc] Quit"))
            .alignment(Alignment::Center)
    }
}

pub fn hint_text(view: &Snapshot) -> String {
    match view.hint_tier {
        HintTier::None => String::new(),
        HintTier::TextRevealed => view.hint.clone().unwrap_or_default(),
        HintTier::HalfLettersDisabled => "Half of the remaining letters have been disabled".to_string(),
        HintTier::VowelsRevealed => "All vowels have been revealed".to_string(),
    }
}

fn letter_style(screen: &Screen, letter: char) -> Style {
    let view = screen.view;
    if view.guessed_letters.contains(&letter) {
        // Guessed letters that are in the word show up in the mask.
        if view.masked_word.contains(letter) {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red).add_modifier(Modifier::DIM)
        }
    } else if screen.disabled.contains(&letter) || view.is_over() {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }
}

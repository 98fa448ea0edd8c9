//! Betting, table and celebration screens.

use core::iter;

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::card::Card;
use crate::result::{Outcome, Settlement};
use crate::round::RoundPhase;
use crate::session::{BetStatus, PreRoundStep, SessionState, TableView};

use super::confetti::Confetti;

mod colors {
    use super::Color;

    pub const DEALER: Color = Color::LightRed;
    pub const PLAYER: Color = Color::LightBlue;
    pub const PROMPT: Color = Color::Magenta;
    pub const BALANCE: Color = Color::Indexed(36);
    pub const ERROR: Color = Color::LightRed;
    pub const RED_SUIT: Color = Color::Red;
    pub const HIDDEN: Color = Color::Rgb(0x3c, 0x3c, 0x3c);
    pub const HELP_KEY: Color = Color::Gray;
    pub const HELP: Color = Color::DarkGray;
    pub const WIN: Color = Color::Yellow;
}

const CARD_WIDTH: u16 = 9;
const CARD_HEIGHT: u16 = 7;
const BET_PANEL_WIDTH: u16 = 44;

fn bold(color: Color) -> Style {
    Style::new().fg(color).add_modifier(Modifier::BOLD)
}

/// Draws the screen for `view`.
pub fn draw(frame: &mut Frame, view: &TableView, confetti: &Confetti) {
    match view.state {
        SessionState::Betting => draw_betting(frame, view),
        SessionState::PreRound(_) => draw_message(frame, status_line(view)),
        SessionState::ActiveRound | SessionState::Resolution(_) => draw_table(frame, view),
        SessionState::Celebration => {
            frame.render_widget(confetti, frame.area());
            draw_message(frame, status_line(view));
        }
        SessionState::Finished => {}
    }
}

/// Text announcing how a round ended.
#[must_use]
pub fn outcome_message(settlement: &Settlement) -> String {
    match settlement.outcome {
        Outcome::PlayerWin => format!("You WON ${}!!", settlement.bet),
        Outcome::DealerBust => format!("Dealer busted! You WON ${}!!", settlement.bet),
        Outcome::PlayerBust => String::from("Busted! You lost..."),
        Outcome::DealerWin => String::from("You lost..."),
        Outcome::Push => String::from("It was a tie."),
    }
}

fn status_line(view: &TableView) -> Line<'static> {
    let text = match view.state {
        SessionState::PreRound(PreRoundStep::Shuffling) => String::from("Shuffling cards..."),
        SessionState::PreRound(PreRoundStep::Starting) => String::from("Starting round..."),
        SessionState::PreRound(PreRoundStep::GoodLuck) => String::from("GOOD LUCK!!"),
        SessionState::ActiveRound => match view.phase {
            RoundPhase::PlayerTurn => String::from("Hit or stand?"),
            RoundPhase::DealerTurn => String::from("Dealer's hand..."),
            _ => String::new(),
        },
        SessionState::Resolution(_) | SessionState::Celebration => view
            .settlement
            .map(|settlement| outcome_message(&settlement))
            .unwrap_or_default(),
        SessionState::Betting | SessionState::Finished => String::new(),
    };

    let color = match view.state {
        SessionState::Resolution(outcome) if !outcome.is_player_win() => colors::ERROR,
        SessionState::Resolution(_) | SessionState::Celebration => colors::WIN,
        _ => colors::PROMPT,
    };

    Line::styled(text, bold(color)).centered()
}

fn help_line(view: &TableView) -> Line<'static> {
    let mut spans = Vec::new();
    for binding in view.keymap().enabled() {
        if !spans.is_empty() {
            spans.push(Span::styled(" • ", Style::new().fg(colors::HIDDEN)));
        }
        spans.push(Span::styled(binding.help_key, Style::new().fg(colors::HELP_KEY)));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(binding.help, Style::new().fg(colors::HELP)));
    }
    Line::from(spans)
}

fn center(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

fn draw_message(frame: &mut Frame, line: Line<'static>) {
    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(frame.area());
    frame.render_widget(line, row);
}

fn bet_field(view: &TableView) -> Line<'static> {
    let mut spans = vec![Span::styled("$", bold(colors::PROMPT))];
    if view.bet_text.is_empty() {
        spans.push(Span::styled(" Place your bet!", Style::new().fg(colors::HELP)));
    } else {
        spans.push(Span::raw(view.bet_text.clone()));
    }
    if view.bet_status != BetStatus::NoFunds {
        spans.push(Span::styled("▏", Style::new().fg(colors::PROMPT)));
    }
    Line::from(spans)
}

fn draw_betting(frame: &mut Frame, view: &TableView) {
    let exceeds = view.bet_status == BetStatus::ExceedsBalance;

    let notice = match view.bet_status {
        BetStatus::ExceedsBalance => {
            Line::styled("Bigger than balance!", Style::new().fg(colors::ERROR))
        }
        BetStatus::NoFunds => Line::styled("You're out of money.", Style::new().fg(colors::ERROR)),
        BetStatus::Empty | BetStatus::Ready => Line::default(),
    };
    let balance_color = if exceeds {
        colors::HIDDEN
    } else {
        colors::BALANCE
    };

    let lines = vec![
        Line::styled("Your bet?", bold(colors::PROMPT)),
        Line::default(),
        bet_field(view),
        notice,
        Line::styled(
            format!("Balance: ${}", view.available_balance()),
            bold(balance_color),
        ),
        Line::default(),
        help_line(view),
    ];

    let area = center(frame.area(), BET_PANEL_WIDTH, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_table(frame: &mut Frame, view: &TableView) {
    let [dealer_area, status_area, player_area] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(frame.area());

    let [dealer_title, dealer_cards] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(CARD_HEIGHT)])
            .areas(dealer_area);
    frame.render_widget(
        Line::styled(format!("Dealer score: {}", view.dealer_score), bold(colors::DEALER))
            .centered(),
        dealer_title,
    );
    let dealer: Vec<Option<Card>> = view
        .dealer_cards
        .iter()
        .copied()
        .map(Some)
        .chain(iter::repeat_n(None, view.dealer_hidden))
        .collect();
    draw_card_row(frame, dealer_cards, &dealer, colors::DEALER);

    frame.render_widget(status_line(view), status_area);

    let [_, player_cards, player_title, help] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(CARD_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(player_area);
    let player: Vec<Option<Card>> = view.player_cards.iter().copied().map(Some).collect();
    draw_card_row(frame, player_cards, &player, colors::PLAYER);
    frame.render_widget(
        Line::styled(format!("Your score: {}", view.player_score), bold(colors::PLAYER))
            .centered(),
        player_title,
    );
    frame.render_widget(help_line(view).centered(), help);
}

fn draw_card_row(frame: &mut Frame, area: Rect, cards: &[Option<Card>], border: Color) {
    if cards.is_empty() {
        return;
    }

    let columns = Layout::horizontal(cards.iter().map(|_| Constraint::Length(CARD_WIDTH)))
        .flex(Flex::Center)
        .spacing(1)
        .split(area);
    for (card, column) in cards.iter().zip(columns.iter()) {
        draw_card(frame, *column, *card, border);
    }
}

/// Draws one card; `None` is a face-down card.
fn draw_card(frame: &mut Frame, area: Rect, card: Option<Card>, border: Color) {
    let (border, face, suit, ink) = match card {
        Some(card) => {
            let (face, suit) = card.label();
            let ink = if card.suit.is_red() {
                colors::RED_SUIT
            } else {
                Color::Reset
            };
            (border, face, suit, ink)
        }
        None => (colors::HIDDEN, " ", "?", colors::HIDDEN),
    };

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [top, middle, bottom] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);
    let [middle] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(middle);

    let style = bold(ink);
    frame.render_widget(Line::styled(face, style), top);
    frame.render_widget(Line::styled(suit, style).centered(), middle);
    frame.render_widget(Line::styled(face, style).right_aligned(), bottom);
}

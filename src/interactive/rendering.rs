//! TUI rendering with ratatui
//!
//! One screen: the root word as the title, an input box headed by the
//! score, the found words underneath and a modal alert for rejections.

use super::app::App;
use crate::dictionary::SpellChecker;
use crate::output::formatters::{length_badge, score_label};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

const INPUT_PLACEHOLDER: &str = "Enter your word";

/// Main UI rendering function
pub fn ui<D: SpellChecker>(f: &mut Frame, app: &App<'_, D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Input area
            Constraint::Min(3),    // Found words
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);
    render_words(f, app, chunks[2]);
    render_help(f, chunks[3]);

    if let Some(rejection) = app.session.last_error() {
        render_alert(f, rejection.title(), &rejection.message());
    }
}

fn render_header<D: SpellChecker>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let header = Paragraph::new(app.session.root_word().to_uppercase())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word Scramble ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_input<D: SpellChecker>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let input = app.session.current_input();
    let content = if input.is_empty() {
        Line::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            input,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(format!(" {} ", score_label(app.session.score())))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(paragraph, area);
}

fn render_words<D: SpellChecker>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .used_words()
        .iter()
        .map(|word| {
            let highlighted = app.last_accepted.as_deref() == Some(word.as_str());
            let style = if highlighted {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(vec![
                Span::styled(length_badge(word), Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::styled(word.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Words ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Enter: Submit | Ctrl-R: Restart game | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_alert(f: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(f.area(), 50, 7);

    let alert = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "OK (Enter)",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(format!(" {title} "))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .style(Style::default().fg(Color::Red)),
    );

    f.render_widget(Clear, area);
    f.render_widget(alert, area);
}

/// Rectangle of at most `width` x `height` centered in `area`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(vertical);
    centered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{ENGLISH, WordListDictionary};
    use crate::game::GameSession;
    use crate::wordlists::RootWordCatalog;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen<D: SpellChecker>(app: &App<'_, D>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app(catalog: &RootWordCatalog) -> App<'_, WordListDictionary> {
        let dictionary = WordListDictionary::new(ENGLISH, ["bored", "road"]);
        App::new(GameSession::with_root_word(catalog, dictionary, "keyboard"))
    }

    #[test]
    fn shows_root_word_score_and_placeholder() {
        let catalog = RootWordCatalog::from_slice(&["keyboard"]);
        let app = app(&catalog);

        let text = screen(&app);
        assert!(text.contains("KEYBOARD"));
        assert!(text.contains("Score: 0"));
        assert!(text.contains(INPUT_PLACEHOLDER));
    }

    #[test]
    fn lists_found_words_newest_first() {
        let catalog = RootWordCatalog::from_slice(&["keyboard"]);
        let mut app = app(&catalog);
        app.session.submit_word("road").unwrap();
        app.session.submit_word("bored").unwrap();

        let text = screen(&app);
        assert!(text.contains("Score: 2"));
        let bored = text.find("bored").unwrap();
        let road = text.find("road").unwrap();
        assert!(bored < road);
    }

    #[test]
    fn shows_alert_for_rejection() {
        let catalog = RootWordCatalog::from_slice(&["keyboard"]);
        let mut app = app(&catalog);
        app.session.submit_word("keyboard").unwrap_err();

        let text = screen(&app);
        assert!(text.contains("This is the original word"));
        assert!(text.contains("OK (Enter)"));
    }

    #[test]
    fn centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 60, 20);
        let rect = centered_rect(area, 50, 7);
        assert_eq!(rect.width, 50);
        assert_eq!(rect.height, 7);
        assert_eq!(rect.x, 5);
        assert!(rect.y > 0);
    }
}

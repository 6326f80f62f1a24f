// ============================================================================
// Dividends - Vue historique des dividendes
// ============================================================================
// Liste les derniers versements du fonds sélectionné avec total, moyenne
// et rendement trailing 12 mois
//
// CONCEPT : Données issues du même fetch que le graphique
// - L'historique couvre la période chargée (events=div), pas plus
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::chart::{quit_confirmation_line, render_no_data};

/// Nombre de versements affichés
const SHOWN_PAYMENTS: usize = 10;

/// Dessine la vue dividendes complète
pub fn render_dividend_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;

    let item = match app.selected_item() {
        Some(item) => item,
        None => {
            render_no_data(frame, theme, area, "Aucun fonds sélectionné");
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Tableau
        ])
        .split(area)
        .to_vec();

    // Header
    let header_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(theme.bg()))
        .title(format!(" 💰 Dividendes {} ", item.symbol()));

    let header_text = if app.is_awaiting_quit_confirmation() {
        vec![quit_confirmation_line()]
    } else {
        vec![Line::from(vec![
            Span::styled(
                format!("{} versements sur la période chargée  ", item.dividends.len()),
                Style::default().fg(theme.text()),
            ),
            Span::styled("[ESC]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" Retour", Style::default().fg(theme.text())),
        ])]
    };

    let header = Paragraph::new(header_text)
        .block(header_block)
        .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    // Tableau
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.grid()))
        .style(Style::default().bg(theme.bg()))
        .title(format!(" Derniers {} versements ", SHOWN_PAYMENTS));

    if item.dividends.is_empty() {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Pas de dividendes sur la période chargée",
                Style::default().fg(theme.grid()),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Astuce : élargissez la période avec ] (1y ou plus)",
                Style::default().fg(theme.grid()),
            )),
        ];
        let paragraph = Paragraph::new(text).block(block).alignment(Alignment::Center);
        frame.render_widget(paragraph, chunks[1]);
        return;
    }

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {:<14}", "Date"),
                Style::default().fg(theme.text()).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>12}", "Montant"),
                Style::default().fg(theme.text()).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "  ────────────────────────────",
            Style::default().fg(theme.grid()),
        )),
    ];

    // CONCEPT RUST : Slices
    // - last_n retourne une slice des N derniers versements, sans copie
    for dividend in item.dividends.last_n(SHOWN_PAYMENTS) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<14}", dividend.date.format("%Y-%m-%d")),
                Style::default().fg(theme.text()),
            ),
            Span::styled(
                format!("{:>11.4}$", dividend.amount),
                Style::default().fg(theme.up()),
            ),
        ]));
    }

    lines.push(Line::from(Span::styled(
        "  ────────────────────────────",
        Style::default().fg(theme.grid()),
    )));

    lines.push(Line::from(vec![
        Span::styled("  Total (période) : ", Style::default().fg(theme.text())),
        Span::styled(
            format!("{:.4}$", item.dividends.total()),
            Style::default().fg(theme.up()).add_modifier(Modifier::BOLD),
        ),
    ]));

    if let Some(avg) = item.dividends.average() {
        lines.push(Line::from(vec![
            Span::styled("  Moyenne : ", Style::default().fg(theme.text())),
            Span::styled(format!("{:.4}$", avg), Style::default().fg(theme.text())),
        ]));
    }

    if let Some(yield_pct) = item.trailing_yield_percent() {
        lines.push(Line::from(vec![
            Span::styled("  Rendement 12 mois : ", Style::default().fg(theme.text())),
            Span::styled(
                format!("{:.2}%", yield_pct),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, chunks[1]);
}

// ============================================================================
// Dashboard - Rendu de l'interface principale et routage des écrans
// ============================================================================
// Dessine l'interface TUI en utilisant les widgets de ratatui
//
// CONCEPTS RATATUI :
// 1. Frame : surface de dessin
// 2. Widgets : composants UI (Block, List, Paragraph)
// 3. Layout : découpage de l'espace en zones
// 4. Style : couleurs et attributs de texte
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, Screen};
use crate::ui::{chart, compare, dividends};

// ============================================================================
// Fonction principale de rendu
// ============================================================================

/// Dessine l'interface complète
///
/// CONCEPT RUST : Routing avec match sur enum
/// - Pattern matching sur app.current_screen
/// - Le compilateur garantit l'exhaustivité (tous les cas gérés)
pub fn render(frame: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Dashboard => {
            render_dashboard(frame, app);
        }
        Screen::ChartView => {
            chart::render_chart_view(frame, app, frame.size());
        }
        Screen::CompareView => {
            compare::render_compare_view(frame, app, frame.size());
        }
        Screen::DividendView => {
            dividends::render_dividend_view(frame, app, frame.size());
        }
        Screen::InputMode => {
            // L'écran d'origine reste visible, la ligne de saisie le recouvre
            render_input_mode(frame, app);
        }
    }
}

/// Dessine le dashboard (liste des fonds)
fn render_dashboard(frame: &mut Frame, app: &App) {
    let size = frame.size();
    let chunks = create_layout(size);

    render_header(frame, app, chunks[0]);
    render_fund_list(frame, app, chunks[1]);
    render_footer(frame, app, chunks[2]);
}

// ============================================================================
// Layout : Découpage de l'écran
// ============================================================================

/// Crée le layout principal (header, content, footer)
///
/// CONCEPT RUST : Rc<[T]> vs Vec<T>
/// - Layout::split() retourne Rc<[Rect]> (reference counted slice)
/// - On le convertit en Vec avec .to_vec() pour simplifier
fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header : 3 lignes
            Constraint::Min(0),    // Content : tout le reste
            Constraint::Length(3), // Footer : 3 lignes
        ])
        .split(area)
        .to_vec()
}

// ============================================================================
// Header : Titre de l'application
// ============================================================================

/// Dessine le header avec le titre
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(theme.bg()))
        .title(" LazyCharts ")
        .title_alignment(Alignment::Center);

    let text = vec![Line::from(Span::styled(
        format!("📈 VOO & JEPI Edition — thème {}", theme.label()),
        Style::default().fg(theme.up()).add_modifier(Modifier::BOLD),
    ))];

    let paragraph = Paragraph::new(text).block(block).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

// ============================================================================
// Main Content : Liste des fonds
// ============================================================================

/// Dessine la liste des deux fonds avec prix, variation et rendement
///
/// CONCEPT RATATUI : List widget
/// - ListItem : chaque ligne de la liste
/// - Highlight : style inversé pour l'item sélectionné
fn render_fund_list(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(theme.bg()))
        .title(" 📊 Fonds suivis ");

    // CONCEPT RUST : Iterator chaining
    // - .iter().enumerate().map().collect() : transforme chaque fonds en ligne
    let items: Vec<ListItem> = app
        .funds
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let style = if item.has_data() {
                if item.is_positive() {
                    Style::default().fg(theme.up())
                } else {
                    Style::default().fg(theme.down())
                }
            } else {
                Style::default().fg(theme.grid())
            };

            let line = if item.has_data() {
                let price_str = item
                    .current_price()
                    .map(|p| format!("${:.2}", p))
                    .unwrap_or_else(|| "N/A".to_string());

                let change_str = item
                    .change_percent()
                    .map(|c| {
                        let arrow = if c >= 0.0 { "▲" } else { "▼" };
                        format!("{} {:+.2}%", arrow, c)
                    })
                    .unwrap_or_default();

                let yield_str = item
                    .trailing_yield_percent()
                    .map(|y| format!("div {:.2}%", y))
                    .unwrap_or_default();

                format!(
                    " {:<6} {:<36} {:>10}  {:<10} {}",
                    item.symbol(),
                    item.fund.name(),
                    price_str,
                    change_str,
                    yield_str
                )
            } else {
                format!(
                    " {:<6} {:<36} {:>10}",
                    item.symbol(),
                    item.fund.name(),
                    "Loading..."
                )
            };

            let mut list_item = ListItem::new(line).style(style);

            // Item sélectionné : couleurs inversées
            if index == app.selected_index {
                list_item = list_item.style(
                    style
                        .add_modifier(Modifier::BOLD)
                        .add_modifier(Modifier::REVERSED),
                );
            }

            list_item
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

// ============================================================================
// Footer : Instructions
// ============================================================================

/// Dessine le footer avec les raccourcis clavier
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(theme.bg()));

    let shortcuts = if app.is_awaiting_quit_confirmation() {
        chart::quit_confirmation_line()
    } else if app.is_loading_data() {
        let message = app
            .loading_message
            .clone()
            .unwrap_or_else(|| "Chargement en cours...".to_string());
        Line::from(vec![
            Span::styled("⏳ ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(message, Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(vec![
            Span::styled("[q]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" Quitter  ", Style::default().fg(theme.text())),
            Span::styled("[↑↓ / j k]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" Naviguer  ", Style::default().fg(theme.text())),
            Span::styled("[Enter]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" Graphique  ", Style::default().fg(theme.text())),
            Span::styled("[c]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::styled(" Comparer  ", Style::default().fg(theme.text())),
            Span::styled("[v]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::styled(" Dividendes  ", Style::default().fg(theme.text())),
            Span::styled("[t]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" Thème", Style::default().fg(theme.text())),
        ])
    };

    let paragraph = Paragraph::new(vec![shortcuts])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Input Mode : Saisie (seuils d'alerte, nom d'export)
// ============================================================================

/// Dessine l'écran d'origine avec la ligne de saisie par-dessus
///
/// CONCEPT : Modal input (Vim-like)
/// - L'écran d'où vient la saisie reste visible en arrière-plan
/// - ESC annule, Enter valide
fn render_input_mode(frame: &mut Frame, app: &App) {
    let size = frame.size();

    // Arrière-plan : l'écran d'origine de la saisie
    match app.input_return_screen() {
        Screen::ChartView => chart::render_chart_view(frame, app, size),
        Screen::CompareView => compare::render_compare_view(frame, app, size),
        Screen::DividendView => dividends::render_dividend_view(frame, app, size),
        _ => {
            let chunks = create_layout(size);
            render_header(frame, app, chunks[0]);
            render_fund_list(frame, app, chunks[1]);
        }
    }

    // Ligne de saisie : les 3 dernières lignes de l'écran
    let input_area = Rect::new(
        size.x,
        size.y + size.height.saturating_sub(4),
        size.width,
        4.min(size.height),
    );
    render_input_footer(frame, app, input_area);
}

/// Dessine la ligne de saisie avec le prompt et le buffer
fn render_input_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green)) // Vert = mode input
        .style(Style::default().bg(theme.bg()));

    let input_line = Line::from(vec![
        Span::styled(
            app.input_prompt.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.input_buffer.clone(), Style::default().fg(theme.text())),
        Span::styled(
            "█", // Curseur
            Style::default().fg(theme.text()).add_modifier(Modifier::SLOW_BLINK),
        ),
    ]);

    let help_line = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::styled(" Valider  ", Style::default().fg(theme.text())),
        Span::styled("[ESC]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::styled(" Annuler", Style::default().fg(theme.text())),
    ]);

    let paragraph = Paragraph::new(vec![input_line, help_line])
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}

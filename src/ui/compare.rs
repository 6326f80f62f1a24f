// ============================================================================
// Compare - Vue comparaison VOO vs JEPI
// ============================================================================
// Les deux séries sont normalisées en % de rendement depuis la première
// clôture, pour être comparables malgré des prix très différents
//
// CONCEPT : Normalisation
// - VOO cote ~400$ et JEPI ~55$ : superposer les prix bruts n'aurait aucun
//   sens, on trace (close / close[0] - 1) × 100 pour chaque fonds
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::OHLCData;
use crate::ui::chart::{quit_confirmation_line, render_no_data};

// ============================================================================
// Fonction principale de rendu
// ============================================================================

/// Dessine la vue comparaison complète
pub fn render_compare_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;

    // Les deux fonds doivent avoir des données
    let (voo, jepi) = (&app.funds[0], &app.funds[1]);

    let (voo_data, jepi_data) = match (&voo.data, &jepi.data) {
        (Some(v), Some(j)) if !v.is_empty() && !j.is_empty() => (v, j),
        _ => {
            render_no_data(frame, theme, area, "Comparaison impossible : données manquantes");
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Graphique normalisé
            Constraint::Length(6), // Tableau comparatif
        ])
        .split(area)
        .to_vec();

    render_compare_header(frame, app, chunks[0]);
    render_normalized_chart(frame, app, voo_data, jepi_data, chunks[1]);
    render_compare_summary(frame, app, voo_data, jepi_data, chunks[2]);
}

// ============================================================================
// Header
// ============================================================================

fn render_compare_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(theme.bg()))
        .title(format!(
            " ⚖  VOO vs JEPI — {} / {} ",
            app.current_period.label(),
            app.effective_interval().label()
        ));

    let text = if app.is_awaiting_quit_confirmation() {
        vec![quit_confirmation_line()]
    } else if app.is_loading_data() {
        vec![Line::from(Span::styled(
            "⏳ Chargement en cours...",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))]
    } else {
        vec![Line::from(vec![
            Span::styled("Performance normalisée (%)  ", Style::default().fg(theme.text())),
            Span::styled("[ESC]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" Retour  ", Style::default().fg(theme.text())),
            Span::styled("[[/]]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" Période", Style::default().fg(theme.text())),
        ])]
    };

    let paragraph = Paragraph::new(text).block(block).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

// ============================================================================
// Graphique normalisé
// ============================================================================

/// Convertit une série en % de rendement depuis la première clôture
///
/// CONCEPT RUST : Iterator avec capture
/// - La closure capture `first` pour normaliser chaque point
pub fn normalized_points(data: &OHLCData) -> Vec<(f64, f64)> {
    let Some(first) = data.candles.first().map(|c| c.close) else {
        return Vec::new();
    };
    if first == 0.0 {
        return Vec::new();
    }

    data.candles
        .iter()
        .enumerate()
        .map(|(i, c)| (i as f64, (c.close / first - 1.0) * 100.0))
        .collect()
}

fn render_normalized_chart(
    frame: &mut Frame,
    app: &App,
    voo_data: &OHLCData,
    jepi_data: &OHLCData,
    area: Rect,
) {
    let theme = app.theme;

    let voo_points = normalized_points(voo_data);
    let jepi_points = normalized_points(jepi_data);

    // Bornes Y sur les deux séries
    let (mut y_min, mut y_max) = (0.0_f64, 0.0_f64);
    for &(_, y) in voo_points.iter().chain(jepi_points.iter()) {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    let margin = ((y_max - y_min) * 0.05).max(0.5);
    y_min -= margin;
    y_max += margin;

    let x_max = voo_points.len().max(jepi_points.len()).saturating_sub(1) as f64;

    // Ligne de référence à 0% (point de départ commun)
    let zero_line = vec![(0.0, 0.0), (x_max, 0.0)];

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.grid()))
            .data(&zero_line),
        Dataset::default()
            .name("VOO")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.line()))
            .data(&voo_points),
        Dataset::default()
            .name("JEPI")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.up()))
            .data(&jepi_points),
    ];

    let (format_str, _) = voo_data.interval.x_axis_format();
    let x_labels: Vec<Span> = [0, voo_data.len() / 2, voo_data.len().saturating_sub(1)]
        .iter()
        .filter_map(|&i| voo_data.candles.get(i))
        .map(|c| Span::raw(c.timestamp.format(format_str).to_string()))
        .collect();

    let x_axis = Axis::default()
        .style(Style::default().fg(theme.grid()))
        .bounds([0.0, x_max])
        .labels(x_labels);

    let y_axis = Axis::default()
        .title("Rendement (%)")
        .style(Style::default().fg(theme.grid()))
        .bounds([y_min, y_max])
        .labels(vec![
            Span::raw(format!("{:+.1}%", y_min)),
            Span::raw(format!("{:+.1}%", (y_min + y_max) / 2.0)),
            Span::raw(format!("{:+.1}%", y_max)),
        ]);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.text()))
                .style(Style::default().bg(theme.bg()))
                .title(" Performance Comparison (%) "),
        )
        .style(Style::default().bg(theme.bg()).fg(theme.text()))
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

// ============================================================================
// Tableau comparatif
// ============================================================================

/// Tableau VOO / JEPI : dernier prix, rendement période, verdict
fn render_compare_summary(
    frame: &mut Frame,
    app: &App,
    voo_data: &OHLCData,
    jepi_data: &OHLCData,
    area: Rect,
) {
    let theme = app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.grid()))
        .style(Style::default().bg(theme.bg()))
        .title(" 📈 Résumé comparatif ");

    let voo_last = voo_data.last().map(|c| c.close).unwrap_or(0.0);
    let jepi_last = jepi_data.last().map(|c| c.close).unwrap_or(0.0);
    let voo_return = voo_data.period_return_percent().unwrap_or(0.0);
    let jepi_return = jepi_data.period_return_percent().unwrap_or(0.0);

    let return_color = |r: f64| if r >= 0.0 { theme.up() } else { theme.down() };

    // Verdict de surperformance
    let verdict = if voo_return >= jepi_return {
        format!("🏆 VOO a surperformé JEPI de {:.2}%", voo_return - jepi_return)
    } else {
        format!("🏆 JEPI a surperformé VOO de {:.2}%", jepi_return - voo_return)
    };

    let text = vec![
        Line::from(vec![
            Span::styled(format!("{:<12}", "Fonds"), Style::default().fg(theme.text()).add_modifier(Modifier::BOLD)),
            Span::styled(format!("{:>14}", "Dernier prix"), Style::default().fg(theme.text()).add_modifier(Modifier::BOLD)),
            Span::styled(format!("{:>20}", "Rendement période"), Style::default().fg(theme.text()).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<12}", "VOO"), Style::default().fg(theme.line())),
            Span::styled(format!("{:>13.2}$", voo_last), Style::default().fg(theme.text())),
            Span::styled(format!("{:>19.2}%", voo_return), Style::default().fg(return_color(voo_return))),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<12}", "JEPI"), Style::default().fg(theme.up())),
            Span::styled(format!("{:>13.2}$", jepi_last), Style::default().fg(theme.text())),
            Span::styled(format!("{:>19.2}%", jepi_return), Style::default().fg(return_color(jepi_return))),
        ]),
        Line::from(Span::styled(
            verdict,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(text).block(block).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Interval, Period, OHLC};
    use chrono::Utc;

    fn data_with_closes(closes: &[f64]) -> OHLCData {
        let mut data = OHLCData::new("VOO".to_string(), Period::OneYear, Interval::D1);
        for &close in closes {
            data.add_candle(OHLC::new(Utc::now(), close, close, close, close, 1000));
        }
        data
    }

    #[test]
    fn test_normalized_points_start_at_zero() {
        let data = data_with_closes(&[100.0, 110.0, 95.0]);
        let points = normalized_points(&data);

        assert_eq!(points.len(), 3);
        assert_eq!(points[0], (0.0, 0.0));
        // 110 / 100 - 1 = +10%
        assert!((points[1].1 - 10.0).abs() < 1e-9);
        // 95 / 100 - 1 = -5%
        assert!((points[2].1 + 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalized_points_empty_series() {
        let data = data_with_closes(&[]);
        assert!(normalized_points(&data).is_empty());
    }

    #[test]
    fn test_normalized_points_zero_first_close() {
        let data = data_with_closes(&[0.0, 10.0]);
        // Division par zéro impossible : série vide
        assert!(normalized_points(&data).is_empty());
    }
}

// ============================================================================
// Chart - Vue graphique du fonds sélectionné
// ============================================================================
// Quatre styles de rendu, cyclés avec la touche 's' :
// - Ligne et Barres : widget Chart de ratatui (+ sous-graphique de volume)
// - Aire et Chandeliers : renderer texte Unicode (TextChartRenderer)
//
// CONCEPTS RATATUI :
// 1. Chart widget : Dataset, Axis, GraphType (Line/Bar)
// 2. Layout : découpage prix / volume / résumé
// 3. Styling conditionnel par thème
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::{App, ChartStyle};
use crate::indicators::{bollinger, ema, sma, IndicatorKind};
use crate::models::{FundItem, OHLCData};
use crate::ui::textchart::{Overlay, TextChartRenderer, MIN_TERMINAL_WIDTH};
use crate::ui::theme::Theme;

/// Une série d'indicateur prête à superposer (label, couleur, valeurs)
type OverlaySeries = (&'static str, Color, Vec<Option<f64>>);

// ============================================================================
// Fonction principale de rendu
// ============================================================================

/// Dessine la vue graphique complète pour le fonds sélectionné
///
/// CONCEPT RUST : Early return avec match
/// - Si pas de fonds sélectionné ou pas de données, message et return
pub fn render_chart_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;

    let item = match app.selected_item() {
        Some(item) => item,
        None => {
            render_no_data(frame, theme, area, "Aucun fonds sélectionné");
            return;
        }
    };

    let data = match &item.data {
        Some(data) => data,
        None => {
            let msg = format!("Pas de données pour {}", item.symbol());
            render_no_data(frame, theme, area, &msg);
            return;
        }
    };

    if data.candles.is_empty() {
        render_no_data(frame, theme, area, "Pas de données à afficher");
        return;
    }

    // CONCEPT : Graceful degradation pour terminaux étroits
    if area.width < MIN_TERMINAL_WIDTH {
        render_too_narrow(frame, theme, area);
        return;
    }

    // Layout : header + graphique + résumé
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Graphique
            Constraint::Length(4), // Résumé statistique
        ])
        .split(area)
        .to_vec();

    render_chart_header(frame, app, item, chunks[0]);

    match app.chart_style {
        ChartStyle::Line | ChartStyle::Bars => {
            render_widget_chart(frame, app, item, data, chunks[1]);
        }
        ChartStyle::Area | ChartStyle::Candles => {
            render_text_chart(frame, app, item, data, chunks[1]);
        }
    }

    render_stats_footer(frame, app, item, data, chunks[2]);
}

// ============================================================================
// Indicateurs
// ============================================================================

/// Calcule les séries des indicateurs activés
///
/// CONCEPT : Ordre stable des couleurs
/// - Chaque moyenne mobile a sa couleur fixe (indépendante des toggles)
/// - Les bandes de Bollinger partagent la couleur d'accent du thème
pub fn build_overlay_series(app: &App, data: &OHLCData) -> Vec<OverlaySeries> {
    let closes = data.closes();
    let ma_colors = Theme::indicator_colors();
    let mut series = Vec::new();

    for kind in app.indicators.enabled() {
        match kind {
            IndicatorKind::Sma20 => {
                series.push(("SMA 20", ma_colors[0], sma(&closes, 20)));
            }
            IndicatorKind::Sma50 => {
                series.push(("SMA 50", ma_colors[1], sma(&closes, 50)));
            }
            IndicatorKind::Ema20 => {
                series.push(("EMA 20", ma_colors[2], ema(&closes, 20)));
            }
            IndicatorKind::Bollinger => {
                let bands = bollinger(&closes, 20, 2.0);
                series.push(("BB haut", app.theme.accent(), bands.upper));
                series.push(("BB bas", app.theme.accent(), bands.lower));
            }
        }
    }

    series
}

// ============================================================================
// Header du graphique
// ============================================================================

/// Dessine le header avec infos du fonds, alerte et état de chargement
fn render_chart_header(frame: &mut Frame, app: &App, item: &FundItem, area: Rect) {
    let theme = app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(theme.bg()))
        .title(format!(" 📈 {} - {} ", item.symbol(), item.fund.name()));

    // CONCEPT : Header contextuel
    // - Confirmation de quit > chargement > alerte déclenchée > infos normales
    let text = if app.is_awaiting_quit_confirmation() {
        vec![quit_confirmation_line()]
    } else if app.is_loading_data() {
        let message = app
            .loading_message
            .clone()
            .unwrap_or_else(|| "Chargement en cours...".to_string());
        vec![Line::from(vec![
            Span::styled("⏳ ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(message, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        ])]
    } else if item.alert.triggered.is_some() {
        // Alerte déclenchée : état sticky jusqu'à effacement avec 'x'
        vec![Line::from(vec![
            Span::styled(
                "🔔 ALERTE ",
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled(
                format!(
                    "{} a franchi le seuil {} ",
                    item.symbol(),
                    item.alert.describe()
                ),
                Style::default().fg(theme.accent()).add_modifier(Modifier::BOLD),
            ),
            Span::styled("[x]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" Effacer", Style::default().fg(theme.text())),
        ])]
    } else if let (Some(price), Some(change)) = (item.current_price(), item.change_percent()) {
        let color = if change >= 0.0 { theme.up() } else { theme.down() };
        let arrow = if change >= 0.0 { "▲" } else { "▼" };

        let mut spans = vec![
            Span::styled("Prix: ", Style::default().fg(theme.text())),
            Span::styled(
                format!("${:.2}", price),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!("{} {:+.2}%", arrow, change), Style::default().fg(color)),
        ];

        // Alerte armée mais pas déclenchée : rappel discret
        if item.alert.is_armed() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("🔔 {}", item.alert.describe()),
                Style::default().fg(Color::Yellow),
            ));
        }

        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "[ESC]",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(" Retour", Style::default().fg(theme.text())));

        vec![Line::from(spans)]
    } else {
        vec![Line::from("Chargement...")]
    };

    let paragraph = Paragraph::new(text).block(block).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Ligne de confirmation de quit (partagée entre les vues)
pub fn quit_confirmation_line() -> Line<'static> {
    Line::from(vec![
        Span::styled(
            "⚠  Appuyez sur ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "[q]",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
        Span::styled(
            " à nouveau pour quitter, ou n'importe quelle autre touche pour annuler ⚠",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ])
}

// ============================================================================
// Styles Ligne / Barres : widget Chart de ratatui
// ============================================================================

/// Dessine le graphique avec le widget Chart (+ sous-graphique de volume)
///
/// CONCEPT RUST : Durée de vie des points
/// - Dataset::data() emprunte une slice de (f64, f64)
/// - Tous les Vec de points doivent vivre jusqu'au render_widget
fn render_widget_chart(frame: &mut Frame, app: &App, item: &FundItem, data: &OHLCData, area: Rect) {
    let theme = app.theme;

    // Layout : prix (3/4) + volume (1/4)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(3, 4), Constraint::Ratio(1, 4)])
        .split(area)
        .to_vec();

    // ========================================
    // Points de la série de prix
    // ========================================
    let close_points: Vec<(f64, f64)> = data
        .candles
        .iter()
        .enumerate()
        .map(|(i, candle)| (i as f64, candle.close))
        .collect();

    // Style Barres : deux datasets colorés par direction
    let up_points: Vec<(f64, f64)> = data
        .candles
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_bullish())
        .map(|(i, c)| (i as f64, c.close))
        .collect();
    let down_points: Vec<(f64, f64)> = data
        .candles
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_bearish())
        .map(|(i, c)| (i as f64, c.close))
        .collect();

    // Overlays d'indicateurs : on saute les None du warm-up
    let overlay_series = build_overlay_series(app, data);
    let overlay_points: Vec<(&'static str, Color, Vec<(f64, f64)>)> = overlay_series
        .iter()
        .map(|(label, color, values)| {
            let points: Vec<(f64, f64)> = values
                .iter()
                .enumerate()
                .filter_map(|(i, v)| v.map(|v| (i as f64, v)))
                .collect();
            (*label, *color, points)
        })
        .collect();

    // ========================================
    // Bornes des axes
    // ========================================
    let mut min_price = data.min_price().unwrap_or(0.0);
    let mut max_price = data.max_price().unwrap_or(1.0);

    // Les bandes de Bollinger peuvent déborder de la plage high/low
    for (_, _, points) in &overlay_points {
        for &(_, y) in points {
            min_price = min_price.min(y);
            max_price = max_price.max(y);
        }
    }

    // Marge de 5% pour que le graphique respire
    let margin = (max_price - min_price) * 0.05;
    let y_min = (min_price - margin).max(0.0);
    let y_max = max_price + margin;

    // ========================================
    // Datasets
    // ========================================
    let mut datasets = Vec::new();

    match app.chart_style {
        ChartStyle::Bars => {
            datasets.push(
                Dataset::default()
                    .name(item.symbol())
                    .marker(symbols::Marker::HalfBlock)
                    .graph_type(GraphType::Bar)
                    .style(Style::default().fg(theme.up()))
                    .data(&up_points),
            );
            datasets.push(
                Dataset::default()
                    .name("")
                    .marker(symbols::Marker::HalfBlock)
                    .graph_type(GraphType::Bar)
                    .style(Style::default().fg(theme.down()))
                    .data(&down_points),
            );
        }
        _ => {
            datasets.push(
                Dataset::default()
                    .name(item.symbol())
                    .marker(symbols::Marker::Dot)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(theme.line()))
                    .data(&close_points),
            );
        }
    }

    for (label, color, points) in &overlay_points {
        datasets.push(
            Dataset::default()
                .name(*label)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(points),
        );
    }

    // ========================================
    // Axes
    // ========================================
    let (format_str, _) = data.interval.x_axis_format();
    let x_labels: Vec<Span> = [0, data.len() / 2, data.len().saturating_sub(1)]
        .iter()
        .filter_map(|&i| data.candles.get(i))
        .map(|c| Span::raw(c.timestamp.format(format_str).to_string()))
        .collect();

    let x_axis = Axis::default()
        .style(Style::default().fg(theme.grid()))
        .bounds([0.0, (data.len().saturating_sub(1)) as f64])
        .labels(x_labels);

    let y_axis = Axis::default()
        .title("Prix ($)")
        .style(Style::default().fg(theme.grid()))
        .bounds([y_min, y_max])
        .labels(vec![
            Span::raw(format!("${:.0}", y_min)),
            Span::raw(format!("${:.0}", (y_min + y_max) / 2.0)),
            Span::raw(format!("${:.0}", y_max)),
        ]);

    let chart = Chart::new(datasets)
        .block(chart_block(app, item, data, theme))
        .style(Style::default().bg(theme.bg()).fg(theme.text()))
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, chunks[0]);

    render_volume_chart(frame, app, data, chunks[1]);
}

/// Sous-graphique de volume (barres colorées par direction)
fn render_volume_chart(frame: &mut Frame, app: &App, data: &OHLCData, area: Rect) {
    let theme = app.theme;

    let up_volumes: Vec<(f64, f64)> = data
        .candles
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_bullish())
        .map(|(i, c)| (i as f64, c.volume as f64))
        .collect();
    let down_volumes: Vec<(f64, f64)> = data
        .candles
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_bearish())
        .map(|(i, c)| (i as f64, c.volume as f64))
        .collect();

    let max_volume = data
        .candles
        .iter()
        .map(|c| c.volume)
        .max()
        .unwrap_or(0) as f64;

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::HalfBlock)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(theme.up()))
            .data(&up_volumes),
        Dataset::default()
            .marker(symbols::Marker::HalfBlock)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(theme.down()))
            .data(&down_volumes),
    ];

    let x_axis = Axis::default()
        .style(Style::default().fg(theme.grid()))
        .bounds([0.0, (data.len().saturating_sub(1)) as f64]);

    let y_axis = Axis::default()
        .style(Style::default().fg(theme.grid()))
        .bounds([0.0, max_volume])
        .labels(vec![
            Span::raw("0"),
            Span::raw(format_volume(max_volume)),
        ]);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.grid()))
                .style(Style::default().bg(theme.bg()))
                .title(" Volume "),
        )
        .style(Style::default().bg(theme.bg()).fg(theme.text()))
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

/// Formate un volume en notation compacte (1.2M, 850K…)
fn format_volume(volume: f64) -> String {
    if volume >= 1_000_000.0 {
        format!("{:.1}M", volume / 1_000_000.0)
    } else if volume >= 1_000.0 {
        format!("{:.0}K", volume / 1_000.0)
    } else {
        format!("{:.0}", volume)
    }
}

// ============================================================================
// Styles Aire / Chandeliers : renderer texte Unicode
// ============================================================================

/// Dessine le graphique avec le renderer texte (aire ou chandeliers)
fn render_text_chart(frame: &mut Frame, app: &App, item: &FundItem, data: &OHLCData, area: Rect) {
    let theme = app.theme;

    let mut renderer = TextChartRenderer::new(
        &data.candles,
        data.interval,
        app.chart_style,
        theme,
        area,
    );

    for (_, color, values) in build_overlay_series(app, data) {
        renderer = renderer.with_overlay(Overlay {
            color,
            values,
        });
    }

    let lines = renderer.render_lines();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(theme.bg()))
        .block(chart_block(app, item, data, theme));

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Blocs et footers partagés
// ============================================================================

/// Bloc englobant du graphique : titre avec tous les réglages actifs
fn chart_block<'a>(app: &App, item: &FundItem, data: &OHLCData, theme: Theme) -> Block<'a> {
    // Indicateur si l'intervalle demandé a été rabattu
    let interval_display = if app.interval_substituted() {
        format!(
            "{} → {} ⚠️",
            app.current_interval.label(),
            app.effective_interval().label()
        )
    } else {
        data.interval.label().to_string()
    };

    let indicators = if app.indicators.is_empty() {
        String::new()
    } else {
        format!(" + {}", app.indicators.describe())
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text()))
        .style(Style::default().bg(theme.bg()))
        .title(format!(
            " {} - {} / {} - {}{} ({} chandelles) ",
            item.symbol(),
            data.period.label(),
            interval_display,
            app.chart_style.label(),
            indicators,
            data.len()
        ))
}

/// Résumé statistique sous le graphique + raccourcis clavier
fn render_stats_footer(frame: &mut Frame, app: &App, item: &FundItem, data: &OHLCData, area: Rect) {
    let theme = app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.grid()))
        .style(Style::default().bg(theme.bg()))
        .title(" 📊 Résumé ");

    // Ligne 1 : statistiques de la période
    let stats_line = {
        let latest = data.last().map(|c| c.close).unwrap_or(0.0);
        let high = data.max_price().unwrap_or(0.0);
        let low = data.min_price().unwrap_or(0.0);
        let ret = data.period_return_percent().unwrap_or(0.0);
        let ret_color = if ret >= 0.0 { theme.up() } else { theme.down() };

        let mut spans = vec![
            Span::styled("Dernier: ", Style::default().fg(theme.text())),
            Span::styled(format!("${:.2}", latest), Style::default().fg(theme.text()).add_modifier(Modifier::BOLD)),
            Span::styled("  Haut: ", Style::default().fg(theme.text())),
            Span::styled(format!("${:.2}", high), Style::default().fg(theme.up())),
            Span::styled("  Bas: ", Style::default().fg(theme.text())),
            Span::styled(format!("${:.2}", low), Style::default().fg(theme.down())),
            Span::styled("  Rendement: ", Style::default().fg(theme.text())),
            Span::styled(format!("{:+.2}%", ret), Style::default().fg(ret_color)),
        ];

        if let Some(yield_pct) = item.trailing_yield_percent() {
            spans.push(Span::styled("  Dividendes 12m: ", Style::default().fg(theme.text())));
            spans.push(Span::styled(
                format!("{:.2}%", yield_pct),
                Style::default().fg(Color::Yellow),
            ));
        }

        Line::from(spans)
    };

    // Ligne 2 : message de statut ou raccourcis
    let help_line = if let Some(status) = &app.status_message {
        Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(vec![
            Span::styled("[s]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" Style  ", Style::default().fg(theme.text())),
            Span::styled("[t]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" Thème  ", Style::default().fg(theme.text())),
            Span::styled("[h/l]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" Intervalle  ", Style::default().fg(theme.text())),
            Span::styled("[[/]]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" Période  ", Style::default().fg(theme.text())),
            Span::styled("[1-4]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" Indicateurs  ", Style::default().fg(theme.text())),
            Span::styled("[a/b]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" Alerte  ", Style::default().fg(theme.text())),
            Span::styled("[e]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::styled(" Export", Style::default().fg(theme.text())),
        ])
    };

    let paragraph = Paragraph::new(vec![stats_line, help_line])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Helpers : messages d'erreur
// ============================================================================

/// Affiche un message quand il n'y a pas de données à afficher
pub fn render_no_data(frame: &mut Frame, theme: Theme, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(theme.bg()))
        .title(" ⚠ Erreur ");

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::Red))),
        Line::from(""),
        Line::from(Span::styled("[ESC] Retour", Style::default().fg(theme.grid()))),
    ];

    let paragraph = Paragraph::new(text).block(block).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Affiche un message quand le terminal est trop étroit
///
/// CONCEPT : Responsive design - graceful degradation
fn render_too_narrow(frame: &mut Frame, theme: Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(theme.bg()))
        .title(" ⚠ Terminal trop petit ");

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Terminal trop étroit pour afficher le graphique",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Largeur minimale requise : {} colonnes", MIN_TERMINAL_WIDTH),
            Style::default().fg(theme.grid()),
        )),
        Line::from(""),
        Line::from(Span::styled("[ESC] Retour", Style::default().fg(theme.grid()))),
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

    fn app_with_data(closes: &[f64]) -> App {
        let mut app = App::new();
        let mut data = OHLCData::new("VOO".to_string(), Period::OneYear, Interval::D1);
        for &close in closes {
            data.add_candle(OHLC::new(Utc::now(), close, close + 1.0, close - 1.0, close, 1000));
        }
        app.funds[0].data = Some(data);
        app
    }

    #[test]
    fn test_build_overlay_series_empty_by_default() {
        let app = app_with_data(&[100.0, 101.0]);
        let data = app.funds[0].data.as_ref().unwrap();
        assert!(build_overlay_series(&app, data).is_empty());
    }

    #[test]
    fn test_build_overlay_series_bollinger_is_two_series() {
        let mut app = app_with_data(&(0..30).map(|i| 100.0 + i as f64).collect::<Vec<_>>());
        app.toggle_indicator(IndicatorKind::Bollinger);

        let data = app.funds[0].data.as_ref().unwrap().clone();
        let series = build_overlay_series(&app, &data);

        // Bollinger = bande haute + bande basse
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].0, "BB haut");
        assert_eq!(series[1].0, "BB bas");
        // Alignées avec la série d'entrée
        assert_eq!(series[0].2.len(), data.len());
    }

    #[test]
    fn test_build_overlay_series_order_is_canonical() {
        let mut app = app_with_data(&(0..60).map(|i| 100.0 + i as f64).collect::<Vec<_>>());
        // Activation dans le désordre
        app.toggle_indicator(IndicatorKind::Ema20);
        app.toggle_indicator(IndicatorKind::Sma20);

        let data = app.funds[0].data.as_ref().unwrap().clone();
        let series = build_overlay_series(&app, &data);

        assert_eq!(series[0].0, "SMA 20");
        assert_eq!(series[1].0, "EMA 20");
    }

    #[test]
    fn test_format_volume() {
        assert_eq!(format_volume(500.0), "500");
        assert_eq!(format_volume(8_500.0), "8K");
        assert_eq!(format_volume(2_400_000.0), "2.4M");
    }
}

// ============================================================================
// TextChart - Rendu texte ligne par ligne (chandeliers et aire)
// ============================================================================
// Implémentation inspirée de cli-candlestick-chart, intégrée à ratatui.
// Utilise des caractères Unicode pour dessiner les chandeliers japonais ou
// une aire remplie sous la courbe des clôtures.
//
// ALGORITHME (chandeliers) :
// - Rendu vertical : ligne par ligne de haut en bas
// - Pour chaque ligne, on détermine quel caractère Unicode afficher
// - Logique des 3 zones : mèche supérieure, corps, mèche inférieure
// - Seuils fractionnaires (0.25, 0.75) pour précision sub-caractère
//
// CARACTÈRES UNICODE :
// ┃ Corps plein          │ Mèche pleine
// ╻ Demi-corps (bas)     ╹ Demi-corps (haut)
// ╽ Transition top       ╿ Transition bottom
// ╷ Demi-mèche sup       ╵ Demi-mèche inf
// █ Aire pleine          ▄ Demi-aire (précision sub-caractère)
// ============================================================================

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
};

use crate::app::ChartStyle;
use crate::models::{Interval, OHLC};
use crate::ui::theme::Theme;

// ============================================================================
// Constantes
// ============================================================================

/// Caractères Unicode pour le rendu des chandeliers
const UNICODE_VOID: char = ' ';
const UNICODE_BODY: char = '┃';             // Corps plein
const UNICODE_HALF_BODY_BOTTOM: char = '╻'; // Corps avec espace en bas
const UNICODE_HALF_BODY_TOP: char = '╹';    // Corps avec espace en haut
const UNICODE_WICK: char = '│';             // Mèche pleine
const UNICODE_TOP: char = '╽';              // Transition corps→mèche (haut)
const UNICODE_BOTTOM: char = '╿';           // Transition corps→mèche (bas)
const UNICODE_UPPER_WICK: char = '╷';       // Demi-mèche supérieure
const UNICODE_LOWER_WICK: char = '╵';       // Demi-mèche inférieure

/// Caractères pour le style aire
const UNICODE_AREA_FULL: char = '█';
const UNICODE_AREA_HALF: char = '▄';

/// Marqueur des overlays d'indicateurs
const UNICODE_OVERLAY: char = '·';

/// Largeur de l'axe Y (pour les prix)
const Y_AXIS_WIDTH: u16 = 12;

/// Constantes pour le design réactif
/// - MIN_TERMINAL_WIDTH : largeur minimale absolue pour afficher le graphique
/// - ADAPTIVE_Y_AXIS_THRESHOLD : en dessous, on réduit la largeur de l'axe Y
/// - NARROW_Y_AXIS_WIDTH : largeur réduite de l'axe Y pour terminaux étroits
pub const MIN_TERMINAL_WIDTH: u16 = 60;
const ADAPTIVE_Y_AXIS_THRESHOLD: u16 = 80;
const NARROW_Y_AXIS_WIDTH: u16 = 8;

// ============================================================================
// Overlay d'indicateur
// ============================================================================

/// Une série d'indicateur à superposer au graphique
///
/// CONCEPT : Alignement index par index
/// - values[i] correspond à candles[i] (None pendant le warm-up)
/// - Le renderer fait lui-même la correspondance avec les chandelles visibles
#[derive(Debug, Clone)]
pub struct Overlay {
    pub color: Color,
    pub values: Vec<Option<f64>>,
}

// ============================================================================
// Structure principale
// ============================================================================

/// Renderer de graphique en mode texte (chandeliers ou aire)
pub struct TextChartRenderer<'a> {
    candles: &'a [OHLC],
    interval: Interval,
    style: ChartStyle,
    theme: Theme,
    overlays: Vec<Overlay>,
    min_price: f64,
    max_price: f64,
    height: u16,
    width: u16,
    y_axis_width: u16,
}

impl<'a> TextChartRenderer<'a> {
    /// Crée un nouveau renderer
    ///
    /// CONCEPT : Responsive design
    /// - Adapte la largeur de l'axe Y selon la largeur du terminal
    /// - Largeur < 80 cols : axe Y réduit à 8 caractères
    pub fn new(
        candles: &'a [OHLC],
        interval: Interval,
        style: ChartStyle,
        theme: Theme,
        area: Rect,
    ) -> Self {
        let (min_price, max_price) = Self::compute_price_bounds(candles);

        let y_axis_width = if area.width < ADAPTIVE_Y_AXIS_THRESHOLD {
            NARROW_Y_AXIS_WIDTH
        } else {
            Y_AXIS_WIDTH
        };

        Self {
            candles,
            interval,
            style,
            theme,
            overlays: Vec::new(),
            min_price,
            max_price,
            // Réserve 3 lignes pour l'axe X (ticks + labels + dates)
            height: area.height.saturating_sub(3),
            width: area.width.saturating_sub(y_axis_width),
            y_axis_width,
        }
    }

    /// Ajoute une série d'indicateur à superposer
    ///
    /// Les bornes de prix sont étendues pour que l'overlay reste visible
    /// (une bande de Bollinger peut sortir de la plage high/low)
    pub fn with_overlay(mut self, overlay: Overlay) -> Self {
        for value in overlay.values.iter().flatten() {
            self.min_price = self.min_price.min(*value);
            self.max_price = self.max_price.max(*value);
        }
        self.overlays.push(overlay);
        self
    }

    /// Calcule les prix min et max sur tous les chandeliers
    fn compute_price_bounds(candles: &[OHLC]) -> (f64, f64) {
        let max_price = candles
            .iter()
            .fold(f64::NEG_INFINITY, |max, c| max.max(c.high));

        let min_price = candles
            .iter()
            .fold(f64::INFINITY, |min, c| min.min(c.low));

        // Ajoute une marge de 2%
        let margin = (max_price - min_price) * 0.02;
        ((min_price - margin).max(0.0), max_price + margin)
    }

    /// Convertit un prix en coordonnée de hauteur
    fn price_to_height(&self, price: f64) -> f64 {
        if self.max_price == self.min_price {
            return self.height as f64 / 2.0;
        }

        (price - self.min_price) / (self.max_price - self.min_price) * self.height as f64
    }

    /// Retourne la couleur du chandelier selon sa direction
    fn candle_color(&self, candle: &OHLC) -> Color {
        if candle.is_bullish() {
            self.theme.up()
        } else {
            self.theme.down()
        }
    }

    /// Rend un chandelier à une hauteur donnée
    ///
    /// Le cœur de l'algorithme : détermine quel caractère Unicode afficher
    /// selon la position verticale (3 zones, seuils 0.25/0.75)
    fn render_candle(&self, candle: &OHLC, y: u16) -> char {
        let height_unit = y as f64;

        // Convertit les prix en coordonnées de hauteur
        let high_y = self.price_to_height(candle.high);
        let low_y = self.price_to_height(candle.low);
        let max_y = self.price_to_height(candle.open.max(candle.close));
        let min_y = self.price_to_height(candle.close.min(candle.open));

        let mut output = UNICODE_VOID;

        // ========================================
        // ZONE 1 : Mèche supérieure (high → max)
        // ========================================
        if high_y.ceil() >= height_unit && height_unit >= max_y.floor() {
            if max_y - height_unit > 0.75 {
                // Corps s'étend significativement dans cette ligne
                output = UNICODE_BODY;
            } else if (max_y - height_unit) > 0.25 {
                // Corps partiellement présent
                if (high_y - height_unit) > 0.75 {
                    // Mèche s'étend aussi → transition
                    output = UNICODE_TOP;
                } else {
                    output = UNICODE_HALF_BODY_BOTTOM;
                }
            } else if (high_y - height_unit) > 0.75 {
                // Que la mèche, pleine
                output = UNICODE_WICK;
            } else if (high_y - height_unit) > 0.25 {
                output = UNICODE_UPPER_WICK;
            }
        }
        // ========================================
        // ZONE 2 : Corps (min → max)
        // ========================================
        else if max_y.floor() >= height_unit && height_unit >= min_y.ceil() {
            output = UNICODE_BODY;
        }
        // ========================================
        // ZONE 3 : Mèche inférieure (min → low)
        // ========================================
        else if min_y.ceil() >= height_unit && height_unit >= low_y.floor() {
            if (min_y - height_unit) < 0.25 {
                output = UNICODE_BODY;
            } else if (min_y - height_unit) < 0.75 {
                if (low_y - height_unit) < 0.25 {
                    output = UNICODE_BOTTOM;
                } else {
                    output = UNICODE_HALF_BODY_TOP;
                }
            } else if low_y - height_unit < 0.25 {
                output = UNICODE_WICK;
            } else if low_y - height_unit < 0.75 {
                output = UNICODE_LOWER_WICK;
            }
        }

        output
    }

    /// Rend une colonne du style aire à une hauteur donnée
    ///
    /// Remplissage sous la clôture, avec un demi-bloc à la frontière pour
    /// la précision sub-caractère
    fn render_area(&self, candle: &OHLC, y: u16) -> char {
        let height_unit = y as f64;
        let fill = self.price_to_height(candle.close);

        if height_unit <= fill {
            UNICODE_AREA_FULL
        } else if (height_unit - fill) < 0.5 {
            UNICODE_AREA_HALF
        } else {
            UNICODE_VOID
        }
    }

    /// Cherche un marqueur d'overlay pour la cellule (colonne, ligne)
    ///
    /// CONCEPT : Passe secondaire sur les cases vides
    /// - Les overlays ne recouvrent jamais les chandelles elles-mêmes
    /// - index_in_full : index dans la série complète (pas seulement visible)
    fn overlay_at(&self, index_in_full: usize, y: u16) -> Option<(char, Color)> {
        for overlay in &self.overlays {
            if let Some(Some(value)) = overlay.values.get(index_in_full) {
                if self.price_to_height(*value).round() as u16 == y {
                    return Some((UNICODE_OVERLAY, overlay.color));
                }
            }
        }
        None
    }

    /// Rend une ligne de l'axe Y avec le prix
    fn render_y_axis(&self, y: u16) -> String {
        // Affiche le prix toutes les 4 lignes
        if y % 4 == 0 {
            let price = self.min_price
                + (y as f64 * (self.max_price - self.min_price) / self.height as f64);
            let width = self.y_axis_width as usize - 3;
            format!("{:>w$.2} │ ", price, w = width)
        } else {
            format!("{:>w$} │ ", "", w = self.y_axis_width as usize - 3)
        }
    }

    /// Sélectionne les chandeliers visibles (les N derniers qui tiennent)
    ///
    /// Retourne aussi l'offset dans la série complète, pour aligner les
    /// overlays
    fn visible_candles(&self) -> (&[OHLC], usize) {
        let max_visible = self.width as usize;
        if self.candles.len() <= max_visible {
            (self.candles, 0)
        } else {
            let start = self.candles.len() - max_visible;
            (&self.candles[start..], start)
        }
    }

    /// Génère toutes les lignes du graphique (chandeliers/aire + axe X)
    pub fn render_lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        let (visible, start) = self.visible_candles();

        if visible.is_empty() {
            return lines;
        }

        // Espacement entre colonnes pour remplir toute la largeur
        let spacing = if visible.len() > 1 {
            self.width as f64 / visible.len() as f64
        } else {
            1.0
        };

        // Parcourt de haut en bas (reversed)
        for y in (1..=self.height).rev() {
            let mut spans = Vec::new();

            // Axe Y
            spans.push(Span::styled(
                self.render_y_axis(y),
                Style::default().fg(self.theme.grid()),
            ));

            // Chaque colonne avec espacement
            for (i, candle) in visible.iter().enumerate() {
                let (ch, color) = match self.style {
                    ChartStyle::Area => (self.render_area(candle, y), self.theme.line()),
                    _ => (self.render_candle(candle, y), self.candle_color(candle)),
                };

                // Les cases vides peuvent accueillir un marqueur d'indicateur
                let (ch, color) = if ch == UNICODE_VOID {
                    self.overlay_at(start + i, y).unwrap_or((ch, color))
                } else {
                    (ch, color)
                };

                spans.push(Span::styled(ch.to_string(), Style::default().fg(color)));

                // Espacement après (sauf pour le dernier)
                if i < visible.len() - 1 {
                    let num_spaces = (spacing - 1.0).round() as usize;
                    if num_spaces > 0 {
                        spans.push(Span::raw(" ".repeat(num_spaces)));
                    }
                }
            }

            lines.push(Line::from(spans));
        }

        // Axe X (2-3 lignes)
        lines.extend(self.render_x_axis(visible, spacing));

        lines
    }

    /// Génère les lignes de l'axe X avec tick marks et labels
    ///
    /// CONCEPT : Dates au changement de jour
    /// - Ligne 1 : Tick marks (│)
    /// - Ligne 2 : Labels principaux (heures ou dates)
    /// - Ligne 3 : Dates aux changements de jour (intraday seulement)
    fn render_x_axis(&self, visible: &[OHLC], spacing: f64) -> Vec<Line<'a>> {
        let mut lines = vec![];

        let (format_str, is_intraday) = self.interval.x_axis_format();

        // Largeur estimée des labels selon l'intervalle
        // CONCEPT : Adaptive label spacing
        // - Évite les chevauchements en garantissant un espacement minimum
        let estimated_label_width = match self.interval {
            Interval::Mo1 => 4, // "YYYY"
            _ => 5,             // "HH:MM" ou "DD/MM"
        };

        // +2 pour garantir au moins 2 caractères entre labels
        let min_space_per_label = estimated_label_width + 2;
        let max_labels = (self.width as usize / min_space_per_label).max(2).min(10);

        let label_interval = if visible.len() <= max_labels {
            1
        } else {
            visible.len() / max_labels
        };

        // Ligne 1 : Tick marks
        let mut tick_spans = vec![Span::raw(format!(
            "{:>width$}",
            "",
            width = self.y_axis_width as usize
        ))];

        for (i, _candle) in visible.iter().enumerate() {
            let tick = if i % label_interval == 0 { "│" } else { " " };

            tick_spans.push(Span::styled(tick, Style::default().fg(self.theme.grid())));

            if i < visible.len() - 1 {
                let num_spaces = (spacing - 1.0).round() as usize;
                if num_spaces > 0 {
                    tick_spans.push(Span::raw(" ".repeat(num_spaces)));
                }
            }
        }

        lines.push(Line::from(tick_spans));

        // Ligne 2 : Labels de temps
        let mut label_spans = vec![Span::raw(format!(
            "{:>width$}",
            "",
            width = self.y_axis_width as usize
        ))];

        let mut position = 0.0;
        for (i, candle) in visible.iter().enumerate() {
            if i % label_interval == 0 {
                let time_label = candle.timestamp.format(format_str).to_string();

                label_spans.push(Span::styled(
                    time_label.clone(),
                    Style::default().fg(self.theme.grid()),
                ));

                let next_label_position = if i + label_interval < visible.len() {
                    (i + label_interval) as f64 * spacing
                } else {
                    self.width as f64
                };

                let space_to_next =
                    (next_label_position - position - time_label.len() as f64).max(0.0) as usize;
                if space_to_next > 0 {
                    label_spans.push(Span::raw(" ".repeat(space_to_next)));
                }

                position = next_label_position;
            }
        }

        lines.push(Line::from(label_spans));

        // Ligne 3 : Dates aux changements de jour (pour intraday)
        if is_intraday {
            lines.push(self.render_day_change_line(visible, spacing));
        }

        lines
    }

    /// Ligne de dates aux changements de jour (intervalles intraday)
    fn render_day_change_line(&self, visible: &[OHLC], spacing: f64) -> Line<'a> {
        use chrono::Timelike;

        let mut date_spans = vec![Span::raw(format!(
            "{:>width$}",
            "",
            width = self.y_axis_width as usize
        ))];

        let mut current_position = 0.0;
        let mut last_day = None;
        let mut last_date_end_position = 0.0;
        const MIN_DATE_SPACING: f64 = 2.0; // Espace minimum entre deux dates

        for (i, candle) in visible.iter().enumerate() {
            let current_day = candle.timestamp.date_naive();

            // Détecte le changement de jour
            let is_day_change = if let Some(prev_day) = last_day {
                current_day != prev_day
            } else {
                // Premier chandelier : afficher seulement en début de journée
                candle.timestamp.hour() < 2
            };

            if is_day_change {
                let candle_position = i as f64 * spacing;
                let space_from_last_date = candle_position - last_date_end_position;

                if space_from_last_date >= MIN_DATE_SPACING || last_day.is_none() {
                    let spaces_needed = (candle_position - current_position).max(0.0) as usize;
                    if spaces_needed > 0 {
                        date_spans.push(Span::raw(" ".repeat(spaces_needed)));
                    }

                    let date_label = candle.timestamp.format("%d/%m").to_string();
                    date_spans.push(Span::styled(
                        date_label.clone(),
                        Style::default().fg(self.theme.grid()),
                    ));

                    current_position = candle_position + date_label.len() as f64;
                    last_date_end_position = current_position;
                }
            }

            last_day = Some(current_day);
        }

        Line::from(date_spans)
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn candles(closes: &[f64]) -> Vec<OHLC> {
        let base = Utc::now();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                OHLC::new(
                    base + Duration::days(i as i64),
                    close - 1.0,
                    close + 2.0,
                    close - 2.0,
                    close,
                    1000,
                )
            })
            .collect()
    }

    fn area_rect() -> Rect {
        Rect::new(0, 0, 100, 30)
    }

    #[test]
    fn test_render_lines_dimensions() {
        let data = candles(&[100.0, 102.0, 101.0, 104.0]);
        let renderer = TextChartRenderer::new(
            &data,
            Interval::D1,
            ChartStyle::Candles,
            Theme::Dark,
            area_rect(),
        );

        let lines = renderer.render_lines();
        // hauteur graphique (30 - 3) + axe X (2 lignes, D1 non intraday)
        assert_eq!(lines.len(), 27 + 2);
    }

    #[test]
    fn test_render_lines_empty() {
        let data: Vec<OHLC> = vec![];
        let renderer = TextChartRenderer::new(
            &data,
            Interval::D1,
            ChartStyle::Candles,
            Theme::Dark,
            area_rect(),
        );
        assert!(renderer.render_lines().is_empty());
    }

    #[test]
    fn test_area_style_fills_below_close() {
        let data = candles(&[100.0]);
        let renderer = TextChartRenderer::new(
            &data,
            Interval::D1,
            ChartStyle::Area,
            Theme::Dark,
            area_rect(),
        );

        // Tout en bas du graphique : rempli
        assert_eq!(renderer.render_area(&data[0], 1), UNICODE_AREA_FULL);
    }

    #[test]
    fn test_intraday_adds_date_line() {
        let data = candles(&[100.0, 101.0]);

        let daily = TextChartRenderer::new(
            &data,
            Interval::D1,
            ChartStyle::Candles,
            Theme::Dark,
            area_rect(),
        );
        let intraday = TextChartRenderer::new(
            &data,
            Interval::M30,
            ChartStyle::Candles,
            Theme::Dark,
            area_rect(),
        );

        // L'intraday a une ligne de dates supplémentaire
        assert_eq!(
            intraday.render_lines().len(),
            daily.render_lines().len() + 1
        );
    }

    #[test]
    fn test_overlay_extends_price_bounds() {
        let data = candles(&[100.0, 101.0, 102.0]);
        let renderer = TextChartRenderer::new(
            &data,
            Interval::D1,
            ChartStyle::Candles,
            Theme::Dark,
            area_rect(),
        );

        let max_before = renderer.max_price;

        // Overlay au-dessus du plus haut : les bornes doivent s'étendre
        let renderer = renderer.with_overlay(Overlay {
            color: Color::Yellow,
            values: vec![None, Some(150.0), None],
        });

        assert!(renderer.max_price >= 150.0);
        assert!(renderer.max_price > max_before);
    }

    #[test]
    fn test_candle_color_follows_theme() {
        let data = candles(&[100.0]);
        let bullish = OHLC::new(Utc::now(), 100.0, 110.0, 95.0, 105.0, 1000);
        let bearish = OHLC::new(Utc::now(), 105.0, 110.0, 95.0, 100.0, 1000);

        let renderer = TextChartRenderer::new(
            &data,
            Interval::D1,
            ChartStyle::Candles,
            Theme::Dark,
            area_rect(),
        );

        assert_eq!(renderer.candle_color(&bullish), Theme::Dark.up());
        assert_eq!(renderer.candle_color(&bearish), Theme::Dark.down());
    }
}

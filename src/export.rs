// ============================================================================
// Export - Snapshot texte du graphique courant
// ============================================================================
// Écrit le graphique affiché dans un fichier texte, avec un en-tête et le
// résumé statistique. Le rendu réutilise TextChartRenderer sur un canvas de
// taille fixe, puis les styles sont retirés (le fichier est du texte brut).
//
// CONCEPT : Rendu hors écran
// - Le renderer produit des Vec<Line> indépendamment d'un terminal
// - On concatène le contenu des spans, sans les couleurs
// ============================================================================

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use ratatui::layout::Rect;
use ratatui::text::Line;
use tracing::info;

use crate::app::{App, ChartStyle};
use crate::ui::chart::build_overlay_series;
use crate::ui::textchart::{Overlay, TextChartRenderer};

/// Dimensions du canvas d'export (indépendantes du terminal)
const EXPORT_WIDTH: u16 = 120;
const EXPORT_HEIGHT: u16 = 40;

/// Répertoire de sortie des snapshots
const EXPORT_DIR: &str = "exports";

/// Nom de fichier par défaut : chart_<SYMBOLE>_<horodatage>
///
/// Utilisé quand l'utilisateur valide une saisie vide
pub fn default_export_name(symbol: &str) -> String {
    format!(
        "chart_{}_{}",
        symbol,
        Local::now().format("%Y%m%d_%H%M%S")
    )
}

/// Exporte le graphique courant vers exports/<name>.txt
///
/// Retourne le chemin du fichier écrit
pub fn export_chart(app: &App, name: &str) -> Result<PathBuf> {
    export_chart_to(app, name, PathBuf::from(EXPORT_DIR))
}

/// Variante avec répertoire de sortie explicite (testable)
pub fn export_chart_to(app: &App, name: &str, dir: PathBuf) -> Result<PathBuf> {
    let item = app
        .selected_item()
        .context("Aucun fonds sélectionné pour l'export")?;
    let data = item
        .data
        .as_ref()
        .context("Pas de données à exporter")?;
    if data.is_empty() {
        anyhow::bail!("Pas de données à exporter pour {}", item.symbol());
    }

    // Le renderer texte couvre aire et chandeliers ; les styles widget
    // (ligne, barres) sont exportés avec leur équivalent texte le plus proche
    let style = match app.chart_style {
        ChartStyle::Line | ChartStyle::Area => ChartStyle::Area,
        ChartStyle::Bars | ChartStyle::Candles => ChartStyle::Candles,
    };

    let canvas = Rect::new(0, 0, EXPORT_WIDTH, EXPORT_HEIGHT);
    let mut renderer =
        TextChartRenderer::new(&data.candles, data.interval, style, app.theme, canvas);

    for (_, color, values) in build_overlay_series(app, data) {
        renderer = renderer.with_overlay(Overlay { color, values });
    }

    let chart_text = lines_to_plain(&renderer.render_lines());

    // En-tête + graphique + résumé
    let mut content = String::new();
    content.push_str(&format!(
        "{} - {} | Période: {} | Intervalle: {} | Style: {}\n",
        item.symbol(),
        item.fund.name(),
        data.period.label(),
        data.interval.label(),
        style.label()
    ));
    if !app.indicators.is_empty() {
        content.push_str(&format!("Indicateurs : {}\n", app.indicators.describe()));
    }
    content.push_str(&format!(
        "Généré le {}\n\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    content.push_str(&chart_text);
    content.push('\n');

    let latest = data.last().map(|c| c.close).unwrap_or(0.0);
    content.push_str(&format!(
        "\nDernier: ${:.2}  Haut: ${:.2}  Bas: ${:.2}  Rendement: {:+.2}%  Chandelles: {}\n",
        latest,
        data.max_price().unwrap_or(0.0),
        data.min_price().unwrap_or(0.0),
        data.period_return_percent().unwrap_or(0.0),
        data.len()
    ));

    // Nom vide : nom horodaté par défaut
    let name = name.trim();
    let filename = if name.is_empty() {
        default_export_name(item.symbol())
    } else {
        name.to_string()
    };

    fs::create_dir_all(&dir).context("Échec de la création du répertoire d'export")?;
    let path = dir.join(format!("{}.txt", filename));
    fs::write(&path, content).context("Échec de l'écriture du fichier d'export")?;

    info!(path = %path.display(), "Chart exported");
    Ok(path)
}

/// Concatène le contenu des spans d'une ligne, sans les styles
fn lines_to_plain(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            text.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Interval, Period, OHLCData, OHLC};
    use chrono::Utc;
    use ratatui::text::Span;

    fn app_with_data() -> App {
        let mut app = App::new();
        let mut data = OHLCData::new("VOO".to_string(), Period::OneYear, Interval::D1);
        for i in 0..50 {
            let close = 100.0 + i as f64;
            data.add_candle(OHLC::new(
                Utc::now(),
                close - 0.5,
                close + 1.0,
                close - 1.0,
                close,
                1000,
            ));
        }
        app.funds[0].data = Some(data);
        app
    }

    fn temp_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("lazycharts_test_{}_{}", tag, std::process::id()))
    }

    #[test]
    fn test_default_export_name() {
        let name = default_export_name("VOO");
        assert!(name.starts_with("chart_VOO_"));
        // Horodatage : chart_VOO_YYYYmmdd_HHMMSS
        assert_eq!(name.len(), "chart_VOO_".len() + 15);
    }

    #[test]
    fn test_lines_to_plain_strips_styles() {
        let lines = vec![
            Line::from(vec![Span::raw("abc"), Span::raw("def   ")]),
            Line::from("xyz"),
        ];
        assert_eq!(lines_to_plain(&lines), "abcdef\nxyz");
    }

    #[test]
    fn test_export_chart_writes_file() {
        let app = app_with_data();
        let dir = temp_dir("write");

        let path = export_chart_to(&app, "mon_export", dir.clone()).unwrap();
        assert!(path.ends_with("mon_export.txt"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("VOO"));
        assert!(content.contains("Période: 1y"));
        assert!(content.contains("Dernier: $149.00"));
        // Le corps du graphique est bien présent (plusieurs dizaines de lignes)
        assert!(content.lines().count() > 30);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_export_chart_empty_name_uses_default() {
        let app = app_with_data();
        let dir = temp_dir("default");

        let path = export_chart_to(&app, "   ", dir.clone()).unwrap();
        let filename = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(filename.starts_with("chart_VOO_"));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_export_without_data_fails() {
        let app = App::new(); // Aucune donnée chargée
        let result = export_chart_to(&app, "x", temp_dir("nodata"));
        assert!(result.is_err());
    }
}

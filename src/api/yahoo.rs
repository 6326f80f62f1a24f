// ============================================================================
// API Client : Yahoo Finance
// ============================================================================
// Récupère les données financières depuis Yahoo Finance : série OHLC,
// dividendes (events=div) et métadonnées de cotation
//
// CONCEPTS RUST AVANCÉS :
// 1. async/await : programmation asynchrone (non-bloquante)
// 2. Result<T, E> : gestion d'erreurs avec contexte
// 3. Serde : désérialisation JSON automatique
// ============================================================================

use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::DateTime;
use serde::Deserialize;
use tracing::{debug, error, info, instrument, warn};

use crate::models::{
    Dividend, DividendHistory, Interval, Period, QuoteInfo, OHLCData, OHLC,
};

/// Résultat complet d'un fetch : série + dividendes + meta
///
/// CONCEPT : Un seul appel réseau par chargement
/// - L'endpoint chart retourne tout (chandelles, dividendes, meta)
/// - Pas besoin d'un second endpoint pour l'instantané de cotation
#[derive(Debug, Clone)]
pub struct FundData {
    pub data: OHLCData,
    pub dividends: DividendHistory,
    pub info: QuoteInfo,
}

// ============================================================================
// Structures pour parser la réponse JSON de Yahoo Finance
// ============================================================================
// Yahoo retourne un JSON complexe, on définit des structures qui matchent
// exactement la structure JSON pour que serde puisse désérialiser
//
// CONCEPT RUST : #[serde(rename_all = "camelCase")]
// - Mappe automatiquement "regularMarketPrice" (JSON) vers
//   regular_market_price (Rust)
// ============================================================================

/// Réponse complète de l'API Yahoo Finance
#[derive(Debug, Deserialize)]
struct YahooResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    #[allow(dead_code)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: Meta,
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
    events: Option<Events>,
}

/// Métadonnées du symbole
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Meta {
    #[allow(dead_code)]
    symbol: String,
    regular_market_price: Option<f64>,
    chart_previous_close: Option<f64>,
    fifty_two_week_high: Option<f64>,
    fifty_two_week_low: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

/// Données OHLCV (Open, High, Low, Close, Volume)
#[derive(Debug, Deserialize)]
struct Quote {
    open: Option<Vec<Option<f64>>>,
    high: Option<Vec<Option<f64>>>,
    low: Option<Vec<Option<f64>>>,
    close: Option<Vec<Option<f64>>>,
    volume: Option<Vec<Option<u64>>>,
}

/// Événements corporate (dividendes) retournés avec events=div
///
/// Format : une map "timestamp → versement", non ordonnée
#[derive(Debug, Deserialize)]
struct Events {
    dividends: Option<HashMap<String, DividendEvent>>,
}

#[derive(Debug, Deserialize)]
struct DividendEvent {
    amount: f64,
    date: i64,
}

// ============================================================================
// Fonctions publiques de l'API
// ============================================================================

/// Récupère les données d'un fonds depuis Yahoo Finance
///
/// CONCEPT RUST : async fn
/// - Fonction asynchrone qui peut être "await"ée
/// - Ne bloque pas le thread pendant les I/O réseau
///
/// # Arguments
/// * `symbol` - Symbole du fonds (ex: "VOO", "JEPI")
/// * `period` - Profondeur d'historique demandée
/// * `interval` - Granularité des chandelles (doit être valide pour period,
///   voir Interval::clamp_for — l'appelant fait le rabattement)
///
/// # Retourne
/// * `Result<FundData>` - Série OHLC + dividendes + meta, ou erreur
///
/// CONCEPT RUST : #[instrument]
/// - Macro tracing qui ajoute automatiquement un span
/// - Tous les logs à l'intérieur auront le contexte symbol + period + interval
#[instrument(skip(period, interval), fields(period = %period.label(), interval = %interval.label()))]
pub async fn fetch_fund_data(
    symbol: &str,
    period: Period,
    interval: Interval,
) -> Result<FundData> {
    let url = build_yahoo_url(symbol, period, interval);
    debug!(url = %url, "Built Yahoo Finance API URL");

    // Ajout d'un User-Agent pour éviter le blocage par Yahoo
    debug!("Creating HTTP client");
    let client = reqwest::Client::builder()
        .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
        .build()
        .context("Échec de la création du client HTTP")?;

    debug!("Sending HTTP request to Yahoo Finance");
    let response = client
        .get(&url)
        .send()
        .await
        .context("Échec de la requête HTTP vers Yahoo Finance")?;

    let status = response.status();
    debug!(status = %status, "Received HTTP response");

    if !status.is_success() {
        error!(status = %status, "Yahoo Finance returned error status");
        anyhow::bail!("Yahoo Finance a retourné une erreur : HTTP {}", status);
    }

    // Parse la réponse JSON
    // CONCEPT RUST : Serde deserialization
    // - .json::<T>() désérialise automatiquement le JSON vers le type T
    debug!("Parsing JSON response");
    let yahoo_response: YahooResponse = response
        .json()
        .await
        .context("Échec du parsing JSON de la réponse Yahoo")?;

    debug!("Converting Yahoo response to FundData");
    let fund_data = parse_yahoo_response(yahoo_response, symbol, period, interval)?;

    info!(
        candles = fund_data.data.len(),
        dividends = fund_data.dividends.len(),
        "Successfully fetched fund data"
    );
    Ok(fund_data)
}

/// Construit l'URL de l'API Yahoo Finance
///
/// CONCEPT RUST : &str vs String
/// - Fonction prend &str (référence, pas d'allocation)
/// - Retourne String (owned, allouée)
///
/// events=div : demande aussi l'historique des dividendes
fn build_yahoo_url(symbol: &str, period: Period, interval: Interval) -> String {
    let now = chrono::Utc::now().timestamp();

    // Période Max : period1 = 0 (epoch) remonte tout l'historique
    let period1 = match period.to_days() {
        Some(days) => now - (days as i64 * 24 * 60 * 60),
        None => 0,
    };
    let period2 = now;

    format!(
        "https://query1.finance.yahoo.com/v8/finance/chart/{}?interval={}&period1={}&period2={}&events=div",
        symbol,
        interval.to_yahoo_string(),
        period1,
        period2
    )
}

/// Parse la réponse JSON de Yahoo et la convertit en FundData
///
/// CONCEPT RUST : Ownership et borrowing
/// - yahoo_response est "moved" (pas de &), on en devient propriétaire
/// - symbol est borrowed (&str), on ne le copie pas
fn parse_yahoo_response(
    yahoo_response: YahooResponse,
    symbol: &str,
    period: Period,
    interval: Interval,
) -> Result<FundData> {
    // Récupère le premier résultat
    let result = yahoo_response
        .chart
        .result
        .unwrap_or_default()
        .into_iter()
        .next()
        .context("Aucune donnée retournée par Yahoo Finance")?;

    // Métadonnées de cotation
    let info = QuoteInfo {
        price: result.meta.regular_market_price,
        previous_close: result.meta.chart_previous_close,
        fifty_two_week_high: result.meta.fifty_two_week_high,
        fifty_two_week_low: result.meta.fifty_two_week_low,
    };

    // Dividendes : map non ordonnée → historique trié
    let dividends = parse_dividends(result.events.as_ref());

    let mut ohlc_data = OHLCData::new(symbol.to_string(), period, interval);

    // Récupère les arrays de données
    let timestamps = result.timestamp.unwrap_or_default();
    debug!(timestamp_count = timestamps.len(), "Received timestamps from Yahoo");

    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .context("Pas de données OHLC dans la réponse")?;

    let opens = quote.open.unwrap_or_default();
    let highs = quote.high.unwrap_or_default();
    let lows = quote.low.unwrap_or_default();
    let closes = quote.close.unwrap_or_default();
    let volumes = quote.volume.unwrap_or_default();

    // CONCEPT RUST : Iterators et enumerate
    // - Yahoo retourne des arrays parallèles avec des trous (null)
    // - Une chandelle incomplète est sautée, pas inventée
    let mut skipped_count = 0;
    for (i, &timestamp) in timestamps.iter().enumerate() {
        let fields = (
            opens.get(i).and_then(|&v| v),
            highs.get(i).and_then(|&v| v),
            lows.get(i).and_then(|&v| v),
            closes.get(i).and_then(|&v| v),
        );

        let (open, high, low, close) = match fields {
            (Some(o), Some(h), Some(l), Some(c)) => (o, h, l, c),
            _ => {
                skipped_count += 1;
                continue; // Chandelle incomplète
            }
        };

        let volume = volumes.get(i).and_then(|&v| v).unwrap_or(0);

        let datetime = DateTime::from_timestamp(timestamp, 0)
            .context("Timestamp invalide")?;

        ohlc_data.add_candle(OHLC::new(datetime, open, high, low, close, volume));
    }

    if skipped_count > 0 {
        warn!(
            skipped = skipped_count,
            total = timestamps.len(),
            "Skipped candles with missing data"
        );
    }

    debug!(
        parsed = ohlc_data.len(),
        total = timestamps.len(),
        skipped = skipped_count,
        "Finished parsing OHLC data"
    );

    // Vérifie qu'on a au moins quelques données
    if ohlc_data.is_empty() {
        error!("No valid OHLC data found");
        anyhow::bail!(
            "Aucune donnée OHLC valide trouvée pour {} (période {} / intervalle {})",
            symbol,
            period.label(),
            interval.label()
        );
    }

    Ok(FundData {
        data: ohlc_data,
        dividends,
        info,
    })
}

/// Extrait l'historique des dividendes des events (absent hors events=div)
fn parse_dividends(events: Option<&Events>) -> DividendHistory {
    let Some(dividends_map) = events.and_then(|e| e.dividends.as_ref()) else {
        return DividendHistory::default();
    };

    let entries: Vec<Dividend> = dividends_map
        .values()
        .filter_map(|event| {
            let date = DateTime::from_timestamp(event.date, 0)?;
            Some(Dividend::new(date, event.amount))
        })
        .collect();

    DividendHistory::from_entries(entries)
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_yahoo_url() {
        let url = build_yahoo_url("VOO", Period::OneYear, Interval::D1);
        assert!(url.contains("VOO"));
        assert!(url.contains("interval=1d"));
        assert!(url.contains("events=div"));
        assert!(url.contains("yahoo.com"));
    }

    #[test]
    fn test_build_yahoo_url_max_period() {
        // Max : period1=0 pour remonter tout l'historique
        let url = build_yahoo_url("JEPI", Period::Max, Interval::W1);
        assert!(url.contains("interval=1wk"));
        assert!(url.contains("period1=0"));
    }

    #[test]
    fn test_parse_yahoo_response_fixture() {
        // Réponse minimale mais représentative : un trou (null) dans open,
        // un dividende, des métadonnées
        let json = r#"{
            "chart": {
                "result": [{
                    "meta": {
                        "symbol": "VOO",
                        "regularMarketPrice": 412.5,
                        "chartPreviousClose": 410.0,
                        "fiftyTwoWeekHigh": 440.0,
                        "fiftyTwoWeekLow": 360.0
                    },
                    "timestamp": [1700000000, 1700086400, 1700172800],
                    "indicators": {
                        "quote": [{
                            "open":   [400.0, null, 408.0],
                            "high":   [405.0, 407.0, 413.0],
                            "low":    [398.0, 401.0, 406.0],
                            "close":  [404.0, 406.0, 412.5],
                            "volume": [1000, 1100, null]
                        }]
                    },
                    "events": {
                        "dividends": {
                            "1700000000": { "amount": 1.55, "date": 1700000000 }
                        }
                    }
                }],
                "error": null
            }
        }"#;

        let response: YahooResponse = serde_json::from_str(json).unwrap();
        let fund_data =
            parse_yahoo_response(response, "VOO", Period::OneMonth, Interval::D1).unwrap();

        // La chandelle avec open=null est sautée
        assert_eq!(fund_data.data.len(), 2);
        assert_eq!(fund_data.data.symbol, "VOO");
        // Volume null → 0, pas de skip
        assert_eq!(fund_data.data.last().unwrap().volume, 0);

        assert_eq!(fund_data.dividends.len(), 1);
        assert!((fund_data.dividends.entries[0].amount - 1.55).abs() < 1e-9);

        assert_eq!(fund_data.info.price, Some(412.5));
        assert_eq!(fund_data.info.previous_close, Some(410.0));
    }

    #[test]
    fn test_parse_yahoo_response_empty_bails() {
        let json = r#"{
            "chart": {
                "result": [{
                    "meta": { "symbol": "VOO" },
                    "timestamp": [],
                    "indicators": { "quote": [{ }] }
                }],
                "error": null
            }
        }"#;

        let response: YahooResponse = serde_json::from_str(json).unwrap();
        let result = parse_yahoo_response(response, "VOO", Period::OneDay, Interval::M1);
        assert!(result.is_err());
    }

    // Test async nécessite tokio test runtime
    // CONCEPT RUST : #[tokio::test]
    // - Macro qui setup un runtime tokio pour le test
    // - Permet d'utiliser .await dans les tests
    #[tokio::test]
    async fn test_fetch_fund_data() {
        // Test avec un vrai appel API (peut échouer si pas de connexion)
        let result = fetch_fund_data("VOO", Period::OneMonth, Interval::D1).await;

        // On vérifie juste que l'appel fonctionne
        // (on ne vérifie pas les données car elles changent)
        match result {
            Ok(fund_data) => {
                assert_eq!(fund_data.data.symbol, "VOO");
                assert!(!fund_data.data.is_empty());
                println!("✓ Récupéré {} chandelles pour VOO", fund_data.data.len());
            }
            Err(e) => {
                println!("⚠ Test skippé (pas de connexion?) : {}", e);
            }
        }
    }
}

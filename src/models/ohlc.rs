// ============================================================================
// Structures : OHLC, Period, Interval
// ============================================================================
// Représente les données d'une chandelle japonaise (candlestick) et les
// paramètres de requête (période affichée + granularité des chandelles)
//
// CONCEPTS RUST :
// 1. DateTime<Utc> : type de chrono pour dates avec timezone UTC
// 2. f64 : floating point 64 bits pour les prix (précision suffisante)
// 3. u64 : unsigned 64 bits pour le volume (toujours positif)
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Période de temps couverte par les données (combien de jours en arrière)
///
/// CONCEPT : Period vs Interval
/// - Period : profondeur de l'historique demandé (1 jour → tout l'historique)
/// - Interval : granularité des chandelles (1m, 1h, 1d, etc.)
/// - Les deux sont choisis séparément par l'utilisateur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    /// 1 jour
    OneDay,
    /// 5 jours (semaine de bourse)
    FiveDays,
    /// 1 mois
    OneMonth,
    /// 3 mois
    ThreeMonths,
    /// 6 mois
    SixMonths,
    /// 1 an
    OneYear,
    /// 2 ans
    TwoYears,
    /// 5 ans
    FiveYears,
    /// 10 ans
    TenYears,
    /// Tout l'historique disponible
    Max,
}

impl Period {
    /// Retourne le nombre de jours correspondant (None pour Max)
    ///
    /// CONCEPT RUST : Option<u32>
    /// - Max n'a pas de borne : on remonte au début de l'historique
    /// - Plutôt qu'une valeur magique (u32::MAX), on retourne None
    pub fn to_days(&self) -> Option<u32> {
        match self {
            Period::OneDay => Some(1),
            Period::FiveDays => Some(5),
            Period::OneMonth => Some(30),
            Period::ThreeMonths => Some(90),
            Period::SixMonths => Some(180),
            Period::OneYear => Some(365),
            Period::TwoYears => Some(730),
            Period::FiveYears => Some(1825),
            Period::TenYears => Some(3650),
            Period::Max => None,
        }
    }

    /// Retourne le label court pour l'affichage (format Yahoo : 1d, 1mo, etc.)
    pub fn label(&self) -> &'static str {
        match self {
            Period::OneDay => "1d",
            Period::FiveDays => "5d",
            Period::OneMonth => "1mo",
            Period::ThreeMonths => "3mo",
            Period::SixMonths => "6mo",
            Period::OneYear => "1y",
            Period::TwoYears => "2y",
            Period::FiveYears => "5y",
            Period::TenYears => "10y",
            Period::Max => "max",
        }
    }

    /// Retourne la période suivante (cycle)
    pub fn next(&self) -> Period {
        match self {
            Period::OneDay => Period::FiveDays,
            Period::FiveDays => Period::OneMonth,
            Period::OneMonth => Period::ThreeMonths,
            Period::ThreeMonths => Period::SixMonths,
            Period::SixMonths => Period::OneYear,
            Period::OneYear => Period::TwoYears,
            Period::TwoYears => Period::FiveYears,
            Period::FiveYears => Period::TenYears,
            Period::TenYears => Period::Max,
            Period::Max => Period::OneDay, // Boucle
        }
    }

    /// Retourne la période précédente (cycle)
    pub fn previous(&self) -> Period {
        match self {
            Period::OneDay => Period::Max, // Boucle
            Period::FiveDays => Period::OneDay,
            Period::OneMonth => Period::FiveDays,
            Period::ThreeMonths => Period::OneMonth,
            Period::SixMonths => Period::ThreeMonths,
            Period::OneYear => Period::SixMonths,
            Period::TwoYears => Period::OneYear,
            Period::FiveYears => Period::TwoYears,
            Period::TenYears => Period::FiveYears,
            Period::Max => Period::TenYears,
        }
    }
}

impl Default for Period {
    /// Période par défaut : 1 an (bon équilibre historique/lisibilité)
    fn default() -> Self {
        Period::OneYear
    }
}

/// Intervalle de temps entre les chandelles (granularité)
///
/// Limitations Yahoo Finance :
/// - 1m : période max 7 jours
/// - 5m / 15m / 30m : période max 60 jours
/// - 1h : période max 730 jours
/// - 1d / 1wk / 1mo : toutes les périodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interval {
    /// 1 minute
    M1,
    /// 5 minutes
    M5,
    /// 15 minutes
    M15,
    /// 30 minutes
    M30,
    /// 1 heure
    H1,
    /// 1 jour (daily)
    D1,
    /// 1 semaine (weekly)
    W1,
    /// 1 mois (monthly)
    Mo1,
}

impl Interval {
    /// Convertit l'intervalle en string pour l'API Yahoo Finance
    ///
    /// CONCEPT RUST : &'static str
    /// - Retourne une string littérale (dans le binaire)
    /// - Lifetime 'static : vit pendant toute l'exécution
    /// - Pas d'allocation, très efficace
    pub fn to_yahoo_string(&self) -> &'static str {
        match self {
            Interval::M1 => "1m",
            Interval::M5 => "5m",
            Interval::M15 => "15m",
            Interval::M30 => "30m",
            Interval::H1 => "1h",
            Interval::D1 => "1d",
            Interval::W1 => "1wk",
            Interval::Mo1 => "1mo",
        }
    }

    /// Retourne le label court pour l'affichage
    pub fn label(&self) -> &'static str {
        match self {
            Interval::M1 => "1m",
            Interval::M5 => "5m",
            Interval::M15 => "15m",
            Interval::M30 => "30m",
            Interval::H1 => "1h",
            Interval::D1 => "1d",
            Interval::W1 => "1w",
            Interval::Mo1 => "1mo",
        }
    }

    /// Période maximale supportée par l'intervalle, en jours (None = illimité)
    pub fn max_period_days(&self) -> Option<u32> {
        match self {
            Interval::M1 => Some(7),
            Interval::M5 | Interval::M15 | Interval::M30 => Some(60),
            Interval::H1 => Some(730),
            Interval::D1 | Interval::W1 | Interval::Mo1 => None,
        }
    }

    /// Vérifie si l'intervalle est compatible avec la période demandée
    pub fn supports(&self, period: Period) -> bool {
        match (self.max_period_days(), period.to_days()) {
            (None, _) => true,        // Intervalle sans limite
            (Some(_), None) => false, // Période Max avec intervalle borné
            (Some(max), Some(days)) => days <= max,
        }
    }

    /// Sélectionne automatiquement le meilleur intervalle pour une période
    ///
    /// Objectif : assez de chandelles pour un graphique lisible, sans
    /// dépasser les limites de l'API
    pub fn auto_for(period: Period) -> Interval {
        match period {
            Period::OneDay => Interval::M5,
            Period::FiveDays => Interval::H1,
            Period::OneMonth
            | Period::ThreeMonths
            | Period::SixMonths
            | Period::OneYear
            | Period::TwoYears => Interval::D1,
            Period::FiveYears | Period::TenYears | Period::Max => Interval::W1,
        }
    }

    /// Rabat l'intervalle sur un choix valide pour la période donnée
    ///
    /// CONCEPT : Dégradation gracieuse plutôt qu'erreur
    /// - Une combinaison invalide (ex: 1m sur 1 an) n'est pas une faute
    ///   bloquante : on bascule sur l'auto-sélection
    /// - L'appelant compare le retour à self pour signaler la substitution
    pub fn clamp_for(&self, period: Period) -> Interval {
        if self.supports(period) {
            *self
        } else {
            Interval::auto_for(period)
        }
    }

    /// Formats pour l'axe X : (format chrono, intraday ?)
    ///
    /// - Intraday : label horaire (HH:MM), ligne de dates en complément
    /// - Long terme : label de date uniquement
    pub fn x_axis_format(&self) -> (&'static str, bool) {
        match self {
            Interval::M1 | Interval::M5 | Interval::M15 | Interval::M30 | Interval::H1 => {
                ("%H:%M", true)
            }
            Interval::D1 => ("%d/%m", false),
            Interval::W1 => ("%d/%m", false),
            Interval::Mo1 => ("%Y", false),
        }
    }

    /// Retourne true si l'intervalle est intraday (plusieurs chandelles par jour)
    pub fn is_intraday(&self) -> bool {
        matches!(
            self,
            Interval::M1 | Interval::M5 | Interval::M15 | Interval::M30 | Interval::H1
        )
    }

    /// Retourne l'intervalle suivant (cycle)
    pub fn next(&self) -> Interval {
        match self {
            Interval::M1 => Interval::M5,
            Interval::M5 => Interval::M15,
            Interval::M15 => Interval::M30,
            Interval::M30 => Interval::H1,
            Interval::H1 => Interval::D1,
            Interval::D1 => Interval::W1,
            Interval::W1 => Interval::Mo1,
            Interval::Mo1 => Interval::M1, // Boucle
        }
    }

    /// Retourne l'intervalle précédent (cycle)
    pub fn previous(&self) -> Interval {
        match self {
            Interval::M1 => Interval::Mo1, // Boucle
            Interval::M5 => Interval::M1,
            Interval::M15 => Interval::M5,
            Interval::M30 => Interval::M15,
            Interval::H1 => Interval::M30,
            Interval::D1 => Interval::H1,
            Interval::W1 => Interval::D1,
            Interval::Mo1 => Interval::W1,
        }
    }
}

impl Default for Interval {
    /// Intervalle par défaut : 1 jour (le plus courant, valide partout)
    fn default() -> Self {
        Interval::D1
    }
}

/// Une chandelle japonaise (candlestick)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OHLC {
    /// Timestamp de la chandelle
    pub timestamp: DateTime<Utc>,

    /// Prix d'ouverture (Open)
    pub open: f64,

    /// Prix le plus haut (High)
    pub high: f64,

    /// Prix le plus bas (Low)
    pub low: f64,

    /// Prix de clôture (Close)
    pub close: f64,

    /// Volume échangé
    pub volume: u64,
}

impl OHLC {
    /// Constructeur : crée une nouvelle chandelle OHLC
    pub fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Vérifie si la chandelle est haussière (bullish)
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    /// Vérifie si la chandelle est baissière (bearish)
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Variation en pourcentage depuis l'ouverture
    pub fn change_percent(&self) -> f64 {
        if self.open == 0.0 {
            0.0
        } else {
            ((self.close - self.open) / self.open) * 100.0
        }
    }
}

/// Collection de chandelles OHLC pour un symbole
///
/// CONCEPT RUST : Ownership
/// - OHLCData possède le Vec, le Vec possède tous les OHLC
/// - Quand OHLCData est drop, tout est libéré automatiquement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OHLCData {
    /// Symbole du fonds (ex: "VOO")
    pub symbol: String,

    /// Période couverte par les données
    pub period: Period,

    /// Intervalle entre les chandelles
    pub interval: Interval,

    /// Liste des chandelles, triées par timestamp croissant
    pub candles: Vec<OHLC>,
}

impl OHLCData {
    /// Crée une nouvelle collection OHLC vide
    pub fn new(symbol: String, period: Period, interval: Interval) -> Self {
        Self {
            symbol,
            period,
            interval,
            candles: Vec::new(),
        }
    }

    /// Ajoute une chandelle
    pub fn add_candle(&mut self, candle: OHLC) {
        self.candles.push(candle);
    }

    /// Retourne le nombre de chandelles
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// Vérifie si la collection est vide
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Retourne la chandelle la plus récente
    pub fn last(&self) -> Option<&OHLC> {
        self.candles.last()
    }

    /// Retourne les prix de clôture dans l'ordre chronologique
    ///
    /// Les indicateurs techniques (SMA, EMA, Bollinger) travaillent tous
    /// sur la série des clôtures
    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.close).collect()
    }

    /// Calcule le prix minimum sur toute la période (sur les bas)
    pub fn min_price(&self) -> Option<f64> {
        self.candles
            .iter()
            .map(|c| c.low)
            .min_by(|a, b| a.partial_cmp(b).unwrap())
    }

    /// Calcule le prix maximum sur toute la période (sur les hauts)
    pub fn max_price(&self) -> Option<f64> {
        self.candles
            .iter()
            .map(|c| c.high)
            .max_by(|a, b| a.partial_cmp(b).unwrap())
    }

    /// Rendement de la période : variation entre la première et la dernière
    /// clôture, en pourcentage
    pub fn period_return_percent(&self) -> Option<f64> {
        let first = self.candles.first()?.close;
        let last = self.candles.last()?.close;
        if first == 0.0 {
            return None;
        }
        Some(((last - first) / first) * 100.0)
    }

    /// Calcule la variation journalière en pourcentage
    ///
    /// CONCEPT : Daily change calculation
    /// - Pour intervalles D1/W1/Mo1 : variation de la dernière chandelle
    /// - Pour intervalles intraday : variation du dernier jour avec données
    /// - Gère les marchés fermés (utilise la dernière journée disponible)
    pub fn daily_change_percent(&self) -> Option<f64> {
        if self.candles.is_empty() {
            return None;
        }

        // Pour les intervalles non-intraday, la chandelle couvre déjà au
        // moins une journée complète
        if !self.interval.is_intraday() {
            return self.last().map(|c| c.change_percent());
        }

        // Pour les intervalles intraday : toutes les chandelles du dernier
        // jour disponible
        let last_candle = self.last()?;
        let last_date = last_candle.timestamp.date_naive();

        let day_candles: Vec<&OHLC> = self
            .candles
            .iter()
            .filter(|c| c.timestamp.date_naive() == last_date)
            .collect();

        // Open de la première chandelle du jour, Close de la dernière
        let day_open = day_candles.first()?.open;
        let day_close = day_candles.last()?.close;

        if day_open == 0.0 {
            return None;
        }

        Some(((day_close - day_open) / day_open) * 100.0)
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_period_to_days() {
        assert_eq!(Period::OneDay.to_days(), Some(1));
        assert_eq!(Period::OneYear.to_days(), Some(365));
        assert_eq!(Period::TenYears.to_days(), Some(3650));
        assert_eq!(Period::Max.to_days(), None);
    }

    #[test]
    fn test_period_label() {
        assert_eq!(Period::OneMonth.label(), "1mo");
        assert_eq!(Period::OneYear.label(), "1y");
        assert_eq!(Period::Max.label(), "max");
    }

    #[test]
    fn test_period_cycle() {
        assert_eq!(Period::OneDay.next(), Period::FiveDays);
        assert_eq!(Period::Max.next(), Period::OneDay); // Boucle
        assert_eq!(Period::OneDay.previous(), Period::Max); // Boucle
    }

    #[test]
    fn test_interval_yahoo_string() {
        assert_eq!(Interval::M30.to_yahoo_string(), "30m");
        assert_eq!(Interval::H1.to_yahoo_string(), "1h");
        assert_eq!(Interval::D1.to_yahoo_string(), "1d");
        assert_eq!(Interval::W1.to_yahoo_string(), "1wk");
        assert_eq!(Interval::Mo1.to_yahoo_string(), "1mo");
    }

    #[test]
    fn test_interval_supports() {
        // 1m : max 7 jours
        assert!(Interval::M1.supports(Period::OneDay));
        assert!(Interval::M1.supports(Period::FiveDays));
        assert!(!Interval::M1.supports(Period::OneMonth));

        // 30m : max 60 jours
        assert!(Interval::M30.supports(Period::OneMonth));
        assert!(!Interval::M30.supports(Period::OneYear));

        // 1h : max 730 jours
        assert!(Interval::H1.supports(Period::TwoYears));
        assert!(!Interval::H1.supports(Period::FiveYears));
        assert!(!Interval::H1.supports(Period::Max));

        // 1d : illimité
        assert!(Interval::D1.supports(Period::Max));
    }

    #[test]
    fn test_interval_auto_for() {
        assert_eq!(Interval::auto_for(Period::OneDay), Interval::M5);
        assert_eq!(Interval::auto_for(Period::FiveDays), Interval::H1);
        assert_eq!(Interval::auto_for(Period::OneYear), Interval::D1);
        assert_eq!(Interval::auto_for(Period::Max), Interval::W1);
    }

    #[test]
    fn test_interval_clamp_for() {
        // Combinaison valide : intervalle inchangé
        assert_eq!(Interval::D1.clamp_for(Period::OneYear), Interval::D1);
        assert_eq!(Interval::M5.clamp_for(Period::OneMonth), Interval::M5);

        // Combinaison invalide : bascule sur l'auto-sélection
        assert_eq!(Interval::M1.clamp_for(Period::OneYear), Interval::D1);
        assert_eq!(Interval::H1.clamp_for(Period::Max), Interval::W1);
    }

    #[test]
    fn test_interval_cycle() {
        assert_eq!(Interval::M1.next(), Interval::M5);
        assert_eq!(Interval::Mo1.next(), Interval::M1); // Boucle
        assert_eq!(Interval::M1.previous(), Interval::Mo1); // Boucle
    }

    #[test]
    fn test_ohlc_bullish() {
        let ohlc = OHLC::new(Utc::now(), 100.0, 110.0, 95.0, 105.0, 1000);
        assert!(ohlc.is_bullish());
        assert!(!ohlc.is_bearish());
    }

    #[test]
    fn test_ohlc_bearish() {
        let ohlc = OHLC::new(Utc::now(), 100.0, 105.0, 90.0, 95.0, 1000);
        assert!(ohlc.is_bearish());
        assert!(!ohlc.is_bullish());
    }

    #[test]
    fn test_ohlc_data_stats() {
        let mut data = OHLCData::new("VOO".to_string(), Period::OneMonth, Interval::D1);

        assert!(data.is_empty());
        assert!(data.min_price().is_none());

        data.add_candle(OHLC::new(Utc::now(), 100.0, 110.0, 95.0, 105.0, 1000));
        data.add_candle(OHLC::new(Utc::now(), 105.0, 115.0, 100.0, 110.0, 1200));

        assert_eq!(data.len(), 2);
        assert_eq!(data.min_price(), Some(95.0));
        assert_eq!(data.max_price(), Some(115.0));
        assert_eq!(data.closes(), vec![105.0, 110.0]);

        // Rendement : (110 - 105) / 105
        let ret = data.period_return_percent().unwrap();
        assert!((ret - 4.761904).abs() < 0.001);
    }

    #[test]
    fn test_daily_change_percent_d1() {
        // Pour D1, chaque chandelle = 1 journée
        let mut data = OHLCData::new("VOO".to_string(), Period::OneMonth, Interval::D1);

        // Chandelle avec open=100 et close=105 (hausse de 5%)
        data.add_candle(OHLC::new(Utc::now(), 100.0, 110.0, 95.0, 105.0, 1000));

        assert_eq!(data.daily_change_percent(), Some(5.0));
    }

    #[test]
    fn test_daily_change_percent_intraday() {
        use chrono::{Duration, TimeZone};

        // Pour M30, plusieurs chandelles dans la journée
        let mut data = OHLCData::new("VOO".to_string(), Period::FiveDays, Interval::M30);

        let today = Utc::now().date_naive();
        let base_time = Utc.from_utc_datetime(&today.and_hms_opt(9, 0, 0).unwrap());

        data.add_candle(OHLC::new(base_time, 100.0, 102.0, 99.0, 101.0, 1000));
        data.add_candle(OHLC::new(
            base_time + Duration::minutes(30),
            101.0,
            103.0,
            100.0,
            102.0,
            1100,
        ));
        data.add_candle(OHLC::new(
            base_time + Duration::hours(1),
            102.0,
            105.0,
            101.0,
            105.0,
            1200,
        ));

        // Variation journalière = (105 - 100) / 100 = 5%
        assert_eq!(data.daily_change_percent(), Some(5.0));
    }
}

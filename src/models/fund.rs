// ============================================================================
// Structures : Fund, QuoteInfo, FundItem
// ============================================================================
// Les deux ETF suivis par l'application et leur état chargé
//
// CONCEPTS RUST :
// 1. Enum à univers fermé : seulement deux fonds, connus à la compilation
// 2. Composition : FundItem contient OHLCData + dividendes + métadonnées
// 3. Option : gérer les données pas encore chargées (ou en erreur)
// ============================================================================

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::{AlertRule, DividendHistory, OHLCData, OHLC};

/// Les deux fonds suivis
///
/// CONCEPT RUST : Enum fieldless + Copy
/// - L'univers est fixe (VOO et JEPI), pas besoin de String
/// - Copy : se passe par valeur sans coût
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fund {
    /// Vanguard S&P 500 ETF
    Voo,
    /// JPMorgan Equity Premium Income ETF
    Jepi,
}

impl Fund {
    /// Symbole boursier du fonds
    pub fn symbol(&self) -> &'static str {
        match self {
            Fund::Voo => "VOO",
            Fund::Jepi => "JEPI",
        }
    }

    /// Nom complet du fonds
    pub fn name(&self) -> &'static str {
        match self {
            Fund::Voo => "Vanguard S&P 500 ETF",
            Fund::Jepi => "JPMorgan Equity Premium Income ETF",
        }
    }

    /// Description courte pour les menus
    pub fn description(&self) -> &'static str {
        match self {
            Fund::Voo => "Réplique l'indice S&P 500",
            Fund::Jepi => "ETF de revenu (covered calls)",
        }
    }

    /// Retourne les deux fonds dans l'ordre d'affichage
    pub fn all() -> [Fund; 2] {
        [Fund::Voo, Fund::Jepi]
    }
}

/// Métadonnées de cotation extraites de la réponse de l'API
///
/// CONCEPT : Meta vs série
/// - La série OHLC donne l'historique ; la meta donne l'instantané
///   (dernier prix connu, clôture précédente, bornes 52 semaines)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteInfo {
    /// Dernier prix de marché connu
    pub price: Option<f64>,

    /// Clôture de la séance précédente
    pub previous_close: Option<f64>,

    /// Plus haut sur 52 semaines
    pub fifty_two_week_high: Option<f64>,

    /// Plus bas sur 52 semaines
    pub fifty_two_week_low: Option<f64>,
}

impl QuoteInfo {
    /// Variation absolue depuis la clôture précédente
    pub fn change(&self) -> Option<f64> {
        Some(self.price? - self.previous_close?)
    }

    /// Variation en pourcentage depuis la clôture précédente
    pub fn change_percent(&self) -> Option<f64> {
        let prev = self.previous_close?;
        if prev == 0.0 {
            return None;
        }
        Some((self.price? - prev) / prev * 100.0)
    }
}

/// Un fonds avec ses données chargées
///
/// CONCEPT RUST : Option pour les données optionnelles
/// - Some(data) : données disponibles
/// - None : pas encore chargées ou erreur de chargement
#[derive(Debug, Clone)]
pub struct FundItem {
    /// Le fonds (VOO ou JEPI)
    pub fund: Fund,

    /// Série OHLC chargée
    pub data: Option<OHLCData>,

    /// Historique des dividendes sur la période chargée
    pub dividends: DividendHistory,

    /// Métadonnées de cotation
    pub info: Option<QuoteInfo>,

    /// Règle d'alerte de prix configurée par l'utilisateur
    pub alert: AlertRule,
}

impl FundItem {
    /// Crée un item sans données (en attente de chargement)
    pub fn new(fund: Fund) -> Self {
        Self {
            fund,
            data: None,
            dividends: DividendHistory::default(),
            info: None,
            alert: AlertRule::default(),
        }
    }

    /// Symbole du fonds (raccourci)
    pub fn symbol(&self) -> &'static str {
        self.fund.symbol()
    }

    /// Remplace les données après un chargement réussi
    ///
    /// Réévalue aussi la règle d'alerte contre la nouvelle clôture
    pub fn update_data(&mut self, data: OHLCData, dividends: DividendHistory, info: QuoteInfo) {
        if let Some(last) = data.last() {
            self.alert.check(last.close);
        }
        self.data = Some(data);
        self.dividends = dividends;
        self.info = Some(info);
    }

    /// Retourne le prix actuel
    ///
    /// CONCEPT RUST : Option chaining avec ?
    /// - Préfère le prix de marché de la meta (plus frais)
    /// - Sinon, close de la dernière chandelle
    pub fn current_price(&self) -> Option<f64> {
        if let Some(price) = self.info.as_ref().and_then(|i| i.price) {
            return Some(price);
        }
        let data = self.data.as_ref()?;
        let last = data.last()?;
        Some(last.close)
    }

    /// Variation journalière en pourcentage
    pub fn change_percent(&self) -> Option<f64> {
        // La meta donne la variation vs clôture précédente si disponible
        if let Some(change) = self.info.as_ref().and_then(|i| i.change_percent()) {
            return Some(change);
        }
        self.data.as_ref().and_then(|d| d.daily_change_percent())
    }

    /// Rendement trailing 12 mois, en pourcentage
    pub fn trailing_yield_percent(&self) -> Option<f64> {
        let price = self.current_price()?;
        self.dividends.trailing_yield_percent(price, Utc::now())
    }

    /// Retourne la dernière chandelle
    pub fn last_ohlc(&self) -> Option<&OHLC> {
        self.data.as_ref()?.last()
    }

    /// Vérifie si les données sont chargées
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// Retourne true si le fonds est en hausse sur la journée
    pub fn is_positive(&self) -> bool {
        self.change_percent().map(|c| c >= 0.0).unwrap_or(false)
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Interval, Period};
    use chrono::Utc;

    fn sample_data(closes: &[f64]) -> OHLCData {
        let mut data = OHLCData::new("VOO".to_string(), Period::OneMonth, Interval::D1);
        for &close in closes {
            data.add_candle(OHLC::new(Utc::now(), close, close + 1.0, close - 1.0, close, 1000));
        }
        data
    }

    #[test]
    fn test_fund_identity() {
        assert_eq!(Fund::Voo.symbol(), "VOO");
        assert_eq!(Fund::Jepi.symbol(), "JEPI");
        assert_eq!(Fund::all().len(), 2);
    }

    #[test]
    fn test_fund_item_without_data() {
        let item = FundItem::new(Fund::Voo);
        assert!(!item.has_data());
        assert!(item.current_price().is_none());
        assert!(item.change_percent().is_none());
    }

    #[test]
    fn test_current_price_prefers_meta() {
        let mut item = FundItem::new(Fund::Voo);
        item.update_data(
            sample_data(&[100.0, 105.0]),
            DividendHistory::default(),
            QuoteInfo {
                price: Some(106.5),
                previous_close: Some(105.0),
                ..Default::default()
            },
        );

        // La meta (106.5) prime sur la dernière clôture (105.0)
        assert_eq!(item.current_price(), Some(106.5));
        assert!(item.is_positive());
    }

    #[test]
    fn test_current_price_falls_back_to_close() {
        let mut item = FundItem::new(Fund::Jepi);
        item.update_data(
            sample_data(&[55.0, 56.0]),
            DividendHistory::default(),
            QuoteInfo::default(),
        );

        assert_eq!(item.current_price(), Some(56.0));
    }

    #[test]
    fn test_quote_info_change_percent() {
        let info = QuoteInfo {
            price: Some(102.0),
            previous_close: Some(100.0),
            ..Default::default()
        };
        assert_eq!(info.change(), Some(2.0));
        assert!((info.change_percent().unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_update_data_evaluates_alert() {
        let mut item = FundItem::new(Fund::Voo);
        item.alert.set_above(104.0);

        item.update_data(
            sample_data(&[100.0, 105.0]),
            DividendHistory::default(),
            QuoteInfo::default(),
        );

        assert!(item.alert.triggered.is_some());
    }
}

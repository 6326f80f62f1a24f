// ============================================================================
// Structures : Dividend, DividendHistory
// ============================================================================
// Historique des dividendes versés par un fonds
//
// CONCEPT : Trailing yield
// - Le rendement "trailing" = somme des dividendes des 12 derniers mois
//   divisée par le prix actuel
// - C'est la métrique clé pour comparer VOO (croissance) et JEPI (revenu)
// ============================================================================

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Un versement de dividende
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dividend {
    /// Date du versement
    pub date: DateTime<Utc>,

    /// Montant par part, en dollars
    pub amount: f64,
}

impl Dividend {
    pub fn new(date: DateTime<Utc>, amount: f64) -> Self {
        Self { date, amount }
    }
}

/// Historique des dividendes d'un fonds, trié par date croissante
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DividendHistory {
    pub entries: Vec<Dividend>,
}

impl DividendHistory {
    /// Construit l'historique depuis une liste non triée
    ///
    /// CONCEPT RUST : sort_by avec closure
    /// - L'API Yahoo retourne les dividendes dans une map non ordonnée
    /// - On trie par date pour garantir l'ordre chronologique partout ailleurs
    pub fn from_entries(mut entries: Vec<Dividend>) -> Self {
        entries.sort_by(|a, b| a.date.cmp(&b.date));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retourne les N derniers versements (les plus récents)
    pub fn last_n(&self, n: usize) -> &[Dividend] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Somme de tous les versements de l'historique
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|d| d.amount).sum()
    }

    /// Montant moyen par versement (None si historique vide)
    pub fn average(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.total() / self.entries.len() as f64)
    }

    /// Somme des versements des 12 derniers mois
    pub fn trailing_12m_total(&self, now: DateTime<Utc>) -> f64 {
        let cutoff = now - Duration::days(365);
        self.entries
            .iter()
            .filter(|d| d.date >= cutoff)
            .map(|d| d.amount)
            .sum()
    }

    /// Rendement trailing : dividendes 12 mois / prix actuel, en pourcentage
    ///
    /// CONCEPT RUST : Guard clause
    /// - Un prix nul ou un historique vide n'a pas de rendement défini
    pub fn trailing_yield_percent(&self, price: f64, now: DateTime<Utc>) -> Option<f64> {
        if price <= 0.0 || self.entries.is_empty() {
            return None;
        }
        Some(self.trailing_12m_total(now) / price * 100.0)
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> DividendHistory {
        let now = Utc::now();
        // Volontairement dans le désordre : from_entries doit trier
        DividendHistory::from_entries(vec![
            Dividend::new(now - Duration::days(30), 1.50),
            Dividend::new(now - Duration::days(500), 1.00),
            Dividend::new(now - Duration::days(120), 1.40),
            Dividend::new(now - Duration::days(210), 1.30),
        ])
    }

    #[test]
    fn test_from_entries_sorts_by_date() {
        let h = history();
        let dates: Vec<_> = h.entries.iter().map(|d| d.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_last_n() {
        let h = history();
        assert_eq!(h.last_n(2).len(), 2);
        // Le dernier élément est le versement le plus récent (1.50)
        assert_eq!(h.last_n(2)[1].amount, 1.50);
        // Demander plus que disponible retourne tout
        assert_eq!(h.last_n(10).len(), 4);
    }

    #[test]
    fn test_total_and_average() {
        let h = history();
        assert!((h.total() - 5.20).abs() < 1e-9);
        assert!((h.average().unwrap() - 1.30).abs() < 1e-9);

        let empty = DividendHistory::default();
        assert_eq!(empty.total(), 0.0);
        assert!(empty.average().is_none());
    }

    #[test]
    fn test_trailing_12m_total() {
        let h = history();
        let now = Utc::now();
        // Le versement à -500 jours est exclu : 1.50 + 1.40 + 1.30
        assert!((h.trailing_12m_total(now) - 4.20).abs() < 1e-9);
    }

    #[test]
    fn test_trailing_yield_percent() {
        let h = history();
        let now = Utc::now();
        // 4.20 de dividendes sur un prix de 100 → 4.2%
        let y = h.trailing_yield_percent(100.0, now).unwrap();
        assert!((y - 4.2).abs() < 1e-9);

        // Prix invalide
        assert!(h.trailing_yield_percent(0.0, now).is_none());
    }
}

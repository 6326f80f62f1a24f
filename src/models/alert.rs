// ============================================================================
// Structures : AlertRule, AlertTrigger
// ============================================================================
// Alertes de prix : un seuil haut et/ou bas par fonds
//
// CONCEPT : Évaluation à chaque rafraîchissement
// - Pas de tâche de fond dédiée : la règle est réévaluée quand de nouvelles
//   données arrivent du worker
// - Un seuil franchi reste "déclenché" tant que l'utilisateur ne l'a pas
//   effacé (état sticky, sinon l'alerte disparaîtrait au refresh suivant)
// ============================================================================

use serde::{Deserialize, Serialize};

/// Côté du seuil franchi
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertTrigger {
    /// Le prix est passé au-dessus du seuil haut
    Above,
    /// Le prix est passé en-dessous du seuil bas
    Below,
}

/// Règle d'alerte de prix pour un fonds
///
/// CONCEPT RUST : Option pour les seuils
/// - None : pas de seuil configuré de ce côté
/// - Some(prix) : seuil actif
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertRule {
    /// Alerte si le prix monte au-dessus de cette valeur
    pub above: Option<f64>,

    /// Alerte si le prix descend en-dessous de cette valeur
    pub below: Option<f64>,

    /// Dernier déclenchement (sticky jusqu'à effacement)
    pub triggered: Option<AlertTrigger>,
}

impl AlertRule {
    /// Vérifie si au moins un seuil est configuré
    pub fn is_armed(&self) -> bool {
        self.above.is_some() || self.below.is_some()
    }

    /// Configure le seuil haut (et réarme l'alerte)
    pub fn set_above(&mut self, price: f64) {
        self.above = Some(price);
        self.triggered = None;
    }

    /// Configure le seuil bas (et réarme l'alerte)
    pub fn set_below(&mut self, price: f64) {
        self.below = Some(price);
        self.triggered = None;
    }

    /// Efface tous les seuils et l'état déclenché
    pub fn clear(&mut self) {
        self.above = None;
        self.below = None;
        self.triggered = None;
    }

    /// Évalue la règle contre la dernière clôture
    ///
    /// Retourne le côté nouvellement franchi, et mémorise l'état.
    /// Le seuil haut est prioritaire si les deux sont franchis (seuils
    /// incohérents saisis par l'utilisateur).
    pub fn check(&mut self, close: f64) -> Option<AlertTrigger> {
        let hit = match (self.above, self.below) {
            (Some(above), _) if close >= above => Some(AlertTrigger::Above),
            (_, Some(below)) if close <= below => Some(AlertTrigger::Below),
            _ => None,
        };

        if hit.is_some() {
            self.triggered = hit;
        }

        hit
    }

    /// Décrit la règle pour l'affichage (ex: "≥ 420.00 / ≤ 380.00")
    pub fn describe(&self) -> String {
        match (self.above, self.below) {
            (Some(a), Some(b)) => format!("≥ {:.2} / ≤ {:.2}", a, b),
            (Some(a), None) => format!("≥ {:.2}", a),
            (None, Some(b)) => format!("≤ {:.2}", b),
            (None, None) => String::new(),
        }
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmed_rule_never_triggers() {
        let mut rule = AlertRule::default();
        assert!(!rule.is_armed());
        assert_eq!(rule.check(1000.0), None);
        assert_eq!(rule.triggered, None);
    }

    #[test]
    fn test_above_trigger() {
        let mut rule = AlertRule::default();
        rule.set_above(420.0);

        assert_eq!(rule.check(419.99), None);
        assert_eq!(rule.check(420.0), Some(AlertTrigger::Above));
        // L'état reste sticky même si le prix redescend
        assert_eq!(rule.check(400.0), None);
        assert_eq!(rule.triggered, Some(AlertTrigger::Above));
    }

    #[test]
    fn test_below_trigger() {
        let mut rule = AlertRule::default();
        rule.set_below(55.0);

        assert_eq!(rule.check(55.5), None);
        assert_eq!(rule.check(54.9), Some(AlertTrigger::Below));
        assert_eq!(rule.triggered, Some(AlertTrigger::Below));
    }

    #[test]
    fn test_set_rearms() {
        let mut rule = AlertRule::default();
        rule.set_above(100.0);
        rule.check(101.0);
        assert_eq!(rule.triggered, Some(AlertTrigger::Above));

        // Reconfigurer un seuil réarme l'alerte
        rule.set_above(200.0);
        assert_eq!(rule.triggered, None);
    }

    #[test]
    fn test_clear() {
        let mut rule = AlertRule::default();
        rule.set_above(100.0);
        rule.set_below(50.0);
        rule.check(101.0);

        rule.clear();
        assert!(!rule.is_armed());
        assert_eq!(rule.triggered, None);
        assert_eq!(rule.describe(), "");
    }

    #[test]
    fn test_describe() {
        let mut rule = AlertRule::default();
        rule.set_above(420.5);
        assert_eq!(rule.describe(), "≥ 420.50");

        rule.set_below(380.0);
        assert_eq!(rule.describe(), "≥ 420.50 / ≤ 380.00");
    }
}

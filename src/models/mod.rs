// ============================================================================
// Module : models
// ============================================================================
// Ce module contient toutes les structures de données de l'application
//
// CONCEPT RUST : Modules et visibilité
// - "pub mod" : déclare un sous-module publique (accessible depuis l'extérieur)
// - Sans "pub", le module serait privé au crate
// ============================================================================

pub mod alert;    // Règles d'alerte de prix
pub mod dividend; // Historique des dividendes
pub mod fund;     // Les deux fonds (VOO, JEPI) et leur état chargé
pub mod ohlc;     // Chandelles, périodes, intervalles

// Re-export des structures principales pour simplifier les imports
// Au lieu de : use lazycharts::models::ohlc::OHLCData;
// On peut faire : use lazycharts::models::OHLCData;
pub use alert::{AlertRule, AlertTrigger};
pub use dividend::{Dividend, DividendHistory};
pub use fund::{Fund, FundItem, QuoteInfo};
pub use ohlc::{Interval, Period, OHLC, OHLCData};

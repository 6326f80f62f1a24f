// ============================================================================
// Module : api
// ============================================================================
// Ce module contient le client API pour récupérer les données financières
// (Yahoo Finance : chandelles, dividendes, métadonnées de cotation)
// ============================================================================

pub mod yahoo; // Client API Yahoo Finance

// Re-export des fonctions principales
pub use yahoo::{fetch_fund_data, FundData};

// ============================================================================
// LazyCharts - Library
// ============================================================================
// Expose les modules publics pour les tests et le binaire
// ============================================================================

pub mod api;        // API Yahoo Finance
pub mod app;        // État de l'application
pub mod export;     // Export texte du graphique
pub mod indicators; // Indicateurs techniques (SMA, EMA, Bollinger)
pub mod models;     // Structures de données
pub mod ui;         // Interface utilisateur

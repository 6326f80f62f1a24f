// ============================================================================
// Module : ui
// ============================================================================
// Gère toute l'interface utilisateur (Terminal User Interface)
// ============================================================================

pub mod chart;     // Vue graphique (4 styles) + volume + résumé
pub mod compare;   // Vue comparaison VOO vs JEPI (normalisée)
pub mod dashboard; // Rendu de l'interface principale + routage
pub mod dividends; // Vue historique des dividendes
pub mod events;    // Gestion des événements clavier
pub mod textchart; // Renderer texte Unicode (chandeliers, aire)
pub mod theme;     // Palettes de couleurs sombre/claire

// Re-exports pour simplifier les imports
pub use dashboard::render;
pub use events::{Event, EventHandler};
pub use theme::Theme;

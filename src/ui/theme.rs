// ============================================================================
// Theme - Palettes de couleurs sombre / claire
// ============================================================================
// Chaque rôle de couleur (fond, texte, hausse, baisse, ligne, accent) est
// résolu par le thème actif ; toutes les vues passent par ces accesseurs
//
// CONCEPT RUST : Enum fieldless + méthodes
// - Le thème est un simple toggle : les palettes vivent dans les match
// - Color::Rgb : couleurs 24 bits (supportées par les terminaux modernes)
// ============================================================================

use ratatui::style::Color;

/// Thème de couleurs de l'application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Mode sombre (défaut)
    Dark,
    /// Mode clair
    Light,
}

impl Theme {
    /// Label pour l'affichage
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "sombre",
            Theme::Light => "clair",
        }
    }

    /// Bascule sombre ↔ clair
    pub fn toggle(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Couleur de fond
    pub fn bg(&self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(26, 26, 46),     // #1a1a2e
            Theme::Light => Color::Rgb(255, 255, 255), // #ffffff
        }
    }

    /// Couleur du texte principal
    pub fn text(&self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(255, 255, 255), // #ffffff
            Theme::Light => Color::Rgb(51, 51, 51),   // #333333
        }
    }

    /// Couleur des grilles, axes et bordures discrètes
    pub fn grid(&self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(51, 51, 51),    // #333333
            Theme::Light => Color::Rgb(204, 204, 204), // #cccccc
        }
    }

    /// Couleur des chandelles haussières
    pub fn up(&self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(0, 255, 136),  // #00ff88
            Theme::Light => Color::Rgb(38, 166, 91), // #26a65b
        }
    }

    /// Couleur des chandelles baissières
    pub fn down(&self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(255, 68, 68),   // #ff4444
            Theme::Light => Color::Rgb(231, 76, 60),  // #e74c3c
        }
    }

    /// Couleur de la courbe de prix (styles ligne et aire)
    pub fn line(&self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(0, 212, 255),   // #00d4ff
            Theme::Light => Color::Rgb(52, 152, 219), // #3498db
        }
    }

    /// Couleur d'accent (bandes de Bollinger, alertes)
    pub fn accent(&self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(255, 107, 107), // #ff6b6b
            Theme::Light => Color::Rgb(231, 76, 60),  // #e74c3c
        }
    }

    /// Couleurs dédiées aux overlays d'indicateurs (SMA 20, SMA 50, EMA 20)
    ///
    /// Palette indépendante du thème : ces teintes restent lisibles sur les
    /// deux fonds
    pub fn indicator_colors() -> [Color; 3] {
        [
            Color::Rgb(255, 159, 67), // #ff9f43
            Color::Rgb(238, 90, 36),  // #ee5a24
            Color::Rgb(95, 39, 205),  // #5f27cd
        ]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Dark.bg(), Theme::Light.bg());
        assert_ne!(Theme::Dark.text(), Theme::Light.text());
        assert_ne!(Theme::Dark.line(), Theme::Light.line());
    }
}

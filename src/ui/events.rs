// ============================================================================
// Gestion des événements
// ============================================================================
// Gère les événements clavier et les ticks de l'application
//
// CONCEPTS RUST :
// 1. Enums avec variants : représenter différents types d'événements
// 2. Pattern matching : identifier les touches
// 3. Error handling avec Result
// ============================================================================

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};

use crate::indicators::IndicatorKind;

/// Événements de l'application
///
/// CONCEPT RUST : Enums avec données
/// - Key(KeyEvent) : stocke l'événement clavier complet
/// - Tick : variant sans données (unit variant)
#[derive(Debug, Clone)]
pub enum Event {
    /// Touche pressée
    Key(KeyEvent),

    /// Tick régulier (pour animations, rafraîchissement)
    Tick,

    /// Erreur survenue
    Error,
}

/// Gestionnaire d'événements
///
/// CONCEPT : Stateless handler
/// - Un seul handler pour toute l'application, pas d'état à stocker
pub struct EventHandler;

impl EventHandler {
    /// Crée un nouveau gestionnaire d'événements
    pub fn new() -> Self {
        Self
    }

    /// Lit le prochain événement (bloquant avec timeout)
    ///
    /// CONCEPT : Non-blocking I/O avec timeout
    /// - poll(250ms) attend un événement au plus 250ms
    /// - Timeout → Event::Tick (la boucle continue de tourner)
    pub fn next(&self) -> Result<Event> {
        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                CrosstermEvent::Key(key) => {
                    // CONCEPT : Filter sur KeyEventKind
                    // Sur certains OS, on reçoit Press ET Release
                    // On ne garde que Press pour éviter les doublons
                    if key.kind == KeyEventKind::Press {
                        Ok(Event::Key(key))
                    } else {
                        Ok(Event::Tick)
                    }
                }

                // Autres événements (resize, mouse, etc.) ignorés
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Helpers : Convertir KeyEvent en action
// ============================================================================
// CONCEPT RUST : Pattern matching avec if let + matches!
// - Destructure Event::Key et vérifie le KeyCode en une ligne
// ============================================================================

/// Vérifie si l'événement est la touche 'q' (quitter)
pub fn is_quit_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
    } else {
        false
    }
}

/// Vérifie si l'événement est Échap
pub fn is_escape_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Esc)
    } else {
        false
    }
}

/// Vérifie si l'événement est Entrée
pub fn is_enter_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Enter)
    } else {
        false
    }
}

/// Vérifie si l'événement est la flèche vers le haut ou 'k' (vim)
pub fn is_up_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K'))
    } else {
        false
    }
}

/// Vérifie si l'événement est la flèche vers le bas ou 'j' (vim)
pub fn is_down_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J'))
    } else {
        false
    }
}

/// Vérifie si l'événement est 'l' (intervalle suivant)
pub fn is_next_interval_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('l'))
    } else {
        false
    }
}

/// Vérifie si l'événement est 'h' (intervalle précédent)
pub fn is_previous_interval_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('h'))
    } else {
        false
    }
}

/// Vérifie si l'événement est ']' (période suivante)
pub fn is_next_period_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char(']'))
    } else {
        false
    }
}

/// Vérifie si l'événement est '[' (période précédente)
pub fn is_previous_period_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('['))
    } else {
        false
    }
}

/// Vérifie si l'événement est 's' (style de graphique suivant)
pub fn is_style_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('s') | KeyCode::Char('S'))
    } else {
        false
    }
}

/// Vérifie si l'événement est 't' (bascule de thème)
pub fn is_theme_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('t') | KeyCode::Char('T'))
    } else {
        false
    }
}

/// Vérifie si l'événement est 'c' (vue comparaison)
pub fn is_compare_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
    } else {
        false
    }
}

/// Vérifie si l'événement est 'v' (vue dividendes)
pub fn is_dividends_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('v') | KeyCode::Char('V'))
    } else {
        false
    }
}

/// Vérifie si l'événement est 'e' (export du graphique)
pub fn is_export_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('e') | KeyCode::Char('E'))
    } else {
        false
    }
}

/// Vérifie si l'événement est 'a' (seuil d'alerte haut)
pub fn is_alert_above_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('a') | KeyCode::Char('A'))
    } else {
        false
    }
}

/// Vérifie si l'événement est 'b' (seuil d'alerte bas)
pub fn is_alert_below_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('b') | KeyCode::Char('B'))
    } else {
        false
    }
}

/// Vérifie si l'événement est 'x' (effacer l'alerte)
pub fn is_alert_clear_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('x') | KeyCode::Char('X'))
    } else {
        false
    }
}

/// Mappe les touches 1-4 vers un indicateur technique
///
/// CONCEPT RUST : Option comme résultat de mapping partiel
/// - Les touches hors 1-4 retournent None
pub fn indicator_from_event(event: &Event) -> Option<IndicatorKind> {
    if let Event::Key(key) = event {
        match key.code {
            KeyCode::Char('1') => Some(IndicatorKind::Sma20),
            KeyCode::Char('2') => Some(IndicatorKind::Sma50),
            KeyCode::Char('3') => Some(IndicatorKind::Ema20),
            KeyCode::Char('4') => Some(IndicatorKind::Bollinger),
            _ => None,
        }
    } else {
        None
    }
}

/// Vérifie si l'événement est Backspace
pub fn is_backspace_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Backspace)
    } else {
        false
    }
}

/// Vérifie si l'événement est un caractère acceptable en mode saisie
/// (chiffres et point pour les seuils, alphanumériques/tirets pour les noms
/// de fichiers)
pub fn is_input_char_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char(c)
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_')
    } else {
        false
    }
}

/// Extrait le caractère d'un événement clavier si c'est un caractère
pub fn get_char_from_event(event: &Event) -> Option<char> {
    if let Event::Key(key) = event {
        if let KeyCode::Char(c) = key.code {
            return Some(c);
        }
    }
    None
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), event::KeyModifiers::empty()))
    }

    #[test]
    fn test_is_quit_event() {
        assert!(is_quit_event(&key('q')));
        assert!(is_quit_event(&key('Q')));
        assert!(!is_quit_event(&key('z')));
        assert!(!is_quit_event(&Event::Tick));
    }

    #[test]
    fn test_period_and_interval_keys() {
        assert!(is_next_period_event(&key(']')));
        assert!(is_previous_period_event(&key('[')));
        assert!(is_next_interval_event(&key('l')));
        assert!(is_previous_interval_event(&key('h')));
    }

    #[test]
    fn test_indicator_from_event() {
        assert_eq!(indicator_from_event(&key('1')), Some(IndicatorKind::Sma20));
        assert_eq!(indicator_from_event(&key('2')), Some(IndicatorKind::Sma50));
        assert_eq!(indicator_from_event(&key('3')), Some(IndicatorKind::Ema20));
        assert_eq!(indicator_from_event(&key('4')), Some(IndicatorKind::Bollinger));
        assert_eq!(indicator_from_event(&key('5')), None);
        assert_eq!(indicator_from_event(&Event::Tick), None);
    }

    #[test]
    fn test_is_input_char_event() {
        assert!(is_input_char_event(&key('4')));
        assert!(is_input_char_event(&key('.')));
        assert!(is_input_char_event(&key('_')));
        assert!(!is_input_char_event(&key(' ')));
        assert!(!is_input_char_event(&key('/')));
    }
}

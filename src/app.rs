// ============================================================================
// Structure : App
// ============================================================================
// Gère l'état global de l'application TUI
//
// CONCEPTS RUST :
// 1. State Management : centraliser l'état dans une seule structure
// 2. Mutabilité contrôlée : &mut self pour modifier l'état
// 3. Encapsulation : accès via méthodes publiques
//
// PATTERN : Cette structure suit le pattern "Application State"
// - Tous les composants de l'UI lisent depuis App
// - Toutes les modifications passent par les méthodes de App
// - Garantit la cohérence de l'état
// ============================================================================

use crate::indicators::{IndicatorKind, IndicatorSet};
use crate::models::{Fund, FundItem, Interval, Period};
use crate::ui::theme::Theme;

/// Écrans de l'application
///
/// CONCEPT RUST : Enums pour state machines
/// - Un seul écran actif à la fois
/// - Le compilateur force à gérer tous les cas (exhaustivité)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Vue principale : les deux fonds avec prix, variation et rendement
    Dashboard,

    /// Vue graphique : graphique du fonds sélectionné
    ChartView,

    /// Vue comparaison : VOO vs JEPI normalisés en % de rendement
    CompareView,

    /// Vue dividendes : historique des versements du fonds sélectionné
    DividendView,

    /// Mode saisie : capture du texte utilisateur (seuils d'alerte, export)
    /// CONCEPT : Modal input mode (Vim-like)
    InputMode,
}

/// Ce que la saisie en cours va configurer
///
/// CONCEPT : Le même mode input sert plusieurs usages
/// - Le purpose décide quoi faire de la valeur validée
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    /// Seuil d'alerte haut (prix)
    AlertAbove,
    /// Seuil d'alerte bas (prix)
    AlertBelow,
    /// Nom du fichier d'export (vide = nom horodaté par défaut)
    ExportName,
}

/// Style de rendu du graphique
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStyle {
    /// Courbe des clôtures
    Line,
    /// Aire remplie sous la courbe
    Area,
    /// Barres verticales colorées par direction
    Bars,
    /// Chandeliers japonais (Unicode)
    Candles,
}

impl ChartStyle {
    /// Label pour l'affichage
    pub fn label(&self) -> &'static str {
        match self {
            ChartStyle::Line => "ligne",
            ChartStyle::Area => "aire",
            ChartStyle::Bars => "barres",
            ChartStyle::Candles => "chandeliers",
        }
    }

    /// Style suivant (cycle, touche 's')
    pub fn next(&self) -> ChartStyle {
        match self {
            ChartStyle::Line => ChartStyle::Area,
            ChartStyle::Area => ChartStyle::Bars,
            ChartStyle::Bars => ChartStyle::Candles,
            ChartStyle::Candles => ChartStyle::Line, // Boucle
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle::Line
    }
}

/// Durée d'affichage des messages de statut, en ticks (~250ms par tick)
const STATUS_TICKS: u8 = 20;

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// Les deux fonds suivis (VOO puis JEPI)
    pub funds: Vec<FundItem>,

    /// Index du fonds sélectionné
    pub selected_index: usize,

    /// Écran actuellement affiché
    pub current_screen: Screen,

    /// Écran vers lequel revenir en sortant du mode input
    previous_screen: Screen,

    /// Période d'historique sélectionnée ([ et ])
    pub current_period: Period,

    /// Intervalle sélectionné par l'utilisateur (h et l)
    ///
    /// CONCEPT : Choix brut vs choix effectif
    /// - On garde le choix brut même s'il est invalide pour la période
    /// - effective_interval() fait le rabattement au moment du fetch
    pub current_interval: Interval,

    /// Style de graphique actif
    pub chart_style: ChartStyle,

    /// Thème de couleurs actif
    pub theme: Theme,

    /// Indicateurs techniques activés
    pub indicators: IndicatorSet,

    /// Indique si l'utilisateur a demandé à quitter (attend confirmation)
    /// CONCEPT : Two-step quit pour éviter les sorties accidentelles
    pub confirm_quit: bool,

    /// Indique si des données sont en cours de chargement
    pub is_loading: bool,

    /// Message de chargement optionnel
    pub loading_message: Option<String>,

    /// Buffer de saisie pour le mode Input
    pub input_buffer: String,

    /// Prompt affiché en mode Input
    pub input_prompt: String,

    /// Usage de la saisie en cours
    pub input_purpose: Option<InputPurpose>,

    /// Message de statut éphémère (export réussi, substitution d'intervalle…)
    pub status_message: Option<String>,

    /// Ticks restants avant effacement du statut
    status_ticks: u8,
}

impl App {
    /// Crée l'état initial : les deux fonds, en attente de chargement
    pub fn new() -> Self {
        Self {
            running: true,
            funds: Fund::all().into_iter().map(FundItem::new).collect(),
            selected_index: 0,
            current_screen: Screen::Dashboard,
            previous_screen: Screen::Dashboard,
            current_period: Period::default(),
            current_interval: Interval::default(),
            chart_style: ChartStyle::default(),
            theme: Theme::default(),
            indicators: IndicatorSet::new(),
            confirm_quit: false,
            is_loading: false,
            loading_message: None,
            input_buffer: String::new(),
            input_prompt: String::new(),
            input_purpose: None,
            status_message: None,
            status_ticks: 0,
        }
    }

    /// Quitte l'application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Vérifie si l'application doit continuer
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Tick : appelé à chaque itération de la boucle
    ///
    /// CONCEPT : Event Loop Pattern
    /// - Appelé régulièrement (chaque frame), même sans événement
    /// - Sert ici à faire expirer le message de statut
    pub fn tick(&mut self) {
        if self.status_ticks > 0 {
            self.status_ticks -= 1;
            if self.status_ticks == 0 {
                self.status_message = None;
            }
        }
    }

    // ========================================================================
    // Navigation et sélection
    // ========================================================================

    /// Navigue vers le haut dans la liste des fonds
    ///
    /// CONCEPT RUST : Saturating arithmetic
    /// - saturating_sub() ne descend pas en dessous de 0
    pub fn navigate_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Navigue vers le bas dans la liste des fonds
    pub fn navigate_down(&mut self) {
        let max_index = self.funds.len().saturating_sub(1);
        self.selected_index = (self.selected_index + 1).min(max_index);
    }

    /// Retourne le fonds sélectionné
    pub fn selected_item(&self) -> Option<&FundItem> {
        self.funds.get(self.selected_index)
    }

    /// Retourne le fonds sélectionné en mutable (pour les alertes)
    pub fn selected_item_mut(&mut self) -> Option<&mut FundItem> {
        self.funds.get_mut(self.selected_index)
    }

    // ========================================================================
    // Transitions d'écran
    // ========================================================================

    /// Affiche la vue graphique
    pub fn show_chart(&mut self) {
        self.current_screen = Screen::ChartView;
    }

    /// Retourne à la vue dashboard
    pub fn show_dashboard(&mut self) {
        self.current_screen = Screen::Dashboard;
    }

    /// Affiche la vue comparaison VOO vs JEPI
    pub fn show_compare(&mut self) {
        self.current_screen = Screen::CompareView;
    }

    /// Affiche la vue dividendes du fonds sélectionné
    pub fn show_dividends(&mut self) {
        self.current_screen = Screen::DividendView;
    }

    pub fn is_on_dashboard(&self) -> bool {
        self.current_screen == Screen::Dashboard
    }

    pub fn is_on_chart(&self) -> bool {
        self.current_screen == Screen::ChartView
    }

    pub fn is_on_compare(&self) -> bool {
        self.current_screen == Screen::CompareView
    }

    pub fn is_on_dividends(&self) -> bool {
        self.current_screen == Screen::DividendView
    }

    // ========================================================================
    // Période, intervalle, style, thème, indicateurs
    // ========================================================================

    /// Passe à la période suivante
    pub fn next_period(&mut self) {
        self.current_period = self.current_period.next();
    }

    /// Passe à la période précédente
    pub fn previous_period(&mut self) {
        self.current_period = self.current_period.previous();
    }

    /// Passe à l'intervalle suivant
    pub fn next_interval(&mut self) {
        self.current_interval = self.current_interval.next();
    }

    /// Passe à l'intervalle précédent
    pub fn previous_interval(&mut self) {
        self.current_interval = self.current_interval.previous();
    }

    /// Intervalle effectivement utilisé pour les requêtes
    ///
    /// Rabat le choix utilisateur sur l'auto-sélection si la combinaison
    /// période/intervalle dépasse les limites de l'API
    pub fn effective_interval(&self) -> Interval {
        self.current_interval.clamp_for(self.current_period)
    }

    /// Vérifie si le choix utilisateur a été rabattu
    pub fn interval_substituted(&self) -> bool {
        self.effective_interval() != self.current_interval
    }

    /// Passe au style de graphique suivant
    pub fn cycle_style(&mut self) {
        self.chart_style = self.chart_style.next();
    }

    /// Bascule le thème sombre ↔ clair
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    /// Active/désactive un indicateur technique
    pub fn toggle_indicator(&mut self, kind: IndicatorKind) {
        self.indicators.toggle(kind);
    }

    // ========================================================================
    // Confirmation de quit (two-step)
    // ========================================================================

    /// Demande la confirmation de quitter
    pub fn request_quit(&mut self) {
        self.confirm_quit = true;
    }

    /// Annule la demande de quit
    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
    }

    pub fn is_awaiting_quit_confirmation(&self) -> bool {
        self.confirm_quit
    }

    // ========================================================================
    // Chargement
    // ========================================================================

    /// Démarre le chargement avec un message optionnel
    pub fn start_loading(&mut self, message: Option<String>) {
        self.is_loading = true;
        self.loading_message = message;
    }

    /// Termine le chargement
    pub fn stop_loading(&mut self) {
        self.is_loading = false;
        self.loading_message = None;
    }

    pub fn is_loading_data(&self) -> bool {
        self.is_loading
    }

    // ========================================================================
    // Messages de statut
    // ========================================================================

    /// Affiche un message de statut éphémère (expire via tick())
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_ticks = STATUS_TICKS;
    }

    // ========================================================================
    // Input Mode Management
    // ========================================================================

    /// Entre en mode input avec un prompt et un usage donnés
    ///
    /// CONCEPT : Modal input (Vim-like)
    /// - Mémorise l'écran courant pour y revenir après validation/annulation
    pub fn start_input(&mut self, prompt: String, purpose: InputPurpose) {
        self.previous_screen = self.current_screen;
        self.current_screen = Screen::InputMode;
        self.input_buffer.clear();
        self.input_prompt = prompt;
        self.input_purpose = Some(purpose);
    }

    /// Annule le mode input et revient à l'écran précédent
    pub fn cancel_input(&mut self) {
        self.current_screen = self.previous_screen;
        self.input_buffer.clear();
        self.input_prompt.clear();
        self.input_purpose = None;
    }

    /// Récupère la valeur saisie et l'usage, et revient à l'écran précédent
    ///
    /// CONCEPT : Consume input
    /// - Retourne (valeur, purpose), vide le buffer
    pub fn submit_input(&mut self) -> (String, Option<InputPurpose>) {
        let value = self.input_buffer.clone();
        let purpose = self.input_purpose.take();
        self.current_screen = self.previous_screen;
        self.input_buffer.clear();
        self.input_prompt.clear();
        (value, purpose)
    }

    /// Ajoute un caractère au buffer d'input
    pub fn append_char(&mut self, c: char) {
        self.input_buffer.push(c);
    }

    /// Supprime le dernier caractère du buffer
    pub fn backspace(&mut self) {
        self.input_buffer.pop();
    }

    /// Vérifie si on est en mode input
    pub fn is_in_input_mode(&self) -> bool {
        self.current_screen == Screen::InputMode
    }

    /// Écran d'origine de la saisie en cours (affiché en arrière-plan)
    pub fn input_return_screen(&self) -> Screen {
        self.previous_screen
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_creation() {
        let app = App::new();
        assert!(app.is_running());
        assert_eq!(app.funds.len(), 2);
        assert_eq!(app.funds[0].fund, Fund::Voo);
        assert_eq!(app.funds[1].fund, Fund::Jepi);
        assert_eq!(app.selected_index, 0);
        assert!(app.is_on_dashboard());
    }

    #[test]
    fn test_app_quit() {
        let mut app = App::new();
        app.quit();
        assert!(!app.is_running());
    }

    #[test]
    fn test_navigation_bounded() {
        let mut app = App::new();

        assert_eq!(app.selected_index, 0);

        app.navigate_down();
        assert_eq!(app.selected_index, 1);

        // Au max : reste à 1 (deux fonds seulement)
        app.navigate_down();
        assert_eq!(app.selected_index, 1);

        app.navigate_up();
        assert_eq!(app.selected_index, 0);

        // Au min : reste à 0
        app.navigate_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_screen_transitions() {
        let mut app = App::new();

        app.show_chart();
        assert!(app.is_on_chart());

        app.show_compare();
        assert!(app.is_on_compare());

        app.show_dividends();
        assert!(app.is_on_dividends());

        app.show_dashboard();
        assert!(app.is_on_dashboard());
    }

    #[test]
    fn test_chart_style_cycle() {
        let mut app = App::new();
        assert_eq!(app.chart_style, ChartStyle::Line);

        app.cycle_style();
        assert_eq!(app.chart_style, ChartStyle::Area);
        app.cycle_style();
        assert_eq!(app.chart_style, ChartStyle::Bars);
        app.cycle_style();
        assert_eq!(app.chart_style, ChartStyle::Candles);
        app.cycle_style();
        assert_eq!(app.chart_style, ChartStyle::Line); // Boucle
    }

    #[test]
    fn test_effective_interval_substitution() {
        let mut app = App::new();

        // 1d sur 1 an : valide, pas de substitution
        assert_eq!(app.effective_interval(), Interval::D1);
        assert!(!app.interval_substituted());

        // 1m sur 1 an : invalide → rabattu sur l'auto-sélection (1d)
        app.current_interval = Interval::M1;
        assert_eq!(app.effective_interval(), Interval::D1);
        assert!(app.interval_substituted());

        // 1m sur 1 jour : valide
        app.current_period = Period::OneDay;
        assert_eq!(app.effective_interval(), Interval::M1);
        assert!(!app.interval_substituted());
    }

    #[test]
    fn test_input_mode_returns_to_previous_screen() {
        let mut app = App::new();
        app.show_chart();

        app.start_input("Alerte au-dessus de : ".to_string(), InputPurpose::AlertAbove);
        assert!(app.is_in_input_mode());

        app.append_char('4');
        app.append_char('2');
        app.append_char('0');
        app.backspace();
        assert_eq!(app.input_buffer, "42");

        let (value, purpose) = app.submit_input();
        assert_eq!(value, "42");
        assert_eq!(purpose, Some(InputPurpose::AlertAbove));
        // Retour à l'écran d'origine, pas au dashboard
        assert!(app.is_on_chart());
    }

    #[test]
    fn test_input_mode_cancel() {
        let mut app = App::new();
        app.start_input("Export : ".to_string(), InputPurpose::ExportName);
        app.append_char('x');

        app.cancel_input();
        assert!(!app.is_in_input_mode());
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_purpose, None);
    }

    #[test]
    fn test_status_message_expires() {
        let mut app = App::new();
        app.set_status("Export réussi".to_string());
        assert!(app.status_message.is_some());

        for _ in 0..STATUS_TICKS {
            app.tick();
        }
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_toggle_indicator() {
        let mut app = App::new();
        app.toggle_indicator(IndicatorKind::Sma20);
        assert!(app.indicators.is_enabled(IndicatorKind::Sma20));

        app.toggle_indicator(IndicatorKind::Sma20);
        assert!(!app.indicators.is_enabled(IndicatorKind::Sma20));
    }
}

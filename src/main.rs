// ============================================================================
// LazyCharts - Visualiseur de graphiques VOO & JEPI
// ============================================================================
// Programme TUI : deux fonds, graphiques multi-styles, indicateurs
// techniques, alertes de prix, thèmes et export texte
//
// CONCEPTS RUST CLÉS :
// 1. Terminal raw mode : contrôle total du terminal
// 2. Event loop : boucle infinie qui gère événements et rendering
// 3. Async dans sync : tokio::runtime::Runtime pour appels API
// 4. Worker thread + mpsc : fetchs réseau sans bloquer l'UI
// ============================================================================

use std::io;
use std::sync::{mpsc, Arc, Mutex};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info, warn};

use lazycharts::api::{fetch_fund_data, FundData};
use lazycharts::app::{App, InputPurpose};
use lazycharts::export;
use lazycharts::models::{Fund, Interval, Period};
use lazycharts::ui::{events::EventHandler, render};

// ============================================================================
// AppCommand : Commandes pour le worker thread
// ============================================================================
// CONCEPT RUST : Command pattern avec channels
// - L'event loop envoie des commandes au worker thread
// - Le worker thread exécute les tâches async (fetch API)
// - Communication via mpsc channels (multi-producer, single-consumer)
// ============================================================================

/// Commandes envoyées au worker thread pour exécuter des tâches async
#[derive(Debug, Clone)]
enum AppCommand {
    /// Recharger les données d'un fonds avec de nouveaux réglages
    /// - fund : le fonds à recharger
    /// - period/interval : réglages de la requête (déjà rabattus)
    /// - index : position dans app.funds
    ReloadFundData {
        fund: Fund,
        period: Period,
        interval: Interval,
        index: usize,
    },
}

/// Résultats renvoyés par le worker thread
#[derive(Debug)]
enum AppResult {
    /// Données d'un fonds rechargées avec succès
    FundDataLoaded { index: usize, fund_data: FundData },

    /// Erreur lors du chargement
    LoadError {
        index: usize,
        symbol: String,
        error: String,
    },
}

// ============================================================================
// Initialisation du logging
// ============================================================================
// CONCEPT : Logging dans une app TUI
// - Les println! ne fonctionnent pas une fois le TUI lancé
// - On log vers un fichier à la place, avec rotation quotidienne
//
// Les logs sont écrits dans :
// - Linux/WSL : ~/.local/share/lazycharts/logs/lazycharts.log
// - macOS : ~/Library/Application Support/lazycharts/logs/lazycharts.log
// - Windows : C:\Users\<user>\AppData\Local\lazycharts\logs\lazycharts.log
// ============================================================================

/// Initialise le système de logging vers fichier
///
/// # Utilisation
/// ```bash
/// # Voir les logs en temps réel
/// tail -f ~/.local/share/lazycharts/logs/lazycharts.log
///
/// # Contrôler le niveau de log
/// RUST_LOG=debug cargo run
/// RUST_LOG=lazycharts=trace cargo run
/// ```
fn init_logging() -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Répertoire de logs cross-platform (fallback : ./logs)
    let log_dir = dirs::data_local_dir()
        .map(|d| d.join("lazycharts").join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("./logs"));

    std::fs::create_dir_all(&log_dir).context("Échec de la création du répertoire de logs")?;

    // Rotation quotidienne : lazycharts.log.2024-01-15, etc.
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir.clone(), "lazycharts.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender) // Écrit dans le fichier
                .with_ansi(false)           // Pas de codes couleur dans le fichier
                .with_target(true)          // Inclut le module (ex: lazycharts::api::yahoo)
                .with_thread_ids(true)      // Utile pour distinguer UI / worker
                .with_line_number(true),
        )
        .with(
            // Filtre les logs par niveau
            // Par défaut : debug pour lazycharts, info pour les dépendances
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lazycharts=debug,info".into()),
        )
        .init();

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================
// CONCEPT RUST : Async dans sync
// - main() est synchrone (pour le TUI)
// - tokio::runtime::Runtime pour exécuter le code async des fetchs
// ============================================================================

fn main() -> Result<()> {
    // Logging d'abord : si init échoue, on continue quand même
    init_logging().unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {}", e);
        eprintln!("   Continuing without logging...");
    });

    println!("LazyCharts starting up");
    info!("LazyCharts starting up");

    // Charge les données initiales des deux fonds (appels API async)
    info!("Loading initial fund data");
    println!("📊 Chargement des données VOO & JEPI...\n");

    let mut app = App::new();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(load_initial_data(&mut app));

    info!("Initial fund data loaded");
    println!("✅ Données chargées !\n");

    // Setup du terminal en mode TUI
    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    // CONCEPT RUST : Arc<Mutex<>> pour partage entre threads
    // - Arc : ownership partagé entre UI et worker
    // - Mutex : protection contre les data races
    let app = Arc::new(Mutex::new(app));

    // Channels pour la communication avec le worker
    let (command_tx, command_rx) = mpsc::channel::<AppCommand>();
    let (result_tx, result_rx) = mpsc::channel::<AppResult>();

    info!("Spawning background worker thread");
    spawn_background_worker(command_rx, result_tx, app.clone());

    let events = EventHandler::new();

    info!("Starting event loop");
    let result = run(&mut terminal, app.clone(), &events, command_tx, result_rx);

    // Restaure le terminal (même en cas d'erreur)
    debug!("Restoring terminal");
    restore_terminal(&mut terminal)?;

    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    result
}

// ============================================================================
// Chargement initial
// ============================================================================

/// Charge les données des deux fonds avec les réglages par défaut
///
/// CONCEPT RUST : Async/await et gestion d'erreurs
/// - Un échec sur un fonds n'empêche pas l'autre de charger
/// - L'item reste sans données, l'UI affichera l'erreur
async fn load_initial_data(app: &mut App) {
    let period = app.current_period;
    let interval = app.effective_interval();
    let total = app.funds.len();

    for i in 0..total {
        let symbol = app.funds[i].symbol();
        debug!(fund = %symbol, progress = i + 1, total, "Fetching fund data");
        println!("  [{}/{}] Chargement de {}...", i + 1, total, symbol);

        match fetch_fund_data(symbol, period, interval).await {
            Ok(fund_data) => {
                info!(fund = %symbol, candles = fund_data.data.len(), "Fund data fetched successfully");
                app.funds[i].update_data(fund_data.data, fund_data.dividends, fund_data.info);
                println!("    ✓ OK");
            }
            Err(e) => {
                error!(fund = %symbol, error = ?e, "Failed to fetch fund data");
                println!("    ✗ Échec ({})", e);
            }
        }

        // Petit délai entre les requêtes (rate limiting)
        if i < total - 1 {
            tokio::time::sleep(tokio::time::Duration::from_millis(500)).await;
        }
    }
}

// ============================================================================
// Background Worker Thread
// ============================================================================
// CONCEPT RUST : Background async worker avec channels
// - Thread séparé qui traite les commandes async
// - Permet de faire des appels API sans bloquer l'UI
// ============================================================================

/// Worker thread qui exécute les fetchs en arrière-plan
///
/// # Arguments
/// * `command_rx` - Receiver pour recevoir les commandes
/// * `result_tx` - Sender pour envoyer les résultats
/// * `app` - Arc<Mutex<App>> pour piloter l'indicateur de chargement
fn spawn_background_worker(
    command_rx: mpsc::Receiver<AppCommand>,
    result_tx: mpsc::Sender<AppResult>,
    app: Arc<Mutex<App>>,
) {
    std::thread::spawn(move || {
        // CONCEPT : Runtime per-thread
        // - Le worker a son propre runtime tokio
        let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

        loop {
            match command_rx.recv() {
                Ok(command) => {
                    info!(?command, "Worker received command");

                    match command {
                        AppCommand::ReloadFundData {
                            fund,
                            period,
                            interval,
                            index,
                        } => {
                            // Active l'indicateur de chargement
                            {
                                let mut app_lock = app.lock().unwrap();
                                app_lock.start_loading(Some(format!(
                                    "Chargement {} ({}/{})...",
                                    fund.symbol(),
                                    period.label(),
                                    interval.label()
                                )));
                            }

                            // CONCEPT : block_on dans un worker thread
                            // - Bloque le worker, pas l'UI
                            let result = runtime.block_on(async {
                                fetch_fund_data(fund.symbol(), period, interval).await
                            });

                            match result {
                                Ok(fund_data) => {
                                    info!(
                                        fund = %fund.symbol(),
                                        period = %period.label(),
                                        interval = %interval.label(),
                                        candles = fund_data.data.len(),
                                        "Data loaded successfully"
                                    );
                                    let _ = result_tx
                                        .send(AppResult::FundDataLoaded { index, fund_data });
                                }
                                Err(e) => {
                                    error!(fund = %fund.symbol(), error = ?e, "Failed to load fund data");
                                    let _ = result_tx.send(AppResult::LoadError {
                                        index,
                                        symbol: fund.symbol().to_string(),
                                        error: e.to_string(),
                                    });
                                }
                            }

                            // Désactive l'indicateur de chargement
                            {
                                let mut app_lock = app.lock().unwrap();
                                app_lock.stop_loading();
                            }
                        }
                    }
                }
                Err(_) => {
                    // Channel fermé, on quitte
                    info!("Worker thread exiting (channel closed)");
                    break;
                }
            }
        }
    });
}

// ============================================================================
// Event Loop Principal
// ============================================================================
// CONCEPT : Event Loop Pattern
// - À chaque itération : résultats worker → render → input → update
// ============================================================================

/// Exécute la boucle principale de l'application
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: Arc<Mutex<App>>,
    events: &EventHandler,
    command_tx: mpsc::Sender<AppCommand>,
    result_rx: mpsc::Receiver<AppResult>,
) -> Result<()> {
    loop {
        // CONCEPT : Lock scope minimisé
        // - Lock seulement pour lire is_running, unlock immédiat
        {
            let app_lock = app.lock().unwrap();
            if !app_lock.is_running() {
                break;
            }
        }

        // ========================================
        // 0. RÉSULTATS : Traite les résultats du worker
        // ========================================
        // CONCEPT : Non-blocking receive avec try_recv
        match result_rx.try_recv() {
            Ok(result) => match result {
                AppResult::FundDataLoaded { index, fund_data } => {
                    let mut app_lock = app.lock().unwrap();

                    // CONCEPT RUST : Borrow scope
                    // - Le message est construit pendant l'emprunt de l'item,
                    //   set_status est appelé une fois l'emprunt terminé
                    let mut alert_message = None;
                    if let Some(item) = app_lock.funds.get_mut(index) {
                        info!(
                            fund = %item.symbol(),
                            candles = fund_data.data.len(),
                            "Updating fund with new data"
                        );
                        item.update_data(fund_data.data, fund_data.dividends, fund_data.info);

                        // Alerte franchie pendant le refresh : statut visible
                        if let Some(trigger) = item.alert.triggered {
                            warn!(fund = %item.symbol(), ?trigger, "Price alert triggered");
                            alert_message = Some(format!(
                                "🔔 Alerte {} : seuil {} franchi",
                                item.symbol(),
                                item.alert.describe()
                            ));
                        }
                    }
                    if let Some(message) = alert_message {
                        app_lock.set_status(message);
                    }
                }
                AppResult::LoadError { index: _, symbol, error } => {
                    error!(fund = %symbol, error = %error, "Failed to load fund data");
                    let mut app_lock = app.lock().unwrap();
                    app_lock.set_status(format!("❌ Échec du chargement {} : {}", symbol, error));
                }
            },
            Err(mpsc::TryRecvError::Empty) => {
                // Pas de résultat, c'est normal
            }
            Err(mpsc::TryRecvError::Disconnected) => {
                error!("Worker thread disconnected!");
                // Continue quand même, mais le worker est mort
            }
        }

        // ========================================
        // 1. RENDER : Dessine l'interface
        // ========================================
        {
            let app_clone = app.clone();
            terminal.draw(|frame| {
                let app_lock = app_clone.lock().unwrap();
                render(frame, &app_lock);
            })?;
        }

        // ========================================
        // 2. INPUT : Traite les événements
        // ========================================
        match events.next() {
            Ok(event) => {
                let mut app_lock = app.lock().unwrap();
                handle_event(&mut app_lock, event, &command_tx);
            }
            Err(_) => {
                // Erreur lors de la lecture d'événement
            }
        }

        // ========================================
        // 3. UPDATE : Met à jour l'état
        // ========================================
        {
            let mut app_lock = app.lock().unwrap();
            app_lock.tick();
        }
    }

    Ok(())
}

// ============================================================================
// Gestion des événements
// ============================================================================
// CONCEPT : Event Handler Pattern
// - Pattern matching avec guards pour router selon l'écran actuel
// ============================================================================

/// Envoie le rechargement du fonds à l'index donné avec les réglages actuels
fn send_reload(app: &App, command_tx: &mpsc::Sender<AppCommand>, index: usize) {
    if let Some(item) = app.funds.get(index) {
        let _ = command_tx.send(AppCommand::ReloadFundData {
            fund: item.fund,
            period: app.current_period,
            interval: app.effective_interval(),
            index,
        });
    }
}

/// Recharge tous les fonds (vue comparaison)
fn send_reload_all(app: &App, command_tx: &mpsc::Sender<AppCommand>) {
    for index in 0..app.funds.len() {
        send_reload(app, command_tx, index);
    }
}

/// Traite un événement et met à jour l'état de l'application
///
/// CONCEPT RUST : Pattern matching complexe avec guards
/// - Guard clauses (if) pour filtrer les événements par écran
fn handle_event(
    app: &mut App,
    event: lazycharts::ui::events::Event,
    command_tx: &mpsc::Sender<AppCommand>,
) {
    use lazycharts::ui::events::{
        get_char_from_event, indicator_from_event, is_alert_above_event, is_alert_below_event,
        is_alert_clear_event, is_backspace_event, is_compare_event, is_dividends_event,
        is_down_event, is_enter_event, is_escape_event, is_export_event, is_input_char_event,
        is_next_interval_event, is_next_period_event, is_previous_interval_event,
        is_previous_period_event, is_quit_event, is_style_event, is_theme_event, is_up_event,
        Event,
    };

    match event {
        // ========================================
        // Quit two-step (désactivé en mode saisie : 'q' est un caractère)
        // ========================================
        Event::Key(_) if is_quit_event(&event) && !app.is_in_input_mode() => {
            if app.is_awaiting_quit_confirmation() {
                info!("User confirmed quit");
                app.quit();
            } else {
                info!("User requested quit (awaiting confirmation)");
                app.request_quit();
            }
        }

        // ========================================
        // Input Mode : saisie des seuils et noms d'export
        // ========================================
        Event::Key(_) if is_escape_event(&event) && app.is_in_input_mode() => {
            info!("User cancelled input");
            app.cancel_input();
        }

        Event::Key(_) if is_enter_event(&event) && app.is_in_input_mode() => {
            let (value, purpose) = app.submit_input();
            let value = value.trim().to_string();

            match purpose {
                Some(InputPurpose::AlertAbove) => match value.parse::<f64>() {
                    Ok(price) => {
                        if let Some(item) = app.selected_item_mut() {
                            info!(fund = %item.symbol(), price, "Alert above threshold set");
                            item.alert.set_above(price);
                        }
                        app.set_status(format!("🔔 Alerte configurée : ≥ {:.2}", price));
                    }
                    Err(_) => {
                        debug!(value = %value, "Invalid alert threshold");
                        app.set_status("❌ Seuil invalide (nombre attendu)".to_string());
                    }
                },
                Some(InputPurpose::AlertBelow) => match value.parse::<f64>() {
                    Ok(price) => {
                        if let Some(item) = app.selected_item_mut() {
                            info!(fund = %item.symbol(), price, "Alert below threshold set");
                            item.alert.set_below(price);
                        }
                        app.set_status(format!("🔔 Alerte configurée : ≤ {:.2}", price));
                    }
                    Err(_) => {
                        debug!(value = %value, "Invalid alert threshold");
                        app.set_status("❌ Seuil invalide (nombre attendu)".to_string());
                    }
                },
                Some(InputPurpose::ExportName) => match export::export_chart(app, &value) {
                    Ok(path) => {
                        info!(path = %path.display(), "Chart exported");
                        app.set_status(format!("💾 Graphique exporté : {}", path.display()));
                    }
                    Err(e) => {
                        error!(error = ?e, "Export failed");
                        app.set_status(format!("❌ Échec de l'export : {}", e));
                    }
                },
                None => {}
            }
        }

        Event::Key(_) if is_backspace_event(&event) && app.is_in_input_mode() => {
            app.backspace();
        }

        Event::Key(_) if is_input_char_event(&event) && app.is_in_input_mode() => {
            if let Some(c) = get_char_from_event(&event) {
                app.append_char(c);
            }
        }

        // ========================================
        // Dashboard : navigation et accès aux vues
        // ========================================
        Event::Key(_) if is_up_event(&event) && app.is_on_dashboard() => {
            app.cancel_quit();
            debug!("User navigated up");
            app.navigate_up();
        }
        Event::Key(_) if is_down_event(&event) && app.is_on_dashboard() => {
            app.cancel_quit();
            debug!("User navigated down");
            app.navigate_down();
        }

        // Enter : afficher le graphique du fonds sélectionné
        Event::Key(_) if is_enter_event(&event) && app.is_on_dashboard() => {
            app.cancel_quit();
            if let Some(item) = app.selected_item() {
                info!(fund = %item.symbol(), "User opened chart view");
            }
            app.show_chart();
        }

        // 'c' : vue comparaison
        Event::Key(_) if is_compare_event(&event) && app.is_on_dashboard() => {
            app.cancel_quit();
            info!("User opened compare view");
            app.show_compare();
        }

        // 'v' : vue dividendes (depuis dashboard ou graphique)
        Event::Key(_)
            if is_dividends_event(&event) && (app.is_on_dashboard() || app.is_on_chart()) =>
        {
            app.cancel_quit();
            if let Some(item) = app.selected_item() {
                info!(fund = %item.symbol(), "User opened dividend view");
            }
            app.show_dividends();
        }

        // ========================================
        // ChartView : réglages du graphique
        // ========================================

        // 'l' / 'h' : intervalle suivant / précédent + rechargement
        Event::Key(_) if is_next_interval_event(&event) && app.is_on_chart() => {
            app.cancel_quit();
            app.next_interval();
            info!(interval = %app.current_interval.label(), "User changed to next interval");
            send_reload(app, command_tx, app.selected_index);
        }
        Event::Key(_) if is_previous_interval_event(&event) && app.is_on_chart() => {
            app.cancel_quit();
            app.previous_interval();
            info!(interval = %app.current_interval.label(), "User changed to previous interval");
            send_reload(app, command_tx, app.selected_index);
        }

        // ']' / '[' : période suivante / précédente + rechargement
        // (sur le graphique : le fonds affiché ; en comparaison : les deux)
        Event::Key(_) if is_next_period_event(&event) && app.is_on_chart() => {
            app.cancel_quit();
            app.next_period();
            info!(period = %app.current_period.label(), "User changed to next period");
            send_reload(app, command_tx, app.selected_index);
        }
        Event::Key(_) if is_previous_period_event(&event) && app.is_on_chart() => {
            app.cancel_quit();
            app.previous_period();
            info!(period = %app.current_period.label(), "User changed to previous period");
            send_reload(app, command_tx, app.selected_index);
        }
        Event::Key(_) if is_next_period_event(&event) && app.is_on_compare() => {
            app.cancel_quit();
            app.next_period();
            info!(period = %app.current_period.label(), "User changed compare period");
            send_reload_all(app, command_tx);
        }
        Event::Key(_) if is_previous_period_event(&event) && app.is_on_compare() => {
            app.cancel_quit();
            app.previous_period();
            info!(period = %app.current_period.label(), "User changed compare period");
            send_reload_all(app, command_tx);
        }

        // 's' : style de graphique suivant
        Event::Key(_) if is_style_event(&event) && app.is_on_chart() => {
            app.cancel_quit();
            app.cycle_style();
            info!(style = %app.chart_style.label(), "User changed chart style");
        }

        // 't' : bascule de thème (partout hors saisie)
        Event::Key(_) if is_theme_event(&event) && !app.is_in_input_mode() => {
            app.cancel_quit();
            app.toggle_theme();
            info!(theme = %app.theme.label(), "User toggled theme");
        }

        // '1'-'4' : toggle d'indicateur
        Event::Key(_) if indicator_from_event(&event).is_some() && app.is_on_chart() => {
            app.cancel_quit();
            if let Some(kind) = indicator_from_event(&event) {
                app.toggle_indicator(kind);
                info!(indicator = %kind.label(), "User toggled indicator");
            }
        }

        // 'a' / 'b' : saisie d'un seuil d'alerte
        Event::Key(_) if is_alert_above_event(&event) && app.is_on_chart() => {
            app.cancel_quit();
            info!("User requested alert-above input");
            app.start_input("Alerte si prix ≥ ".to_string(), InputPurpose::AlertAbove);
        }
        Event::Key(_) if is_alert_below_event(&event) && app.is_on_chart() => {
            app.cancel_quit();
            info!("User requested alert-below input");
            app.start_input("Alerte si prix ≤ ".to_string(), InputPurpose::AlertBelow);
        }

        // 'x' : effacer l'alerte du fonds affiché
        Event::Key(_) if is_alert_clear_event(&event) && app.is_on_chart() => {
            app.cancel_quit();
            if let Some(item) = app.selected_item_mut() {
                info!(fund = %item.symbol(), "User cleared alert");
                item.alert.clear();
            }
            app.set_status("🔕 Alerte effacée".to_string());
        }

        // 'e' : export du graphique (nom de fichier optionnel)
        Event::Key(_) if is_export_event(&event) && app.is_on_chart() => {
            app.cancel_quit();
            info!("User requested chart export");
            app.start_input(
                "Nom du fichier (vide = défaut) : ".to_string(),
                InputPurpose::ExportName,
            );
        }

        // ========================================
        // Retour au dashboard depuis les sous-vues
        // ========================================
        Event::Key(_)
            if is_escape_event(&event)
                && (app.is_on_chart() || app.is_on_compare() || app.is_on_dividends()) =>
        {
            app.cancel_quit();
            debug!("User returned to dashboard");
            app.show_dashboard();
        }

        Event::Tick => {
            // Tick régulier : rien à faire ici (géré par app.tick())
        }

        Event::Key(_) => {
            // Toute autre touche : annule la confirmation de quit si active
            app.cancel_quit();
        }

        _ => {
            // Autres événements : ignorés
        }
    }
}

// ============================================================================
// Setup et restauration du terminal
// ============================================================================
// CONCEPT RUST : Terminal raw mode
// - Raw mode : on reçoit tous les caractères directement
// - Alternate screen : écran secondaire (ne pollue pas l'historique)
//
// IMPORTANT : Toujours restaurer le terminal avant de quitter !
// ============================================================================

/// Configure le terminal en mode TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| e.into())
}

/// Restaure le terminal à son état normal
///
/// CONCEPT : Cleanup et RAII
/// - Appelé dans main() même en cas d'erreur
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    terminal.show_cursor()?;

    Ok(())
}

// ============================================================================
// Indicateurs : moyennes mobiles (SMA, EMA)
// ============================================================================
// Arithmétique de fenêtre glissante sur la série des clôtures
//
// CONCEPT : Alignement des séries
// - La sortie a exactement la même longueur que l'entrée
// - None pendant le warm-up (fenêtre pas encore remplie), Some(valeur) ensuite
// - Permet de superposer l'indicateur au graphique index par index
// ============================================================================

/// Moyenne mobile simple (Simple Moving Average)
///
/// SMA[i] = moyenne arithmétique des `period` dernières valeurs
///
/// CONCEPT RUST : Fenêtre par somme glissante
/// - On maintient la somme courante au lieu de re-sommer la fenêtre
/// - O(n) au lieu de O(n × period)
///
/// # Panics
/// Panique si period == 0.
pub fn sma(values: &[f64], period: usize) -> Vec<Option<f64>> {
    assert!(period > 0, "SMA period must be > 0");

    let mut out = Vec::with_capacity(values.len());
    let mut window_sum = 0.0;

    for (i, &value) in values.iter().enumerate() {
        window_sum += value;

        if i >= period {
            // La valeur qui sort de la fenêtre
            window_sum -= values[i - period];
        }

        if i + 1 >= period {
            out.push(Some(window_sum / period as f64));
        } else {
            out.push(None); // Warm-up
        }
    }

    out
}

/// Moyenne mobile exponentielle (Exponential Moving Average)
///
/// EMA[i] = valeur[i] × k + EMA[i-1] × (1 - k), avec k = 2 / (period + 1)
///
/// Initialisation : la première EMA est la SMA des `period` premières
/// valeurs (convention classique, donne un démarrage stable)
///
/// # Panics
/// Panique si period == 0.
pub fn ema(values: &[f64], period: usize) -> Vec<Option<f64>> {
    assert!(period > 0, "EMA period must be > 0");

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev_ema: Option<f64> = None;

    for (i, &value) in values.iter().enumerate() {
        if i + 1 < period {
            out.push(None); // Warm-up
            continue;
        }

        let current = match prev_ema {
            // Amorçage : SMA de la première fenêtre complète
            None => {
                let window = &values[i + 1 - period..=i];
                window.iter().sum::<f64>() / period as f64
            }
            // Récurrence exponentielle
            Some(prev) => value * multiplier + prev * (1.0 - multiplier),
        };

        prev_ema = Some(current);
        out.push(Some(current));
    }

    out
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_basic_calculation() {
        let values = [10.0, 20.0, 30.0, 40.0, 50.0];
        let result = sma(&values, 3);

        assert_eq!(result.len(), 5);
        assert_eq!(result[0], None);
        assert_eq!(result[1], None);
        // SMA(3) de [10, 20, 30] = 20
        assert_eq!(result[2], Some(20.0));
        // SMA(3) de [20, 30, 40] = 30
        assert_eq!(result[3], Some(30.0));
        // SMA(3) de [30, 40, 50] = 40
        assert_eq!(result[4], Some(40.0));
    }

    #[test]
    fn test_sma_insufficient_data() {
        let values = [10.0, 20.0];
        let result = sma(&values, 5);
        assert_eq!(result, vec![None, None]);
    }

    #[test]
    fn test_sma_period_one_is_identity() {
        let values = [10.0, 20.0, 30.0];
        let result = sma(&values, 1);
        assert_eq!(result, vec![Some(10.0), Some(20.0), Some(30.0)]);
    }

    #[test]
    #[should_panic(expected = "SMA period must be > 0")]
    fn test_sma_zero_period_panics() {
        sma(&[1.0], 0);
    }

    #[test]
    fn test_ema_seeded_with_sma() {
        let values = [10.0, 20.0, 30.0, 40.0];
        let result = ema(&values, 3);

        assert_eq!(result[0], None);
        assert_eq!(result[1], None);
        // Amorçage : SMA(3) de [10, 20, 30] = 20
        assert_eq!(result[2], Some(20.0));
        // k = 2/4 = 0.5 → EMA = 40 × 0.5 + 20 × 0.5 = 30
        assert_eq!(result[3], Some(30.0));
    }

    #[test]
    fn test_ema_follows_price_faster_than_sma() {
        // Série plate puis saut : l'EMA doit converger vers le nouveau
        // niveau plus vite que la SMA
        let mut values = vec![100.0; 10];
        values.extend(vec![200.0; 5]);

        let sma_out = sma(&values, 10);
        let ema_out = ema(&values, 10);

        let last_sma = sma_out.last().unwrap().unwrap();
        let last_ema = ema_out.last().unwrap().unwrap();

        assert!(last_ema > last_sma);
        assert!(last_ema < 200.0);
    }

    #[test]
    fn test_alignment_with_input() {
        let values: Vec<f64> = (1..=50).map(|i| i as f64).collect();
        assert_eq!(sma(&values, 20).len(), values.len());
        assert_eq!(ema(&values, 20).len(), values.len());

        // Exactement period-1 None en tête
        assert_eq!(sma(&values, 20).iter().filter(|v| v.is_none()).count(), 19);
    }
}

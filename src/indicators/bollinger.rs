// ============================================================================
// Indicateur : bandes de Bollinger
// ============================================================================
// Enveloppe de volatilité : SMA ± k écarts-types glissants
//
// CONCEPT : Écart-type échantillon (ddof = 1)
// - Division par (n - 1), pas par n
// - C'est la convention des bibliothèques d'analyse usuelles ; avec une
//   autre convention les bandes seraient légèrement plus serrées
// ============================================================================

use crate::indicators::moving_average::sma;

/// Les trois bandes, alignées avec la série d'entrée
#[derive(Debug, Clone)]
pub struct BollingerBands {
    /// Bande haute : SMA + k × écart-type
    pub upper: Vec<Option<f64>>,

    /// Bande centrale : la SMA elle-même
    pub middle: Vec<Option<f64>>,

    /// Bande basse : SMA − k × écart-type
    pub lower: Vec<Option<f64>>,
}

/// Calcule les bandes de Bollinger
///
/// Paramètres classiques : fenêtre de 20, k = 2.0
///
/// # Panics
/// Panique si period < 2 (l'écart-type échantillon exige au moins 2 points).
pub fn bollinger(values: &[f64], period: usize, num_std: f64) -> BollingerBands {
    assert!(period >= 2, "Bollinger period must be >= 2");

    let middle = sma(values, period);
    let mut upper = Vec::with_capacity(values.len());
    let mut lower = Vec::with_capacity(values.len());

    for (i, mean) in middle.iter().enumerate() {
        match mean {
            None => {
                upper.push(None); // Warm-up
                lower.push(None);
            }
            Some(mean) => {
                let window = &values[i + 1 - period..=i];

                // Écart-type échantillon de la fenêtre
                let variance = window
                    .iter()
                    .map(|v| (v - mean).powi(2))
                    .sum::<f64>()
                    / (period as f64 - 1.0);
                let std_dev = variance.sqrt();

                upper.push(Some(mean + std_dev * num_std));
                lower.push(Some(mean - std_dev * num_std));
            }
        }
    }

    BollingerBands {
        upper,
        middle,
        lower,
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bollinger_alignment() {
        let values: Vec<f64> = (1..=30).map(|i| i as f64).collect();
        let bands = bollinger(&values, 20, 2.0);

        assert_eq!(bands.upper.len(), 30);
        assert_eq!(bands.middle.len(), 30);
        assert_eq!(bands.lower.len(), 30);

        // Warm-up : 19 None en tête de chaque bande
        assert!(bands.upper[18].is_none());
        assert!(bands.upper[19].is_some());
    }

    #[test]
    fn test_bollinger_textbook_values() {
        // Fenêtre [2, 4, 6] : moyenne 4, variance échantillon
        // ((2-4)² + (4-4)² + (6-4)²) / 2 = 4 → écart-type 2
        let values = [2.0, 4.0, 6.0];
        let bands = bollinger(&values, 3, 2.0);

        assert_eq!(bands.middle[2], Some(4.0));
        // 4 + 2×2 = 8, 4 − 2×2 = 0
        assert_eq!(bands.upper[2], Some(8.0));
        assert_eq!(bands.lower[2], Some(0.0));
    }

    #[test]
    fn test_bollinger_flat_series_collapses() {
        // Série constante : écart-type nul, les trois bandes se confondent
        let values = [50.0; 25];
        let bands = bollinger(&values, 20, 2.0);

        let last = bands.upper.len() - 1;
        assert_eq!(bands.upper[last], Some(50.0));
        assert_eq!(bands.middle[last], Some(50.0));
        assert_eq!(bands.lower[last], Some(50.0));
    }

    #[test]
    fn test_bollinger_bands_ordering() {
        let values: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
        let bands = bollinger(&values, 20, 2.0);

        for i in 0..values.len() {
            if let (Some(u), Some(m), Some(l)) =
                (bands.upper[i], bands.middle[i], bands.lower[i])
            {
                assert!(u >= m);
                assert!(m >= l);
            }
        }
    }

    #[test]
    #[should_panic(expected = "Bollinger period must be >= 2")]
    fn test_bollinger_period_one_panics() {
        bollinger(&[1.0, 2.0], 1, 2.0);
    }
}

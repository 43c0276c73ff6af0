//! Outcome normalization onto canonical positional slots.

use super::event::{Market, Outcome};

/// Label used for the neutral slot of a three-way market.
pub const DRAW_LABEL: &str = "Draw";

/// A market's outcomes in canonical slot order.
///
/// Two-way markets keep their quoted order; three-way markets are resolved
/// to home/draw/away by team name, with the draw slot filled by exclusion
/// only when the mapping is unambiguous.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedMarket {
    TwoWay { first: Outcome, second: Outcome },
    ThreeWay { home: Outcome, draw: Outcome, away: Outcome },
}

impl NormalizedMarket {
    /// Outcomes in slot order.
    pub fn outcomes(&self) -> Vec<&Outcome> {
        match self {
            Self::TwoWay { first, second } => vec![first, second],
            Self::ThreeWay { home, draw, away } => vec![home, draw, away],
        }
    }

    /// Quoted prices in slot order.
    pub fn prices(&self) -> Vec<f64> {
        self.outcomes().iter().map(|outcome| outcome.price).collect()
    }

    /// Display labels in slot order. The draw slot is labeled
    /// [`DRAW_LABEL`] regardless of how the bookmaker spelled it.
    pub fn labels(&self) -> Vec<String> {
        match self {
            Self::TwoWay { first, second } => vec![first.name.clone(), second.name.clone()],
            Self::ThreeWay { home, away, .. } => {
                vec![home.name.clone(), DRAW_LABEL.to_string(), away.name.clone()]
            }
        }
    }
}

/// Map a market's raw outcome list onto canonical slots.
///
/// Returns `None` for markets that are not evaluable: an outcome count
/// other than 2 or 3, or a three-way market whose home/draw/away slots
/// cannot each be resolved exactly once.
pub fn normalize(market: &Market, home_team: &str, away_team: &str) -> Option<NormalizedMarket> {
    match market.outcomes.as_slice() {
        [first, second] => Some(NormalizedMarket::TwoWay {
            first: first.clone(),
            second: second.clone(),
        }),
        outcomes @ [_, _, _] => {
            let mut home = None;
            let mut draw = None;
            let mut away = None;
            for outcome in outcomes {
                let slot = if outcome.name == home_team {
                    &mut home
                } else if outcome.name == away_team {
                    &mut away
                } else {
                    &mut draw
                };
                if slot.replace(outcome.clone()).is_some() {
                    // Two outcomes competing for one slot: inconclusive.
                    return None;
                }
            }
            Some(NormalizedMarket::ThreeWay {
                home: home?,
                draw: draw?,
                away: away?,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market(names_and_prices: &[(&str, f64)]) -> Market {
        Market::h2h(
            names_and_prices
                .iter()
                .map(|(name, price)| Outcome::new(*name, *price))
                .collect(),
        )
    }

    #[test]
    fn two_way_keeps_quoted_order() {
        let market = market(&[("Nadal", 1.5), ("Federer", 2.6)]);
        let normalized = normalize(&market, "Nadal", "Federer").unwrap();

        assert_eq!(normalized.labels(), vec!["Nadal", "Federer"]);
        assert_eq!(normalized.prices(), vec![1.5, 2.6]);
    }

    #[test]
    fn three_way_resolves_slots_in_any_quoted_order() {
        let market = market(&[("Draw", 3.2), ("Lyon", 2.8), ("Marseille", 2.5)]);
        let normalized = normalize(&market, "Marseille", "Lyon").unwrap();

        assert_eq!(normalized.labels(), vec!["Marseille", "Draw", "Lyon"]);
        assert_eq!(normalized.prices(), vec![2.5, 3.2, 2.8]);
    }

    #[test]
    fn three_way_draw_label_is_canonical() {
        let market = market(&[("Marseille", 2.5), ("Match Nul", 3.2), ("Lyon", 2.8)]);
        let normalized = normalize(&market, "Marseille", "Lyon").unwrap();

        assert_eq!(normalized.labels()[1], DRAW_LABEL);
    }

    #[test]
    fn duplicate_team_name_is_inconclusive() {
        let market = market(&[("Marseille", 2.5), ("Marseille", 3.2), ("Lyon", 2.8)]);
        assert_eq!(normalize(&market, "Marseille", "Lyon"), None);
    }

    #[test]
    fn two_unmatched_names_are_inconclusive() {
        let market = market(&[("Draw", 3.2), ("Tie", 3.1), ("Lyon", 2.8)]);
        assert_eq!(normalize(&market, "Marseille", "Lyon"), None);
    }

    #[test]
    fn missing_team_name_is_inconclusive() {
        // Away team never appears; two outcomes fall to the draw slot.
        let market = market(&[("Marseille", 2.5), ("Draw", 3.2), ("Olympique", 2.8)]);
        assert_eq!(normalize(&market, "Marseille", "Lyon"), None);
    }

    #[test]
    fn wrong_outcome_counts_are_not_evaluable() {
        assert_eq!(normalize(&market(&[("A", 2.0)]), "A", "B"), None);
        assert_eq!(
            normalize(
                &market(&[("A", 2.0), ("B", 3.0), ("C", 4.0), ("D", 5.0)]),
                "A",
                "B"
            ),
            None
        );
        assert_eq!(normalize(&market(&[]), "A", "B"), None);
    }
}

//! Upgrade shop
//!
//! Each purchase charges the current cost, then raises that kind's cost.

use serde::{Deserialize, Serialize};

use super::stats::StatModel;
use crate::consts::*;

/// Upgrade kinds, bound to keys 1-4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpgradeKind {
    Speed,
    Size,
    Strength,
    Health,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 4] = [
        UpgradeKind::Speed,
        UpgradeKind::Size,
        UpgradeKind::Strength,
        UpgradeKind::Health,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UpgradeKind::Speed => "speed",
            UpgradeKind::Size => "size",
            UpgradeKind::Strength => "strength",
            UpgradeKind::Health => "health",
        }
    }

    /// Human-readable label for HUD text
    pub fn label(&self) -> &'static str {
        match self {
            UpgradeKind::Speed => "Speed",
            UpgradeKind::Size => "Size",
            UpgradeKind::Strength => "Strength",
            UpgradeKind::Health => "Health",
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(UpgradeKind::Speed),
            '2' => Some(UpgradeKind::Size),
            '3' => Some(UpgradeKind::Strength),
            '4' => Some(UpgradeKind::Health),
            _ => None,
        }
    }

    pub fn key(&self) -> char {
        match self {
            UpgradeKind::Speed => '1',
            UpgradeKind::Size => '2',
            UpgradeKind::Strength => '3',
            UpgradeKind::Health => '4',
        }
    }

    /// How much the cost rises after each purchase
    pub fn cost_step(&self) -> u64 {
        match self {
            UpgradeKind::Speed => SPEED_COST_STEP,
            UpgradeKind::Size => SIZE_COST_STEP,
            UpgradeKind::Strength => STRENGTH_COST_STEP,
            UpgradeKind::Health => HEALTH_COST_STEP,
        }
    }
}

/// Current price of each upgrade kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpgradeCosts {
    pub speed: u64,
    pub size: u64,
    pub strength: u64,
    pub health: u64,
}

impl Default for UpgradeCosts {
    fn default() -> Self {
        Self {
            speed: SPEED_COST,
            size: SIZE_COST,
            strength: STRENGTH_COST,
            health: HEALTH_COST,
        }
    }
}

impl UpgradeCosts {
    pub fn get(&self, kind: UpgradeKind) -> u64 {
        match kind {
            UpgradeKind::Speed => self.speed,
            UpgradeKind::Size => self.size,
            UpgradeKind::Strength => self.strength,
            UpgradeKind::Health => self.health,
        }
    }

    fn get_mut(&mut self, kind: UpgradeKind) -> &mut u64 {
        match kind {
            UpgradeKind::Speed => &mut self.speed,
            UpgradeKind::Size => &mut self.size,
            UpgradeKind::Strength => &mut self.strength,
            UpgradeKind::Health => &mut self.health,
        }
    }
}

/// A completed purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseReceipt {
    pub kind: UpgradeKind,
    /// Price paid (the cost before escalation)
    pub charged: u64,
    pub new_score: u64,
    pub new_cost: u64,
}

/// Result of a purchase attempt. Only `Purchased` mutated anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased(PurchaseReceipt),
    /// Score below the current cost
    Unaffordable { cost: u64, score: u64 },
    /// The player is dead
    Terminal,
}

impl PurchaseOutcome {
    pub fn is_purchased(&self) -> bool {
        matches!(self, PurchaseOutcome::Purchased(_))
    }
}

/// Upgrade prices and the escalation rule
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpgradeCatalog {
    costs: UpgradeCosts,
}

impl UpgradeCatalog {
    pub fn new(costs: UpgradeCosts) -> Self {
        Self { costs }
    }

    pub fn costs(&self) -> UpgradeCosts {
        self.costs
    }

    /// Current price of `kind`
    pub fn quote(&self, kind: UpgradeKind) -> u64 {
        self.costs.get(kind)
    }

    /// Buy one upgrade of `kind` with the model's score
    pub fn try_purchase(&mut self, kind: UpgradeKind, model: &mut StatModel) -> PurchaseOutcome {
        if model.is_dead() {
            return PurchaseOutcome::Terminal;
        }

        let cost = self.quote(kind);
        if !model.spend(cost) {
            return PurchaseOutcome::Unaffordable {
                cost,
                score: model.score(),
            };
        }

        let slot = self.costs.get_mut(kind);
        *slot = slot.saturating_add(kind.cost_step());
        let new_cost = *slot;
        model.apply_upgrade(kind);

        PurchaseOutcome::Purchased(PurchaseReceipt {
            kind,
            charged: cost,
            new_score: model.score(),
            new_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PlayerStats;
    use proptest::prelude::*;

    fn kind_strategy() -> impl Strategy<Value = UpgradeKind> {
        prop_oneof![
            Just(UpgradeKind::Speed),
            Just(UpgradeKind::Size),
            Just(UpgradeKind::Strength),
            Just(UpgradeKind::Health),
        ]
    }

    #[test]
    fn test_key_mapping() {
        for kind in UpgradeKind::ALL {
            assert_eq!(UpgradeKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(UpgradeKind::from_key('5'), None);
        assert_eq!(UpgradeKind::from_key('a'), None);
    }

    #[test]
    fn test_buy_speed_then_cannot_afford_size() {
        let mut catalog = UpgradeCatalog::default();
        let mut model = StatModel::with_score(PlayerStats::default(), 10);

        let outcome = catalog.try_purchase(UpgradeKind::Speed, &mut model);
        assert_eq!(
            outcome,
            PurchaseOutcome::Purchased(PurchaseReceipt {
                kind: UpgradeKind::Speed,
                charged: 10,
                new_score: 0,
                new_cost: 15,
            })
        );
        assert_eq!(model.stats().speed, 220.0);

        let outcome = catalog.try_purchase(UpgradeKind::Size, &mut model);
        assert_eq!(outcome, PurchaseOutcome::Unaffordable { cost: 10, score: 0 });
        assert_eq!(model.score(), 0);
        assert_eq!(catalog.quote(UpgradeKind::Size), 10);
    }

    #[test]
    fn test_buy_health_heals_fully() {
        let mut catalog = UpgradeCatalog::default();
        let mut model = StatModel::with_score(PlayerStats::default(), 20);
        model.apply_damage(2);
        assert_eq!(model.stats().health, 3);

        let outcome = catalog.try_purchase(UpgradeKind::Health, &mut model);
        assert!(outcome.is_purchased());
        assert_eq!(model.score(), 0);
        assert_eq!(catalog.quote(UpgradeKind::Health), 30);
        assert_eq!(model.stats().max_health, 6);
        assert_eq!(model.stats().health, 6);
    }

    #[test]
    fn test_dead_player_cannot_buy() {
        let mut catalog = UpgradeCatalog::default();
        let mut model = StatModel::with_score(PlayerStats::default(), 100);
        model.apply_damage(5);

        assert_eq!(
            catalog.try_purchase(UpgradeKind::Speed, &mut model),
            PurchaseOutcome::Terminal
        );
        assert_eq!(model.score(), 100);
        assert_eq!(catalog.costs(), UpgradeCosts::default());
    }

    #[test]
    fn test_cost_escalation_per_kind() {
        let mut catalog = UpgradeCatalog::default();
        let mut model = StatModel::with_score(PlayerStats::default(), 1000);
        for kind in UpgradeKind::ALL {
            catalog.try_purchase(kind, &mut model);
        }
        let costs = catalog.costs();
        assert_eq!(costs.speed, 15);
        assert_eq!(costs.size, 15);
        assert_eq!(costs.strength, 25);
        assert_eq!(costs.health, 30);
        assert_eq!(model.score(), 1000 - 10 - 10 - 15 - 20);
    }

    proptest! {
        #[test]
        fn prop_purchase_fails_iff_unaffordable(
            score in 0u64..200,
            purchases in proptest::collection::vec(kind_strategy(), 1..20),
        ) {
            let mut catalog = UpgradeCatalog::default();
            let mut model = StatModel::with_score(PlayerStats::default(), score);

            for kind in purchases {
                let score_before = model.score();
                let cost_before = catalog.quote(kind);
                let health_before = model.stats().health;

                match catalog.try_purchase(kind, &mut model) {
                    PurchaseOutcome::Purchased(receipt) => {
                        prop_assert!(score_before >= cost_before);
                        prop_assert_eq!(receipt.charged, cost_before);
                        prop_assert_eq!(model.score(), score_before - cost_before);
                        prop_assert!(catalog.quote(kind) > cost_before);
                        if kind == UpgradeKind::Health {
                            prop_assert_eq!(model.stats().health, model.stats().max_health);
                        }
                    }
                    PurchaseOutcome::Unaffordable { .. } => {
                        prop_assert!(score_before < cost_before);
                        prop_assert_eq!(model.score(), score_before);
                        prop_assert_eq!(catalog.quote(kind), cost_before);
                        prop_assert_eq!(model.stats().health, health_before);
                    }
                    PurchaseOutcome::Terminal => prop_assert!(false, "player is alive"),
                }
            }
        }
    }
}

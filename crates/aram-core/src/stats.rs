//! Team composition and matchup statistics.

use serde::Serialize;

use crate::champion::{Champion, ChampionInfo};
use crate::i18n::MetricLabels;

/// Tag counted for champions that carry none.
pub const UNKNOWN_ROLE: &str = "Unknown";

/// Rounds to one decimal place.
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleCount {
    pub role: String,
    pub count: usize,
}

/// Composition overview of one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    /// Role counts, most common first; ties keep first-seen order.
    pub roles: Vec<RoleCount>,
    pub unique_roles: usize,
    pub average_difficulty: f64,
}

impl TeamSummary {
    /// `None` for an empty team.
    pub fn of(champions: &[Champion]) -> Option<Self> {
        if champions.is_empty() {
            return None;
        }

        let mut roles: Vec<RoleCount> = Vec::new();
        let mut bump = |role: &str| match roles.iter_mut().find(|r| r.role == role) {
            Some(existing) => existing.count += 1,
            None => roles.push(RoleCount {
                role: role.to_string(),
                count: 1,
            }),
        };

        for champion in champions {
            if champion.tags.is_empty() {
                bump(UNKNOWN_ROLE);
            }
            for tag in &champion.tags {
                bump(tag);
            }
        }

        // sort_by is stable.
        roles.sort_by(|a, b| b.count.cmp(&a.count));

        let total: u32 = champions.iter().map(|c| c.info.difficulty).sum();
        let average_difficulty = round_tenth(f64::from(total) / champions.len() as f64);

        Some(Self {
            unique_roles: roles.len(),
            roles,
            average_difficulty,
        })
    }

    /// Bar width for `count` in percent of the most common role.
    pub fn relative_share(&self, count: usize) -> f64 {
        let top = self.roles.first().map(|r| r.count).unwrap_or(1).max(1);
        count as f64 / top as f64 * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Attack,
    Defense,
    Magic,
    Difficulty,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Attack,
        Metric::Defense,
        Metric::Magic,
        Metric::Difficulty,
    ];

    pub fn value(self, info: &ChampionInfo) -> u32 {
        match self {
            Self::Attack => info.attack,
            Self::Defense => info.defense,
            Self::Magic => info.magic,
            Self::Difficulty => info.difficulty,
        }
    }

    pub fn label(self, labels: &MetricLabels) -> &'static str {
        match self {
            Self::Attack => labels.attack,
            Self::Defense => labels.defense,
            Self::Magic => labels.magic,
            Self::Difficulty => labels.difficulty,
        }
    }

    /// Team average rounded to one decimal; 0 for an empty team.
    pub fn average(self, team: &[Champion]) -> f64 {
        if team.is_empty() {
            return 0.0;
        }
        let total: u32 = team.iter().map(|c| self.value(&c.info)).sum();
        round_tenth(f64::from(total) / team.len() as f64)
    }
}

/// One metric compared across both teams.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricComparison {
    pub metric: Metric,
    pub left: f64,
    pub right: f64,
    /// Bar widths in percent of the larger side (floor of 1).
    pub left_ratio: f64,
    pub right_ratio: f64,
}

impl MetricComparison {
    pub fn of(metric: Metric, left: &[Champion], right: &[Champion]) -> Self {
        let left_avg = metric.average(left);
        let right_avg = metric.average(right);
        let max = left_avg.max(right_avg).max(1.0);
        Self {
            metric,
            left: left_avg,
            right: right_avg,
            left_ratio: (left_avg / max * 100.0).clamp(0.0, 100.0),
            right_ratio: (right_avg / max * 100.0).clamp(0.0, 100.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupInsights {
    pub metrics: Vec<MetricComparison>,
}

impl MatchupInsights {
    /// `None` when both teams are empty.
    pub fn of(left: &[Champion], right: &[Champion]) -> Option<Self> {
        if left.is_empty() && right.is_empty() {
            return None;
        }
        Some(Self {
            metrics: Metric::ALL
                .into_iter()
                .map(|m| MetricComparison::of(m, left, right))
                .collect(),
        })
    }

    pub fn get(&self, metric: Metric) -> Option<&MetricComparison> {
        self.metrics.iter().find(|m| m.metric == metric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::champion::test_champion;

    fn info(attack: u32, defense: u32, magic: u32, difficulty: u32) -> ChampionInfo {
        ChampionInfo {
            attack,
            defense,
            magic,
            difficulty,
        }
    }

    #[test]
    fn empty_team_has_no_summary() {
        assert!(TeamSummary::of(&[]).is_none());
    }

    #[test]
    fn counts_every_tag_and_unknown() {
        let team = vec![
            test_champion("Ahri", &["Mage", "Assassin"], info(3, 4, 8, 5)),
            test_champion("Lux", &["Mage", "Support"], info(2, 4, 9, 5)),
            test_champion("Mystery", &[], info(0, 0, 0, 2)),
        ];
        let summary = TeamSummary::of(&team).unwrap();

        assert_eq!(summary.roles[0], RoleCount { role: "Mage".into(), count: 2 });
        let order: Vec<_> = summary.roles.iter().map(|r| r.role.as_str()).collect();
        assert_eq!(order, vec!["Mage", "Assassin", "Support", UNKNOWN_ROLE]);
        assert_eq!(summary.unique_roles, 4);
        assert_eq!(summary.average_difficulty, 4.0);
        assert_eq!(summary.relative_share(1), 50.0);
    }

    #[test]
    fn difficulty_rounds_to_one_decimal() {
        let team = vec![
            test_champion("A", &["Tank"], info(0, 0, 0, 1)),
            test_champion("B", &["Tank"], info(0, 0, 0, 2)),
            test_champion("C", &["Tank"], info(0, 0, 0, 2)),
        ];
        // 5 / 3 = 1.666…
        assert_eq!(TeamSummary::of(&team).unwrap().average_difficulty, 1.7);
    }

    #[test]
    fn insights_need_at_least_one_team() {
        assert!(MatchupInsights::of(&[], &[]).is_none());
    }

    #[test]
    fn insights_compare_averages() {
        let left = vec![
            test_champion("Darius", &["Fighter"], info(9, 5, 1, 2)),
            test_champion("Garen", &["Fighter"], info(7, 7, 1, 5)),
        ];
        let right = vec![test_champion("Veigar", &["Mage"], info(2, 2, 10, 7))];
        let insights = MatchupInsights::of(&left, &right).unwrap();

        let attack = insights.get(Metric::Attack).unwrap();
        assert_eq!(attack.left, 8.0);
        assert_eq!(attack.right, 2.0);
        assert_eq!(attack.left_ratio, 100.0);
        assert_eq!(attack.right_ratio, 25.0);

        let magic = insights.get(Metric::Magic).unwrap();
        assert_eq!(magic.left, 1.0);
        assert_eq!(magic.right_ratio, 100.0);
        assert_eq!(magic.left_ratio, 10.0);
    }

    #[test]
    fn empty_side_scores_zero() {
        let right = vec![test_champion("Zed", &["Assassin"], info(9, 2, 1, 7))];
        let insights = MatchupInsights::of(&[], &right).unwrap();
        let defense = insights.get(Metric::Defense).unwrap();
        assert_eq!(defense.left, 0.0);
        assert_eq!(defense.left_ratio, 0.0);
    }

    #[test]
    fn ratios_floor_the_denominator_at_one() {
        let left = vec![test_champion("A", &[], info(0, 0, 0, 0))];
        let right = vec![test_champion("B", &[], info(0, 0, 0, 0))];
        let m = MetricComparison::of(Metric::Attack, &left, &right);
        assert_eq!((m.left_ratio, m.right_ratio), (0.0, 0.0));
    }
}

//! Plain-text rendering of a roll.

use std::fmt::Write;

use aram_core::{Dictionary, MatchupInsights, TeamSummary};

use super::roll::{RollReport, TeamReport};

const BAR_WIDTH: f64 = 20.0;

fn bar(percent: f64) -> String {
    "#".repeat((percent / 100.0 * BAR_WIDTH).round() as usize)
}

pub(crate) fn render_roll(report: &RollReport) -> String {
    let dict = report.language.dictionary();
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", dict.page.title);
    let _ = writeln!(out, "{}: {}", dict.seed_actions.seed_label, report.seed);
    let _ = writeln!(
        out,
        "{}: {}",
        dict.team_controls.champions_per_team, report.team_size
    );
    let _ = writeln!(
        out,
        "{}: {}",
        dict.language_selector.label,
        dict.language_selector.option(report.language)
    );

    for team in &report.teams {
        out.push('\n');
        render_team(&mut out, dict, team);
    }

    if let Some(insights) = &report.insights {
        out.push('\n');
        render_insights(&mut out, dict, insights);
    }

    let _ = writeln!(out, "\n{}: {}", dict.seed_actions.share, report.share_url);
    let _ = writeln!(out, "\n{}:\n{}", dict.seed_actions.copy_matchup, report.matchup_text);
    out
}

fn render_team(out: &mut String, dict: &Dictionary, team: &TeamReport) {
    let _ = writeln!(
        out,
        "{} · {} ({} {})",
        team.label,
        team.badge,
        team.champions.len(),
        dict.page.champion_count_label
    );
    for (i, champion) in team.champions.iter().enumerate() {
        let roles: Vec<_> = champion
            .tags
            .iter()
            .map(|t| dict.team_summary.role_label(t))
            .collect();
        let _ = writeln!(out, "  {:>2}. {:<16} {}", i + 1, champion.name, roles.join(", "));
    }
    if let Some(summary) = &team.summary {
        render_summary(out, dict, summary);
    }
}

fn render_summary(out: &mut String, dict: &Dictionary, summary: &TeamSummary) {
    let labels = &dict.team_summary;
    let _ = writeln!(out, "  {}", labels.heading);
    let _ = writeln!(out, "    {}: {}", labels.unique_roles, summary.unique_roles);
    let _ = writeln!(out, "    {}:", labels.role_distribution);
    for role in &summary.roles {
        let _ = writeln!(
            out,
            "      {:<10} {:>2} {}",
            labels.role_label(&role.role),
            role.count,
            bar(summary.relative_share(role.count))
        );
    }
    let _ = writeln!(
        out,
        "    {}: {:.1}",
        labels.average_difficulty, summary.average_difficulty
    );
}

fn render_insights(out: &mut String, dict: &Dictionary, insights: &MatchupInsights) {
    let labels = &dict.matchup_insights;
    let _ = writeln!(out, "{}", labels.heading);
    let _ = writeln!(out, "{}", labels.helper);
    let _ = writeln!(
        out,
        "  {:<12} {:>6} {:>6}",
        "", labels.left_label, labels.right_label
    );
    for comparison in &insights.metrics {
        let _ = writeln!(
            out,
            "  {:<12} {:>6.1} {:>6.1}",
            comparison.metric.label(&labels.metrics),
            comparison.left,
            comparison.right
        );
    }
}

use anyhow::Context;
use aram_core::{
    draw_matchup, generate_default_seed, matchup_summary, Champion, ChampionInfo,
    DataSourceConfig, Language, MatchupInsights, ShareLink, TeamSize, TeamSummary,
};
use serde::Serialize;
use url::Url;

use super::render::render_roll;
use super::source::load;
use super::{OutputFormat, RollArgs};
use crate::exit_codes::SUCCESS;

#[derive(Debug, Serialize)]
pub(crate) struct RollReport {
    pub seed: String,
    pub team_size: TeamSize,
    pub language: Language,
    pub share_url: String,
    pub teams: [TeamReport; 2],
    pub insights: Option<MatchupInsights>,
    pub matchup_text: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct TeamReport {
    pub label: String,
    pub badge: &'static str,
    pub champions: Vec<ChampionEntry>,
    pub summary: Option<TeamSummary>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChampionEntry {
    pub id: String,
    pub name: String,
    pub title: String,
    pub tags: Vec<String>,
    pub info: ChampionInfo,
    pub image_url: String,
}

/// What to roll, after the link and the flags have been merged.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RollRequest {
    pub seed: String,
    pub team_size: TeamSize,
    pub language: Language,
}

impl RollRequest {
    /// Flags win over the share link; a missing seed is generated.
    pub fn resolve(args: &RollArgs) -> anyhow::Result<Self> {
        let link = args
            .link
            .as_ref()
            .map(ShareLink::from_url)
            .transpose()
            .context("reading share link")?;

        let seed = match (&args.seed, &link) {
            (Some(seed), _) => seed.clone(),
            (None, Some(link)) => link.seed.clone(),
            (None, None) => generate_default_seed()?,
        };

        let team_size = match (&args.size, &link) {
            (Some(raw), _) => TeamSize::parse(Some(raw)),
            (None, Some(link)) => link.team_size,
            (None, None) => TeamSize::default(),
        };

        let language = match (&args.lang, &link) {
            (Some(raw), _) => Language::resolve(Some(raw)),
            (None, Some(link)) => link.language,
            (None, None) => Language::default(),
        };

        Ok(Self {
            seed,
            team_size,
            language,
        })
    }
}

pub async fn run(args: RollArgs) -> anyhow::Result<i32> {
    let request = RollRequest::resolve(&args)?;
    let loaded = load(&args.data).await?;
    let report = build_report(&request, &loaded.champions, &loaded.config, &args.base_url)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
        OutputFormat::Text => print!("{}", render_roll(&report)),
    }
    Ok(SUCCESS)
}

pub(crate) fn build_report(
    request: &RollRequest,
    champions: &[Champion],
    config: &DataSourceConfig,
    share_base: &Url,
) -> anyhow::Result<RollReport> {
    let matchup = draw_matchup(champions, request.team_size, &request.seed)
        .with_context(|| format!("drawing teams for seed {:?}", request.seed))?;

    let dict = request.language.dictionary();
    let share_url = ShareLink::new(&request.seed, request.team_size, request.language)
        .to_url(share_base)?
        .to_string();
    let matchup_text = matchup_summary(
        &request.seed,
        request.team_size,
        &matchup,
        &dict.seed_actions.summary,
    );
    let insights = MatchupInsights::of(&matchup.left, &matchup.right);

    let team = |number: u8, badge: &'static str, members: &[Champion]| TeamReport {
        label: format!("{} {}", dict.page.team_label, number),
        badge,
        summary: TeamSummary::of(members),
        champions: members
            .iter()
            .map(|c| ChampionEntry {
                id: c.id.clone(),
                name: c.name.clone(),
                title: c.title.clone(),
                tags: c.tags.clone(),
                info: c.info,
                image_url: config.image_url(c),
            })
            .collect(),
    };

    Ok(RollReport {
        seed: request.seed.clone(),
        team_size: request.team_size,
        language: request.language,
        share_url,
        teams: [
            team(1, dict.page.left_badge, &matchup.left),
            team(2, dict.page.right_badge, &matchup.right),
        ],
        insights,
        matchup_text,
    })
}

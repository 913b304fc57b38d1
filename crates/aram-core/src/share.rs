//! Share links and the copyable matchup text.

use serde::Serialize;
use url::Url;

use crate::champion::Champion;
use crate::error::{AramError, AramResult};
use crate::i18n::{Language, SummaryLabels};
use crate::team::{Matchup, TeamSize};

/// Everything needed to reproduce a matchup on another machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLink {
    pub seed: String,
    pub team_size: TeamSize,
    pub language: Language,
}

impl ShareLink {
    pub fn new(seed: impl Into<String>, team_size: TeamSize, language: Language) -> Self {
        Self {
            seed: seed.into(),
            team_size,
            language,
        }
    }

    /// `{base}/{seed}`, with `size` and `lang` only when not the defaults.
    pub fn to_url(&self, base: &Url) -> AramResult<Url> {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);

        url.path_segments_mut()
            .map_err(|_| AramError::Config {
                message: format!("share base URL cannot hold a path: {}", base),
            })?
            .pop_if_empty()
            .push(&self.seed);

        if !self.team_size.is_default() || self.language != Language::default() {
            let mut query = url.query_pairs_mut();
            if !self.team_size.is_default() {
                query.append_pair("size", &self.team_size.to_string());
            }
            if self.language != Language::default() {
                query.append_pair("lang", self.language.code());
            }
        }

        Ok(url)
    }

    /// Reads a link produced by [`ShareLink::to_url`] or by the web page.
    ///
    /// The last path segment is the seed. `size` and `lang` follow the usual
    /// lenient parsing; absent parameters mean the defaults.
    pub fn from_url(url: &Url) -> AramResult<Self> {
        let seed = url
            .path_segments()
            .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
            .map(decode_segment)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AramError::invalid_argument(format!("share link has no seed: {url}")))?;

        let param = |name: &str| {
            url.query_pairs()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.into_owned())
        };

        Ok(Self {
            seed,
            team_size: TeamSize::parse(param("size").as_deref()),
            language: Language::resolve(param("lang").as_deref()),
        })
    }
}

/// Percent-decodes one path segment.
///
/// Form decoding treats `+`, `&` and `=` specially, so those are escaped
/// first; what is left parses as a single key.
fn decode_segment(segment: &str) -> String {
    let escaped = segment
        .replace('+', "%2B")
        .replace('&', "%26")
        .replace('=', "%3D");
    url::form_urlencoded::parse(escaped.as_bytes())
        .map(|(key, _)| key.into_owned())
        .collect()
}

/// Plain-text matchup used by "copy matchup".
///
/// ```text
/// ARAM Seed: abc
/// Champions per team: 10
///
/// Team 1 (10): Ahri, Zed, …
/// Team 2 (10): Lux, Jinx, …
/// ```
pub fn matchup_summary(
    seed: &str,
    team_size: TeamSize,
    matchup: &Matchup<Champion>,
    labels: &SummaryLabels,
) -> String {
    let names = |team: &[Champion]| {
        team.iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    [
        format!("{}: {}", labels.seed, seed),
        format!("{}: {}", labels.champions_per_team, team_size),
        String::new(),
        format!(
            "{} 1 ({}): {}",
            labels.team_label,
            matchup.left.len(),
            names(&matchup.left)
        ),
        format!(
            "{} 2 ({}): {}",
            labels.team_label,
            matchup.right.len(),
            names(&matchup.right)
        ),
    ]
    .join("\n")
}

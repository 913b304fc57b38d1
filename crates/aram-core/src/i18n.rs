//! Translation bundles for the randomizer's labels.
//!
//! One fixed bundle per language. Unknown or missing language codes resolve
//! to English; there is no per-key fallback chain.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Vi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Vi];

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Vi => "vi",
        }
    }

    /// Resolves a raw language code, defaulting to English.
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.map(str::trim)
            .and_then(|code| {
                Self::ALL
                    .into_iter()
                    .find(|lang| lang.code().eq_ignore_ascii_case(code))
            })
            .unwrap_or_default()
    }

    pub fn dictionary(self) -> &'static Dictionary {
        match self {
            Self::En => &EN,
            Self::Vi => &VI,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug)]
pub struct PageTranslations {
    pub title: &'static str,
    pub description: &'static str,
    pub team_label: &'static str,
    pub regenerate: &'static str,
    pub champion_count_label: &'static str,
    pub left_badge: &'static str,
    pub right_badge: &'static str,
}

/// Labels used by the copyable matchup text.
#[derive(Debug)]
pub struct SummaryLabels {
    pub seed: &'static str,
    pub champions_per_team: &'static str,
    pub team_label: &'static str,
}

#[derive(Debug)]
pub struct SeedActionsTranslations {
    pub seed_label: &'static str,
    pub copy_link: &'static str,
    pub share: &'static str,
    pub copy_matchup: &'static str,
    pub share_title: &'static str,
    pub summary: SummaryLabels,
}

#[derive(Debug)]
pub struct TeamControlsTranslations {
    pub heading: &'static str,
    pub champions_per_team: &'static str,
    pub helper: &'static str,
}

#[derive(Debug)]
pub struct TeamSummaryTranslations {
    pub heading: &'static str,
    pub unique_roles: &'static str,
    pub role_distribution: &'static str,
    pub average_difficulty: &'static str,
    role_labels: &'static [(&'static str, &'static str)],
}

impl TeamSummaryTranslations {
    /// Localized role name; unknown tags are shown as-is.
    pub fn role_label<'a>(&self, role: &'a str) -> &'a str {
        self.role_labels
            .iter()
            .find(|(tag, _)| *tag == role)
            .map(|(_, label)| *label)
            .unwrap_or(role)
    }
}

#[derive(Debug)]
pub struct MetricLabels {
    pub attack: &'static str,
    pub defense: &'static str,
    pub magic: &'static str,
    pub difficulty: &'static str,
}

#[derive(Debug)]
pub struct MatchupInsightsTranslations {
    pub heading: &'static str,
    pub helper: &'static str,
    pub left_label: &'static str,
    pub right_label: &'static str,
    pub metrics: MetricLabels,
}

#[derive(Debug)]
pub struct LanguageSelectorTranslations {
    pub label: &'static str,
}

impl LanguageSelectorTranslations {
    /// Native name of `language`, identical in every bundle.
    pub fn option(&self, language: Language) -> &'static str {
        match language {
            Language::En => "English",
            Language::Vi => "Tiếng Việt",
        }
    }
}

#[derive(Debug)]
pub struct Dictionary {
    pub page: PageTranslations,
    pub seed_actions: SeedActionsTranslations,
    pub team_controls: TeamControlsTranslations,
    pub team_summary: TeamSummaryTranslations,
    pub matchup_insights: MatchupInsightsTranslations,
    pub language_selector: LanguageSelectorTranslations,
}

static EN: Dictionary = Dictionary {
    page: PageTranslations {
        title: "ARAM Random Team Generator",
        description: "Generate two colossal ARAM squads using a shared seed so your friends can reroll the exact same clash. Copy or share the current seed, or spin up a fresh one whenever inspiration strikes.",
        team_label: "Team",
        regenerate: "Regenerate",
        champion_count_label: "Champions",
        left_badge: "Sun Team",
        right_badge: "Moon Team",
    },
    seed_actions: SeedActionsTranslations {
        seed_label: "Seed",
        copy_link: "Copy link",
        share: "Share",
        copy_matchup: "Copy matchup",
        share_title: "ARAM Randomizer",
        summary: SummaryLabels {
            seed: "ARAM Seed",
            champions_per_team: "Champions per team",
            team_label: "Team",
        },
    },
    team_controls: TeamControlsTranslations {
        heading: "Team Options",
        champions_per_team: "Champions per team",
        helper: "Dial in anything from tight 10 champion crews to sprawling 20 pick drafts while keeping every seed instantly shareable.",
    },
    team_summary: TeamSummaryTranslations {
        heading: "Composition overview",
        unique_roles: "Unique roles",
        role_distribution: "Role distribution",
        average_difficulty: "Avg. difficulty",
        role_labels: &[
            ("Assassin", "Assassin"),
            ("Fighter", "Fighter"),
            ("Mage", "Mage"),
            ("Marksman", "Marksman"),
            ("Support", "Support"),
            ("Tank", "Tank"),
            ("Unknown", "Unknown"),
        ],
    },
    matchup_insights: MatchupInsightsTranslations {
        heading: "Matchup insights",
        helper: "Average champion ratings for each side.",
        left_label: "Sun",
        right_label: "Moon",
        metrics: MetricLabels {
            attack: "Attack",
            defense: "Defense",
            magic: "Magic",
            difficulty: "Difficulty",
        },
    },
    language_selector: LanguageSelectorTranslations { label: "Language" },
};

static VI: Dictionary = Dictionary {
    page: PageTranslations {
        title: "Trình Tạo Đội ARAM Ngẫu Nhiên",
        description: "Tạo hai đội ARAM khổng lồ bằng cùng một hạt giống để cả nhóm cùng nhận kèo đại chiến. Sao chép hoặc chia sẻ hạt giống hiện tại, hoặc tạo mã mới bất cứ lúc nào.",
        team_label: "Đội",
        regenerate: "Tạo lại",
        champion_count_label: "Tướng",
        left_badge: "Thái Dương",
        right_badge: "Nguyệt Ảnh",
    },
    seed_actions: SeedActionsTranslations {
        seed_label: "Hạt giống",
        copy_link: "Sao chép liên kết",
        share: "Chia sẻ",
        copy_matchup: "Sao chép đội hình",
        share_title: "Bộ random ARAM",
        summary: SummaryLabels {
            seed: "Hạt giống ARAM",
            champions_per_team: "Tướng mỗi đội",
            team_label: "Đội",
        },
    },
    team_controls: TeamControlsTranslations {
        heading: "Tùy chọn đội",
        champions_per_team: "Số tướng mỗi đội",
        helper: "Tùy chỉnh từ đội hình 10 tướng gọn nhẹ đến bản nháp 20 tướng hoành tráng mà vẫn chia sẻ hạt giống ngay lập tức.",
    },
    team_summary: TeamSummaryTranslations {
        heading: "Tổng quan đội hình",
        unique_roles: "Số vai trò khác nhau",
        role_distribution: "Phân bố vai trò",
        average_difficulty: "Độ khó trung bình",
        role_labels: &[
            ("Assassin", "Sát thủ"),
            ("Fighter", "Đấu sĩ"),
            ("Mage", "Pháp sư"),
            ("Marksman", "Xạ thủ"),
            ("Support", "Hỗ trợ"),
            ("Tank", "Đỡ đòn"),
            ("Unknown", "Không xác định"),
        ],
    },
    matchup_insights: MatchupInsightsTranslations {
        heading: "Phân tích đối đầu",
        helper: "Chỉ số trung bình của tướng mỗi bên.",
        left_label: "Thái Dương",
        right_label: "Nguyệt Ảnh",
        metrics: MetricLabels {
            attack: "Tấn công",
            defense: "Phòng thủ",
            magic: "Phép thuật",
            difficulty: "Độ khó",
        },
    },
    language_selector: LanguageSelectorTranslations { label: "Ngôn ngữ" },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_supported_codes() {
        assert_eq!(Language::resolve(Some("vi")), Language::Vi);
        assert_eq!(Language::resolve(Some("VI")), Language::Vi);
        assert_eq!(Language::resolve(Some("en")), Language::En);
    }

    #[test]
    fn unknown_or_missing_defaults_to_english() {
        assert_eq!(Language::resolve(None), Language::En);
        assert_eq!(Language::resolve(Some("")), Language::En);
        assert_eq!(Language::resolve(Some("fr")), Language::En);
    }

    #[test]
    fn bundles_differ_per_language() {
        assert_eq!(Language::En.dictionary().page.team_label, "Team");
        assert_eq!(Language::Vi.dictionary().page.team_label, "Đội");
    }

    #[test]
    fn role_labels_fall_back_to_tag() {
        let vi = &Language::Vi.dictionary().team_summary;
        assert_eq!(vi.role_label("Mage"), "Pháp sư");
        assert_eq!(vi.role_label("Jungler"), "Jungler");
    }

    #[test]
    fn language_round_trips_through_serde() {
        let json = serde_json::to_string(&Language::Vi).unwrap();
        assert_eq!(json, "\"vi\"");
        let back: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Language::Vi);
    }
}

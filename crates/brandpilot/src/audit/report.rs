use super::label::{score_label, ScoreLabel};
use super::rules::{ScoreBreakdown, ScoreBucket, ScoreComponent};
use super::ProfileSnapshot;
use serde::Serialize;

/// Score, band and per-bucket trail of one profile audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub score: u8,
    pub label: ScoreLabel,
    pub breakdown: ScoreBreakdown,
    /// Hints for unfinished buckets, biggest gains first.
    pub improvements: Vec<String>,
}

impl AuditReport {
    pub fn from_profile(profile: &ProfileSnapshot) -> Self {
        let breakdown = ScoreBreakdown::from_profile(profile);
        let score = breakdown.score();
        let improvements = improvement_hints(&breakdown);

        Self {
            score,
            label: score_label(i32::from(score)),
            breakdown,
            improvements,
        }
    }
}

fn improvement_hints(breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut open: Vec<&ScoreComponent> = breakdown
        .components()
        .iter()
        .filter(|component| component.missing_points() > 0)
        .collect();
    // Stable sort keeps bucket order among equal gains.
    open.sort_by(|a, b| b.missing_points().cmp(&a.missing_points()));

    open.into_iter()
        .map(|component| {
            format!(
                "{} (+{} pts) : {}",
                component.bucket.label(),
                component.missing_points(),
                hint(component)
            )
        })
        .collect()
}

fn hint(component: &ScoreComponent) -> &'static str {
    let untouched = component.points == 0;
    match component.bucket {
        ScoreBucket::Photo => "ajoute une photo de profil nette et reconnaissable",
        ScoreBucket::Name if untouched => "renseigne un nom de profil",
        ScoreBucket::Name => "ajoute un mot-clé à ton nom, séparé par | ou ·",
        ScoreBucket::Bio if untouched => "écris une bio qui dit qui tu aides et comment",
        ScoreBucket::Bio => {
            "étoffe ta bio sur trois lignes et termine par un appel à l'action (👇, 📩)"
        }
        ScoreBucket::Highlights => "organise au moins cinq stories à la une",
        ScoreBucket::PinnedPosts => "épingle trois posts qui présentent ton offre",
        ScoreBucket::Feed => "harmonise les visuels de ton feed",
        ScoreBucket::Link => "ajoute un lien en bio",
        ScoreBucket::Pillars => "définis au moins trois piliers de contenu",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::ScoreBand;

    #[test]
    fn empty_profile_lists_every_bucket_largest_first() {
        let report = AuditReport::from_profile(&ProfileSnapshot::default());
        assert_eq!(report.score, 0);
        assert_eq!(report.label.band, ScoreBand::Priority);
        assert_eq!(report.improvements.len(), ScoreBucket::ALL.len());
        assert!(report.improvements[0].starts_with("Bio (+25 pts)"));
        assert!(report.improvements[1].starts_with("Stories à la une (+15 pts)"));
        assert!(report.improvements[2].starts_with("Feed (+15 pts)"));
        assert!(report.improvements.last().expect("hint").starts_with("Lien en bio"));
    }

    #[test]
    fn partially_scored_name_gets_keyword_hint() {
        let profile = ProfileSnapshot {
            display_name: Some("Léa".to_string()),
            ..ProfileSnapshot::default()
        };
        let report = AuditReport::from_profile(&profile);
        assert!(report
            .improvements
            .iter()
            .any(|hint| hint.starts_with("Nom (+5 pts)") && hint.contains("mot-clé")));
    }
}

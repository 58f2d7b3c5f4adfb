use super::ProfileSnapshot;
use serde::Serialize;

const NAME_SEPARATORS: &[char] = &['|', '·', '—'];
const CALL_TO_ACTION_GLYPHS: &[char] = &['↓', '👇', '📩', '⤵'];

const FEED_SCORE_CAP: u8 = 15;
const MAX_SCORE: u8 = 100;

/// Point buckets of the audit, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBucket {
    Photo,
    Name,
    Bio,
    Highlights,
    PinnedPosts,
    Feed,
    Link,
    Pillars,
}

impl ScoreBucket {
    pub const ALL: [Self; 8] = [
        Self::Photo,
        Self::Name,
        Self::Bio,
        Self::Highlights,
        Self::PinnedPosts,
        Self::Feed,
        Self::Link,
        Self::Pillars,
    ];

    pub const fn max_points(self) -> u8 {
        match self {
            Self::Photo => 10,
            Self::Name => 10,
            Self::Bio => 25,
            Self::Highlights => 15,
            Self::PinnedPosts => 10,
            Self::Feed => 15,
            Self::Link => 5,
            Self::Pillars => 10,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Photo => "Photo de profil",
            Self::Name => "Nom",
            Self::Bio => "Bio",
            Self::Highlights => "Stories à la une",
            Self::PinnedPosts => "Posts épinglés",
            Self::Feed => "Feed",
            Self::Link => "Lien en bio",
            Self::Pillars => "Piliers de contenu",
        }
    }
}

/// Points earned in one bucket, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub bucket: ScoreBucket,
    pub points: u8,
    pub max_points: u8,
    pub notes: String,
}

impl ScoreComponent {
    fn new(bucket: ScoreBucket, points: u8, notes: impl Into<String>) -> Self {
        Self {
            bucket,
            points,
            max_points: bucket.max_points(),
            notes: notes.into(),
        }
    }

    pub fn missing_points(&self) -> u8 {
        self.max_points.saturating_sub(self.points)
    }
}

/// Every bucket of an audit, in [`ScoreBucket::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScoreBreakdown {
    components: Vec<ScoreComponent>,
}

impl ScoreBreakdown {
    pub fn from_profile(profile: &ProfileSnapshot) -> Self {
        let components = vec![
            photo(profile),
            name(profile),
            bio(profile),
            highlights(profile),
            pinned_posts(profile),
            feed(profile),
            link(profile),
            pillars(profile),
        ];
        Self { components }
    }

    pub fn components(&self) -> &[ScoreComponent] {
        &self.components
    }

    pub fn points_for(&self, bucket: ScoreBucket) -> u8 {
        self.components
            .iter()
            .find(|component| component.bucket == bucket)
            .map_or(0, |component| component.points)
    }

    /// Sum of all buckets, before clamping.
    pub fn raw_total(&self) -> u16 {
        self.components
            .iter()
            .map(|component| u16::from(component.points))
            .sum()
    }

    pub fn score(&self) -> u8 {
        u8::try_from(self.raw_total().min(u16::from(MAX_SCORE))).unwrap_or(MAX_SCORE)
    }
}

fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

fn tiered(count: usize, tiers: &[(usize, u8)]) -> u8 {
    tiers
        .iter()
        .filter(|(threshold, _)| count >= *threshold)
        .map(|(_, points)| *points)
        .max()
        .unwrap_or(0)
}

fn photo(profile: &ProfileSnapshot) -> ScoreComponent {
    match provided(&profile.profile_photo) {
        Some(_) => ScoreComponent::new(ScoreBucket::Photo, 10, "profile photo present"),
        None => ScoreComponent::new(ScoreBucket::Photo, 0, "no profile photo"),
    }
}

fn name(profile: &ProfileSnapshot) -> ScoreComponent {
    let Some(name) = provided(&profile.display_name) else {
        return ScoreComponent::new(ScoreBucket::Name, 0, "no display name");
    };

    if name.contains(NAME_SEPARATORS) {
        ScoreComponent::new(ScoreBucket::Name, 10, "display name carries keywords")
    } else {
        ScoreComponent::new(ScoreBucket::Name, 5, "display name without keyword separator")
    }
}

fn bio(profile: &ProfileSnapshot) -> ScoreComponent {
    let Some(bio) = provided(&profile.bio) else {
        return ScoreComponent::new(ScoreBucket::Bio, 0, "no bio");
    };

    let length = bio.chars().count();
    let lines = bio.split('\n').count();
    let mut points = 5;
    let mut notes = vec![format!("{length} characters")];

    // The two length bonuses stack.
    if length > 50 {
        points += 5;
    }
    if length > 80 {
        points += 5;
    }
    if bio.contains(CALL_TO_ACTION_GLYPHS) {
        points += 5;
        notes.push("call to action".to_string());
    }
    if lines >= 3 {
        points += 5;
    }
    notes.push(format!("{lines} line(s)"));

    ScoreComponent::new(ScoreBucket::Bio, points, notes.join(", "))
}

fn highlights(profile: &ProfileSnapshot) -> ScoreComponent {
    let count = profile.highlight_count();
    let points = tiered(count, &[(1, 5), (3, 10), (5, 15)]);
    ScoreComponent::new(ScoreBucket::Highlights, points, format!("{count} highlight(s)"))
}

fn pinned_posts(profile: &ProfileSnapshot) -> ScoreComponent {
    let count = profile.pinned_posts.len();
    let points = tiered(count, &[(1, 5), (3, 10)]);
    ScoreComponent::new(ScoreBucket::PinnedPosts, points, format!("{count} pinned post(s)"))
}

fn feed(profile: &ProfileSnapshot) -> ScoreComponent {
    match profile.feed_score {
        Some(score) => {
            let points = score.min(FEED_SCORE_CAP);
            ScoreComponent::new(ScoreBucket::Feed, points, format!("feed sub-score {score}"))
        }
        None => ScoreComponent::new(ScoreBucket::Feed, 0, "feed not assessed"),
    }
}

fn link(profile: &ProfileSnapshot) -> ScoreComponent {
    match provided(&profile.bio_link) {
        Some(_) => ScoreComponent::new(ScoreBucket::Link, 5, "bio link present"),
        None => ScoreComponent::new(ScoreBucket::Link, 0, "no bio link"),
    }
}

fn pillars(profile: &ProfileSnapshot) -> ScoreComponent {
    let count = profile.content_pillars.len();
    let points = tiered(count, &[(1, 5), (3, 10)]);
    ScoreComponent::new(ScoreBucket::Pillars, points, format!("{count} content pillar(s)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::PinnedPost;

    fn with_bio(bio: &str) -> ProfileSnapshot {
        ProfileSnapshot {
            bio: Some(bio.to_string()),
            ..ProfileSnapshot::default()
        }
    }

    #[test]
    fn bucket_maxima_add_up_to_one_hundred() {
        let total: u16 = ScoreBucket::ALL
            .iter()
            .map(|bucket| u16::from(bucket.max_points()))
            .sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn name_bonus_requires_a_separator() {
        for name in ["Léa | Coach", "Léa · Coach", "Léa — Coach"] {
            let profile = ProfileSnapshot {
                display_name: Some(name.to_string()),
                ..ProfileSnapshot::default()
            };
            assert_eq!(ScoreBreakdown::from_profile(&profile).points_for(ScoreBucket::Name), 10);
        }

        let profile = ProfileSnapshot {
            display_name: Some("Léa - Coach".to_string()),
            ..ProfileSnapshot::default()
        };
        assert_eq!(ScoreBreakdown::from_profile(&profile).points_for(ScoreBucket::Name), 5);
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let profile = ProfileSnapshot {
            display_name: Some(String::new()),
            bio: Some(String::new()),
            bio_link: Some(String::new()),
            profile_photo: Some(String::new()),
            ..ProfileSnapshot::default()
        };
        assert_eq!(ScoreBreakdown::from_profile(&profile).raw_total(), 0);
    }

    #[test]
    fn short_bio_scores_presence_only() {
        let breakdown = ScoreBreakdown::from_profile(&with_bio("Coach"));
        assert_eq!(breakdown.points_for(ScoreBucket::Bio), 5);
    }

    #[test]
    fn length_bonuses_are_additive() {
        let breakdown = ScoreBreakdown::from_profile(&with_bio(&"a".repeat(51)));
        assert_eq!(breakdown.points_for(ScoreBucket::Bio), 10);

        let breakdown = ScoreBreakdown::from_profile(&with_bio(&"a".repeat(90)));
        assert_eq!(breakdown.points_for(ScoreBucket::Bio), 15);

        let breakdown = ScoreBreakdown::from_profile(&with_bio(&"a".repeat(80)));
        assert_eq!(breakdown.points_for(ScoreBucket::Bio), 10);
    }

    #[test]
    fn bio_call_to_action_and_lines() {
        let breakdown = ScoreBreakdown::from_profile(&with_bio("Coach\nMindset\nRDV 👇"));
        assert_eq!(breakdown.points_for(ScoreBucket::Bio), 15);
    }

    #[test]
    fn bio_length_counts_characters_not_bytes() {
        let breakdown = ScoreBreakdown::from_profile(&with_bio(&"é".repeat(50)));
        assert_eq!(breakdown.points_for(ScoreBucket::Bio), 5);
    }

    #[test]
    fn highlight_tiers() {
        let cases = [(0, 0), (1, 5), (2, 5), (3, 10), (4, 10), (5, 15), (12, 15)];
        for (count, expected) in cases {
            let profile = ProfileSnapshot {
                highlights_count: Some(count),
                ..ProfileSnapshot::default()
            };
            assert_eq!(
                ScoreBreakdown::from_profile(&profile).points_for(ScoreBucket::Highlights),
                expected,
                "{count} highlights"
            );
        }
    }

    #[test]
    fn pinned_and_pillar_tiers() {
        let profile = ProfileSnapshot {
            pinned_posts: vec![PinnedPost::default(); 2],
            content_pillars: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            ..ProfileSnapshot::default()
        };
        let breakdown = ScoreBreakdown::from_profile(&profile);
        assert_eq!(breakdown.points_for(ScoreBucket::PinnedPosts), 5);
        assert_eq!(breakdown.points_for(ScoreBucket::Pillars), 10);
    }

    #[test]
    fn feed_sub_score_is_capped() {
        let profile = ProfileSnapshot {
            feed_score: Some(40),
            ..ProfileSnapshot::default()
        };
        assert_eq!(ScoreBreakdown::from_profile(&profile).points_for(ScoreBucket::Feed), 15);
    }

    #[test]
    fn breakdown_lists_every_bucket_in_order() {
        let breakdown = ScoreBreakdown::from_profile(&ProfileSnapshot::default());
        let buckets: Vec<_> = breakdown
            .components()
            .iter()
            .map(|component| component.bucket)
            .collect();
        assert_eq!(buckets, ScoreBucket::ALL.to_vec());
        assert!(breakdown
            .components()
            .iter()
            .all(|component| component.missing_points() == component.max_points));
    }
}

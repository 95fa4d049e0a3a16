use crate::models::{AnalysisResult, HistoryItem, SentimentStats};
use chrono::NaiveDateTime;

pub const HISTORY_PLACEHOLDER: &str = "No analyses yet.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorToken {
    Success,
    Danger,
    Warning,
    Secondary,
    Info,
    Primary,
    Other(String),
}

impl ColorToken {
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "success" => Self::Success,
            "danger" => Self::Danger,
            "warning" => Self::Warning,
            "secondary" => Self::Secondary,
            "info" => Self::Info,
            "primary" => Self::Primary,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Maps polarity in [-1, 1] onto a 0..=100 bar width.
pub fn polarity_width(polarity: f64) -> f64 {
    (((polarity + 1.0) / 2.0) * 100.0).clamp(0.0, 100.0)
}

pub fn subjectivity_width(subjectivity: f64) -> f64 {
    (subjectivity * 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarView {
    pub width: f64,
    pub caption: String,
    pub color: Option<ColorToken>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub emoji: String,
    pub sentiment: String,
    pub color: ColorToken,
    pub text: String,
    pub polarity: f64,
    pub subjectivity: f64,
    pub polarity_bar: BarView,
    pub subjectivity_bar: BarView,
}

impl ResultView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let color = ColorToken::from_token(&result.color);
        Self {
            emoji: result.emoji.clone(),
            sentiment: result.sentiment.clone(),
            text: result.text.clone(),
            polarity: result.polarity,
            subjectivity: result.subjectivity,
            polarity_bar: BarView {
                width: polarity_width(result.polarity),
                caption: result.polarity.to_string(),
                color: Some(color.clone()),
            },
            subjectivity_bar: BarView {
                width: subjectivity_width(result.subjectivity),
                caption: result.subjectivity.to_string(),
                color: None,
            },
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntryView {
    pub emoji: String,
    pub sentiment: String,
    pub color: ColorToken,
    pub timestamp: String,
    pub recorded_at: Option<NaiveDateTime>,
    pub text: String,
    pub polarity: f64,
    pub subjectivity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryView {
    Empty { placeholder: &'static str },
    Entries(Vec<HistoryEntryView>),
}

impl HistoryView {
    pub fn from_items(items: &[HistoryItem]) -> Self {
        if items.is_empty() {
            return Self::Empty {
                placeholder: HISTORY_PLACEHOLDER,
            };
        }

        Self::Entries(
            items
                .iter()
                .map(|item| HistoryEntryView {
                    emoji: item.result.emoji.clone(),
                    sentiment: item.result.sentiment.clone(),
                    color: ColorToken::from_token(&item.result.color),
                    timestamp: item.timestamp.clone(),
                    recorded_at: item.recorded_at(),
                    text: item.result.text.clone(),
                    polarity: item.result.polarity,
                    subjectivity: item.result.subjectivity,
                })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Empty { .. } => 0,
            Self::Entries(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsView {
    pub total: u64,
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
    pub avg_polarity: Option<f64>,
    pub avg_subjectivity: Option<f64>,
}

impl StatsView {
    pub fn from_stats(stats: &SentimentStats) -> Self {
        Self {
            total: stats.total,
            positive: stats.positive,
            negative: stats.negative,
            neutral: stats.neutral,
            avg_polarity: stats.avg_polarity,
            avg_subjectivity: stats.avg_subjectivity,
        }
    }

    pub fn share(&self, count: u64) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (count as f64 / self.total as f64 * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(polarity: f64, subjectivity: f64) -> AnalysisResult {
        AnalysisResult {
            text: "sample".into(),
            sentiment: "Neutral".into(),
            emoji: "😐".into(),
            color: "secondary".into(),
            polarity,
            subjectivity,
        }
    }

    fn item(text: &str) -> HistoryItem {
        HistoryItem {
            result: AnalysisResult {
                text: text.into(),
                ..result(0.0, 0.0)
            },
            timestamp: "2026-01-05 10:00:00".into(),
        }
    }

    #[test]
    fn polarity_bar_spans_full_range() {
        assert_eq!(polarity_width(-1.0), 0.0);
        assert_eq!(polarity_width(0.0), 50.0);
        assert_eq!(polarity_width(1.0), 100.0);
    }

    #[test]
    fn subjectivity_bar_spans_full_range() {
        assert_eq!(subjectivity_width(0.0), 0.0);
        assert_eq!(subjectivity_width(0.5), 50.0);
        assert_eq!(subjectivity_width(1.0), 100.0);
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        assert_eq!(polarity_width(-3.0), 0.0);
        assert_eq!(subjectivity_width(1.5), 100.0);
    }

    #[test]
    fn result_view_colors_polarity_bar_only() {
        let mut analysis = result(1.0, 0.5);
        analysis.color = "success".into();
        let view = ResultView::from_result(&analysis);

        assert_eq!(view.color, ColorToken::Success);
        assert_eq!(view.polarity_bar.width, 100.0);
        assert_eq!(view.polarity_bar.caption, "1");
        assert_eq!(view.polarity_bar.color, Some(ColorToken::Success));
        assert_eq!(view.subjectivity_bar.width, 50.0);
        assert_eq!(view.subjectivity_bar.color, None);
    }

    #[test]
    fn unknown_color_token_is_kept() {
        let token = ColorToken::from_token("dark");
        assert_eq!(token, ColorToken::Other("dark".into()));
    }

    #[test]
    fn empty_history_shows_placeholder() {
        let view = HistoryView::from_items(&[]);
        assert_eq!(
            view,
            HistoryView::Empty {
                placeholder: HISTORY_PLACEHOLDER
            }
        );
        assert!(view.is_empty());
    }

    #[test]
    fn history_entries_keep_server_order() {
        let view = HistoryView::from_items(&[item("newest"), item("middle"), item("oldest")]);
        let HistoryView::Entries(entries) = view else {
            panic!("expected entries");
        };
        let texts: Vec<_> = entries.iter().map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, ["newest", "middle", "oldest"]);
        assert_eq!(
            entries[0].recorded_at.map(|at| at.to_string()),
            Some("2026-01-05 10:00:00".to_string())
        );
    }

    #[test]
    fn stats_share_handles_empty_total() {
        let view = StatsView::from_stats(&SentimentStats::default());
        assert_eq!(view.share(0), 0.0);

        let view = StatsView::from_stats(&SentimentStats {
            total: 4,
            positive: 1,
            ..SentimentStats::default()
        });
        assert_eq!(view.share(view.positive), 25.0);
    }
}

use crate::view::{BarView, ColorToken, HistoryEntryView, HistoryView, ResultView, StatsView};
use chrono::{Local, NaiveDate};
use std::io::Write;
use tracing::warn;

const BAR_CELLS: usize = 20;
const HISTORY_TEXT_CHARS: usize = 60;
const RULE: &str = "────────────────────────────────────────";

pub trait RenderSurface: Send {
    fn set_input(&mut self, text: &str);

    fn set_char_count(&mut self, count: usize);

    fn set_busy(&mut self, busy: bool);

    /// Replaces the results panel, reveals it and brings it into view.
    fn show_result(&mut self, view: &ResultView);

    fn show_history(&mut self, view: &HistoryView);

    fn show_batch(&mut self, views: &[ResultView]);

    fn show_stats(&mut self, view: &StatsView);

    fn notify(&mut self, message: &str);
}

pub struct TerminalSurface<W> {
    out: W,
    color: bool,
    busy: bool,
    today: Option<NaiveDate>,
}

impl<W: Write + Send> TerminalSurface<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            busy: false,
            today: None,
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        let written = self
            .out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush());
        if let Err(err) = written {
            warn!("failed to write to terminal: {err}");
        }
    }

    fn paint(&self, text: &str, color: Option<&ColorToken>) -> String {
        match color.and_then(ansi_code) {
            Some(code) if self.color => format!("\x1b[{code}m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    }

    fn bar_line(&self, label: &str, bar: &BarView) -> String {
        format!(
            "  {label:<13} [{}] {}\n",
            self.paint(&render_bar(bar.width), bar.color.as_ref()),
            bar.caption
        )
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl<W: Write + Send> RenderSurface for TerminalSurface<W> {
    fn set_input(&mut self, text: &str) {
        self.emit(&format!("input: {text}\n"));
    }

    fn set_char_count(&mut self, count: usize) {
        self.emit(&format!("{count} characters\n"));
    }

    fn set_busy(&mut self, busy: bool) {
        if busy && !self.busy {
            self.emit("Analyzing...\n");
        }
        self.busy = busy;
    }

    fn show_result(&mut self, view: &ResultView) {
        let mut text = format!("{RULE}\n");
        text.push_str(&format!(
            "{} {}\n",
            view.emoji,
            self.paint(&view.sentiment, Some(&view.color))
        ));
        text.push_str(&self.bar_line("Polarity", &view.polarity_bar));
        text.push_str(&self.bar_line("Subjectivity", &view.subjectivity_bar));
        text.push_str(&format!("  Text: {}\n", view.text));
        self.emit(&text);
    }

    fn show_history(&mut self, view: &HistoryView) {
        let mut text = format!("{RULE}\nHistory\n");
        match view {
            HistoryView::Empty { placeholder } => {
                text.push_str(&format!("  {placeholder}\n"));
            }
            HistoryView::Entries(entries) => {
                let today = self.today();
                for entry in entries {
                    text.push_str(&format!(
                        "  {} {}  {}\n",
                        entry.emoji,
                        self.paint(&entry.sentiment, Some(&entry.color)),
                        display_timestamp(entry, today)
                    ));
                    text.push_str(&format!(
                        "    {}\n",
                        truncate(&entry.text, HISTORY_TEXT_CHARS)
                    ));
                    text.push_str(&format!(
                        "    Polarity: {}  Subjectivity: {}\n",
                        entry.polarity, entry.subjectivity
                    ));
                }
            }
        }
        self.emit(&text);
    }

    fn show_batch(&mut self, views: &[ResultView]) {
        let mut text = format!("{RULE}\nBatch ({} results)\n", views.len());
        for view in views {
            text.push_str(&format!(
                "  {} {}  polarity {}  subjectivity {}  {}\n",
                view.emoji,
                self.paint(&view.sentiment, Some(&view.color)),
                view.polarity,
                view.subjectivity,
                truncate(&view.text, HISTORY_TEXT_CHARS)
            ));
        }
        self.emit(&text);
    }

    fn show_stats(&mut self, view: &StatsView) {
        let mut text = format!("{RULE}\nStats ({} analyses)\n", view.total);
        for (label, count, color) in [
            ("Positive", view.positive, ColorToken::Success),
            ("Negative", view.negative, ColorToken::Danger),
            ("Neutral", view.neutral, ColorToken::Secondary),
        ] {
            text.push_str(&format!(
                "  {label:<9} [{}] {count}\n",
                self.paint(&render_bar(view.share(count)), Some(&color))
            ));
        }
        if let (Some(polarity), Some(subjectivity)) = (view.avg_polarity, view.avg_subjectivity) {
            text.push_str(&format!(
                "  Average polarity: {polarity}  Average subjectivity: {subjectivity}\n"
            ));
        }
        self.emit(&text);
    }

    fn notify(&mut self, message: &str) {
        self.emit(&format!("! {message}\n"));
    }
}

fn ansi_code(color: &ColorToken) -> Option<&'static str> {
    match color {
        ColorToken::Success => Some("32"),
        ColorToken::Danger => Some("31"),
        ColorToken::Warning => Some("33"),
        ColorToken::Secondary => Some("90"),
        ColorToken::Info => Some("36"),
        ColorToken::Primary => Some("34"),
        ColorToken::Other(_) => None,
    }
}

pub fn render_bar(width: f64) -> String {
    let filled = ((width.clamp(0.0, 100.0) / 100.0) * BAR_CELLS as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), "-".repeat(BAR_CELLS - filled))
}

pub fn display_timestamp(entry: &HistoryEntryView, today: NaiveDate) -> String {
    match entry.recorded_at {
        Some(at) if at.date() == today => format!("today {}", at.format("%H:%M:%S")),
        _ => entry.timestamp.clone(),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    short.push('…');
    short
}

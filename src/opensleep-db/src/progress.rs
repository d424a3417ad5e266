use indicatif::{ProgressBar, ProgressStyle};
use opensleep_types::ProgressSink;

/// Terminal progress sink over an `indicatif` bar. Reports are
/// best-effort; a hidden or broken terminal just swallows them.
pub struct ProgressBarSink {
    bar: ProgressBar,
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{prefix:>10} [{wide_bar:.cyan/dim}] {pos}/{len} {msg}")
        .unwrap()
        .progress_chars("=>-")
}

impl ProgressBarSink {
    pub fn new(prefix: &'static str) -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(bar_style());
        bar.set_prefix(prefix);
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressSink for ProgressBarSink {
    fn report(&self, current: u64, total: u64, message: &str) {
        // The parser and the orchestrator report against different
        // totals over the same sink.
        if self.bar.length() != Some(total) {
            self.bar.set_length(total);
        }
        self.bar.set_position(current);
        self.bar.set_message(message.to_owned());
    }
}

pub use indicatif::ProgressBar;
use indicatif::ProgressStyle;

/// Progress bar over a number of sequences, drawn on STDERR.
pub fn sequences(count: usize, prefix: &str) -> ProgressBar {
    let template = format!(
        "{}{}",
        prefix, "{wide_bar} {pos}/{len} sequences [{elapsed} elapsed; {eta} left]"
    );

    let progress = ProgressBar::new(count as u64);
    progress.set_style(ProgressStyle::default_bar().template(&template));

    progress
}

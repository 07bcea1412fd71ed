//! Lexgen CLI UI primitives.
//!
//! Everything here prints to stdout. Diagnostics and logs go to stderr.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub mod colors {
    use console::Color;

    pub const SKY: Color = Color::Color256(39);
    pub const CORAL: Color = Color::Color256(203);
    pub const LEAF: Color = Color::Color256(78);
    pub const DIM: Color = Color::Color256(240);
}

pub mod symbols {
    pub const DIAMOND: &str = "\u{25C6}"; // ◆
    pub const DIAMOND_OUTLINE: &str = "\u{25C7}"; // ◇
    pub const TARGET_FILLED: &str = "\u{25C9}"; // ◉
    pub const TRIANGLE: &str = "\u{25B8}"; // ▸
    pub const ARROW: &str = "\u{2500}\u{25B8}"; // ─▸
}

const BOX_WIDTH: usize = 55;

/// Print compact version header
pub fn print_compact_header(version: &str) {
    println!(
        "  {} {} {}",
        style(symbols::DIAMOND).fg(colors::SKY),
        style("lexgen").fg(colors::SKY).bold(),
        style(version).dim()
    );
    println!();
}

pub fn success(msg: &str) {
    println!("  {} {}", style(symbols::TARGET_FILLED).fg(colors::LEAF), msg);
}

pub fn error(msg: &str) {
    println!(
        "  {} {}",
        style(symbols::DIAMOND).fg(colors::CORAL),
        style(msg).fg(colors::CORAL)
    );
}

pub fn warn(msg: &str) {
    println!(
        "  {} {}",
        style(symbols::DIAMOND_OUTLINE).fg(colors::CORAL),
        msg
    );
}

pub fn info(msg: &str) {
    println!("  {} {}", style(symbols::DIAMOND_OUTLINE).fg(colors::SKY), msg);
}

pub fn dim(msg: &str) {
    println!("  {}", style(msg).fg(colors::DIM));
}

/// Steady-ticking spinner; call `finish_and_clear` when done.
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("\u{25CE}\u{25C9}\u{25CE}\u{25C9}") // ◎◉◎◉
        .template("  {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(150));
    pb
}

pub fn box_header(title: &str) {
    let title_padded = format!(" {} ", title);
    let dashes = BOX_WIDTH.saturating_sub(title_padded.chars().count() + 4);

    println!(
        "  {}{}{}{}",
        style("\u{256D}\u{2500}").fg(colors::SKY), // ╭─
        style(title_padded).fg(colors::SKY).bold(),
        style("\u{2500}".repeat(dashes)).fg(colors::SKY),
        style("\u{256E}").fg(colors::SKY) // ╮
    );
}

pub fn box_line(content: &str) {
    let padding = (BOX_WIDTH - 2).saturating_sub(content.chars().count());
    println!(
        "  {} {}{}{}",
        style("\u{2502}").fg(colors::SKY), // │
        content,
        " ".repeat(padding),
        style("\u{2502}").fg(colors::SKY)
    );
}

pub fn box_footer() {
    println!(
        "  {}{}{}",
        style("\u{2570}").fg(colors::SKY), // ╰
        style("\u{2500}".repeat(BOX_WIDTH - 2)).fg(colors::SKY),
        style("\u{256F}").fg(colors::SKY) // ╯
    );
}

/// One record type in the generation summary.
pub fn record_line(name: &str, nsid: &str, fields: usize) {
    println!(
        "  {}   {:14} {:>2} fields   {}",
        style(symbols::TRIANGLE).fg(colors::SKY),
        style(name).bold(),
        fields,
        style(nsid).dim()
    );
}

pub fn tree_item(name: &str, description: Option<&str>, is_last: bool) {
    let connector = if is_last {
        "\u{2570}\u{2500}\u{2500}" // ╰──
    } else {
        "\u{251C}\u{2500}\u{2500}" // ├──
    };

    match description {
        Some(desc) => println!(
            "  {}  {}   {}",
            style(connector).fg(colors::DIM),
            style(name).fg(colors::SKY),
            style(desc).dim()
        ),
        None => println!(
            "  {}  {}",
            style(connector).fg(colors::DIM),
            style(name).fg(colors::SKY)
        ),
    }
}

pub fn timing(label: &str, duration_ms: u128) {
    println!(
        "  {} {} in {}ms",
        style(symbols::DIAMOND_OUTLINE).fg(colors::SKY),
        label,
        duration_ms
    );
}

/// Header printed before a failed check.
pub fn nope_header() {
    println!();
    println!(
        "  {} {}",
        style(symbols::DIAMOND).fg(colors::CORAL).bold(),
        style("Not quite.").fg(colors::CORAL).bold()
    );
    println!();
}

pub fn looking_good() {
    println!(
        "  {} {}",
        style(symbols::TARGET_FILLED).fg(colors::LEAF),
        style("Looking good.").bold()
    );
}

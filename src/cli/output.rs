//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{Board, SIZE};

/// Create a progress bar over positions
pub fn create_position_progress(total: u64) -> crate::Result<ProgressBar> {
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} positions ({msg})")
        .map_err(|e| crate::Error::ProgressBarTemplate {
            message: e.to_string(),
        })?
        .progress_chars("=>-");

    let pb = ProgressBar::new(total);
    pb.set_style(style);
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:16} {}", format!("{}:", key), value);
}

/// Render a board with row/column coordinates
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("    0 1 2\n");
    for row in 0..SIZE {
        let cells: Vec<String> = board.cells()[row * SIZE..(row + 1) * SIZE]
            .iter()
            .map(|c| c.to_char().to_string())
            .collect();
        out.push_str(&format!("  {row} {}\n", cells.join(" ")));
    }
    out
}

/// Human-readable label for a utility value
pub fn describe_value(value: i32) -> &'static str {
    match value.signum() {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    }
}

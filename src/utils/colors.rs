/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Rating stars, coloured by score.
pub fn colorize_rating(rating: u8) -> String {
    let color = match rating {
        0..=2 => RED,
        3 => YELLOW,
        _ => GREEN,
    };
    let stars = "★".repeat(rating as usize);
    let empty = "☆".repeat(5usize.saturating_sub(rating as usize));
    format!("{color}{stars}{RESET}{GREY}{empty}{RESET}")
}

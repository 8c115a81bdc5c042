//! Terminal rendering for calendar views.
//!
//! Grid blocks are built as fixed-width lines (ANSI codes excluded from the
//! width) so that months can be laid out side by side: two for the
//! navigator, three per row for the year view.

use chrono::{Datelike, Local, NaiveDate};
use fruitcal_core::event::CalendarEvent;
use fruitcal_core::image::FruitImage;
use fruitcal_core::session::CalendarSession;
use fruitcal_core::view::{self, ViewType};
use fruitcal_core::{grid, weeknum};
use owo_colors::OwoColorize;

const WEEKDAY_INITIALS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// How a month block is titled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthTitle {
    /// No title line (the caller prints its own heading)
    None,
    /// Month name only, as in the year view
    Month,
    /// Month name and year, as in the two-month navigator
    MonthYear,
}

/// Visible width of a month block's lines.
pub fn block_width(week_numbers: bool) -> usize {
    let days = 7 * 2 + 6;
    if week_numbers {
        days + 3
    } else {
        days
    }
}

/// Render one month as equal-width lines. Out-of-month days are dimmed but
/// present; `selected` is shown inverted, today in bold.
pub fn month_block(
    year: i32,
    month: u32,
    selected: Option<NaiveDate>,
    week_numbers: bool,
    weekday_initials: bool,
    title: MonthTitle,
) -> Vec<String> {
    let cells = grid::month_grid(year, month);
    let width = block_width(week_numbers);
    let today = Local::now().date_naive();
    let mut lines = Vec::new();

    if title != MonthTitle::None {
        let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid year/month");
        let text = match title {
            MonthTitle::MonthYear => first.format("%B %Y").to_string(),
            _ => first.format("%B").to_string(),
        };
        lines.push(format!("{:^width$}", text, width = width).bold().to_string());
    }

    if weekday_initials {
        let initials = WEEKDAY_INITIALS
            .iter()
            .map(|d| format!("{:>2}", d))
            .collect::<Vec<_>>()
            .join(" ");
        let prefix = if week_numbers { "   " } else { "" };
        lines.push(format!("{}{}", prefix, initials.dimmed()));
    }

    for week in cells.chunks(7) {
        let mut row = String::new();
        if week_numbers {
            let number = weeknum::iso_week_via_first_thursday(week[0]);
            row.push_str(&format!("{}", format!("{:>2} ", number).dimmed()));
        }
        let day_cells: Vec<String> = week
            .iter()
            .map(|day| day_cell(*day, month, selected, today))
            .collect();
        row.push_str(&day_cells.join(" "));
        lines.push(row);
    }

    lines
}

fn day_cell(day: NaiveDate, month: u32, selected: Option<NaiveDate>, today: NaiveDate) -> String {
    let text = format!("{:>2}", day.day());
    if selected == Some(day) {
        text.reversed().to_string()
    } else if day == today {
        text.bold().yellow().to_string()
    } else if day.month() != month {
        text.dimmed().to_string()
    } else {
        text
    }
}

/// Lay equal-width blocks side by side, padding shorter blocks with blank
/// lines. `width` is the blocks' visible line width.
pub fn join_columns(blocks: &[Vec<String>], width: usize, gap: &str) -> String {
    let height = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    let blank = " ".repeat(width);

    (0..height)
        .map(|row| {
            blocks
                .iter()
                .map(|block| block.get(row).cloned().unwrap_or_else(|| blank.clone()))
                .collect::<Vec<_>>()
                .join(gap)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The two-month navigator: the anchor's month and the next, side by side,
/// with the anchor date highlighted.
pub fn navigator(session: &CalendarSession, anchor: NaiveDate) -> String {
    let settings = session.settings();
    let next = view::step(ViewType::Month, anchor, 1);

    let blocks = vec![
        month_block(
            anchor.year(),
            anchor.month(),
            Some(anchor),
            settings.week_numbers,
            settings.weekday_initials,
            MonthTitle::MonthYear,
        ),
        month_block(
            next.year(),
            next.month(),
            Some(anchor),
            settings.week_numbers,
            settings.weekday_initials,
            MonthTitle::MonthYear,
        ),
    ];

    join_columns(&blocks, block_width(settings.week_numbers), "    ")
}

/// The image-of-the-day panel.
pub fn image_panel(image: &FruitImage) -> String {
    let mut lines = vec![format!(
        "{} {}",
        "Image of the day:".dimmed(),
        image.name.bold()
    )];
    lines.push(format!("  {}", image.image.dimmed()));
    if let Some(description) = &image.description {
        lines.push(format!("  {}", description));
    }
    if let Some(url) = &image.url {
        lines.push(format!("  {}", url.underline()));
    }
    lines.join("\n")
}

/// The sidebar shown next to views: image of the day plus the navigator.
pub fn sidebar(session: &CalendarSession, date: NaiveDate) -> String {
    format!(
        "{}\n\n{}",
        image_panel(&session.current_image(date)),
        navigator(session, date)
    )
}

/// One event as a view line: color dot, start time, category glyph, title.
pub fn event_line(event: &CalendarEvent) -> String {
    let time = event
        .start_datetime()
        .map(|dt| dt.format("%-I:%M %p").to_string())
        .unwrap_or_else(|| event.start.clone());

    let mut line = format!("{} {}", color_dot(&event.color), time.bold());
    if let Some(category) = event.category {
        line.push(' ');
        line.push_str(category.glyph());
    }
    line.push(' ');
    line.push_str(&event.title);
    line
}

/// One event as a list row, including its id and full time range.
pub fn event_row(event: &CalendarEvent) -> String {
    let glyph = event.category.map(|c| c.glyph()).unwrap_or("  ");
    format!(
        "{} {} {:<24} {} → {}  {}",
        color_dot(&event.color),
        glyph,
        event.title,
        event.start,
        event.end,
        event.id.dimmed(),
    )
}

fn color_dot(color: &str) -> String {
    match hex_rgb(color) {
        Some((r, g, b)) => "●".truecolor(r, g, b).to_string(),
        None => "●".to_string(),
    }
}

/// Parse `#RRGGBB` into components.
fn hex_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Line width with ANSI escape sequences stripped.
    fn visible_len(s: &str) -> usize {
        let mut len = 0;
        let mut in_escape = false;
        for c in s.chars() {
            if in_escape {
                if c == 'm' {
                    in_escape = false;
                }
            } else if c == '\u{1b}' {
                in_escape = true;
            } else {
                len += 1;
            }
        }
        len
    }

    // --- hex_rgb ---

    #[test]
    fn parses_hex_colors() {
        assert_eq!(hex_rgb("#3788d8"), Some((0x37, 0x88, 0xd8)));
        assert_eq!(hex_rgb("#000000"), Some((0, 0, 0)));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!(hex_rgb("3788d8"), None);
        assert_eq!(hex_rgb("#37"), None);
        assert_eq!(hex_rgb("#zzzzzz"), None);
    }

    // --- month_block ---

    #[test]
    fn block_lines_share_a_visible_width() {
        let block = month_block(2024, 10, None, true, true, MonthTitle::MonthYear);
        let width = block_width(true);
        for line in &block {
            assert_eq!(visible_len(line), width, "line {:?}", line);
        }
    }

    #[test]
    fn block_without_week_numbers_is_narrower() {
        let block = month_block(2024, 10, None, false, true, MonthTitle::Month);
        for line in &block {
            assert_eq!(visible_len(line), block_width(false));
        }
    }

    #[test]
    fn block_row_count_tracks_the_grid() {
        // Feb 2015 is exactly four weeks; plus title and initials rows.
        let block = month_block(2015, 2, None, true, true, MonthTitle::MonthYear);
        assert_eq!(block.len(), 2 + 4);

        // June 2024 fills six weeks.
        let block = month_block(2024, 6, None, true, true, MonthTitle::MonthYear);
        assert_eq!(block.len(), 2 + 6);
    }

    // --- join_columns ---

    #[test]
    fn join_pads_shorter_blocks() {
        let left = vec!["aa".to_string()];
        let right = vec!["bb".to_string(), "cc".to_string()];

        let joined = join_columns(&[left, right], 2, " ");
        let lines: Vec<&str> = joined.lines().collect();
        assert_eq!(lines, vec!["aa bb", "   cc"]);
    }
}

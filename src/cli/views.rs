use ansi_term::{ANSIString, Colour, Style};
use chrono::NaiveDate;

use crate::planner::{
    calendar::{CompletionBand, MonthGrid},
    entities::{Mood, Priority, Quadrant, Task},
    report::{CompletionStats, Quadrants},
};

fn priority_label(priority: Priority) -> ANSIString<'static> {
    match priority {
        Priority::High => Colour::Red.paint("high"),
        Priority::Medium => Colour::Yellow.paint("medium"),
        Priority::Low => Colour::Green.paint("low"),
    }
}

fn mood_label(mood: Mood) -> ANSIString<'static> {
    match mood {
        Mood::Happy => Colour::Green.paint("happy"),
        Mood::Neutral => Colour::Yellow.paint("neutral"),
        Mood::Sad => Colour::Red.paint("sad"),
    }
}

fn band_colour(band: CompletionBand) -> Option<Colour> {
    match band {
        CompletionBand::High => Some(Colour::Green),
        CompletionBand::Medium => Some(Colour::Yellow),
        // Orange, matching the progress bar between "started" and "halfway".
        CompletionBand::Low => Some(Colour::Fixed(208)),
        CompletionBand::Neutral => None,
    }
}

fn task_line(task: &Task) {
    let marker = if task.completed {
        Colour::Green.paint("✓")
    } else {
        Style::new().dimmed().paint("·")
    };
    let text = if task.completed {
        Style::new().strikethrough().dimmed().paint(task.text.as_str())
    } else {
        Style::new().paint(task.text.as_str())
    };
    println!(
        "  {marker} {text}  [{}]  {}",
        priority_label(task.priority),
        Style::new().dimmed().paint(task.id.as_str()),
    );
}

/// Day view: the date's tasks in display order, the completion summary and
/// the recorded mood.
pub fn print_day(date: NaiveDate, tasks: &[&Task], stats: CompletionStats, mood: Option<Mood>) {
    println!("{}", Style::new().bold().paint(date.format("%A, %B %-d, %Y").to_string()));
    println!();

    if tasks.is_empty() {
        println!("  No tasks for this day. Add one to get started!");
    } else {
        for task in tasks {
            task_line(task);
        }
    }
    println!();

    let band = CompletionBand::from_stats(stats);
    let percentage = match band_colour(band) {
        Some(colour) => colour.paint(stats.percentage.to_string()),
        None => Style::new().dimmed().paint(stats.percentage.to_string()),
    };
    println!(
        "  Completed: {}/{} tasks ({percentage})",
        stats.completed, stats.total
    );

    match mood {
        Some(mood) => println!("  Mood: {}", mood_label(mood)),
        None => println!("  {}", Style::new().dimmed().paint("No mood recorded for this day")),
    }
}

fn quadrant_colour(quadrant: Quadrant) -> Colour {
    match quadrant {
        Quadrant::DoFirst => Colour::Red,
        Quadrant::Schedule => Colour::Blue,
        Quadrant::Delegate => Colour::Yellow,
        Quadrant::Eliminate => Colour::White,
    }
}

/// Eisenhower view: the four quadrants of one day's tasks.
pub fn print_matrix(date: NaiveDate, partition: &Quadrants) {
    println!(
        "{}",
        Style::new()
            .bold()
            .paint(format!("Eisenhower Matrix — {}", date.format("%A, %B %-d, %Y")))
    );

    for quadrant in Quadrant::ALL {
        println!();
        println!("{}", quadrant_colour(quadrant).bold().paint(quadrant.title()));
        println!("{}", Style::new().dimmed().paint(quadrant.advice()));

        let bucket = partition.bucket(quadrant);
        if bucket.is_empty() {
            println!("  {}", Style::new().dimmed().paint("No tasks in this quadrant"));
        } else {
            for task in bucket {
                task_line(task);
            }
        }
    }
}

fn mood_cell_colour(mood: Mood) -> Colour {
    match mood {
        Mood::Happy => Colour::Green,
        Mood::Neutral => Colour::Yellow,
        Mood::Sad => Colour::Red,
    }
}

/// Calendar view: a Sunday-first month grid. Day numbers are painted by the
/// recorded mood, today is highlighted, and days with tasks carry a marker in
/// their completion band's colour.
pub fn print_calendar(grid: &MonthGrid) {
    let Some(first) = grid.day_cells().next() else {
        return;
    };
    println!(
        "{}",
        Style::new().bold().paint(first.date.format("%B %Y").to_string())
    );
    println!(" Sun  Mon  Tue  Wed  Thu  Fri  Sat");

    for week in grid.weeks() {
        let mut line = String::new();
        for cell in week {
            match cell {
                None => line.push_str("     "),
                Some(cell) => {
                    let day = format!("{:>3}", cell.day);
                    let painted = if cell.is_today {
                        // Today wins over the mood colour, like the web view.
                        Colour::Fixed(208).bold().paint(day).to_string()
                    } else if let Some(mood) = cell.mood {
                        mood_cell_colour(mood).paint(day).to_string()
                    } else {
                        day
                    };
                    let marker = if cell.stats.total > 0 {
                        match band_colour(cell.band) {
                            Some(colour) => colour.paint("▪").to_string(),
                            None => Style::new().dimmed().paint("▪").to_string(),
                        }
                    } else {
                        " ".to_string()
                    };
                    line.push_str(&painted);
                    line.push_str(&marker);
                    line.push(' ');
                }
            }
        }
        println!("{line}");
    }

    println!();
    println!(
        "  {} Great day   {} Okay day   {} Tough day   {} today",
        Colour::Green.paint("●"),
        Colour::Yellow.paint("●"),
        Colour::Red.paint("●"),
        Colour::Fixed(208).paint("●"),
    );
}

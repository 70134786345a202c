use std::fmt;
use std::fs::File;
use std::io::Write;

use crate::schedule::slot_utils::format_time;
use crate::schedule::{Schedule, ScheduleWarning};

/// Formats a warning for people, using team names
pub fn describe_warning(schedule: &Schedule, warning: &ScheduleWarning) -> String {
    match warning {
        ScheduleWarning::LateStart { participants } => {
            let names: Vec<&str> = participants.iter().map(|&p| schedule.name_of(p)).collect();
            format!("Teams starting after slot 2: {}", names.join(", "))
        }
        ScheduleWarning::TimeOverrun { played_minutes, budget_minutes } => format!(
            "Playing time per team ({} min) exceeds the limit of {} min",
            played_minutes, budget_minutes
        ),
    }
}

/// Plain-text view of a category schedule
pub struct ScheduleText<'a>(pub &'a Schedule);

impl fmt::Display for ScheduleText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schedule = self.0;
        writeln!(f, "** Schedule {} **", schedule.category)?;

        let match_desc = if schedule.half_time_interval_minutes > 0 {
            let half = schedule.match_duration_minutes / 2;
            format!("{} min + {} min ({} min interval)", half, half, schedule.half_time_interval_minutes)
        } else {
            format!("{} min", schedule.match_duration_minutes)
        };
        writeln!(
            f,
            "{} teams | {} matches | {} + {} min break",
            schedule.participants.len(),
            schedule.matches.len(),
            match_desc,
            schedule.break_minutes
        )?;

        for warning in &schedule.warnings {
            writeln!(f, "Note: {}", describe_warning(schedule, warning))?;
        }

        for slot in 0..schedule.slot_count {
            if schedule.has_lunch_break() && slot == schedule.morning_slots {
                writeln!(f, "\n-- LUNCH BREAK {} min --", schedule.lunch_break_minutes)?;
            }
            for m in schedule.matches_in_slot(slot) {
                writeln!(
                    f,
                    "#{:<3} {} Field {}  {} vs {}  (ref: {})",
                    m.number,
                    format_time(m.start_time),
                    m.field_number(),
                    schedule.name_of(m.participant_a),
                    schedule.name_of(m.participant_b),
                    schedule.name_of(m.referee)
                )?;
            }
            if let Some(resting) = schedule.resting_per_slot.get(slot).filter(|r| !r.is_empty()) {
                let names: Vec<&str> = resting.iter().map(|&p| schedule.name_of(p)).collect();
                writeln!(f, "      Resting: {}", names.join(", "))?;
            }
        }

        writeln!(f, "\nTeam            Played  Refereed  Max wait")?;
        for (index, stat) in schedule.stats.iter().enumerate() {
            writeln!(
                f,
                "{:<15} {:>6}  {:>8}  {:>5} min",
                schedule.name_of(index),
                stat.matches_played,
                stat.referee_duties,
                stat.max_wait_minutes
            )?;
        }
        writeln!(f, "Total duration: {} min", schedule.total_duration_minutes)
    }
}

/// Renders a category schedule as plain text
pub fn render_schedule(schedule: &Schedule) -> String {
    ScheduleText(schedule).to_string()
}

/// Prints a category schedule in a readable format
pub fn print_schedule(schedule: &Schedule) {
    println!("\n{}", ScheduleText(schedule));
}

/// Writes a category schedule to a text file
pub fn write_schedule_to_file(schedule: &Schedule, filename: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(filename)?;
    write!(file, "{}", ScheduleText(schedule))?;
    Ok(())
}

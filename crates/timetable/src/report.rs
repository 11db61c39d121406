use std::io::{self, Write};

use timetable_ast::Timetable;

pub const BANNER: &str = "📅 Smart Automatic Timetable (CLI Version)\n";

pub fn render<W: Write>(timetable: &Timetable, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n========== Timetable ==========")?;

    for (day, slots) in timetable {
        writeln!(out, "\n{}:", day)?;
        if slots.is_empty() {
            writeln!(out, "  No slots")?;
            continue;
        }
        for slot in slots {
            writeln!(out, "  {} → {}", slot.time, slot.label)?;
        }
    }

    Ok(())
}

use tracing::debug;

use crate::emit::{Block, Record};
use crate::extract::{ScheduleEntity, ScheduleKind, Weekday, WeekdaySlot};
use crate::sanitize::sanitize;

/// `config firewall schedule recurring` entry. Always exactly one block.
///
/// Only one daily window is carried over: the first weekday range that
/// splits into a start and end. Ranges on later weekdays are ignored, though
/// their days still join the day list. Schedule kinds without a recurring block
/// become an all-week, all-day window.
pub fn translate_schedule(schedule: &ScheduleEntity) -> Vec<Record> {
    let mut block = Block::new(sanitize(&schedule.name));
    match &schedule.kind {
        ScheduleKind::Recurring(slots) => {
            let days: Vec<&str> = slots.iter().map(|slot| slot.day.full_name()).collect();
            match (days.is_empty(), first_window(slots)) {
                (false, Some((start, end))) => {
                    block.push_set("day", days.join(" "));
                    block.push_set("start", start);
                    block.push_set("end", end);
                }
                _ => debug!(schedule = %schedule.name, "recurring schedule has no usable time window"),
            }
        }
        ScheduleKind::Unsupported => {
            debug!(schedule = %schedule.name, "approximating non-recurring schedule as always-on");
            let all_days: Vec<&str> = Weekday::ALL.iter().map(|d| d.full_name()).collect();
            block.push_set("schedule-type", "recurring");
            block.push_set("day", all_days.join(" "));
            block.push_set("start", "00:00");
            block.push_set("end", "23:59");
        }
    }
    vec![Record::Block(block)]
}

/// Start and end of the first weekday range that splits on `-` into two
/// non-empty halves. Only each weekday's first range is considered.
fn first_window(slots: &[WeekdaySlot]) -> Option<(&str, &str)> {
    slots
        .iter()
        .filter_map(|slot| slot.times.first())
        .find_map(|range| {
            range
                .split_once('-')
                .filter(|(start, end)| !start.is_empty() && !end.is_empty())
        })
}

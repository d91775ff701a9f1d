use chrono::{Local, NaiveDateTime, TimeDelta};
use rangepick::{
    DateRange, DateRangePicker, FocusTuple, Pick, RangePatch, SelectionPolicy, SelectionSink,
    TimeBound, TimeUnit,
};

struct Printer {
    last: Option<RangePatch<NaiveDateTime>>,
}

impl SelectionSink<NaiveDateTime> for Printer {
    fn on_change(&mut self, patch: RangePatch<NaiveDateTime>) {
        for (key, range) in &patch.0 {
            println!("{key}: {:?} -> {:?}", range.start_date, range.end_date);
        }
        self.last = Some(patch);
    }

    fn on_range_focus_change(&mut self, focus: FocusTuple) {
        println!("focus: {focus}");
    }
}

fn main() {
    let now = Local::now().naive_local();
    let mut ranges = vec![DateRange::new(now, now + TimeDelta::days(3)).with_key("trip")];

    let mut picker = DateRangePicker::new(&ranges)
        .with_policy(SelectionPolicy {
            move_range_on_first_selection: true,
            ..SelectionPolicy::default()
        })
        .with_disabled_dates(vec![now + TimeDelta::days(9)])
        .with_time_bounds(
            Some(TimeBound::Absolute(now)),
            Some(TimeBound::Absolute(now + TimeDelta::days(30))),
        );
    let mut printer = Printer { last: None };

    for pick in [now + TimeDelta::days(5), now + TimeDelta::days(12)] {
        picker.set_selection(&ranges, Pick::Single(pick), now, Some(&mut printer));
        if let Some(patch) = printer.last.take() {
            ranges = patch.apply_to(&ranges);
        }
    }

    let open_hours: Vec<u32> = picker
        .wheel(&ranges, rangepick::Endpoint::Start, TimeUnit::Hour)
        .into_iter()
        .filter(|item| !item.disabled)
        .map(|item| item.value)
        .collect();
    println!("selectable start hours: {open_hours:?}");
}

use chrono::{NaiveDate, NaiveDateTime};
use rangepick::{
    apply_selection, compute_selection, is_time_disabled, next_range_index, DateRange,
    DateRangePicker, FocusTuple, Pick, RangePatch, SelectionPolicy, SelectionSink, TimeBound,
    TimeUnit,
};

fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, d)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn day(d: u32) -> NaiveDateTime {
    at(d, 0, 0)
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn move_range_on_first_selection_preserves_offset() {
    init_logger();
    let ranges = vec![DateRange::new(day(10), day(15))];
    let policy = SelectionPolicy {
        move_range_on_first_selection: true,
        ..SelectionPolicy::default()
    };

    let result = compute_selection(
        Pick::Single(day(12)),
        FocusTuple::start_of(0),
        &ranges,
        &policy,
        &[],
        day(1),
    )
    .unwrap();

    assert_eq!(result.start_date, Some(day(12)));
    assert_eq!(result.end_date, Some(day(17)));
    assert_eq!(result.next_focus, FocusTuple::end_of(0));
}

#[test]
fn end_pick_before_start_is_reversed() {
    init_logger();
    let ranges = vec![DateRange::new(day(10), day(15))];
    let result = compute_selection(
        Pick::Single(day(5)),
        FocusTuple::end_of(0),
        &ranges,
        &SelectionPolicy::default(),
        &[],
        day(1),
    )
    .unwrap();

    assert!(result.was_valid);
    assert_eq!(result.start_date, Some(day(5)));
    assert_eq!(result.end_date, Some(day(10)));
}

#[test]
fn disabled_date_inside_retained_range_is_repaired() {
    init_logger();
    let ranges = vec![DateRange::new(day(10), day(15))];
    let policy = SelectionPolicy {
        retain_end_date_on_first_selection: true,
        ..SelectionPolicy::default()
    };

    let result = compute_selection(
        Pick::Single(day(11)),
        FocusTuple::start_of(0),
        &ranges,
        &policy,
        &[day(12)],
        day(1),
    )
    .unwrap();

    assert!(!result.was_valid);
    assert_eq!(result.start_date, Some(day(13)));
    assert_eq!(result.end_date, Some(day(15)));
}

#[test]
fn absolute_time_bounds_disable_hours() {
    let min = TimeBound::Absolute(at(10, 8, 0));
    let max = TimeBound::Absolute(at(10, 18, 0));
    let date = Some(at(10, 12, 0));

    assert!(is_time_disabled(7, date, Some(&min), Some(&max), TimeUnit::Hour));
    assert!(!is_time_disabled(9, date, Some(&min), Some(&max), TimeUnit::Hour));
}

#[test]
fn focus_cursor_skips_disabled_and_wraps() {
    let ranges: Vec<DateRange<NaiveDateTime>> = vec![
        DateRange::default().with_disabled(true),
        DateRange::default(),
        DateRange::default(),
    ];
    assert_eq!(next_range_index(&ranges, 0), 1);
    assert_eq!(next_range_index(&ranges, 2), 1);
}

#[test]
fn new_start_day_keeps_previous_time_of_day() {
    let previous = DateRange::new(at(10, 14, 30), at(15, 9, 5));
    let result = compute_selection(
        Pick::Single(day(11)),
        FocusTuple::start_of(0),
        std::slice::from_ref(&previous),
        &SelectionPolicy {
            retain_end_date_on_first_selection: true,
            ..SelectionPolicy::default()
        },
        &[],
        day(1),
    )
    .unwrap();
    let committed = apply_selection(&previous, &result);

    assert_eq!(committed.start_date, Some(at(11, 14, 30)));
    assert_eq!(committed.end_date, Some(at(15, 9, 5)));
}

#[test]
fn reapplying_an_end_pick_is_stable() {
    let ranges = vec![DateRange::new(day(10), day(15))];
    let policy = SelectionPolicy::default();
    let first = compute_selection(
        Pick::Single(day(18)),
        FocusTuple::end_of(0),
        &ranges,
        &policy,
        &[],
        day(1),
    )
    .unwrap();

    let updated = vec![apply_selection(&ranges[0], &first)];
    let second = compute_selection(
        Pick::Single(day(18)),
        FocusTuple::end_of(0),
        &updated,
        &policy,
        &[],
        day(1),
    )
    .unwrap();

    assert_eq!(second, first);
    assert_eq!(apply_selection(&updated[0], &second), updated[0]);
}

#[test]
fn computing_twice_is_deterministic() {
    let ranges = vec![
        DateRange::new(day(3), day(8)),
        DateRange::new(day(20), day(25)).with_key("return"),
    ];
    let policy = SelectionPolicy {
        move_range_on_first_selection: true,
        max_date: Some(day(30)),
        ..SelectionPolicy::default()
    };
    let disabled = [day(22), day(5)];

    let run = || {
        compute_selection(
            Pick::Single(day(19)),
            FocusTuple::start_of(1),
            &ranges,
            &policy,
            &disabled,
            day(1),
        )
    };
    assert_eq!(run(), run());
}

#[derive(Default)]
struct Collector {
    ranges: Vec<DateRange<NaiveDateTime>>,
    focus: Option<FocusTuple>,
}

impl SelectionSink<NaiveDateTime> for Collector {
    fn on_change(&mut self, patch: RangePatch<NaiveDateTime>) {
        self.ranges = patch.apply_to(&self.ranges);
    }

    fn on_range_focus_change(&mut self, focus: FocusTuple) {
        self.focus = Some(focus);
    }
}

#[test]
fn picker_walks_through_multiple_ranges() {
    init_logger();
    let mut sink = Collector {
        ranges: vec![
            DateRange::new(day(1), day(2)).with_key("outbound"),
            DateRange::new(day(1), day(2)).with_disabled(true),
            DateRange::new(day(1), day(2)).with_key("return"),
        ],
        focus: None,
    };
    let mut picker = DateRangePicker::new(&sink.ranges).with_disabled_dates(vec![day(9)]);

    for pick in [day(5), day(7), day(12), day(8)] {
        let snapshot = sink.ranges.clone();
        picker.set_selection(&snapshot, Pick::Single(pick), day(1), Some(&mut sink));
    }

    assert_eq!(sink.ranges[0].start_date, Some(day(5)));
    assert_eq!(sink.ranges[0].end_date, Some(day(7)));
    assert_eq!(sink.ranges[1], DateRange::new(day(1), day(2)).with_disabled(true));
    // 12 then 8: reversed, and 9 is disabled, so the new start moves past it.
    assert_eq!(sink.ranges[2].start_date, Some(day(10)));
    assert_eq!(sink.ranges[2].end_date, Some(day(12)));
    assert_eq!(sink.focus, Some(FocusTuple::start_of(0)));
}

#[cfg(feature = "serde")]
#[test]
fn serde_range_patch_is_keyed() {
    let patch = RangePatch::single(0, DateRange::new(day(1), day(2)).with_key("trip"));
    let json = serde_json::to_string(&patch).unwrap();
    assert!(json.contains("\"trip\""));
    assert!(json.contains("start_date"));

    let back: RangePatch<NaiveDateTime> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, patch);
}

#[cfg(feature = "serde")]
#[test]
fn serde_config_builds_picker() {
    let text = r#"
        move_range_on_first_selection = true
        disabled_dates = ["2024-01-12T00:00:00"]
        min_time = { absolute = "2024-01-10T08:00:00" }
        max_time = { clock_offset = 1080 }
    "#;
    let config = rangepick::PickerConfig::<NaiveDateTime>::from_toml_str(text).unwrap();
    let ranges = vec![DateRange::new(day(10), day(15))];
    let picker = config.into_picker(&ranges);

    assert!(picker.policy().move_range_on_first_selection);
    assert!(picker.is_time_disabled(&ranges, rangepick::Endpoint::Start, 7, TimeUnit::Hour));
    assert!(!picker.is_time_disabled(&ranges, rangepick::Endpoint::Start, 20, TimeUnit::Hour));
}

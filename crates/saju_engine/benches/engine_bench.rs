use chrono::{NaiveDate, NaiveTime};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{Gender, LuckStart, Pillar};
use saju_config::EngineConfig;
use saju_engine::{BirthRecord, BirthRequest, CalendarKind, DayRecord, SajuEngine, StaticCalendar};

fn build_calendar() -> Option<(StaticCalendar, NaiveDate)> {
    let birth = NaiveDate::from_ymd_opt(1990, 3, 15)?;
    let mut cal = StaticCalendar::default();
    let day = "甲子".parse::<Pillar>().ok()?;
    cal.insert_day(DayRecord::solar(
        birth,
        "庚午".parse().ok()?,
        "己卯".parse().ok()?,
        day,
    ));
    for y in 2015..=2035 {
        for m in 1..=12 {
            let date = NaiveDate::from_ymd_opt(y, m, 15)?;
            let year = Pillar::from_cycle_index(y - 4);
            let month = Pillar::from_cycle_index((y - 1900) * 12 + m as i32 + 12);
            cal.insert_day(DayRecord::solar(date, year, month, day));
        }
    }
    cal.insert_birth(BirthRecord {
        date: birth,
        calendar: CalendarKind::Solar,
        leap_month: false,
        gender: Gender::Male,
        start_age: 4,
        start: LuckStart {
            year: 1993,
            month: 7,
            day: 2,
            forward: true,
        },
    });
    Some((cal, birth))
}

fn report_bench(c: &mut Criterion) {
    let Some((cal, birth)) = build_calendar() else {
        eprintln!("Skipping benchmarks: could not build calendar");
        return;
    };
    let engine = SajuEngine::new(cal, EngineConfig::default()).expect("should build engine");
    let request = BirthRequest::solar(birth, NaiveTime::from_hms_opt(10, 30, 0), Gender::Male);

    let mut group = c.benchmark_group("engine");
    group.bench_function("chart", |b| b.iter(|| engine.chart(black_box(&request))));
    group.bench_function("report_2026", |b| {
        b.iter(|| engine.report(black_box(&request), black_box(2026)))
    });
    group.finish();
}

criterion_group!(benches, report_bench);
criterion_main!(benches);

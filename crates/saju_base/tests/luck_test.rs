use saju_base::{
    DecadeSeed, Gender, LuckDirection, Pillar, Stem, TenGod, annual_cycles, decade_at_age,
    decade_cycles, enrich_pillar, local_age, luck_direction, monthly_cycles,
};

fn seeds(first: Pillar, forward: bool) -> Vec<DecadeSeed> {
    let step = if forward { 1 } else { -1 };
    (0..10)
        .map(|i| DecadeSeed {
            start_age: 4 + 10 * i,
            end_age: 13 + 10 * i,
            start_year: 1993 + 10 * i,
            end_year: 2002 + 10 * i,
            pillar: Some(first.offset(step * i)),
        })
        .collect()
}

#[test]
fn yang_male_runs_forward() {
    assert_eq!(luck_direction(Stem::Geng, Gender::Male), LuckDirection::Forward);
    assert_eq!(luck_direction(Stem::Geng, Gender::Female), LuckDirection::Backward);
    assert_eq!(luck_direction(Stem::Xin, Gender::Female), LuckDirection::Forward);
}

#[test]
fn decade_pillars_match_birth_enrichment() {
    let first: Pillar = "丁卯".parse().unwrap();
    let decades = decade_cycles(Stem::Jia, &seeds(first, true));
    assert_eq!(decades.len(), 10);
    for d in &decades {
        let p = d.pillar.as_ref().unwrap();
        assert_eq!(*p, enrich_pillar(Stem::Jia, p.pillar));
    }
    assert_eq!(decades[1].pillar.as_ref().unwrap().pillar.to_string(), "戊辰");
}

#[test]
fn backward_decades_step_down_the_cycle() {
    let first: Pillar = "丁卯".parse().unwrap();
    let decades = decade_cycles(Stem::Jia, &seeds(first, false));
    assert_eq!(decades[1].pillar.as_ref().unwrap().pillar.to_string(), "丙寅");
}

#[test]
fn decade_lookup_by_age() {
    let decades = decade_cycles(Stem::Jia, &seeds("丁卯".parse().unwrap(), true));
    assert_eq!(decade_at_age(&decades, 4).map(|d| d.index), Some(0));
    assert_eq!(decade_at_age(&decades, 37).map(|d| d.index), Some(3));
    assert!(decade_at_age(&decades, 3).is_none());
}

#[test]
fn annual_window_ages_and_ten_gods() {
    let birth_year = 1990;
    let (cycles, skipped) = annual_cycles(
        Stem::Jia,
        birth_year,
        2021..=2031,
        |y| Ok::<_, ()>(Pillar::from_cycle_index(y - 4)),
    );
    assert!(skipped.is_empty());
    assert_eq!(cycles.len(), 11);
    assert_eq!(cycles[0].age, local_age(birth_year, 2021));
    // 2024 is 甲辰
    let y2024 = cycles.iter().find(|c| c.year == 2024).unwrap();
    assert_eq!(y2024.pillar.pillar.to_string(), "甲辰");
    assert_eq!(y2024.pillar.ten_god_stem, TenGod::PeerSame);
}

#[test]
fn failed_months_are_skipped_individually() {
    let (cycles, skipped) = monthly_cycles(Stem::Jia, 2024, |_, m| {
        if m == 2 || m == 11 {
            Err(format!("no data for month {m}"))
        } else {
            Ok(Pillar::from_cycle_index(m as i32))
        }
    });
    assert_eq!(cycles.len(), 10);
    assert_eq!(skipped.len(), 2);
    assert_eq!(skipped[0].month, Some(2));
    assert_eq!(skipped[1].month, Some(11));
    assert!(cycles.iter().all(|c| c.month != 2 && c.month != 11));
}

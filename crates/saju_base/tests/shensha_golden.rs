use saju_base::shensha::{BaseHit, Slot, Symbol};
use saju_base::{
    ALL_SEXAGENARY, ALL_STEMS, Branch, FourPillars, Gender, Pillar, PillarPosition, Shensha, Stem,
    detect_shensha,
};

fn chart(y: &str, m: &str, d: &str, h: Option<&str>) -> FourPillars {
    FourPillars::parse(y, m, d, h).unwrap()
}

#[test]
fn worked_chart_active_list() {
    let r = detect_shensha(&chart("壬子", "丙寅", "甲子", None), Gender::Male);
    assert_eq!(
        r.active,
        vec![
            Shensha::TravelHorse,
            Shensha::MonthlyVirtue,
            Shensha::SupremeNoble,
            Shensha::HangingNeedle,
            Shensha::LonelyStar,
        ]
    );
}

#[test]
fn worked_chart_by_pillar() {
    let r = detect_shensha(&chart("壬子", "丙寅", "甲子", None), Gender::Male);
    assert_eq!(r.by_pillar.year.branch, vec![Shensha::SupremeNoble]);
    assert!(r.by_pillar.year.stem.is_empty());
    assert_eq!(r.by_pillar.month.stem, vec![Shensha::MonthlyVirtue]);
    assert_eq!(
        r.by_pillar.month.branch,
        vec![Shensha::TravelHorse, Shensha::LonelyStar]
    );
    assert_eq!(r.by_pillar.day.stem, vec![Shensha::HangingNeedle]);
    assert_eq!(r.by_pillar.day.branch, vec![Shensha::SupremeNoble]);
    assert!(r.by_pillar.hour.is_empty());
}

#[test]
fn travel_horse_found_from_both_bases() {
    let r = detect_shensha(&chart("壬子", "丙寅", "甲子", None), Gender::Male);
    let f = r.finding(Shensha::TravelHorse);
    assert_eq!(
        f.base_hits,
        vec![
            BaseHit { base: PillarPosition::Year, target: Branch::Yin },
            BaseHit { base: PillarPosition::Day, target: Branch::Yin },
        ]
    );
    assert_eq!(f.matched, vec![Symbol::Branch(Branch::Yin)]);
    assert_eq!(f.simplified, vec![PillarPosition::Month]);
}

#[test]
fn simplified_travel_horse_alone_does_not_attach() {
    // targets 巳 and 申 are absent; the 亥 in the month only meets the simplified set
    let r = detect_shensha(&chart("丁卯", "辛亥", "庚午", None), Gender::Female);
    let f = r.finding(Shensha::TravelHorse);
    assert!(!f.present);
    assert_eq!(f.simplified, vec![PillarPosition::Month]);
    assert!(f.attached.is_empty());
    assert!(!r.by_pillar.month.branch.contains(&Shensha::TravelHorse));
}

#[test]
fn widow_is_female_only() {
    let c = chart("甲子", "甲戌", "丙寅", None);
    let female = detect_shensha(&c, Gender::Female);
    let male = detect_shensha(&c, Gender::Male);

    assert!(female.is_active(Shensha::Widow));
    assert!(female.by_pillar.month.branch.contains(&Shensha::Widow));

    let f = male.finding(Shensha::Widow);
    assert!(f.present);
    assert!(!f.active);
    assert_eq!(f.gender_scope, Some(Gender::Female));
    assert!(f.attached.is_empty());
    assert!(!male.is_active(Shensha::Widow));
}

#[test]
fn lonely_star_is_male_only() {
    let c = chart("壬子", "丙寅", "甲子", None);
    let female = detect_shensha(&c, Gender::Female);
    assert!(female.finding(Shensha::LonelyStar).present);
    assert!(!female.is_active(Shensha::LonelyStar));
    assert!(!female.by_pillar.month.branch.contains(&Shensha::LonelyStar));
}

#[test]
fn commander_attaches_to_day_only() {
    let r = detect_shensha(&chart("甲子", "丙寅", "庚辰", None), Gender::Male);
    let f = r.finding(Shensha::Commander);
    assert!(f.active);
    assert_eq!(f.attached, vec![(PillarPosition::Day, Slot::Branch)]);
}

#[test]
fn grudge_and_ghost_gate_pairs() {
    let r = detect_shensha(&chart("甲子", "辛未", "丙寅", None), Gender::Male);

    let grudge = r.finding(Shensha::Grudge);
    assert_eq!(grudge.pairs, vec![(Branch::Zi, Branch::Wei)]);
    assert_eq!(
        grudge.attached,
        vec![
            (PillarPosition::Year, Slot::Branch),
            (PillarPosition::Month, Slot::Branch),
        ]
    );

    let gate = r.finding(Shensha::GhostGate);
    assert_eq!(gate.pairs, vec![(Branch::Yin, Branch::Wei)]);
    assert_eq!(
        gate.attached,
        vec![
            (PillarPosition::Month, Slot::Branch),
            (PillarPosition::Day, Slot::Branch),
        ]
    );
}

#[test]
fn void_branches_from_day_pillar() {
    let r = detect_shensha(&chart("乙亥", "丙戌", "甲子", None), Gender::Male);
    let f = r.finding(Shensha::Void);
    assert_eq!(
        f.targets,
        vec![Symbol::Branch(Branch::Xu), Symbol::Branch(Branch::Hai)]
    );
    assert_eq!(
        f.attached,
        vec![
            (PillarPosition::Year, Slot::Branch),
            (PillarPosition::Month, Slot::Branch),
        ]
    );
}

#[test]
fn heavenly_virtue_matches_stem_or_branch() {
    // 卯 month looks for the branch 申
    let r = detect_shensha(&chart("庚申", "己卯", "甲子", None), Gender::Male);
    let f = r.finding(Shensha::HeavenlyVirtue);
    assert_eq!(f.attached, vec![(PillarPosition::Year, Slot::Branch)]);

    // 丑 month looks for the stem 庚
    let r = detect_shensha(&chart("庚子", "丁丑", "甲子", None), Gender::Male);
    let f = r.finding(Shensha::HeavenlyVirtue);
    assert_eq!(f.matched, vec![Symbol::Stem(Stem::Geng)]);
    assert_eq!(f.attached, vec![(PillarPosition::Year, Slot::Stem)]);
}

#[test]
fn blade_never_fires_for_yin_day_masters() {
    for stem in ALL_STEMS.iter().copied().filter(|s| !s.polarity().is_yang()) {
        let day = Pillar::from_cycle_index(stem.index() as i32);
        for p in ALL_SEXAGENARY {
            let c = FourPillars::new(p, p, day, Some(p));
            let r = detect_shensha(&c, Gender::Male);
            assert!(!r.finding(Shensha::Blade).present, "{day} with {p}");
        }
    }
}

#[test]
fn hour_stars_need_an_hour() {
    // 丑 is the noble branch of 甲; placing it only in the hour
    let with = detect_shensha(&chart("壬子", "丙寅", "甲子", Some("乙丑")), Gender::Male);
    let without = detect_shensha(&chart("壬子", "丙寅", "甲子", None), Gender::Male);
    assert!(with.is_active(Shensha::HeavenlyNoble));
    assert!(with.by_pillar.hour.branch.contains(&Shensha::HeavenlyNoble));
    assert!(!without.is_active(Shensha::HeavenlyNoble));
}

#[test]
fn findings_cover_every_star_in_order() {
    let r = detect_shensha(&chart("壬子", "丙寅", "甲子", None), Gender::Female);
    assert_eq!(r.findings.len(), 20);
    assert_eq!(r.findings[0].star, Shensha::HeavenlyNoble);
    assert_eq!(r.findings[19].star, Shensha::LonelyStar);
}

use saju_base::strength::{MAX_SCORE, distance_ratio};
use saju_base::{
    ALL_POSITIONS, Element, FourPillars, PillarPosition, Season, StrengthBand, StrengthTier,
    TenGod, score_strength,
};

fn chart(y: &str, m: &str, d: &str, h: Option<&str>) -> FourPillars {
    FourPillars::parse(y, m, d, h).unwrap()
}

#[test]
fn wood_day_master_in_wood_month_without_hour() {
    let r = score_strength(&chart("壬子", "丙寅", "甲子", None));
    assert_eq!(r.day_master_score, 40.0);
    assert_eq!(r.stems_total, 24.0);
    assert_eq!(r.branches_total, 159.0);
    assert_eq!(r.total, 223.0);
    assert_eq!(r.max_score, MAX_SCORE);
    assert_eq!(r.band, StrengthBand::Strong);
    assert_eq!(r.stems.len(), 2);
    assert_eq!(r.branches.len(), 3);
    assert!(r.seasonal_support && r.rooting_support && r.numerical_support);
}

#[test]
fn hour_pillar_adds_its_own_contribution() {
    let r = score_strength(&chart("壬子", "丙寅", "甲子", Some("甲子")));
    assert_eq!(r.stems_total, 64.0);
    assert_eq!(r.branches_total, 213.0);
    assert_eq!(r.total, 317.0);
    assert_eq!(r.band, StrengthBand::Strong);
    assert_eq!(r.helping_count, 9);
    assert_eq!(r.contribution_at(PillarPosition::Hour), 94.0);
}

#[test]
fn metal_month_leaves_wood_weak() {
    let r = score_strength(&chart("庚申", "乙酉", "甲申", None));
    assert_eq!(r.season, Season::Metal);
    assert_eq!(r.helping_elements, [Element::Wood, Element::Water]);
    assert_eq!(r.total, 90.0);
    assert_eq!(r.band, StrengthBand::Weak);
    assert_eq!(r.tier, StrengthTier::Weak);
    assert_eq!(r.score_100, 16.1);
    assert_eq!(r.helping_count, 3);
    assert!(!r.seasonal_support);
    assert!(!r.rooting_support);
    assert!(!r.numerical_support);
    assert_eq!(r.stems[0].ten_god, TenGod::AuthorityIndirect);
    assert_eq!(r.stems[0].score, 0.0);
    assert_eq!(r.stems[1].score, 8.0);
}

#[test]
fn branch_scores_use_distance_ratio() {
    let r = score_strength(&chart("壬子", "丙寅", "甲子", Some("甲子")));
    let year = &r.branches[0];
    let hour = &r.branches[3];
    assert_eq!(year.distance_ratio, distance_ratio(PillarPosition::Year));
    assert_eq!(year.score, 45.0);
    assert_eq!(hour.score, 54.0);
    assert_eq!(year.hidden.len(), 2);
    assert!(year.hidden.iter().all(|h| h.helping));
}

#[test]
fn unknown_hour_only_removes_the_hour() {
    let full = chart("戊辰", "丁巳", "丙午", Some("癸巳"));
    let with = score_strength(&full);
    let without = score_strength(&full.without_hour());
    for pos in ALL_POSITIONS {
        if pos == PillarPosition::Hour {
            assert_eq!(without.contribution_at(pos), 0.0);
        } else {
            assert_eq!(with.contribution_at(pos), without.contribution_at(pos), "{pos:?}");
        }
    }
    assert!(without.total <= with.total);
}

#[test]
fn missing_month_falls_back_to_earth_season() {
    assert_eq!(Season::from_month_branch(None), Season::Earth);
}

#[test]
fn result_serializes_snake_case() {
    let r = score_strength(&chart("壬子", "丙寅", "甲子", None));
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["band"], "strong");
    assert_eq!(json["season"], "wood");
    assert_eq!(json["total"], 223.0);
}

use proptest::prelude::*;

use saju_base::shensha::Slot;
use saju_base::strength::{DAY_MASTER_SCORE, STEM_SCORE};
use saju_base::util::round1;
use saju_base::{
    ALL_SEXAGENARY, FourPillars, Gender, Pillar, PillarPosition, Shensha, StrengthBand,
    StrengthResult, compute_profile, detect_shensha, score_strength,
};

fn pillar() -> impl Strategy<Value = Pillar> {
    (0usize..60).prop_map(|i| ALL_SEXAGENARY[i])
}

fn chart() -> impl Strategy<Value = FourPillars> {
    (pillar(), pillar(), pillar(), prop::option::of(pillar()))
        .prop_map(|(y, m, d, h)| FourPillars::new(y, m, d, h))
}

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

/// Rebuild `total` from the breakdown, summing in scoring order and
/// leaving out every item at `skip`.
fn replayed_total(r: &StrengthResult, skip: Option<PillarPosition>) -> f64 {
    let kept = |pos: PillarPosition| Some(pos) != skip;
    let stems = r
        .stems
        .iter()
        .filter(|s| kept(s.position))
        .fold(0.0, |acc, s| {
            acc + if s.helping { STEM_SCORE * s.seasonal_ratio } else { 0.0 }
        });
    let branches = r
        .branches
        .iter()
        .filter(|b| kept(b.position))
        .fold(0.0, |acc, b| {
            let raw = b.hidden.iter().fold(0.0, |acc, h| {
                let score = if h.helping {
                    h.weight as f64 * h.seasonal_ratio * b.distance_ratio
                } else {
                    0.0
                };
                acc + score
            });
            acc + raw
        });
    round1(DAY_MASTER_SCORE + stems + branches)
}

const NON_HOUR: [PillarPosition; 3] =
    [PillarPosition::Year, PillarPosition::Month, PillarPosition::Day];

proptest! {
    #[test]
    fn score_stays_on_scale(c in chart()) {
        let r = score_strength(&c);
        prop_assert!(r.total >= 40.0);
        prop_assert!(r.total < 560.0);
    }

    #[test]
    fn band_contains_total(c in chart()) {
        let r = score_strength(&c);
        let (lo, hi) = r.band.range();
        prop_assert!(lo <= r.total && r.total < hi);
        prop_assert_eq!(r.band, StrengthBand::from_score(r.total));
    }

    #[test]
    fn dropping_the_hour_removes_exactly_the_hour_items(c in chart()) {
        let with = score_strength(&c);
        let without = score_strength(&c.without_hour());
        prop_assert_eq!(with.total, replayed_total(&with, None));
        prop_assert_eq!(without.total, replayed_total(&with, Some(PillarPosition::Hour)));
        prop_assert!(without.total <= with.total);
        prop_assert_eq!(without.contribution_at(PillarPosition::Hour), 0.0);

        let stems: Vec<_> = with
            .stems
            .iter()
            .filter(|s| s.position != PillarPosition::Hour)
            .cloned()
            .collect();
        let branches: Vec<_> = with
            .branches
            .iter()
            .filter(|b| b.position != PillarPosition::Hour)
            .cloned()
            .collect();
        prop_assert_eq!(without.stems, stems);
        prop_assert_eq!(without.branches, branches);
    }

    #[test]
    fn adding_the_hour_only_adds_stars(c in chart(), g in gender()) {
        let with = detect_shensha(&c, g);
        let without = detect_shensha(&c.without_hour(), g);
        for &star in &without.active {
            prop_assert!(with.is_active(star), "{:?} lost when the hour is known", star);
        }
        for pos in NON_HOUR {
            let (fewer, more) = (without.by_pillar.get(pos), with.by_pillar.get(pos));
            for star in &fewer.stem {
                prop_assert!(more.stem.contains(star), "{:?} stem lost {:?}", pos, star);
            }
            for star in &fewer.branch {
                prop_assert!(more.branch.contains(star), "{:?} branch lost {:?}", pos, star);
            }
        }
        prop_assert!(without.by_pillar.hour.is_empty());
    }

    #[test]
    fn active_stars_attach_to_present_slots(c in chart(), g in gender()) {
        let r = detect_shensha(&c, g);
        for f in &r.findings {
            if !f.active {
                prop_assert!(f.attached.is_empty(), "{:?} inactive but attached", f.star);
            }
            for &(pos, _) in &f.attached {
                prop_assert!(c.get(pos).is_some(), "{:?} attached to missing {:?}", f.star, pos);
            }
        }
        prop_assert!(r.by_pillar.hour.is_empty() || c.hour_known());
    }

    #[test]
    fn gender_scoped_stars_follow_gender(c in chart()) {
        let male = detect_shensha(&c, Gender::Male);
        let female = detect_shensha(&c, Gender::Female);
        prop_assert!(!male.is_active(Shensha::Widow));
        prop_assert!(!female.is_active(Shensha::LonelyStar));
        prop_assert_eq!(
            male.finding(Shensha::Widow).present,
            female.finding(Shensha::Widow).present
        );
    }

    #[test]
    fn day_only_stars_sit_on_the_day_branch(c in chart(), g in gender()) {
        let r = detect_shensha(&c, g);
        for star in [Shensha::Commander, Shensha::WhiteTiger, Shensha::LonelyPhoenix] {
            let f = r.finding(star);
            if f.active {
                prop_assert_eq!(&f.attached, &vec![(PillarPosition::Day, Slot::Branch)]);
            }
        }
    }

    #[test]
    fn profile_is_deterministic(c in chart(), g in gender()) {
        prop_assert_eq!(compute_profile(&c, g), compute_profile(&c, g));
    }
}

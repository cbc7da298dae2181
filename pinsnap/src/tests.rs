use crate::*;

use alloc::vec;
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.gen_range_usize(0, i + 1);
            items.swap(i, j);
        }
    }
}

fn approx(a: f64, b: f64) -> bool {
    let d = if a > b { a - b } else { b - a };
    d < 1e-9
}

fn example_rule() -> SnapRule {
    let regions = [
        PinnedRegion::new("A", 100, 300),
        PinnedRegion::new("B", 600, 600),
    ];
    SnapRule::from_regions(&regions, 1000, SnapOptions::default()).unwrap()
}

#[test]
fn targets_are_normalized_against_max_scroll() {
    let rule = example_rule();
    let t = rule.targets();
    assert_eq!(t.len(), 2);

    assert!(approx(t[0].start, 0.1));
    assert!(approx(t[0].end, 0.3));
    assert!(approx(t[0].center, 0.2));

    assert!(approx(t[1].start, 0.6));
    assert!(approx(t[1].end, 0.6));
    assert!(approx(t[1].center, 0.6));
}

#[test]
fn snap_inside_band_resolves_to_center() {
    let rule = example_rule();
    assert!(approx(rule.snap_to(0.22), 0.2));
    assert!(approx(rule.snap_to(0.59), 0.6));
    assert!(approx(rule.snap_to(0.615), 0.6));
    // Tolerance below the first region's start.
    assert!(approx(rule.snap_to(0.085), 0.2));
}

#[test]
fn snap_in_free_space_is_identity() {
    let rule = example_rule();
    assert_eq!(rule.snap_to(0.45), 0.45);
    assert_eq!(rule.snap_to(0.0), 0.0);
    assert_eq!(rule.snap_to(0.95), 0.95);
    assert!(rule.nearest(0.45).is_none());
}

#[test]
fn snap_does_not_propagate_nan() {
    let rule = example_rule();
    assert!(rule.snap_to(f64::NAN).is_nan());
}

#[test]
fn unsorted_regions_are_ordered_by_start_offset() {
    let regions = [
        PinnedRegion::new(2u64, 600, 700),
        PinnedRegion::new(1u64, 100, 300),
    ];
    let rule = SnapRule::from_regions(&regions, 1000, SnapOptions::default()).unwrap();
    let starts: Vec<f64> = rule.targets().iter().map(|t| t.start).collect();
    assert!(approx(starts[0], 0.1));
    assert!(approx(starts[1], 0.6));
}

#[test]
fn equal_start_offsets_are_ordered_by_id() {
    let a = PinnedRegion::new("a", 100, 300);
    let b = PinnedRegion::new("b", 100, 200);

    let forward = SnapRule::from_regions(&[a.clone(), b.clone()], 1000, SnapOptions::default());
    let reverse = SnapRule::from_regions(&[b, a], 1000, SnapOptions::default());
    assert_eq!(forward, reverse);

    let rule = forward.unwrap();
    // "a" sorts first: its end is 0.3.
    assert!(approx(rule.targets()[0].end, 0.3));
    assert!(approx(rule.targets()[1].end, 0.2));
}

#[test]
fn distance_tie_prefers_first_sorted_target() {
    let wide = PinnedRegion::new("wide", 400, 600);
    let narrow = PinnedRegion::new("narrow", 450, 550);

    for regions in [[wide.clone(), narrow.clone()], [narrow, wide]] {
        let rule = SnapRule::from_regions(&regions, 1000, SnapOptions::default()).unwrap();
        for _ in 0..8 {
            assert!(approx(rule.snap_to(0.5), 0.5));
            let winner = rule.nearest(0.5).unwrap();
            assert!(approx(winner.start, 0.4));
            assert!(approx(winner.end, 0.6));
        }
    }
}

#[test]
fn nearest_target_fold_keeps_first_on_tie() {
    let targets = [
        SnapTarget {
            start: 0.0,
            end: 0.5,
            center: 0.25,
        },
        SnapTarget {
            start: 0.5,
            end: 1.0,
            center: 0.75,
        },
    ];
    let t = nearest_target(&targets, 0.5).unwrap();
    assert_eq!(t.center, 0.25);
    let t = nearest_target(&targets, 0.625).unwrap();
    assert_eq!(t.center, 0.75);
    assert!(nearest_target(&[], 0.5).is_none());
}

#[test]
fn inverted_region_is_clamped_to_zero_width() {
    let region = PinnedRegion::new(7u64, 300, 100);
    assert!(region.is_inverted());
    assert_eq!(region.end(), 300);
    assert_eq!(region.span(), 0);

    let rule = SnapRule::from_regions(&[region], 1000, SnapOptions::default()).unwrap();
    let t = rule.targets()[0];
    assert!(t.end >= t.start);
    assert!(approx(t.start, 0.3));
    assert!(approx(t.end, 0.3));
    assert!(approx(t.center, 0.3));
}

#[test]
fn missing_end_offset_is_a_zero_width_pin() {
    let region = PinnedRegion::point(1u64, 250);
    assert!(!region.is_inverted());
    assert_eq!(region.end(), 250);

    let rule = SnapRule::from_regions(&[region], 500, SnapOptions::default()).unwrap();
    let t = rule.targets()[0];
    assert!(approx(t.start, 0.5));
    assert!(approx(t.center, 0.5));
    assert!(approx(t.end, 0.5));
}

#[test]
fn empty_regions_or_zero_extent_abort() {
    let none: [PinnedRegion; 0] = [];
    assert!(SnapRule::from_regions(&none, 1000, SnapOptions::default()).is_none());

    let regions = [PinnedRegion::new(1u64, 100, 200)];
    assert!(SnapRule::from_regions(&regions, 0, SnapOptions::default()).is_none());
}

#[test]
fn offsets_past_max_scroll_are_clamped() {
    let regions = [PinnedRegion::new(1u64, 900, 1500)];
    let rule = SnapRule::from_regions(&regions, 1000, SnapOptions::default()).unwrap();
    let t = rule.targets()[0];
    assert!(approx(t.start, 0.9));
    assert!(approx(t.end, 1.0));
    assert!(approx(t.center, 0.95));
}

#[test]
fn tolerance_is_configurable() {
    let regions = [PinnedRegion::new(1u64, 100, 300)];

    let tight = SnapOptions::default().with_tolerance(0.0);
    let rule = SnapRule::from_regions(&regions, 1000, tight).unwrap();
    assert_eq!(rule.snap_to(0.31), 0.31);
    assert!(approx(rule.snap_to(0.3), 0.2));

    let loose = SnapOptions::default().with_tolerance(0.1);
    let rule = SnapRule::from_regions(&regions, 1000, loose).unwrap();
    assert!(approx(rule.snap_to(0.39), 0.2));

    let negative = SnapOptions::default().with_tolerance(-1.0);
    assert_eq!(negative.tolerance, 0.0);
    let nan = SnapOptions::default().with_tolerance(f64::NAN);
    assert_eq!(nan.tolerance, 0.0);
}

#[test]
fn default_options_match_settle_policy() {
    let opts = SnapOptions::default();
    assert_eq!(opts.tolerance, DEFAULT_TOLERANCE);
    assert_eq!(opts.settle, SettleDuration::new(200, 500));
    assert_eq!(opts.easing, Easing::EaseOutCubic);
    assert_eq!(opts.delay_ms, 0);
}

#[test]
fn settle_duration_interpolates_by_distance() {
    let d = SettleDuration::new(200, 500);
    assert_eq!(d.for_distance(0.0), 200);
    assert_eq!(d.for_distance(FULL_SETTLE_DISTANCE / 2.0), 350);
    assert_eq!(d.for_distance(FULL_SETTLE_DISTANCE), 500);
    assert_eq!(d.for_distance(0.9), 500);
    assert_eq!(d.for_distance(f64::NAN), 200);
    assert_eq!(d.for_distance(-0.5), 200);

    assert_eq!(SettleDuration::fixed(300).for_distance(0.05), 300);
    // Swapped bounds are reordered.
    assert_eq!(SettleDuration::new(500, 200).for_distance(0.0), 200);

    let rule = example_rule();
    assert!((259..=260).contains(&rule.settle_duration_ms(0.22, 0.2)));
}

#[test]
fn easing_curves_hit_endpoints() {
    let curves = [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::EaseOutCubic,
        Easing::ExpoOut,
    ];

    for easing in curves {
        assert!(easing.sample(0.0).abs() < 1e-2, "{easing:?} at 0");
        assert!((easing.sample(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        assert_eq!(easing.sample(-1.0), easing.sample(0.0));
        assert_eq!(easing.sample(2.0), easing.sample(1.0));

        let mut prev = easing.sample(0.0);
        for i in 1..=20 {
            let cur = easing.sample(i as f32 / 20.0);
            assert!(cur >= prev, "{easing:?} must be monotonic");
            prev = cur;
        }
    }
}

#[test]
fn ease_out_cubic_front_loads_motion() {
    let e = Easing::EaseOutCubic;
    assert!(e.sample(0.5) > 0.5);
    assert!((e.sample(0.5) - 0.875).abs() < 1e-6);
}

#[test]
fn expo_out_matches_exponential_curve() {
    // Available with and without `std`; the `no_std` build uses an approximation.
    let e = Easing::ExpoOut;
    // (t, 2^(-10t))
    for (t, pow) in [
        (0.1f32, 0.5f32),
        (0.25, 0.176_776_7),
        (0.5, 0.031_25),
        (0.73, 0.006_345_7),
    ] {
        let expected = 1.001 - pow;
        assert!((e.sample(t) - expected).abs() < 1e-3, "t={t}");
    }
    assert_eq!(e.sample(1.0), 1.0);
}

#[test]
fn randomized_targets_satisfy_ordering_invariant() {
    let mut rng = Lcg::new(0x5eed_0001);
    for _ in 0..200 {
        let max_scroll = rng.gen_range_u64(1, 50_000);
        let n = rng.gen_range_usize(1, 12);
        let mut regions = Vec::with_capacity(n);
        for id in 0..n as u64 {
            let start = rng.gen_range_u64(0, max_scroll + 100);
            let end = if rng.gen_bool() {
                Some(rng.gen_range_u64(0, max_scroll + 100))
            } else {
                None
            };
            regions.push(PinnedRegion {
                id,
                start_offset: start,
                end_offset: end,
            });
        }

        let rule = SnapRule::from_regions(&regions, max_scroll, SnapOptions::default()).unwrap();
        assert_eq!(rule.targets().len(), n);
        for t in rule.targets() {
            assert!(0.0 <= t.start);
            assert!(t.start <= t.center);
            assert!(t.center <= t.end);
            assert!(t.end <= 1.0);
        }
        assert!(
            rule.targets()
                .windows(2)
                .all(|w| w[0].start <= w[1].start)
        );
    }
}

#[test]
fn snapping_is_independent_of_registration_order() {
    let mut rng = Lcg::new(0x5eed_0002);
    for _ in 0..100 {
        let max_scroll = rng.gen_range_u64(100, 10_000);
        let n = rng.gen_range_usize(1, 8);
        let mut regions: Vec<PinnedRegion<u64>> = (0..n as u64)
            .map(|id| {
                // Coarse offsets so equal starts are common.
                let start = rng.gen_range_u64(0, 5) * (max_scroll / 5);
                let end = start + rng.gen_range_u64(0, max_scroll / 4 + 1);
                PinnedRegion::new(id, start, end)
            })
            .collect();

        let baseline =
            SnapRule::from_regions(&regions, max_scroll, SnapOptions::default()).unwrap();
        rng.shuffle(&mut regions);
        let shuffled =
            SnapRule::from_regions(&regions, max_scroll, SnapOptions::default()).unwrap();
        assert_eq!(baseline, shuffled);

        for i in 0..=100 {
            let v = i as f64 / 100.0;
            assert_eq!(baseline.snap_to(v), shuffled.snap_to(v));
        }
    }
}

#[test]
fn from_targets_preserves_order() {
    let targets = vec![
        SnapTarget {
            start: 0.5,
            end: 0.5,
            center: 0.5,
        },
        SnapTarget {
            start: 0.1,
            end: 0.2,
            center: 0.15,
        },
    ];
    let rule = SnapRule::from_targets(targets.clone(), SnapOptions::default());
    assert_eq!(rule.targets(), &targets[..]);
    assert!(approx(rule.snap_to(0.16), 0.15));
}

#[test]
fn snapshot_defaults_to_idle() {
    let s = SnapSnapshot::default();
    assert_eq!(s.state, CoordinatorState::Idle);
    assert!(s.targets.is_empty());
    assert!(s.pending.is_none());
}

// Example: how long a settle correction takes for a given travel distance.
use pinsnap::{Easing, PinnedRegion, SettleDuration, SnapOptions, SnapRule};

fn main() {
    let opts = SnapOptions::default()
        .with_settle(SettleDuration::new(200, 500))
        .with_easing(Easing::EaseOutCubic);
    let regions = [PinnedRegion::new(1u64, 2_000, 6_000)];
    let rule = SnapRule::from_regions(&regions, 10_000, opts).expect("non-empty regions");

    for v in [0.19, 0.25, 0.35, 0.4, 0.61] {
        let to = rule.snap_to(v);
        println!(
            "from={v:.2} to={to:.2} duration_ms={}",
            rule.settle_duration_ms(v, to)
        );
    }

    // Sample the correction curve a UI would use for the tween.
    let samples: Vec<f32> = (0..=4).map(|i| rule.easing().sample(i as f32 / 4.0)).collect();
    println!("easing={:?} samples={samples:?}", rule.easing());
}

use pinsnap::{PinnedRegion, SnapOptions, SnapRule};

fn main() {
    // Two pinned sections on a 1000px-scrollable page: a 200px pin and a zero-width pin.
    let regions = [
        PinnedRegion::new("capabilities", 100, 300),
        PinnedRegion::point("manufacturing", 600),
    ];
    let rule = SnapRule::from_regions(&regions, 1000, SnapOptions::default())
        .expect("non-empty regions and extent");

    println!("targets={:?}", rule.targets());
    for v in [0.05, 0.22, 0.45, 0.59, 0.9] {
        println!("settle at {v:.2} -> rest at {:.2}", rule.snap_to(v));
    }
}

use pinsnap_adapter::{CoordinatorOptions, Registry, ScrollRuntime, ScrollerOptions};

fn main() {
    // Example: one runtime for the whole app; sections register through scoped contexts.
    //
    // A host would:
    // - call navigate() from its router (after the old route's sections unmounted)
    // - let the new route's sections register pins within the settle delay
    // - forward wheel/touch deltas and call frame(now_ms) from its frame loop
    // - write the returned offset to the real scroll container
    let registry = Registry::<u64>::new();
    registry.set_max_scroll(4_000);

    let mut rt = ScrollRuntime::new(
        registry.clone(),
        ScrollerOptions::default(),
        CoordinatorOptions::default(),
    );

    rt.navigate("/", 0);
    let hero = registry.context();
    hero.scrub(0, 800, |p| {
        if p == 1.0 {
            println!("hero animation finished");
        }
    });
    let capabilities = registry.context();
    capabilities.pin(pinsnap::PinnedRegion::new(1, 1_000, 2_000));

    let mut now_ms = 0u64;
    let mut wheel = [(1_000u64, 700i64), (1_050, 500)].into_iter().peekable();
    while now_ms < 5_000 {
        now_ms += 16;
        while let Some(&(at, delta)) = wheel.peek() {
            if at > now_ms {
                break;
            }
            rt.on_wheel(delta, at);
            wheel.next();
        }

        let report = rt.frame(now_ms);
        if let Some(out) = report.recompute {
            println!("t={now_ms} recompute={out:?}");
        }
        if let Some(off) = report.offset {
            if now_ms % 160 == 0 {
                println!("t={now_ms} off={off} motion={:?}", rt.scroller().motion());
            }
        }
    }
    println!("rest offset={}", rt.scroller().offset());

    // Leaving the page: sections unmount, then the router navigates.
    drop(capabilities);
    drop(hero);
    rt.navigate("/about", now_ms);
    println!("after navigate: {:?}", rt.coordinator().snapshot());

    let registry = rt.shutdown();
    println!("registry after shutdown: {registry:?}");
}

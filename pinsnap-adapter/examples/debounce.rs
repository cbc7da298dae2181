use pinsnap_adapter::DebounceTimer;

fn main() {
    // Example: at most one pending job; rescheduling cancels the previous one.
    let mut t = DebounceTimer::new();
    t.schedule("layout pass #1", 0, 150);
    let cancelled = t.schedule("layout pass #2", 100, 150);
    println!("cancelled={cancelled:?} due={:?}", t.due_ms());

    for now_ms in [150, 249, 250, 400] {
        println!("t={now_ms} fired={:?}", t.poll(now_ms));
    }
}

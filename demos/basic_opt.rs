use pagesim::sim::{Policy, steps};

fn main() {
    let refs = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

    // Walk the lazy per-step view and narrate each eviction decision.
    let mut faults = 0;
    for step in steps(Policy::Opt, &refs, 3).unwrap() {
        if step.outcome.is_fault() {
            faults += 1;
        }
        match step.outcome.evicted() {
            Some(victim) => println!(
                "step {:2}: page {} evicts {:?} -> {:?}",
                step.index, step.page, victim, step.resident
            ),
            None => println!("step {:2}: page {} -> {:?}", step.index, step.page, step.resident),
        }
    }
    println!("total page faults: {faults}");
}

use pagesim::sim::{Policy, simulate};

fn main() {
    let refs = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
    let run = simulate(Policy::Lru, &refs, 3).unwrap();

    println!("LRU over {refs:?} with 3 frames");
    println!("total page faults: {}", run.fault_count);

    // Front of each snapshot is the LRU candidate, back the most recent use.
    for (step, snapshot) in run.trace.iter().enumerate() {
        println!("step {step:2}: {snapshot:?}");
    }
}

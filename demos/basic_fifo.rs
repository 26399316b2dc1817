use pagesim::sim::{Policy, simulate};

fn main() {
    let refs = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
    let run = simulate(Policy::Fifo, &refs, 3).unwrap();

    println!("FIFO over {refs:?} with 3 frames");
    println!("total page faults: {}", run.fault_count);
    for (step, snapshot) in run.trace.iter().enumerate() {
        println!("step {step:2}: {snapshot:?}");
    }
}

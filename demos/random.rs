use pseudo_random::PseudoRandom;

fn main() -> Result<(), pseudo_random::PseudoRandomError> {
    // Seeded from the wall clock; output differs between runs.
    let mut random = PseudoRandom::from_time();
    println!("origin seed {}", random.origin_seed());
    println!("random.next_f64() {}", random.next_f64());
    println!("random.next_range(1, 10) {}", random.next_range(1, 10)?);
    Ok(())
}

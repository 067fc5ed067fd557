use pseudo_random::PseudoRandom;

fn main() -> Result<(), pseudo_random::PseudoRandomError> {
    let mut random = PseudoRandom::new(123)?;
    println!("random.next_f64() {}", random.next_f64());
    println!("random.next_range(1, 10) {}", random.next_range(1, 10)?);
    Ok(())
}

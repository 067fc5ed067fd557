use pseudo_random::PseudoRandom;

fn main() -> Result<(), pseudo_random::PseudoRandomError> {
    let mut random = PseudoRandom::new(123)?;
    random.set_digits(6)?;
    println!("random.next_f64() {}", random.next_f64());
    if let Err(err) = random.set_digits(9) {
        println!("rejected: {err}");
    }
    Ok(())
}

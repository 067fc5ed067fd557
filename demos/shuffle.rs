use pseudo_random::PseudoRandom;

fn main() -> Result<(), pseudo_random::PseudoRandomError> {
    let mut random = PseudoRandom::new(123)?;
    let array = [1, 2, 3, 4, 5];
    println!("random.shuffle({array:?}) {:?}", random.shuffle(&array));
    println!(
        "random.shuffle_from_current({array:?}) {:?}",
        random.shuffle_from_current(&array)
    );
    Ok(())
}

use pseudo_random::PseudoRandom;

fn main() -> Result<(), pseudo_random::PseudoRandomError> {
    let mut random = PseudoRandom::new(123)?;
    let array = [1, 2, 3, 4, 5];
    println!("array {array:?}");

    let sorted = random.seed_sort(&array);
    println!("random.seed_sort() {sorted:?}");
    println!("map {:?}", random.permutation_map(array.len()).as_slice());

    let restored = random.seed_unsort(&sorted);
    println!("random.seed_unsort() {restored:?}");
    assert_eq!(restored, array.to_vec());
    Ok(())
}

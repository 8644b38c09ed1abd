use snowflake_udf::SnowflakeId;

fn main() {
    let generator = SnowflakeId::new();

    // No argument: machine id 1
    let id1 = generator.generate(None);
    let id2 = generator.generate(Some(5));
    // 1029 mod 1024 = 5
    let id3 = generator.generate(Some(1029));

    println!("Generated IDs:");
    print_id(id1, &generator);
    print_id(id2, &generator);
    print_id(id3, &generator);

    println!("\nSequence tickets taken: {}", generator.counter());
}

fn print_id(id: u64, generator: &SnowflakeId) {
    let (since_epoch, machine, sequence) = generator.extract.decompose(id);
    match generator.extract.datetime(id) {
        Some(datetime) => println!(
            "  ID: {id}, Since epoch: {since_epoch} ms, Human date: {datetime}, \
             Machine ID: {machine}, Sequence: {sequence}"
        ),
        None => println!(
            "  ID: {id}, Since epoch: {since_epoch} ms (out of range), \
             Machine ID: {machine}, Sequence: {sequence}"
        ),
    }
}

use rand::{rng, Rng};
use snowflake_udf::{HostFunction, SnowflakeUdf};
use std::collections::HashSet;
use std::thread;
use std::time::Duration;

fn main() {
    // A host registers the function once, then calls it from many sessions
    if let Err(e) = SnowflakeUdf::register_process(2) {
        println!("Setup with two arguments rejected: {e}");
    }

    let mut handles = vec![];
    for session in 0..4i64 {
        handles.push(thread::spawn(move || {
            let udf = SnowflakeUdf::register_process(1).unwrap();
            let mut rng = rng();
            let mut ids = HashSet::new();

            for i in 0..5 {
                // Each session passes its own server id
                let id = udf.call(Some(session));
                let (ts, machine, seq) = udf.generator().extract.decompose(id);
                println!("Session {session} ID {i}: {id} (ts={ts}, machine={machine}, seq={seq})");

                assert!(ids.insert(id), "Duplicate ID generated!");
                thread::sleep(Duration::from_millis(rng.random_range(0..=9)));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
    println!(
        "Sequence tickets taken: {}",
        snowflake_udf::process_generator().counter()
    );
}

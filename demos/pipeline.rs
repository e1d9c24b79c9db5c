use ringsem::trace::init_tracing;
use ringsem::MPMC::ChannelBuilder;
use std::env;
use std::thread;
use std::time::{Duration, Instant};

// Usage: cargo run --example pipeline [capacity] [bytes-per-producer]
//        add `--features tracing` and RUST_LOG=ringsem=debug for channel events
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let capacity = if args.len() > 1 { args[1].parse()? } else { 64 };
    let per_producer: usize = if args.len() > 2 { args[2].parse()? } else { 100_000 };
    let producers = 4;
    let consumers = 4;

    println!(
        "Pipeline: {} producers -> [{} slots] -> {} consumers, {} bytes each",
        producers, capacity, consumers, per_producer
    );

    let (producer, consumer) = ChannelBuilder::new()
        .with_capacity(capacity)
        .build_pair()?;

    let start = Instant::now();

    let senders: Vec<_> = (0..producers)
        .map(|p| {
            let producer = producer.clone();
            thread::spawn(move || -> Result<u64, ringsem::ChannelError> {
                let mut sum = 0u64;
                for i in 0..per_producer {
                    let byte = (i * 31 + p) as u8;
                    producer.send(byte)?;
                    sum += byte as u64;
                }
                Ok(sum)
            })
        })
        .collect();

    let total = producers * per_producer;
    let receivers: Vec<_> = (0..consumers)
        .map(|c| {
            let consumer = consumer.clone();
            let share = total / consumers + usize::from(c < total % consumers);
            thread::spawn(move || -> Result<u64, ringsem::ChannelError> {
                let mut sum = 0u64;
                let mut idle = 0;
                let mut taken = 0;
                while taken < share {
                    match consumer.receive_timeout(Duration::from_millis(100))? {
                        Some(byte) => {
                            sum += byte as u64;
                            taken += 1;
                        }
                        None => idle += 1,
                    }
                }
                if idle > 0 {
                    println!("  consumer {} idled {} times", c, idle);
                }
                Ok(sum)
            })
        })
        .collect();

    let mut sent = 0u64;
    for s in senders {
        sent += s.join().map_err(|_| "producer panicked")??;
    }
    let mut received = 0u64;
    for r in receivers {
        received += r.join().map_err(|_| "consumer panicked")??;
    }

    let elapsed = start.elapsed();
    println!("Sent checksum:     {}", sent);
    println!("Received checksum: {}", received);
    println!(
        "Throughput: {:.2} million bytes/sec",
        (total as f64 / elapsed.as_secs_f64()) / 1_000_000.0
    );

    if sent != received {
        return Err("checksum mismatch".into());
    }
    Ok(())
}

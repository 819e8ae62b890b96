use std::io::{self, Write};

use heap_pq::PriorityQueue;

fn main() -> heap_pq::Result<()> {
    // Trace lines go to stdout as bare messages
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let mut queue = PriorityQueue::new();

    println!("Inserting:");
    for priority in [4, 9, 12, 8, 56, 1, 19, 24, 7] {
        queue.enqueue(0, priority);
    }

    println!("\nDeleting Min");
    let min = queue.dequeue_min()?;
    log::info!("removed priority {}", min.priority());

    println!("\nDeleting Max");
    let max = queue.dequeue_max()?;
    log::info!("removed priority {}", max.priority());

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(())
}

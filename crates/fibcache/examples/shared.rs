use eyre::Result;
use fibcache::{iterative_fib, SharedCache};

fn main() -> Result<()> {
    pretty_env_logger::formatted_builder().parse_filters("debug").init();

    let cache = &SharedCache::new();
    let results = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| s.spawn(move || (i * 20..i * 20 + 20).map(|n| cache.get(n)).collect::<Vec<_>>()))
            .collect();
        handles.into_iter().flat_map(|h| h.join().expect("worker panicked")).collect::<Vec<_>>()
    });

    for (n, value) in results.into_iter().enumerate() {
        assert_eq!(value?, iterative_fib(n)?);
    }

    println!("80 values computed across 4 threads");
    Ok(())
}

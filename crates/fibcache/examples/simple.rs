use eyre::Result;
use fibcache::{iterative_fib, Error, MemoCache};

fn main() -> Result<()> {
    pretty_env_logger::formatted_builder().parse_filters("trace").init();

    let mut cache = MemoCache::new();
    assert_eq!(cache.get(10)?, 55);
    assert_eq!(cache.get(10)?, iterative_fib(10)?);

    let last = cache.capacity() - 1;
    println!("fib({last}) = {}", cache.get(last)?);

    match cache.get(last + 1) {
        Err(Error::OutOfRange { n, capacity }) => println!("fib({n}) needs more than {capacity} slots"),
        other => panic!("expected an out of range error, got {other:?}"),
    }

    Ok(())
}

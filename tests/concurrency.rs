//! One shared stemmer used from many threads at once.

use std::sync::{Arc, Barrier};
use std::thread;

use porter2::{Porter2, Stemmer};

#[test]
fn test_parallel_stemming() {
    const NUM_THREADS: usize = 8;
    let words = ["consolingly", "generalization", "knackeries", "hopping", "skies", "succeed"];
    let expected: Vec<String> = words.iter().map(|w| porter2::stem(w).unwrap()).collect();

    let stemmer: Arc<dyn Stemmer> = Arc::new(Porter2::new());
    let barrier = Arc::new(Barrier::new(NUM_THREADS));

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|_| {
            let stemmer = Arc::clone(&stemmer);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                (0..200)
                    .flat_map(|_| words.iter())
                    .map(|w| stemmer.stem(w).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let results = handle.join().unwrap();
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result, &expected[i % words.len()]);
        }
    }
}

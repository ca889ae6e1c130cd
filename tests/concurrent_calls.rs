use std::thread;

use record_codecs::{compress, decompress, Algorithm, CodecOptions, Pipeline, RecordWidth};
use simplelog::{Config, LevelFilter, TestLogger};

fn sample(seed: u8, len: usize) -> Vec<u8> {
    (0..len).map(|i| ((i / 7) as u8).wrapping_mul(seed) % 5).collect()
}

#[test]
fn codecs_run_in_parallel() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());

    thread::scope(|scope| {
        let handles = Algorithm::ALL
            .iter()
            .enumerate()
            .map(|(i, &algorithm)| {
                scope.spawn(move || {
                    let data = sample(i as u8 + 1, 4096);
                    let opts = CodecOptions::new()
                        .with_algorithm(algorithm)
                        .with_record_width(4)
                        .unwrap();
                    let block = compress(&data, &opts).unwrap();
                    decompress(&block, &opts).unwrap() == data
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    });
}

#[test]
fn shared_pipeline_across_threads() {
    let _ = TestLogger::init(LevelFilter::Info, Config::default());
    let pipeline = Pipeline::classic(RecordWidth::new(2).unwrap());

    thread::scope(|scope| {
        for seed in 1..=4_u8 {
            let pipeline = &pipeline;
            scope.spawn(move || {
                let data = sample(seed, 2000);
                let frame = pipeline.compress(&data).unwrap();
                assert_eq!(pipeline.decompress(&frame).unwrap(), data);
            });
        }
    });
}

#![allow(missing_docs)]

use std::sync::Arc;
use std::thread;

use paramcheck::check::{ErrorKind, TypeDescriptor, Value, validate};

#[test]
fn descriptors_are_shared_across_threads_without_coordination() {
	let descriptor: Arc<TypeDescriptor> = Arc::new("Size | None".parse().expect("descriptor parses"));

	let handles: Vec<_> = (0..8_i64)
		.map(|worker| {
			let descriptor = Arc::clone(&descriptor);
			thread::spawn(move || {
				let good = Value::from([worker, worker + 1]);
				let bad = Value::from([worker, -1 - worker]);
				(validate("size", &good, &descriptor), validate("size", &bad, &descriptor))
			})
		})
		.collect();

	for handle in handles {
		let (good, bad) = handle.join().expect("worker finishes");
		assert_eq!(good, Ok(()));
		assert_eq!(bad.expect_err("negative size rejects").kind, ErrorKind::ValueViolation);
	}
}

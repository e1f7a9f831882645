// SPDX-License-Identifier: MIT OR Apache-2.0
// Criterion-based benchmarks for the steady-state guarded-call path

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jnibook_link::{DlOpenLoader, LibraryLoader, LinkGuard, NativeBindings};

struct FixedBindings;

impl NativeBindings for FixedBindings {
    fn verify_link(&self) -> i32 {
        0
    }
}

struct FixedLoader;

impl LibraryLoader for FixedLoader {
    fn load(
        &self,
        _library: &str,
    ) -> Result<Box<dyn NativeBindings>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Box::new(FixedBindings))
    }
}

fn bench_guarded_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("guarded_calls");

    // Steady state after a successful load: lock-free read plus the call.
    let loaded = LinkGuard::new("fixed", Box::new(FixedLoader));
    loaded.check_availability().unwrap();
    group.bench_function("verify_link_loaded", |b| {
        b.iter(|| black_box(loaded.verify_link()).is_ok())
    });

    // Steady state after a failed load: every call clones the captured error.
    let failed = LinkGuard::new("jnibook-link-no-such-library", Box::new(DlOpenLoader));
    let _ = failed.check_availability();
    group.bench_function("check_availability_failed", |b| {
        b.iter(|| black_box(failed.check_availability()).is_err())
    });

    group.finish();
}

criterion_group!(benches, bench_guarded_calls);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use progression::{Skill, SkillSheet, compute_skill_progress};

fn compute_progress(c: &mut Criterion) {
    c.bench_function("compute_skill_progress mid table", |b| {
        b.iter(|| compute_skill_progress(black_box(3_500_000.0), black_box(50)));
    });
    c.bench_function("compute_skill_progress capped", |b| {
        b.iter(|| compute_skill_progress(black_box(1e12), black_box(60)));
    });
}

fn compute_sheet(c: &mut Criterion) {
    c.bench_function("skill sheet", |b| {
        b.iter(|| {
            let sheet = SkillSheet::compute(|skill| match skill {
                Skill::Farming | Skill::Taming => (black_box(70_000_000.0), 10),
                _ => (black_box(1_234_567.0), 0),
            });
            sheet.average_level()
        });
    });
}

criterion_group!(benches, compute_progress, compute_sheet);
criterion_main!(benches);

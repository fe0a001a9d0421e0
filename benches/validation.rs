use criterion::{black_box, criterion_group, criterion_main, Criterion};
use formkit_core::contact::contact_us_fields;
use formkit_core::FormController;

fn filled_form() -> FormController {
    let mut form = FormController::new(contact_us_fields().unwrap());
    form.set_value("name", "Jane Doe");
    form.set_value("email", "jane.doe+contact@mail.example.com");
    form.set_value("reason", "Support");
    form.set_value("notes", "x".repeat(900));
    form
}

fn bench_validate_field(c: &mut Criterion) {
    let mut form = filled_form();
    c.bench_function("validate_email_field", |b| {
        b.iter(|| black_box(form.validate(black_box("email"))))
    });
}

fn bench_validate_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_form");

    let mut valid = filled_form();
    group.bench_function("valid", |b| b.iter(|| black_box(valid.validate_form())));

    let mut empty = FormController::new(contact_us_fields().unwrap());
    group.bench_function("empty", |b| b.iter(|| black_box(empty.validate_form())));

    group.finish();
}

criterion_group!(benches, bench_validate_field, bench_validate_form);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use heart_risk::feature_engineering::PatientRecord;
use heart_risk::inference::{InferenceConfig, RiskPredictor};
use heart_risk::prelude::*;
use std::path::PathBuf;

fn load_predictor() -> RiskPredictor {
    let models_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("models");
    RiskPredictor::load(InferenceConfig::from_models_dir(models_dir)).unwrap()
}

fn patients() -> Vec<(&'static str, PatientInput)> {
    let example = PatientInput::example();

    let mut high_risk = example.clone();
    high_risk.age = 68;
    high_risk.cp = ChestPain::Asymptomatic;
    high_risk.trestbps = 160.0;
    high_risk.chol = 290.0;
    high_risk.fbs = true;
    high_risk.restecg = RestEcg::StTAbnormality;

    let mut low_risk = example.clone();
    low_risk.age = 35;
    low_risk.sex = Sex::Female;
    low_risk.cp = ChestPain::AtypicalAngina;
    low_risk.trestbps = 110.0;
    low_risk.chol = 180.0;
    low_risk.exang = false;

    vec![("example", example), ("high_risk", high_risk), ("low_risk", low_risk)]
}

fn bench_feature_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("feature_derivation");

    for (name, input) in patients() {
        group.bench_with_input(BenchmarkId::new("to_row", name), &input, |b, input| {
            b.iter(|| PatientRecord::from_input(black_box(input.clone())).unwrap().to_row())
        });
    }

    group.finish();
}

fn bench_prediction(c: &mut Criterion) {
    let mut group = c.benchmark_group("prediction");
    let predictor = load_predictor();

    for (name, input) in patients() {
        let record = PatientRecord::from_input(input.clone()).unwrap();
        let row = record.to_row();

        group.bench_with_input(BenchmarkId::new("transform", name), &row, |b, row| {
            b.iter(|| predictor.preprocessor().transform(black_box(row)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("predict", name), &input, |b, input| {
            b.iter(|| predictor.predict(black_box(input.clone())).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_feature_derivation, bench_prediction);
criterion_main!(benches);

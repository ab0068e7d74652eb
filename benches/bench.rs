// Criterion benchmarks for Campus Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use campus_match::core::{normalize::normalize, scoring::similarity, Matcher};
use campus_match::models::{
    Factoid, FactoidData, Gender, SexualPreference, StudentType, UserData, UserProfile, YearCode,
};
use chrono::NaiveDate;

const SPORTS: &[&str] = &[
    "Basketball", "Football", "Tennis", "Cycling", "Running", "Swimming", "Yoga",
    "Martial Arts", "Dancing", "Hiking", "Climbing", "Skiing", "Golf", "Soccer",
];

const HOMETOWNS: &[&str] = &["Fresno, CA", "Austin, TX", "Boise, ID", "Reno, NV"];

fn create_candidate(id: usize) -> UserProfile {
    let sports = (0..3)
        .map(|i| SPORTS[(id + i * 5) % SPORTS.len()].to_string())
        .collect();

    UserProfile {
        user_id: id.to_string(),
        first_name: format!("User {}", id),
        last_name: "Bench".to_string(),
        user_data: UserData {
            birth_date: NaiveDate::from_ymd_opt(2000 + (id % 5) as i32, 1 + (id % 12) as u32, 1 + (id % 28) as u32)
                .unwrap(),
            gender: if id % 2 == 0 { Gender::Male } else { Gender::Female },
            sexual_preference: SexualPreference::from(if id % 3 == 0 { 12 } else { 2 }),
            student_type: StudentType::try_from((id % 3) as u32).unwrap(),
            year_code: YearCode((id % 5) as u32),
            year_explanation: None,
            major: if id % 4 == 0 { "Biology" } else { "Economics" }.to_string(),
            sports: Some(Factoid::new(sports)),
            calls_home: Some(Factoid::new(HOMETOWNS[id % HOMETOWNS.len()].to_string())),
            greek_life_organisation: (id % 6 == 0).then(|| Factoid::new("Alpha".to_string())),
            looking_for: Some(vec!["Long term".to_string(), "Friends".to_string()]),
        },
        factoid_data: FactoidData::default(),
    }
}

fn create_viewer() -> UserProfile {
    let mut viewer = create_candidate(1);
    viewer.user_id = "viewer".to_string();
    viewer.user_data.sexual_preference = SexualPreference::Males;
    viewer
}

fn bench_similarity(c: &mut Criterion) {
    let viewer = create_viewer();
    let candidate = create_candidate(10);

    c.bench_function("similarity", |b| {
        b.iter(|| similarity(black_box(&viewer), black_box(&candidate)));
    });
}

fn bench_normalize(c: &mut Criterion) {
    let entries: Vec<String> = SPORTS.iter().map(|s| s.to_string()).collect();

    c.bench_function("normalize_sports", |b| {
        b.iter(|| normalize(black_box(&entries)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_points();
    let viewer = create_viewer();

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<UserProfile> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("find_matches", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| matcher.find_matches(black_box(&viewer), black_box(&candidates), black_box(20)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_similarity, bench_normalize, bench_matching);

criterion_main!(benches);

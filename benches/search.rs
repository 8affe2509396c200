use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use rusty_phonebook::prelude::{MemStorage, NewRecord, Phonebook};

// Phonebook prepopulated with `n` records, half people and half
// organizations. MemStorage keeps the measurement free of disk I/O.
fn make_phonebook_with_n(n: usize) -> Phonebook {
    let mut phonebook =
        Phonebook::new(Box::new(MemStorage::new())).expect("phonebook not created");

    for i in 0..n {
        let new = if i % 2 == 0 {
            NewRecord::Person {
                name: format!("User{i}"),
                surname: format!("Surname{}", i % 97),
                birth_date: String::new(),
                gender: "F".to_string(),
                number: format!("+1 ({}) 555-01", i % 1000),
            }
        } else {
            NewRecord::Organization {
                name: format!("Company{i}"),
                address: format!("Main St. {}", i % 500),
                number: format!("{i}"),
            }
        };
        phonebook.add_record(new).expect("record not added");
    }
    phonebook
}

fn bench_phonebook(c: &mut Criterion) {
    for n in [1_000, 20_000] {
        let phonebook = make_phonebook_with_n(n);

        c.bench_function(&format!("list_{n}"), |b| {
            b.iter(|| black_box(phonebook.list()))
        });

        c.bench_function(&format!("search_hit_{n}"), |b| {
            b.iter(|| black_box(phonebook.search(black_box("surname42"))))
        });

        c.bench_function(&format!("search_miss_{n}"), |b| {
            b.iter(|| black_box(phonebook.search(black_box("zebra"))))
        });
    }
}

criterion_group!(benches, bench_phonebook);
criterion_main!(benches);

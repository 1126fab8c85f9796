// Copyright 2021 CoD Technologies Corp.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! decimal64 benchmark

use bencher::{benchmark_group, benchmark_main, black_box, Bencher};
use decimal64::{Decimal, HalfEvenRound};

type Dec = Decimal<4, HalfEvenRound>;

#[inline(always)]
fn parse(s: &str) -> Dec {
    s.parse().unwrap()
}

fn decimal_parse(bench: &mut Bencher) {
    bench.iter(|| {
        let _n = parse(black_box("1234567890.1234"));
    })
}

fn decimal_parse_permissive(bench: &mut Bencher) {
    bench.iter(|| {
        let _n = Dec::from_str_permissive(black_box("  1234567890.12345678  ")).unwrap();
    })
}

fn decimal_to_string(bench: &mut Bencher) {
    let val = parse("1234567890.1234");
    bench.iter(|| {
        let _s = black_box(&val).to_string();
    })
}

fn decimal_to_string_trailing_zeros(bench: &mut Bencher) {
    let val = parse("1234567890.12");
    bench.iter(|| {
        let _s = black_box(&val).to_string_trailing_zeros();
    })
}

fn decimal_add(bench: &mut Bencher) {
    let x = parse("1234567890.1234");
    let y = parse("987654321.4321");
    bench.iter(|| {
        let _n = black_box(x) + black_box(y);
    })
}

fn decimal_mul(bench: &mut Bencher) {
    let x = parse("12345.6789");
    let y = parse("87654.4321");
    bench.iter(|| {
        let _n = black_box(x) * black_box(y);
    })
}

fn decimal_div(bench: &mut Bencher) {
    let x = parse("12345.6789");
    let y = parse("3.33");
    bench.iter(|| {
        let _n = black_box(x) / black_box(y);
    })
}

fn decimal_from_float(bench: &mut Bencher) {
    bench.iter(|| {
        let _n = Dec::from_float_inexact(black_box(12345.6789_f64));
    })
}

fn decimal_to_integer(bench: &mut Bencher) {
    let val = parse("1234567890.5");
    bench.iter(|| {
        let _n = black_box(&val).to_integer();
    })
}

fn decimal_cast(bench: &mut Bencher) {
    let val = parse("1234567890.1234");
    bench.iter(|| {
        let _n = Decimal::<2, HalfEvenRound>::decimal_cast(black_box(val));
    })
}

benchmark_group!(
    decimal_benches,
    decimal_parse,
    decimal_parse_permissive,
    decimal_to_string,
    decimal_to_string_trailing_zeros,
    decimal_add,
    decimal_mul,
    decimal_div,
    decimal_from_float,
    decimal_to_integer,
    decimal_cast,
);
benchmark_main!(decimal_benches);

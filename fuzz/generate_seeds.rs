#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    let seeds: &[(&str, &[u8])] = &[
        ("pbm_ascii_2x2.pbm", b"P1\n2 2\n1 0\n0 1\n"),
        ("pbm_binary_9x2.pbm", b"P4\n9 2\n\x80\x80\xff\x00"),
        ("pgm_ascii_3x1.pgm", b"P2\n3 1\n15\n0 7 15\n"),
        ("pgm_binary_3x2.pgm", b"P5\n3 2\n255\n\x00\x40\x80\xc0\xff\x64"),
        ("ppm_ascii_2x1.ppm", b"P3\n2 1\n255\n255 0 0 0 0 255\n"),
        ("ppm_binary_2x2.ppm", b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80"),
        // malformed seeds for edge coverage
        ("truncated.ppm", b"P6\n100 100\n255\n\x00\x00"),
        ("huge_claim.ppm", b"P6\n100000 100000\n255\n"),
        ("huge_claim_ascii.pbm", b"P1\n100000 100000\n1 0\n"),
        ("short_ascii_row.pgm", b"P2\n3 1\n255\n1 2\n"),
        ("over_max.pgm", b"P2\n1 1\n10\n11\n"),
        ("zero_max.pgm", b"P5\n1 1\n0\n\x00"),
        ("bad_magic.pnm", b"P9\n1 1\n"),
    ];
    for (name, data) in seeds {
        fs::write(format!("{dir}/{name}"), data).unwrap();
    }

    println!("Generated {} seed files in {dir}/", seeds.len());
}

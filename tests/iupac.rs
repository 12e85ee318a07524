extern crate recut;

use recut::iupac::{expand, is_concrete, matches};

#[test]
fn test_basic_nucleotides() {
    // first
    assert!(matches(b'A', b'A'));
    assert!(!matches(b'A', b'C'));
    assert!(!matches(b'A', b'G'));
    assert!(!matches(b'A', b'T'));
    // last
    assert!(!matches(b'T', b'A'));
    assert!(!matches(b'T', b'C'));
    assert!(!matches(b'T', b'G'));
    assert!(matches(b'T', b'T'));
}

#[test]
fn test_degenerate_nucleotide() {
    assert!(!matches(b'N', b'@'));
    assert!(matches(b'N', b'A')); // A
    assert!(matches(b'N', b'B')); // C, G, T
    assert!(matches(b'N', b'C')); // C
    assert!(matches(b'N', b'D')); // A, G, T
    assert!(!matches(b'N', b'E'));
    assert!(!matches(b'N', b'['));
}

#[test]
fn test_non_nucleotide_values() {
    assert!(matches(b'I', b'I'));
    assert!(!matches(b'I', b'J'));
    assert!(matches(b'!', b'!'));
    assert!(!matches(b'!', b'?'));
}

#[test]
fn test_expand() {
    assert_eq!(expand(b'A'), Some(&b"A"[..]));
    assert_eq!(expand(b'r'), Some(&b"AGR"[..]));
    assert_eq!(expand(b'N'), Some(&b"ACGTRYSWKMBDHVN"[..]));
    assert_eq!(expand(b'X'), None);
    assert_eq!(expand(b'-'), None);
}

#[test]
fn test_is_concrete() {
    for &nuc in b"ACGTacgt" {
        assert!(is_concrete(nuc));
    }

    for &nuc in b"NRYnX-" {
        assert!(!is_concrete(nuc));
    }
}

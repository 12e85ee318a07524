// IUPAC nucleotide codes and the codes each of them accepts. An ambiguity code
// accepts itself and any code it is a superset of.
const CODES: [(u8, &[u8]); 15] = [
    (b'A', b"A"),
    (b'C', b"C"),
    (b'G', b"G"),
    (b'T', b"T"),
    (b'R', b"AGR"),
    (b'Y', b"CTY"),
    (b'S', b"GCS"),
    (b'W', b"ATW"),
    (b'K', b"GTK"),
    (b'M', b"ACM"),
    (b'B', b"CGTB"),
    (b'D', b"AGTD"),
    (b'H', b"ACTH"),
    (b'V', b"ACGV"),
    (b'N', b"ACGTRYSWKMBDHVN"),
];

lazy_static! {
    // One bit per accepted upper-case letter, indexed by query letter
    static ref ACCEPTS: [u32; 26] = {
        let mut masks = [0; 26];

        for (query, accepted) in CODES.iter() {
            masks[letter(*query)] = accepted.iter().fold(0, |mask, &c| mask | 1 << letter(c));
        }

        masks
    };
}

fn letter(nuc: u8) -> usize {
    (nuc - b'A') as usize
}

/// Checks if `candidate` is accepted by the (upper-case) IUPAC code `query`.
/// Other bytes only match themselves.
pub fn matches(query: u8, candidate: u8) -> bool {
    if query == candidate {
        true
    } else if query.is_ascii_uppercase() && candidate.is_ascii_uppercase() {
        ACCEPTS[letter(query)] & (1 << letter(candidate)) != 0
    } else {
        false
    }
}

/// Returns the (upper-case) nucleotide codes accepted by an IUPAC code.
pub fn expand(query: u8) -> Option<&'static [u8]> {
    let query = query.to_ascii_uppercase();

    CODES
        .iter()
        .find(|(code, _)| *code == query)
        .map(|(_, accepted)| *accepted)
}

/// True for A, C, G and T in either case.
pub fn is_concrete(query: u8) -> bool {
    matches!(query.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T')
}

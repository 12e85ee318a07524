extern crate recut;

use recut::enzyme::{CutType, Enzyme, NumberOfCuts};
use recut::errors::ErrorKind;
use recut::table::parse_enzymes;

const TABLE: &[u8] = b"# name\tsite\tlength\tncuts\tblunt\tc1\tc2\tc3\tc4
EcoRI\tGAATTC\t6\t2\t0\t1\t5\t0\t0
EcoRV\tGATATC\t6\t2\t1\t3\t3\t0\t0

BaeI\tACNNNNGTAYC\t11\t4\t0\t-11\t-16\t23\t18
";

fn table_error_line(data: &[u8]) -> usize {
    match parse_enzymes(data) {
        Err(err) => match err.kind() {
            ErrorKind::InvalidTable(line, _) => *line,
            other => panic!("unexpected error {:?}", other),
        },
        Ok(_) => panic!("malformed table was accepted"),
    }
}

#[test]
fn test_parse_enzymes() {
    let table = parse_enzymes(&b"EcoRI\tGAATTC\t6\t2\t0\t1\t5\t0\t0\n"[..]).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table["EcoRI"], Enzyme::with_cuts("EcoRI", b"GAATTC", 1, 5).unwrap());
}

#[test]
fn test_parse_enzymes_attributes() {
    let data = b"BglI\tgccnnnnnggc\t11\t2\t0\t7\t4\t0\t0\nEcoRV\tGATATC\t6\t2\t1\t3\t3\t0\t0\n";
    let table = parse_enzymes(&data[..]).unwrap();

    let bgli = &table["BglI"];
    assert_eq!(bgli.site.as_bytes(), b"GCCNNNNNGGC");
    assert_eq!(bgli.length, 11);
    assert_eq!(bgli.cuts, NumberOfCuts::Two);
    assert_eq!(bgli.cut_type, CutType::Sticky);
    assert_eq!((bgli.five_prime_cut, bgli.three_prime_cut), (7, 4));

    let ecorv = &table["EcoRV"];
    assert_eq!(ecorv.cut_type, CutType::Blunt);
    assert_eq!(ecorv.rebase_id, None);
}

#[test]
fn test_parse_enzymes_unknown_cuts() {
    let table = parse_enzymes(&b"AaaI\tCGGCCG\t6\t0\t0\t0\t0\t0\t0\n"[..]).unwrap();

    assert_eq!(table["AaaI"].cuts, NumberOfCuts::Unknown);
}

#[test]
fn test_parse_enzymes_duplicates() {
    let data = b"EcoRI\tGAATTC\t6\t2\t0\t1\t5\t0\t0\nEcoRI\tGGATCC\t6\t2\t0\t1\t5\t0\t0\n";
    let table = parse_enzymes(&data[..]).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table["EcoRI"].site.as_bytes(), b"GAATTC");
}

#[test]
fn test_parse_enzymes_skips_comments_and_blank_lines() {
    let data = b"# comment\n\nEcoRI\tGAATTC\t6\t2\t0\t1\t5\t0\t0\n\n";

    assert_eq!(parse_enzymes(&data[..]).unwrap().len(), 1);
}

#[test]
fn test_parse_enzymes_malformed_rows() {
    // Wrong number of columns
    assert_eq!(table_error_line(b"EcoRI\tGAATTC\t6\t2\t0\t1\t5\n"), 1);
    // Site length mismatch
    assert_eq!(table_error_line(b"# x\nEcoRI\tGAATTC\t7\t2\t0\t1\t5\t0\t0\n"), 2);
    // Unsupported number of cuts
    assert_eq!(table_error_line(&TABLE[..]), 5);
    // Invalid blunt flag
    assert_eq!(table_error_line(b"EcoRI\tGAATTC\t6\t2\tx\t1\t5\t0\t0\n"), 1);
    // Non-numeric cut
    assert_eq!(table_error_line(b"EcoRI\tGAATTC\t6\t2\t0\tone\t5\t0\t0\n"), 1);
    // Invalid site
    assert_eq!(table_error_line(b"EcoRI\tGAAXTC\t6\t2\t0\t1\t5\t0\t0\n"), 1);
}

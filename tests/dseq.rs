extern crate recut;

use recut::batch::RestrictionBatch;
use recut::dseq::{Dseq, Topology};
use recut::enzyme::Enzyme;

const EXAMPLE_SEQUENCE_1: &str = include_str!("data/example_1.seq");

fn strands(fragments: &[Dseq]) -> Vec<(String, String)> {
    fragments
        .iter()
        .map(|dseq| {
            (
                String::from_utf8_lossy(dseq.watson()).into_owned(),
                String::from_utf8_lossy(dseq.crick()).into_owned(),
            )
        })
        .collect()
}

#[test]
fn test_from_watson() {
    let dseq = Dseq::from_watson(b"ACGTNacgt", Topology::Linear);

    assert_eq!(dseq.watson(), b"ACGTNacgt");
    assert_eq!(dseq.crick(), b"TGCANtgca");
    assert_eq!(dseq.overhang(), 0);
    assert_eq!(dseq.len(), 9);
    assert!(!dseq.is_circular());
}

#[test]
fn test_cut_single_site() {
    let bsai = Enzyme::get("BsaI").unwrap();
    let dseq = Dseq::from_watson(b"NNGGTCTCNCACANNNNCTCT", Topology::Linear);
    let fragments = dseq.cut(&bsai).unwrap();

    assert_eq!(fragments.len(), 2);
    assert_eq!(
        strands(&fragments)[0],
        ("NNGGTCTCN".to_string(), "NNCCAGAGNGTGT".to_string())
    );
    assert_eq!(fragments[0].overhang(), 0);
    assert_eq!(fragments[1].overhang(), -4);
}

#[test]
fn test_cut_watson_and_crick_sites() {
    let bsai = Enzyme::get("BsaI").unwrap();
    let dseq = Dseq::from_watson(b"NNGGTCTCNCACANNNNCTCTNGAGACCNN", Topology::Linear);
    let fragments = dseq.cut(&bsai).unwrap();

    assert_eq!(
        strands(&fragments),
        vec![
            ("NNGGTCTCN".to_string(), "NNCCAGAGNGTGT".to_string()),
            ("CACANNNN".to_string(), "NNNNGAGA".to_string()),
            ("CTCTNGAGACCNN".to_string(), "NCTCTGGNN".to_string()),
        ]
    );

    let overhangs: Vec<isize> = fragments.iter().map(|dseq| dseq.overhang()).collect();
    assert_eq!(overhangs, vec![0, -4, -4]);
    assert!(fragments
        .iter()
        .all(|dseq| dseq.topology() == Topology::Linear));
}

#[test]
fn test_cut_circular_sequence() {
    let bsai = Enzyme::get("BsaI").unwrap();
    let dseq = Dseq::from_watson(b"AAAGGTCTCNCACANNNNCCAA", Topology::Circular);
    let fragments = dseq.cut(&bsai).unwrap();

    assert_eq!(fragments.len(), 2);
    assert_eq!(
        strands(&fragments)[0],
        ("AAAGGTCTCN".to_string(), "TTTCCAGAGNGTGT".to_string())
    );
    assert_eq!(fragments[1].topology(), Topology::Linear);
}

#[test]
fn test_cut_without_sites() {
    let ecori = Enzyme::get("EcoRI").unwrap();

    for &topology in &[Topology::Linear, Topology::Circular] {
        let dseq = Dseq::from_watson(b"ACGTACGTACGT", topology);
        let fragments = dseq.cut(&ecori).unwrap();

        assert_eq!(fragments, vec![dseq]);
    }
}

#[test]
fn test_cut_with_batch() {
    let batch = RestrictionBatch::new(vec![
        Enzyme::get("BsaI").unwrap(),
        Enzyme::get("EcoRI").unwrap(),
    ]);
    let dseq = Dseq::from_watson(
        b"AATAGACAGAATTCGATTCACCAGAGGTCTCATAGACAAACCAGAGAAAAAAAA",
        Topology::Linear,
    );
    let fragments = dseq.cut(&batch).unwrap();

    assert_eq!(
        strands(&fragments),
        vec![
            ("AATAGACAG".to_string(), "TTATCTGTCTTAA".to_string()),
            (
                "AATTCGATTCACCAGAGGTCTCA".to_string(),
                "GCTAAGTGGTCTCCAGAGTATCT".to_string()
            ),
            (
                "TAGACAAACCAGAGAAAAAAAA".to_string(),
                "GTTTGGTCTCTTTTTTTT".to_string()
            ),
        ]
    );
}

#[test]
fn test_cut_fragments_cover_sequence() {
    let batch = RestrictionBatch::new(vec![
        Enzyme::get("BsaI").unwrap(),
        Enzyme::get("EcoRI").unwrap(),
        Enzyme::get("BamHI").unwrap(),
    ]);
    let dseq = Dseq::from_watson(EXAMPLE_SEQUENCE_1.as_bytes(), Topology::Linear);
    let fragments = dseq.cut(&batch).unwrap();

    assert_eq!(fragments.len(), 5);

    let watson: Vec<u8> = fragments.iter().flat_map(|v| v.watson().to_vec()).collect();
    let crick: Vec<u8> = fragments.iter().flat_map(|v| v.crick().to_vec()).collect();
    assert_eq!(watson, dseq.watson());
    assert_eq!(crick, dseq.crick());

    // Repeated digests give identical fragments
    assert_eq!(dseq.cut(&batch).unwrap(), fragments);
}

#[test]
fn test_cut_clamped_sites_give_empty_fragments() {
    let bsai = Enzyme::get("BsaI").unwrap();
    let dseq = Dseq::from_watson(b"GAGACCGGTCTCAAAAAAAGAGACCAAGGTCTC", Topology::Circular);
    let fragments = dseq.cut(&bsai).unwrap();

    assert_eq!(
        strands(&fragments),
        vec![
            ("".to_string(), "".to_string()),
            ("GAGACCGGTCTCA".to_string(), "CTCTGGCCAGAGTTTTT".to_string()),
            ("A".to_string(), "T".to_string()),
            (
                "AAAAAGAGACCAAGGTCTC".to_string(),
                "TCTCTGGTTCCAGAG".to_string()
            ),
            ("".to_string(), "".to_string()),
        ]
    );

    let overhangs: Vec<isize> = fragments.iter().map(|dseq| dseq.overhang()).collect();
    assert_eq!(overhangs, vec![0, 0, -4, -4, 0]);

    let watson: Vec<u8> = fragments.iter().flat_map(|v| v.watson().to_vec()).collect();
    assert_eq!(watson, dseq.watson());
}

#[test]
fn test_display() {
    let dseq = Dseq::new(b"AATT", b"TTAAGC", 2, Topology::Linear);
    assert_eq!(format!("{}", dseq), "  AATT\nTTAAGC");

    let dseq = Dseq::new(b"CACANNNN", b"NNNNGAGA", -4, Topology::Linear);
    assert_eq!(format!("{}", dseq), "CACANNNN\n    NNNNGAGA");
}

#[test]
fn test_topology_display() {
    assert_eq!(Topology::Linear.to_string(), "linear");
    assert_eq!(Topology::Circular.to_string(), "circular");
}
